//! Text input: blank-line-delimited shape blocks and name lists.

use crate::shape::Shape;
use u_loading_core::Result;

/// Parses blank-line-delimited shape blocks.
///
/// Every block is parsed and support-checked; the first bad block aborts
/// the whole batch. Text without any block yields an empty list.
pub fn parse_blocks(text: &str) -> Result<Vec<Shape>> {
    let mut shapes = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in text.lines().chain(std::iter::once("")) {
        if !line.trim().is_empty() {
            block.push(line);
            continue;
        }
        if block.is_empty() {
            continue;
        }

        let shape = Shape::parse_validated(&block.join("\n")).map_err(|err| {
            log::warn!("Rejected shape block {}: {}", shapes.len() + 1, err);
            err
        })?;
        shapes.push(shape);
        block.clear();
    }

    log::debug!("Parsed {} shape block(s)", shapes.len());
    Ok(shapes)
}

/// Splits a list of catalog names separated by whitespace or commas.
pub fn parse_names(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
