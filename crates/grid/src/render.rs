//! ASCII rendering of loaded containers.

use crate::container::Container;
use crate::result::AllocationResult;

/// Frame character used for walls and floor.
pub const FRAME: char = '+';

/// Renders one container, top row first, framed by `+`.
pub fn render_container(container: &Container) -> String {
    let width = container.width();
    let mut out = String::with_capacity((width + 3) * (container.height() + 1));

    for y in (0..container.height()).rev() {
        out.push(FRAME);
        out.push_str(&container.row_text(y));
        out.push(FRAME);
        out.push('\n');
    }
    out.extend(std::iter::repeat(FRAME).take(width + 2));
    out.push('\n');
    out
}

/// Renders every container of a result, separated by blank lines.
pub fn render(result: &AllocationResult) -> String {
    result
        .containers()
        .iter()
        .map(render_container)
        .collect::<Vec<_>>()
        .join("\n")
}
