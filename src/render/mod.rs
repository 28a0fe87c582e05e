//! Page rendering.
//!
//! A render pass takes the current [`Navigator`] explicitly and shows only the
//! block group of its phase. [`html`] produces the served page, [`text`] the
//! terminal view used by `logbook show`.

pub mod html;
pub mod text;

use crate::content;
use crate::models::Block;
use crate::nav::Navigator;

/// The blocks visible for the navigator's current selection.
pub fn view(nav: &Navigator) -> &'static [Block] {
    content::blocks(nav.current())
}

/// Human-readable byte count, e.g. `1.5 KiB`.
pub(crate) fn format_size(len: usize) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];
    if len < 1024 {
        return format!("{} B", len);
    }
    let mut size = len as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in UNITS[1..].iter().copied() {
        if size < 1024.0 {
            break;
        }
        size /= 1024.0;
        unit = next;
    }
    format!("{:.1} {}", size, unit)
}
