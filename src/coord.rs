//! Vertex notation for cells, e.g. `H8`.
//!
//! Columns are letters starting at `A` (no letter is skipped), rows are
//! 1-based numbers counted from the top row. `A1` is `(0, 0)`.

use crate::board::Point;

/// Parse a vertex for a `size`x`size` board. Case-insensitive.
/// Returns `None` for malformed or off-board input.
pub fn parse_vertex(s: &str, size: usize) -> Option<Point> {
    let s = s.trim();
    let mut chars = s.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let col = (letter as u8 - b'A') as usize;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    let pt = (row - 1, col);
    (pt.0 < size && pt.1 < size).then_some(pt)
}

/// Format a cell as a vertex. Columns past `Z` are not representable.
pub fn format_vertex((row, col): Point) -> String {
    let c = (b'A' + col as u8) as char;
    format!("{c}{}", row + 1)
}
