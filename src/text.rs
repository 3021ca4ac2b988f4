//! Text assembly: arranging mapped characters into rows and joining them.

use crate::mapping::char_for_pixel;
use crate::region::RegionGrid;

/// Assemble the region grid into text rows.
///
/// One row string is built per outer region entry. Alternate rows are then
/// dropped (first kept, second dropped, and so on) to compensate for
/// monospace glyphs being roughly twice as tall as they are wide. The
/// returned list always ends with one empty string, the flush of the row
/// builder; an empty region grid therefore yields `[""]`.
///
/// # Arguments
/// * `regions` - The averaged region grid
/// * `palette` - Character ramp ordered densest to sparsest
/// * `append_newline` - Embed a terminating `\n` in each row string.
///   Off by default; the joined form relies on [`join_rows`] instead.
pub fn assemble_rows(regions: &RegionGrid, palette: &[char], append_newline: bool) -> Vec<String> {
    let mut rows = Vec::with_capacity(regions.outer_len() / 2 + 2);
    let mut builder = String::new();
    let mut keep = true;

    for region_row in regions.outer() {
        for region in region_row {
            builder.push(char_for_pixel(region.average, palette));
        }

        if append_newline {
            builder.push('\n');
        }

        // Vertical compression: keep, drop, keep, drop...
        if keep {
            rows.push(builder.clone());
            keep = false;
        } else {
            keep = true;
        }

        builder.clear();
    }

    rows.push(builder);
    rows
}

/// Join assembled rows into a single string with line breaks.
pub fn join_rows(rows: &[String]) -> String {
    rows.join("\n")
}
