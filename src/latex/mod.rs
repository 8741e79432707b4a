/*!
 * LaTeX fragment builders for practice sheets.
 *
 * - `header`: three-column word header with numbered translations
 * - `strokes`: stroke-order image rows
 * - `group`: header plus stroke rows for one word
 */

pub mod group;
pub mod header;
pub mod strokes;

pub use group::format_group;
pub use header::{format_header, format_translations};
pub use strokes::{format_stroke_sequence, step_image_name};
