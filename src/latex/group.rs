/*!
 * Word groups: one header row followed by the stroke rows of each character.
 */

use crate::latex::header::format_header;
use crate::latex::strokes::format_stroke_sequence;
use crate::sheet_config::StrokeLayout;

/// Separator between the header and each stroke sequence
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Format a full word group: the header row, then one stroke sequence per character.
///
/// `stroke_counts[i]` is the number of stroke steps available for the i-th
/// character of `word`. Characters without a count get an empty sequence.
pub fn format_group(
    pronunciation: &str,
    word: &str,
    translation: &str,
    stroke_counts: &[usize],
    layout: &StrokeLayout,
) -> String {
    let mut blocks = vec![format_header(pronunciation, word, translation)];

    for (i, hanzi) in word.chars().enumerate() {
        let count = stroke_counts.get(i).copied().unwrap_or(0);
        let mut label = [0u8; 4];
        blocks.push(format_stroke_sequence(hanzi.encode_utf8(&mut label), count, layout));
    }

    blocks.join(BLOCK_SEPARATOR)
}
