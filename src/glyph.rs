/*!
 * Stroke SVG file naming.
 *
 * Still images from the stroke-order data set are named after the decimal
 * codepoint of the character they depict: `20013-still.svg` is `中`.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::GlyphError;

/// Leading decimal codepoint followed by a dash
static SVG_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)-").expect("Invalid glyph name regex")
});

/// Still SVG file name for one character
pub fn still_svg_name(hanzi: char) -> String {
    format!("{}-still.svg", u32::from(hanzi))
}

/// Still SVG file names for every character of a word, in order
pub fn still_svg_names(word: &str) -> Vec<String> {
    word.chars().map(still_svg_name).collect()
}

/// Recover the character from a stroke SVG file name
pub fn char_from_svg_name(name: &str) -> Result<char, GlyphError> {
    let captures = SVG_NAME_REGEX.captures(name).ok_or_else(|| {
        debug!("Rejecting glyph name without codepoint: {}", name);
        GlyphError::InvalidFileName(name.to_string())
    })?;

    let codepoint: u32 = captures[1]
        .parse()
        .map_err(|_| GlyphError::InvalidFileName(name.to_string()))?;

    char::from_u32(codepoint).ok_or(GlyphError::InvalidCodepoint(codepoint))
}
