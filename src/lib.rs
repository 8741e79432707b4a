/*!
 * # hanzi-sheets - LaTeX fragments for Chinese stroke-order practice sheets
 *
 * A Rust library that builds the LaTeX pieces of a vocabulary practice sheet.
 * Everything here is plain string construction: no files are read or written
 * and no LaTeX is compiled.
 *
 * ## Features
 *
 * - Three-column word headers with numbered translations
 * - Stroke-order image rows laid out as tikz chains
 * - Word groups combining a header with the rows for each character
 * - Stroke SVG file naming by codepoint
 * - Vocabulary records with level, grammar, text and translation filters
 *
 * ## Architecture
 *
 * - `latex`: fragment builders:
 *   - `latex::header`: word header row
 *   - `latex::strokes`: stroke sequence rows
 *   - `latex::group`: header plus stroke rows
 * - `glyph`: stroke SVG file names
 * - `vocabulary`: word records and filters
 * - `sheet_config`: stroke row layout settings
 * - `errors`: custom error types
 *
 * Inputs are inserted into LaTeX verbatim; callers escape reserved
 * characters themselves if they need to.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

#![allow(clippy::uninlined_format_args)]

pub mod errors;
pub mod glyph;
pub mod latex;
pub mod sheet_config;
pub mod vocabulary;

pub use errors::{GlyphError, SheetError, VocabularyError};
pub use latex::{format_group, format_header, format_stroke_sequence, format_translations};
pub use sheet_config::StrokeLayout;
pub use vocabulary::{Level, WordEntry, WordFilter};
