/*!
 * Word header row for practice sheets.
 *
 * A header is a three-column row: pronunciation on the left, the characters
 * in the middle at a large size, and the translations on the right. Inputs
 * are inserted verbatim; LaTeX special characters are not escaped.
 */

use log::debug;

/// Separator between translations in a single translation string
pub const TRANSLATION_SEPARATOR: &str = "; ";

/// LaTeX line break used between numbered translations
pub const LINE_BREAK: &str = r"\\";

/// Render a translation string for the right-hand column.
///
/// Several translations separated by `"; "` become a numbered list joined
/// with `\\`. A single translation is returned unchanged.
pub fn format_translations(translation: &str) -> String {
    let translations: Vec<&str> = translation.split(TRANSLATION_SEPARATOR).collect();

    if translations.len() == 1 {
        return translation.to_string();
    }

    debug!("Numbering {} translations", translations.len());

    translations
        .iter()
        .enumerate()
        .map(|(i, trans)| format!("{}. {}", i + 1, trans))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Format the header row for one word.
pub fn format_header(pronunciation: &str, characters: &str, translation: &str) -> String {
    let formatted_trans = format_translations(translation);

    let mut latex = String::with_capacity(
        TEMPLATE_LEN + pronunciation.len() + characters.len() + formatted_trans.len(),
    );

    latex.push_str("\\noindent\n");
    latex.push_str("\\begin{minipage}[t]{0.25\\linewidth}\n");
    latex.push_str("\\raggedright\n");
    latex.push_str("{\\Large ");
    latex.push_str(pronunciation);
    latex.push_str("}\n");
    latex.push_str("\\end{minipage}\n");
    latex.push_str("\\hfill\n");
    latex.push_str("\\begin{minipage}[t]{0.35\\linewidth}\n");
    latex.push_str("\\centering\n");
    latex.push_str("{\\fontsize{32pt}{36pt}\\selectfont ");
    latex.push_str(characters);
    latex.push_str("}\n");
    latex.push_str("\\end{minipage}\n");
    latex.push_str("\\hfill\n");
    latex.push_str("\\begin{minipage}[t]{0.35\\linewidth}\n");
    latex.push_str("\\raggedright\n");
    latex.push_str("{\\large\\parbox[t]{\\linewidth}{");
    latex.push_str(&formatted_trans);
    latex.push_str("}}\n");
    latex.push_str("\\end{minipage}\n");
    latex.push_str("\\vspace{1em}\n");

    latex
}

/// Byte length of the header template without any inserted text
pub const TEMPLATE_LEN: usize = 306;
