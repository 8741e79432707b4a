/*!
 * Stroke-order image rows.
 *
 * Each character gets one or more tikz chains of step images, where step `n`
 * shows the first `n` strokes drawn. Image files are referenced by name only;
 * rendering them is the caller's job.
 */

use log::{debug, warn};

use crate::sheet_config::StrokeLayout;

/// File name of the image for one stroke step, e.g. `中_step_03.png`
pub fn step_image_name(label: &str, step: usize) -> String {
    format!("{}_step_{:02}.png", label, step)
}

/// Format the stroke sequence for a character with `total_strokes` steps.
pub fn format_stroke_sequence(label: &str, total_strokes: usize, layout: &StrokeLayout) -> String {
    let total = if total_strokes > layout.max_strokes {
        warn!(
            "Capping {} strokes for '{}' at {}",
            total_strokes, label, layout.max_strokes
        );
        layout.max_strokes
    } else {
        total_strokes
    };

    // A zero width would never terminate a row
    let per_line = layout.strokes_per_line.max(1);
    let num_lines = total.div_ceil(per_line);
    debug!("Laying out {} strokes for '{}' in {} rows", total, label, num_lines);

    let mut steps: Vec<String> = Vec::with_capacity(total + num_lines * 3 + 1);

    for line in 0..num_lines {
        steps.push(r"\begin{tikzpicture}[start chain=going right,node distance=0pt]".to_string());

        let start_stroke = line * per_line + 1;
        let end_stroke = ((line + 1) * per_line).min(total);

        for step in start_stroke..=end_stroke {
            steps.push(format!(
                r"\node[draw,on chain,inner sep=0pt,outer sep=0pt,join] {{\includegraphics[width={}]{{{}}}}};",
                layout.image_width,
                step_image_name(label, step)
            ));
        }

        steps.push(r"\end{tikzpicture}".to_string());

        if line + 1 < num_lines {
            steps.push(format!(r"\\[{}]", layout.row_spacing));
        }
    }

    steps.push(format!(r"\vspace{{{}}}", layout.trailing_spacing));

    steps.join("\n")
}
