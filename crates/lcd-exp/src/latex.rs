use std::fmt::Write;

use lcd_code::Code;

/// LaTeX symbol for a field digit.
pub fn symbol(digit: u8) -> &'static str {
    match digit {
        0 => "0",
        1 => "1",
        2 => r"\omega",
        _ => r"\bar{\omega}",
    }
}

fn monomial(variable: char, exponent: usize) -> String {
    match exponent {
        0 => String::new(),
        1 => variable.to_string(),
        _ => format!("{variable}^{{{exponent}}}"),
    }
}

/// Typesets the generator matrix, the weight table and `W(x,y)`.
pub fn render_latex(code: &Code) -> String {
    let n = code.parameters().n();
    let mut out = String::new();

    let _ = writeln!(out, "% {}", code.parameters());
    out.push_str("\\[\nG = \\begin{pmatrix}\n");
    let rows = code.generator().digit_rows();
    for (index, row) in rows.iter().enumerate() {
        let cells: Vec<&str> = row.iter().map(|&digit| symbol(digit)).collect();
        out.push_str(&cells.join(" & "));
        if index + 1 < rows.len() {
            out.push_str(r" \\");
        }
        out.push('\n');
    }
    out.push_str("\\end{pmatrix}\n\\]\n\n");

    out.push_str("\\begin{tabular}{c|c}\n$w$ & $A_w$ \\\\\n\\hline\n");
    for (weight, count) in code.weight_enumerator().nonzero() {
        let _ = writeln!(out, "{weight} & {count} \\\\");
    }
    out.push_str("\\end{tabular}\n\n");

    let terms: Vec<String> = code
        .weight_enumerator()
        .nonzero()
        .map(|(weight, count)| {
            let coefficient = if count == 1 {
                String::new()
            } else {
                count.to_string()
            };
            let body = [monomial('x', n - weight), monomial('y', weight)]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            match (coefficient.is_empty(), body.is_empty()) {
                (_, true) => count.to_string(),
                (true, false) => body,
                (false, false) => format!("{coefficient} {body}"),
            }
        })
        .collect();
    let _ = writeln!(out, "\\[\nW(x,y) = {}\n\\]", terms.join(" + "));
    out
}
