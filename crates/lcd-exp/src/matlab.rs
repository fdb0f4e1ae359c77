use lcd_code::Code;

/// Matlab script rebuilding the generator over GF(2^2) and the rank of its
/// Hermitian Gram product.
///
/// Matlab's `gf(.., 2)` uses the same integer labels as the digits here:
/// `2` is a root of `x^2 + x + 1` and `3` its square.
pub fn render_matlab(code: &Code) -> String {
    let rows: Vec<String> = code
        .generator()
        .digit_rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    format!(
        "% {}\nG = gf([{}], 2);\nM = (G.^2) * G.';\nrank(M)\n",
        code.parameters(),
        rows.join("; ")
    )
}
