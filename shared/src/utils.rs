//! Display-formatting helpers shared by the engine's log lines and the GUI's
//! KPI cards. Formatting only; parsing lives in the engine's normalizer.

/// Formats a value with thousands separators and no decimal places,
/// e.g. `1234567.8` -> `"1,234,568"`.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded.is_sign_negative() && rounded != 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{}", out)
    } else {
        out
    }
}

/// Formats a percentage with two decimals and an explicit sign for positive
/// values, e.g. `11.111` -> `"+11.11%"`.
pub fn format_signed_pct(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Formats a percentage with two decimals and no forced sign.
pub fn format_pct(value: f64) -> String {
    format!("{:.2}%", value)
}
