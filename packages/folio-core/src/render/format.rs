//! Number formatting for report output.

/// Format with two decimals and thousands separators, e.g. `-1,234.50`.
pub fn format_grouped(value: f64) -> String {
    let plain = format!("{:.2}", value);
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };

    // NaN and infinities have no fractional part to split on
    let Some((int_part, frac_part)) = digits.split_once('.') else {
        return plain;
    };

    format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
}

/// Dollar amount, e.g. `$1,234.50` or `$-1,234.50`.
pub fn format_currency(value: f64) -> String {
    format!("${}", format_grouped(value))
}

/// Percentage with two decimals, e.g. `16.36%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
