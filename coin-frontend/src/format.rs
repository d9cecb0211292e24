//! Display helpers for the coin page.
//!
//! Numbers coming from the coin API are rendered the way the dashboard has
//! always shown them: integral values without a fractional part, grouped in
//! thousands, and market caps shortened to millions by cutting the string.

/// Renders `value` like JavaScript's `Number#toString`: plain decimals in
/// `[1e-6, 1e21)`, exponent form (`1e+21`, `1.5e-7`) outside it.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{:e}", value);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{mantissa}e+{power}")
            }
            _ => exp,
        };
    }
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Inserts `,` every three digits of the integer part of a decimal string.
/// Anything that isn't a plain decimal is returned unchanged.
pub fn number_with_commas(raw: &str) -> String {
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

pub fn format_number(value: f64) -> String {
    number_with_commas(&js_number(value))
}

/// Market cap in "millions": the last six characters of the number's string
/// form are dropped, not divided out. Caps below one million collapse to "M".
pub fn market_cap_display(market_cap: f64) -> String {
    let raw = js_number(market_cap);
    let keep = raw.chars().count().saturating_sub(6);
    let truncated: String = raw.chars().take(keep).collect();
    format!("{}M", number_with_commas(&truncated))
}

/// First sentence of a description, split on the literal `". "`.
pub fn first_sentence(description: Option<&str>) -> String {
    match description {
        Some(text) if !text.is_empty() => {
            let first = text.split(". ").next().unwrap_or(text);
            format!("{first}.")
        }
        _ => String::new(),
    }
}

pub fn signed_percent(change: f64) -> String {
    let sign = if change > 0.0 { "+" } else { "" };
    format!("{sign}{change:.2}%")
}
