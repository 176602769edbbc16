fn with_thousands(whole: i64) -> String {
    let digits = whole.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value
pub fn format_currency(value: f64) -> String {
    let abs_value = value.abs();
    let mut dollars = abs_value as i64;
    let mut cents = ((abs_value - dollars as f64) * 100.0).round() as i64;
    if cents == 100 {
        dollars += 1;
        cents = 0;
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}.{cents:02}", with_thousands(dollars))
}

/// Format a currency value without cents (shorter format for tight columns)
pub fn format_currency_short(value: f64) -> String {
    let dollars = value.abs().round() as i64;
    let sign = if value < 0.0 && dollars > 0 { "-" } else { "" };
    format!("{sign}${}", with_thousands(dollars))
}

/// Format a value that is already a percentage, e.g. ROI
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format a rate in `[0, 1]` as a percentage
pub fn format_rate(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Format an optional month count, e.g. a payback period
pub fn format_months(value: Option<f64>) -> String {
    match value {
        Some(months) => format!("{months:.1} months"),
        None => "n/a".to_string(),
    }
}
