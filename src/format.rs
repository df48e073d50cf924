//! Number formatting for dashboard output
//!
//! All functions are pure and take the locale explicitly.

/// Separators and currency symbol used when rendering numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLocale {
    pub currency_symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl NumberLocale {
    /// US English with US dollars
    pub fn en_us() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            thousands_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::en_us()
    }
}

/// Currency with two decimals, e.g. `$1,234.50` or `-$3.10`
pub fn format_currency(value: f64, locale: &NumberLocale) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!(
        "{}{}{}",
        sign,
        locale.currency_symbol,
        format_grouped(value.abs(), 2, locale)
    )
}

/// Fraction as a percentage with one decimal: 0.025 -> `2.5%`
pub fn format_percentage(fraction: f64, locale: &NumberLocale) -> String {
    let pct = fraction * 100.0;
    let sign = if pct < 0.0 { "-" } else { "" };
    format!("{}{}%", sign, format_grouped(pct.abs(), 1, locale))
}

/// Plain index value with two decimals
pub fn format_index(value: f64) -> String {
    format!("{:.2}", value)
}

/// Trend arrow and magnitude: `▲ 1.23%` for non-negative, `▼ 1.23%` otherwise
pub fn format_trend(trend: f64) -> String {
    let arrow = if trend >= 0.0 { '▲' } else { '▼' };
    format!("{} {:.2}%", arrow, trend.abs())
}

/// Format a metric card value according to its unit
///
/// `$` renders currency, `%` treats the value as already in percent,
/// anything else renders two decimals followed by the unit (if any).
pub fn format_card_value(value: f64, unit: &str, locale: &NumberLocale) -> String {
    match unit {
        "$" => format_currency(value, locale),
        "%" => format_percentage(value / 100.0, locale),
        "" => format_index(value),
        other => format!("{} {}", format_index(value), other),
    }
}

fn format_grouped(value: f64, decimals: usize, locale: &NumberLocale) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return "∞".to_string();
    }

    let raw = format!("{:.*}", decimals, value);
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(raw.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(locale.thousands_separator);
        }
        grouped.push(ch);
    }

    if let Some(frac) = frac_part {
        grouped.push(locale.decimal_separator);
        grouped.push_str(frac);
    }
    grouped
}
