// src/utils.rs
use crate::analysis::PriceRange;

/// Whole units with `,` between thousands, e.g. `50000.4` -> `50,000`.
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_currency(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, group_thousands(value))
}

pub fn format_price_range(symbol: &str, range: &PriceRange) -> String {
    format!(
        "{} – {}",
        format_currency(symbol, range.min),
        format_currency(symbol, range.max)
    )
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(50000.0), "50,000");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(-1234.0), "-1,234");
    }

    #[test]
    fn rounds_to_whole_units() {
        assert_eq!(group_thousands(59999.5), "60,000");
        assert_eq!(group_thousands(75000.49), "75,000");
        assert_eq!(group_thousands(-0.2), "0");
    }

    #[test]
    fn formats_range_with_symbol() {
        let range = PriceRange { min: 50000.0, max: 75000.0 };
        assert_eq!(format_price_range("€", &range), "€50,000 – €75,000");
        assert_eq!(format_price_range("$", &range), "$50,000 – $75,000");
    }

    #[test]
    fn formats_percentages() {
        assert_eq!(format_percent(82.0), "82%");
        assert_eq!(format_percent(82.5), "82.5%");
        assert_eq!(format_percent(0.0), "0%");
    }
}
