/// Format a float as a dollar amount with thousands separators: $1,234.56
pub fn money(val: f64) -> String {
    let sign = if val < 0.0 { "-" } else { "" };
    let cents = format!("{:.2}", val.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    format!("{sign}${grouped}.{dec_part}")
}

/// Plain two-decimal amount for a ledger cell: 1234.56 (no symbol, no grouping).
pub fn amount_cell(val: f64) -> String {
    format!("{val:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(1234.56), "$1,234.56");
        assert_eq!(money(-500.00), "-$500.00");
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(1000000.99), "$1,000,000.99");
        assert_eq!(money(42.10), "$42.10");
    }

    #[test]
    fn test_amount_cell() {
        assert_eq!(amount_cell(1234.5), "1234.50");
        assert_eq!(amount_cell(0.0), "0.00");
        assert_eq!(amount_cell(99.999), "100.00");
    }
}
