//! Currency formatting for display.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A fixed currency display convention.
///
/// The default is Brazilian real as rendered by the pt-BR locale:
/// `R$`, a no-break space, `.` between thousands and `,` before the cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// ISO 4217 code, informational only.
    pub currency_code: String,
    /// Symbol printed before the amount.
    pub symbol: String,
    /// Text between the symbol and the digits.
    #[serde(default)]
    pub symbol_spacing: String,
    /// Separator between groups of three integer digits.
    pub group_separator: String,
    /// Separator before the fractional digits.
    pub decimal_separator: String,
    /// Number of fractional digits shown.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

fn default_decimal_places() -> u32 {
    2
}

impl CurrencyFormat {
    /// Brazilian real, pt-BR grouping: `R$ 1.234,50`.
    pub fn brl() -> Self {
        Self {
            currency_code: "BRL".to_string(),
            symbol: "R$".to_string(),
            symbol_spacing: "\u{a0}".to_string(),
            group_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            decimal_places: 2,
        }
    }

    /// US dollar, en-US grouping: `$1,234.50`.
    pub fn usd() -> Self {
        Self {
            currency_code: "USD".to_string(),
            symbol: "$".to_string(),
            symbol_spacing: String::new(),
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            decimal_places: 2,
        }
    }

    /// Renders `amount` in this convention.
    ///
    /// Amounts are rounded half away from zero. Values that round to zero
    /// never carry a minus sign, so `-0.001` renders as `R$ 0,00`. This
    /// differs from `Intl.NumberFormat`'s default sign display, which keeps
    /// the sign and prints `-R$ 0,00`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricing_engine::calculation::CurrencyFormat;
    /// use rust_decimal::Decimal;
    ///
    /// let usd = CurrencyFormat::usd();
    /// assert_eq!(usd.format(Decimal::new(-98765432, 2)), "-$987,654.32");
    /// ```
    pub fn format(&self, amount: Decimal) -> String {
        let rounded =
            amount.round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = format!("{:.*}", self.decimal_places as usize, rounded.abs());

        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + self.symbol.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&self.symbol_spacing);
        out.push_str(&group_digits(integer, &self.group_separator));
        if let Some(fraction) = fraction {
            out.push_str(&self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::brl()
    }
}

fn group_digits(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats `amount` with the default (BRL) convention.
///
/// # Examples
///
/// ```
/// use pricing_engine::calculation::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(12345, 1)), "R$\u{a0}1.234,50");
/// ```
pub fn format_money(amount: Decimal) -> String {
    CurrencyFormat::default().format(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_money_groups_thousands_with_two_decimals() {
        assert_eq!(format_money(dec("1234.5")), "R$\u{a0}1.234,50");
    }

    #[test]
    fn test_format_money_small_amounts() {
        assert_eq!(format_money(dec("0")), "R$\u{a0}0,00");
        assert_eq!(format_money(dec("7")), "R$\u{a0}7,00");
        assert_eq!(format_money(dec("999.999")), "R$\u{a0}1.000,00");
    }

    #[test]
    fn test_format_money_rounds_half_away_from_zero() {
        assert_eq!(format_money(dec("2.345")), "R$\u{a0}2,35");
        assert_eq!(format_money(dec("-2.345")), "-R$\u{a0}2,35");
    }

    #[test]
    fn test_format_money_large_amounts() {
        assert_eq!(format_money(dec("1234567.891")), "R$\u{a0}1.234.567,89");
        assert_eq!(format_money(dec("100000")), "R$\u{a0}100.000,00");
    }

    #[test]
    fn test_format_money_negative_amount() {
        assert_eq!(format_money(dec("-1234.5")), "-R$\u{a0}1.234,50");
    }

    #[test]
    fn test_negative_amount_rounding_to_zero_has_no_sign() {
        assert_eq!(format_money(dec("-0.001")), "R$\u{a0}0,00");
    }

    #[test]
    fn test_default_selling_price_renders_to_cents() {
        assert_eq!(format_money(dec("18.2996625")), "R$\u{a0}18,30");
    }

    #[test]
    fn test_usd_convention() {
        assert_eq!(CurrencyFormat::usd().format(dec("1234.5")), "$1,234.50");
    }

    #[test]
    fn test_zero_decimal_places_has_no_separator() {
        let mut format = CurrencyFormat::usd();
        format.decimal_places = 0;
        assert_eq!(format.format(dec("1234.5")), "$1,235");
    }

    #[test]
    fn test_deserialize_format_defaults() {
        let yaml = r#"
currency_code: EUR
symbol: "€"
group_separator: "."
decimal_separator: ","
"#;
        let format: CurrencyFormat = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(format.decimal_places, 2);
        assert_eq!(format.symbol_spacing, "");
        assert_eq!(format.format(dec("1500")), "€1.500,00");
    }
}
