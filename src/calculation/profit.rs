//! Profit summary calculation.
//!
//! The realised margin differs from the target margin once fees, discounts
//! and tax are layered on, so it is reported separately.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::ProfitSummary;

use super::currency::CurrencyFormat;

/// Computes the profit per unit and the margin it represents.
///
/// `amount = selling_price - base_cost` and
/// `margin_percent = amount / selling_price * 100`, rounded to two decimals.
/// The margin is `None` when the selling price is zero.
///
/// # Errors
///
/// Returns `CalculationError` when the margin overflows, which happens for
/// selling prices vanishingly close to zero.
///
/// # Examples
///
/// ```
/// use pricing_engine::calculation::{calculate_profit, CurrencyFormat};
/// use rust_decimal::Decimal;
///
/// let profit =
///     calculate_profit(Decimal::new(125, 0), Decimal::ONE_HUNDRED, &CurrencyFormat::brl()).unwrap();
/// assert_eq!(profit.amount, Decimal::new(25, 0));
/// assert_eq!(profit.margin_percent, Some(Decimal::new(20, 0)));
/// ```
pub fn calculate_profit(
    selling_price: Decimal,
    base_cost: Decimal,
    format: &CurrencyFormat,
) -> EngineResult<ProfitSummary> {
    let amount = selling_price
        .checked_sub(base_cost)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "profit overflowed subtracting cost {} from price {}",
                base_cost, selling_price
            ),
        })?;

    let margin_percent = if selling_price.is_zero() {
        None
    } else {
        let margin = amount
            .checked_div(selling_price)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "profit margin overflowed for selling price {}",
                    selling_price
                ),
            })?;
        Some(margin.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    };

    Ok(ProfitSummary {
        amount,
        margin_percent,
        formatted_amount: format.format(amount),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_profit_for_default_calculator_price() {
        let profit =
            calculate_profit(dec("18.2996625"), dec("10"), &CurrencyFormat::brl()).unwrap();

        assert_eq!(profit.amount, dec("8.2996625"));
        assert_eq!(profit.margin_percent, Some(dec("45.35")));
        assert_eq!(profit.formatted_amount, "R$\u{a0}8,30");
    }

    #[test]
    fn test_zero_selling_price_has_no_margin() {
        let profit = calculate_profit(Decimal::ZERO, Decimal::ZERO, &CurrencyFormat::brl()).unwrap();

        assert_eq!(profit.amount, Decimal::ZERO);
        assert_eq!(profit.margin_percent, None);
    }

    #[test]
    fn test_loss_is_negative() {
        let profit = calculate_profit(dec("8"), dec("10"), &CurrencyFormat::brl()).unwrap();

        assert_eq!(profit.amount, dec("-2"));
        assert_eq!(profit.margin_percent, Some(dec("-25")));
        assert_eq!(profit.formatted_amount, "-R$\u{a0}2,00");
    }

    #[test]
    fn test_near_zero_selling_price_margin_overflow_is_calculation_error() {
        let result = calculate_profit(
            dec("0.0000000000000000000000000018"),
            dec("10"),
            &CurrencyFormat::brl(),
        );

        match result {
            Err(EngineError::CalculationError { message }) => {
                assert!(message.contains("margin overflowed"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }
}
