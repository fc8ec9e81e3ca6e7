//! Yields and cashflow.

use rust_decimal::Decimal;

use crate::calculations::common::{MONTHS_PER_YEAR, Precision, settle};
use crate::calculations::operand::Operand;

/// Annual revenue as a percentage of the total acquisition cost.
///
/// A zero cost has no meaningful yield and settles to zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::yield_pct;
///
/// assert_eq!(yield_pct(dec!(12000), dec!(226000)), dec!(5.31));
/// assert_eq!(yield_pct(dec!(12000), dec!(0)), dec!(0));
/// ```
pub fn yield_pct(
    annual_revenue: impl Into<Operand>,
    total_cost: impl Into<Operand>,
) -> Decimal {
    let (annual_revenue, total_cost) = (annual_revenue.into(), total_cost.into());
    let pct = annual_revenue
        .value()
        .zip(total_cost.value())
        .and_then(|(revenue, cost)| revenue.checked_div(cost))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));
    settle(pct, Precision::Percent)
}

/// Gross yield: twelve months of rent against the total acquisition cost.
pub fn gross_yield(
    monthly_rent: impl Into<Operand>,
    total_cost: impl Into<Operand>,
) -> Decimal {
    yield_pct(annualize(monthly_rent.into()), total_cost)
}

/// Net yield: twelve months of net income against the total acquisition cost.
pub fn net_yield(
    net_monthly_income: impl Into<Operand>,
    total_cost: impl Into<Operand>,
) -> Decimal {
    yield_pct(annualize(net_monthly_income.into()), total_cost)
}

/// Money left each month once the mortgage payment is covered by the net
/// rental income. Negative when the investment costs money every month.
pub fn monthly_cashflow(
    net_monthly_income: impl Into<Operand>,
    monthly_payment: impl Into<Operand>,
) -> Decimal {
    let (income, payment) = (net_monthly_income.into(), monthly_payment.into());
    let cashflow = income
        .value()
        .zip(payment.value())
        .and_then(|(income, payment)| income.checked_sub(payment));
    settle(cashflow, Precision::Currency)
}

fn annualize(monthly: Operand) -> Operand {
    monthly
        .value()
        .and_then(|amount| amount.checked_mul(MONTHS_PER_YEAR))
        .into()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // yield_pct tests
    // =========================================================================

    #[test]
    fn yield_pct_divides_revenue_by_cost() {
        // 12000 / 226000 × 100 = 5.3097
        let result = yield_pct(dec!(12000), dec!(226000));

        assert_eq!(result, dec!(5.31));
    }

    #[test]
    fn yield_pct_zero_cost_settles_to_zero() {
        let result = yield_pct(dec!(12000), dec!(0));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn yield_pct_blank_operands_settle_to_zero() {
        let result = yield_pct("", "");

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn yield_pct_invalid_revenue_settles_to_zero() {
        let result = yield_pct("twelve", dec!(226000));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // gross_yield / net_yield tests
    // =========================================================================

    #[test]
    fn gross_yield_annualizes_monthly_rent() {
        // 1200 × 12 / 226000 × 100 = 6.3717
        let result = gross_yield("1200", dec!(226000));

        assert_eq!(result, dec!(6.37));
    }

    #[test]
    fn net_yield_annualizes_net_income() {
        // 1000 × 12 / 226000 × 100 = 5.3097
        let result = net_yield(dec!(1000), dec!(226000));

        assert_eq!(result, dec!(5.31));
    }

    #[test]
    fn net_yield_negative_income_gives_negative_yield() {
        // −50 × 12 / 100000 × 100 = −0.6
        let result = net_yield(dec!(-50), dec!(100000));

        assert_eq!(result, dec!(-0.60));
    }

    #[test]
    fn gross_yield_invalid_rent_settles_to_zero() {
        let result = gross_yield("n/a", dec!(226000));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // monthly_cashflow tests
    // =========================================================================

    #[test]
    fn cashflow_subtracts_payment_from_income() {
        let result = monthly_cashflow(dec!(1000), dec!(1044));

        assert_eq!(result, dec!(-44));
    }

    #[test]
    fn cashflow_positive_when_income_covers_payment() {
        let result = monthly_cashflow("1500", "1044");

        assert_eq!(result, dec!(456));
    }

    #[test]
    fn cashflow_invalid_operand_settles_to_zero() {
        let result = monthly_cashflow("1500", Operand::INVALID);

        assert_eq!(result, dec!(0));
    }
}
