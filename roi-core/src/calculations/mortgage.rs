//! Fixed-rate mortgage amortization.
//!
//! The loan is repaid with a constant monthly payment over `years × 12`
//! months. For a monthly rate `r = annual_rate / 100 / 12` and `n` months:
//!
//! | Quantity | Formula |
//! |----------|---------|
//! | Monthly payment (r > 0) | `loan × r / (1 − (1 + r)^(−n))` |
//! | Monthly payment (r = 0) | `loan / n` |
//! | Total interest | `(payment − loan / n) × n` |
//! | Total cost | `loan + total interest` |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use roi_core::calculations::{
//!     monthly_mortgage_payment, total_mortgage_cost, total_mortgage_interest,
//! };
//!
//! let payment = monthly_mortgage_payment("180000", "3.5", "20");
//! let interest = total_mortgage_interest("180000", "20", payment);
//! let cost = total_mortgage_cost("180000", interest);
//!
//! assert_eq!(payment, dec!(1044));
//! assert_eq!(interest, dec!(70560));
//! assert_eq!(cost, dec!(250560));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

use crate::calculations::common::{MONTHS_PER_YEAR, Precision, settle};
use crate::calculations::operand::Operand;

/// Constant monthly payment that fully repays `bank_loan` over
/// `loan_period_years` at `annual_rate_pct` percent per year.
///
/// A zero rate spreads the principal evenly over the term. When the term is
/// so long (or the rate so high) that compounding leaves the `Decimal`
/// range, the payment is the monthly interest on the loan. A term of zero
/// months or less has no payment schedule and settles to zero, as do invalid
/// operands and arithmetic overflow.
pub fn monthly_mortgage_payment(
    bank_loan: impl Into<Operand>,
    annual_rate_pct: impl Into<Operand>,
    loan_period_years: impl Into<Operand>,
) -> Decimal {
    let payment = amortized_payment(
        bank_loan.into(),
        annual_rate_pct.into(),
        loan_period_years.into(),
    );
    settle(payment, Precision::Currency)
}

/// Interest paid over the whole term, given the monthly payment.
///
/// Each month's payment is split into a constant principal part
/// (`loan / months`) and the remainder, which is interest.
pub fn total_mortgage_interest(
    bank_loan: impl Into<Operand>,
    loan_period_years: impl Into<Operand>,
    monthly_payment: impl Into<Operand>,
) -> Decimal {
    let interest = interest_over_term(
        bank_loan.into(),
        loan_period_years.into(),
        monthly_payment.into(),
    );
    settle(interest, Precision::Currency)
}

/// Total amount repaid to the bank: principal plus interest.
pub fn total_mortgage_cost(
    bank_loan: impl Into<Operand>,
    total_interest: impl Into<Operand>,
) -> Decimal {
    let (bank_loan, total_interest) = (bank_loan.into(), total_interest.into());
    let cost = bank_loan
        .value()
        .zip(total_interest.value())
        .and_then(|(loan, interest)| loan.checked_add(interest));
    settle(cost, Precision::Currency)
}

fn term_in_months(loan_period_years: Operand) -> Option<Decimal> {
    loan_period_years.value()?.checked_mul(MONTHS_PER_YEAR)
}

fn amortized_payment(
    bank_loan: Operand,
    annual_rate_pct: Operand,
    loan_period_years: Operand,
) -> Option<Decimal> {
    let loan = bank_loan.value()?;
    let months = term_in_months(loan_period_years)?;
    if months <= Decimal::ZERO {
        return None;
    }

    let monthly_rate = annual_rate_pct
        .value()?
        .checked_div(Decimal::ONE_HUNDRED)?
        .checked_div(MONTHS_PER_YEAR)?;
    if monthly_rate.is_zero() {
        return loan.checked_div(months);
    }

    // (1 + r)^(−n) vanishes when (1 + r)^n is past the Decimal range
    let discount = match compound(Decimal::ONE.checked_add(monthly_rate)?, months) {
        Some(growth) => Decimal::ONE.checked_sub(Decimal::ONE.checked_div(growth)?)?,
        None => Decimal::ONE,
    };
    loan.checked_mul(monthly_rate)?.checked_div(discount)
}

/// `base` raised to `periods`, exact for whole numbers of periods.
fn compound(
    base: Decimal,
    periods: Decimal,
) -> Option<Decimal> {
    if periods.fract().is_zero() {
        base.checked_powi(periods.to_i64()?)
    } else {
        base.checked_powd(periods)
    }
}

fn interest_over_term(
    bank_loan: Operand,
    loan_period_years: Operand,
    monthly_payment: Operand,
) -> Option<Decimal> {
    let months = term_in_months(loan_period_years)?;
    let principal_per_month = bank_loan.value()?.checked_div(months)?;
    monthly_payment
        .value()?
        .checked_sub(principal_per_month)?
        .checked_mul(months)
}
