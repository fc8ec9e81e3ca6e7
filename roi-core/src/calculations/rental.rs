//! Rental income.
//!
//! Rent and rental charges are monthly amounts; the property tax is an
//! annual amount and is spread evenly over twelve months.

use rust_decimal::Decimal;

use crate::calculations::common::{MONTHS_PER_YEAR, Precision, settle};
use crate::calculations::operand::Operand;

/// Monthly rental income left after charges and property tax.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::net_monthly_income;
///
/// // 1200 − 100 − 1200 / 12
/// assert_eq!(net_monthly_income("1200", "100", "1200"), dec!(1000));
/// ```
pub fn net_monthly_income(
    monthly_rent: impl Into<Operand>,
    monthly_charges: impl Into<Operand>,
    annual_property_tax: impl Into<Operand>,
) -> Decimal {
    let income = income_after_costs(
        monthly_rent.into(),
        monthly_charges.into(),
        annual_property_tax.into(),
    );
    settle(income, Precision::Currency)
}

fn income_after_costs(
    monthly_rent: Operand,
    monthly_charges: Operand,
    annual_property_tax: Operand,
) -> Option<Decimal> {
    let monthly_tax = annual_property_tax.value()?.checked_div(MONTHS_PER_YEAR)?;
    monthly_rent
        .value()?
        .checked_sub(monthly_charges.value()?)?
        .checked_sub(monthly_tax)
}
