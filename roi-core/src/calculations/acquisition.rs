//! Acquisition cost of the property.

use rust_decimal::Decimal;

use crate::calculations::common::{Precision, settle};
use crate::calculations::operand::Operand;

/// Total price paid to acquire the property: housing price, notary fees and
/// renovation works.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::total_purchase_price;
///
/// assert_eq!(total_purchase_price("200000", "16000", "10000"), dec!(226000));
/// assert_eq!(total_purchase_price("200000", "", ""), dec!(200000));
/// assert_eq!(total_purchase_price("abc", "16000", "10000"), dec!(0));
/// ```
pub fn total_purchase_price(
    housing_price: impl Into<Operand>,
    notary_fees: impl Into<Operand>,
    house_works: impl Into<Operand>,
) -> Decimal {
    let total = sum_costs(housing_price.into(), notary_fees.into(), house_works.into());
    settle(total, Precision::Currency)
}

fn sum_costs(
    housing_price: Operand,
    notary_fees: Operand,
    house_works: Operand,
) -> Option<Decimal> {
    housing_price
        .value()?
        .checked_add(notary_fees.value()?)?
        .checked_add(house_works.value()?)
}

/// Personal contribution: the part of the total cost not covered by the loan.
pub fn down_payment(
    bank_loan: impl Into<Operand>,
    total_cost: impl Into<Operand>,
) -> Decimal {
    let (bank_loan, total_cost) = (bank_loan.into(), total_cost.into());
    let contribution = total_cost
        .value()
        .zip(bank_loan.value())
        .and_then(|(cost, loan)| cost.checked_sub(loan));
    settle(contribution, Precision::Currency)
}
