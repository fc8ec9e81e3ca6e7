use crate::calculations::{
    down_payment, gross_yield, monthly_cashflow, monthly_mortgage_payment, net_monthly_income,
    net_yield, total_mortgage_cost, total_mortgage_interest, total_purchase_price,
};
use crate::models::{DerivedResult, FieldKey, InputRecord};

/// Evaluates every metric of `record`.
///
/// Metrics are computed in dependency order; chained metrics consume the
/// rounded values of the metrics they depend on:
///
/// | Metric | Depends on |
/// |--------|------------|
/// | total purchase price | housing price, notary fees, works |
/// | monthly mortgage payment | loan, rate, period |
/// | total mortgage interest | loan, period, monthly payment |
/// | total mortgage cost | loan, total interest |
/// | down payment | loan, total purchase price |
/// | net monthly income | rent, charges, property tax |
/// | gross yield | rent, total purchase price |
/// | net yield | net monthly income, total purchase price |
/// | monthly cashflow | net monthly income, monthly payment |
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::{FieldKey, InputRecord, Metric, derive_all};
///
/// let record = InputRecord::from_fields([
///     (FieldKey::HousingPrice, "200000"),
///     (FieldKey::NotaryFees, "16000"),
///     (FieldKey::HouseWorks, "10000"),
/// ]);
///
/// let derived = derive_all(&record);
///
/// assert_eq!(derived.total_purchase_price, dec!(226000));
/// assert_eq!(derived.display(Metric::GrossYield), "0.00");
/// ```
pub fn derive_all(record: &InputRecord) -> DerivedResult {
    let field = |key| record.operand(key);

    let total_purchase_price = total_purchase_price(
        field(FieldKey::HousingPrice),
        field(FieldKey::NotaryFees),
        field(FieldKey::HouseWorks),
    );
    let monthly_mortgage_payment = monthly_mortgage_payment(
        field(FieldKey::BankLoan),
        field(FieldKey::BankRate),
        field(FieldKey::BankLoanPeriod),
    );
    let total_mortgage_interest = total_mortgage_interest(
        field(FieldKey::BankLoan),
        field(FieldKey::BankLoanPeriod),
        monthly_mortgage_payment,
    );
    let total_mortgage_cost = total_mortgage_cost(field(FieldKey::BankLoan), total_mortgage_interest);
    let down_payment = down_payment(field(FieldKey::BankLoan), total_purchase_price);
    let net_monthly_income = net_monthly_income(
        field(FieldKey::Rent),
        field(FieldKey::RentalCharges),
        field(FieldKey::PropertyTax),
    );
    let gross_yield = gross_yield(field(FieldKey::Rent), total_purchase_price);
    let net_yield = net_yield(net_monthly_income, total_purchase_price);
    let monthly_cashflow = monthly_cashflow(net_monthly_income, monthly_mortgage_payment);

    DerivedResult {
        total_purchase_price,
        monthly_mortgage_payment,
        total_mortgage_interest,
        total_mortgage_cost,
        down_payment,
        net_monthly_income,
        gross_yield,
        net_yield,
        monthly_cashflow,
    }
}
