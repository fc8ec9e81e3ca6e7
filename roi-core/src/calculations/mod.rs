//! Rental investment calculations.
//!
//! Every function in this module is pure and total: it never panics and
//! never returns an error. Invalid operands, divisions by zero and overflows
//! all settle to zero at the precision of the quantity being computed.
//!
//! Results are returned as [`rust_decimal::Decimal`] values that are already
//! rounded. Use [`common::format_fixed`] to render them as fixed-point
//! strings.

pub mod acquisition;
pub mod common;
pub mod mortgage;
pub mod operand;
pub mod rental;
pub mod returns;

pub use acquisition::{down_payment, total_purchase_price};
pub use common::{Precision, format_fixed, round_to, settle};
pub use mortgage::{monthly_mortgage_payment, total_mortgage_cost, total_mortgage_interest};
pub use operand::Operand;
pub use rental::net_monthly_income;
pub use returns::{gross_yield, monthly_cashflow, net_yield, yield_pct};
