use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::format_fixed;
use crate::models::Metric;

/// Every derived quantity of a session, already rounded to its precision.
///
/// Currency amounts have no decimals and yields are percentages with two
/// decimals. Use [`DerivedResult::display`] for the fixed-point text of a
/// metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedResult {
    pub total_purchase_price: Decimal,
    pub monthly_mortgage_payment: Decimal,
    pub total_mortgage_interest: Decimal,
    pub total_mortgage_cost: Decimal,
    pub down_payment: Decimal,
    pub net_monthly_income: Decimal,
    pub gross_yield: Decimal,
    pub net_yield: Decimal,
    pub monthly_cashflow: Decimal,
}

impl DerivedResult {
    pub fn get(
        &self,
        metric: Metric,
    ) -> Decimal {
        match metric {
            Metric::TotalPurchasePrice => self.total_purchase_price,
            Metric::MonthlyMortgagePayment => self.monthly_mortgage_payment,
            Metric::TotalMortgageInterest => self.total_mortgage_interest,
            Metric::TotalMortgageCost => self.total_mortgage_cost,
            Metric::DownPayment => self.down_payment,
            Metric::NetMonthlyIncome => self.net_monthly_income,
            Metric::GrossYield => self.gross_yield,
            Metric::NetYield => self.net_yield,
            Metric::MonthlyCashflow => self.monthly_cashflow,
        }
    }

    /// Fixed-point text of `metric`, e.g. `"1044"` or `"5.31"`.
    pub fn display(
        &self,
        metric: Metric,
    ) -> String {
        format_fixed(self.get(metric), metric.precision())
    }

    /// Metrics and their values in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, Decimal)> + '_ {
        Metric::all()
            .iter()
            .map(move |metric| (*metric, self.get(*metric)))
    }
}

impl fmt::Display for DerivedResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (position, metric) in Metric::all().iter().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            write!(f, "{:<26}{:>12}", metric.label(), self.display(*metric))?;
        }
        Ok(())
    }
}
