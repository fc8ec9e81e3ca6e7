use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::Precision;

/// Every quantity derived from the inputs, in evaluation order: a metric
/// only depends on inputs and on metrics listed before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    TotalPurchasePrice,
    MonthlyMortgagePayment,
    TotalMortgageInterest,
    TotalMortgageCost,
    DownPayment,
    NetMonthlyIncome,
    GrossYield,
    NetYield,
    MonthlyCashflow,
}

impl Metric {
    pub fn all() -> &'static [Metric] {
        &[
            Metric::TotalPurchasePrice,
            Metric::MonthlyMortgagePayment,
            Metric::TotalMortgageInterest,
            Metric::TotalMortgageCost,
            Metric::DownPayment,
            Metric::NetMonthlyIncome,
            Metric::GrossYield,
            Metric::NetYield,
            Metric::MonthlyCashflow,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TotalPurchasePrice => "totalPurchasePrice",
            Self::MonthlyMortgagePayment => "monthlyMortgagePayment",
            Self::TotalMortgageInterest => "totalMortgageInterest",
            Self::TotalMortgageCost => "totalMortgageCost",
            Self::DownPayment => "downPayment",
            Self::NetMonthlyIncome => "netMonthlyIncome",
            Self::GrossYield => "grossYield",
            Self::NetYield => "netYield",
            Self::MonthlyCashflow => "monthlyCashflow",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TotalPurchasePrice => "Total purchase price",
            Self::MonthlyMortgagePayment => "Monthly mortgage payment",
            Self::TotalMortgageInterest => "Total mortgage interest",
            Self::TotalMortgageCost => "Total mortgage cost",
            Self::DownPayment => "Down payment",
            Self::NetMonthlyIncome => "Net monthly income",
            Self::GrossYield => "Gross yield (%)",
            Self::NetYield => "Net yield (%)",
            Self::MonthlyCashflow => "Monthly cashflow",
        }
    }

    pub fn precision(&self) -> Precision {
        match self {
            Self::GrossYield | Self::NetYield => Precision::Percent,
            _ => Precision::Currency,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
