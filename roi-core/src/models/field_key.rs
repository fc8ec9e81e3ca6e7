use std::fmt;

use serde::{Deserialize, Serialize};

/// The domain a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldGroup {
    Acquisition,
    Financing,
    Rental,
}

impl FieldGroup {
    /// Fields of this group, in display order.
    pub fn fields(self) -> impl Iterator<Item = FieldKey> {
        FieldKey::all()
            .iter()
            .copied()
            .filter(move |key| key.group() == self)
    }
}

/// Every user-editable input of a calculation session.
///
/// The wire names returned by [`FieldKey::as_str`] are the keys of the
/// shareable parameter map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    HousingPrice,
    NotaryFees,
    HouseWorks,
    BankLoan,
    BankRate,
    BankLoanPeriod,
    /// Monthly rent.
    Rent,
    /// Monthly charges paid by the owner.
    RentalCharges,
    /// Annual property tax.
    PropertyTax,
}

impl FieldKey {
    pub const COUNT: usize = 9;

    pub fn all() -> &'static [FieldKey; Self::COUNT] {
        &[
            FieldKey::HousingPrice,
            FieldKey::NotaryFees,
            FieldKey::HouseWorks,
            FieldKey::BankLoan,
            FieldKey::BankRate,
            FieldKey::BankLoanPeriod,
            FieldKey::Rent,
            FieldKey::RentalCharges,
            FieldKey::PropertyTax,
        ]
    }

    /// Position of the field in [`FieldKey::all`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HousingPrice => "housingPrice",
            Self::NotaryFees => "notaryFees",
            Self::HouseWorks => "houseWorks",
            Self::BankLoan => "bankLoan",
            Self::BankRate => "bankRate",
            Self::BankLoanPeriod => "bankLoanPeriod",
            Self::Rent => "rent",
            Self::RentalCharges => "rentalCharges",
            Self::PropertyTax => "propertyTax",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "housingPrice" => Some(Self::HousingPrice),
            "notaryFees" => Some(Self::NotaryFees),
            "houseWorks" => Some(Self::HouseWorks),
            "bankLoan" => Some(Self::BankLoan),
            "bankRate" => Some(Self::BankRate),
            "bankLoanPeriod" => Some(Self::BankLoanPeriod),
            "rent" => Some(Self::Rent),
            "rentalCharges" => Some(Self::RentalCharges),
            "propertyTax" => Some(Self::PropertyTax),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HousingPrice => "Housing price",
            Self::NotaryFees => "Notary fees",
            Self::HouseWorks => "Renovation works",
            Self::BankLoan => "Bank loan",
            Self::BankRate => "Interest rate (%)",
            Self::BankLoanPeriod => "Loan period (years)",
            Self::Rent => "Monthly rent",
            Self::RentalCharges => "Monthly charges",
            Self::PropertyTax => "Annual property tax",
        }
    }

    pub fn group(&self) -> FieldGroup {
        match self {
            Self::HousingPrice | Self::NotaryFees | Self::HouseWorks => FieldGroup::Acquisition,
            Self::BankLoan | Self::BankRate | Self::BankLoanPeriod => FieldGroup::Financing,
            Self::Rent | Self::RentalCharges | Self::PropertyTax => FieldGroup::Rental,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
