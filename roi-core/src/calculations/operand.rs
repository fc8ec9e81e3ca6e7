use std::str::FromStr;

use rust_decimal::Decimal;

/// A numeric argument to a calculation.
///
/// Calculations accept raw field text as well as numbers. Text is parsed
/// once, here: an empty (or whitespace-only) string is zero, a comma is a
/// thousands separator, and anything else that does not parse as a decimal
/// is an invalid operand. An invalid operand makes every calculation that
/// consumes it settle to zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::Operand;
///
/// assert_eq!(Operand::from("1,250.50").value(), Some(dec!(1250.50)));
/// assert_eq!(Operand::from("").value(), Some(dec!(0)));
/// assert_eq!(Operand::from("abc").value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand(Option<Decimal>);

impl Operand {
    pub const ZERO: Self = Self(Some(Decimal::ZERO));
    pub const INVALID: Self = Self(None);

    /// Parses raw field text.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().replace(',', "");
        if normalized.is_empty() {
            return Self::ZERO;
        }
        // the decimal parser reads `_` as a digit separator
        if normalized.contains('_') {
            return Self::INVALID;
        }
        Self(
            Decimal::from_str(&normalized)
                .or_else(|_| Decimal::from_scientific(&normalized))
                .ok(),
        )
    }

    /// The numeric value, or `None` when the operand is invalid.
    pub fn value(self) -> Option<Decimal> {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_some()
    }

    /// The numeric value, with invalid operands read as zero.
    pub fn or_zero(self) -> Decimal {
        self.0.unwrap_or(Decimal::ZERO)
    }
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Self(Some(value))
    }
}

impl From<Option<Decimal>> for Operand {
    fn from(value: Option<Decimal>) -> Self {
        Self(value)
    }
}

impl From<&str> for Operand {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<&String> for Operand {
    fn from(raw: &String) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for Operand {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self(Some(Decimal::from(value)))
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Self(Some(Decimal::from(value)))
    }
}
