//! Rounding and formatting shared by every calculation.
//!
//! Currency amounts are kept to whole units and percentages to two decimal
//! places. Midpoints round away from zero, which is what fixed-point display
//! of these figures has always shown.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Months in a year, for converting between annual and monthly amounts.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Number of decimal places a computed quantity is kept to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Money amounts: no decimals.
    Currency,
    /// Percentages: two decimals.
    Percent,
}

impl Precision {
    /// Decimal places kept for this precision.
    pub fn decimal_places(self) -> u32 {
        match self {
            Self::Currency => 0,
            Self::Percent => 2,
        }
    }
}

/// Rounds `value` to the given precision using half-away-from-zero rounding.
///
/// A result of zero is always returned as positive zero, so that `-0.4`
/// does not display as `-0`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::common::{Precision, round_to};
///
/// assert_eq!(round_to(dec!(1043.93), Precision::Currency), dec!(1044));
/// assert_eq!(round_to(dec!(5.305), Precision::Percent), dec!(5.31));
/// assert_eq!(round_to(dec!(-1.5), Precision::Currency), dec!(-2)); // Away from zero
/// ```
pub fn round_to(
    value: Decimal,
    precision: Precision,
) -> Decimal {
    let rounded = value.round_dp_with_strategy(
        precision.decimal_places(),
        RoundingStrategy::MidpointAwayFromZero,
    );
    if rounded.is_zero() { Decimal::ZERO } else { rounded }
}

/// Settles the outcome of a computation.
///
/// `None` marks an invalid computation (bad operand, division by zero,
/// overflow). It is recovered as zero; a valid result is rounded.
pub fn settle(
    value: Option<Decimal>,
    precision: Precision,
) -> Decimal {
    match value {
        Some(value) => round_to(value, precision),
        None => {
            trace!(?precision, "invalid computation settled to zero");
            Decimal::ZERO
        }
    }
}

/// Formats `value` as a fixed-point string with exactly the number of
/// decimals required by `precision`.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::common::{Precision, format_fixed};
///
/// assert_eq!(format_fixed(dec!(226000), Precision::Currency), "226000");
/// assert_eq!(format_fixed(dec!(5.3), Precision::Percent), "5.30");
/// assert_eq!(format_fixed(Decimal::ZERO, Precision::Percent), "0.00");
/// ```
pub fn format_fixed(
    value: Decimal,
    precision: Precision,
) -> String {
    let places = precision.decimal_places() as usize;
    format!("{:.*}", places, round_to(value, precision))
}
