//! Conversion between an [`InputRecord`] and its shareable parameter map.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{FieldKey, InputRecord};

/// Flat `field name → raw value` mapping, as found in a share link or a
/// parameter file.
pub type ParamMap = BTreeMap<String, String>;

/// Every field of `record` under its wire name. Unset fields map to `""`.
pub fn to_param_map(record: &InputRecord) -> ParamMap {
    record
        .iter()
        .map(|(key, value)| (key.as_str().to_string(), value.to_string()))
        .collect()
}

/// Rebuilds a record from a parameter map.
///
/// Keys missing from `params` stay unset and unknown keys are ignored.
/// Values are taken as they are: text that is not a number is kept and left
/// to the calculations to settle.
///
/// # Example
///
/// ```
/// use roi_core::{FieldKey, ParamMap, from_param_map};
///
/// let params = ParamMap::from([
///     ("rent".to_string(), "950".to_string()),
///     ("utm_source".to_string(), "mail".to_string()),
/// ]);
///
/// let record = from_param_map(&params);
///
/// assert_eq!(record.get(FieldKey::Rent), "950");
/// assert_eq!(record.get(FieldKey::BankLoan), "");
/// ```
pub fn from_param_map(params: &ParamMap) -> InputRecord {
    let fields = params
        .iter()
        .filter_map(|(name, value)| match FieldKey::parse(name) {
            Some(key) => Some((key, value.as_str())),
            None => {
                debug!(parameter = %name, "ignoring unknown parameter");
                None
            }
        });
    InputRecord::from_fields(fields)
}

impl From<InputRecord> for ParamMap {
    fn from(record: InputRecord) -> Self {
        to_param_map(&record)
    }
}

impl From<ParamMap> for InputRecord {
    fn from(params: ParamMap) -> Self {
        from_param_map(&params)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ParamMap {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    // =========================================================================
    // to_param_map tests
    // =========================================================================

    #[test]
    fn to_param_map_contains_every_key() {
        let map = to_param_map(&InputRecord::new());

        assert_eq!(map.len(), FieldKey::COUNT);
        for key in FieldKey::all() {
            assert_eq!(map.get(key.as_str()).map(String::as_str), Some(""));
        }
    }

    #[test]
    fn to_param_map_uses_raw_values() {
        let record = InputRecord::new()
            .with_field(FieldKey::BankRate, "3.5")
            .with_field(FieldKey::Rent, "not a number");

        let map = to_param_map(&record);

        assert_eq!(map["bankRate"], "3.5");
        assert_eq!(map["rent"], "not a number");
    }

    // =========================================================================
    // from_param_map tests
    // =========================================================================

    #[test]
    fn from_param_map_missing_keys_are_unset() {
        let record = from_param_map(&params(&[("housingPrice", "200000")]));

        assert_eq!(record.get(FieldKey::HousingPrice), "200000");
        assert!(record.is_unset(FieldKey::NotaryFees));
    }

    #[test]
    fn from_param_map_ignores_unknown_keys() {
        let record = from_param_map(&params(&[("bankloan", "1"), ("ref", "x")]));

        assert_eq!(record, InputRecord::new());
    }

    #[test]
    fn from_param_map_keeps_invalid_values() {
        let record = from_param_map(&params(&[("propertyTax", "12OO")]));

        assert_eq!(record.get(FieldKey::PropertyTax), "12OO");
    }

    #[test]
    fn param_map_round_trip_preserves_record() {
        let record = InputRecord::from_fields([
            (FieldKey::HousingPrice, "200000"),
            (FieldKey::BankRate, "3.5"),
            (FieldKey::Rent, ""),
            (FieldKey::PropertyTax, "garbage"),
        ]);

        assert_eq!(from_param_map(&to_param_map(&record)), record);
    }

    #[test]
    fn conversions_match_functions() {
        let record = InputRecord::new().with_field(FieldKey::HouseWorks, "10000");

        let map: ParamMap = record.clone().into();
        let back: InputRecord = map.clone().into();

        assert_eq!(map, to_param_map(&record));
        assert_eq!(back, record);
    }
}
