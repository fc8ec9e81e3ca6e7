use thiserror::Error;
use tracing::{debug, warn};

use crate::engine::{ParamMap, ParamStore, derive_all, from_param_map, to_param_map};
use crate::models::{DerivedResult, FieldKey, InputRecord};

/// Errors raised at the session boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The name is not one of the field wire names.
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

/// One user's calculation session.
///
/// The session holds the current [`InputRecord`] and the [`ParamStore`] it
/// was hydrated from. Edits are applied to the in-memory record first and
/// then saved to the store; a failing store is logged and otherwise ignored.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::{FieldKey, MemoryParamStore, Session};
///
/// let mut session = Session::load(MemoryParamStore::new());
/// session.set_field(FieldKey::BankLoan, "180000");
/// session.set_field(FieldKey::BankRate, "3.5");
/// session.set_field(FieldKey::BankLoanPeriod, "20");
///
/// assert_eq!(session.derived().monthly_mortgage_payment, dec!(1044));
/// assert_eq!(session.store().params()["bankLoan"], "180000");
/// ```
#[derive(Debug)]
pub struct Session<S: ParamStore> {
    record: InputRecord,
    store: S,
}

impl<S: ParamStore> Session<S> {
    /// Starts a session from whatever `store` holds.
    ///
    /// A store that cannot be read is logged and the session starts with
    /// every field unset.
    pub fn load(store: S) -> Self {
        let record = match store.load() {
            Ok(params) => {
                debug!(parameters = params.len(), "hydrating session");
                from_param_map(&params)
            }
            Err(error) => {
                warn!(%error, "failed to load session parameters, starting empty");
                InputRecord::new()
            }
        };
        Self { record, store }
    }

    /// The current inputs.
    pub fn record(&self) -> &InputRecord {
        &self.record
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Replaces the value of `key` and persists the new record.
    pub fn set_field(
        &mut self,
        key: FieldKey,
        raw: impl Into<String>,
    ) -> &InputRecord {
        let raw = raw.into();
        debug!(field = %key, value = %raw, "setting field");
        self.record = self.record.with_field(key, raw);
        self.persist();
        &self.record
    }

    /// Same as [`Session::set_field`] for a field given by its wire name.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownField`] if `name` is not a field wire
    /// name. The session is left unchanged.
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        raw: impl Into<String>,
    ) -> Result<&InputRecord, EngineError> {
        let key =
            FieldKey::parse(name).ok_or_else(|| EngineError::UnknownField(name.to_string()))?;
        Ok(self.set_field(key, raw))
    }

    /// Unsets every field and clears the store.
    pub fn reset(&mut self) {
        debug!("resetting session");
        self.record = InputRecord::new();
        if let Err(error) = self.store.clear() {
            warn!(%error, "failed to clear session parameters");
        }
    }

    /// The parameter map of the current record.
    pub fn params(&self) -> ParamMap {
        to_param_map(&self.record)
    }

    /// Every metric, recomputed from the current record.
    pub fn derived(&self) -> DerivedResult {
        derive_all(&self.record)
    }

    fn persist(&mut self) {
        if let Err(error) = self.store.save(&to_param_map(&self.record)) {
            warn!(%error, "failed to persist session parameters");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::engine::{MemoryParamStore, StoreError};

    /// A store whose every operation fails.
    #[derive(Debug, Default)]
    struct BrokenStore {
        attempts: usize,
    }

    impl ParamStore for BrokenStore {
        fn load(&self) -> Result<ParamMap, StoreError> {
            Err(StoreError::Malformed("unreadable".to_string()))
        }

        fn save(
            &mut self,
            _params: &ParamMap,
        ) -> Result<(), StoreError> {
            self.attempts += 1;
            Err(StoreError::Malformed("read-only".to_string()))
        }

        fn clear(&mut self) -> Result<(), StoreError> {
            self.attempts += 1;
            Err(StoreError::Malformed("read-only".to_string()))
        }
    }

    fn stored(pairs: &[(&str, &str)]) -> MemoryParamStore {
        MemoryParamStore::with_params(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    // =========================================================================
    // load tests
    // =========================================================================

    #[test]
    fn load_hydrates_from_store() {
        let session = Session::load(stored(&[("housingPrice", "200000"), ("rent", "950")]));

        assert_eq!(session.record().get(FieldKey::HousingPrice), "200000");
        assert_eq!(session.record().get(FieldKey::Rent), "950");
        assert!(session.record().is_unset(FieldKey::BankLoan));
    }

    #[test]
    fn load_from_empty_store_starts_unset() {
        let session = Session::load(MemoryParamStore::new());

        assert!(session.record().is_empty());
        assert_eq!(session.derived(), DerivedResult::default());
    }

    #[test]
    fn load_failure_starts_unset() {
        let session = Session::load(BrokenStore::default());

        assert!(session.record().is_empty());
    }

    // =========================================================================
    // set_field tests
    // =========================================================================

    #[test]
    fn set_field_updates_record_and_store() {
        let mut session = Session::load(MemoryParamStore::new());

        let record = session.set_field(FieldKey::NotaryFees, "16000").clone();

        assert_eq!(record.get(FieldKey::NotaryFees), "16000");
        assert_eq!(session.store().params(), &to_param_map(&record));
    }

    #[test]
    fn set_field_recomputes_derived_metrics() {
        let mut session = Session::load(stored(&[("housingPrice", "200000")]));
        assert_eq!(session.derived().total_purchase_price, dec!(200000));

        session.set_field(FieldKey::HouseWorks, "10000");

        assert_eq!(session.derived().total_purchase_price, dec!(210000));
    }

    #[test]
    fn set_field_survives_store_failure() {
        let mut session = Session::load(BrokenStore::default());

        session.set_field(FieldKey::Rent, "1200");

        assert_eq!(session.record().get(FieldKey::Rent), "1200");
        assert_eq!(session.store().attempts, 1);
    }

    #[test]
    fn set_field_by_name_accepts_wire_names() {
        let mut session = Session::load(MemoryParamStore::new());

        let result = session.set_field_by_name("bankLoanPeriod", "25");

        assert!(result.is_ok());
        assert_eq!(session.record().get(FieldKey::BankLoanPeriod), "25");
    }

    #[test]
    fn set_field_by_name_rejects_unknown_fields() {
        let mut session = Session::load(stored(&[("rent", "950")]));
        let before = session.record().clone();

        let result = session.set_field_by_name("monthlyRent", "1000").cloned();

        assert_eq!(
            result,
            Err(EngineError::UnknownField("monthlyRent".to_string()))
        );
        assert_eq!(session.record(), &before);
        assert_eq!(session.store().params().len(), 1);
    }

    // =========================================================================
    // reset tests
    // =========================================================================

    #[test]
    fn reset_unsets_fields_and_clears_store() {
        let mut session = Session::load(stored(&[("rent", "950")]));

        session.reset();

        assert!(session.record().is_empty());
        assert!(session.store().params().is_empty());
    }

    #[test]
    fn reset_survives_store_failure() {
        let mut session = Session::load(BrokenStore::default());
        session.set_field(FieldKey::Rent, "1200");

        session.reset();

        assert!(session.record().is_empty());
        assert_eq!(session.store().attempts, 2);
    }

    // =========================================================================
    // persistence round-trip
    // =========================================================================

    #[test]
    fn saved_session_restores_in_new_session() {
        let mut first = Session::load(MemoryParamStore::new());
        first.set_field(FieldKey::BankLoan, "180000");
        first.set_field(FieldKey::BankRate, "3.5");
        let saved = first.into_store();

        let second = Session::load(saved);

        assert_eq!(second.record().get(FieldKey::BankLoan), "180000");
        assert_eq!(second.record().get(FieldKey::BankRate), "3.5");
    }
}
