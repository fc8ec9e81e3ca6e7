use thiserror::Error;

use crate::engine::ParamMap;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Malformed parameters: {0}")]
    Malformed(String),
}

/// Where a session's parameter map is persisted between runs.
///
/// A store is the only place a session talks to the outside world. Sessions
/// treat store failures as non-fatal: the in-memory record stays
/// authoritative.
pub trait ParamStore {
    /// Reads the persisted map. A store with nothing persisted yet returns an
    /// empty map.
    fn load(&self) -> Result<ParamMap, StoreError>;

    /// Replaces the persisted map with `params`.
    fn save(
        &mut self,
        params: &ParamMap,
    ) -> Result<(), StoreError>;

    /// Removes the persisted map.
    fn clear(&mut self) -> Result<(), StoreError>;
}

impl<T: ParamStore + ?Sized> ParamStore for Box<T> {
    fn load(&self) -> Result<ParamMap, StoreError> {
        (**self).load()
    }

    fn save(
        &mut self,
        params: &ParamMap,
    ) -> Result<(), StoreError> {
        (**self).save(params)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// A store that keeps the map in memory, for sessions that are not shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryParamStore {
    params: ParamMap,
}

impl MemoryParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `params`, as if a previous session had
    /// saved them.
    pub fn with_params(params: ParamMap) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ParamMap {
        &self.params
    }
}

impl ParamStore for MemoryParamStore {
    fn load(&self) -> Result<ParamMap, StoreError> {
        Ok(self.params.clone())
    }

    fn save(
        &mut self,
        params: &ParamMap,
    ) -> Result<(), StoreError> {
        self.params = params.clone();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.params.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryParamStore::new();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn memory_store_save_replaces_params() {
        let mut store =
            MemoryParamStore::with_params(ParamMap::from([("rent".into(), "900".into())]));

        store
            .save(&ParamMap::from([("bankLoan".into(), "1000".into())]))
            .unwrap();

        assert_eq!(
            store.load().unwrap(),
            ParamMap::from([("bankLoan".into(), "1000".into())])
        );
    }

    #[test]
    fn memory_store_clear_removes_params() {
        let mut store =
            MemoryParamStore::with_params(ParamMap::from([("rent".into(), "900".into())]));

        store.clear().unwrap();

        assert!(store.params().is_empty());
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn ParamStore> = Box::new(MemoryParamStore::new());

        store
            .save(&ParamMap::from([("rent".into(), "900".into())]))
            .unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }
}
