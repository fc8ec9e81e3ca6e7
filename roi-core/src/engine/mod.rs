//! Derived-state engine.
//!
//! A [`Session`] owns the current [`InputRecord`](crate::InputRecord) of one
//! user. Every edit replaces the record, is pushed to the session's
//! [`ParamStore`], and the derived metrics are recomputed in full by
//! [`derive_all`] whenever they are read.

mod derive;
mod params;
mod session;
mod store;

pub use derive::derive_all;
pub use params::{ParamMap, from_param_map, to_param_map};
pub use session::{EngineError, Session};
pub use store::{MemoryParamStore, ParamStore, StoreError};
