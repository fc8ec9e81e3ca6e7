pub mod calculations;
pub mod engine;
pub mod models;

pub use engine::{
    EngineError, MemoryParamStore, ParamMap, ParamStore, Session, StoreError, derive_all,
    from_param_map, to_param_map,
};
pub use models::*;
