mod derived_result;
mod field_key;
mod input_record;
mod metric;

pub use derived_result::DerivedResult;
pub use field_key::{FieldGroup, FieldKey};
pub use input_record::InputRecord;
pub use metric::Metric;
