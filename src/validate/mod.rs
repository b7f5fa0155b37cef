// Field validation and normalization engine. Everything here is pure and
// synchronous: validators take raw cell values and return either a canonical
// value or a diagnostic, never an error. Fatal failures belong to the I/O
// boundary, not to this module.

pub mod age;
pub mod dataset;
pub mod email;
pub mod normalize;
pub mod phone;
pub mod record;

pub use age::AgeValidator;
pub use dataset::{ColumnMap, DatasetProcessor};
pub use email::EmailValidator;
pub use normalize::Normalizer;
pub use phone::{CountryCodeRule, CountryCodes, PhoneFormatter, PhoneValidator};
pub use record::RecordValidator;
