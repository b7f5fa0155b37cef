pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{CleanRecord, RawRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Database, Pipeline, Storage};
pub use crate::utils::error::Result;
