pub mod config;
pub mod core;
pub mod domain;
pub mod extract;
pub mod load;
pub mod utils;
pub mod validate;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::core::{etl::EtlEngine, pipeline::UserPipeline};
pub use crate::load::SqlScript;
pub use crate::utils::error::{EtlError, Result};
