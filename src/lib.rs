pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::http::{ClassesApi, DEFAULT_BASE_URL};
pub use config::ResolvedConfig;
pub use crate::core::{card::CharacterCard, directory::ClassDirectory};
pub use domain::model::{ApiCapability, Character, ClassSummary};
pub use utils::error::{DndError, Result};
