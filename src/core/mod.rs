pub mod card;
pub mod directory;

pub use crate::domain::model::{ApiCapability, Character, ClassSummary};
pub use crate::domain::ports::{ClassSource, ConfigProvider};
pub use crate::utils::error::Result;
