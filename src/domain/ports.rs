use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn verbose(&self) -> bool;
}

/// Where the presentation layer gets its class list from.
#[async_trait]
pub trait ClassSource: Send + Sync {
    async fn class_list(&self) -> Result<Value>;
    async fn class_detail(&self, name: &str) -> Result<Value>;
}
