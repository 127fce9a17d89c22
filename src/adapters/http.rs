use crate::domain::model::ApiCapability;
use crate::domain::ports::{ClassSource, ConfigProvider};
use crate::utils::error::{DndError, Result};
use crate::utils::validation;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.dnd-unsecured-stage.appalachiancoding.org";

const CLASSES: &str = "classes";

/// Thin client over the D&D reference API.
///
/// Every call is a single GET with no headers, query or body. Nothing is
/// cached and nothing is retried: a failed attempt is logged once and the
/// error is handed back to the caller.
#[derive(Debug, Clone)]
pub struct ClassesApi {
    client: Client,
    base_url: String,
}

impl ClassesApi {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::with_base_url(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/classes`
    pub fn class_list_endpoint(&self) -> Result<String> {
        self.endpoint(&[CLASSES])
    }

    /// Fetches the class list and returns the decoded body unchanged.
    pub async fn get_class_list(&self) -> Result<Value> {
        self.fetch(&[CLASSES], Decoding::Document).await
    }

    /// Fetches one class by name from `{base}/classes/{name}`.
    pub async fn get_class(&self, name: &str) -> Result<Value> {
        self.get_record(CLASSES, name).await
    }

    /// Fetches one record by name from `{base}/{table}/{name}`.
    pub async fn get_record(&self, table: &str, name: &str) -> Result<Value> {
        validation::validate_input("table", table)?;
        validation::validate_input("name", name)?;
        self.fetch(&[table, name], Decoding::Document).await
    }

    /// Fetches the names in `table` from `{base}/{table}`.
    ///
    /// The service streams these one JSON object per line, so the rows are
    /// collected into an array. A single JSON document is returned as-is.
    pub async fn get_names(&self, table: &str) -> Result<Value> {
        validation::validate_input("table", table)?;
        self.fetch(&[table], Decoding::Rows).await
    }

    /// Fetches every record of `table` from `{base}/all/{table}`, accepting
    /// the same row stream as [`ClassesApi::get_names`].
    pub async fn get_all(&self, table: &str) -> Result<Value> {
        validation::validate_input("table", table)?;
        self.fetch(&["all", table], Decoding::Rows).await
    }

    pub async fn get_tables(&self) -> Result<Vec<String>> {
        self.fetch_as(&["tables"]).await
    }

    pub async fn get_capabilities(&self) -> Result<Vec<ApiCapability>> {
        self.fetch_as(&["capabilities"]).await
    }

    /// Fetches the column layout of `table` from `{base}/capabilities/{table}`.
    pub async fn describe_table(&self, table: &str) -> Result<Value> {
        validation::validate_input("table", table)?;
        self.fetch(&["capabilities", table], Decoding::Document).await
    }

    pub async fn health(&self) -> Result<Value> {
        self.fetch(&["health"], Decoding::Document).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<String> {
        let invalid = |reason: String| DndError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: self.base_url.clone(),
            reason,
        };

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot be used as a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        // 不帶任何 query 或 fragment
        url.set_query(None);
        url.set_fragment(None);

        Ok(url.into())
    }

    async fn fetch(&self, segments: &[&str], decoding: Decoding) -> Result<Value> {
        let endpoint = self.endpoint(segments)?;

        match self.try_fetch(&endpoint, decoding).await {
            Ok(payload) => Ok(payload),
            Err(e) => {
                tracing::error!(endpoint = %endpoint, error = %e, "Error fetching from D&D API");
                Err(e)
            }
        }
    }

    async fn fetch_as<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let endpoint = self.endpoint(segments)?;

        let result = match self.try_fetch(&endpoint, Decoding::Document).await {
            Ok(payload) => serde_json::from_value(payload).map_err(|source| {
                DndError::DecodeError {
                    endpoint: endpoint.clone(),
                    source,
                }
            }),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            tracing::error!(endpoint = %endpoint, error = %e, "Error fetching from D&D API");
        }
        result
    }

    async fn try_fetch(&self, endpoint: &str, decoding: Decoding) -> Result<Value> {
        tracing::debug!("Making API request to: {}", endpoint);
        let response = self.client.get(endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(DndError::StatusError {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes from {}", body.len(), endpoint);
        match decoding {
            Decoding::Document => decode_payload(endpoint, &body),
            Decoding::Rows => decode_rows(endpoint, &body),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Decoding {
    Document,
    Rows,
}

impl Default for ClassesApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ClassSource for ClassesApi {
    async fn class_list(&self) -> Result<Value> {
        self.get_class_list().await
    }

    async fn class_detail(&self, name: &str) -> Result<Value> {
        self.get_class(name).await
    }
}

/// Parses a response body as exactly one JSON document.
pub fn decode_payload(endpoint: &str, body: &[u8]) -> Result<Value> {
    serde_json::from_slice::<Value>(body).map_err(|source| DndError::DecodeError {
        endpoint: endpoint.to_string(),
        source,
    })
}

/// Parses a row stream: one JSON document, or one JSON value per line
/// collected into an array in order.
pub fn decode_rows(endpoint: &str, body: &[u8]) -> Result<Value> {
    match decode_payload(endpoint, body) {
        Ok(payload) => Ok(payload),
        Err(e) => decode_json_lines(body).map(Value::Array).ok_or(e),
    }
}

fn decode_json_lines(body: &[u8]) -> Option<Vec<Value>> {
    let text = std::str::from_utf8(body).ok()?;

    let mut rows = Vec::new();
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        rows.push(serde_json::from_str(line).ok()?);
    }

    // 單行的情況已由整體解析處理過
    if rows.len() < 2 {
        return None;
    }
    Some(rows)
}
