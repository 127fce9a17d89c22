use crate::core::ClassSource;
use crate::domain::model::ClassSummary;
use crate::utils::error::Result;

/// Loads the class list from a [`ClassSource`] and renders it for display.
///
/// Failures from the source are returned as-is. No fallback list is made up.
pub struct ClassDirectory<S: ClassSource> {
    source: S,
}

impl<S: ClassSource> ClassDirectory<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn load(&self) -> Result<Vec<ClassSummary>> {
        let payload = self.source.class_list().await?;
        let classes = ClassSummary::from_payload(&payload);
        tracing::debug!("Loaded {} classes", classes.len());
        Ok(classes)
    }

    pub async fn describe(&self, name: &str) -> Result<String> {
        let payload = self.source.class_detail(name).await?;
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    /// One line per class: its name, or the entry as compact JSON when the
    /// service did not send a name.
    pub fn render(classes: &[ClassSummary]) -> String {
        classes
            .iter()
            .map(|class| match &class.name {
                Some(name) => name.clone(),
                None => serde_json::Value::Object(class.extra.clone()).to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
