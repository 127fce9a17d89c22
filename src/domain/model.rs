use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the remote class list.
///
/// The service owns the schema, so only `name` is pulled out and every other
/// field is kept as-is in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClassSummary {
    /// Views each element of a class-list payload as a `ClassSummary`.
    ///
    /// Non-object elements (for example a bare `"Wizard"` string) become a
    /// summary with that string as the name, anything else is kept under
    /// the `value` key.
    pub fn from_payload(payload: &Value) -> Vec<ClassSummary> {
        match payload {
            Value::Array(items) => items.iter().map(Self::from_entry).collect(),
            other => vec![Self::from_entry(other)],
        }
    }

    fn from_entry(entry: &Value) -> ClassSummary {
        match entry {
            Value::Object(obj) => {
                let mut extra = obj.clone();
                let name = match extra.remove("name") {
                    Some(Value::String(name)) => Some(name),
                    Some(other) => {
                        // 非字串的 name 原樣保留
                        extra.insert("name".to_string(), other);
                        None
                    }
                    None => None,
                };
                ClassSummary { name, extra }
            }
            Value::String(name) => ClassSummary {
                name: Some(name.clone()),
                extra: Map::new(),
            },
            other => {
                let mut extra = Map::new();
                extra.insert("value".to_string(), other.clone());
                ClassSummary { name: None, extra }
            }
        }
    }
}

/// A character as shown on a character card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub class_type: String,
    pub level: String,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        class_type: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            class_type: class_type.into(),
            level: level.into(),
        }
    }
}

/// An endpoint advertised by the remote API's `/capabilities` route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCapability {
    pub path: String,
    pub methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
