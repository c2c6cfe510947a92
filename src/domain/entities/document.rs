use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub page_content: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Document {
    pub fn new(page_content: String, metadata: Option<serde_json::Value>) -> Self {
        Self {
            page_content,
            metadata: metadata.unwrap_or_else(|| serde_json::Value::Object(Default::default())),
        }
    }
}
