//! Caller-supplied content to write.

use serde::{Deserialize, Deserializer, Serialize};

/// Text for an element the caller already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPair {
    /// Target element identifier
    pub object_id: String,

    /// Text to insert
    #[serde(default)]
    pub content: String,
}

impl ContentPair {
    pub fn new(object_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            content: content.into(),
        }
    }
}

/// One structured row of template content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Item number, accepted as a JSON string or number
    #[serde(default, deserialize_with = "string_or_number")]
    pub number: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub data_sources: String,
}

impl ContentRecord {
    /// Heading written in bold ahead of the description, e.g. `"3. Forecasting"`.
    pub fn heading(&self) -> String {
        format!("{}. {}", self.number, self.title)
    }

    /// Whether the description cell has nothing to show.
    pub fn is_untitled_and_empty(&self) -> bool {
        [&self.number, &self.title, &self.description]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Int(n)) => n.to_string(),
        Some(Raw::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

/// Element entry of the legacy `slides_data_json` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyElement {
    pub object_id: String,
    #[serde(default)]
    pub element_type: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// Slide entry of the legacy `slides_data_json` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacySlide {
    #[serde(default)]
    pub slide_index: usize,
    #[serde(default)]
    pub slide_id: String,
    #[serde(default)]
    pub elements: Vec<LegacyElement>,
}

/// Decode a `slides_data_json` string into slides.
pub fn parse_legacy_slides(json: &str) -> crate::Result<Vec<LegacySlide>> {
    serde_json::from_str(json).map_err(|e| {
        crate::Error::InvalidRequest(format!("Invalid slides_data_json format: {}", e))
    })
}

/// Flatten legacy slides into content pairs, keeping document order.
pub fn legacy_to_pairs(slides: Vec<LegacySlide>) -> Vec<ContentPair> {
    slides
        .into_iter()
        .flat_map(|s| s.elements)
        .map(|e| ContentPair::new(e.object_id, e.content))
        .collect()
}
