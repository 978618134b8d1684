//! Presentation tree as returned by `presentations.get`.
//!
//! Only the parts the extractor reads are modelled; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// A presentation document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    #[serde(default)]
    pub presentation_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slides: Vec<Page>,
}

/// A slide.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub object_id: String,
    #[serde(default)]
    pub page_elements: Vec<PageElement>,
}

/// An element placed on a slide.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(from = "RawPageElement", into = "RawPageElement")]
pub struct PageElement {
    pub object_id: String,
    pub transform: Option<AffineTransform>,
    pub body: ElementBody,
}

/// What an element carries.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementBody {
    Shape(TextContainer),
    TextBox(TextContainer),
    /// Images, lines, tables, groups and anything else
    Unclassified,
}

/// Placement of an element. Missing components read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffineTransform {
    #[serde(default)]
    pub scale_x: f64,
    #[serde(default)]
    pub scale_y: f64,
    #[serde(default)]
    pub translate_x: f64,
    #[serde(default)]
    pub translate_y: f64,
}

/// A shape or text box; its text body is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TextContainer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_elements: Option<Vec<TextElement>>,
}

/// A paragraph marker, auto text or text run. Only runs carry content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_run: Option<TextRun>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TextRun {
    #[serde(default)]
    pub content: String,
}

impl TextContainer {
    /// Concatenate the content of every text run in document order.
    pub fn plain_text(&self) -> String {
        let Some(elements) = self.text.as_ref().and_then(|t| t.text_elements.as_ref()) else {
            return String::new();
        };
        elements
            .iter()
            .filter_map(|e| e.text_run.as_ref())
            .map(|run| run.content.as_str())
            .collect()
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct RawPageElement {
    #[serde(default)]
    object_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transform: Option<AffineTransform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shape: Option<TextContainer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_box: Option<TextContainer>,
}

impl From<RawPageElement> for PageElement {
    fn from(raw: RawPageElement) -> Self {
        let body = match (raw.shape, raw.text_box) {
            (Some(shape), _) => ElementBody::Shape(shape),
            (None, Some(text_box)) => ElementBody::TextBox(text_box),
            (None, None) => ElementBody::Unclassified,
        };
        Self {
            object_id: raw.object_id,
            transform: raw.transform,
            body,
        }
    }
}

impl From<PageElement> for RawPageElement {
    fn from(element: PageElement) -> Self {
        let (shape, text_box) = match element.body {
            ElementBody::Shape(c) => (Some(c), None),
            ElementBody::TextBox(c) => (None, Some(c)),
            ElementBody::Unclassified => (None, None),
        };
        Self {
            object_id: element.object_id,
            transform: element.transform,
            shape,
            text_box,
        }
    }
}
