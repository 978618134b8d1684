//! Flattened slide view.

use serde::{Deserialize, Serialize};

/// Kind of a page element that can carry text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// A shape with an optional text body
    #[serde(rename = "shape")]
    Shape,
    /// A text box
    #[serde(rename = "textBox")]
    TextBox,
}

/// Top-left corner of an element, in EMU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Element scale as reported by the affine transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// A single element on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Opaque element identifier
    pub object_id: String,

    /// Element kind, `None` for unclassified elements (images, lines, ...)
    pub element_type: Option<ElementKind>,

    /// Concatenated text content
    #[serde(default)]
    pub content: String,

    /// Position, `None` when the element has no transform
    pub position: Option<Position>,

    /// Size, `None` when the element has no transform
    pub size: Option<Size>,
}

impl Element {
    /// Create an unclassified element without text or geometry.
    pub fn new(object_id: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            element_type: None,
            content: String::new(),
            position: None,
            size: None,
        }
    }

    /// Set the element kind.
    pub fn with_kind(mut self, kind: ElementKind) -> Self {
        self.element_type = Some(kind);
        self
    }

    /// Set the text content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set position and size.
    pub fn with_geometry(mut self, position: Position, size: Size) -> Self {
        self.position = Some(position);
        self.size = Some(size);
        self
    }

    /// True when the element carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// True when the element has geometry.
    pub fn has_geometry(&self) -> bool {
        self.position.is_some() && self.size.is_some()
    }
}

/// A slide and its flattened elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide index (1-based, in read order)
    pub slide_index: usize,

    /// Opaque slide identifier
    pub slide_id: String,

    /// Elements in document order
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Slide {
    /// Create an empty slide.
    pub fn new(slide_index: usize, slide_id: impl Into<String>) -> Self {
        Self {
            slide_index,
            slide_id: slide_id.into(),
            elements: Vec::new(),
        }
    }

    /// Add an element to this slide.
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }
}

/// A presentation flattened into slides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Presentation identifier
    pub document_id: String,

    /// Presentation title
    #[serde(default)]
    pub title: String,

    /// Slides in read order
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Number of slides.
    pub fn total_slides(&self) -> usize {
        self.slides.len()
    }
}
