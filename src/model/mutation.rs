//! Mutation primitives in the Slides API `batchUpdate` vocabulary.

use serde::{Deserialize, Serialize};

/// Font family applied to every written cell.
pub const FONT_FAMILY: &str = "Arial";

/// Theme color applied to every written cell.
pub const THEME_COLOR: &str = "DARK1";

/// A single request of a batch update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mutation {
    /// Insert text into a shape
    InsertText(InsertText),
    /// Apply a text style over a range
    UpdateTextStyle(UpdateTextStyle),
}

impl Mutation {
    /// Target element of this mutation.
    pub fn object_id(&self) -> &str {
        match self {
            Mutation::InsertText(m) => &m.object_id,
            Mutation::UpdateTextStyle(m) => &m.object_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertText {
    pub object_id: String,
    pub text: String,
    pub insertion_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTextStyle {
    pub object_id: String,
    pub text_range: TextRange,
    pub style: TextStyle,
    /// Comma separated field mask of the style fields being set
    pub fields: String,
}

/// Range of text a style applies to, in UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextRange {
    /// The whole text of the shape
    All,
    /// Half-open range `[start_index, end_index)`
    FixedRange {
        #[serde(rename = "startIndex")]
        start_index: usize,
        #[serde(rename = "endIndex")]
        end_index: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<OptionalColor>,
}

impl TextStyle {
    /// Arial in the theme's dark color at the given point size.
    pub fn standard(points: f64) -> Self {
        Self {
            font_family: Some(FONT_FAMILY.to_string()),
            font_size: Some(Dimension::pt(points)),
            bold: None,
            foreground_color: Some(OptionalColor::theme(THEME_COLOR)),
        }
    }

    /// Set the bold flag.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Field mask naming exactly the fields that are set.
    pub fn field_mask(&self) -> String {
        let mut fields = Vec::new();
        if self.font_family.is_some() {
            fields.push("fontFamily");
        }
        if self.font_size.is_some() {
            fields.push("fontSize");
        }
        if self.bold.is_some() {
            fields.push("bold");
        }
        if self.foreground_color.is_some() {
            fields.push("foregroundColor");
        }
        fields.join(",")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Dimension {
    pub fn pt(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: Unit::Pt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Unit {
    Pt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionalColor {
    pub opaque_color: OpaqueColor,
}

impl OptionalColor {
    pub fn theme(color: &str) -> Self {
        Self {
            opaque_color: OpaqueColor {
                theme_color: color.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpaqueColor {
    pub theme_color: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_text_wire_format() {
        let m = Mutation::InsertText(InsertText {
            object_id: "e1".into(),
            text: "Hello".into(),
            insertion_index: 0,
        });
        assert_eq!(
            serde_json::to_value(&m).unwrap(),
            json!({"insertText": {"objectId": "e1", "text": "Hello", "insertionIndex": 0}})
        );
    }

    #[test]
    fn test_update_style_wire_format() {
        let style = TextStyle::standard(8.0).with_bold(true);
        let m = Mutation::UpdateTextStyle(UpdateTextStyle {
            object_id: "e1".into(),
            text_range: TextRange::FixedRange {
                start_index: 0,
                end_index: 4,
            },
            fields: style.field_mask(),
            style,
        });
        assert_eq!(
            serde_json::to_value(&m).unwrap(),
            json!({"updateTextStyle": {
                "objectId": "e1",
                "textRange": {"type": "FIXED_RANGE", "startIndex": 0, "endIndex": 4},
                "style": {
                    "fontFamily": "Arial",
                    "fontSize": {"magnitude": 8.0, "unit": "PT"},
                    "bold": true,
                    "foregroundColor": {"opaqueColor": {"themeColor": "DARK1"}}
                },
                "fields": "fontFamily,fontSize,bold,foregroundColor"
            }})
        );
    }

    #[test]
    fn test_all_range() {
        let json = serde_json::to_value(TextRange::All).unwrap();
        assert_eq!(json, json!({"type": "ALL"}));
    }

    #[test]
    fn test_field_mask_without_bold() {
        assert_eq!(
            TextStyle::standard(7.0).field_mask(),
            "fontFamily,fontSize,foregroundColor"
        );
    }
}
