//! Build text/style mutations for a single cell.
//!
//! Text offsets are counted in UTF-16 code units, the unit the Slides API uses
//! for text ranges.

use crate::model::{InsertText, Mutation, TextRange, TextStyle, UpdateTextStyle};

/// Point size of a record heading.
pub const TITLE_FONT_SIZE: f64 = 8.0;

/// Point size of a record description.
pub const BODY_FONT_SIZE: f64 = 7.0;

/// Length of `text` in the Slides API text index unit.
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Insert `text` and style the whole cell at `font_size` points.
pub fn write_plain(object_id: &str, text: &str, font_size: f64) -> Vec<Mutation> {
    vec![
        insert(object_id, text),
        style(object_id, TextRange::All, TextStyle::standard(font_size)),
    ]
}

/// Insert `title + " " + body` with a bold 8pt title and a regular 7pt body.
///
/// An empty title gets no style request; the API rejects empty ranges.
pub fn write_title_body(object_id: &str, title: &str, body: &str) -> Vec<Mutation> {
    let tail = format!(" {}", body);
    let title_end = text_len(title);
    let text_end = title_end + text_len(&tail);

    let mut mutations = vec![insert(object_id, &format!("{}{}", title, tail))];
    if title_end > 0 {
        mutations.push(style(
            object_id,
            TextRange::FixedRange {
                start_index: 0,
                end_index: title_end,
            },
            TextStyle::standard(TITLE_FONT_SIZE).with_bold(true),
        ));
    }
    mutations.push(style(
        object_id,
        TextRange::FixedRange {
            start_index: title_end,
            end_index: text_end,
        },
        TextStyle::standard(BODY_FONT_SIZE).with_bold(false),
    ));
    mutations
}

fn insert(object_id: &str, text: &str) -> Mutation {
    Mutation::InsertText(InsertText {
        object_id: object_id.to_string(),
        text: text.to_string(),
        insertion_index: 0,
    })
}

fn style(object_id: &str, text_range: TextRange, style: TextStyle) -> Mutation {
    Mutation::UpdateTextStyle(UpdateTextStyle {
        object_id: object_id.to_string(),
        text_range,
        fields: style.field_mask(),
        style,
    })
}
