//! Flatten the presentation tree into slides.

use crate::api::{AffineTransform, ElementBody, Page, PageElement, Presentation};
use crate::model::{Deck, Element, ElementKind, Position, Size, Slide};

/// Flatten a whole presentation fetched as `document_id`.
pub fn extract_deck(presentation: &Presentation, document_id: &str) -> Deck {
    Deck {
        document_id: document_id.to_string(),
        title: presentation.title.clone(),
        slides: extract_slides(presentation),
    }
}

/// Flatten every slide, numbering them from 1 in read order.
pub fn extract_slides(presentation: &Presentation) -> Vec<Slide> {
    presentation
        .slides
        .iter()
        .enumerate()
        .map(|(idx, page)| extract_slide(page, idx + 1))
        .collect()
}

/// Flatten a single slide.
pub fn extract_slide(page: &Page, slide_index: usize) -> Slide {
    let mut slide = Slide::new(slide_index, page.object_id.clone());
    for element in &page.page_elements {
        slide.add_element(extract_element(element));
    }
    slide
}

/// Flatten one page element. Elements without text are kept with empty content.
pub fn extract_element(element: &PageElement) -> Element {
    let (element_type, content) = match &element.body {
        ElementBody::Shape(shape) => (Some(ElementKind::Shape), shape.plain_text()),
        ElementBody::TextBox(text_box) => (Some(ElementKind::TextBox), text_box.plain_text()),
        ElementBody::Unclassified => (None, String::new()),
    };

    let (position, size) = match element.transform {
        Some(t) => {
            let (position, size) = geometry(&t);
            (Some(position), Some(size))
        }
        None => (None, None),
    };

    Element {
        object_id: element.object_id.clone(),
        element_type,
        content,
        position,
        size,
    }
}

fn geometry(transform: &AffineTransform) -> (Position, Size) {
    (
        Position {
            x: transform.translate_x,
            y: transform.translate_y,
        },
        Size {
            width: transform.scale_x,
            height: transform.scale_y,
        },
    )
}
