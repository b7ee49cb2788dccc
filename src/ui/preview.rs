//! Presentation records derived from a design on every read.

use serde::Serialize;

use crate::design::{Alignment, Background, Design, Typography};
use crate::ui::render::{
    resolve_accent_color, resolve_background_fill, resolve_text_color, resolve_typography_style,
    FillSpec, StyleDescriptor,
};
use crate::ui::theme::{FRAME_BORDER_DARK, FRAME_BORDER_LIGHT};

/// Characters of quote text shown on the in-room thumbnail.
pub const ROOM_EXCERPT_CHARS: usize = 60;

/// Everything needed to draw the art preview of a design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSpec {
    pub fill: FillSpec,
    pub text_color: &'static str,
    pub accent_color: &'static str,
    pub alignment: Alignment,
    pub typography: StyleDescriptor,
    pub class_list: String,
    pub quote_line: String,
    pub attribution: Option<String>,
    /// Short accent-colored rule drawn above the quote.
    pub accent_rule: bool,
}

/// Reduced rendering for the art hung in a room photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPreviewSpec {
    pub fill: FillSpec,
    pub frame_border: &'static str,
    pub text_color: &'static str,
    pub accent_color: &'static str,
    pub alignment: Alignment,
    pub excerpt: String,
    pub sans: bool,
    pub uppercase: bool,
    pub bold: bool,
    pub light: bool,
    pub italic: bool,
    pub attribution: Option<String>,
}

pub fn render_preview(design: &Design) -> PreviewSpec {
    let typography = resolve_typography_style(design.typography, design.quote_size);
    PreviewSpec {
        fill: resolve_background_fill(design.background, design.palette),
        text_color: resolve_text_color(design.background, design.palette),
        accent_color: resolve_accent_color(design.background, design.palette),
        alignment: design.alignment,
        class_list: typography.class_list(),
        typography,
        quote_line: quote_line(design.typography, &design.quote.text),
        attribution: attribution(design),
        accent_rule: design.typography == Typography::Editorial,
    }
}

pub fn render_room_preview(design: &Design) -> RoomPreviewSpec {
    let excerpt: String = design
        .quote
        .text
        .chars()
        .take(ROOM_EXCERPT_CHARS)
        .collect();
    let excerpt = match design.typography {
        Typography::BoldStatement => excerpt,
        _ => format!("\"{excerpt}...\""),
    };

    RoomPreviewSpec {
        fill: resolve_background_fill(design.background, design.palette),
        frame_border: match design.background {
            Background::Dark => FRAME_BORDER_DARK,
            _ => FRAME_BORDER_LIGHT,
        },
        text_color: resolve_text_color(design.background, design.palette),
        accent_color: resolve_accent_color(design.background, design.palette),
        alignment: design.alignment,
        excerpt,
        sans: matches!(
            design.typography,
            Typography::BoldStatement | Typography::MinimalModern
        ),
        uppercase: design.typography == Typography::BoldStatement,
        bold: design.typography == Typography::BoldStatement,
        light: design.typography == Typography::MinimalModern,
        italic: matches!(
            design.typography,
            Typography::ClassicSerif | Typography::Poetic | Typography::Handwritten
        ),
        attribution: attribution(design),
    }
}

/// Bold statements are printed bare; everything else is wrapped in quotes.
fn quote_line(typography: Typography, text: &str) -> String {
    match typography {
        Typography::BoldStatement => text.to_string(),
        _ => format!("\"{text}\""),
    }
}

fn attribution(design: &Design) -> Option<String> {
    design
        .show_author
        .then(|| format!("-- {}", design.quote.author))
}
