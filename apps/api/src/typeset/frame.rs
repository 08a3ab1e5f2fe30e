//! Physical placement of a laid-out page: which margin sits on which side, what the
//! running header says, and where the folio goes.
//!
//! Renderers and the PDF emitter both consume frames, so they agree on recto/verso
//! mirroring without re-deriving it. Frames never change pagination.

use serde::Serialize;

use crate::dimensions::trim::ResolvedTrim;
use crate::dimensions::units::to_millimeters;
use crate::typeset::paginator::Page;
use crate::typeset::settings::{PageNumberPosition, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolioPlacement {
    pub text: String,
    pub position: PageNumberPosition,
    pub align: HorizontalAlign,
}

/// Page geometry in inches (or millimetres after `to_millimeters`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageFrame {
    pub page_number: u64,
    pub page_width: f64,
    pub page_height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub text_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folio: Option<FolioPlacement>,
}

pub fn frame_page(page: &Page, settings: &Settings, trim: &ResolvedTrim) -> PageFrame {
    // Mirrored: the gutter is on the left of a recto and the right of a verso.
    let (margin_left, margin_right) = if settings.mirror_margins && !page.is_recto {
        (settings.margin_outer, settings.margin_inner)
    } else {
        (settings.margin_inner, settings.margin_outer)
    };

    PageFrame {
        page_number: page.page_number,
        page_width: trim.width,
        page_height: trim.height,
        margin_left,
        margin_right,
        margin_top: settings.margin_top,
        margin_bottom: settings.margin_bottom,
        text_width: trim.width - margin_left - margin_right,
        running_header: running_header(page, settings),
        folio: folio(page, settings),
    }
}

/// Verso carries the book title; recto carries the chapter title. Chapter openings and
/// blank pages carry none.
fn running_header(page: &Page, settings: &Settings) -> Option<String> {
    if !settings.show_running_header || page.is_chapter_start || page.is_blank {
        return None;
    }
    let text = if page.is_recto && !page.chapter_title.is_empty() {
        &page.chapter_title
    } else {
        &settings.book_title
    };
    Some(text.clone())
}

fn folio(page: &Page, settings: &Settings) -> Option<FolioPlacement> {
    if !settings.show_page_numbers || page.is_blank {
        return None;
    }
    let align = match settings.page_number_position {
        PageNumberPosition::BottomCenter => HorizontalAlign::Center,
        PageNumberPosition::BottomOutside | PageNumberPosition::TopOutside => {
            if page.is_recto {
                HorizontalAlign::Right
            } else {
                HorizontalAlign::Left
            }
        }
    };
    Some(FolioPlacement {
        text: page.page_number.to_string(),
        position: settings.page_number_position,
        align,
    })
}

impl PageFrame {
    /// Converts lengths for emitters that work in millimetres.
    pub fn to_millimeters(&self) -> PageFrame {
        PageFrame {
            page_width: to_millimeters(self.page_width),
            page_height: to_millimeters(self.page_height),
            margin_left: to_millimeters(self.margin_left),
            margin_right: to_millimeters(self.margin_right),
            margin_top: to_millimeters(self.margin_top),
            margin_bottom: to_millimeters(self.margin_bottom),
            text_width: to_millimeters(self.text_width),
            ..self.clone()
        }
    }
}
