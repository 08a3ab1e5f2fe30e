//! Typesetting presets: named bundles of typographic settings applied in one step.
//!
//! Applying a preset is a partial merge. Only the fields a preset defines are written;
//! the trim and margin overrides are optional and leave the current page setup alone
//! when absent.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dimensions::trim::TrimSelection;
use crate::typeset::settings::Settings;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub font_index: usize,
    pub font_size: f64,
    pub line_height: f64,
    pub first_line_indent: f64,
    pub paragraph_spacing: f64,
    pub chapter_font_size: f64,
    pub drop_caps: bool,
    pub drop_cap_lines: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_size_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margins: Option<PresetMargins>,
}

/// Margin overrides in inches. Each side is optional.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PresetMargins {
    pub top: Option<f64>,
    pub bottom: Option<f64>,
    pub inner: Option<f64>,
    pub outer: Option<f64>,
}

pub static PRESETS: [Preset; 6] = [
    Preset {
        name: "Classic Novel",
        description: "Garamond · 11pt · Traditional indented paragraphs with drop caps",
        font_index: 0,
        font_size: 11.0,
        line_height: 1.45,
        first_line_indent: 0.25,
        paragraph_spacing: 0.0,
        chapter_font_size: 22.0,
        drop_caps: true,
        drop_cap_lines: 3,
        trim_size_name: None,
        margins: None,
    },
    Preset {
        name: "Modern Fiction",
        description: "Lora · 11.5pt · Clean contemporary look",
        font_index: 3,
        font_size: 11.5,
        line_height: 1.5,
        first_line_indent: 0.2,
        paragraph_spacing: 2.0,
        chapter_font_size: 26.0,
        drop_caps: false,
        drop_cap_lines: 3,
        trim_size_name: None,
        margins: None,
    },
    Preset {
        name: "Literary Press",
        description: "Spectral · 10.5pt · Tight elegant setting",
        font_index: 6,
        font_size: 10.5,
        line_height: 1.42,
        first_line_indent: 0.3,
        paragraph_spacing: 0.0,
        chapter_font_size: 20.0,
        drop_caps: true,
        drop_cap_lines: 2,
        trim_size_name: None,
        margins: None,
    },
    Preset {
        name: "Poetry Collection",
        description: "Cormorant Garamond · 12pt · Generous leading for verse",
        font_index: 7,
        font_size: 12.0,
        line_height: 1.8,
        first_line_indent: 0.0,
        paragraph_spacing: 8.0,
        chapter_font_size: 18.0,
        drop_caps: false,
        drop_cap_lines: 3,
        trim_size_name: None,
        margins: None,
    },
    Preset {
        name: "Academic / Nonfiction",
        description: "Source Serif · 11pt · Clear reading for dense text",
        font_index: 4,
        font_size: 11.0,
        line_height: 1.5,
        first_line_indent: 0.25,
        paragraph_spacing: 4.0,
        chapter_font_size: 24.0,
        drop_caps: false,
        drop_cap_lines: 3,
        trim_size_name: None,
        margins: None,
    },
    Preset {
        name: "Children's Chapter Book",
        description: "Merriweather · 13pt · Large, friendly setting",
        font_index: 5,
        font_size: 13.0,
        line_height: 1.6,
        first_line_indent: 0.2,
        paragraph_spacing: 6.0,
        chapter_font_size: 28.0,
        drop_caps: true,
        drop_cap_lines: 2,
        trim_size_name: None,
        margins: None,
    },
];

/// Picks a preset by catalog index or by name (case-insensitive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PresetSelector {
    Index(usize),
    Name(String),
}

pub fn find_preset(selector: &PresetSelector) -> Option<&'static Preset> {
    match selector {
        PresetSelector::Index(index) => PRESETS.get(*index),
        PresetSelector::Name(name) => PRESETS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim())),
    }
}

impl Preset {
    pub fn apply_to(&self, settings: &mut Settings) {
        settings.font_index = self.font_index;
        settings.font_size = self.font_size;
        settings.line_height = self.line_height;
        settings.first_line_indent = self.first_line_indent;
        settings.paragraph_spacing = self.paragraph_spacing;
        settings.chapter_font_size = self.chapter_font_size;
        settings.drop_caps = self.drop_caps;
        settings.drop_cap_lines = self.drop_cap_lines;

        if let Some(name) = self.trim_size_name {
            settings.trim = TrimSelection::Named {
                name: name.to_string(),
            };
        }
        if let Some(margins) = self.margins {
            if let Some(top) = margins.top {
                settings.margin_top = top;
            }
            if let Some(bottom) = margins.bottom {
                settings.margin_bottom = bottom;
            }
            if let Some(inner) = margins.inner {
                settings.margin_inner = inner;
            }
            if let Some(outer) = margins.outer {
                settings.margin_outer = outer;
            }
        }
    }
}

/// Applies the selected preset onto `settings`. Returns false, leaving `settings`
/// untouched, when the selector matches nothing.
pub fn apply_preset(settings: &mut Settings, selector: &PresetSelector) -> bool {
    match find_preset(selector) {
        Some(preset) => {
            preset.apply_to(settings);
            true
        }
        None => {
            debug!(?selector, "Preset selector matched nothing; settings unchanged");
            false
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeset::fonts::BOOK_FONTS;

    #[test]
    fn test_every_preset_points_at_a_real_font() {
        for preset in PRESETS.iter() {
            assert!(preset.font_index < BOOK_FONTS.len(), "{}", preset.name);
        }
    }

    #[test]
    fn test_apply_by_index_merges_typography_only() {
        let mut settings = Settings {
            book_title: "Tidewater".to_string(),
            margin_inner: 1.0,
            start_page_number: 9,
            ..Settings::default()
        };
        assert!(apply_preset(&mut settings, &PresetSelector::Index(1)));

        assert_eq!(settings.font_index, 3);
        assert_eq!(settings.font_size, 11.5);
        assert_eq!(settings.paragraph_spacing, 2.0);
        assert!(!settings.drop_caps);
        // untouched fields survive
        assert_eq!(settings.book_title, "Tidewater");
        assert_eq!(settings.margin_inner, 1.0);
        assert_eq!(settings.start_page_number, 9);
        assert_eq!(settings.trim, TrimSelection::default());
    }

    #[test]
    fn test_apply_by_name_is_case_insensitive() {
        let mut settings = Settings::default();
        assert!(apply_preset(
            &mut settings,
            &PresetSelector::Name("poetry collection".to_string())
        ));
        assert_eq!(settings.line_height, 1.8);
        assert_eq!(settings.first_line_indent, 0.0);
    }

    #[test]
    fn test_out_of_range_selector_is_a_no_op() {
        let mut settings = Settings::default();
        let before = settings.clone();
        assert!(!apply_preset(&mut settings, &PresetSelector::Index(PRESETS.len())));
        assert!(!apply_preset(
            &mut settings,
            &PresetSelector::Name("Pulp Western".to_string())
        ));
        assert_eq!(settings, before);
    }

    #[test]
    fn test_page_setup_overrides_apply_only_defined_sides() {
        let preset = Preset {
            trim_size_name: Some("6\" × 9\""),
            margins: Some(PresetMargins {
                inner: Some(1.0),
                ..PresetMargins::default()
            }),
            ..PRESETS[0].clone()
        };
        let mut settings = Settings::default();
        preset.apply_to(&mut settings);
        assert_eq!(
            settings.trim,
            TrimSelection::Named {
                name: "6\" × 9\"".to_string()
            }
        );
        assert_eq!(settings.margin_inner, 1.0);
        assert_eq!(settings.margin_outer, 0.65);
        assert_eq!(settings.margin_top, 0.75);
    }

    #[test]
    fn test_selector_wire_format() {
        let by_index: PresetSelector = serde_json::from_str("2").unwrap();
        let by_name: PresetSelector = serde_json::from_str("\"Literary Press\"").unwrap();
        assert_eq!(find_preset(&by_index), find_preset(&by_name));
    }
}
