//! Pagination engine: manuscript + settings + trim → ordered pages.
//!
//! # Algorithm
//! 1. Parse the manuscript into chapters and paragraphs (`manuscript`).
//! 2. Estimate page capacity from settings and trim (`metrics`).
//! 3. For each chapter: close the open page, insert a blank verso if the chapter must
//!    open on a recto, push the heading with its reserved height.
//! 4. Wrap each paragraph (`wrap`) and append lines, breaking to a new page whenever the
//!    next line would exceed the page's line budget.
//! 5. Flush the last page.
//!
//! A run owns all of its buffers. Nothing survives between runs, so identical inputs
//! always produce identical pages, and concurrent runs never interact.

use serde::Serialize;
use tracing::{debug, warn};

use crate::dimensions::cover::printed_page_count;
use crate::dimensions::trim::ResolvedTrim;
use crate::typeset::manuscript::{parse_manuscript, Chapter};
use crate::typeset::metrics::{estimate_capacity, Calibration, PageCapacity};
use crate::typeset::settings::{ConfigWarning, Settings};
use crate::typeset::wrap::wrap_paragraph;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// Semantic role of a laid-out line. Renderers style by kind; the text never carries
/// markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineKind {
    /// Chapter heading. Occupies `PageCapacity::heading_lines` line slots.
    Heading,
    Paragraph {
        /// First line of an indented paragraph; renderers prepend the indent.
        indented: bool,
        /// First line of a paragraph (indented or not).
        opens_paragraph: bool,
        /// Set on the first line of a chapter's opening paragraph when drop caps are on:
        /// the number of lines the initial spans.
        #[serde(skip_serializing_if = "Option::is_none")]
        drop_cap: Option<u8>,
    },
    /// Vertical space between paragraphs, measured in body lines.
    Spacer { height_lines: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    #[serde(flatten)]
    pub kind: LineKind,
    pub text: String,
}

impl Line {
    pub fn heading(title: &str) -> Line {
        Line {
            kind: LineKind::Heading,
            text: title.to_string(),
        }
    }

    pub fn spacer(height_lines: f64) -> Line {
        Line {
            kind: LineKind::Spacer { height_lines },
            text: String::new(),
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, LineKind::Heading)
    }

    /// Plain-text rendering: indented lines get the four-space indent token.
    pub fn display_text(&self) -> String {
        match self.kind {
            LineKind::Paragraph { indented: true, .. } => format!("    {}", self.text),
            _ => self.text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub page_number: u64,
    /// Right-hand page. Always `page_number % 2 == 1`.
    pub is_recto: bool,
    /// Title of the chapter this page belongs to; empty for front matter.
    pub chapter_title: String,
    /// The first line is a chapter heading.
    pub is_chapter_start: bool,
    /// Synthetic blank page inserted so the next chapter opens on a recto.
    pub is_blank: bool,
    pub lines: Vec<Line>,
}

impl Page {
    /// The page as plain text, one line per laid-out line. Spacers become empty lines.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(Line::display_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Result of one pagination run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pagination {
    pub pages: Vec<Page>,
    pub capacity: PageCapacity,
    /// Configuration problems the run worked around. Empty for a clean configuration.
    pub warnings: Vec<ConfigWarning>,
}

impl Pagination {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page faces the printer will bind; feeds the spine calculation.
    pub fn printed_page_count(&self) -> u32 {
        printed_page_count(self.pages.len())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry points
// ────────────────────────────────────────────────────────────────────────────

/// Paginates with the calibrated default measurement constants.
pub fn paginate(manuscript: &str, settings: &Settings, trim: &ResolvedTrim) -> Pagination {
    paginate_with(manuscript, settings, trim, &Calibration::default())
}

pub fn paginate_with(
    manuscript: &str,
    settings: &Settings,
    trim: &ResolvedTrim,
    calibration: &Calibration,
) -> Pagination {
    let (capacity, warnings) = estimate_capacity(settings, trim, calibration);
    for warning in &warnings {
        warn!(trim = %trim.label, "Pagination degraded: {warning}");
    }

    let chapters = parse_manuscript(manuscript);
    let pages = lay_out(&chapters, settings, &capacity);

    debug!(
        chapters = chapters.len(),
        pages = pages.len(),
        lines_per_page = capacity.lines_per_page,
        chars_per_line = capacity.chars_per_line,
        "Pagination complete"
    );

    Pagination {
        pages,
        capacity,
        warnings,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

fn lay_out(chapters: &[Chapter], settings: &Settings, capacity: &PageCapacity) -> Vec<Page> {
    let mut book = PageBuilder::new(settings.start_page_number, capacity.lines_per_page);

    for chapter in chapters {
        book.close_page();

        if let Some(title) = &chapter.title {
            if settings.chapter_start_on_recto && !book.next_is_recto() {
                book.insert_blank_page(title);
            }
            book.chapter_title = title.clone();
            book.push(Line::heading(title), capacity.heading_lines as f64);
        } else {
            book.chapter_title.clear();
        }

        lay_out_paragraphs(&mut book, chapter, settings, capacity);
    }

    book.finish()
}

fn lay_out_paragraphs(
    book: &mut PageBuilder,
    chapter: &Chapter,
    settings: &Settings,
    capacity: &PageCapacity,
) {
    for (index, paragraph) in chapter.paragraphs.iter().enumerate() {
        let opening = index == 0;
        // The opening paragraph of a chapter is set flush.
        let indented = !opening && settings.first_line_indent > 0.0;
        let reserve = if indented { capacity.indent_chars } else { 0 };

        if !opening && capacity.spacer_lines > 0.0 {
            book.push(Line::spacer(capacity.spacer_lines), capacity.spacer_lines);
        }

        let drop_cap = (opening && settings.drop_caps && !chapter.is_front_matter())
            .then_some(settings.drop_cap_lines);

        for (line_index, text) in wrap_paragraph(paragraph, capacity.chars_per_line, reserve)
            .into_iter()
            .enumerate()
        {
            let first = line_index == 0;
            let line = Line {
                kind: LineKind::Paragraph {
                    indented: indented && first,
                    opens_paragraph: first,
                    drop_cap: if first { drop_cap } else { None },
                },
                text,
            };
            book.push(line, 1.0);
        }
    }
}

/// Page assembly state for a single run.
struct PageBuilder {
    pages: Vec<Page>,
    /// Wider than `Settings::start_page_number` so numbering never stalls at its maximum.
    next_number: u64,
    lines_per_page: f64,
    current: Vec<Line>,
    used: f64,
    chapter_title: String,
}

impl PageBuilder {
    fn new(start_page_number: u32, lines_per_page: u32) -> Self {
        PageBuilder {
            pages: Vec::new(),
            next_number: u64::from(start_page_number),
            lines_per_page: lines_per_page as f64,
            current: Vec::new(),
            used: 0.0,
            chapter_title: String::new(),
        }
    }

    fn next_is_recto(&self) -> bool {
        self.next_number % 2 == 1
    }

    /// Appends a line of `weight` line slots, breaking first if it would overflow a
    /// non-empty page.
    fn push(&mut self, line: Line, weight: f64) {
        if self.used + weight > self.lines_per_page && !self.current.is_empty() {
            self.close_page();
        }
        self.current.push(line);
        self.used += weight;
    }

    fn close_page(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.current);
        let is_chapter_start = lines.first().is_some_and(Line::is_heading);
        let title = self.chapter_title.clone();
        self.emit(lines, title, is_chapter_start, false);
        self.used = 0.0;
    }

    fn insert_blank_page(&mut self, upcoming_title: &str) {
        self.emit(Vec::new(), upcoming_title.to_string(), false, true);
    }

    fn emit(
        &mut self,
        lines: Vec<Line>,
        chapter_title: String,
        is_chapter_start: bool,
        is_blank: bool,
    ) {
        let page_number = self.next_number;
        self.pages.push(Page {
            page_number,
            is_recto: page_number % 2 == 1,
            chapter_title,
            is_chapter_start,
            is_blank,
            lines,
        });
        self.next_number += 1;
    }

    fn finish(mut self) -> Vec<Page> {
        self.close_page();
        self.pages
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CHAPTERS: &str = "# One\n\nHello world.\n\n# Two\n\nGoodbye.";

    fn trade_trim() -> ResolvedTrim {
        ResolvedTrim {
            width: 5.5,
            height: 8.5,
            label: "5.5\" × 8.5\"".to_string(),
        }
    }

    fn run(text: &str, settings: &Settings) -> Pagination {
        paginate(text, settings, &trade_trim())
    }

    /// `count` copies of "word": twelve fit on a default 62-character line.
    fn filler(count: usize) -> String {
        vec!["word"; count].join(" ")
    }

    fn chapter_starts(pagination: &Pagination) -> Vec<(u64, String)> {
        pagination
            .pages
            .iter()
            .filter(|p| p.is_chapter_start)
            .map(|p| (p.page_number, p.lines[0].text.clone()))
            .collect()
    }

    fn body_words(pagination: &Pagination) -> Vec<String> {
        pagination
            .pages
            .iter()
            .flat_map(|p| p.lines.iter())
            .filter(|l| matches!(l.kind, LineKind::Paragraph { .. }))
            .flat_map(|l| l.text.split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .collect()
    }

    // ── basic invariants ─────────────────────────────────────────────────────

    #[test]
    fn test_empty_manuscript_yields_no_pages() {
        let pagination = run("", &Settings::default());
        assert!(pagination.is_empty());
        assert!(pagination.warnings.is_empty());
        assert_eq!(pagination.printed_page_count(), 0);
    }

    #[test]
    fn test_page_numbers_are_gap_free_from_start() {
        let text = format!(
            "# One\n\n{}\n\n# Two\n\n{}\n\n# Three\n\nShort.",
            filler(700),
            filler(40)
        );
        for start in [1, 2, 7, 10] {
            let settings = Settings {
                start_page_number: start,
                ..Settings::default()
            };
            let pagination = run(&text, &settings);
            assert!(pagination.pages.len() > 3);
            for (i, page) in pagination.pages.iter().enumerate() {
                assert_eq!(page.page_number, u64::from(start) + i as u64);
                assert_eq!(page.is_recto, page.page_number % 2 == 1);
            }
        }
    }

    #[test]
    fn test_numbering_continues_past_largest_start_number() {
        let settings = Settings {
            start_page_number: u32::MAX,
            chapter_start_on_recto: false,
            ..Settings::default()
        };
        let pagination = run(TWO_CHAPTERS, &settings);
        let numbers: Vec<u64> = pagination.pages.iter().map(|p| p.page_number).collect();
        let first = u64::from(u32::MAX);
        assert_eq!(numbers, vec![first, first + 1]);
        assert!(pagination.pages[0].is_recto);
        assert!(!pagination.pages[1].is_recto);
    }

    #[test]
    fn test_chapter_start_pages_open_with_their_heading() {
        let pagination = run(TWO_CHAPTERS, &Settings::default());
        for page in pagination.pages.iter().filter(|p| p.is_chapter_start) {
            assert!(page.lines[0].is_heading());
            assert_eq!(page.lines[0].text, page.chapter_title);
        }
        assert_eq!(
            chapter_starts(&pagination),
            vec![(1, "One".to_string()), (3, "Two".to_string())]
        );
    }

    #[test]
    fn test_pagination_is_deterministic() {
        let text = format!(
            "Dedication.\n\n# One\n\n{}\n\n{}\n\n# Two\n\n{}",
            filler(150),
            filler(90),
            filler(500)
        );
        let settings = Settings {
            paragraph_spacing: 4.0,
            ..Settings::default()
        };
        let first = run(&text, &settings);
        let second = run(&text, &settings);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first.pages).unwrap(),
            serde_json::to_string(&second.pages).unwrap()
        );
    }

    // ── recto policy ─────────────────────────────────────────────────────────

    #[test]
    fn test_short_chapter_forces_blank_verso() {
        let pagination = run(TWO_CHAPTERS, &Settings::default());
        assert_eq!(pagination.pages.len(), 3);

        let blank = &pagination.pages[1];
        assert_eq!(blank.page_number, 2);
        assert!(blank.is_blank);
        assert!(!blank.is_recto);
        assert!(blank.lines.is_empty());
        assert_eq!(blank.chapter_title, "Two");

        let two = &pagination.pages[2];
        assert_eq!(two.page_number, 3);
        assert!(two.is_recto && two.is_chapter_start);
    }

    #[test]
    fn test_two_page_chapter_needs_no_blank() {
        // 300 words = 25 lines: 22 under the heading on page 1, 3 on page 2
        let text = format!("# One\n\n{}\n\n# Two\n\nGoodbye.", filler(300));
        let pagination = run(&text, &Settings::default());
        assert_eq!(pagination.pages.len(), 3);
        assert!(pagination.pages.iter().all(|p| !p.is_blank));
        assert_eq!(pagination.pages[1].lines.len(), 3);
        assert_eq!(
            chapter_starts(&pagination),
            vec![(1, "One".to_string()), (3, "Two".to_string())]
        );
    }

    #[test]
    fn test_every_chapter_opens_on_recto() {
        let mut text = String::new();
        for (i, words) in [5, 300, 40, 700, 1, 333].iter().enumerate() {
            text.push_str(&format!("# Chapter {i}\n\n{}\n\n{}\n\n", filler(*words), filler(13)));
        }
        let pagination = run(&text, &Settings::default());
        let starts = chapter_starts(&pagination);
        assert_eq!(starts.len(), 6);
        for (number, _) in starts {
            assert_eq!(number % 2, 1, "chapter opened on verso page {number}");
        }
    }

    #[test]
    fn test_even_start_number_blanks_before_first_chapter() {
        let settings = Settings {
            start_page_number: 2,
            ..Settings::default()
        };
        let pagination = run(TWO_CHAPTERS, &settings);
        assert!(pagination.pages[0].is_blank);
        assert_eq!(pagination.pages[0].page_number, 2);
        assert_eq!(pagination.pages[1].page_number, 3);
        assert!(pagination.pages[1].is_chapter_start);
    }

    #[test]
    fn test_recto_off_never_inserts_blanks() {
        let settings = Settings {
            chapter_start_on_recto: false,
            ..Settings::default()
        };
        let pagination = run(TWO_CHAPTERS, &settings);
        assert_eq!(pagination.pages.len(), 2);
        assert!(pagination.pages.iter().all(|p| !p.is_blank));
        assert_eq!(pagination.pages[1].page_number, 2);
        assert!(pagination.pages[1].is_chapter_start);
    }

    // ── breaking & content ───────────────────────────────────────────────────

    #[test]
    fn test_pages_never_exceed_line_budget() {
        let text = format!("# One\n\n{}\n\n{}", filler(1000), filler(1000));
        let settings = Settings {
            paragraph_spacing: 6.0,
            ..Settings::default()
        };
        let pagination = run(&text, &settings);
        let capacity = &pagination.capacity;
        for page in &pagination.pages {
            let used: f64 = page
                .lines
                .iter()
                .map(|l| match l.kind {
                    LineKind::Heading => capacity.heading_lines as f64,
                    LineKind::Spacer { height_lines } => height_lines,
                    LineKind::Paragraph { .. } => 1.0,
                })
                .sum();
            assert!(used <= capacity.lines_per_page as f64 + 1e-9);
        }
    }

    #[test]
    fn test_long_paragraph_keeps_every_word_in_order() {
        let paragraph: String = (0..2000).map(|i| format!("w{i} ")).collect();
        let text = format!("# One\n\n{paragraph}");
        let pagination = run(&text, &Settings::default());
        assert!(pagination.pages.len() > 2);
        let expected: Vec<String> = paragraph.split_whitespace().map(str::to_string).collect();
        assert_eq!(body_words(&pagination), expected);
    }

    #[test]
    fn test_first_paragraph_flush_later_paragraphs_indented() {
        let text = "# One\n\nFirst paragraph.\n\nSecond paragraph.";
        let pagination = run(text, &Settings::default());
        let lines = &pagination.pages[0].lines;
        assert_eq!(
            lines[1].kind,
            LineKind::Paragraph {
                indented: false,
                opens_paragraph: true,
                drop_cap: Some(3)
            }
        );
        assert_eq!(
            lines[2].kind,
            LineKind::Paragraph {
                indented: true,
                opens_paragraph: true,
                drop_cap: None
            }
        );
        assert_eq!(lines[2].display_text(), "    Second paragraph.");
        assert_eq!(
            pagination.pages[0].plain_text(),
            "One\nFirst paragraph.\n    Second paragraph."
        );
    }

    #[test]
    fn test_zero_indent_disables_indentation() {
        let settings = Settings {
            first_line_indent: 0.0,
            ..Settings::default()
        };
        let pagination = run("# One\n\nA.\n\nB.", &settings);
        assert!(pagination.pages[0].lines.iter().all(|l| !matches!(
            l.kind,
            LineKind::Paragraph { indented: true, .. }
        )));
    }

    #[test]
    fn test_drop_cap_marks_only_the_opening_line() {
        let text = format!("# One\n\n{}\n\n{}", filler(100), filler(100));
        let pagination = run(&text, &Settings::default());
        let marked: Vec<&Line> = pagination
            .pages
            .iter()
            .flat_map(|p| p.lines.iter())
            .filter(|l| matches!(l.kind, LineKind::Paragraph { drop_cap: Some(_), .. }))
            .collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(pagination.pages[0].lines[1], *marked[0]);
        // the marker is metadata, never text
        assert!(marked[0].text.starts_with("word"));
    }

    #[test]
    fn test_drop_caps_disabled() {
        let settings = Settings {
            drop_caps: false,
            ..Settings::default()
        };
        let pagination = run(TWO_CHAPTERS, &settings);
        assert!(pagination
            .pages
            .iter()
            .flat_map(|p| p.lines.iter())
            .all(|l| !matches!(l.kind, LineKind::Paragraph { drop_cap: Some(_), .. })));
    }

    #[test]
    fn test_paragraph_spacing_inserts_spacers() {
        let settings = Settings {
            paragraph_spacing: 8.25,
            ..Settings::default()
        };
        let pagination = run("# One\n\nA.\n\nB.\n\nC.", &settings);
        let spacers: Vec<f64> = pagination.pages[0]
            .lines
            .iter()
            .filter_map(|l| match l.kind {
                LineKind::Spacer { height_lines } => Some(height_lines),
                _ => None,
            })
            .collect();
        assert_eq!(spacers, vec![0.5, 0.5]);
    }

    #[test]
    fn test_front_matter_has_no_heading_or_drop_cap() {
        let text = "For Ada.\n\n# One\n\nStory.";
        let pagination = run(text, &Settings::default());
        let front = &pagination.pages[0];
        assert!(!front.is_chapter_start);
        assert_eq!(front.chapter_title, "");
        assert_eq!(
            front.lines[0].kind,
            LineKind::Paragraph {
                indented: false,
                opens_paragraph: true,
                drop_cap: None
            }
        );
        // page 2 is the blank verso, chapter One opens on 3
        assert!(pagination.pages[1].is_blank);
        assert_eq!(chapter_starts(&pagination), vec![(3, "One".to_string())]);
    }

    #[test]
    fn test_unmarked_manuscript_is_paginated() {
        let pagination = run("Just some prose.\n\nAnd more.", &Settings::default());
        assert_eq!(pagination.pages.len(), 1);
        assert!(!pagination.pages[0].is_chapter_start);
        assert_eq!(pagination.pages[0].lines.len(), 2);
    }

    #[test]
    fn test_last_page_of_chapter_keeps_its_own_title() {
        let text = format!("# One\n\n{}\n\n# Two\n\nEnd.", filler(300));
        let pagination = run(&text, &Settings::default());
        assert_eq!(pagination.pages[1].chapter_title, "One");
        assert_eq!(pagination.pages[2].chapter_title, "Two");
    }

    #[test]
    fn test_heading_only_chapter_gets_its_own_page() {
        let pagination = run("# Part One\n\n# One\n\nText.", &Settings::default());
        assert_eq!(pagination.pages[0].lines.len(), 1);
        assert!(pagination.pages[0].is_chapter_start);
        assert!(pagination.pages[1].is_blank);
        assert_eq!(pagination.pages[2].chapter_title, "One");
    }

    // ── degenerate configuration ─────────────────────────────────────────────

    #[test]
    fn test_zero_capacity_degrades_to_one_line_per_page() {
        let settings = Settings {
            margin_top: 4.5,
            margin_bottom: 4.5,
            chapter_start_on_recto: false,
            ..Settings::default()
        };
        let pagination = run("# One\n\nfirst line\n\nsecond line", &settings);
        assert_eq!(pagination.capacity.lines_per_page, 1);
        assert!(matches!(
            pagination.warnings.as_slice(),
            [ConfigWarning::NoVerticalCapacity { .. }]
        ));
        assert_eq!(pagination.pages.len(), 3);
        assert!(pagination.pages.iter().all(|p| p.lines.len() == 1));
    }

    #[test]
    fn test_zero_width_wraps_one_word_per_line() {
        let settings = Settings {
            margin_inner: 3.0,
            margin_outer: 3.0,
            ..Settings::default()
        };
        let pagination = run("# One\n\nthree little words", &settings);
        assert_eq!(pagination.capacity.chars_per_line, 1);
        let body: Vec<&str> = pagination.pages[0].lines[1..]
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(body, vec!["three", "little", "words"]);
    }

    #[test]
    fn test_printed_page_count_rounds_up() {
        let pagination = run(TWO_CHAPTERS, &Settings::default());
        assert_eq!(pagination.pages.len(), 3);
        assert_eq!(pagination.printed_page_count(), 4);
    }
}
