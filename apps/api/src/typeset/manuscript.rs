//! Manuscript parsing: plain text → chapters → paragraphs.
//!
//! Conventions:
//! - a line starting with `"# "` opens a chapter titled by the rest of the line
//! - a blank line ends the current paragraph
//! - any other line is joined onto the open paragraph with a single space
//!
//! Text before the first chapter marker is kept as an untitled front-matter chapter.
//! A manuscript with no markers at all is therefore one untitled chapter.

use serde::Serialize;

pub const CHAPTER_MARKER: &str = "# ";

#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    /// `None` for front matter preceding the first chapter marker.
    pub title: Option<String>,
    pub paragraphs: Vec<String>,
}

impl Chapter {
    pub fn is_front_matter(&self) -> bool {
        self.title.is_none()
    }
}

pub fn parse_manuscript(text: &str) -> Vec<Chapter> {
    let mut chapters: Vec<Chapter> = Vec::new();
    let mut current = Chapter {
        title: None,
        paragraphs: Vec::new(),
    };
    let mut pending: Vec<&str> = Vec::new();

    for line in text.lines() {
        if let Some(title) = line.strip_prefix(CHAPTER_MARKER) {
            flush_paragraph(&mut pending, &mut current);
            let finished = std::mem::replace(
                &mut current,
                Chapter {
                    title: Some(title.trim().to_string()),
                    paragraphs: Vec::new(),
                },
            );
            // Front matter survives only if it actually holds text.
            if !(finished.is_front_matter() && finished.paragraphs.is_empty()) {
                chapters.push(finished);
            }
        } else if line.trim().is_empty() {
            flush_paragraph(&mut pending, &mut current);
        } else {
            pending.push(line);
        }
    }
    flush_paragraph(&mut pending, &mut current);
    if !(current.is_front_matter() && current.paragraphs.is_empty()) {
        chapters.push(current);
    }

    chapters
}

fn flush_paragraph(pending: &mut Vec<&str>, chapter: &mut Chapter) {
    if pending.is_empty() {
        return;
    }
    chapter.paragraphs.push(pending.join(" "));
    pending.clear();
}

// ────────────────────────────────────────────────────────────────────────────
// Stats
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManuscriptStats {
    pub word_count: usize,
    pub char_count: usize,
    /// Titled chapters only; front matter is not counted.
    pub chapter_count: usize,
}

pub fn manuscript_stats(text: &str, chapters: &[Chapter]) -> ManuscriptStats {
    ManuscriptStats {
        word_count: text.split_whitespace().count(),
        char_count: text.chars().count(),
        chapter_count: chapters.iter().filter(|c| !c.is_front_matter()).count(),
    }
}
