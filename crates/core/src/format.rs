//! Message-content formatter.
//!
//! Turns the semi-structured text of a reply (headings, bold spans, pipe
//! tables, fenced code blocks) into an ordered list of [`ContentSegment`]s
//! that a rendering layer maps one-to-one onto visual elements.
//!
//! The formatter works in two passes:
//!
//! 1. **Fence split.** The input is cut into text pieces and code pieces on
//!    the ```` ``` ```` marker. A code piece runs from an opening marker to
//!    the next marker; an opening marker without a partner runs to the end
//!    of the input and is still emitted as a code block.
//! 2. **Line classification.** Every line of a text piece goes through an
//!    ordered decision table (separator row, `## `, `### `, table row, blank,
//!    paragraph). The first rule that matches wins.
//!
//! The function is pure and total: every string, including the empty one,
//! yields a segment list, and malformed markup degrades to plain text.

use serde::{Deserialize, Serialize};

/// The fence marker that opens and closes a code block.
pub const FENCE: &str = "```";

/// Language label used when a fence carries no tag.
pub const DEFAULT_LANGUAGE: &str = "code";

const BOLD: &str = "**";

/// One classified, ordered unit of formatted output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentSegment {
    /// A `## ` (level 2) or `### ` (level 3) line.
    Heading { level: u8, text: String },

    /// A line of prose with inline emphasis resolved.
    Paragraph { spans: Vec<InlineSpan> },

    /// One row of a pipe table.
    TableRow { cells: Vec<String>, is_header: bool },

    /// A fenced code region, never subdivided.
    CodeBlock { language: String, code: String },

    /// A line that is empty after trimming.
    BlankLine,
}

impl ContentSegment {
    /// Build a paragraph from plain text, resolving `**bold**` spans.
    pub fn paragraph(line: &str) -> Self {
        Self::Paragraph {
            spans: inline_spans(line),
        }
    }

    /// Build a code block, defaulting the language label when it is blank.
    pub fn code_block(language: &str, code: impl Into<String>) -> Self {
        let language = language.trim();
        Self::CodeBlock {
            language: if language.is_empty() {
                DEFAULT_LANGUAGE.to_string()
            } else {
                language.to_string()
            },
            code: code.into(),
        }
    }
}

/// A run of text inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum InlineSpan {
    Text(String),
    Emphasis(String),
}

impl InlineSpan {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(t) | Self::Emphasis(t) => t,
        }
    }
}

/// Format raw reply text into display segments.
///
/// Segments appear in source order: piece order first, then line order
/// within a piece.
pub fn format(text: &str) -> Vec<ContentSegment> {
    let mut segments = Vec::new();
    let mut after_fence = false;

    for piece in split_fences(text) {
        match piece {
            Piece::Code { tag, code } => {
                segments.push(ContentSegment::code_block(tag, code));
                after_fence = true;
            }
            Piece::Text(mut body) => {
                // The newline ending a closing fence line belongs to the fence.
                if after_fence {
                    body = body
                        .strip_prefix("\r\n")
                        .or_else(|| body.strip_prefix('\n'))
                        .unwrap_or(body);
                }
                classify_lines(body, &mut segments);
                after_fence = false;
            }
        }
    }

    segments
}

// --- Pass 1: fence split ---

#[derive(Debug, PartialEq, Eq)]
enum Piece<'a> {
    Text(&'a str),
    Code { tag: &'a str, code: &'a str },
}

fn split_fences(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(FENCE) {
        if open > 0 {
            pieces.push(Piece::Text(&rest[..open]));
        }

        let inner_start = &rest[open + FENCE.len()..];
        let (inner, remainder) = match inner_start.find(FENCE) {
            Some(close) => (&inner_start[..close], &inner_start[close + FENCE.len()..]),
            // Unterminated: the block swallows the rest of the input.
            None => (inner_start, ""),
        };

        pieces.push(code_piece(inner));
        rest = remainder;
    }

    if !rest.is_empty() {
        pieces.push(Piece::Text(rest));
    }

    pieces
}

/// Split the text between two fence markers into its tag line and body.
fn code_piece(inner: &str) -> Piece<'_> {
    match inner.split_once('\n') {
        Some((tag, body)) => {
            let body = body.strip_suffix('\n').unwrap_or(body);
            let body = body.strip_suffix('\r').unwrap_or(body);
            Piece::Code {
                tag: tag.trim(),
                code: body,
            }
        }
        // Opening and closing marker on the same line: the inner text is the tag.
        None => Piece::Code {
            tag: inner.trim(),
            code: "",
        },
    }
}

// --- Pass 2: line classification ---

fn classify_lines(body: &str, out: &mut Vec<ContentSegment>) {
    let lines: Vec<&str> = body.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        if is_separator_row(line) {
            continue;
        }

        if let Some(rest) = line.strip_prefix("## ") {
            out.push(ContentSegment::Heading {
                level: 2,
                text: rest.to_string(),
            });
            continue;
        }

        if let Some(rest) = line.strip_prefix("### ") {
            out.push(ContentSegment::Heading {
                level: 3,
                text: rest.to_string(),
            });
            continue;
        }

        if is_table_row(line) {
            let is_header = lines.get(i + 1).is_some_and(|next| is_separator_row(next));
            out.push(ContentSegment::TableRow {
                cells: table_cells(line),
                is_header,
            });
            continue;
        }

        if line.trim().is_empty() {
            out.push(ContentSegment::BlankLine);
            continue;
        }

        out.push(ContentSegment::paragraph(line));
    }
}

/// A table separator row such as `| --- | :---: |`.
///
/// Only `-`, `|`, `:` and whitespace are allowed, and at least one dash and
/// one pipe must be present.
pub fn is_separator_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.contains('-')
        && trimmed.contains('|')
        && trimmed
            .chars()
            .all(|c| c == '-' || c == '|' || c == ':' || c.is_whitespace())
}

fn is_table_row(line: &str) -> bool {
    line.contains('|') && line.trim_start().starts_with('|')
}

fn table_cells(line: &str) -> Vec<String> {
    line.trim()
        .split('|')
        .filter(|cell| !cell.is_empty())
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Scan left to right for non-overlapping `**...**` pairs.
///
/// An opening marker with no partner stays in the surrounding plain text.
pub fn inline_spans(line: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find(BOLD) {
        let after_open = &rest[open + BOLD.len()..];
        let Some(close) = after_open.find(BOLD) else {
            break;
        };

        if open > 0 {
            spans.push(InlineSpan::Text(rest[..open].to_string()));
        }
        spans.push(InlineSpan::Emphasis(after_open[..close].to_string()));
        rest = &after_open[close + BOLD.len()..];
    }

    if !rest.is_empty() {
        spans.push(InlineSpan::Text(rest.to_string()));
    }

    spans
}
