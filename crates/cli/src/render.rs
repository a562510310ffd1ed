//! Terminal rendering of display segments.

use dsamentor_core::{ContentSegment, InlineSpan};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render segments as terminal text. `styled` enables ANSI bold.
pub fn render(segments: &[ContentSegment], styled: bool) -> String {
    let (bold, reset) = if styled { (BOLD, RESET) } else { ("", "") };
    let mut out = String::new();

    for segment in segments {
        match segment {
            ContentSegment::Heading { level: 2, text } => {
                out.push_str(&format!("{bold}{}{reset}\n", text.to_uppercase()));
                out.push_str(&"═".repeat(text.chars().count()));
                out.push('\n');
            }
            ContentSegment::Heading { text, .. } => {
                out.push_str(&format!("\n{bold}{text}{reset}\n"));
            }
            ContentSegment::Paragraph { spans } => {
                for span in spans {
                    match span {
                        InlineSpan::Text(t) => out.push_str(t),
                        InlineSpan::Emphasis(t) => out.push_str(&format!("{bold}{t}{reset}")),
                    }
                }
                out.push('\n');
            }
            ContentSegment::TableRow { cells, is_header } => {
                let row = cells.join(" │ ");
                out.push_str(&format!("│ {row} │\n"));
                if *is_header {
                    out.push_str(&format!("├{}┤\n", "─".repeat(row.chars().count() + 2)));
                }
            }
            ContentSegment::CodeBlock { language, code } => {
                out.push_str(&format!("\n┌─ {language}\n"));
                for line in code.lines() {
                    out.push_str(&format!("│ {line}\n"));
                }
                out.push_str("└─\n");
            }
            ContentSegment::BlankLine => out.push('\n'),
        }
    }

    out
}
