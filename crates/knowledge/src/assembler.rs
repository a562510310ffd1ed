//! Response assembler: explanation record → reply text.
//!
//! The text uses exactly the formatter's vocabulary: one `##` title, `###`
//! section headings, and `•` bullet lines. Sections are joined by single
//! newlines, so the formatted output alternates heading and paragraphs
//! with no blank lines in between. Code samples travel next to the text as
//! a parallel list and are displayed after it.

use dsamentor_core::{CodeSample, Level};
use tracing::debug;

use crate::catalog::{Explanation, ExplanationCatalog};
use crate::topics::display_title;

/// Glyph that starts every bullet line.
pub const BULLET: &str = "•";

/// Reply text plus the code samples shown after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledReply {
    pub content: String,
    pub code_samples: Vec<CodeSample>,
}

/// Render one explanation as a single text blob.
pub fn build_explanation_text(explanation: &Explanation) -> String {
    let record = explanation.record;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "## {} ({} Level)",
        explanation.title,
        explanation.level.label()
    ));

    lines.push("### Definition".into());
    lines.push(record.definition.into());

    lines.push("### Analogy".into());
    lines.push(record.analogy.into());

    lines.push("### Operations".into());
    lines.extend(record.operations.iter().map(|op| format!("{BULLET} {op}")));

    lines.push("### Complexity".into());
    lines.push(format!("{BULLET} **Time:** {}", record.complexity.time));
    lines.push(format!("{BULLET} **Space:** {}", record.complexity.space));

    lines.push("### Example".into());
    lines.push(record.example.into());

    lines.join("\n")
}

/// Look up `topic` at `level` and assemble the reply, or `None` on a miss.
pub fn assemble(catalog: &ExplanationCatalog, topic: &str, level: Level) -> Option<AssembledReply> {
    let Some(explanation) = catalog.explain(topic, level) else {
        debug!(topic, level = %level, "No prepared explanation");
        return None;
    };
    Some(AssembledReply {
        content: build_explanation_text(&explanation),
        code_samples: explanation
            .record
            .code
            .iter()
            .map(|c| CodeSample::new(c.language, c.code))
            .collect(),
    })
}

/// Generic reply used when no prepared explanation matches.
pub fn fallback_text(catalog: &ExplanationCatalog, topic: Option<&str>, level: Level) -> String {
    let prepared = catalog.titles().join(", ");
    match topic.map(str::trim).filter(|t| !t.is_empty()) {
        Some(topic) => {
            let title = display_title(topic);
            format!(
                "## {title}\n\
                 I don't have a prepared **{}** explanation for **{title}** yet.\n\
                 Prepared topics: {prepared}.\n\
                 Try asking about one of them, or rephrase your question.",
                level.label()
            )
        }
        None => format!(
            "## DSA Mentor\n\
             Pick a topic from the sidebar or mention one in your question.\n\
             Prepared topics: {prepared}."
        ),
    }
}
