//! Practice quizzes generated from an explanation record.

use crate::assembler::BULLET;
use crate::catalog::Explanation;

/// Words that turn a question into a quiz request.
const QUIZ_TRIGGERS: &[&str] = &["quiz", "mcq"];

/// Whether the learner asked for a quiz.
pub fn wants_quiz(question: &str) -> bool {
    let q = question.to_lowercase();
    QUIZ_TRIGGERS.iter().any(|t| q.contains(t))
}

/// Build a quiz: one question per operation, then one on complexity.
///
/// Operations written as `"Name - description"` become "which operation"
/// questions; bare steps become "what is step n" questions.
pub fn build_quiz(explanation: &Explanation) -> String {
    let record = explanation.record;
    let mut lines = vec![format!(
        "## Quiz: {} ({})",
        explanation.title,
        explanation.level.label()
    )];

    let mut number = 0;
    for (step, op) in record.operations.iter().enumerate() {
        number += 1;
        lines.push(format!("### Question {number}"));
        match op.split_once(" - ") {
            Some((name, description)) => {
                lines.push(format!("Which operation matches: \"{description}\"?"));
                lines.push(format!("{BULLET} **Answer:** {name}"));
            }
            None => {
                lines.push(format!("What is step {} of {}?", step + 1, explanation.title));
                lines.push(format!("{BULLET} **Answer:** {op}"));
            }
        }
    }

    number += 1;
    lines.push(format!("### Question {number}"));
    lines.push(format!(
        "What is the time complexity of {} at the {} level?",
        explanation.title,
        explanation.level.label()
    ));
    lines.push(format!("{BULLET} **Answer:** {}", record.complexity.time));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ExplanationCatalog;
    use dsamentor_core::Level;
    use dsamentor_core::format::{ContentSegment, InlineSpan, format};

    #[test]
    fn detects_quiz_requests() {
        assert!(wants_quiz("Give me a quiz"));
        assert!(wants_quiz("Give me 5 MCQs on arrays"));
        assert!(!wants_quiz("Explain stack"));
    }

    #[test]
    fn stack_quiz_asks_one_question_per_operation() {
        let catalog = ExplanationCatalog::builtin();
        let explanation = catalog.explain("stack", Level::Beginner).unwrap();
        let quiz = build_quiz(&explanation);
        let segments = format(&quiz);

        assert_eq!(
            segments[0],
            ContentSegment::Heading {
                level: 2,
                text: "Quiz: Stack (Beginner)".into()
            }
        );

        let questions = segments
            .iter()
            .filter(|s| matches!(s, ContentSegment::Heading { level: 3, .. }))
            .count();
        assert_eq!(questions, explanation.record.operations.len() + 1);

        assert!(quiz.contains("Which operation matches: \"Add an item to the top\"?"));
        assert_eq!(
            segments[3],
            ContentSegment::Paragraph {
                spans: vec![
                    InlineSpan::Text("• ".into()),
                    InlineSpan::Emphasis("Answer:".into()),
                    InlineSpan::Text(" Push".into()),
                ]
            }
        );
    }

    #[test]
    fn bare_steps_become_numbered_questions() {
        let catalog = ExplanationCatalog::builtin();
        let explanation = catalog.explain("binary search", Level::Beginner).unwrap();
        let quiz = build_quiz(&explanation);
        assert!(quiz.contains("What is step 1 of Binary Search?"));
        assert!(quiz.contains("• **Answer:** Find the middle element"));
        assert!(quiz.ends_with("• **Answer:** O(log n) - much faster than O(n)!"));
    }
}
