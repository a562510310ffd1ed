//! `dsamentor topics`: list the topic tree and levels.

use dsamentor_core::Level;
use dsamentor_knowledge::{ExplanationCatalog, TOPICS};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = ExplanationCatalog::builtin();

    println!("📚 Topics\n");
    for topic in TOPICS {
        let marker = if catalog.explain(topic.id, Level::Beginner).is_some() {
            " ✅"
        } else {
            ""
        };
        println!("  {} {}{marker}", topic.icon, topic.name);
        println!("     {}", topic.subtopics.join(", "));
    }

    println!("\n🎚️  Levels\n");
    for level in Level::ALL {
        println!("  {:<13} {}", level.label(), level.description());
    }

    println!("\n  ✅ = prepared explanation: {}", catalog.titles().join(", "));
    Ok(())
}
