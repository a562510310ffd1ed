//! `dsamentor ask`: one question, one formatted reply.

use std::io::IsTerminal;

use dsamentor_core::Level;
use dsamentor_tutor::ChatSession;

use crate::render::render;

pub async fn run(
    message: String,
    topic: Option<String>,
    level: Option<Level>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (config, tutor) = super::load_tutor()?;
    let mut session =
        ChatSession::new(level.unwrap_or(config.tutor.default_level)).with_topic(topic);

    let Some(exchange) = tutor.send(&mut session, &message).await else {
        return Err("Message is empty; nothing to ask.".into());
    };

    let segments = exchange.reply.segments();
    if json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        print!("{}", render(&segments, std::io::stdout().is_terminal()));
    }

    Ok(())
}
