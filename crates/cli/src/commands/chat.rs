//! `dsamentor chat`: interactive tutoring session.

use std::io::{IsTerminal, Write};

use dsamentor_core::Level;
use dsamentor_tutor::ChatSession;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render::render;

pub async fn run(topic: Option<String>, level: Option<Level>) -> Result<(), Box<dyn std::error::Error>> {
    let (config, tutor) = super::load_tutor()?;
    let mut session =
        ChatSession::new(level.unwrap_or(config.tutor.default_level)).with_topic(topic);
    let styled = std::io::stdout().is_terminal();

    println!();
    println!("  📚 DSA Mentor: Interactive Mode");
    println!();
    println!("  Provider:  {}", tutor.provider_name());
    println!("  Level:     {}", session.level);
    println!("  Topic:     {}", session.topic.as_deref().unwrap_or("General"));
    println!();
    println!("  /level <beginner|intermediate|advanced>  change level");
    println!("  /topic <name>  focus a topic   /topic  clear it");
    println!("  Type 'exit' or Ctrl+C to quit.");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("  You > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        match parse_command(input) {
            Some(Command::Quit) => break,
            Some(Command::Level(arg)) => {
                match arg.parse::<Level>() {
                    Ok(level) => {
                        session.set_level(level);
                        println!("  Level set to {level}\n");
                    }
                    Err(e) => println!("  {e}\n"),
                }
                continue;
            }
            Some(Command::Topic(arg)) => {
                session.set_topic(Some(arg.to_string()));
                println!(
                    "  Topic: {}\n",
                    session.topic.as_deref().unwrap_or("General")
                );
                continue;
            }
            None => {}
        }

        eprint!("  ...");
        let exchange = tutor.send(&mut session, input).await;
        eprint!("\r     \r");

        if let Some(exchange) = exchange {
            println!();
            print!("{}", render(&exchange.reply.segments(), styled));
            println!();
        }
    }

    println!();
    println!("  Goodbye! 👋");
    println!();

    Ok(())
}

/// A slash command typed at the chat prompt.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Level(&'a str),
    Topic(&'a str),
}

/// Recognize a command by its first word; anything else is a question.
fn parse_command(input: &str) -> Option<Command<'_>> {
    let (word, rest) = match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    };
    match word {
        "exit" | "/quit" if rest.is_empty() => Some(Command::Quit),
        "/level" => Some(Command::Level(rest)),
        "/topic" => Some(Command::Topic(rest)),
        _ => None,
    }
}
