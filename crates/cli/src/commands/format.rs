//! `dsamentor format`: run the content formatter over a file or stdin.

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use crate::render::render;

pub fn run(file: Option<PathBuf>, json: bool) -> dsamentor_core::Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let segments = dsamentor_core::format(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        print!("{}", render(&segments, std::io::stdout().is_terminal()));
    }

    Ok(())
}
