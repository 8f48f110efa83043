use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::Commands;
use crate::commands::{self, help, Session};
use crate::parser::sanitize_user_input;

/// What one line typed at the prompt asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Empty,
    Exit,
    Help,
    Command(Commands),
}

/// Reserved words map to commands; any other line becomes a plan entry.
pub fn interpret(line: &str) -> Input {
    let line = sanitize_user_input(line);
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };
    match (word.to_ascii_lowercase().as_str(), rest.is_empty()) {
        ("exit" | "quit", true) => Input::Exit,
        ("help", true) => Input::Help,
        ("list", true) => Input::Command(Commands::List { live: false }),
        ("waits", true) => Input::Command(Commands::Waits { filter: None, watch: false }),
        ("reservations", true) => Input::Command(Commands::Reservations),
        ("clear", true) => Input::Command(Commands::Clear),
        ("remove", false) if !rest.contains(char::is_whitespace) => {
            Input::Command(Commands::Remove { id: rest.to_string() })
        }
        _ => Input::Command(Commands::Add { entry: vec![trimmed.to_string()], time: None }),
    }
}

pub struct Application {
    session: Session,
}

impl Application {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn run(&mut self) -> Result<()> {
        log::info!("Starting parkplan interactive mode");

        let mut rl = DefaultEditor::new()?;
        println!(
            "parkplan - {} ({} items planned). Type 'help' for commands.",
            self.session.park.name,
            self.session.plan.len()
        );
        let prompt = "🎢 ";

        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    match interpret(&line) {
                        Input::Empty => {}
                        Input::Exit => break,
                        Input::Help => help::print_help(),
                        Input::Command(command) => {
                            if let Err(err) = commands::execute(&mut self.session, command).await {
                                log::debug!("Command failed: {:?}", err);
                                println!("Error: {:#}", err);
                            }
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }
}
