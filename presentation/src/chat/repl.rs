//! REPL (Read-Eval-Print Loop) for interactive tutoring

use crate::{ConsoleFormatter, ConsoleReporter, ReplConfig};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::io;
use std::sync::Arc;
use tracing::warn;
use tutor_application::{ChatSessionUseCase, SubmitOutcome};
use tutor_domain::SubmitRejection;

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    /// Set the API key; `None` means prompt for it
    Key(Option<String>),
    ClearKey,
    History,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`. Returns `None` for ordinary input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (rest, None),
        };
        let arg = arg.filter(|a| !a.is_empty()).map(str::to_string);

        Some(match name {
            "help" | "h" | "?" => Self::Help,
            "key" => Self::Key(arg),
            "clear-key" => Self::ClearKey,
            "history" => Self::History,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        })
    }
}

/// One line read at the prompt
#[derive(Debug, PartialEq, Eq)]
enum ReplInput<'a> {
    Blank,
    Command(ReplCommand),
    /// A question, exactly as typed
    Question(&'a str),
}

impl<'a> ReplInput<'a> {
    fn classify(line: &'a str) -> Self {
        if line.trim().is_empty() {
            return Self::Blank;
        }
        match ReplCommand::parse(line) {
            Some(command) => Self::Command(command),
            None => Self::Question(line),
        }
    }
}

/// The key given with `/key`, or one read from the terminal without echo.
fn key_value(
    arg: Option<String>,
    prompt: impl FnOnce() -> io::Result<String>,
) -> io::Result<String> {
    match arg {
        Some(value) => Ok(value),
        None => prompt(),
    }
}

/// Interactive tutoring REPL
pub struct ChatRepl {
    session: Arc<ChatSessionUseCase>,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a REPL over `session`, rendering replies to the console.
    pub fn new(session: Arc<ChatSessionUseCase>, config: ReplConfig) -> Self {
        session.subscribe(Arc::new(
            ConsoleReporter::new().with_progress(config.show_progress),
        ));
        Self { session, config }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(path) = &self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => match ReplInput::classify(&line) {
                    ReplInput::Blank => continue,
                    ReplInput::Command(command) => {
                        // Keys stay out of the history file.
                        if !matches!(command, ReplCommand::Key(_)) {
                            let _ = rl.add_history_entry(line.trim());
                        }
                        if self.handle_command(command) {
                            break;
                        }
                    }
                    ReplInput::Question(question) => {
                        let _ = rl.add_history_entry(line.trim());
                        println!();
                        self.ask(question).await;
                        println!();
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(path) = &self.config.history_file
            && let Err(e) = rl.save_history(path)
        {
            warn!("Failed to save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", ConsoleFormatter::header(&self.session.config().model));
        println!();
        println!(
            "{}",
            ConsoleFormatter::format_transcript(&self.session.transcript())
        );
        if !self.session.has_credential() {
            println!();
            println!("{}", ConsoleFormatter::key_required_notice());
        }
        println!();
        println!("Type /help for commands.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /key [KEY]        - Set the Anthropic API key");
        println!("  /clear-key        - Forget the stored API key");
        println!("  /history          - Show the conversation so far");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Key(value) => {
                let value = match key_value(value, || rpassword::prompt_password("API key: ")) {
                    Ok(v) => v,
                    Err(e) => {
                        println!("{}", ConsoleFormatter::error(&e.to_string()));
                        return false;
                    }
                };
                match self.session.set_credential(&value) {
                    Ok(()) => println!("{}", ConsoleFormatter::notice("API key saved.")),
                    Err(e) => println!("{}", ConsoleFormatter::error(&e.to_string())),
                }
            }
            ReplCommand::ClearKey => match self.session.clear_credential() {
                Ok(()) => println!("{}", ConsoleFormatter::notice("API key cleared.")),
                Err(e) => println!("{}", ConsoleFormatter::error(&e.to_string())),
            },
            ReplCommand::History => {
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::format_transcript(&self.session.transcript())
                );
                println!();
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn ask(&self, question: &str) {
        match self.session.submit(question).await {
            SubmitOutcome::Replied(_) | SubmitOutcome::Failed(_) => {}
            SubmitOutcome::Rejected(SubmitRejection::MissingCredential) => {
                println!("{}", ConsoleFormatter::key_required_notice());
            }
            SubmitOutcome::Rejected(SubmitRejection::Busy) => {
                println!(
                    "{}",
                    ConsoleFormatter::notice("Still waiting for the previous reply.")
                );
            }
            SubmitOutcome::Rejected(SubmitRejection::EmptyInput) => {}
        }
    }
}
