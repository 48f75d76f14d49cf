use crate::commands::{self, Command, Context, EXIT_TOKENS, GREETING};
use crate::error::{user_message, CliError};
use crate::similarity::jaro_winkler;
use addrbook_config::AppConfig;
use addrbook_core::AddressBook;
use addrbook_store::Store;
use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use tracing::debug;

const FAREWELL: &str = "Good bye!";
const EMPTY_INPUT: &str = "Invalid command";

/// Receives the whole book after every successful mutating command.
pub trait BookSink {
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}

impl BookSink for Store {
    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.save_book(book).with_context(|| "save address book")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Exit(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub page_size: usize,
    pub suggestion_cutoff: f64,
}

impl From<&AppConfig> for Settings {
    fn from(config: &AppConfig) -> Self {
        Self {
            page_size: config.page_size,
            suggestion_cutoff: config.suggestion_cutoff,
        }
    }
}

pub struct Dispatcher<S> {
    book: AddressBook,
    sink: S,
    commands: Vec<Command>,
    settings: Settings,
}

impl<S: BookSink> Dispatcher<S> {
    pub fn new(book: AddressBook, sink: S, settings: Settings) -> Self {
        Self {
            book,
            sink,
            commands: commands::registry(),
            settings,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_parts(self) -> (AddressBook, S) {
        (self.book, self.sink)
    }

    /// Runs one input line. Failures come back as a one-line reply.
    pub fn handle(&mut self, line: &str, today: NaiveDate) -> Outcome {
        let normalized = line
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        if normalized.is_empty() {
            return Outcome::Reply(EMPTY_INPUT.to_string());
        }
        if normalized == GREETING {
            return Outcome::Reply(commands::help_text(&self.commands));
        }
        if EXIT_TOKENS.contains(&normalized.as_str()) {
            return Outcome::Exit(FAREWELL.to_string());
        }

        match self.execute(&normalized, today) {
            Ok(reply) => Outcome::Reply(reply),
            Err(err) => Outcome::Reply(user_message(&err)),
        }
    }

    fn execute(&mut self, line: &str, today: NaiveDate) -> Result<String> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((command, args)) = self
            .commands
            .iter()
            .find_map(|command| command.match_tokens(&tokens).map(|args| (command, args)))
        else {
            return Err(CliError::UnknownCommand {
                suggestions: self.suggest(tokens[0]),
            }
            .into());
        };

        debug!(command = command.keyword, args = args.len(), "dispatching");
        command.check_arity(args.len())?;

        let mut ctx = Context {
            book: &mut self.book,
            page_size: self.settings.page_size,
            today,
        };
        let reply = (command.handler)(&mut ctx, args)?;

        if command.mutates {
            self.sink.save(&self.book)?;
            debug!(records = self.book.len(), "address book saved");
        }
        Ok(reply)
    }

    fn suggest(&self, typed: &str) -> Vec<String> {
        let mut candidates: Vec<&str> = self.commands.iter().map(Command::head).collect();
        candidates.extend([GREETING, EXIT_TOKENS[0], EXIT_TOKENS[1]]);

        let mut suggestions: Vec<String> = Vec::new();
        for candidate in candidates {
            if suggestions.iter().any(|existing| existing == candidate) {
                continue;
            }
            if jaro_winkler(typed, candidate) >= self.settings.suggestion_cutoff {
                suggestions.push(candidate.to_string());
            }
        }
        suggestions
    }
}
