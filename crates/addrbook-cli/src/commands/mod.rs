use addrbook_core::AddressBook;
use anyhow::Result;
use chrono::NaiveDate;

use crate::error::CliError;

pub mod birthdays;
pub mod contacts;
pub mod phones;

pub const GREETING: &str = "hello";
pub const EXIT_TOKENS: [&str; 3] = ["exit", "close", "good bye"];

/// State a handler may read or change.
pub struct Context<'a> {
    pub book: &'a mut AddressBook,
    pub page_size: usize,
    pub today: NaiveDate,
}

/// Handlers receive arguments already checked against the command's [`Arity`].
pub type Handler = fn(&mut Context<'_>, &[&str]) -> Result<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Range { min: usize, max: usize },
}

impl Arity {
    pub fn bounds(self) -> (usize, usize) {
        match self {
            Arity::Exact(count) => (count, count),
            Arity::Range { min, max } => (min, max),
        }
    }
}

#[derive(Clone, Copy)]
pub struct Command {
    pub keyword: &'static str,
    pub params: &'static [&'static str],
    pub arity: Arity,
    pub mutates: bool,
    pub help: &'static str,
    pub handler: Handler,
}

impl Command {
    pub fn check_arity(&self, count: usize) -> Result<(), CliError> {
        let (min, max) = self.arity.bounds();
        if count < min {
            return Err(CliError::NotEnoughArguments {
                hint: self.hint(min),
            });
        }
        if count > max {
            return Err(CliError::TooManyArguments);
        }
        Ok(())
    }

    /// First token of the keyword, used for typo suggestions.
    pub fn head(&self) -> &'static str {
        self.keyword
            .split_whitespace()
            .next()
            .unwrap_or(self.keyword)
    }

    /// Splits `tokens` into arguments when they start with this keyword.
    pub fn match_tokens<'t>(&self, tokens: &'t [&'t str]) -> Option<&'t [&'t str]> {
        let keyword: Vec<&str> = self.keyword.split_whitespace().collect();
        if tokens.len() < keyword.len() {
            return None;
        }
        let (head, rest) = tokens.split_at(keyword.len());
        (head == keyword.as_slice()).then_some(rest)
    }

    fn hint(&self, required: usize) -> String {
        let names: Vec<String> = self
            .params
            .iter()
            .take(required)
            .map(|param| param.replace('_', " "))
            .collect();
        match names.split_last() {
            None => String::new(),
            Some((last, [])) => last.clone(),
            Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
        }
    }

    fn help_line(&self) -> String {
        let (min, _) = self.arity.bounds();
        if self.params.is_empty() {
            return format!("{} --> {}", self.keyword, self.help);
        }
        let params: Vec<String> = self
            .params
            .iter()
            .enumerate()
            .map(|(index, param)| {
                if index < min {
                    param.to_string()
                } else {
                    format!("{param}?")
                }
            })
            .collect();
        format!("{} [{}] --> {}", self.keyword, params.join(" "), self.help)
    }
}

/// Every command, longer keywords ahead of their one-word prefixes.
pub fn registry() -> Vec<Command> {
    vec![
        Command {
            keyword: "add",
            params: &["name", "phone"],
            arity: Arity::Exact(2),
            mutates: true,
            help: "Add a new contact",
            handler: contacts::add_contact,
        },
        Command {
            keyword: "number",
            params: &["name", "phone"],
            arity: Arity::Exact(2),
            mutates: true,
            help: "Add another phone to a contact",
            handler: phones::add_phone,
        },
        Command {
            keyword: "change phone",
            params: &["name", "old_phone", "new_phone"],
            arity: Arity::Exact(3),
            mutates: true,
            help: "Replace a contact's phone",
            handler: phones::change_phone,
        },
        Command {
            keyword: "change",
            params: &["name", "old_phone", "new_phone"],
            arity: Arity::Exact(3),
            mutates: true,
            help: "Same as change phone",
            handler: phones::change_phone,
        },
        Command {
            keyword: "show phone",
            params: &["name"],
            arity: Arity::Exact(1),
            mutates: false,
            help: "Show a contact",
            handler: contacts::show_contact,
        },
        Command {
            keyword: "show all",
            params: &[],
            arity: Arity::Exact(0),
            mutates: false,
            help: "Show all contacts",
            handler: contacts::show_all,
        },
        Command {
            keyword: "show book",
            params: &["page_size"],
            arity: Arity::Range { min: 0, max: 1 },
            mutates: false,
            help: "Show all contacts page by page",
            handler: contacts::show_book,
        },
        Command {
            keyword: "phone",
            params: &["name"],
            arity: Arity::Exact(1),
            mutates: false,
            help: "Same as show phone",
            handler: contacts::show_contact,
        },
        Command {
            keyword: "del contact",
            params: &["name"],
            arity: Arity::Exact(1),
            mutates: true,
            help: "Delete a contact",
            handler: contacts::delete_contact,
        },
        Command {
            keyword: "del phone",
            params: &["name", "phone"],
            arity: Arity::Exact(2),
            mutates: true,
            help: "Delete one phone of a contact",
            handler: phones::delete_phone,
        },
        Command {
            keyword: "del",
            params: &["name"],
            arity: Arity::Exact(1),
            mutates: true,
            help: "Same as del contact",
            handler: contacts::delete_contact,
        },
        Command {
            keyword: "birthday",
            params: &["name", "date"],
            arity: Arity::Exact(2),
            mutates: true,
            help: "Set a contact's birthday (YYYY-MM-DD)",
            handler: birthdays::set_birthday,
        },
        Command {
            keyword: "days",
            params: &["name"],
            arity: Arity::Exact(1),
            mutates: false,
            help: "Days until a contact's next birthday",
            handler: birthdays::days_to_birthday,
        },
        Command {
            keyword: "find",
            params: &["text"],
            arity: Arity::Exact(1),
            mutates: false,
            help: "Search names, phones and birthdays",
            handler: contacts::find_contacts,
        },
        Command {
            keyword: "rename",
            params: &["old_name", "new_name"],
            arity: Arity::Exact(2),
            mutates: true,
            help: "Rename a contact",
            handler: contacts::rename_contact,
        },
    ]
}

pub fn help_text(commands: &[Command]) -> String {
    let mut lines: Vec<String> = commands.iter().map(Command::help_line).collect();
    lines.push(format!(
        "{} --> Save the address book and exit",
        EXIT_TOKENS.join(", ")
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{help_text, registry, Arity, CliError};

    fn command(keyword: &str) -> super::Command {
        registry()
            .into_iter()
            .find(|command| command.keyword == keyword)
            .expect("registered")
    }

    #[test]
    fn multi_word_keywords_precede_their_prefixes() {
        let commands = registry();
        for (index, command) in commands.iter().enumerate() {
            for earlier in &commands[..index] {
                let tokens: Vec<&str> = command.keyword.split_whitespace().collect();
                assert!(
                    earlier.match_tokens(&tokens).is_none(),
                    "{} is shadowed by {}",
                    command.keyword,
                    earlier.keyword
                );
            }
        }
    }

    #[test]
    fn match_tokens_requires_whole_words() {
        let add = command("add");
        assert_eq!(add.match_tokens(&["add", "john"]), Some(&["john"][..]));
        assert_eq!(add.match_tokens(&["address", "john"]), None);

        let show_all = command("show all");
        assert_eq!(show_all.match_tokens(&["show", "all"]), Some(&[][..]));
        assert_eq!(show_all.match_tokens(&["show"]), None);
    }

    #[test]
    fn check_arity_builds_hints() {
        assert_eq!(
            command("add").check_arity(1).unwrap_err(),
            CliError::NotEnoughArguments {
                hint: "name and phone".to_string()
            }
        );
        assert_eq!(
            command("change phone").check_arity(0).unwrap_err(),
            CliError::NotEnoughArguments {
                hint: "name, old phone and new phone".to_string()
            }
        );
        assert_eq!(
            command("days").check_arity(2).unwrap_err(),
            CliError::TooManyArguments
        );
        assert!(command("show book").check_arity(0).is_ok());
        assert!(command("show book").check_arity(1).is_ok());
        assert_eq!(command("show book").arity, Arity::Range { min: 0, max: 1 });
    }

    #[test]
    fn help_text_lists_every_command() {
        let help = help_text(&registry());
        assert!(help.contains("add [name phone] --> Add a new contact"));
        assert!(help.contains("show all --> Show all contacts"));
        assert!(help.contains("show book [page_size?] --> "));
        assert!(help.ends_with("exit, close, good bye --> Save the address book and exit"));
        assert_eq!(help.lines().count(), registry().len() + 1);
    }
}
