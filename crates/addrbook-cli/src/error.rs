use addrbook_config::ConfigError;
use addrbook_core::CoreError;
use addrbook_store::error::{StoreError, StoreErrorKind};
use anyhow::Error;
use std::process::ExitCode;
use thiserror::Error as ThisError;
use tracing::warn;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum CliError {
    #[error("Give me {hint} please")]
    NotEnoughArguments { hint: String },
    #[error("Too many arguments provided")]
    TooManyArguments,
    #[error("{}", unknown_command_message(.suggestions))]
    UnknownCommand { suggestions: Vec<String> },
    #[error("Page size should be a positive number, got {0}")]
    InvalidPageSize(String),
    #[error("Contact {0} has no birthday set")]
    NoBirthday(String),
}

fn unknown_command_message(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        "An unknown command.".to_string()
    } else {
        format!(
            "An unknown command. Maybe you mean: {}",
            suggestions.join(", ")
        )
    }
}

/// Single-line reply for a failed command.
///
/// Input problems are shown as-is; anything else becomes a generic failure line.
pub fn user_message(err: &Error) -> String {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return cli_err.to_string();
        }
        if let Some(core_err) = cause.downcast_ref::<CoreError>() {
            return core_err.to_string();
        }
    }
    warn!("command failed: {:#}", err);
    format!("Something went wrong: {:#}", err)
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if cause.downcast_ref::<CliError>().is_some() {
            return EXIT_INVALID_INPUT;
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return store_exit_code(store_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
        if cause.downcast_ref::<CoreError>().is_some() {
            return EXIT_INVALID_INPUT;
        }
    }
    EXIT_FAILURE
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::InvalidDataPath | StoreErrorKind::Core => EXIT_INVALID_INPUT,
        StoreErrorKind::MissingHomeDir
        | StoreErrorKind::Migration
        | StoreErrorKind::Sql
        | StoreErrorKind::Io => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidPageSize(_)
        | ConfigError::InvalidSuggestionCutoff(_)
        | ConfigError::InvalidBookPath(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_status_for, user_message, CliError, EXIT_FAILURE, EXIT_INVALID_INPUT};
    use addrbook_config::ConfigError;
    use addrbook_core::CoreError;
    use addrbook_store::error::StoreError;
    use anyhow::anyhow;
    use std::path::PathBuf;

    #[test]
    fn user_message_shows_validation_reason_verbatim() {
        let err = anyhow::Error::from(CoreError::InvalidPhone);
        assert_eq!(
            user_message(&err),
            "Phone number should have 10-12 numbers without space"
        );
    }

    #[test]
    fn user_message_looks_through_context() {
        let err = anyhow::Error::from(CoreError::ContactNotFound("John".to_string()))
            .context("show phone");
        assert_eq!(user_message(&err), "Contact John not found");
    }

    #[test]
    fn user_message_formats_unknown_command() {
        let err = anyhow::Error::from(CliError::UnknownCommand {
            suggestions: vec!["find".to_string()],
        });
        assert_eq!(
            user_message(&err),
            "An unknown command. Maybe you mean: find"
        );
        let err = anyhow::Error::from(CliError::UnknownCommand {
            suggestions: Vec::new(),
        });
        assert_eq!(user_message(&err), "An unknown command.");
    }

    #[test]
    fn user_message_hides_internal_failures_behind_generic_line() {
        let err = anyhow!("disk full").context("save address book");
        assert_eq!(
            user_message(&err),
            "Something went wrong: save address book: disk full"
        );
    }

    #[test]
    fn exit_codes_follow_error_kind() {
        let err = anyhow::Error::from(ConfigError::MissingConfigFile(PathBuf::from("x")))
            .context("load config");
        assert_eq!(exit_status_for(&err), EXIT_INVALID_INPUT);

        let err = anyhow::Error::from(StoreError::Migration("newer".to_string()))
            .context("run migrations");
        assert_eq!(exit_status_for(&err), EXIT_FAILURE);

        let err = anyhow!("boom").context("anything");
        assert_eq!(exit_status_for(&err), EXIT_FAILURE);
    }
}
