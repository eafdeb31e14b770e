//! Slash commands understood by the terminal form

use contact_domain::{FormStep, InquiryField};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("No step {0}; steps are 1 to 4")]
    InvalidStep(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Next,
    Back,
    Step(FormStep),
    /// Set a field directly, on any step. An empty value clears it.
    Set(InquiryField, String),
    /// Move the cursor back to the first field of the step
    Edit,
    /// Submit, or retry after a failure
    Submit,
    Show,
    Help,
    Quit,
}

impl FromStr for FormCommand {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let input = input.strip_prefix('/').unwrap_or(input);
        let (name, rest) = match input.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (input, ""),
        };

        match name.to_lowercase().as_str() {
            "next" | "n" => Ok(FormCommand::Next),
            "back" | "b" | "prev" | "previous" => Ok(FormCommand::Back),
            "step" | "s" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("/step <1-4>"));
                }
                rest.parse::<u8>()
                    .ok()
                    .and_then(|n| FormStep::from_number(n).ok())
                    .map(FormCommand::Step)
                    .ok_or_else(|| CommandError::InvalidStep(rest.to_string()))
            }
            "set" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("/set <field> [value]"));
                }
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let field = parse_field(field)?;
                Ok(FormCommand::Set(field, value.trim().to_string()))
            }
            "edit" | "e" => Ok(FormCommand::Edit),
            "submit" | "send" | "retry" => Ok(FormCommand::Submit),
            "show" => Ok(FormCommand::Show),
            "help" | "h" | "?" => Ok(FormCommand::Help),
            "quit" | "exit" | "q" => Ok(FormCommand::Quit),
            _ => Err(CommandError::Unknown(format!("/{}", name))),
        }
    }
}

/// Accepts wire names (`projectType`) and snake_case (`project_type`)
fn parse_field(name: &str) -> Result<InquiryField, CommandError> {
    let normalized: String = name.chars().filter(|c| *c != '_' && *c != '-').collect();
    InquiryField::ALL
        .into_iter()
        .find(|f| f.wire_name().eq_ignore_ascii_case(&normalized))
        .ok_or_else(|| CommandError::UnknownField(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_commands() {
        assert_eq!("/next".parse::<FormCommand>().unwrap(), FormCommand::Next);
        assert_eq!("/b".parse::<FormCommand>().unwrap(), FormCommand::Back);
        assert_eq!(
            "/step 3".parse::<FormCommand>().unwrap(),
            FormCommand::Step(FormStep::Details)
        );
        assert_eq!("/retry".parse::<FormCommand>().unwrap(), FormCommand::Submit);
    }

    #[test]
    fn test_step_out_of_range() {
        assert_eq!(
            "/step 5".parse::<FormCommand>(),
            Err(CommandError::InvalidStep("5".to_string()))
        );
        assert_eq!(
            "/step".parse::<FormCommand>(),
            Err(CommandError::Usage("/step <1-4>"))
        );
    }

    #[test]
    fn test_set_accepts_field_spellings() {
        assert_eq!(
            "/set project_type Event".parse::<FormCommand>().unwrap(),
            FormCommand::Set(InquiryField::ProjectType, "Event".to_string())
        );
        assert_eq!(
            "/set dateRange 2024-06-01 - 2024-06-03".parse::<FormCommand>().unwrap(),
            FormCommand::Set(InquiryField::DateRange, "2024-06-01 - 2024-06-03".to_string())
        );
        assert_eq!(
            "/set phone".parse::<FormCommand>().unwrap(),
            FormCommand::Set(InquiryField::Phone, String::new())
        );
        assert!(matches!(
            "/set budget 100".parse::<FormCommand>(),
            Err(CommandError::UnknownField(_))
        ));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            "/dance".parse::<FormCommand>(),
            Err(CommandError::Unknown("/dance".to_string()))
        );
    }
}
