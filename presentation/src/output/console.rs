//! Console output for the terminal form

use colored::Colorize;
use contact_domain::{
    FieldError, FormStep, InquiryDraft, InquiryField, ProjectType, ReferralSource,
};

/// Where the thank-you view sends the inquirer next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitLinks {
    pub portfolio: String,
    pub instagram: String,
}

impl Default for ExitLinks {
    fn default() -> Self {
        Self {
            portfolio: "/portfolio".to_string(),
            instagram: "https://www.instagram.com/ninninummela".to_string(),
        }
    }
}

/// Formats form views for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn welcome() -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Let's create something beautiful"));
        output.push_str("\nAnswer each question and press Enter. Leave a line empty to keep\n");
        output.push_str("the current value. Type /help for commands.\n");
        output
    }

    /// Step tracker plus the step title, e.g. `(1)─(2)─ 3 ─ 4   Details`
    pub fn step_header(step: FormStep) -> String {
        let tracker = FormStep::ALL
            .iter()
            .map(|s| {
                let label = format!("({})", s.number());
                if *s <= step {
                    label.cyan().bold().to_string()
                } else {
                    label.dimmed().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("─");

        format!(
            "\n{}  {}\n{}",
            tracker,
            step.title().bold(),
            "-".repeat(40)
        )
    }

    /// The question for a field, with choices and the current value
    pub fn field_prompt(field: InquiryField, current: Option<&str>) -> String {
        let mut output = field.label().bold().to_string();
        if let Some(choices) = Self::choices(field) {
            output.push_str(&format!(" {}", format!("[{}]", choices).dimmed()));
        }
        if field == InquiryField::DateRange {
            output.push_str(&format!(" {}", "YYYY-MM-DD or YYYY-MM-DD - YYYY-MM-DD".dimmed()));
        }
        if let Some(current) = current {
            output.push_str(&format!("\n  {} {}", "current:".dimmed(), current));
        }
        output
    }

    fn choices(field: InquiryField) -> Option<String> {
        match field {
            InquiryField::ProjectType => Some(
                ProjectType::ALL
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join("/"),
            ),
            InquiryField::ReferralSource => Some(
                ReferralSource::ALL
                    .iter()
                    .map(|r| r.as_str())
                    .collect::<Vec<_>>()
                    .join("/"),
            ),
            _ => None,
        }
    }

    /// Field values on one step
    pub fn step_summary(draft: &InquiryDraft, step: FormStep) -> String {
        step.fields()
            .into_iter()
            .map(|field| {
                let value = draft
                    .get(field)
                    .unwrap_or_else(|| "-".dimmed().to_string());
                format!("  {:<16} {}", field.wire_name().cyan(), value)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every step with its values
    pub fn summary(draft: &InquiryDraft) -> String {
        FormStep::ALL
            .iter()
            .map(|step| format!("{}\n{}", step.to_string().bold(), Self::step_summary(draft, *step)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Inline rule failures, one per line
    pub fn field_errors<'a>(errors: impl IntoIterator<Item = &'a FieldError>) -> String {
        errors
            .into_iter()
            .map(|e| format!("  {} {}", "x".red(), e.message.red()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// What can be typed once every field on the step has been answered
    pub fn step_hint(step: FormStep) -> String {
        let mut commands = Vec::new();
        if step.previous().is_some() {
            commands.push("/back");
        }
        if step.is_last() {
            commands.push("/submit");
        } else {
            commands.push("/next");
        }
        commands.push("/edit");
        format!("{} {}", "->".cyan(), commands.join(", ").dimmed())
    }

    pub fn thank_you(links: &ExitLinks) -> String {
        format!(
            "\n{}\nI've received your message and will be in touch soon.\n\n  {:<16}{}\n  {:<16}{}\n",
            "Thank you!".green().bold(),
            "View Portfolio".bold(),
            links.portfolio.cyan(),
            "Instagram".bold(),
            links.instagram.cyan()
        )
    }

    /// The user-visible error state after a failed submission
    pub fn failure(reason: &str) -> String {
        format!(
            "\n{} {}\n{}\n",
            "Your message could not be sent:".red().bold(),
            reason,
            "Type /retry to try again.".dimmed()
        )
    }

    pub fn help() -> String {
        let commands = [
            ("/next, /n", "Go to the next step"),
            ("/back, /b", "Go to the previous step"),
            ("/step <1-4>", "Jump to a step"),
            ("/edit", "Answer this step's questions again"),
            ("/set <field> [value]", "Set or clear one field"),
            ("/show", "Show everything entered so far"),
            ("/submit, /retry", "Send the inquiry (step 4)"),
            ("/quit", "Leave without sending"),
        ];
        let mut output = format!("\n{}\n", "Commands:".cyan().bold());
        for (command, description) in commands {
            output.push_str(&format!("  {:<22} - {}\n", command, description));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
