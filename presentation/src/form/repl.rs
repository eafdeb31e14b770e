//! REPL driving the four-step inquiry form

use crate::form::command::FormCommand;
use crate::form::input::{InputEvent, LineInput};
use crate::output::console::{ConsoleFormatter, ExitLinks};
use crate::progress::reporter::SubmitSpinner;
use colored::Colorize;
use contact_application::{FormSession, InquiryTransport, NoProgress};
use contact_domain::{FormError, FormStep, InquiryField, SubmissionStatus};
use std::io;

enum Flow {
    Continue,
    Quit,
}

/// Interactive terminal form
pub struct FormRepl<T: InquiryTransport + ?Sized> {
    session: FormSession<T>,
    /// Index into the active step's fields; `None` once they are all answered
    cursor: Option<usize>,
    show_progress: bool,
    links: ExitLinks,
}

impl<T: InquiryTransport + ?Sized> FormRepl<T> {
    pub fn new(session: FormSession<T>) -> Self {
        Self {
            session,
            cursor: Some(0),
            show_progress: true,
            links: ExitLinks::default(),
        }
    }

    /// Set the links shown after a successful submission
    pub fn with_links(mut self, links: ExitLinks) -> Self {
        self.links = links;
        self
    }

    /// Set whether to show the sending spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn session(&self) -> &FormSession<T> {
        &self.session
    }

    /// The field that plain input will answer
    pub fn current_field(&self) -> Option<InquiryField> {
        self.cursor
            .and_then(|i| self.session.step().fields().get(i).copied())
    }

    /// Run until the inquiry is sent or the inquirer leaves
    pub async fn run(&mut self, input: &mut dyn LineInput) -> io::Result<SubmissionStatus> {
        println!("{}", ConsoleFormatter::welcome());
        self.enter_step();

        loop {
            if let Some(field) = self.current_field() {
                let current = self.session.draft().get(field);
                println!("{}", ConsoleFormatter::field_prompt(field, current.as_deref()));
            }

            match input.read_line(&self.prompt())? {
                InputEvent::Line(line) => {
                    if let Flow::Quit = self.handle_line(&line).await {
                        break;
                    }
                    if self.session.state().is_submitted() {
                        break;
                    }
                }
                InputEvent::Interrupted => println!("^C"),
                InputEvent::Eof => break,
            }
        }

        Ok(self.session.state().status().clone())
    }

    fn prompt(&self) -> String {
        let step = self.session.step();
        match self.current_field() {
            Some(field) => format!("{}/4 {}", step.number(), field.wire_name()),
            None => format!("{}/4", step.number()),
        }
    }

    async fn handle_line(&mut self, line: &str) -> Flow {
        let line = line.trim();

        if line.starts_with('/') {
            return match line.parse::<FormCommand>() {
                Ok(command) => self.apply(command).await,
                Err(e) => {
                    println!("{}", e.to_string().red());
                    println!("Type /help for available commands");
                    Flow::Continue
                }
            };
        }

        match self.current_field() {
            Some(field) => {
                if !line.is_empty() {
                    self.session.set_field(field, line);
                }
                self.advance_cursor();
            }
            None if !line.is_empty() => {
                println!("{}", ConsoleFormatter::step_hint(self.session.step()));
            }
            None => {}
        }
        Flow::Continue
    }

    async fn apply(&mut self, command: FormCommand) -> Flow {
        match command {
            FormCommand::Next => {
                let before = self.session.step();
                if self.session.next() != before {
                    self.enter_step();
                }
            }
            FormCommand::Back => {
                let before = self.session.step();
                if self.session.previous() != before {
                    self.enter_step();
                }
            }
            FormCommand::Step(step) => {
                self.session.jump_to(step);
                self.enter_step();
            }
            FormCommand::Set(field, value) => {
                self.session.set_field(field, &value);
                let errors = self.session.step_errors();
                let field_errors: Vec<_> = errors
                    .iter()
                    .filter(|e| e.field == field.wire_name())
                    .collect();
                if !field_errors.is_empty() {
                    println!("{}", ConsoleFormatter::field_errors(field_errors));
                }
            }
            FormCommand::Edit => self.enter_step(),
            FormCommand::Submit => self.submit().await,
            FormCommand::Show => println!("\n{}\n", ConsoleFormatter::summary(self.session.draft())),
            FormCommand::Help => println!("{}", ConsoleFormatter::help()),
            FormCommand::Quit => {
                println!("Bye!");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn enter_step(&mut self) {
        self.cursor = Some(0);
        println!("{}", ConsoleFormatter::step_header(self.session.step()));
    }

    fn advance_cursor(&mut self) {
        let next = self.cursor.map(|i| i + 1);
        let count = self.session.step().fields().len();
        self.cursor = next.filter(|i| *i < count);

        if self.cursor.is_none() {
            let step = self.session.step();
            println!("{}", ConsoleFormatter::step_summary(self.session.draft(), step));
            let errors = self.session.step_errors();
            if !errors.is_empty() {
                println!("{}", ConsoleFormatter::field_errors(&errors));
            }
            println!("{}", ConsoleFormatter::step_hint(step));
        }
    }

    async fn submit(&mut self) {
        let result = if self.show_progress {
            self.session.submit_with_progress(&SubmitSpinner::new()).await
        } else {
            self.session.submit_with_progress(&NoProgress).await
        };

        match result {
            Ok(SubmissionStatus::Submitted) => println!("{}", ConsoleFormatter::thank_you(&self.links)),
            Ok(SubmissionStatus::Failed { reason }) => {
                println!("{}", ConsoleFormatter::failure(&reason))
            }
            Ok(_) => {}
            Err(FormError::Invalid(errors)) => {
                println!("{}", "Some fields need attention.".yellow());
                if let Some(step) = errors.first_step() {
                    self.session.jump_to(step);
                    self.enter_step();
                    println!("{}", ConsoleFormatter::field_errors(errors.for_step(step)));
                }
            }
            Err(FormError::NotOnFinalStep) => {
                let last = FormStep::LAST.number();
                let hint = format!("Submit is available on step {last}. Use /step {last}.");
                println!("{}", hint.yellow());
            }
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contact_application::TransportError;
    use contact_domain::Inquiry;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    // ==================== Test Mocks ====================

    struct ScriptedInput {
        lines: VecDeque<String>,
    }

    impl ScriptedInput {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|l| l.to_string()).collect(),
            }
        }
    }

    impl LineInput for ScriptedInput {
        fn read_line(&mut self, _prompt: &str) -> io::Result<InputEvent> {
            Ok(self
                .lines
                .pop_front()
                .map(InputEvent::Line)
                .unwrap_or(InputEvent::Eof))
        }
    }

    #[derive(Default)]
    struct RecordingTransport {
        received: Mutex<Vec<Inquiry>>,
        failures_left: Mutex<usize>,
    }

    impl RecordingTransport {
        fn failing_once() -> Self {
            Self {
                failures_left: Mutex::new(1),
                ..Default::default()
            }
        }

        fn received(&self) -> Vec<Inquiry> {
            self.received.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl InquiryTransport for RecordingTransport {
        async fn submit(&self, inquiry: &Inquiry) -> Result<(), TransportError> {
            self.received.lock().unwrap().push(inquiry.clone());
            let mut failures = self.failures_left.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(TransportError::Rejected {
                    status: 500,
                    message: "Failed to send message".to_string(),
                });
            }
            Ok(())
        }
    }

    fn repl(transport: &Arc<RecordingTransport>) -> FormRepl<RecordingTransport> {
        FormRepl::new(FormSession::new(transport.clone())).with_progress(false)
    }

    const FILLED_BY_SET: [&str; 5] = [
        "/set name Jo",
        "/set email jo@x.com",
        "/set dateRange 2024-06-01",
        "/set location Helsinki",
        "/set vision Soft glam for a magazine cover",
    ];

    #[tokio::test]
    async fn walks_every_step_and_submits() {
        let transport = Arc::new(RecordingTransport::default());
        let mut repl = repl(&transport);
        let mut input = ScriptedInput::new(&[
            "Jo",
            "jo@x.com",
            "",
            "/next",
            "",
            "2024-06-01 - 2024-06-03",
            "/next",
            "Helsinki",
            "Soft glam for a magazine cover",
            "/next",
            "",
            "/submit",
        ]);

        let status = repl.run(&mut input).await.unwrap();

        assert_eq!(status, SubmissionStatus::Submitted);
        let received = transport.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].name, "Jo");
        assert_eq!(received[0].phone, None);
        assert_eq!(received[0].project_type.as_str(), "Editorial");
        assert_eq!(received[0].referral_source.as_str(), "Instagram");
        assert_eq!(received[0].date_range.to_string(), "2024-06-01 - 2024-06-03");
    }

    #[tokio::test]
    async fn failure_is_shown_and_retry_succeeds() {
        let transport = Arc::new(RecordingTransport::failing_once());
        let mut repl = repl(&transport);
        let mut lines = FILLED_BY_SET.to_vec();
        lines.extend(["/step 4", "/submit"]);
        let mut input = ScriptedInput::new(&lines);

        let status = repl.run(&mut input).await.unwrap();
        assert_eq!(
            status,
            SubmissionStatus::Failed {
                reason: "Server responded 500: Failed to send message".to_string()
            }
        );

        let mut input = ScriptedInput::new(&["/retry"]);
        let status = repl.run(&mut input).await.unwrap();
        assert_eq!(status, SubmissionStatus::Submitted);
        assert_eq!(transport.received().len(), 2);
    }

    #[tokio::test]
    async fn typed_choices_ignore_case() {
        let transport = Arc::new(RecordingTransport::default());
        let mut repl = repl(&transport);
        let mut lines = FILLED_BY_SET.to_vec();
        lines.extend([
            "/set projectType event",
            "/set referralSource WEBSITE",
            "/step 4",
            "/submit",
        ]);
        let mut input = ScriptedInput::new(&lines);

        let status = repl.run(&mut input).await.unwrap();

        assert_eq!(status, SubmissionStatus::Submitted);
        let received = transport.received();
        assert_eq!(received[0].project_type.as_str(), "Event");
        assert_eq!(received[0].referral_source.as_str(), "Website");
    }

    #[tokio::test]
    async fn invalid_submit_jumps_to_first_failing_step() {
        let transport = Arc::new(RecordingTransport::default());
        let mut repl = repl(&transport);
        let mut input = ScriptedInput::new(&["/step 4", "/submit"]);

        let status = repl.run(&mut input).await.unwrap();

        assert_eq!(status, SubmissionStatus::Editing);
        assert_eq!(repl.session().step(), FormStep::Introduce);
        assert_eq!(repl.current_field(), Some(InquiryField::Name));
        assert!(transport.received().is_empty());
    }

    #[tokio::test]
    async fn submit_before_final_step_is_refused() {
        let transport = Arc::new(RecordingTransport::default());
        let mut repl = repl(&transport);
        let mut lines = FILLED_BY_SET.to_vec();
        lines.push("/submit");
        let mut input = ScriptedInput::new(&lines);

        let status = repl.run(&mut input).await.unwrap();

        assert_eq!(status, SubmissionStatus::Editing);
        assert!(transport.received().is_empty());
    }

    #[tokio::test]
    async fn back_on_first_step_stays_put() {
        let transport = Arc::new(RecordingTransport::default());
        let mut repl = repl(&transport);
        let mut input = ScriptedInput::new(&["/back", "/quit", "/next"]);

        repl.run(&mut input).await.unwrap();

        assert_eq!(repl.session().step(), FormStep::Introduce);
    }

    #[tokio::test]
    async fn extra_input_after_last_field_is_ignored() {
        let transport = Arc::new(RecordingTransport::default());
        let mut repl = repl(&transport);
        let mut input = ScriptedInput::new(&["Jo", "jo@x.com", "555 0100", "stray text"]);

        repl.run(&mut input).await.unwrap();

        let draft = repl.session().draft();
        assert_eq!(draft.phone.as_deref(), Some("555 0100"));
        assert_eq!(draft.name.as_deref(), Some("Jo"));
        assert_eq!(repl.current_field(), None);
    }

    #[tokio::test]
    async fn bad_command_does_not_move() {
        let transport = Arc::new(RecordingTransport::default());
        let mut repl = repl(&transport);
        let mut input = ScriptedInput::new(&["/step 9", "/dance"]);

        repl.run(&mut input).await.unwrap();

        assert_eq!(repl.session().step(), FormStep::Introduce);
    }
}
