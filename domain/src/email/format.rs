//! Plain-text formatting for relayed messages

use crate::inquiry::entities::Inquiry;
use crate::inquiry::message::ContactMessage;

/// Sender used until a verified domain is configured
pub const DEFAULT_FROM_ADDRESS: &str = "Contact Form <onboarding@resend.dev>";

pub fn inquiry_subject(inquiry: &Inquiry) -> String {
    format!("New Project Inquiry from {}", inquiry.name)
}

pub fn message_subject(message: &ContactMessage) -> String {
    format!("New Contact Form Message from {}", message.name)
}

/// Body for a project inquiry. The date range is the only date rendered.
pub fn inquiry_body(inquiry: &Inquiry) -> String {
    let lines = [
        format!("Name: {}", inquiry.name),
        format!("Email: {}", inquiry.email),
        format!("Phone: {}", inquiry.phone.as_deref().unwrap_or("Not provided")),
        format!("Project Type: {}", inquiry.project_type),
        format!("Date: {}", inquiry.date_range),
        format!("Location: {}", inquiry.location),
        format!("Vision: {}", inquiry.vision),
        format!("Referral Source: {}", inquiry.referral_source),
    ];
    let mut body = lines.join("\n");
    body.push('\n');
    body
}

pub fn message_body(message: &ContactMessage) -> String {
    format!(
        "Name: {}\nEmail: {}\nMessage: {}\n",
        message.name, message.email, message.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::value_objects::{DateRange, ProjectType, ReferralSource};
    use chrono::NaiveDate;

    fn inquiry() -> Inquiry {
        Inquiry {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            phone: None,
            project_type: ProjectType::Editorial,
            date_range: DateRange::new(
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 3),
            ),
            location: "Helsinki".to_string(),
            vision: "Editorial look, bold lip".to_string(),
            referral_source: ReferralSource::Instagram,
        }
    }

    #[test]
    fn body_contains_formatted_range_and_no_other_dates() {
        let body = inquiry_body(&inquiry());
        assert!(body.contains("2024-06-01 - 2024-06-03"));
        assert_eq!(body.matches("2024-").count(), 2);
        assert_eq!(body.lines().filter(|l| l.starts_with("Date")).count(), 1);
    }

    #[test]
    fn body_marks_missing_phone() {
        let body = inquiry_body(&inquiry());
        assert!(body.contains("Phone: Not provided"));
        assert!(body.contains("Referral Source: Instagram"));
    }

    #[test]
    fn subjects_contain_name() {
        assert_eq!(inquiry_subject(&inquiry()), "New Project Inquiry from Jo");
        let message = ContactMessage {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            message: "Hi".to_string(),
        };
        assert_eq!(message_subject(&message), "New Contact Form Message from Jo");
        assert_eq!(message_body(&message), "Name: Jo\nEmail: jo@x.com\nMessage: Hi\n");
    }
}
