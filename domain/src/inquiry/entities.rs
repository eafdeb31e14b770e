//! Inquiry entities

use crate::core::string::non_blank;
use crate::form::step::FormStep;
use crate::inquiry::validation::{
    LOCATION_MIN_CHARS, NAME_MIN_CHARS, VISION_MAX_CHARS, VISION_MIN_CHARS, ValidationErrors,
    is_valid_email, max_chars, min_chars,
};
use crate::inquiry::value_objects::{DateRange, ProjectType, ReferralSource};
use serde::{Deserialize, Serialize};

/// Fields of an inquiry, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InquiryField {
    Name,
    Email,
    Phone,
    ProjectType,
    DateRange,
    Location,
    Vision,
    ReferralSource,
}

impl InquiryField {
    pub const ALL: [InquiryField; 8] = [
        InquiryField::Name,
        InquiryField::Email,
        InquiryField::Phone,
        InquiryField::ProjectType,
        InquiryField::DateRange,
        InquiryField::Location,
        InquiryField::Vision,
        InquiryField::ReferralSource,
    ];

    /// JSON key on the wire
    pub fn wire_name(&self) -> &'static str {
        match self {
            InquiryField::Name => "name",
            InquiryField::Email => "email",
            InquiryField::Phone => "phone",
            InquiryField::ProjectType => "projectType",
            InquiryField::DateRange => "dateRange",
            InquiryField::Location => "location",
            InquiryField::Vision => "vision",
            InquiryField::ReferralSource => "referralSource",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.wire_name() == name)
    }

    /// Question shown to the inquirer
    pub fn label(&self) -> &'static str {
        match self {
            InquiryField::Name => "What should we call you?",
            InquiryField::Email => "How can I reach you?",
            InquiryField::Phone => "Phone number (optional)",
            InquiryField::ProjectType => "What's the nature of your project?",
            InquiryField::DateRange => "When is it happening?",
            InquiryField::Location => "Where will this take place?",
            InquiryField::Vision => "Tell me about your vision",
            InquiryField::ReferralSource => "How did you find me?",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, InquiryField::Phone)
    }

    /// The form step that renders this field
    pub fn step(&self) -> FormStep {
        match self {
            InquiryField::Name | InquiryField::Email | InquiryField::Phone => FormStep::Introduce,
            InquiryField::ProjectType | InquiryField::DateRange => FormStep::Project,
            InquiryField::Location | InquiryField::Vision => FormStep::Details,
            InquiryField::ReferralSource => FormStep::FinalTouch,
        }
    }
}

/// Raw date range as entered or received
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRangeDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl DateRangeDraft {
    /// Parse `FROM`, `FROM - TO` or `FROM to TO` as typed in the terminal form
    pub fn from_input(input: &str) -> Self {
        let input = input.trim();
        let (from, to) = match input.split_once(" - ").or_else(|| input.split_once(" to ")) {
            Some((from, to)) => (from, Some(to)),
            None => (input, None),
        };
        Self {
            from: non_blank(Some(from)).map(str::to_string),
            to: non_blank(to).map(str::to_string),
        }
    }
}

/// Unvalidated inquiry, the shape the form holds and the handler receives
///
/// Every field is optional so that presence and schema checks can report
/// on exactly what is wrong instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InquiryDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRangeDraft>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_source: Option<String>,
}

impl InquiryDraft {
    /// Draft with the form's initial selections
    pub fn with_form_defaults() -> Self {
        Self {
            project_type: Some(ProjectType::default().to_string()),
            referral_source: Some(ReferralSource::default().to_string()),
            ..Self::default()
        }
    }

    /// Current raw value of a field, for display
    pub fn get(&self, field: InquiryField) -> Option<String> {
        match field {
            InquiryField::Name => self.name.clone(),
            InquiryField::Email => self.email.clone(),
            InquiryField::Phone => self.phone.clone(),
            InquiryField::ProjectType => self.project_type.clone(),
            InquiryField::DateRange => self.date_range.as_ref().and_then(|r| {
                let from = r.from.as_deref()?;
                Some(match r.to.as_deref() {
                    Some(to) => format!("{from} - {to}"),
                    None => from.to_string(),
                })
            }),
            InquiryField::Location => self.location.clone(),
            InquiryField::Vision => self.vision.clone(),
            InquiryField::ReferralSource => self.referral_source.clone(),
        }
    }

    /// Set a field from text input. Blank input clears the field.
    pub fn set(&mut self, field: InquiryField, input: &str) {
        let value = non_blank(Some(input)).map(str::to_string);
        match field {
            InquiryField::Name => self.name = value,
            InquiryField::Email => self.email = value,
            InquiryField::Phone => self.phone = value,
            InquiryField::ProjectType => {
                self.project_type = value.map(|v| match ProjectType::from_input(&v) {
                    Some(p) => p.to_string(),
                    None => v,
                });
            }
            InquiryField::DateRange => {
                self.date_range = value.map(|v| DateRangeDraft::from_input(&v));
            }
            InquiryField::Location => self.location = value,
            InquiryField::Vision => self.vision = value,
            InquiryField::ReferralSource => {
                self.referral_source = value.map(|v| match ReferralSource::from_input(&v) {
                    Some(r) => r.to_string(),
                    None => v,
                });
            }
        }
    }

    /// Required fields that are absent or blank
    pub fn missing_required(&self) -> Vec<InquiryField> {
        InquiryField::ALL
            .into_iter()
            .filter(|f| f.is_required())
            .filter(|f| match f {
                InquiryField::DateRange => non_blank(
                    self.date_range.as_ref().and_then(|r| r.from.as_deref()),
                )
                .is_none(),
                _ => non_blank(self.get(*f).as_deref()).is_none(),
            })
            .collect()
    }

    /// Run the full schema
    pub fn validate(&self) -> Result<Inquiry, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = non_blank(self.name.as_deref()).unwrap_or_default();
        if !min_chars(name, NAME_MIN_CHARS) {
            errors.push("name", "Name must be at least 2 characters.");
        }

        let email = non_blank(self.email.as_deref()).unwrap_or_default();
        if !is_valid_email(email) {
            errors.push("email", "Please enter a valid email address.");
        }

        let project_type = match self.project_type.as_deref().filter(|v| non_blank(Some(v)).is_some()) {
            None => {
                errors.push("projectType", "Please select a project type.");
                None
            }
            Some(raw) => match raw.parse::<ProjectType>() {
                Ok(p) => Some(p),
                Err(_) => {
                    errors.push("projectType", "Please select a valid project type.");
                    None
                }
            },
        };

        let date_range = self.validate_date_range(&mut errors);

        let location = non_blank(self.location.as_deref()).unwrap_or_default();
        if !min_chars(location, LOCATION_MIN_CHARS) {
            errors.push("location", "Location must be at least 2 characters.");
        }

        let vision = non_blank(self.vision.as_deref()).unwrap_or_default();
        if !min_chars(vision, VISION_MIN_CHARS) {
            errors.push(
                "vision",
                "Please provide at least 10 characters about your vision.",
            );
        } else if !max_chars(vision, VISION_MAX_CHARS) {
            errors.push("vision", "Vision must not exceed 500 characters.");
        }

        let referral_source = match self.referral_source.as_deref().filter(|v| non_blank(Some(v)).is_some()) {
            None => {
                errors.push("referralSource", "Please select a referral source.");
                None
            }
            Some(raw) => match raw.parse::<ReferralSource>() {
                Ok(r) => Some(r),
                Err(_) => {
                    errors.push("referralSource", "Please select a valid referral source.");
                    None
                }
            },
        };

        match (project_type, date_range, referral_source) {
            (Some(project_type), Some(date_range), Some(referral_source)) => {
                errors.into_result(|| Inquiry {
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: non_blank(self.phone.as_deref()).map(str::to_string),
                    project_type,
                    date_range,
                    location: location.to_string(),
                    vision: vision.to_string(),
                    referral_source,
                })
            }
            _ => Err(errors),
        }
    }

    fn validate_date_range(&self, errors: &mut ValidationErrors) -> Option<DateRange> {
        let range = self.date_range.as_ref();
        let Some(raw_from) = non_blank(range.and_then(|r| r.from.as_deref())) else {
            errors.push("dateRange", "Please pick a date.");
            return None;
        };
        let Ok(from) = DateRange::parse_date(raw_from) else {
            errors.push("dateRange", "Please pick a valid date.");
            return None;
        };
        let to = match non_blank(range.and_then(|r| r.to.as_deref())) {
            None => None,
            Some(raw_to) => match DateRange::parse_date(raw_to) {
                Ok(to) => Some(to),
                Err(_) => {
                    errors.push("dateRange", "Please pick a valid end date.");
                    return None;
                }
            },
        };
        Some(DateRange::new(from, to))
    }
}

/// A validated project inquiry (Entity)
///
/// Write-once: built only by [`InquiryDraft::validate`] and discarded after
/// it has been forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub project_type: ProjectType,
    pub date_range: DateRange,
    pub location: String,
    pub vision: String,
    pub referral_source: ReferralSource,
}
