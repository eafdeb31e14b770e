//! Form steps

use crate::core::error::DomainError;
use crate::inquiry::entities::InquiryField;
use std::fmt;

/// One page of the multi-step form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FormStep {
    #[default]
    Introduce,
    Project,
    Details,
    FinalTouch,
}

impl FormStep {
    pub const ALL: [FormStep; 4] = [
        FormStep::Introduce,
        FormStep::Project,
        FormStep::Details,
        FormStep::FinalTouch,
    ];

    pub const FIRST: FormStep = FormStep::Introduce;
    pub const LAST: FormStep = FormStep::FinalTouch;

    /// 1-based step number shown in the progress indicator
    pub fn number(&self) -> u8 {
        match self {
            FormStep::Introduce => 1,
            FormStep::Project => 2,
            FormStep::Details => 3,
            FormStep::FinalTouch => 4,
        }
    }

    pub fn from_number(n: u8) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|s| s.number() == n)
            .ok_or(DomainError::InvalidStep(n))
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormStep::Introduce => "Introduce Yourself",
            FormStep::Project => "Your Project",
            FormStep::Details => "Details",
            FormStep::FinalTouch => "Final Touch",
        }
    }

    pub fn next(&self) -> Option<FormStep> {
        Self::from_number(self.number() + 1).ok()
    }

    pub fn previous(&self) -> Option<FormStep> {
        self.number().checked_sub(1).and_then(|n| Self::from_number(n).ok())
    }

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }

    /// Fields rendered on this step, in display order
    pub fn fields(&self) -> Vec<InquiryField> {
        InquiryField::ALL
            .into_iter()
            .filter(|f| f.step() == *self)
            .collect()
    }
}

impl fmt::Display for FormStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip() {
        for step in FormStep::ALL {
            assert_eq!(FormStep::from_number(step.number()).unwrap(), step);
        }
        assert_eq!(FormStep::from_number(0), Err(DomainError::InvalidStep(0)));
        assert_eq!(FormStep::from_number(5), Err(DomainError::InvalidStep(5)));
    }

    #[test]
    fn neighbours_stop_at_the_ends() {
        assert_eq!(FormStep::FIRST.previous(), None);
        assert_eq!(FormStep::LAST.next(), None);
        assert_eq!(FormStep::Project.next(), Some(FormStep::Details));
        assert_eq!(FormStep::Project.previous(), Some(FormStep::Introduce));
    }

    #[test]
    fn final_step_holds_referral_source_only() {
        assert_eq!(FormStep::FinalTouch.fields(), vec![InquiryField::ReferralSource]);
        assert_eq!(FormStep::Details.to_string(), "3. Details");
    }
}
