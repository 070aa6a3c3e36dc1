//! Payloads posted to the form endpoint

use crate::state::{FeedbackForm, ReferralSource, TrustScore};

/// `feedbackType` sent with every review request
pub const FEEDBACK_TYPE: &str = "free";

/// `type` marker separating survey answers from review requests
pub const TRUST_SURVEY_TYPE: &str = "trust_survey";

/// A complete review request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub repository_url: String,
    pub feedback_request: String,
    pub email: String,
    pub referral_source: ReferralSource,
}

impl FeedbackSubmission {
    /// Snapshot a valid form; None if anything is missing
    pub fn from_form(form: &FeedbackForm) -> Option<Self> {
        if !form.is_valid() {
            return None;
        }
        Some(Self {
            repository_url: form.repository_url.as_text().to_string(),
            feedback_request: form.feedback_request.as_text().to_string(),
            email: form.email.as_text().to_string(),
            referral_source: form.referral()?,
        })
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("github", self.repository_url.clone()),
            ("content", self.feedback_request.clone()),
            ("email", self.email.clone()),
            ("source", self.referral_source.as_str().to_string()),
            ("feedbackType", FEEDBACK_TYPE.to_string()),
        ]
    }
}

/// A trust survey answer tied to an earlier review request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustSurveySubmission {
    /// Possibly empty
    pub email: String,
    pub trust_score: TrustScore,
    /// Possibly empty
    pub repository_url: String,
}

impl TrustSurveySubmission {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("email", self.email.clone()),
            ("trustScore", self.trust_score.value().to_string()),
            ("type", TRUST_SURVEY_TYPE.to_string()),
            ("github", self.repository_url.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldKey;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_feedback_fields() {
        let mut form = FeedbackForm::new();
        form.set(FieldKey::RepositoryUrl, "https://github.com/a/b");
        form.set(FieldKey::FeedbackRequest, "review my code");
        form.set(FieldKey::Email, "x@y.com");
        form.set(FieldKey::ReferralSource, "openchat");

        let submission = FeedbackSubmission::from_form(&form).unwrap();
        assert_eq!(
            submission.form_fields(),
            vec![
                ("github", "https://github.com/a/b".to_string()),
                ("content", "review my code".to_string()),
                ("email", "x@y.com".to_string()),
                ("source", "openchat".to_string()),
                ("feedbackType", "free".to_string()),
            ]
        );
    }

    #[test]
    fn test_incomplete_form_has_no_submission() {
        let mut form = FeedbackForm::new();
        form.set(FieldKey::RepositoryUrl, "https://github.com/a/b");
        form.set(FieldKey::FeedbackRequest, "review my code");
        form.set(FieldKey::Email, "x@y.com");
        assert!(FeedbackSubmission::from_form(&form).is_none());
    }

    #[test]
    fn test_values_are_sent_as_typed() {
        let mut form = FeedbackForm::new();
        form.set(FieldKey::RepositoryUrl, " https://github.com/a/b ");
        form.set(FieldKey::FeedbackRequest, "line one\nline two");
        form.set(FieldKey::Email, "x@y.com");
        form.set(FieldKey::ReferralSource, "other");

        let submission = FeedbackSubmission::from_form(&form).unwrap();
        assert_eq!(submission.repository_url, " https://github.com/a/b ");
        assert_eq!(submission.feedback_request, "line one\nline two");
    }

    #[test]
    fn test_trust_survey_fields() {
        let survey = TrustSurveySubmission {
            email: "x@y.com".to_string(),
            trust_score: TrustScore::new(4).unwrap(),
            repository_url: String::new(),
        };
        assert_eq!(
            survey.form_fields(),
            vec![
                ("email", "x@y.com".to_string()),
                ("trustScore", "4".to_string()),
                ("type", "trust_survey".to_string()),
                ("github", String::new()),
            ]
        );
    }
}
