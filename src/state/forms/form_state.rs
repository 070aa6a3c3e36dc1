//! Feedback form state and keyboard navigation

use super::field::{FormField, ReferralSource};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Addresses a single input of the feedback form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    RepositoryUrl,
    FeedbackRequest,
    Email,
    ReferralSource,
}

impl FieldKey {
    pub const ALL: [FieldKey; 4] = [
        Self::RepositoryUrl,
        Self::FeedbackRequest,
        Self::Email,
        Self::ReferralSource,
    ];

    /// Position of the field in tab order
    pub fn index(&self) -> usize {
        match self {
            Self::RepositoryUrl => 0,
            Self::FeedbackRequest => 1,
            Self::Email => 2,
            Self::ReferralSource => 3,
        }
    }

    /// Field at a tab position; None for the submit row
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Index of the submit button row in tab order
pub const SUBMIT_ROW: usize = 4;

/// The review request form
#[derive(Debug, Clone)]
pub struct FeedbackForm {
    pub repository_url: FormField,
    pub feedback_request: FormField,
    pub email: FormField,
    pub referral_source: FormField,
    pub active_field_index: usize,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self {
            repository_url: FormField::text("GitHub repository (public)", false),
            feedback_request: FormField::text("What should the review cover?", true),
            email: FormField::text("Email", false),
            referral_source: FormField::referral("How did you hear about us?"),
            active_field_index: 0,
        }
    }

    pub fn field(&self, key: FieldKey) -> &FormField {
        match key {
            FieldKey::RepositoryUrl => &self.repository_url,
            FieldKey::FeedbackRequest => &self.feedback_request,
            FieldKey::Email => &self.email,
            FieldKey::ReferralSource => &self.referral_source,
        }
    }

    pub fn field_mut(&mut self, key: FieldKey) -> &mut FormField {
        match key {
            FieldKey::RepositoryUrl => &mut self.repository_url,
            FieldKey::FeedbackRequest => &mut self.feedback_request,
            FieldKey::Email => &mut self.email,
            FieldKey::ReferralSource => &mut self.referral_source,
        }
    }

    /// Update one field by key
    #[cfg(test)]
    pub fn set(&mut self, key: FieldKey, value: &str) {
        self.field_mut(key).set_text(value);
    }

    /// Key of the focused input; None on the submit row
    pub fn active_key(&self) -> Option<FieldKey> {
        FieldKey::from_index(self.active_field_index)
    }

    pub fn referral(&self) -> Option<ReferralSource> {
        self.referral_source.as_referral()
    }

    /// All four inputs filled in; no format checks
    pub fn is_valid(&self) -> bool {
        FieldKey::ALL.iter().all(|key| self.field(*key).is_filled())
    }

    /// Empty every field and return focus to the first one
    pub fn reset(&mut self) {
        for key in FieldKey::ALL {
            self.field_mut(key).clear();
        }
        self.active_field_index = 0;
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for FeedbackForm {
    fn field_count(&self) -> usize {
        5 // four inputs plus the submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldKey::from_index(index).map(|key| self.field(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FeedbackForm {
        let mut form = FeedbackForm::new();
        form.set(FieldKey::RepositoryUrl, "https://github.com/a/b");
        form.set(FieldKey::FeedbackRequest, "review my code");
        form.set(FieldKey::Email, "x@y.com");
        form.set(FieldKey::ReferralSource, "sns");
        form
    }

    mod validity {
        use super::*;

        #[test]
        fn test_new_form_is_invalid() {
            assert!(!FeedbackForm::new().is_valid());
        }

        #[test]
        fn test_all_fields_filled_is_valid() {
            assert!(filled_form().is_valid());
        }

        #[test]
        fn test_any_missing_field_is_invalid() {
            for key in FieldKey::ALL {
                let mut form = filled_form();
                form.field_mut(key).clear();
                assert!(!form.is_valid(), "{key:?} empty should be invalid");
            }
        }

        #[test]
        fn test_whitespace_only_text_is_invalid() {
            let mut form = filled_form();
            form.set(FieldKey::Email, "   ");
            assert!(!form.is_valid());
        }

        #[test]
        fn test_no_format_validation() {
            let mut form = filled_form();
            form.set(FieldKey::RepositoryUrl, "not a url");
            form.set(FieldKey::Email, "not an email");
            assert!(form.is_valid());
        }

        #[test]
        fn test_unknown_referral_stays_unselected() {
            let mut form = filled_form();
            form.set(FieldKey::ReferralSource, "newsletter");
            assert_eq!(form.referral(), None);
            assert!(!form.is_valid());
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn test_set_updates_only_that_field() {
            let mut form = FeedbackForm::new();
            form.set(FieldKey::Email, "x@y.com");
            assert_eq!(form.email.as_text(), "x@y.com");
            assert_eq!(form.repository_url.as_text(), "");
            assert_eq!(form.feedback_request.as_text(), "");
            assert_eq!(form.referral(), None);
        }

        #[test]
        fn test_reset_clears_everything() {
            let mut form = filled_form();
            form.active_field_index = 3;
            form.reset();
            for key in FieldKey::ALL {
                assert!(!form.field(key).is_filled());
            }
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.active_field_index, 0);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_field_count() {
            assert_eq!(FeedbackForm::new().field_count(), 5);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = FeedbackForm::new();
            for _ in 0..5 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = FeedbackForm::new();
            form.prev_field();
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = FeedbackForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SUBMIT_ROW);
        }

        #[test]
        fn test_get_field_matches_keys() {
            let form = FeedbackForm::new();
            for key in FieldKey::ALL {
                assert_eq!(FieldKey::from_index(key.index()), Some(key));
                assert_eq!(
                    form.get_field(key.index()).unwrap().label,
                    form.field(key).label
                );
            }
            assert!(form.get_field(SUBMIT_ROW).is_none());
        }

        #[test]
        fn test_no_active_key_on_submit_row() {
            let mut form = FeedbackForm::new();
            form.set_active_field(SUBMIT_ROW);
            assert_eq!(form.active_key(), None);
            form.set_active_field(1);
            assert_eq!(form.active_key(), Some(FieldKey::FeedbackRequest));
        }

        #[test]
        fn test_edit_through_active_key() {
            let mut form = FeedbackForm::new();
            form.set_active_field(FieldKey::Email.index());
            let key = form.active_key().unwrap();
            form.field_mut(key).push_char('x');
            assert_eq!(form.email.as_text(), "x");
            assert_eq!(form.repository_url.as_text(), "");
        }
    }
}
