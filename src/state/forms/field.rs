//! Form field value objects

/// How the user found the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferralSource {
    Sns,
    OpenChat,
    Blog,
    Cafe,
    Other,
}

impl ReferralSource {
    pub const ALL: [ReferralSource; 5] = [
        Self::Sns,
        Self::OpenChat,
        Self::Blog,
        Self::Cafe,
        Self::Other,
    ];

    /// Value sent in the `source` form field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sns => "sns",
            Self::OpenChat => "openchat",
            Self::Blog => "blog",
            Self::Cafe => "cafe",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sns => "Social media",
            Self::OpenChat => "Open chat",
            Self::Blog => "Blog",
            Self::Cafe => "Online community",
            Self::Other => "Other",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Sns => Self::OpenChat,
            Self::OpenChat => Self::Blog,
            Self::Blog => Self::Cafe,
            Self::Cafe => Self::Other,
            Self::Other => Self::Sns,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Sns => Self::Other,
            Self::OpenChat => Self::Sns,
            Self::Blog => Self::OpenChat,
            Self::Cafe => Self::Blog,
            Self::Other => Self::Cafe,
        }
    }

    /// Parse a wire value; the empty string means "unselected"
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Referral(Option<ReferralSource>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(label: &str, is_multiline: bool) -> Self {
        Self {
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new referral selector, initially unselected
    pub fn referral(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: FieldValue::Referral(None),
            is_multiline: false,
        }
    }

    /// Get the text value (returns empty string for selectors)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Referral(_) => "",
        }
    }

    /// Get the selected referral source (None for text fields)
    pub fn as_referral(&self) -> Option<ReferralSource> {
        match &self.value {
            FieldValue::Referral(r) => *r,
            FieldValue::Text(_) => None,
        }
    }

    /// Replace the value from its string form.
    /// Selectors accept a wire value; anything unknown leaves them unselected.
    pub fn set_text(&mut self, value: &str) {
        match &mut self.value {
            FieldValue::Text(s) => *s = value.to_string(),
            FieldValue::Referral(r) => *r = ReferralSource::parse(value),
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Referral(r) => {
                // Digits pick an option directly (1-based)
                if let Some(d) = c.to_digit(10) {
                    if let Some(source) = ReferralSource::ALL.get((d as usize).wrapping_sub(1)) {
                        *r = Some(*source);
                    }
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Referral(r) => *r = None,
        }
    }

    /// Step a selector forward; no-op for text
    pub fn select_next(&mut self) {
        if let FieldValue::Referral(r) = &mut self.value {
            *r = Some(r.map_or(ReferralSource::Sns, |s| s.next()));
        }
    }

    /// Step a selector backward; no-op for text
    pub fn select_prev(&mut self) {
        if let FieldValue::Referral(r) = &mut self.value {
            *r = Some(r.map_or(ReferralSource::Other, |s| s.prev()));
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Referral(r) => *r = None,
        }
    }

    /// Whether the field counts as filled in. Whitespace-only text does not.
    pub fn is_filled(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => !s.trim().is_empty(),
            FieldValue::Referral(r) => r.is_some(),
        }
    }

    /// Whether the field is a selector rather than free text
    pub fn is_selector(&self) -> bool {
        matches!(self.value, FieldValue::Referral(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod referral_source {
        use super::*;

        #[test]
        fn test_wire_values() {
            let values: Vec<&str> = ReferralSource::ALL.iter().map(|s| s.as_str()).collect();
            assert_eq!(values, ["sns", "openchat", "blog", "cafe", "other"]);
        }

        #[test]
        fn test_parse_known_and_unknown() {
            assert_eq!(ReferralSource::parse("blog"), Some(ReferralSource::Blog));
            assert_eq!(ReferralSource::parse(""), None);
            assert_eq!(ReferralSource::parse("newsletter"), None);
        }

        #[test]
        fn test_next_and_prev_cycle() {
            let mut s = ReferralSource::Sns;
            for _ in 0..ReferralSource::ALL.len() {
                s = s.next();
            }
            assert_eq!(s, ReferralSource::Sns);
            assert_eq!(ReferralSource::Sns.prev(), ReferralSource::Other);
        }
    }

    mod text_field {
        use super::*;

        #[test]
        fn test_push_and_pop() {
            let mut field = FormField::text("Email", false);
            field.push_char('a');
            field.push_char('b');
            field.pop_char();
            assert_eq!(field.as_text(), "a");
        }

        #[test]
        fn test_whitespace_is_not_filled() {
            let mut field = FormField::text("Content", true);
            field.set_text("  \n ");
            assert!(!field.is_filled());
            field.set_text(" x ");
            assert!(field.is_filled());
        }

        #[test]
        fn test_selector_ops_ignored() {
            let mut field = FormField::text("Repo", false);
            field.set_text("abc");
            field.select_next();
            field.select_prev();
            assert_eq!(field.as_text(), "abc");
            assert_eq!(field.as_referral(), None);
        }
    }

    mod referral_field {
        use super::*;

        #[test]
        fn test_starts_unselected() {
            let field = FormField::referral("Source");
            assert!(!field.is_filled());
            assert!(field.is_selector());
            assert_eq!(field.as_referral(), None);
        }

        #[test]
        fn test_select_next_from_unselected() {
            let mut field = FormField::referral("Source");
            field.select_next();
            assert_eq!(field.as_referral(), Some(ReferralSource::Sns));
            field.select_next();
            assert_eq!(field.as_referral(), Some(ReferralSource::OpenChat));
        }

        #[test]
        fn test_select_prev_from_unselected() {
            let mut field = FormField::referral("Source");
            field.select_prev();
            assert_eq!(field.as_referral(), Some(ReferralSource::Other));
        }

        #[test]
        fn test_digit_selects_option() {
            let mut field = FormField::referral("Source");
            field.push_char('3');
            assert_eq!(field.as_referral(), Some(ReferralSource::Blog));
            field.push_char('0');
            field.push_char('9');
            field.push_char('x');
            assert_eq!(field.as_referral(), Some(ReferralSource::Blog));
        }

        #[test]
        fn test_backspace_and_clear_unselect() {
            let mut field = FormField::referral("Source");
            field.set_text("cafe");
            assert_eq!(field.as_referral(), Some(ReferralSource::Cafe));
            field.pop_char();
            assert!(!field.is_filled());
            field.set_text("sns");
            field.clear();
            assert_eq!(field.as_referral(), None);
        }
    }
}
