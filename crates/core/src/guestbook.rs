//! Guestbook constants and validation.
//!
//! Guests leave a wish (name + message) together with an attendance answer.
//! Validation happens here, before anything reaches the store.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Maximum length of a wish message, in characters.
pub const MAX_CONTENT_LENGTH: usize = 300;

/// Maximum length of a guest's display name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Number of rows fetched per round-trip when walking the comment store.
pub const LIST_BATCH_SIZE: i64 = 100;

/// Form token meaning "will attend". Every other token means "will not attend".
pub const ATTEND_TOKEN: &str = "attend";

/* --------------------------------------------------------------------------
Attendance
-------------------------------------------------------------------------- */

/// A guest's RSVP answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attendance {
    Attend,
    NotAttend,
}

impl Attendance {
    /// Map the submitted form token onto an answer.
    ///
    /// Only the exact token `"attend"` counts as attending; anything else,
    /// including a missing field, is recorded as not attending.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(ATTEND_TOKEN) => Self::Attend,
            _ => Self::NotAttend,
        }
    }

    /// The boolean persisted in the `attendance` column.
    pub fn is_attending(self) -> bool {
        matches!(self, Self::Attend)
    }
}

/* --------------------------------------------------------------------------
Input
-------------------------------------------------------------------------- */

/// A wish as submitted by the guest, before validation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewComment {
    #[validate(
        length(min = 1, max = 100, message = "must be between 1 and 100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(
        length(min = 1, max = 300, message = "must be between 1 and 300 characters"),
        custom(function = "not_blank")
    )]
    pub content: String,

    #[serde(default)]
    pub attendance: Option<String>,
}

/// A wish that passed validation and may be handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedComment {
    pub name: String,
    pub content: String,
    pub attendance: Attendance,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate a submitted wish.
///
/// Surrounding whitespace is trimmed from the name and the message; the
/// length limits apply to the text as submitted.
pub fn validate_new_comment(input: NewComment) -> Result<ValidatedComment, CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe_errors(&errors)))?;

    Ok(ValidatedComment {
        name: input.name.trim().to_string(),
        content: input.content.trim().to_string(),
        attendance: Attendance::from_token(input.attendance.as_deref()),
    })
}

/// Flatten `validator` output into one stable, human-readable message.
fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reason = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{field} {reason}")
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn wish(name: &str, content: &str, attendance: Option<&str>) -> NewComment {
        NewComment {
            name: name.to_string(),
            content: content.to_string(),
            attendance: attendance.map(str::to_string),
        }
    }

    #[test]
    fn test_attend_token_maps_to_true() {
        assert!(Attendance::from_token(Some("attend")).is_attending());
    }

    #[test]
    fn test_other_tokens_map_to_false() {
        assert!(!Attendance::from_token(Some("not-attend")).is_attending());
        assert!(!Attendance::from_token(Some("ATTEND")).is_attending());
        assert!(!Attendance::from_token(Some("")).is_attending());
        assert!(!Attendance::from_token(None).is_attending());
    }

    #[test]
    fn test_valid_wish_accepted() {
        let validated = validate_new_comment(wish("Sarah", "Congrats!", Some("attend"))).unwrap();
        assert_eq!(validated.name, "Sarah");
        assert_eq!(validated.content, "Congrats!");
        assert_eq!(validated.attendance, Attendance::Attend);
    }

    #[test]
    fn test_wish_is_trimmed() {
        let validated = validate_new_comment(wish("  Sarah ", " hi\n", None)).unwrap();
        assert_eq!(validated.name, "Sarah");
        assert_eq!(validated.content, "hi");
        assert_eq!(validated.attendance, Attendance::NotAttend);
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = validate_new_comment(wish("", "Congrats!", Some("attend")));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.starts_with("name"));
    }

    #[test]
    fn test_blank_content_rejected() {
        let result = validate_new_comment(wish("Sarah", "   ", Some("attend")));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("content must not be blank"));
    }

    #[test]
    fn test_content_at_limit_accepted() {
        let content = "a".repeat(300);
        assert!(validate_new_comment(wish("Sarah", &content, None)).is_ok());
    }

    #[test]
    fn test_content_over_limit_rejected() {
        let content = "a".repeat(301);
        let result = validate_new_comment(wish("Sarah", &content, None));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("content"));
    }

    #[test]
    fn test_content_limit_counts_characters_not_bytes() {
        // 300 two-byte characters: 600 bytes, still within the limit.
        let content = "é".repeat(300);
        assert!(validate_new_comment(wish("Sarah", &content, None)).is_ok());
    }

    #[test]
    fn test_name_length_bounded() {
        let at_limit = "n".repeat(MAX_NAME_LENGTH);
        assert!(validate_new_comment(wish(&at_limit, "Congrats!", None)).is_ok());

        let over = "n".repeat(MAX_NAME_LENGTH + 1);
        let result = validate_new_comment(wish(&over, "Congrats!", None));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.starts_with("name "));
    }

    #[test]
    fn test_both_fields_reported() {
        let result = validate_new_comment(wish("", "", None));
        assert_matches!(
            result,
            Err(CoreError::Validation(msg)) if msg.contains("content") && msg.contains("name")
        );
    }
}
