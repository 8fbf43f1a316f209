use regex::Regex;
use std::sync::OnceLock;

/// Maximum message length the form accepts.
pub const MESSAGE_MAX_LEN: usize = 500;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validation failure attached to a single form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Validate required fields and the email format. An empty result means the
/// form may be submitted.
pub fn validate(form: &ContactForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let required: [(&str, &str); 4] = [
        ("name", &form.name),
        ("email", &form.email),
        ("subject", &form.subject),
        ("message", &form.message),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(FieldError {
                field,
                message: "This field is required",
            });
        }
    }

    if !form.email.trim().is_empty() && !is_valid_email(&form.email) {
        errors.push(FieldError {
            field: "email",
            message: "Please enter a valid email address",
        });
    }

    errors
}

/// Color band of the live character counter under the message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharCountLevel {
    Normal,
    /// Past 70% of the limit.
    Warn,
    /// Past 90% of the limit.
    Alert,
}

pub fn char_count_level(len: usize) -> CharCountLevel {
    if len * 10 > MESSAGE_MAX_LEN * 9 {
        CharCountLevel::Alert
    } else if len * 10 > MESSAGE_MAX_LEN * 7 {
        CharCountLevel::Warn
    } else {
        CharCountLevel::Normal
    }
}
