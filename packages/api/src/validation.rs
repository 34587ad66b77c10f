//! # Form validation rules
//!
//! Every form is checked with [`Validate`] before any request is sent. Errors
//! come back as [`FieldErrors`], keyed by the form field name, so views can
//! render each message next to its input.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::auth::{LoginRequest, RegisterRequest};
use crate::resources::notes::NoteFields;
use crate::resources::postings::PostingFields;
use crate::resources::recipes::RecipeFields;
use crate::resources::students::StudentFields;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Per-field validation messages. Only the first failure per field is kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Record `message` for `field` if `value` is empty. Whitespace counts as input.
    pub fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.is_empty() {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Client-side checks run before submitting a form.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+$").unwrap());

/// Something, an `@`, something, and no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("email", &self.email, "This field is required");
        errors.require("password", &self.password, "Password is required");
        errors.into_result()
    }
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("username", &self.username, "Username is required");
        errors.require("email", &self.email, "Email is required");
        if !self.email.is_empty() && !is_valid_email(&self.email) {
            errors.add("email", "Invalid email format");
        }
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            );
        }
        errors.into_result()
    }
}

impl Validate for StudentFields {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("student_number", &self.student_number, "Student number is required");
        errors.require("name", &self.name, "Name is required");
        errors.require("major", &self.major, "Major is required");
        errors.into_result()
    }
}

impl Validate for RecipeFields {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("title", &self.title, "Title is required");
        errors.require("ingredients", &self.ingredients, "Ingredients are required");
        errors.require("instructions", &self.instructions, "Instructions are required");
        errors.into_result()
    }
}

impl Validate for PostingFields {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("title", &self.title, "Title is required");
        errors.require("content", &self.content, "Content is required");
        errors.into_result()
    }
}

impl Validate for NoteFields {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("title", &self.title, "Title is required");
        errors.require("content", &self.content, "Content is required");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Role;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("budi@example.com"));
        assert!(is_valid_email("a@b"));
        assert!(!is_valid_email("budi"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("budi@"));
        assert!(!is_valid_email("budi @example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_email_may_contain_several_ats() {
        assert!(is_valid_email("@a@b"));
        assert!(is_valid_email("a@b@c"));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("a@ b"));
    }

    #[test]
    fn test_whitespace_counts_as_input() {
        let request = LoginRequest {
            email: "budi".to_string(),
            password: "   ".to_string(),
        };
        assert!(request.validate().is_ok());

        let mut errors = FieldErrors::new();
        errors.require("title", " ", "Title is required");
        assert!(errors.is_empty());
        errors.require("title", "", "Title is required");
        assert_eq!(errors.get("title"), Some("Title is required"));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let errors = LoginRequest::default().validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some("This field is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));

        let ok = LoginRequest {
            email: "budi".to_string(),
            password: "x".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_register_rules() {
        let request = RegisterRequest {
            username: "budi".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            role: Role::Admin,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.get("username").is_none());
        assert_eq!(errors.get("email"), Some("Invalid email format"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 8 characters")
        );

        let valid = RegisterRequest {
            username: "budi".to_string(),
            email: "budi@example.com".to_string(),
            password: "12345678".to_string(),
            role: Role::User,
        };
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_register_empty_email_reports_required() {
        let errors = RegisterRequest::default().validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert_eq!(errors.get("username"), Some("Username is required"));
    }

    #[test]
    fn test_student_fields_required() {
        let fields = StudentFields {
            student_number: "11223344".to_string(),
            name: "   ".to_string(),
            major: String::new(),
        };
        let errors = fields.validate().unwrap_err();
        let names: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(names, vec!["major", "name"]);
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("email", "first");
        errors.add("email", "second");
        assert_eq!(errors.get("email"), Some("first"));
    }

    #[test]
    fn test_record_forms() {
        assert!(PostingFields::default().validate().is_err());
        assert!(NoteFields {
            title: "Todo".to_string(),
            content: "- [ ] write tests".to_string(),
        }
        .validate()
        .is_ok());
        let errors = RecipeFields {
            title: "Soto".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert!(errors.get("description").is_none());
        assert!(errors.get("ingredients").is_some());
    }
}
