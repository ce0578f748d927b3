use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::{INVALID_PHONE_ERROR, REQUIRED_PHONE_ERROR, REQUIRED_STORE_NAME_ERROR};

// Vietnamese mobile numbers: 10 digits, carrier prefix 03/05/07/08/09
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(03|05|07|08|09)[0-9]{8}$").expect("phone pattern is valid")
});

/// What the registration form collects before the player may spin.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, Validate)]
pub struct UserData {
    #[validate(custom = "validate_store_name")]
    pub store_name: String,
    #[serde(default)]
    pub customer_code: String,
    #[validate(custom = "validate_phone_number")]
    pub phone_number: String,
}

impl UserData {
    /// First error message per field, keyed by field name, ready to show
    /// under the matching input.
    pub fn form_errors(&self) -> HashMap<&'static str, String> {
        let mut messages = HashMap::new();
        if let Err(errors) = self.validate() {
            for (field, field_errors) in errors.field_errors() {
                if let Some(error) = field_errors.first() {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    messages.insert(field, message);
                }
            }
        }
        messages
    }
}

fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Strips every whitespace character, so "0912 345 678" is accepted.
pub fn normalize_phone_number(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn validate_store_name(store_name: &str) -> Result<(), ValidationError> {
    if store_name.trim().is_empty() {
        return Err(error_with_message("required_store_name", REQUIRED_STORE_NAME_ERROR));
    }
    Ok(())
}

pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if phone.trim().is_empty() {
        return Err(error_with_message("required_phone_number", REQUIRED_PHONE_ERROR));
    }
    if !PHONE_REGEX.is_match(&normalize_phone_number(phone)) {
        return Err(error_with_message("invalid_phone_number", INVALID_PHONE_ERROR));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(store: &str, phone: &str) -> UserData {
        UserData {
            store_name: store.to_string(),
            customer_code: String::new(),
            phone_number: phone.to_string(),
        }
    }

    #[test]
    fn test_accepts_valid_registration() {
        assert!(user("Tạp hóa Minh Anh", "0912345678").validate().is_ok());
        assert!(user("Tạp hóa Minh Anh", "0912 345 678").validate().is_ok());
        assert!(user("Đại lý Số 1", "0387654321").validate().is_ok());
    }

    #[test]
    fn test_rejects_blank_store_name() {
        let errors = user("   ", "0912345678").form_errors();
        assert_eq!(errors.get("store_name").map(String::as_str), Some(REQUIRED_STORE_NAME_ERROR));
        assert!(!errors.contains_key("phone_number"));
    }

    #[test]
    fn test_phone_number_rules() {
        assert!(validate_phone_number("0512345678").is_ok());
        assert!(validate_phone_number("0712345678").is_ok());
        assert!(validate_phone_number("0812345678").is_ok());

        assert_eq!(validate_phone_number("").unwrap_err().code, "required_phone_number");
        assert_eq!(validate_phone_number("0112345678").unwrap_err().code, "invalid_phone_number");
        assert_eq!(validate_phone_number("091234567").unwrap_err().code, "invalid_phone_number");
        assert_eq!(validate_phone_number("09123456789").unwrap_err().code, "invalid_phone_number");
        assert_eq!(validate_phone_number("09123a5678").unwrap_err().code, "invalid_phone_number");
    }

    #[test]
    fn test_form_errors_reports_every_field() {
        let errors = user("", "123").form_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["phone_number"], INVALID_PHONE_ERROR);
    }

    #[test]
    fn test_customer_code_is_optional() {
        let mut data = user("Cửa hàng Hòa", "0987654321");
        data.customer_code = "HD-001".to_string();
        assert!(data.form_errors().is_empty());
    }

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number(" 0912\t345 678 "), "0912345678");
    }
}
