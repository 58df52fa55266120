use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|err| AppError::Validation(describe(&err)))
}

/// Flattens field errors into one sentence, fields in name order, each
/// message once.
fn describe(err: &ValidationErrors) -> String {
    let mut fields: Vec<_> = err.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    let mut messages: Vec<String> = Vec::new();
    for (field, errors) in fields {
        for error in errors {
            let message = match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            };
            if !messages.contains(&message) {
                messages.push(message);
            }
        }
    }
    messages.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Validate)]
    struct Probe {
        #[validate(required(message = "a is required"), length(min = 1, message = "a is required"))]
        a: Option<String>,
        #[validate(length(min = 1))]
        b: String,
    }

    #[test]
    fn passes_valid_payloads() {
        let probe = Probe { a: Some("x".into()), b: "y".into() };
        assert!(validate_payload(&probe).is_ok());
    }

    #[test]
    fn joins_messages_in_field_order() {
        let probe = Probe { a: None, b: String::new() };
        match validate_payload(&probe) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "a is required; b is invalid"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let probe = Probe { a: Some(String::new()), b: "y".into() };
        match validate_payload(&probe) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "a is required"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
