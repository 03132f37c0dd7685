use std::collections::BTreeMap;
use validator::{ValidationError, ValidationErrors};

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

/// Joins every field message into one human-readable line.
///
/// Fields are visited in name order so the same input always yields the same text.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    validation_error_map(errors)
        .into_values()
        .flatten()
        .collect::<Vec<_>>()
        .join("; ")
}

/// Field name -> messages, for clients that highlight individual inputs.
pub fn validation_error_map(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| (field.to_string(), errs.iter().map(message_of).collect()))
        .collect()
}
