use std::collections::HashMap;

use validator::{Validate, ValidationErrors};

pub fn validate<T: Validate>(val: &T) -> Result<(), ValidationErrors> {
    val.validate()
}

/// Flattens validator output into the field -> messages map surfaced to
/// callers alongside API errors.
pub fn field_errors(errors: &ValidationErrors) -> HashMap<String, Vec<String>> {
    errors
        .field_errors()
        .iter()
        .map(|(field, field_errs)| {
            let messages = field_errs
                .iter()
                .map(|err| {
                    err.message
                        .clone()
                        .map(|m| m.into_owned())
                        .unwrap_or_else(|| err.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
