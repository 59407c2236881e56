use validator::{Validate, ValidationError, ValidationErrors};

/// Runs the declared rules and returns the message of the first failing
/// field, walking `order` so the answer does not depend on hash ordering.
pub fn first_violation<T: Validate>(value: &T, order: &[&str]) -> Result<(), String> {
    match value.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(first_message(&errors, order)),
    }
}

fn first_message(errors: &ValidationErrors, order: &[&str]) -> String {
    let field_errors = errors.field_errors();

    let mut fields: Vec<(String, &ValidationError)> = field_errors
        .iter()
        .filter_map(|(field, errs)| errs.first().map(|err| (field.to_string(), err)))
        .collect();

    fields.sort_by_key(|(field, _)| {
        order
            .iter()
            .position(|known| *known == field.as_str())
            .unwrap_or(usize::MAX)
    });

    fields
        .first()
        .map(|(field, err)| describe(field, err))
        .unwrap_or_else(|| "Validation failed".to_string())
}

fn describe(field: &str, error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| match error.code.as_ref() {
            "length" => format!("{field} has an invalid length"),
            "range" => format!("{field} is out of range"),
            "date" => format!("{field} must be in format YYYY-MM-DD"),
            _ => format!("invalid {field}"),
        })
}
