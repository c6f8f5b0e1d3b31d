//! Field validation for ticket payloads.
//!
//! Text fields are trimmed, must not be blank and must fit their configured
//! maximum length. Numbers are accepted and stored in their string form;
//! booleans, arrays and objects are rejected.

use crate::validation::field_errors::{NOT_A_STRING, NOT_BLANK, NOT_NULL, REQUIRED};
use crate::{FieldErrors, NewTicket, TicketChanges, TicketInput, TicketLimits};

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Every field must be supplied (create, full update)
    Full,
    /// Only supplied fields are checked (partial update)
    Partial,
}

#[derive(Debug, Clone, Default)]
pub struct TicketValidator {
    limits: TicketLimits,
}

impl TicketValidator {
    pub fn new(limits: TicketLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &TicketLimits {
        &self.limits
    }

    /// Validate a complete payload (create or PUT).
    pub fn validate_full(&self, input: &TicketInput) -> Result<NewTicket, FieldErrors> {
        let changes = self.validate(input, Mode::Full)?;

        match changes {
            TicketChanges {
                title: Some(title),
                description: Some(description),
                category: Some(category),
                priority: Some(priority),
            } => Ok(NewTicket {
                title,
                description,
                category,
                priority,
            }),
            // Full mode reports every missing field, so this is unreachable
            // in practice; keep it an error rather than a panic.
            _ => {
                let mut errors = FieldErrors::new();
                errors.add("non_field_errors", "Incomplete ticket payload.");
                Err(errors)
            }
        }
    }

    /// Validate only the fields present in the payload (PATCH).
    pub fn validate_partial(&self, input: &TicketInput) -> Result<TicketChanges, FieldErrors> {
        self.validate(input, Mode::Partial)
    }

    fn validate(&self, input: &TicketInput, mode: Mode) -> Result<TicketChanges, FieldErrors> {
        let mut errors = FieldErrors::new();

        let changes = TicketChanges {
            title: check_field(
                &mut errors,
                "title",
                input.title.as_ref(),
                self.limits.max_title_length,
                mode,
            ),
            description: check_field(
                &mut errors,
                "description",
                input.description.as_ref(),
                self.limits.max_description_length,
                mode,
            ),
            category: check_field(
                &mut errors,
                "category",
                input.category.as_ref(),
                self.limits.max_category_length,
                mode,
            ),
            priority: check_field(
                &mut errors,
                "priority",
                input.priority.as_ref(),
                self.limits.max_priority_length,
                mode,
            ),
        };

        if errors.is_empty() {
            Ok(changes)
        } else {
            Err(errors)
        }
    }
}

fn check_field(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&Value>,
    max_length: usize,
    mode: Mode,
) -> Option<String> {
    let raw = match value {
        None => {
            if mode == Mode::Full {
                errors.add(field, REQUIRED);
            }
            return None;
        }
        Some(Value::Null) => {
            errors.add(field, NOT_NULL);
            return None;
        }
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => {
            errors.add(field, NOT_A_STRING);
            return None;
        }
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.add(field, NOT_BLANK);
        return None;
    }

    if trimmed.chars().count() > max_length {
        errors.add(field, FieldErrors::max_length_message(max_length));
        return None;
    }

    Some(trimmed.to_string())
}
