//! Ordering for ticket lists.
//!
//! Accepts the usual `ordering` query syntax: a field name sorts ascending,
//! a leading `-` sorts descending, and several keys may be comma separated
//! (`category,-title`). Unknown field names are dropped rather than rejected.
//! `id` ascending is always appended last so that pagination is stable.

use crate::{OrderField, SortDirection};

use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketOrdering {
    keys: Vec<(OrderField, SortDirection)>,
}

impl TicketOrdering {
    pub fn parse(raw: Option<&str>) -> Self {
        let mut keys: Vec<(OrderField, SortDirection)> = Vec::new();

        for part in raw.unwrap_or_default().split(',') {
            let part = part.trim();
            let (name, direction) = match part.strip_prefix('-') {
                Some(name) => (name, SortDirection::Descending),
                None => (part, SortDirection::Ascending),
            };

            let field = match OrderField::from_str(name) {
                Ok(field) => field,
                Err(_) => {
                    if !name.is_empty() {
                        log::debug!("Ignoring unknown ordering field '{}'", name);
                    }
                    continue;
                }
            };

            // First occurrence of a field wins
            if keys.iter().all(|(existing, _)| *existing != field) {
                keys.push((field, direction));
            }
        }

        Self { keys }
    }

    pub fn by(field: OrderField, direction: SortDirection) -> Self {
        Self {
            keys: vec![(field, direction)],
        }
    }

    /// Keys requested by the caller, without the implicit tiebreaker
    pub fn keys(&self) -> &[(OrderField, SortDirection)] {
        &self.keys
    }

    /// Requested keys followed by `id ASC` unless `id` was already requested
    pub fn resolved(&self) -> Vec<(OrderField, SortDirection)> {
        let mut keys = self.keys.clone();
        if keys.iter().all(|(field, _)| *field != OrderField::Id) {
            keys.push((OrderField::Id, SortDirection::Ascending));
        }
        keys
    }
}
