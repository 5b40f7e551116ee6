//! Filter normalization for customer search.
//!
//! Search requests arrive as a bag of optional scalars. Normalization turns
//! that bag into a canonical list of typed predicates, one per field that was
//! actually supplied. Field names that the request layer does not recognize
//! never get this far: the typed input struct has no slot for them, so they
//! are dropped before query building instead of being string-matched there.

use uuid::Uuid;

pub use crate::contract::model::CustomerFilterInput;

/// One typed constraint on a single customer field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPredicate {
    /// Exact match on the identifier.
    IdEquals(Uuid),
    /// Case-sensitive substring match.
    FullNameContains(String),
    /// Case-sensitive substring match.
    LastNameContains(String),
    /// Case-sensitive substring match.
    EmailContains(String),
    /// Exact match on the active flag.
    ActiveEquals(bool),
}

/// Canonical filter for one search request: the conjunction of its
/// predicates. Built by [`CustomerFilter::normalize`], consumed by the
/// storage layer, discarded after the query runs.
///
/// An empty filter is valid and means "every customer matches".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    predicates: Vec<FieldPredicate>,
}

impl CustomerFilter {
    /// Turn raw optional inputs into the canonical predicate list.
    ///
    /// Pure transformation: no validation, no I/O. Absent inputs contribute
    /// nothing; present inputs contribute exactly one predicate each.
    pub fn normalize(input: CustomerFilterInput) -> Self {
        let mut predicates = Vec::new();
        if let Some(id) = input.id {
            predicates.push(FieldPredicate::IdEquals(id));
        }
        if let Some(full_name) = input.full_name {
            predicates.push(FieldPredicate::FullNameContains(full_name));
        }
        if let Some(last_name) = input.last_name {
            predicates.push(FieldPredicate::LastNameContains(last_name));
        }
        if let Some(email) = input.email {
            predicates.push(FieldPredicate::EmailContains(email));
        }
        if let Some(active) = input.active {
            predicates.push(FieldPredicate::ActiveEquals(active));
        }
        Self { predicates }
    }

    pub fn predicates(&self) -> &[FieldPredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_filter() {
        let filter = CustomerFilter::normalize(CustomerFilterInput::default());
        assert!(filter.is_empty());
        assert_eq!(filter.predicates(), &[]);
    }

    #[test]
    fn present_fields_become_predicates() {
        let id = Uuid::new_v4();
        let filter = CustomerFilter::normalize(CustomerFilterInput {
            id: Some(id),
            full_name: Some("ann".into()),
            last_name: None,
            email: Some("@example.com".into()),
            active: Some(true),
        });

        assert_eq!(
            filter.predicates(),
            &[
                FieldPredicate::IdEquals(id),
                FieldPredicate::FullNameContains("ann".into()),
                FieldPredicate::EmailContains("@example.com".into()),
                FieldPredicate::ActiveEquals(true),
            ]
        );
    }

    #[test]
    fn active_false_is_kept_as_a_constraint() {
        let filter = CustomerFilter::normalize(CustomerFilterInput {
            active: Some(false),
            ..Default::default()
        });

        assert!(!filter.is_empty());
        assert_eq!(filter.predicates(), &[FieldPredicate::ActiveEquals(false)]);
    }

    #[test]
    fn single_field_input_yields_single_predicate() {
        let filter = CustomerFilter::normalize(CustomerFilterInput {
            last_name: Some("Smith".into()),
            ..Default::default()
        });

        assert_eq!(
            filter.predicates(),
            &[FieldPredicate::LastNameContains("Smith".into())]
        );
    }
}
