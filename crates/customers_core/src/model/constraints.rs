//! Static field bounds for customer attributes.
//!
//! # Invariants
//! - `min <= max` for every row.
//! - Bounds are inclusive and measured in UTF-16 code units.

/// One row of the customer constraint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConstraint {
    /// Wire/property name, e.g. `firstName`.
    pub field: &'static str,
    /// Human label used as the subject of validation messages.
    pub label: &'static str,
    /// Minimum allowed length.
    pub min: usize,
    /// Maximum allowed length.
    pub max: usize,
}

pub const FIRST_NAME: FieldConstraint = FieldConstraint {
    field: "firstName",
    label: "First name",
    min: 1,
    max: 75,
};

pub const LAST_NAME: FieldConstraint = FieldConstraint {
    field: "lastName",
    label: "Last name",
    min: 1,
    max: 50,
};

pub const EMAIL: FieldConstraint = FieldConstraint {
    field: "email",
    label: "E-mail",
    min: 5,
    // RFC 3696 section 3 upper bound.
    max: 320,
};

/// Returns all constraint rows in validation order.
pub fn customer_constraints() -> [FieldConstraint; 3] {
    [FIRST_NAME, LAST_NAME, EMAIL]
}

impl FieldConstraint {
    /// Returns whether `length` lies within `[min, max]`.
    pub fn accepts_length(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }
}

#[cfg(test)]
mod tests {
    use super::customer_constraints;

    #[test]
    fn table_rows_are_ordered_and_well_formed() {
        let fields: Vec<_> = customer_constraints().iter().map(|row| row.field).collect();
        assert_eq!(fields, vec!["firstName", "lastName", "email"]);
        assert!(customer_constraints().iter().all(|row| row.min <= row.max));
    }

    #[test]
    fn accepts_length_is_inclusive() {
        let [first, _, email] = customer_constraints();
        assert!(first.accepts_length(1));
        assert!(first.accepts_length(75));
        assert!(!first.accepts_length(0));
        assert!(!first.accepts_length(76));
        assert!(!email.accepts_length(4));
        assert!(email.accepts_length(320));
    }
}
