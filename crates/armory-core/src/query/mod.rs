//! SQL text generation.
//!
//! Statements are assembled from the static resource schemas, never from
//! caller-supplied identifiers. Values always travel as numbered `?N`
//! parameters.

pub mod plan;
pub mod statements;

pub use plan::{QueryPlan, UpdatePlanBuilder};

/// Hands out consecutive numbered placeholders starting at a base index.
#[derive(Debug, Clone)]
pub(crate) struct Placeholders {
    next: usize,
}

impl Placeholders {
    pub(crate) fn starting_at(base: usize) -> Self {
        Self { next: base }
    }

    /// Returns the next placeholder text, e.g. `?3`.
    pub(crate) fn next(&mut self) -> String {
        let placeholder = format!("?{}", self.next);
        self.next += 1;
        placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_consecutive() {
        let mut placeholders = Placeholders::starting_at(4);
        assert_eq!(placeholders.next(), "?4");
        assert_eq!(placeholders.next(), "?5");
        assert_eq!(placeholders.next(), "?6");
    }
}
