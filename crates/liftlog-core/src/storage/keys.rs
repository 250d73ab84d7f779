//! Storage keys for the persisted collections.

/// Namespace the collections have always been stored under.
pub const DEFAULT_NAMESPACE: &str = "training-tracker:v1";

/// Fully qualified keys for one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionKeys {
    pub exercises: String,
    pub routines: String,
    pub sessions: String,
    /// Flag gating one-time sample data seeding.
    pub seeded: String,
}

impl CollectionKeys {
    pub fn new(namespace: &str) -> Self {
        let namespace = namespace.trim_end_matches(':');
        Self {
            exercises: format!("{}:exercises", namespace),
            routines: format!("{}:routines", namespace),
            sessions: format!("{}:sessions", namespace),
            seeded: format!("{}:seeded", namespace),
        }
    }
}

impl Default for CollectionKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keys = CollectionKeys::default();
        assert_eq!(keys.exercises, "training-tracker:v1:exercises");
        assert_eq!(keys.routines, "training-tracker:v1:routines");
        assert_eq!(keys.sessions, "training-tracker:v1:sessions");
        assert_eq!(keys.seeded, "training-tracker:v1:seeded");
    }

    #[test]
    fn test_trailing_separator_is_ignored() {
        assert_eq!(CollectionKeys::new("gym:"), CollectionKeys::new("gym"));
    }
}
