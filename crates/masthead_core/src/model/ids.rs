//! Stable identifiers for catalog entities.
//!
//! # Invariants
//! - Ids are random v4 UUIDs generated at entity construction.
//! - Two entities are "the same" iff their ids are equal.

use std::fmt::{Display, Formatter};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Returns the underlying UUID.
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifies one `Author` within a catalog.
    AuthorId
);
entity_id!(
    /// Identifies one `Magazine` within a catalog.
    MagazineId
);
entity_id!(
    /// Identifies one `Article` within a catalog.
    ArticleId
);

#[cfg(test)]
mod tests {
    use super::{ArticleId, AuthorId};

    #[test]
    fn new_ids_are_unique_and_not_nil() {
        let first = AuthorId::new();
        let second = AuthorId::new();
        assert_ne!(first, second);
        assert!(!first.as_uuid().is_nil());
    }

    #[test]
    fn display_matches_uuid_text() {
        let id = ArticleId::new();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}
