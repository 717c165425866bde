//! Field validation rules shared by entity constructors and setters.
//!
//! # Responsibility
//! - Own the length/shape limits for every validated field.
//! - Report failures as typed `ValidationError` values.
//!
//! # Invariants
//! - Lengths are counted in Unicode scalar values, not bytes.
//! - Blank checks trim whitespace; stored values are never trimmed.

use crate::model::ids::{AuthorId, MagazineId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 50;

/// Value rejected by a constructor or setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name is empty after trim.
    BlankAuthorName,
    /// Magazine name length outside `[2, 16]`.
    MagazineNameLength { len: usize },
    /// Magazine category is empty after trim.
    BlankCategory,
    /// Article title length outside `[5, 50]`.
    TitleLength { len: usize },
    /// Referenced author is not registered in this catalog.
    UnknownAuthor(AuthorId),
    /// Referenced magazine is not registered in this catalog.
    UnknownMagazine(MagazineId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankAuthorName => write!(f, "author name must be a non-empty string"),
            Self::MagazineNameLength { len } => write!(
                f,
                "magazine name must be between {MAGAZINE_NAME_MIN_CHARS} and {MAGAZINE_NAME_MAX_CHARS} characters, got {len}"
            ),
            Self::BlankCategory => write!(f, "magazine category must be a non-empty string"),
            Self::TitleLength { len } => write!(
                f,
                "article title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} characters inclusive, got {len}"
            ),
            Self::UnknownAuthor(id) => write!(f, "author is not registered: {id}"),
            Self::UnknownMagazine(id) => write!(f, "magazine is not registered: {id}"),
        }
    }
}

impl Error for ValidationError {}

/// Write attempted on a field that is fixed after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImmutableFieldError {
    pub entity: &'static str,
    pub field: &'static str,
}

impl Display for ImmutableFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} `{}` is immutable and cannot be modified",
            self.entity, self.field
        )
    }
}

impl Error for ImmutableFieldError {}

pub fn validate_author_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankAuthorName);
    }
    Ok(())
}

pub fn validate_magazine_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&len) {
        return Err(ValidationError::MagazineNameLength { len });
    }
    Ok(())
}

pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.trim().is_empty() {
        return Err(ValidationError::BlankCategory);
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        return Err(ValidationError::TitleLength { len });
    }
    Ok(())
}
