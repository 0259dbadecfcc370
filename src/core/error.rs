//=========================================================================
// Scene Errors
//=========================================================================
//
// Configuration and lookup failures of the scene core.
//
// Configuration errors are raised once, at startup, and abort the build.
// Lookup errors indicate an id that the registry never issued; they are
// invariant violations rather than user-facing conditions.
//
// Pick misses, clicks on empty space and clamped camera moves are NOT
// errors: they are defined no-op outcomes and never surface here.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::scene::ObjectId;

//=== SceneError ==========================================================

/// Errors produced while loading the catalog or querying the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The catalog contains no records; nothing can be placed.
    EmptyCatalog,

    /// A record has atomic number 0 (holds the symbol).
    InvalidAtomicNumber(String),

    /// A record's mass is zero, negative or NaN (holds the atomic number).
    InvalidAtomicMass(u32),

    /// Two records share the same atomic number.
    DuplicateAtomicNumber(u32),

    /// The id was not issued by this registry.
    ObjectNotFound(ObjectId),
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "Element catalog is empty"),
            Self::InvalidAtomicNumber(symbol) => {
                write!(f, "Element {} has atomic number 0", symbol)
            }
            Self::InvalidAtomicMass(n) => {
                write!(f, "Element #{} must have a positive atomic mass", n)
            }
            Self::DuplicateAtomicNumber(n) => {
                write!(f, "Duplicate atomic number in catalog: {}", n)
            }
            Self::ObjectNotFound(id) => write!(f, "No scene object with id {}", id),
        }
    }
}

impl std::error::Error for SceneError {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<SceneError>();
    }

    #[test]
    fn display_names_the_offender() {
        assert_eq!(
            SceneError::DuplicateAtomicNumber(6).to_string(),
            "Duplicate atomic number in catalog: 6"
        );
        assert_eq!(
            SceneError::ObjectNotFound(ObjectId::new(42)).to_string(),
            "No scene object with id 42"
        );
        assert_eq!(SceneError::EmptyCatalog.to_string(), "Element catalog is empty");
        assert_eq!(
            SceneError::InvalidAtomicMass(3).to_string(),
            "Element #3 must have a positive atomic mass"
        );
    }
}
