use serde_json;
use thiserror::Error;

// Enum for handling various application-level errors.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Rule table lookup failed: {0}")]
    NotFound(#[from] NotFound), // A referenced rule-table name does not exist.

    #[error("Change rejected: {0}")]
    Rejected(#[from] Rejection), // A mutation violated a floor, cap or budget rule.

    #[error("Rule tables inconsistent: {0}")]
    TablesInconsistent(String), // The static tables fail the headroom invariant.

    #[error("Build is not complete: {0}")]
    Incomplete(String), // A finished-character operation was asked of an unfinished build.

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error), // Errors related to data serialization.

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error), // Input/output errors.

    #[error("No save named '{0}' exists")]
    SaveNotFound(String), // A requested save file is missing.
}

// A rule-table name that resolved to nothing. Callers treat this as
// "selection incomplete", never as a crash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no {kind} named '{name}'")]
pub struct NotFound {
    pub kind: &'static str,
    pub name: String,
}

impl NotFound {
    pub fn new(kind: &'static str, name: impl Into<String>) -> Self {
        NotFound {
            kind,
            name: name.into(),
        }
    }
}

// Why a mutation was refused. The build is always returned unchanged
// alongside one of these; every rejection is recoverable by re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("value is below the floor of {0}")]
    BelowFloor(u8),

    #[error("value is above the cap of {0}")]
    AboveCap(u8),

    #[error("change would exceed the point budget of {0}")]
    BudgetExceeded(u8),

    #[error("this advanced skill is locked for the selected concept")]
    SkillLocked,

    #[error("talent is fixed by the character's humanity")]
    TalentLocked,

    #[error("talent is not available to the selected concept")]
    TalentNotAvailable,

    #[error("randomizer headroom is smaller than the remaining budget")]
    InsufficientHeadroom,
}
