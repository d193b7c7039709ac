// Compile Errors
// Failures and warnings produced while compiling channels, inputs and schedules

use serde::Serialize;

/// Result type for compiler operations
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that abort a compile; no partial descriptor is ever returned
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("Invalid profile: resolution '{0}' is not WIDTHxHEIGHT")]
    InvalidProfile(String),

    #[error("Invalid channel name: {0}")]
    InvalidChannelName(String),

    #[error("Dangling reference: {kind} '{name}' does not resolve")]
    DanglingReference { kind: &'static str, name: String },

    #[error("Orphaned destination: '{0}' is not referenced by any output")]
    OrphanedDestination(String),

    #[error("Duplicate identifier: {kind} '{name}' is declared more than once")]
    DuplicateIdentifier { kind: &'static str, name: String },

    #[error("Output group '{0}' has no outputs")]
    EmptyOutputGroup(String),

    #[error("Action '{action}' follows unknown action '{reference}'")]
    UnresolvedFollowReference { action: String, reference: String },

    #[error("Duplicate action name: '{0}'")]
    DuplicateActionName(String),

    #[error("Invalid timestamp: '{0}'")]
    InvalidTimestamp(String),

    #[error("Unknown ingest strategy: '{0}'")]
    UnknownIngestStrategy(String),

    #[error("Unknown channel preset: '{0}'")]
    UnknownPreset(String),
}

/// Non-fatal conditions reported alongside a compiled descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CompileWarning {
    /// A generated name exceeded the platform limit and was cut to its prefix
    #[serde(rename_all = "camelCase")]
    NameTruncated { original: String, truncated: String },

    /// Distinct generated names of the same entity kind were truncated to one name.
    /// References to the name resolve to the first entity declared under it.
    #[serde(rename_all = "camelCase")]
    NameCollision { entity: String, name: String },
}

impl std::fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileWarning::NameTruncated { original, truncated } => {
                write!(f, "Name '{original}' truncated to '{truncated}'")
            }
            CompileWarning::NameCollision { entity, name } => {
                write!(f, "Truncated {entity} name '{name}' is shared by several entities")
            }
        }
    }
}
