/// Failures raised by the external data collaborators (usage history,
/// inventory, child profiles, prediction sink).
#[derive(Debug, thiserror::Error)]
pub enum AccessorError {
    #[error("{source_name} unreachable: {reason}")]
    Unreachable { source_name: String, reason: String },

    #[error("{source_name} query failed: {reason}")]
    Query { source_name: String, reason: String },
}

impl AccessorError {
    pub fn unreachable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unreachable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    pub fn query(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Query {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
