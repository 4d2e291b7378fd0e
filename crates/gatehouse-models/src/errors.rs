use thiserror::Error;

/// Errors raised at the boundary where untyped input becomes a domain value.
///
/// Authorization denials are never errors; they are plain `false` results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// A role, resource, action or status string outside its closed set.
    #[error("invalid {kind} value: {value:?}")]
    InvalidEnumValue { kind: &'static str, value: String },
}

impl AccessError {
    pub fn invalid_enum_value(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            kind,
            value: value.into(),
        }
    }

    /// Stable machine-readable kind, matching the documented error taxonomy.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEnumValue { .. } => "invalid-enum-value",
        }
    }
}
