//! Registry access errors.
//!
//! Failures here are host-level: a world module that mutates the finalized
//! set propagates them with `?`, and the host's loading pipeline decides
//! how to surface them.

/// Errors raised while registering, mutating, or resolving options.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OptionsError {
    /// No option with this key exists in the set.
    #[error("option '{0}' is not registered")]
    UnknownOption(String),

    /// The option exists but has a different kind than the caller expected.
    #[error("option '{key}' is not a {expected} option")]
    KindMismatch { key: String, expected: &'static str },

    /// A value was referenced that is not a member of a choice's value set.
    /// Covers alias targets and default overwrites.
    #[error("value {value} is not a member of option '{key}'")]
    ValueNotInSet { key: String, value: u32 },

    /// Player-supplied text did not resolve to any value of the option.
    #[error("'{text}' is not a valid value for option '{key}'")]
    InvalidValue { key: String, text: String },

    /// A numeric value fell outside the option's declared bounds.
    #[error("value {value} for option '{key}' is outside {min}..={max}")]
    ValueOutOfRange {
        key: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A display group references an option key that was never registered.
    #[error("group '{group}' references unknown option '{key}'")]
    GroupMemberUnknown { group: String, key: String },
}
