use crate::color::Color;

/// A transfer request that breaks the capacity or color rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("no free slots in destination container: {slots}")]
    DestinationFull { slots: String },

    #[error("can't transfer {moving} onto {top}")]
    ColorMismatch { moving: Color, top: Color },
}

/// Errors raised while reading a game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to decode config: {0}")]
    Decode(String),

    #[error("config validation error: {0}")]
    Validation(String),
}
