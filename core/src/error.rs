//! Simulation errors.

/// Errors that can occur while setting up or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid parameter {name}: {reason}")]
    Config { name: &'static str, reason: String },
}

impl Error {
    /// Build a configuration error for a named parameter.
    ///
    /// * `name`   - The parameter name.
    /// * `reason` - Why the value was rejected.
    pub fn config(name: &'static str, reason: impl Into<String>) -> Self {
        Self::Config {
            name,
            reason: reason.into(),
        }
    }
}
