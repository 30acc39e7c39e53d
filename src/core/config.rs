//! # Operator configuration.
//!
//! Provides [`Config`] settings shared by every subscription an
//! [`Operator`](crate::Operator) creates.
//!
//! Config is used in two ways:
//! 1. **Diagnostics**: `name` labels every `tracing` event of the operator's subscriptions
//! 2. **Demand validation**: `strict_demand` decides how `request(0)` is handled

use std::borrow::Cow;

/// Configuration for an operator and its subscriptions.
///
/// ## Field semantics
/// - `name`: Label attached to log events as `stream=<name>`
/// - `strict_demand`: `request(0)` cancels with an error (`true`) or is ignored (`false`)
///
/// ## Notes
/// All fields are public for flexibility.
#[derive(Clone, Debug)]
pub struct Config {
    /// Label used in log events.
    pub name: Cow<'static, str>,

    /// How non-positive demand is handled.
    ///
    /// - `true` = `request(0)` signals [`StreamError::InvalidDemand`](crate::StreamError::InvalidDemand)
    ///   to the consumer and cancels the subscription
    /// - `false` = `request(0)` is a silent no-op
    ///
    /// Post-terminal requests are no-ops either way.
    pub strict_demand: bool,
}

impl Config {
    /// Creates a default configuration with the given name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the configured name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `name = "stream"`
    /// - `strict_demand = true` (zero demand is a protocol violation)
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("stream"),
            strict_demand: true,
        }
    }
}
