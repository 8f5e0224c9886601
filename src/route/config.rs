//! Route optimizer configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the optimizer does when given fewer than
/// [`MIN_WAYPOINTS`](crate::MIN_WAYPOINTS) waypoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShortInputPolicy {
    /// Fail with [`Error::InsufficientInput`](crate::Error::InsufficientInput).
    #[default]
    Reject,

    /// Return the input unchanged as an open route.
    PassThrough,
}

/// Configuration for [`RouteOptimizer`](crate::RouteOptimizer).
///
/// # Examples
///
/// ```
/// use waypoint_route::{RouteConfig, ShortInputPolicy};
///
/// let config = RouteConfig::default()
///     .with_close_loop(false)
///     .with_short_input(ShortInputPolicy::PassThrough);
/// assert!(!config.close_loop);
/// assert_eq!(config.short_input, ShortInputPolicy::PassThrough);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteConfig {
    /// Whether to append the start waypoint again at the end.
    pub close_loop: bool,

    /// Handling of inputs that are too short to route.
    pub short_input: ShortInputPolicy,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            close_loop: true,
            short_input: ShortInputPolicy::Reject,
        }
    }
}

impl RouteConfig {
    /// Enables or disables the closing leg back to the start.
    pub fn with_close_loop(mut self, close_loop: bool) -> Self {
        self.close_loop = close_loop;
        self
    }

    /// Sets the short-input policy.
    pub fn with_short_input(mut self, policy: ShortInputPolicy) -> Self {
        self.short_input = policy;
        self
    }
}
