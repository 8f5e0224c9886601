use thiserror::Error as ThisError;

use crate::places::PlaceId;

/// Errors raised by route planning and the place store.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Fewer waypoints than a route needs. No partial route is produced.
    #[error("insufficient input: at least {required} waypoints are required, got {actual}")]
    InsufficientInput { required: usize, actual: usize },
    /// No stored place has this identifier.
    #[error("place not found: {0}")]
    PlaceNotFound(PlaceId),
    /// A place was rejected before being stored.
    #[error("invalid place: {0}")]
    InvalidPlace(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_place(message: impl Into<String>) -> Self {
        Self::InvalidPlace(message.into())
    }

    /// Short heading a presentation layer can show for this error.
    pub fn user_title(&self) -> &'static str {
        match self {
            Self::InsufficientInput { .. } => "Not Enough Locations",
            Self::PlaceNotFound(_) => "Place Not Found",
            Self::InvalidPlace(_) => "Invalid Place",
        }
    }

    /// Message a presentation layer can show for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::InsufficientInput { required, .. } => format!(
                "Please add at least {required} locations with valid coordinates."
            ),
            Self::PlaceNotFound(_) => "The selected place no longer exists.".to_string(),
            Self::InvalidPlace(reason) => format!("The place could not be saved: {reason}."),
        }
    }
}
