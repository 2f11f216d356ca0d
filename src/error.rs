//! Errors surfaced to the player.

use thiserror::Error;

/// An action that makes no sense in the current state. Shown as an in-game
/// toast on clients, silently dropped on servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserFacingError {
    /// Label drawing on a crate with nothing in it.
    #[error("Can't draw item symbol on an empty crate. Put something inside the crate first")]
    EmptyCrateLabel,
    /// Deposit with an empty crate and an empty hand.
    #[error("This crate is empty and nothing is in your active hotbar slot")]
    EmptyCrateAndHand,
}

impl UserFacingError {
    /// Error code passed to the host's toast.
    pub fn code(&self) -> &'static str {
        "empty"
    }
}
