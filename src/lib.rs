#![warn(missing_docs)]
//! Bulk interactions for the storage crate block.
//!
//! A plain right-click on a crate takes out a full stack; shift + right-click
//! puts every matching item from the player's hotbar and backpacks into the
//! crate, topping up partial stacks first. Shift + right-click with a pigment
//! on the label panel paints a label of the content.
//!
//! The host wires [`on_block_interact_start`] and [`rewrite_crate_help`] into
//! its crate block through [`BulkUxMod::start`].

pub mod bulk_mover;
pub mod config;
pub mod error;
pub mod help;
pub mod interaction;
pub mod label;
pub mod mod_system;

pub use bulk_mover::{move_all_matching, MoveOutcome};
pub use config::{LangTable, ModInfo, ModSide};
pub use error::UserFacingError;
pub use help::rewrite_crate_help;
pub use interaction::{classify, on_block_interact_start, Action};
pub use mod_system::BulkUxMod;
