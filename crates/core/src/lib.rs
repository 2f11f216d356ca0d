#![warn(missing_docs)]
//! Data model and host interfaces shared across the workspace.

pub mod asset;
pub mod crate_state;
pub mod host;
pub mod inventory;
pub mod item;

// Re-export commonly used types
pub use asset::{AssetLocation, AssetLocationError};
pub use crate_state::{CrateLabel, CrateState, CRATE_SLOT_COUNT};
pub use host::{
    BlockPos, BlockSelection, CrateHelpHook, CrateInteractHook, ExtensionPoints, HookResult,
    HostWorld, LabelMesh, Modifiers, MouseButton, Player, Side, Vec3d, WorldInteraction,
};
pub use inventory::{Inventory, ItemSlot, PlacementPolicy, SlotRef};
pub use item::{Attributes, Collectible, ItemStack, DEFAULT_MAX_STACK_SIZE, IGNORED_STACK_ATTRIBUTES};
