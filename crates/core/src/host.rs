//! Interfaces consumed from the host game.
//!
//! The mod never owns world, player or renderer state. Everything it needs
//! from the host goes through the traits in this module, which the host
//! adapter (or the testkit) implements.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::asset::AssetLocation;
use crate::crate_state::CrateState;
use crate::inventory::Inventory;
use crate::item::ItemStack;

/// `tracing` target used for audit lines.
pub const AUDIT_TARGET: &str = "bulkux::audit";

/// Integer block coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct BlockPos {
    /// East-west coordinate.
    pub x: i32,
    /// Height.
    pub y: i32,
    /// North-south coordinate.
    pub z: i32,
}

impl BlockPos {
    /// Create a block position.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X={},Y={},Z={}", self.x, self.y, self.z)
    }
}

/// World-space position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3d {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3d {
    /// Create a vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// What the player's cursor hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockSelection {
    /// Block that was clicked.
    pub position: BlockPos,
    /// Hit point relative to the block origin (each axis in 0..=1).
    pub hit_position: Vec3d,
    /// Index of the selection box that was hit.
    pub selection_box_index: usize,
}

impl BlockSelection {
    /// Absolute world position of the hit point.
    pub fn hit_point(&self) -> Vec3d {
        Vec3d::new(
            f64::from(self.position.x) + self.hit_position.x,
            f64::from(self.position.y) + self.hit_position.y,
            f64::from(self.position.z) + self.hit_position.z,
        )
    }
}

/// Modifier keys held during the click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift (sneak) key.
    pub shift: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Self = Self { shift: false };
    /// Shift held.
    pub const SHIFT: Self = Self { shift: true };
}

/// Which side of the game the callback runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Game client; shows toasts and plays local effects.
    Client,
    /// Authoritative server.
    Server,
}

/// Handle to a label texture allocated in the block atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelMesh {
    /// Atlas sub-texture id.
    pub texture_subid: i32,
}

/// Answer of an interaction override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookResult {
    /// Whether the host should still run its own handler.
    pub run_default: bool,
    /// Reported to the host as "interaction consumed".
    pub handled: bool,
}

impl HookResult {
    /// Interaction consumed, host handler suppressed.
    pub const CONSUMED: Self = Self {
        run_default: false,
        handled: true,
    };
}

/// Mouse button of a help overlay entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left button.
    Left,
    /// Middle button.
    Middle,
    /// Right button.
    Right,
}

/// One entry of a block's interaction help overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldInteraction {
    /// Language key of the action label.
    pub action_lang_code: String,
    /// Button the entry is bound to.
    pub mouse_button: MouseButton,
    /// Hotkeys that must be held (`shift`, `ctrl`, ...).
    pub hotkey_codes: Vec<String>,
}

/// World-side services.
pub trait HostWorld {
    /// Side this world instance runs on.
    fn side(&self) -> Side;

    /// Drop `stack` into the world as an item entity.
    fn spawn_item_entity(&mut self, stack: ItemStack, at: BlockPos);

    /// Play a sound at a world position, audible within `range` blocks.
    fn play_sound_at(&mut self, sound: &AssetLocation, at: Vec3d, range: f32, by_player: &str);

    /// The crate's move feedback (hand animation and sound).
    fn did_move_items(&mut self, crate_pos: BlockPos, stack: &ItemStack, by_player: &str);

    /// Release a label's atlas allocation.
    fn free_atlas_space(&mut self, mesh: LabelMesh);

    /// Show an in-game error toast. Only meaningful on clients.
    fn trigger_ingame_error(&mut self, code: &str, message: &str);

    /// Resolve a language key; unknown keys resolve to themselves.
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }

    /// Record an audit line.
    fn audit(&mut self, line: &str) {
        info!(target: AUDIT_TARGET, "{line}");
    }
}

/// The player performing an interaction.
pub trait Player {
    /// Player name as shown in audit lines.
    fn name(&self) -> &str;

    /// Block the player stands in.
    fn block_position(&self) -> BlockPos;

    /// Stack in the active hotbar slot.
    fn active_hotbar_stack(&self) -> Option<&ItemStack>;

    /// Hotbar inventory.
    fn hotbar_mut(&mut self) -> &mut Inventory;

    /// Carried containers, if the player has any.
    fn backpack_mut(&mut self) -> Option<&mut Inventory>;

    /// Give a stack to the player. On failure returns what could not be
    /// placed.
    fn try_give_itemstack(&mut self, stack: ItemStack) -> Result<(), ItemStack>;
}

/// Override for a crate right-click.
pub type CrateInteractHook = fn(
    &mut dyn HostWorld,
    &mut dyn Player,
    &BlockSelection,
    Modifiers,
    &mut CrateState,
) -> HookResult;

/// Post-processor for the crate's help overlay.
pub type CrateHelpHook = fn(&mut Vec<WorldInteraction>);

/// Extension points the host exposes to mods.
pub trait ExtensionPoints {
    /// Whether `mod_id` already registered overrides in this process.
    fn has_overrides(&self, mod_id: &str) -> bool;

    /// Run `hook` in place of the host's crate right-click handler.
    fn override_crate_interaction(&mut self, mod_id: &str, hook: CrateInteractHook);

    /// Run `hook` on the crate's help overlay whenever it is built.
    fn postprocess_crate_help(&mut self, mod_id: &str, hook: CrateHelpHook);

    /// Drop everything `mod_id` registered.
    fn remove_overrides(&mut self, mod_id: &str);
}
