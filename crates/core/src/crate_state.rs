//! Per-block state of a storage crate.

use crate::host::{BlockPos, LabelMesh};
use crate::inventory::{Inventory, PlacementPolicy};
use crate::item::ItemStack;

/// Number of slots in a crate inventory.
pub const CRATE_SLOT_COUNT: usize = 16;

/// Label painted on a crate's front panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrateLabel {
    /// Packed ARGB tint.
    pub color: i32,
    /// Exemplar of the crate's content drawn on the label.
    pub stack: Option<ItemStack>,
    /// Tessellated label; `None` makes the host rebuild it.
    pub mesh: Option<LabelMesh>,
}

/// Inventory and presentation state of one crate block entity.
#[derive(Debug, Clone)]
pub struct CrateState {
    /// Block position.
    pub pos: BlockPos,
    /// Single-kind crate inventory.
    pub inventory: Inventory,
    /// Painted label; meaningful only while the inventory holds items.
    pub label: CrateLabel,
    dirty_marks: u32,
}

impl CrateState {
    /// Create an empty crate at `pos`.
    pub fn new(pos: BlockPos) -> Self {
        Self::with_inventory(pos, Inventory::new(inventory_id(pos), CRATE_SLOT_COUNT))
    }

    /// Create a crate around an existing inventory. The inventory is switched
    /// to single-kind placement.
    pub fn with_inventory(pos: BlockPos, inventory: Inventory) -> Self {
        Self {
            pos,
            inventory: inventory.with_policy(PlacementPolicy::SingleKind),
            label: CrateLabel::default(),
            dirty_marks: 0,
        }
    }

    /// Flag the block entity for sync and redraw.
    pub fn mark_dirty(&mut self) {
        self.dirty_marks += 1;
    }

    /// How often the entity was marked dirty.
    pub fn dirty_marks(&self) -> u32 {
        self.dirty_marks
    }
}

/// Inventory id the host uses for the crate at `pos`.
pub fn inventory_id(pos: BlockPos) -> String {
    format!("crate-{}/{}/{}", pos.x, pos.y, pos.z)
}
