//! Bulk deposit engine.
//!
//! Moves every stack of one kind from a source inventory into a destination
//! inventory, topping up partial stacks before opening empty slots so the
//! destination stays left-dense: full slots, then at most one partial slot,
//! then empty slots.

use std::collections::BTreeSet;

use bulkux_core::{Inventory, ItemStack, SlotRef};
use tracing::debug;

/// What a bulk move touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Source and destination slots whose contents changed.
    pub dirty_slots: BTreeSet<SlotRef>,
    /// Number of items moved.
    pub moved: u32,
}

impl MoveOutcome {
    /// Whether nothing moved.
    pub fn is_empty(&self) -> bool {
        self.dirty_slots.is_empty()
    }

    /// Fold another outcome into this one.
    pub fn merge(&mut self, other: MoveOutcome) {
        self.dirty_slots.extend(other.dirty_slots);
        self.moved += other.moved;
    }
}

/// Move every stack in `source` matching `target` into `dest`.
///
/// A destination slot is retired once a transfer leaves it full or moves
/// nothing into it. A slot left partial because the source slot ran dry stays
/// open for the next matching source slot. Stops early once `dest` has no
/// suitable slot left.
pub fn move_all_matching(target: &ItemStack, source: &mut Inventory, dest: &mut Inventory) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();
    let mut skip: Vec<usize> = Vec::new();

    for src_index in 0..source.slot_count() {
        let matches = source
            .slot(src_index)
            .and_then(|slot| slot.stack())
            .is_some_and(|stack| stack.same_kind(target));
        if !matches {
            continue;
        }

        while skip.len() < dest.slot_count() {
            let Some(stack) = source.slot(src_index).and_then(|slot| slot.stack()) else {
                break;
            };
            let Some(dest_index) = dest.best_suited_slot(stack, &skip) else {
                debug!(dest = dest.id(), "no suitable slot left in destination");
                return outcome;
            };

            let (Some(src_slot), Some(dest_slot)) =
                (source.slot_mut(src_index), dest.slot_mut(dest_index))
            else {
                break;
            };
            let quantity = src_slot.count();
            let moved = src_slot.try_put_into(dest_slot, quantity);
            let dest_full = dest_slot.stack().is_some_and(ItemStack::is_full);

            if moved > 0 {
                outcome.moved += moved;
                outcome.dirty_slots.insert(dest.slot_ref(dest_index));
                outcome.dirty_slots.insert(source.slot_ref(src_index));
            }
            if moved == 0 || dest_full {
                skip.push(dest_index);
            }
        }
    }

    outcome
}
