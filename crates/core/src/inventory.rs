//! Slots and inventories.
//!
//! An [`Inventory`] is an ordered, fixed-size run of [`ItemSlot`]s with a
//! placement policy. Crates use [`PlacementPolicy::SingleKind`], which keeps
//! every occupied slot on the same item kind.

use std::fmt;

use crate::item::ItemStack;

/// Slot in a specific inventory, used to report touched slots across
/// inventories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotRef {
    /// Owning inventory id.
    pub inventory: String,
    /// Slot index inside the inventory.
    pub slot: usize,
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.inventory, self.slot)
    }
}

/// A cell holding nothing or one stack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSlot {
    stack: Option<ItemStack>,
    dirty: bool,
}

impl ItemSlot {
    /// Create an empty slot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a slot holding `stack`.
    pub fn with_stack(stack: ItemStack) -> Self {
        Self {
            stack: Some(stack),
            dirty: false,
        }
    }

    /// Current stack, if any.
    pub fn stack(&self) -> Option<&ItemStack> {
        self.stack.as_ref()
    }

    /// Whether the slot holds nothing.
    pub fn is_empty(&self) -> bool {
        self.stack.is_none()
    }

    /// Item count in the slot (0 when empty).
    pub fn count(&self) -> u32 {
        self.stack.as_ref().map_or(0, |stack| stack.count)
    }

    /// How many items of `stack`'s kind this slot could still take.
    pub fn remaining_capacity_for(&self, stack: &ItemStack) -> u32 {
        match &self.stack {
            None => stack.max_stack_size(),
            Some(held) if held.same_kind(stack) => held.remaining_space(),
            Some(_) => 0,
        }
    }

    /// Replace the slot contents.
    pub fn set(&mut self, stack: Option<ItemStack>) {
        self.stack = stack.filter(|stack| stack.count > 0);
    }

    /// Take the whole stack out, leaving the slot empty.
    pub fn take_out_whole(&mut self) -> Option<ItemStack> {
        self.stack.take()
    }

    /// Move up to `quantity` items from this slot into `dest`.
    ///
    /// Returns the number of items moved; 0 when `dest` holds another kind or
    /// is full.
    pub fn try_put_into(&mut self, dest: &mut ItemSlot, quantity: u32) -> u32 {
        let Some(source) = self.stack.as_mut() else {
            return 0;
        };
        let amount = quantity
            .min(source.count)
            .min(dest.remaining_capacity_for(source));
        let Some(moved) = source.split(amount) else {
            return 0;
        };
        let exhausted = source.count == 0;

        match dest.stack.as_mut() {
            Some(held) => held.count += moved.count,
            None => dest.stack = Some(moved),
        }
        if exhausted {
            self.stack = None;
        }
        amount
    }

    /// Flag the slot as changed.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether the slot changed since the flag was last cleared.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the changed flag (after the host flushed the slot).
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

/// Which stacks an inventory's slots accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementPolicy {
    /// Any stack in any slot.
    #[default]
    Any,
    /// Only stacks of the kind already stored (any kind while empty).
    SingleKind,
}

/// Ordered, fixed-size collection of slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    id: String,
    slots: Vec<ItemSlot>,
    policy: PlacementPolicy,
}

impl Inventory {
    /// Create an inventory of `slot_count` empty slots accepting anything.
    pub fn new(id: impl Into<String>, slot_count: usize) -> Self {
        Self {
            id: id.into(),
            slots: vec![ItemSlot::empty(); slot_count],
            policy: PlacementPolicy::Any,
        }
    }

    /// Create an inventory from per-slot contents.
    pub fn from_stacks(id: impl Into<String>, stacks: Vec<Option<ItemStack>>) -> Self {
        let mut inventory = Self::new(id, stacks.len());
        for (slot, stack) in inventory.slots.iter_mut().zip(stacks) {
            slot.set(stack);
        }
        inventory
    }

    /// Set the placement policy, returning the modified inventory.
    pub fn with_policy(mut self, policy: PlacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Inventory id (e.g. `hotbar-Steve`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Placement policy.
    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    /// Total number of slots, occupied or not.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(ItemSlot::is_empty)
    }

    /// Get a slot by index.
    pub fn slot(&self, index: usize) -> Option<&ItemSlot> {
        self.slots.get(index)
    }

    /// Get a slot mutably by index.
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut ItemSlot> {
        self.slots.get_mut(index)
    }

    /// Iterate over slots in order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemSlot> {
        self.slots.iter()
    }

    /// Reference to slot `index` of this inventory.
    pub fn slot_ref(&self, index: usize) -> SlotRef {
        SlotRef {
            inventory: self.id.clone(),
            slot: index,
        }
    }

    /// Index of the first occupied slot.
    pub fn first_non_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|slot| !slot.is_empty())
    }

    /// Stack in the first occupied slot.
    pub fn first_stack(&self) -> Option<&ItemStack> {
        self.slots.iter().find_map(ItemSlot::stack)
    }

    /// Whether slot `index` may receive items of `stack`'s kind.
    pub fn accepts(&self, index: usize, stack: &ItemStack) -> bool {
        let Some(slot) = self.slots.get(index) else {
            return false;
        };
        if slot.remaining_capacity_for(stack) == 0 {
            return false;
        }
        match self.policy {
            PlacementPolicy::Any => true,
            PlacementPolicy::SingleKind => self
                .slots
                .iter()
                .filter_map(ItemSlot::stack)
                .all(|held| held.same_kind(stack)),
        }
    }

    /// Best slot to receive `stack`, ignoring the indices in `skip`.
    ///
    /// Prefers a partially filled slot of the same kind, then an empty slot.
    pub fn best_suited_slot(&self, stack: &ItemStack, skip: &[usize]) -> Option<usize> {
        self.candidate_slots(stack, skip)
            .find(|&index| !self.slots[index].is_empty())
            .or_else(|| self.candidate_slots(stack, skip).next())
    }

    fn candidate_slots<'a>(
        &'a self,
        stack: &'a ItemStack,
        skip: &'a [usize],
    ) -> impl Iterator<Item = usize> + 'a {
        (0..self.slots.len()).filter(move |index| !skip.contains(index) && self.accepts(*index, stack))
    }

    /// Add a stack, merging into existing stacks first and then filling empty
    /// slots. Returns whatever did not fit.
    pub fn add_item(&mut self, mut stack: ItemStack) -> Option<ItemStack> {
        for index in 0..self.slots.len() {
            if stack.count == 0 {
                return None;
            }
            if self.slots[index].is_empty() || !self.accepts(index, &stack) {
                continue;
            }
            let room = self.slots[index].remaining_capacity_for(&stack);
            if let (Some(part), Some(held)) = (stack.split(room), self.slots[index].stack.as_mut()) {
                held.count += part.count;
            }
        }

        while stack.count > 0 {
            let Some(index) = (0..self.slots.len())
                .find(|&index| self.slots[index].is_empty() && self.accepts(index, &stack))
            else {
                return Some(stack);
            };
            let placed = stack.split(stack.max_stack_size())?;
            self.slots[index].set(Some(placed));
        }
        None
    }

    /// Total number of items of `kind`'s kind across all slots.
    pub fn count_of(&self, kind: &ItemStack) -> u32 {
        self.slots
            .iter()
            .filter_map(ItemSlot::stack)
            .filter(|stack| stack.same_kind(kind))
            .map(|stack| stack.count)
            .sum()
    }

    /// Indices of slots flagged dirty.
    pub fn dirty_slots(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_dirty())
            .map(|(index, _)| index)
            .collect()
    }
}
