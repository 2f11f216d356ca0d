//! Crate right-click handling.
//!
//! Every right-click on a crate is classified into one [`Action`]:
//!
//! | Input                                                   | Action    |
//! |---------------------------------------------------------|-----------|
//! | shift + pigment in hand + label panel                   | LabelDraw |
//! | no shift + crate has content                            | Withdraw  |
//! | shift                                                   | Deposit   |
//! | anything else                                           | Idle      |
//!
//! The click is always consumed and the host's own handler never runs.

use std::collections::BTreeSet;

use bulkux_core::{
    BlockSelection, CrateState, HookResult, HostWorld, Inventory, ItemStack, Modifiers, Player,
    Side, SlotRef,
};
use tracing::debug;

use crate::bulk_mover::{move_all_matching, MoveOutcome};
use crate::error::UserFacingError;
use crate::label::{self, Pigment, LABEL_PANEL_BOX};

/// What a click on a crate does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Paint a label in the held pigment's color.
    LabelDraw(Pigment),
    /// Take one full stack out.
    Withdraw,
    /// Put every matching item the player carries in.
    Deposit,
    /// Nothing to do; the click is still consumed.
    Idle,
}

/// Pick the action for a click. First match wins.
pub fn classify(
    modifiers: Modifiers,
    held: Option<&ItemStack>,
    selection: &BlockSelection,
    crate_is_empty: bool,
) -> Action {
    if modifiers.shift && selection.selection_box_index == LABEL_PANEL_BOX {
        if let Some(pigment) = held.and_then(Pigment::of) {
            return Action::LabelDraw(pigment);
        }
    }
    if !modifiers.shift && !crate_is_empty {
        return Action::Withdraw;
    }
    if modifiers.shift {
        return Action::Deposit;
    }
    Action::Idle
}

/// Crate interaction override. Runs in place of the host's handler.
pub fn on_block_interact_start(
    world: &mut dyn HostWorld,
    player: &mut dyn Player,
    selection: &BlockSelection,
    modifiers: Modifiers,
    crate_state: &mut CrateState,
) -> HookResult {
    let action = classify(
        modifiers,
        player.active_hotbar_stack(),
        selection,
        crate_state.inventory.is_empty(),
    );
    debug!(?action, pos = %crate_state.pos, player = player.name(), "crate interaction");

    let result = match action {
        Action::LabelDraw(pigment) => {
            if label::draw(world, player.name(), selection, crate_state, pigment) {
                Ok(())
            } else {
                Err(UserFacingError::EmptyCrateLabel)
            }
        }
        Action::Withdraw => {
            withdraw(world, player, crate_state);
            Ok(())
        }
        Action::Deposit => deposit(world, player, crate_state).map(|_| ()),
        Action::Idle => Ok(()),
    };

    if let Err(err) = result {
        report(world, err);
    }

    crate_state.mark_dirty();
    HookResult::CONSUMED
}

/// Hand the first stack of the crate to the player, dropping whatever does
/// not fit at their feet. Returns the number of items taken out.
pub fn withdraw(world: &mut dyn HostWorld, player: &mut dyn Player, crate_state: &mut CrateState) -> u32 {
    let Some(index) = crate_state.inventory.first_non_empty_slot() else {
        return 0;
    };
    let Some(slot) = crate_state.inventory.slot_mut(index) else {
        return 0;
    };
    let Some(stack) = slot.take_out_whole() else {
        return 0;
    };
    slot.mark_dirty();

    let quantity = stack.count;
    let code = stack.code().clone();
    let feedback = stack.clone();

    match player.try_give_itemstack(stack) {
        Ok(()) => world.did_move_items(crate_state.pos, &feedback, player.name()),
        Err(rest) => {
            debug!(count = rest.count, "player inventory full, dropping stack");
            world.spawn_item_entity(rest, player.block_position());
        }
    }

    world.audit(&format!(
        "{} Took {}x{} from Crate at {}.",
        player.name(),
        quantity,
        code,
        crate_state.pos
    ));

    if crate_state.inventory.is_empty() {
        label::clear(world, &mut crate_state.label);
    }
    quantity
}

/// Move every item of the crate's kind (or the held kind, for an empty
/// crate) from the player's hotbar and then backpacks into the crate.
pub fn deposit(
    world: &mut dyn HostWorld,
    player: &mut dyn Player,
    crate_state: &mut CrateState,
) -> Result<MoveOutcome, UserFacingError> {
    let target = crate_state
        .inventory
        .first_stack()
        .or_else(|| player.active_hotbar_stack())
        .cloned()
        .ok_or(UserFacingError::EmptyCrateAndHand)?;

    let mut outcome = move_all_matching(&target, player.hotbar_mut(), &mut crate_state.inventory);
    mark_slots_dirty(player.hotbar_mut(), &outcome.dirty_slots);
    if let Some(backpack) = player.backpack_mut() {
        let from_backpack = move_all_matching(&target, backpack, &mut crate_state.inventory);
        mark_slots_dirty(backpack, &from_backpack.dirty_slots);
        outcome.merge(from_backpack);
    }

    if outcome.is_empty() {
        debug!(code = %target.code(), "nothing matching to deposit");
        return Ok(outcome);
    }
    mark_slots_dirty(&mut crate_state.inventory, &outcome.dirty_slots);

    if let Some(shown) = crate_state.inventory.first_stack().cloned() {
        world.did_move_items(crate_state.pos, &shown, player.name());
    }
    world.audit(&format!(
        "{} Put {}x{} into Crate at {}.",
        player.name(),
        outcome.moved,
        target.code(),
        crate_state.pos
    ));
    Ok(outcome)
}

fn mark_slots_dirty(inventory: &mut Inventory, dirty: &BTreeSet<SlotRef>) {
    let id = inventory.id().to_string();
    for slot_ref in dirty.iter().filter(|slot_ref| slot_ref.inventory == id) {
        if let Some(slot) = inventory.slot_mut(slot_ref.slot) {
            slot.mark_dirty();
        }
    }
}

fn report(world: &mut dyn HostWorld, err: UserFacingError) {
    match world.side() {
        Side::Client => {
            let message = world.translate(&err.to_string());
            world.trigger_ingame_error(err.code(), &message);
        }
        Side::Server => debug!("{err}"),
    }
}
