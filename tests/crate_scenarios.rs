//! End-to-end crate interactions against the in-memory host.

use std::collections::BTreeSet;

use bulkux::interaction::deposit;
use bulkux::label::{to_argb, CHALK_DRAW_RANGE, LABEL_PANEL_BOX};
use bulkux::{on_block_interact_start, BulkUxMod};
use bulkux_core::{
    BlockPos, BlockSelection, CrateLabel, CrateState, HookResult, Inventory, ItemStack, LabelMesh,
    Modifiers, SlotRef, Vec3d, CRATE_SLOT_COUNT,
};
use bulkux_testkit::items::{dirt, red_dye, stack, stone};
use bulkux_testkit::{
    init_tracing, TestExtensionPoints, TestPlayer, TestWorld, WorldEvent, HOST_DEFAULT,
};

const CRATE_POS: BlockPos = BlockPos::new(10, 64, -4);

fn crate_with(stacks: Vec<Option<ItemStack>>) -> CrateState {
    let mut slots = stacks;
    slots.resize(CRATE_SLOT_COUNT, None);
    CrateState::with_inventory(
        CRATE_POS,
        Inventory::from_stacks(bulkux_core::crate_state::inventory_id(CRATE_POS), slots),
    )
}

fn counts(inv: &Inventory) -> Vec<u32> {
    inv.iter().map(|slot| slot.count()).collect()
}

fn crate_counts(state: &CrateState, n: usize) -> Vec<u32> {
    counts(&state.inventory).into_iter().take(n).collect()
}

fn select(box_index: usize) -> BlockSelection {
    BlockSelection {
        position: CRATE_POS,
        hit_position: Vec3d::new(0.5, 0.75, 0.0),
        selection_box_index: box_index,
    }
}

fn click(
    world: &mut TestWorld,
    player: &mut TestPlayer,
    state: &mut CrateState,
    modifiers: Modifiers,
    box_index: usize,
) -> HookResult {
    init_tracing();
    on_block_interact_start(world, player, &select(box_index), modifiers, state)
}

#[test]
fn s1_simple_deposit() {
    let mut world = TestWorld::client();
    let mut player = TestPlayer::new("Steve")
        .with_hotbar(vec![
            Some(stack(&stone(), 10)),
            None,
            Some(stack(&dirt(), 5)),
            Some(stack(&stone(), 20)),
        ])
        .holding(0);
    let mut state = crate_with(vec![]);

    let result = click(&mut world, &mut player, &mut state, Modifiers::SHIFT, 0);

    assert_eq!(result, HookResult::CONSUMED);
    assert_eq!(crate_counts(&state, 2), vec![30, 0]);
    assert_eq!(player.hotbar_counts(), vec![0, 0, 5, 0]);
    assert_eq!(state.inventory.dirty_slots(), vec![0]);
    assert_eq!(player.hotbar.dirty_slots(), vec![0, 3]);
    assert_eq!(world.move_feedback_count(), 1);
    assert_eq!(state.dirty_marks(), 1);
}

#[test]
fn s1_dirty_set_names_touched_slots() {
    let mut world = TestWorld::client();
    let mut player = TestPlayer::new("Steve").with_hotbar(vec![
        Some(stack(&stone(), 10)),
        None,
        Some(stack(&dirt(), 5)),
        Some(stack(&stone(), 20)),
    ]);
    let mut state = crate_with(vec![]);

    let outcome = deposit(&mut world, &mut player, &mut state).unwrap();

    let expected: BTreeSet<SlotRef> = [
        state.inventory.slot_ref(0),
        player.hotbar.slot_ref(0),
        player.hotbar.slot_ref(3),
    ]
    .into_iter()
    .collect();
    assert_eq!(outcome.dirty_slots, expected);
    assert_eq!(outcome.moved, 30);
}

#[test]
fn s2_packing_across_full_stacks() {
    let mut world = TestWorld::client();
    let mut player = TestPlayer::new("Steve")
        .with_hotbar(vec![Some(stack(&stone(), 30)), Some(stack(&stone(), 40))]);
    let mut state = crate_with(vec![Some(stack(&stone(), 50))]);

    click(&mut world, &mut player, &mut state, Modifiers::SHIFT, 0);

    assert_eq!(crate_counts(&state, 3), vec![64, 56, 0]);
    assert_eq!(player.hotbar_counts(), vec![0, 0]);
}

#[test]
fn s3_kind_mismatch_ignored() {
    let mut world = TestWorld::client();
    let mut player = TestPlayer::new("Steve")
        .with_hotbar(vec![Some(stack(&dirt(), 64)), Some(stack(&stone(), 1))])
        .holding(0);
    let mut state = crate_with(vec![Some(stack(&stone(), 1))]);

    click(&mut world, &mut player, &mut state, Modifiers::SHIFT, 0);

    assert_eq!(crate_counts(&state, 2), vec![2, 0]);
    assert_eq!(player.hotbar_counts(), vec![64, 0]);
    assert_eq!(
        player.hotbar.slot(0).and_then(|slot| slot.stack()).map(|s| s.code().to_string()),
        Some("game:dirt".to_string())
    );
}

#[test]
fn s4_withdraw_full_stack() {
    let mut world = TestWorld::client();
    let mut player = TestPlayer::new("Steve");
    let mut state = crate_with(vec![Some(stack(&stone(), 64)), Some(stack(&stone(), 10))]);

    let result = click(&mut world, &mut player, &mut state, Modifiers::NONE, 0);

    assert_eq!(result, HookResult::CONSUMED);
    assert_eq!(player.hotbar.count_of(&stack(&stone(), 1)), 64);
    assert_eq!(crate_counts(&state, 2), vec![0, 10]);
    assert_eq!(state.inventory.first_non_empty_slot(), Some(1));
    assert_eq!(state.inventory.dirty_slots(), vec![0]);
    assert_eq!(
        world.events,
        vec![WorldEvent::MovedItems {
            crate_pos: CRATE_POS,
            code: "game:stone".to_string(),
            count: 64,
        }]
    );
    assert_eq!(
        world.audit_log,
        vec!["Steve Took 64xgame:stone from Crate at X=10,Y=64,Z=-4.".to_string()]
    );
}

#[test]
fn s5_withdraw_to_full_player_drops() {
    let mut world = TestWorld::server();
    let full: Vec<_> = (0..10).map(|_| Some(stack(&dirt(), 64))).collect();
    let feet = BlockPos::new(12, 64, -2);
    let mut player = TestPlayer::new("Steve").with_hotbar(full).at(feet);
    let mut state = crate_with(vec![Some(stack(&stone(), 64))]);
    state.label = CrateLabel {
        color: -1,
        stack: Some(stack(&stone(), 64)),
        mesh: Some(LabelMesh { texture_subid: 3 }),
    };

    click(&mut world, &mut player, &mut state, Modifiers::NONE, 0);

    assert_eq!(world.spawned_items(), vec![("game:stone", 64, feet)]);
    assert!(state.inventory.is_empty());
    assert!(state.label.stack.is_none());
    assert!(state.label.mesh.is_none());
    assert!(world
        .events
        .contains(&WorldEvent::FreedAtlas(LabelMesh { texture_subid: 3 })));
    assert_eq!(world.move_feedback_count(), 0);
}

#[test]
fn withdraw_spills_only_what_does_not_fit() {
    let mut world = TestWorld::client();
    let mut player = TestPlayer::new("Steve").with_hotbar(vec![Some(stack(&stone(), 60))]);
    let mut state = crate_with(vec![Some(stack(&stone(), 64))]);

    click(&mut world, &mut player, &mut state, Modifiers::NONE, 0);

    assert_eq!(player.hotbar_counts(), vec![64]);
    assert_eq!(world.spawned_items(), vec![("game:stone", 60, player.position)]);
}

#[test]
fn s6_label_draw_requires_content_on_client() {
    let mut world = TestWorld::client();
    let mut player = TestPlayer::new("Steve").with_hotbar(vec![Some(stack(&red_dye(), 1))]);
    let mut state = crate_with(vec![]);

    let result = click(&mut world, &mut player, &mut state, Modifiers::SHIFT, LABEL_PANEL_BOX);

    assert_eq!(result, HookResult::CONSUMED);
    assert_eq!(
        world.ingame_errors(),
        vec!["Can't draw item symbol on an empty crate. Put something inside the crate first"]
    );
    assert_eq!(state.label, CrateLabel::default());
    assert!(state.inventory.is_empty());
    assert_eq!(player.hotbar_counts(), vec![1]);
}

#[test]
fn s6_label_draw_on_empty_crate_is_silent_on_server() {
    let mut world = TestWorld::server();
    let mut player = TestPlayer::new("Steve").with_hotbar(vec![Some(stack(&red_dye(), 1))]);
    let mut state = crate_with(vec![]);

    let result = click(&mut world, &mut player, &mut state, Modifiers::SHIFT, LABEL_PANEL_BOX);

    assert_eq!(result, HookResult::CONSUMED);
    assert!(world.events.is_empty());
    assert_eq!(state.label, CrateLabel::default());
    assert_eq!(state.dirty_marks(), 1);
}

#[test]
fn label_draw_tints_and_replaces_old_label() {
    let mut world = TestWorld::client();
    let mut player = TestPlayer::new("Steve").with_hotbar(vec![Some(stack(&red_dye(), 1))]);
    let mut state = crate_with(vec![Some(stack(&stone(), 5))]);
    state.label.mesh = Some(LabelMesh { texture_subid: 9 });

    click(&mut world, &mut player, &mut state, Modifiers::SHIFT, LABEL_PANEL_BOX);

    assert_eq!(state.label.color, to_argb(255, 240, 36, 36));
    assert_eq!(state.label.stack, Some(stack(&stone(), 5)));
    assert!(state.label.mesh.is_none());
    assert_eq!(
        world.events,
        vec![
            WorldEvent::FreedAtlas(LabelMesh { texture_subid: 9 }),
            WorldEvent::Sound {
                sound: "game:sounds/player/chalkdraw".to_string(),
                at: Vec3d::new(10.5, 64.75, -4.0),
                range: CHALK_DRAW_RANGE,
            },
        ]
    );
    // Drawing never moves items.
    assert_eq!(crate_counts(&state, 1), vec![5]);
    assert_eq!(player.hotbar_counts(), vec![1]);
    assert_eq!(state.dirty_marks(), 1);
}

#[test]
fn deposit_with_empty_crate_and_hand_reports_error() {
    let mut world = TestWorld::client();
    let mut player = TestPlayer::new("Steve").with_hotbar(vec![None, Some(stack(&stone(), 5))]);
    let mut state = crate_with(vec![]);

    let result = click(&mut world, &mut player, &mut state, Modifiers::SHIFT, 0);

    assert_eq!(result, HookResult::CONSUMED);
    assert_eq!(
        world.ingame_errors(),
        vec!["This crate is empty and nothing is in your active hotbar slot"]
    );
    assert!(state.inventory.is_empty());
    assert_eq!(player.hotbar_counts(), vec![0, 5]);
}

#[test]
fn deposit_drains_hotbar_before_backpack() {
    let mut world = TestWorld::client();
    let mut player = TestPlayer::new("Steve")
        .with_hotbar(vec![Some(stack(&stone(), 60))])
        .with_backpack(vec![None, Some(stack(&stone(), 10)), Some(stack(&dirt(), 3))]);
    let mut state = crate_with(vec![]);

    click(&mut world, &mut player, &mut state, Modifiers::SHIFT, 0);

    assert_eq!(crate_counts(&state, 3), vec![64, 6, 0]);
    assert_eq!(player.hotbar_counts(), vec![0]);
    let backpack = player.backpack.as_ref().unwrap();
    assert_eq!(counts(backpack), vec![0, 0, 3]);
    assert_eq!(backpack.dirty_slots(), vec![1]);
    assert_eq!(
        world.events,
        vec![WorldEvent::MovedItems {
            crate_pos: CRATE_POS,
            code: "game:stone".to_string(),
            count: 64,
        }]
    );
    assert_eq!(
        world.audit_log,
        vec!["Steve Put 70xgame:stone into Crate at X=10,Y=64,Z=-4.".to_string()]
    );
}

#[test]
fn deposit_into_full_crate_moves_nothing() {
    let mut world = TestWorld::client();
    let mut player = TestPlayer::new("Steve").with_hotbar(vec![Some(stack(&stone(), 5))]);
    let full: Vec<_> = (0..CRATE_SLOT_COUNT).map(|_| Some(stack(&stone(), 64))).collect();
    let mut state = crate_with(full);

    click(&mut world, &mut player, &mut state, Modifiers::SHIFT, 0);

    assert_eq!(player.hotbar_counts(), vec![5]);
    assert_eq!(world.move_feedback_count(), 0);
    assert!(world.audit_log.is_empty());
    assert_eq!(state.dirty_marks(), 1);
}

#[test]
fn plain_click_on_empty_crate_is_consumed() {
    let mut world = TestWorld::client();
    let mut player = TestPlayer::new("Steve").with_hotbar(vec![Some(stack(&stone(), 5))]);
    let mut state = crate_with(vec![]);

    let result = click(&mut world, &mut player, &mut state, Modifiers::NONE, 0);

    assert_eq!(result, HookResult::CONSUMED);
    assert!(world.events.is_empty());
    assert!(state.inventory.is_empty());
    assert_eq!(state.dirty_marks(), 1);
}

#[test]
fn second_deposit_dirties_only_slots_it_touched() {
    let mut world = TestWorld::client();
    let mut player = TestPlayer::new("Steve")
        .with_hotbar(vec![Some(stack(&stone(), 10))])
        .with_backpack(vec![Some(stack(&dirt(), 2)), None]);
    let mut state = crate_with(vec![]);

    click(&mut world, &mut player, &mut state, Modifiers::SHIFT, 0);
    assert_eq!(state.inventory.dirty_slots(), vec![0]);

    // The host flushes dirty slots between ticks.
    for index in 0..CRATE_SLOT_COUNT {
        if let Some(slot) = state.inventory.slot_mut(index) {
            slot.clear_dirty();
        }
    }
    if let Some(slot) = player.hotbar.slot_mut(0) {
        slot.clear_dirty();
    }
    if let Some(backpack) = player.backpack.as_mut() {
        if let Some(slot) = backpack.slot_mut(1) {
            slot.set(Some(stack(&stone(), 5)));
        }
    }

    click(&mut world, &mut player, &mut state, Modifiers::SHIFT, 0);

    assert_eq!(crate_counts(&state, 2), vec![15, 0]);
    assert_eq!(state.inventory.dirty_slots(), vec![0]);
    assert!(player.hotbar.dirty_slots().is_empty());
    assert_eq!(player.backpack.as_ref().map(Inventory::dirty_slots), Some(vec![1]));
    assert_eq!(state.dirty_marks(), 2);
}

#[test]
fn mod_registers_once_per_process() {
    init_tracing();
    let mut host = TestExtensionPoints::default();
    let mut server_side = BulkUxMod::load().unwrap();
    let mut client_side = BulkUxMod::load().unwrap();

    assert_eq!(server_side.info().modid, "bulkux");
    assert_eq!(
        server_side.lang().get("bulkux:blockhelp-bulkux-put"),
        "Put in all matching items"
    );

    assert!(server_side.start(&mut host));
    assert!(!client_side.start(&mut host));
    assert_eq!(host.registrations, 2);
    assert!(server_side.is_installed());
    assert!(!client_side.is_installed());

    let codes: Vec<String> = host
        .crate_help()
        .into_iter()
        .map(|wi| wi.action_lang_code)
        .collect();
    assert_eq!(
        codes,
        vec!["bulkux:blockhelp-bulkux-get", "bulkux:blockhelp-bulkux-put"]
    );

    let mut world = TestWorld::client();
    let mut player = TestPlayer::new("Steve");
    let mut state = crate_with(vec![Some(stack(&stone(), 64))]);
    let result = host.crate_interact(&mut world, &mut player, &select(0), Modifiers::NONE, &mut state);
    assert_eq!(result, HookResult::CONSUMED);
    assert!(state.inventory.is_empty());

    server_side.stop(&mut host);
    let mut state = crate_with(vec![Some(stack(&stone(), 64))]);
    let result = host.crate_interact(&mut world, &mut player, &select(0), Modifiers::NONE, &mut state);
    assert_eq!(result, HOST_DEFAULT);
    assert_eq!(host.crate_help().len(), 4);
}
