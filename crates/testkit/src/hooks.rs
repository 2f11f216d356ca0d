use std::collections::BTreeMap;

use bulkux_core::{
    BlockSelection, CrateHelpHook, CrateInteractHook, CrateState, ExtensionPoints, HookResult,
    HostWorld, Modifiers, MouseButton, Player, WorldInteraction,
};

/// What the host does when no override handled the click.
pub const HOST_DEFAULT: HookResult = HookResult {
    run_default: true,
    handled: false,
};

/// Registry of mod overrides for the crate block.
#[derive(Default)]
pub struct TestExtensionPoints {
    interact: BTreeMap<String, CrateInteractHook>,
    help: BTreeMap<String, CrateHelpHook>,
    /// Number of successful registrations, across all mods.
    pub registrations: usize,
}

impl TestExtensionPoints {
    /// Dispatch a crate right-click through the registered overrides, the way
    /// the host does: the first override that suppresses the default wins.
    pub fn crate_interact(
        &self,
        world: &mut dyn HostWorld,
        player: &mut dyn Player,
        selection: &BlockSelection,
        modifiers: Modifiers,
        crate_state: &mut CrateState,
    ) -> HookResult {
        for hook in self.interact.values() {
            let result = hook(world, player, selection, modifiers, crate_state);
            if !result.run_default {
                return result;
            }
        }
        HOST_DEFAULT
    }

    /// The crate's help overlay after every post-processor ran.
    pub fn crate_help(&self) -> Vec<WorldInteraction> {
        let mut list = default_crate_help();
        for hook in self.help.values() {
            hook(&mut list);
        }
        list
    }
}

impl ExtensionPoints for TestExtensionPoints {
    fn has_overrides(&self, mod_id: &str) -> bool {
        self.interact.contains_key(mod_id) || self.help.contains_key(mod_id)
    }

    fn override_crate_interaction(&mut self, mod_id: &str, hook: CrateInteractHook) {
        self.interact.insert(mod_id.to_string(), hook);
        self.registrations += 1;
    }

    fn postprocess_crate_help(&mut self, mod_id: &str, hook: CrateHelpHook) {
        self.help.insert(mod_id.to_string(), hook);
        self.registrations += 1;
    }

    fn remove_overrides(&mut self, mod_id: &str) {
        self.interact.remove(mod_id);
        self.help.remove(mod_id);
    }
}

/// The four one-item entries the host advertises for a crate.
pub fn default_crate_help() -> Vec<WorldInteraction> {
    let entry = |code: &str, hotkeys: &[&str]| WorldInteraction {
        action_lang_code: code.to_string(),
        mouse_button: MouseButton::Right,
        hotkey_codes: hotkeys.iter().map(|key| key.to_string()).collect(),
    };
    vec![
        entry("blockhelp-crate-add", &["shift"]),
        entry("blockhelp-crate-addall", &["shift", "ctrl"]),
        entry("blockhelp-crate-remove", &[]),
        entry("blockhelp-crate-removeall", &["ctrl"]),
    ]
}
