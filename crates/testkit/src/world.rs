use std::collections::HashMap;

use bulkux_core::{AssetLocation, BlockPos, HostWorld, ItemStack, LabelMesh, Side, Vec3d};
use tracing::info;

/// Side effect a [`TestWorld`] observed.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldEvent {
    /// An item entity was dropped into the world.
    SpawnedItem {
        /// Item code.
        code: String,
        /// Stack size.
        count: u32,
        /// Drop position.
        at: BlockPos,
    },
    /// A sound was played.
    Sound {
        /// Sound location.
        sound: String,
        /// World position.
        at: Vec3d,
        /// Audible range.
        range: f32,
    },
    /// The crate's move feedback ran.
    MovedItems {
        /// Crate position.
        crate_pos: BlockPos,
        /// Item code of the stack shown.
        code: String,
        /// Size of the stack shown.
        count: u32,
    },
    /// A label atlas allocation was released.
    FreedAtlas(LabelMesh),
    /// An in-game error toast was shown.
    IngameError {
        /// Error code.
        code: String,
        /// Translated message.
        message: String,
    },
}

/// Host world that records every side effect.
#[derive(Debug, Clone)]
pub struct TestWorld {
    /// Side this world pretends to run on.
    pub side: Side,
    /// Side effects in call order.
    pub events: Vec<WorldEvent>,
    /// Audit lines in call order.
    pub audit_log: Vec<String>,
    /// Language overrides used by `translate`.
    pub translations: HashMap<String, String>,
}

impl TestWorld {
    /// A client-side world (error toasts are shown).
    pub fn client() -> Self {
        Self::on(Side::Client)
    }

    /// A server-side world.
    pub fn server() -> Self {
        Self::on(Side::Server)
    }

    fn on(side: Side) -> Self {
        Self {
            side,
            events: Vec::new(),
            audit_log: Vec::new(),
            translations: HashMap::new(),
        }
    }

    /// Error toasts shown so far.
    pub fn ingame_errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                WorldEvent::IngameError { message, .. } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Item entities spawned so far as `(code, count, position)`.
    pub fn spawned_items(&self) -> Vec<(&str, u32, BlockPos)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                WorldEvent::SpawnedItem { code, count, at } => Some((code.as_str(), *count, *at)),
                _ => None,
            })
            .collect()
    }

    /// How often the crate move feedback ran.
    pub fn move_feedback_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, WorldEvent::MovedItems { .. }))
            .count()
    }
}

impl HostWorld for TestWorld {
    fn side(&self) -> Side {
        self.side
    }

    fn spawn_item_entity(&mut self, stack: ItemStack, at: BlockPos) {
        self.events.push(WorldEvent::SpawnedItem {
            code: stack.code().to_string(),
            count: stack.count,
            at,
        });
    }

    fn play_sound_at(&mut self, sound: &AssetLocation, at: Vec3d, range: f32, _by_player: &str) {
        self.events.push(WorldEvent::Sound {
            sound: sound.to_string(),
            at,
            range,
        });
    }

    fn did_move_items(&mut self, crate_pos: BlockPos, stack: &ItemStack, _by_player: &str) {
        self.events.push(WorldEvent::MovedItems {
            crate_pos,
            code: stack.code().to_string(),
            count: stack.count,
        });
    }

    fn free_atlas_space(&mut self, mesh: LabelMesh) {
        self.events.push(WorldEvent::FreedAtlas(mesh));
    }

    fn trigger_ingame_error(&mut self, code: &str, message: &str) {
        self.events.push(WorldEvent::IngameError {
            code: code.to_string(),
            message: message.to_string(),
        });
    }

    fn translate(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    fn audit(&mut self, line: &str) {
        info!(target: bulkux_core::host::AUDIT_TARGET, "{line}");
        self.audit_log.push(line.to_string());
    }
}
