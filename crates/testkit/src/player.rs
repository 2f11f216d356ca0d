use bulkux_core::{BlockPos, Inventory, ItemStack, Player};

/// Slots in a player's hotbar.
pub const HOTBAR_SLOTS: usize = 10;

/// Player with a hotbar and an optional backpack inventory.
#[derive(Debug, Clone)]
pub struct TestPlayer {
    /// Player name.
    pub name: String,
    /// Block the player stands in.
    pub position: BlockPos,
    /// Hotbar inventory.
    pub hotbar: Inventory,
    /// Carried containers.
    pub backpack: Option<Inventory>,
    /// Index of the active hotbar slot.
    pub active_slot: usize,
}

impl TestPlayer {
    /// A player with an empty hotbar and no backpack.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            position: BlockPos::new(0, 64, 0),
            hotbar: Inventory::new(format!("hotbar-{name}"), HOTBAR_SLOTS),
            backpack: None,
            active_slot: 0,
        }
    }

    /// Replace the hotbar contents; the hotbar has exactly `stacks.len()` slots.
    pub fn with_hotbar(mut self, stacks: Vec<Option<ItemStack>>) -> Self {
        self.hotbar = Inventory::from_stacks(format!("hotbar-{}", self.name), stacks);
        self
    }

    /// Give the player a backpack inventory.
    pub fn with_backpack(mut self, stacks: Vec<Option<ItemStack>>) -> Self {
        self.backpack = Some(Inventory::from_stacks(
            format!("backpack-{}", self.name),
            stacks,
        ));
        self
    }

    /// Select the active hotbar slot.
    pub fn holding(mut self, slot: usize) -> Self {
        self.active_slot = slot;
        self
    }

    /// Move the player.
    pub fn at(mut self, position: BlockPos) -> Self {
        self.position = position;
        self
    }

    /// Item count per hotbar slot.
    pub fn hotbar_counts(&self) -> Vec<u32> {
        self.hotbar.iter().map(|slot| slot.count()).collect()
    }
}

impl Player for TestPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn block_position(&self) -> BlockPos {
        self.position
    }

    fn active_hotbar_stack(&self) -> Option<&ItemStack> {
        self.hotbar.slot(self.active_slot).and_then(|slot| slot.stack())
    }

    fn hotbar_mut(&mut self) -> &mut Inventory {
        &mut self.hotbar
    }

    fn backpack_mut(&mut self) -> Option<&mut Inventory> {
        self.backpack.as_mut()
    }

    fn try_give_itemstack(&mut self, stack: ItemStack) -> Result<(), ItemStack> {
        let Some(rest) = self.hotbar.add_item(stack) else {
            return Ok(());
        };
        match self.backpack.as_mut() {
            Some(backpack) => backpack.add_item(rest).map_or(Ok(()), Err),
            None => Err(rest),
        }
    }
}
