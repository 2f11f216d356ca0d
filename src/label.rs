//! Crate labels: pigment decoding, tinting and atlas bookkeeping.

use bulkux_core::{AssetLocation, BlockSelection, CrateLabel, CrateState, HostWorld, ItemStack};
use tracing::debug;

/// Selection box index of the crate's label panel.
pub const LABEL_PANEL_BOX: usize = 1;

/// Item attribute holding a pigment's color.
pub const PIGMENT_COLOR_ATTRIBUTE: &str = "pigment.color";

/// Sound played while drawing a label.
pub const CHALK_DRAW_SOUND: &str = "sounds/player/chalkdraw";

/// Audible range of the chalk sound in blocks.
pub const CHALK_DRAW_RANGE: f32 = 8.0;

/// Channel gain applied to pigment colors.
const LABEL_BRIGHTEN: f32 = 1.2;

/// Raw pigment color of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pigment {
    /// Red channel, nominally 0..=255.
    pub red: i64,
    /// Green channel.
    pub green: i64,
    /// Blue channel.
    pub blue: i64,
}

impl Pigment {
    /// Read the pigment of `stack`, if its kind has one. Missing channels
    /// read as 0.
    pub fn of(stack: &ItemStack) -> Option<Self> {
        let attrs = stack.item_attributes();
        if !attrs.exists(PIGMENT_COLOR_ATTRIBUTE) {
            return None;
        }
        let channel = |name: &str| {
            attrs
                .int(&format!("{PIGMENT_COLOR_ATTRIBUTE}.{name}"))
                .unwrap_or(0)
        };
        Some(Self {
            red: channel("red"),
            green: channel("green"),
            blue: channel("blue"),
        })
    }

    /// Brightened, fully opaque label tint.
    pub fn label_color(&self) -> i32 {
        to_argb(
            255,
            brighten(self.red),
            brighten(self.green),
            brighten(self.blue),
        )
    }
}

/// Scale a channel by the label gain, saturating to `0..=255`.
pub fn brighten(channel: i64) -> i32 {
    (channel as f32 * LABEL_BRIGHTEN).clamp(0.0, 255.0) as i32
}

/// Pack channels as `0xAARRGGBB`.
pub fn to_argb(a: i32, r: i32, g: i32, b: i32) -> i32 {
    (a << 24) | (r << 16) | (g << 8) | b
}

/// Release the label's atlas allocation, if it has one.
pub fn release_mesh(world: &mut dyn HostWorld, label: &mut CrateLabel) {
    if let Some(mesh) = label.mesh.take() {
        world.free_atlas_space(mesh);
    }
}

/// Reset the label of a crate that just became empty.
pub fn clear(world: &mut dyn HostWorld, label: &mut CrateLabel) {
    release_mesh(world, label);
    label.stack = None;
}

/// Paint a label of the crate's content in `pigment`'s color.
///
/// Returns `false` when the crate holds nothing to draw. The caller marks the
/// crate dirty.
pub fn draw(
    world: &mut dyn HostWorld,
    player: &str,
    selection: &BlockSelection,
    crate_state: &mut CrateState,
    pigment: Pigment,
) -> bool {
    let Some(exemplar) = crate_state.inventory.first_stack().cloned() else {
        return false;
    };

    release_mesh(world, &mut crate_state.label);
    crate_state.label.color = pigment.label_color();
    crate_state.label.stack = Some(exemplar);
    crate_state.label.mesh = None;

    match AssetLocation::parse(CHALK_DRAW_SOUND) {
        Ok(sound) => world.play_sound_at(&sound, selection.hit_point(), CHALK_DRAW_RANGE, player),
        Err(err) => debug!("skipping label sound: {err}"),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulkux_core::LabelMesh;
    use bulkux_testkit::items::{pigment, stack};
    use bulkux_testkit::{TestWorld, WorldEvent};

    #[test]
    fn brighten_saturates() {
        assert_eq!(brighten(100), 120);
        assert_eq!(brighten(250), 255);
        assert_eq!(brighten(-5), 0);
        assert_eq!(brighten(0), 0);
    }

    #[test]
    fn label_color_is_opaque_argb() {
        let red = Pigment {
            red: 200,
            green: 50,
            blue: 0,
        };
        let color = red.label_color() as u32;
        assert_eq!(color >> 24, 0xFF);
        assert_eq!((color >> 16) & 0xFF, 240);
        assert_eq!((color >> 8) & 0xFF, 60);
        assert_eq!(color & 0xFF, 0);
    }

    #[test]
    fn pigment_reads_item_attributes() {
        let dye = stack(&pigment("dye-red", 180, 20, 10), 1);
        assert_eq!(
            Pigment::of(&dye),
            Some(Pigment {
                red: 180,
                green: 20,
                blue: 10
            })
        );
        let plain = stack(&bulkux_testkit::items::stone(), 1);
        assert_eq!(Pigment::of(&plain), None);
    }

    #[test]
    fn clear_frees_atlas_and_exemplar() {
        let mut world = TestWorld::client();
        let mut label = CrateLabel {
            color: 1,
            stack: Some(stack(&bulkux_testkit::items::stone(), 1)),
            mesh: Some(LabelMesh { texture_subid: 7 }),
        };

        clear(&mut world, &mut label);

        assert!(label.stack.is_none());
        assert!(label.mesh.is_none());
        assert_eq!(
            world.events,
            vec![WorldEvent::FreedAtlas(LabelMesh { texture_subid: 7 })]
        );
    }

    #[test]
    fn clear_without_mesh_frees_nothing() {
        let mut world = TestWorld::client();
        let mut label = CrateLabel::default();
        clear(&mut world, &mut label);
        assert!(world.events.is_empty());
    }
}
