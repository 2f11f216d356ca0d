//! Item kind and stack fixtures.

use std::sync::Arc;

use bulkux_core::{AssetLocation, Attributes, Collectible, ItemStack, DEFAULT_MAX_STACK_SIZE};
use serde_json::json;

/// A stackable kind with the default stack size.
pub fn kind(code: &str) -> Arc<Collectible> {
    kind_with_max(code, DEFAULT_MAX_STACK_SIZE)
}

/// A kind with a custom stack size.
pub fn kind_with_max(code: &str, max_stack_size: u32) -> Arc<Collectible> {
    let code = AssetLocation::parse(code).expect("fixture item code is valid");
    Arc::new(Collectible::new(code, max_stack_size))
}

/// `game:stone`, stacks to 64.
pub fn stone() -> Arc<Collectible> {
    kind("game:stone")
}

/// `game:dirt`, stacks to 64.
pub fn dirt() -> Arc<Collectible> {
    kind("game:dirt")
}

/// A pigment item carrying `pigment.color.{red,green,blue}`.
pub fn pigment(code: &str, red: i64, green: i64, blue: i64) -> Arc<Collectible> {
    let code = AssetLocation::parse(code).expect("fixture item code is valid");
    let attributes = Attributes::new(json!({
        "pigment": { "color": { "red": red, "green": green, "blue": blue } }
    }));
    Arc::new(Collectible::new(code, DEFAULT_MAX_STACK_SIZE).with_attributes(attributes))
}

/// Red dye.
pub fn red_dye() -> Arc<Collectible> {
    pigment("game:dye-red", 200, 30, 30)
}

/// A stack of `count` items of `kind`.
pub fn stack(kind: &Arc<Collectible>, count: u32) -> ItemStack {
    ItemStack::new(Arc::clone(kind), count)
}
