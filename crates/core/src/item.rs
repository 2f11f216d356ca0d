//! Item kinds and item stacks.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::asset::AssetLocation;

/// Per-stack attributes the host treats as volatile: they never prevent two
/// stacks from merging.
pub const IGNORED_STACK_ATTRIBUTES: &[&str] = &["temperature", "toolMode", "renderVariant"];

/// Default maximum stack size for block and material items.
pub const DEFAULT_MAX_STACK_SIZE: u32 = 64;

/// Read-only JSON attribute tree with dotted-path lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Value);

impl Attributes {
    /// Wrap a JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Look up a nested value, e.g. `pigment.color.red`.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.0, |node, key| node.as_object()?.get(key))
            .filter(|value| !value.is_null())
    }

    /// Whether `path` resolves to a non-null value.
    pub fn exists(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Read `path` as an integer. Floats are truncated toward zero.
    pub fn int(&self, path: &str) -> Option<i64> {
        let value = self.lookup(path)?;
        value
            .as_i64()
            .or_else(|| value.as_f64().map(|f| f as i64))
    }
}

/// An item kind: everything stacks of the kind share.
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    /// Item code, e.g. `game:stone`.
    pub code: AssetLocation,
    /// Largest count a single slot may hold.
    pub max_stack_size: u32,
    /// Item-level attributes (pigment, storage flags, ...).
    pub attributes: Attributes,
}

impl Collectible {
    /// Create a collectible with no item attributes.
    pub fn new(code: AssetLocation, max_stack_size: u32) -> Self {
        Self {
            code,
            max_stack_size: max_stack_size.max(1),
            attributes: Attributes::default(),
        }
    }

    /// Attach item-level attributes.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// A count of one item kind held by a single slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    /// Shared kind definition.
    pub collectible: Arc<Collectible>,
    /// Number of items in the stack.
    pub count: u32,
    /// Per-stack attributes (wear, timestamps, temperature, ...).
    pub attributes: BTreeMap<String, Value>,
}

impl ItemStack {
    /// Create a stack without per-stack attributes.
    pub fn new(collectible: Arc<Collectible>, count: u32) -> Self {
        Self {
            collectible,
            count,
            attributes: BTreeMap::new(),
        }
    }

    /// Set a per-stack attribute, returning the modified stack.
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Item code of the stack's kind.
    pub fn code(&self) -> &AssetLocation {
        &self.collectible.code
    }

    /// Item-level attributes of the stack's kind.
    pub fn item_attributes(&self) -> &Attributes {
        &self.collectible.attributes
    }

    /// Maximum stack size of this kind.
    pub fn max_stack_size(&self) -> u32 {
        self.collectible.max_stack_size
    }

    /// Check if this stack is at max capacity.
    pub fn is_full(&self) -> bool {
        self.count >= self.max_stack_size()
    }

    /// Get remaining space in this stack.
    pub fn remaining_space(&self) -> u32 {
        self.max_stack_size().saturating_sub(self.count)
    }

    /// Whether two stacks are of the same kind and may merge.
    pub fn same_kind(&self, other: &ItemStack) -> bool {
        self.equals_ignoring(other, IGNORED_STACK_ATTRIBUTES)
    }

    /// Kind equality that skips the given per-stack attribute keys.
    pub fn equals_ignoring(&self, other: &ItemStack, ignored: &[&str]) -> bool {
        if self.collectible.code != other.collectible.code {
            return false;
        }
        relevant_attributes(self, ignored).eq(relevant_attributes(other, ignored))
    }

    /// Split off up to `amount` items into a new stack of the same kind.
    pub fn split(&mut self, amount: u32) -> Option<ItemStack> {
        let amount = amount.min(self.count);
        if amount == 0 {
            return None;
        }
        self.count -= amount;
        Some(ItemStack {
            collectible: Arc::clone(&self.collectible),
            count: amount,
            attributes: self.attributes.clone(),
        })
    }
}

fn relevant_attributes<'a>(
    stack: &'a ItemStack,
    ignored: &'a [&'a str],
) -> impl Iterator<Item = (&'a String, &'a Value)> + 'a {
    stack
        .attributes
        .iter()
        .filter(move |(key, _)| !ignored.contains(&key.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stone() -> Arc<Collectible> {
        Arc::new(Collectible::new(
            AssetLocation::parse("game:stone").unwrap(),
            DEFAULT_MAX_STACK_SIZE,
        ))
    }

    #[test]
    fn volatile_attributes_do_not_split_kinds() {
        let kind = stone();
        let hot = ItemStack::new(Arc::clone(&kind), 3).with_attribute("temperature", json!(800));
        let cold = ItemStack::new(kind, 5);
        assert!(hot.same_kind(&cold));
    }

    #[test]
    fn other_attributes_split_kinds() {
        let kind = stone();
        let worn = ItemStack::new(Arc::clone(&kind), 1).with_attribute("durability", json!(3));
        let fresh = ItemStack::new(kind, 1);
        assert!(!worn.same_kind(&fresh));
    }

    #[test]
    fn nested_attribute_lookup() {
        let attrs = Attributes::new(json!({
            "pigment": { "color": { "red": 200, "green": 10.7, "blue": 0 } }
        }));
        assert!(attrs.exists("pigment.color"));
        assert_eq!(attrs.int("pigment.color.red"), Some(200));
        assert_eq!(attrs.int("pigment.color.green"), Some(10));
        assert!(!attrs.exists("pigment.shade"));
        assert!(!Attributes::default().exists("pigment"));
    }

    #[test]
    fn split_caps_at_count() {
        let mut stack = ItemStack::new(stone(), 10);
        let taken = stack.split(25).unwrap();
        assert_eq!(taken.count, 10);
        assert_eq!(stack.count, 0);
        assert!(stack.split(1).is_none());
    }
}
