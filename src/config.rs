//! Embedded mod metadata and language table.

use anyhow::{bail, Context, Result};
use bulkux_core::AssetLocation;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

const MODINFO_JSON: &str = include_str!("../modinfo.json");
const LANG_EN_JSON: &str = include_str!("../assets/bulkux/lang/en.json");

/// Where the mod must be installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ModSide {
    /// Needed on both sides.
    Universal,
    /// Client only.
    Client,
    /// Server only.
    Server,
}

/// Contents of `modinfo.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModInfo {
    /// Mod type (`code` for compiled mods).
    #[serde(rename = "type")]
    pub kind: String,
    /// Mod id; also the domain of the mod's assets.
    pub modid: String,
    /// Display name.
    pub name: String,
    /// Author names.
    #[serde(default)]
    pub authors: Vec<String>,
    /// One-line description.
    #[serde(default)]
    pub description: String,
    /// Mod version.
    pub version: String,
    /// Where the mod must be installed.
    pub side: ModSide,
    /// Whether clients must have the mod to join.
    #[serde(default)]
    pub required_on_client: bool,
    /// Required mods and minimum versions.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

impl ModInfo {
    /// Metadata compiled into the mod.
    pub fn embedded() -> Result<Self> {
        Self::from_json(MODINFO_JSON).context("embedded modinfo.json is invalid")
    }

    /// Parse and validate metadata.
    pub fn from_json(json: &str) -> Result<Self> {
        let info: ModInfo = serde_json::from_str(json).context("failed to parse mod info")?;
        // The mod id doubles as the asset domain of the mod's language keys.
        AssetLocation::parse(&format!("{}:modinfo", info.modid))
            .with_context(|| format!("mod id `{}` is not a valid asset domain", info.modid))?;
        if info.version.trim().is_empty() {
            bail!("mod `{}` has an empty version", info.modid);
        }
        Ok(info)
    }
}

/// Language strings for one locale.
#[derive(Debug, Clone, Default)]
pub struct LangTable {
    domain: String,
    entries: HashMap<String, String>,
}

impl LangTable {
    /// English strings compiled into the mod, keyed under `domain`.
    pub fn embedded(domain: &str) -> Result<Self> {
        Self::from_json(domain, LANG_EN_JSON).context("embedded lang/en.json is invalid")
    }

    /// Parse a flat `{ "key": "text" }` language file.
    pub fn from_json(domain: &str, json: &str) -> Result<Self> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).context("failed to parse language file")?;
        Ok(Self {
            domain: domain.to_string(),
            entries,
        })
    }

    /// Translation for `key`; `domain:`-prefixed keys resolve against this
    /// table's domain. Unknown keys resolve to themselves.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        let local = key
            .strip_prefix(self.domain.as_str())
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(key);
        self.entries.get(local).map_or(key, String::as_str)
    }

    /// Whether `key` has a translation.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key) != key
    }
}
