//! Mod lifecycle: registering the crate overrides with the host.

use anyhow::Result;
use bulkux_core::ExtensionPoints;
use tracing::{debug, info};

use crate::config::{LangTable, ModInfo};
use crate::help::{self, rewrite_crate_help};
use crate::interaction::on_block_interact_start;

/// The loaded mod.
#[derive(Debug, Clone)]
pub struct BulkUxMod {
    info: ModInfo,
    lang: LangTable,
    installed: bool,
}

impl BulkUxMod {
    /// Load the mod from its embedded metadata and language file.
    pub fn load() -> Result<Self> {
        let info = ModInfo::embedded()?;
        let lang = LangTable::embedded(&info.modid)?;
        Ok(Self::new(info, lang))
    }

    /// Create the mod from already loaded metadata.
    pub fn new(info: ModInfo, lang: LangTable) -> Self {
        Self {
            info,
            lang,
            installed: false,
        }
    }

    /// Mod metadata.
    pub fn info(&self) -> &ModInfo {
        &self.info
    }

    /// Language table of the mod's assets.
    pub fn lang(&self) -> &LangTable {
        &self.lang
    }

    /// Whether this instance registered the overrides.
    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Register the crate overrides. In single player, client and server
    /// start the mod in the same process; only the first start registers.
    ///
    /// Returns whether this call registered anything.
    pub fn start(&mut self, host: &mut dyn ExtensionPoints) -> bool {
        let modid = self.info.modid.as_str();
        if host.has_overrides(modid) {
            debug!(modid, "crate overrides already registered in this process");
            return false;
        }

        host.override_crate_interaction(modid, on_block_interact_start);
        host.postprocess_crate_help(modid, rewrite_crate_help);
        self.installed = true;

        let entries = help::bulk_interactions();
        let labels: Vec<&str> = entries
            .iter()
            .map(|wi| self.lang.get(&wi.action_lang_code))
            .collect();
        info!(
            modid,
            version = %self.info.version,
            help = ?labels,
            "crate bulk interactions registered"
        );
        true
    }

    /// Unregister whatever [`start`](Self::start) registered.
    pub fn stop(&mut self, host: &mut dyn ExtensionPoints) {
        if !self.installed {
            return;
        }
        host.remove_overrides(&self.info.modid);
        self.installed = false;
        info!(modid = %self.info.modid, "crate bulk interactions removed");
    }
}
