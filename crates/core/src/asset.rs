//! Domain-qualified asset locations.
//!
//! Item codes, sounds and language keys are addressed as `domain:path`
//! (e.g. `game:stone`, `game:sounds/player/chalkdraw`). A location without a
//! domain belongs to [`DEFAULT_DOMAIN`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Domain assumed when a location omits one.
pub const DEFAULT_DOMAIN: &str = "game";

/// Error returned when parsing an invalid [`AssetLocation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid asset location `{input}`: {reason}")]
pub struct AssetLocationError {
    input: String,
    reason: &'static str,
}

impl AssetLocationError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// A location of the form `domain:path`.
///
/// Ordering is lexical by `(domain, path)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetLocation {
    domain: String,
    path: String,
}

impl AssetLocation {
    /// Parse a location, using [`DEFAULT_DOMAIN`] when none is given.
    pub fn parse(input: &str) -> Result<Self, AssetLocationError> {
        Self::parse_with_default_domain(input, DEFAULT_DOMAIN)
    }

    /// Parse a location using a caller-provided default domain.
    pub fn parse_with_default_domain(
        input: &str,
        default_domain: &str,
    ) -> Result<Self, AssetLocationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AssetLocationError::new(input, "location cannot be empty"));
        }

        let (domain, path) = match trimmed.split_once(':') {
            Some((d, p)) => (d.trim(), p.trim()),
            None => (default_domain, trimmed),
        };

        validate_domain(input, domain)?;
        validate_path(input, path)?;

        Ok(Self {
            domain: domain.to_string(),
            path: path.to_string(),
        })
    }

    /// Location domain (mod id or `game`).
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Location path inside the domain.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for AssetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.domain, self.path)
    }
}

impl FromStr for AssetLocation {
    type Err = AssetLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn validate_domain(input: &str, domain: &str) -> Result<(), AssetLocationError> {
    if domain.is_empty() {
        return Err(AssetLocationError::new(input, "domain cannot be empty"));
    }
    if !domain
        .chars()
        .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.'))
    {
        return Err(AssetLocationError::new(
            input,
            "domain has invalid characters (allowed: a-z0-9_.-)",
        ));
    }
    Ok(())
}

fn validate_path(input: &str, path: &str) -> Result<(), AssetLocationError> {
    if path.is_empty() {
        return Err(AssetLocationError::new(input, "path cannot be empty"));
    }
    if !path
        .chars()
        .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.' | '/'))
    {
        return Err(AssetLocationError::new(
            input,
            "path has invalid characters (allowed: a-z0-9_./-)",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_domain_qualified_location() {
        let loc = AssetLocation::parse("bulkux:blockhelp-bulkux-get").unwrap();
        assert_eq!(loc.domain(), "bulkux");
        assert_eq!(loc.path(), "blockhelp-bulkux-get");
        assert_eq!(loc.to_string(), "bulkux:blockhelp-bulkux-get");
    }

    #[test]
    fn bare_path_lands_in_game_domain() {
        let loc = AssetLocation::parse("sounds/player/chalkdraw").unwrap();
        assert_eq!(loc.to_string(), "game:sounds/player/chalkdraw");
    }

    #[test]
    fn rejects_malformed_locations() {
        assert!(AssetLocation::parse("").is_err());
        assert!(AssetLocation::parse("   ").is_err());
        assert!(AssetLocation::parse("game:Stone").is_err());
        assert!(AssetLocation::parse("game:").is_err());
        assert!(AssetLocation::parse(":stone").is_err());
    }
}
