//! Match and strategy configuration.
//!
//! `UnitCatalog` is read from the `unitInformation` block the host sends
//! at match start and is handed explicitly to every component that needs
//! unit identifiers, prices, or health. `StrategyConfig` holds the tunable
//! thresholds of the turn loop.

use std::path::Path;

use serde::Deserialize;

use crate::board::{Cost, UnitKind, ALL_UNIT_KINDS};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unitInformation lists {0} entries, need at least 6")]
    MissingUnits(usize),

    #[error("unit entry {0} has no shorthand")]
    MissingShorthand(usize),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMatchConfig {
    unit_information: Vec<RawUnitInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUnitInfo {
    #[serde(default)]
    shorthand: Option<String>,
    #[serde(default)]
    cost1: Option<f64>,
    #[serde(default)]
    cost2: Option<f64>,
    #[serde(default)]
    start_health: Option<f32>,
    #[serde(default)]
    upgrade: Option<RawUpgradeInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUpgradeInfo {
    #[serde(default)]
    cost1: Option<f64>,
    #[serde(default)]
    cost2: Option<f64>,
    #[serde(default)]
    start_health: Option<f32>,
}

/// Prices and health for one unit kind.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSpec {
    pub shorthand: String,
    pub cost: Cost,
    pub health: f32,
    pub upgrade_cost: Cost,
    pub upgraded_health: f32,
}

/// Identifier, price, and health lookup for every unit kind.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCatalog {
    specs: [UnitSpec; 6],
    pub remove_shorthand: String,
    pub upgrade_shorthand: String,
}

/// Fractional prices round up so that a gate never under-reserves.
fn price(amount: Option<f64>) -> u32 {
    amount.map_or(0, |a| a.max(0.0).ceil() as u32)
}

fn spec(
    shorthand: &str,
    cost: Cost,
    health: f32,
    upgrade_cost: Cost,
    upgraded_health: f32,
) -> UnitSpec {
    UnitSpec {
        shorthand: shorthand.to_string(),
        cost,
        health,
        upgrade_cost,
        upgraded_health,
    }
}

impl Default for UnitCatalog {
    /// Stock contest values.
    fn default() -> Self {
        let mobile = |amount| Cost {
            structure: 0,
            mobile: amount,
        };
        UnitCatalog {
            specs: [
                spec("FF", Cost::structure(1), 60.0, Cost::structure(2), 120.0),
                spec("EF", Cost::structure(9), 30.0, Cost::structure(9), 30.0),
                spec("DF", Cost::structure(2), 75.0, Cost::structure(4), 75.0),
                spec("PI", mobile(1), 15.0, Cost::default(), 15.0),
                spec("EI", mobile(3), 5.0, Cost::default(), 5.0),
                spec("SI", mobile(1), 40.0, Cost::default(), 40.0),
            ],
            remove_shorthand: "RM".to_string(),
            upgrade_shorthand: "UP".to_string(),
        }
    }
}

impl UnitCatalog {
    /// Builds a catalog from the host's match config JSON.
    ///
    /// Entries 0..=5 are the unit kinds in `UnitKind` order; entries 6 and
    /// 7, when present, carry the remove and upgrade command shorthands.
    pub fn from_match_config(json: &str) -> Result<Self, ConfigError> {
        let raw: RawMatchConfig = serde_json::from_str(json)?;
        let info = raw.unit_information;
        if info.len() < ALL_UNIT_KINDS.len() {
            return Err(ConfigError::MissingUnits(info.len()));
        }

        let mut catalog = UnitCatalog::default();
        for (idx, entry) in info.iter().take(ALL_UNIT_KINDS.len()).enumerate() {
            let shorthand = entry
                .shorthand
                .clone()
                .ok_or(ConfigError::MissingShorthand(idx))?;
            let health = entry.start_health.unwrap_or(0.0);
            let upgrade = entry.upgrade.as_ref();
            catalog.specs[idx] = UnitSpec {
                shorthand,
                cost: Cost {
                    structure: price(entry.cost1),
                    mobile: price(entry.cost2),
                },
                health,
                upgrade_cost: Cost {
                    structure: price(upgrade.and_then(|u| u.cost1)),
                    mobile: price(upgrade.and_then(|u| u.cost2)),
                },
                upgraded_health: upgrade.and_then(|u| u.start_health).unwrap_or(health),
            };
        }
        if let Some(sh) = info.get(6).and_then(|e| e.shorthand.clone()) {
            catalog.remove_shorthand = sh;
        }
        if let Some(sh) = info.get(7).and_then(|e| e.shorthand.clone()) {
            catalog.upgrade_shorthand = sh;
        }
        Ok(catalog)
    }

    pub fn spec(&self, kind: UnitKind) -> &UnitSpec {
        &self.specs[kind as usize]
    }

    /// Price of a new unit.
    pub fn cost(&self, kind: UnitKind) -> Cost {
        self.spec(kind).cost
    }

    /// Price of upgrading a placed unit.
    pub fn upgrade_cost(&self, kind: UnitKind) -> Cost {
        self.spec(kind).upgrade_cost
    }

    /// Health of a new unit.
    pub fn health(&self, kind: UnitKind) -> f32 {
        self.spec(kind).health
    }

    /// Health after an upgrade.
    pub fn upgraded_health(&self, kind: UnitKind) -> f32 {
        self.spec(kind).upgraded_health
    }

    /// Identifier the host uses on the wire.
    pub fn shorthand(&self, kind: UnitKind) -> &str {
        &self.spec(kind).shorthand
    }

    /// Reverse lookup from a wire shorthand.
    pub fn kind_of(&self, shorthand: &str) -> Option<UnitKind> {
        ALL_UNIT_KINDS
            .iter()
            .copied()
            .find(|k| self.shorthand(*k) == shorthand)
    }
}

/// Tunable thresholds for the turn loop.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Tickets handed out per allocation lottery.
    pub ticket_resolution: u32,
    /// Mobile balance at which the whole mobile budget goes into one rush.
    pub rush_threshold: u32,
    /// Most structure points the post-repair economic pass may spend.
    pub factory_spend_cap: u32,
    /// Structure points held back on saving turns.
    pub savings_floor: u32,
    /// Saving turns are those divisible by this period.
    pub savings_period: u32,
    /// Interceptors kept at each home anchor before manning forward posts.
    pub home_patrol: u32,
    /// Turns played from the opening script.
    pub opening_turns: u32,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig {
            ticket_resolution: 200,
            rush_threshold: 30,
            factory_spend_cap: 18,
            savings_floor: 4,
            savings_period: 2,
            home_patrol: 2,
            opening_turns: 3,
        }
    }
}

impl StrategyConfig {
    /// Loads overrides from a JSON file. Missing fields keep their defaults.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}
