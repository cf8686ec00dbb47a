//! Generation parameters supplied by the game shell.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::ItemCategory;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemRule {
    pub count: usize,
    pub min_distance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRules {
    pub maps: ItemRule,
    pub food: ItemRule,
    pub light: ItemRule,
}

impl ItemRules {
    pub fn none() -> Self {
        let empty = ItemRule { count: 0, min_distance: 0.0 };
        Self { maps: empty, food: empty, light: empty }
    }

    pub fn rule(&self, category: ItemCategory) -> ItemRule {
        match category {
            ItemCategory::Map => self.maps,
            ItemCategory::Food => self.food,
            ItemCategory::Light => self.light,
        }
    }
}

impl Default for ItemRules {
    fn default() -> Self {
        Self {
            maps: ItemRule { count: 2, min_distance: 12.0 },
            food: ItemRule { count: 6, min_distance: 6.0 },
            light: ItemRule { count: 4, min_distance: 8.0 },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveConfig {
    pub rows: usize,
    pub cols: usize,
    pub border_margin: usize,
    pub room_density: f64,
    pub min_room_size: usize,
    pub max_room_size: usize,
    pub items: ItemRules,
    pub gate_chance: f64,
    /// Fraction of gates a rearrangement opens before path repair.
    pub open_ratio: f64,
    /// Per-gate flip probability for rollback toggles.
    pub toggle_prob: f64,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            rows: 41,
            cols: 61,
            border_margin: 1,
            room_density: 0.02,
            min_room_size: 3,
            max_room_size: 7,
            items: ItemRules::default(),
            gate_chance: 0.15,
            open_ratio: 0.5,
            toggle_prob: 0.3,
        }
    }
}

impl CaveConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let too_small = ConfigError::InteriorTooSmall {
            rows: self.rows,
            cols: self.cols,
            margin: self.border_margin,
        };
        let Some(border) = self.border_margin.checked_mul(2) else {
            return Err(too_small);
        };
        let fits =
            self.rows > border && self.cols > border && self.rows.checked_mul(self.cols).is_some();
        if !fits {
            return Err(too_small);
        }
        if self.min_room_size < 2 || self.min_room_size > self.max_room_size {
            return Err(ConfigError::RoomSizeRange {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        for (field, value) in [
            ("room_density", self.room_density),
            ("gate_chance", self.gate_chance),
            ("open_ratio", self.open_ratio),
            ("toggle_prob", self.toggle_prob),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::UnitInterval { field, value });
            }
        }
        for (field, rule) in [
            ("items.maps.min_distance", self.items.maps),
            ("items.food.min_distance", self.items.food),
            ("items.light.min_distance", self.items.light),
        ] {
            if !rule.min_distance.is_finite() || rule.min_distance < 0.0 {
                return Err(ConfigError::NegativeDistance { field, value: rule.min_distance });
            }
        }
        Ok(())
    }

    /// Number of independent room placement attempts for this grid.
    pub fn room_attempts(&self) -> usize {
        (self.rows.saturating_mul(self.cols) as f64 * self.room_density).floor() as usize
    }
}
