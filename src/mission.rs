//! Mission templates and the board metrics derived from them.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::GameError;
use crate::config::MAX_COLUMNS;

/// Compile-time mission template backing the built-in catalog.
#[derive(Debug, Clone, Copy)]
pub struct MissionDef {
    name: &'static str,
    description: &'static str,
    grid: &'static [&'static [u8]],
    missile_allowance: u32,
}

impl MissionDef {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        grid: &'static [&'static [u8]],
        missile_allowance: u32,
    ) -> Self {
        Self {
            name,
            description,
            grid,
            missile_allowance,
        }
    }
}

/// An immutable mission template: a target grid plus a missile allowance.
///
/// Grids may be jagged; the playable interior is as wide as the longest row
/// and cells absent from shorter rows read as open water.
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    name: String,
    #[cfg_attr(feature = "std", serde(default))]
    description: String,
    grid: Vec<Vec<u8>>,
    missile_allowance: u32,
}

/// Board metrics computed by one scan over a mission grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionMetrics {
    /// Length of the longest grid row.
    pub interior_width: usize,
    /// Number of grid rows.
    pub interior_height: usize,
    /// Cells with positive initial health.
    pub total_targets: u32,
    /// Cells with initial health above one.
    pub armored_targets: u32,
}

impl Mission {
    pub fn new(name: &str, description: &str, grid: Vec<Vec<u8>>, missile_allowance: u32) -> Self {
        Self {
            name: String::from(name),
            description: String::from(description),
            grid,
            missile_allowance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn grid(&self) -> &[Vec<u8>] {
        &self.grid
    }

    pub fn missile_allowance(&self) -> u32 {
        self.missile_allowance
    }

    /// Initial health of the 1-based interior cell. Absent cells are water.
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.grid
            .get(row - 1)
            .and_then(|r| r.get(col - 1))
            .copied()
            .unwrap_or(0)
    }

    /// Derive the board metrics for this mission.
    pub fn metrics(&self) -> MissionMetrics {
        let mut interior_width = 0;
        let mut total_targets = 0;
        let mut armored_targets = 0;
        for row in &self.grid {
            if row.len() > interior_width {
                interior_width = row.len();
            }
            for &cell in row {
                if cell > 0 {
                    total_targets += 1;
                    if cell > 1 {
                        armored_targets += 1;
                    }
                }
            }
        }
        MissionMetrics {
            interior_width,
            interior_height: self.grid.len(),
            total_targets,
            armored_targets,
        }
    }

    /// Check that a mission is playable before building a session over it.
    pub fn validate(&self) -> Result<(), GameError> {
        let metrics = self.metrics();
        if metrics.total_targets == 0 {
            return Err(GameError::NoTargets);
        }
        if self.missile_allowance == 0 {
            return Err(GameError::NoMissiles);
        }
        if metrics.interior_width > MAX_COLUMNS {
            return Err(GameError::GridTooWide {
                width: metrics.interior_width,
            });
        }
        Ok(())
    }

    /// Load and validate a mission catalog from a JSON file. The schema is a
    /// list of objects with `name`, `description`, `grid` and
    /// `missile_allowance`; unknown fields are ignored.
    #[cfg(feature = "std")]
    pub fn load_catalog(path: &std::path::Path) -> anyhow::Result<Vec<Mission>> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        let catalog: Vec<Mission> = serde_json::from_str(&text)
            .map_err(|e| anyhow::anyhow!("failed to parse {}: {}", path.display(), e))?;
        if catalog.is_empty() {
            return Err(anyhow::anyhow!(GameError::EmptyCatalog));
        }
        for mission in &catalog {
            mission
                .validate()
                .map_err(|e| anyhow::anyhow!("mission \"{}\": {}", mission.name, e))?;
        }
        Ok(catalog)
    }
}

impl From<&MissionDef> for Mission {
    fn from(def: &MissionDef) -> Self {
        Mission {
            name: String::from(def.name),
            description: String::from(def.description),
            grid: def.grid.iter().map(|row| row.to_vec()).collect(),
            missile_allowance: def.missile_allowance,
        }
    }
}
