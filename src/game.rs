//! Core game engine: a hidden target grid, a per-coordinate fire log and the
//! win/loss state machine, plus fixed-width text rendering of the board.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::common::{FiredEntry, GameError, GameStatus, ShotOutcome, ShotReport};
use crate::config::builtin_catalog;
use crate::mission::{Mission, MissionMetrics};

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Text label for a 1-based interior coordinate, e.g. `(4, 2)` -> `"B4"`.
/// Inverse of [`GameEngine::parse_coordinates`] for in-range coordinates.
pub fn coord_label(row: usize, col: usize) -> String {
    let letter = (b'A' + (col - 1) as u8) as char;
    format!("{}{}", letter, row)
}

/// Read-only snapshot of a session, safe to hand to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub mission_name: String,
    pub missiles_left: u32,
    pub targets_left: u32,
    pub total_targets: u32,
    pub armored_targets: u32,
    pub shots_fired: usize,
    pub game_over: bool,
    pub has_won: bool,
}

/// Single-session game state machine.
///
/// The engine owns the mission catalog, the live health grid and the fire
/// log. It performs no I/O; every operation runs to completion and returns a
/// value, and all presentation belongs to the caller.
#[derive(Debug)]
pub struct GameEngine {
    catalog: Vec<Mission>,
    mission_index: usize,
    grid: Vec<Vec<u8>>,
    metrics: MissionMetrics,
    missiles_left: u32,
    targets_left: u32,
    fired: BTreeMap<(usize, usize), FiredEntry>,
    game_over: bool,
    has_won: bool,
}

impl GameEngine {
    /// Create an engine over the built-in catalog with a random mission.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        // the built-in catalog is a non-empty const table
        let mut engine = Self::empty(builtin_catalog());
        engine.roll_mission(rng);
        engine
    }

    /// Create an engine over a caller-supplied catalog. Every mission is
    /// validated up front so a session never starts on an unplayable grid.
    pub fn with_catalog<R: Rng>(catalog: Vec<Mission>, rng: &mut R) -> Result<Self, GameError> {
        if catalog.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        for mission in &catalog {
            mission.validate()?;
        }
        let mut engine = Self::empty(catalog);
        engine.roll_mission(rng);
        Ok(engine)
    }

    fn empty(catalog: Vec<Mission>) -> Self {
        GameEngine {
            catalog,
            mission_index: 0,
            grid: Vec::new(),
            metrics: MissionMetrics {
                interior_width: 0,
                interior_height: 0,
                total_targets: 0,
                armored_targets: 0,
            },
            missiles_left: 0,
            targets_left: 0,
            fired: BTreeMap::new(),
            game_over: false,
            has_won: false,
        }
    }

    /// Select a mission uniformly at random and load a fresh session for it.
    fn roll_mission<R: Rng>(&mut self, rng: &mut R) {
        self.mission_index = rng.random_range(0..self.catalog.len());
        self.load_mission();
    }

    /// Rebuild all live state from the current mission's pristine template.
    fn load_mission(&mut self) {
        let mission = &self.catalog[self.mission_index];
        self.grid = mission.grid().to_vec();
        self.metrics = mission.metrics();
        self.missiles_left = mission.missile_allowance();
        self.targets_left = self.metrics.total_targets;
        self.fired.clear();
        self.game_over = false;
        self.has_won = false;
        log::debug!(
            "mission \"{}\" loaded: {} targets ({} armored), {} missiles",
            mission.name(),
            self.metrics.total_targets,
            self.metrics.armored_targets,
            self.missiles_left
        );
    }

    /// Reset the session. `new_mission` re-rolls a random mission from the
    /// catalog; otherwise the same mission restarts from its pristine grid.
    pub fn reset<R: Rng>(&mut self, new_mission: bool, rng: &mut R) {
        if new_mission {
            self.roll_mission(rng);
        } else {
            self.load_mission();
        }
    }

    /// The mission this session is playing.
    pub fn mission(&self) -> &Mission {
        &self.catalog[self.mission_index]
    }

    pub fn missiles_left(&self) -> u32 {
        self.missiles_left
    }

    pub fn targets_left(&self) -> u32 {
        self.targets_left
    }

    pub fn total_targets(&self) -> u32 {
        self.metrics.total_targets
    }

    pub fn armored_targets(&self) -> u32 {
        self.metrics.armored_targets
    }

    pub fn interior_width(&self) -> usize {
        self.metrics.interior_width
    }

    pub fn interior_height(&self) -> usize {
        self.metrics.interior_height
    }

    /// Number of distinct coordinates in the fire log.
    pub fn shots_fired(&self) -> usize {
        self.fired.len()
    }

    /// Copy of the fire log entry at a coordinate, if any.
    pub fn fired_at(&self, row: usize, col: usize) -> Option<FiredEntry> {
        self.fired.get(&(row, col)).copied()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub fn status(&self) -> GameStatus {
        if !self.game_over {
            GameStatus::InProgress
        } else if self.has_won {
            GameStatus::Won
        } else {
            GameStatus::Lost
        }
    }

    /// Read-only snapshot of the session counters and flags.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            mission_name: String::from(self.mission().name()),
            missiles_left: self.missiles_left,
            targets_left: self.targets_left,
            total_targets: self.metrics.total_targets,
            armored_targets: self.metrics.armored_targets,
            shots_fired: self.fired.len(),
            game_over: self.game_over,
            has_won: self.has_won,
        }
    }

    /// Remaining health of the 1-based interior cell. Cells absent from a
    /// short grid row read as open water.
    fn cell(&self, row: usize, col: usize) -> u8 {
        self.grid
            .get(row - 1)
            .and_then(|r| r.get(col - 1))
            .copied()
            .unwrap_or(0)
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        (1..=self.metrics.interior_height).contains(&row)
            && (1..=self.metrics.interior_width).contains(&col)
    }

    /// A coordinate is a duplicate once its log entry is terminal: a miss or
    /// a destroyed target. A partially damaged armored cell stays targetable.
    fn is_duplicate(&self, row: usize, col: usize) -> bool {
        match self.fired.get(&(row, col)) {
            Some(entry) => entry.outcome != ShotOutcome::Armored,
            None => false,
        }
    }

    /// Parse free-text coordinates like `B4` or `c12` into a 1-based
    /// `(row, column)` pair, or `None` when the text is malformed or out of
    /// range. Only single-letter columns exist; the addressing scheme tops
    /// out at `Z`.
    pub fn parse_coordinates(&self, input: &str) -> Option<(usize, usize)> {
        let input = input.trim();
        let digits_at = input.find(|c: char| c.is_ascii_digit())?;
        let (letters, digits) = input.split_at(digits_at);
        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        if letters.len() != 1 {
            return None;
        }
        let letter = letters.chars().next()?.to_ascii_uppercase();
        let col = (letter as u8 - b'A') as usize + 1;
        let row: usize = digits.parse().ok()?;
        if col > self.metrics.interior_width {
            return None;
        }
        if row < 1 || row > self.metrics.interior_height {
            return None;
        }
        Some((row, col))
    }

    /// Apply one shot at a parsed coordinate.
    ///
    /// Coordinates already resolved as a miss or a destroyed target come
    /// back as [`ShotOutcome::Duplicate`] without consuming a missile or
    /// touching any state. Every other shot costs exactly one missile. After
    /// a hit the win condition is checked before missile exhaustion, so
    /// destroying the last target with the last missile still wins.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotReport, GameError> {
        if self.game_over {
            return Err(GameError::MissionOver);
        }
        if !self.in_bounds(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        if self.is_duplicate(row, col) {
            return Ok(ShotReport {
                outcome: ShotOutcome::Duplicate,
                message: String::from(
                    "Let's not waste military resources. Try firing somewhere else.",
                ),
            });
        }

        let health = self.cell(row, col);
        self.missiles_left -= 1;

        let report = if health > 0 {
            let report = self.apply_hit(row, col, health);
            if self.targets_left == 0 {
                self.game_over = true;
                self.has_won = true;
                log::debug!(
                    "all targets destroyed with {} missiles to spare",
                    self.missiles_left
                );
            } else if self.missiles_left == 0 {
                self.game_over = true;
                log::debug!("out of missiles with {} targets standing", self.targets_left);
            }
            report
        } else {
            self.fired.insert(
                (row, col),
                FiredEntry {
                    outcome: ShotOutcome::Miss,
                    before: 0,
                    after: 0,
                },
            );
            if self.missiles_left == 0 {
                self.game_over = true;
                log::debug!("out of missiles with {} targets standing", self.targets_left);
            }
            ShotReport {
                outcome: ShotOutcome::Miss,
                message: String::from("\nMISS!!!"),
            }
        };
        Ok(report)
    }

    /// Apply a shot to a cell with positive health and log it. The hit type
    /// is decided on pre-decrement health, so health reaching zero always
    /// finalizes as a destroyed target, never as `armored`.
    fn apply_hit(&mut self, row: usize, col: usize, health: u8) -> ShotReport {
        let outcome;
        let message;
        if health == 1 {
            outcome = ShotOutcome::Hit;
            message = String::from("\nHIT!!!\n");
            self.targets_left -= 1;
        } else {
            outcome = ShotOutcome::Armored;
            let opening = if self.fired.contains_key(&(row, col)) {
                "\nANOTHER HIT!\n"
            } else {
                "\nARMORED TARGET HIT!\n"
            };
            let needed = health - 1;
            message = format!(
                "{}You need {} more shot{} to sink this target\n",
                opening,
                needed,
                if needed == 1 { "" } else { "s" }
            );
        }
        self.grid[row - 1][col - 1] = health - 1;
        self.fired.insert(
            (row, col),
            FiredEntry {
                outcome,
                before: health,
                after: health - 1,
            },
        );
        ShotReport { outcome, message }
    }

    /// Render the board as a fixed-width text block: a header row of column
    /// letters, numeric row labels, 3-character interior cells and a blank
    /// trailing row and column. With `reveal_all`, targets that have not
    /// been destroyed are marked, which is how the end-of-game reveal works.
    ///
    /// Rendering is a pure projection of the fire log and the live grid.
    pub fn render_board(&self, reveal_all: bool) -> String {
        let width = self.metrics.interior_width + 2;
        let height = self.metrics.interior_height + 2;
        let mut board = String::new();
        for row in 0..height {
            for col in 0..width {
                if col == width - 1 {
                    board.push_str("  ");
                } else if row == height - 1 {
                    board.push_str("   ");
                } else if row == 0 {
                    if col == 0 {
                        board.push_str("   ");
                    } else {
                        board.push(' ');
                        board.push(LETTERS[col - 1] as char);
                        board.push(' ');
                    }
                } else if col == 0 {
                    board.push_str(&format!("{:<3}", row));
                } else {
                    board.push_str(self.cell_marker(row, col, reveal_all));
                }
            }
            board.push('\n');
        }
        board
    }

    fn cell_marker(&self, row: usize, col: usize, reveal_all: bool) -> &'static str {
        match self.fired.get(&(row, col)) {
            None => {
                if reveal_all && self.cell(row, col) > 0 {
                    " - "
                } else {
                    "   "
                }
            }
            Some(entry) => match entry.outcome {
                ShotOutcome::Hit => " O ",
                // damaged but still standing
                ShotOutcome::Armored => " - ",
                ShotOutcome::Miss | ShotOutcome::Duplicate => " X ",
            },
        }
    }

    /// Session statistics as display text. Purely derived, no mutation.
    pub fn stats(&self) -> String {
        let targets_hit = self.metrics.total_targets - self.targets_left;
        let missed_shots = self.fired.len() as u32 - targets_hit;
        format!(
            "\nTargets Hit:     {}\nTargets Missed:  {}\nTargets Left:    {}\nArmored Targets: {}\n",
            targets_hit, missed_shots, self.targets_left, self.metrics.armored_targets
        )
    }

    /// The fixed mission briefing with live target and missile counts.
    pub fn intro_message(&self) -> String {
        let rule = "*************************************************************";
        format!(
            "{rule}\n{title:^61}\n{rule}\n\
             Congratulations! Central Command has selected YOU to man our\n\
             new, state of the art missile launching system.\n\n\
             Our sources tell us that there are {targets} enemy targets\n\
             approaching. We have {missiles} missiles left in our inventory.\n\n\
             Your job, should you wish to accept it, is to sink ALL\n\
             enemy targets before we run out of missiles.\n\n\
             Will you accept this mission? (yes/no)",
            rule = rule,
            title = "STRIKE COMMAND",
            targets = self.targets_left,
            missiles = self.missiles_left,
        )
    }
}
