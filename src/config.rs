use alloc::vec::Vec;

use crate::mission::{Mission, MissionDef};

/// Widest grid the `<letter><number>` addressing scheme can reach.
pub const MAX_COLUMNS: usize = 26;

pub const NUM_MISSIONS: usize = 5;

/// Built-in mission catalog. Grid cells hold target health: 0 is open water,
/// 1 a single-hit target, anything greater an armored target.
pub const MISSIONS: [MissionDef; NUM_MISSIONS] = [
    MissionDef::new(
        "Coastal Patrol",
        "A handful of scout boats probing the shoreline. Easy pickings.",
        &[
            &[0, 0, 0, 0, 0],
            &[0, 1, 0, 0, 0],
            &[0, 0, 0, 1, 0],
            &[1, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0],
        ],
        12,
    ),
    MissionDef::new(
        "Convoy Ambush",
        "A supply convoy with two escort gunboats in heavy fog.",
        &[
            &[0, 0, 1, 0, 0, 0, 0],
            &[0, 0, 0, 0, 2, 0, 0],
            &[1, 0, 0, 0, 0, 0, 1],
            &[0, 0, 0, 1, 0, 0, 0],
            &[0, 2, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 1, 0],
        ],
        16,
    ),
    MissionDef::new(
        "Fortress Reef",
        "A fortified atoll. The command ship at its center takes three hits.",
        &[
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 2, 0, 0, 0, 1, 0],
            &[0, 0, 0, 3, 0, 0, 0],
            &[1, 0, 0, 0, 0, 0, 1],
            &[0, 0, 2, 0, 2, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 1, 0, 0, 0, 0, 0],
        ],
        20,
    ),
    MissionDef::new(
        "Open Water Sweep",
        "Five raiders scattered across open sea. Ammunition is tight.",
        &[
            &[0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 1, 0, 0, 0],
            &[0, 1, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 1, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0],
        ],
        14,
    ),
    MissionDef::new(
        "Harbor Strike",
        "Ships moored along an uneven quay. Charts past the breakwater are blank.",
        &[
            &[0, 1, 0, 0],
            &[0, 0, 2, 0, 0, 1],
            &[1, 0, 0],
            &[0, 0, 0, 1, 0],
            &[0, 2, 0, 0, 0, 0],
        ],
        15,
    ),
];

/// Owned copy of the built-in catalog.
pub fn builtin_catalog() -> Vec<Mission> {
    MISSIONS.iter().map(Mission::from).collect()
}
