use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;
use strike::{GameEngine, ShotOutcome};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new(&mut rng);
    let mission_name = engine.mission().name().to_string();
    let allowance = engine.missiles_left();

    let mut shots = 0usize;
    while !engine.game_over() {
        let row = rng.random_range(1..=engine.interior_height());
        let col = rng.random_range(1..=engine.interior_width());
        let report = engine.fire(row, col).map_err(|e| anyhow::anyhow!(e))?;
        if report.outcome != ShotOutcome::Duplicate {
            shots += 1;
        }
    }

    let snapshot = engine.snapshot();
    let outcome = if snapshot.has_won { "won" } else { "lost" };
    let result = json!({
        "mission": mission_name,
        "allowance": allowance,
        "shots": shots,
        "outcome": outcome,
        "missiles_left": snapshot.missiles_left,
        "targets_left": snapshot.targets_left,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
