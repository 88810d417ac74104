#![cfg(feature = "std")]

//! Interactive terminal front end. Owns everything the engine does not:
//! prompts, color, the mission acceptance gate and the replay cycle.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::{GameEngine, ShotOutcome, ShotReport};

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

enum Replay {
    SameMission,
    NewMission,
    Quit,
}

fn prompt(text: &str) -> anyhow::Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        anyhow::bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}

fn colorize(report: &ShotReport) -> String {
    let color = match report.outcome {
        ShotOutcome::Hit => GREEN,
        ShotOutcome::Armored => YELLOW,
        ShotOutcome::Miss => RED,
        ShotOutcome::Duplicate => return report.message.clone(),
    };
    format!("{}{}{}", color, report.message, RESET)
}

fn print_banner(text: &str) {
    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║{:^58}║", text);
    println!("╚══════════════════════════════════════════════════════════╝");
}

/// Mission acceptance gate. Loops until the player answers yes or no.
fn confirm_mission() -> anyhow::Result<bool> {
    loop {
        let answer = prompt("> ")?.to_lowercase();
        match answer.as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => println!("Answer yes or no."),
        }
    }
}

fn replay_choice() -> anyhow::Result<Replay> {
    loop {
        let answer = prompt("\nPlay again? (same/new/quit): ")?.to_lowercase();
        match answer.as_str() {
            "same" | "s" => return Ok(Replay::SameMission),
            "new" | "n" => return Ok(Replay::NewMission),
            "quit" | "q" => return Ok(Replay::Quit),
            _ => println!("Answer same, new or quit."),
        }
    }
}

/// Fire loop for one mission: read a line, parse it, apply the shot and show
/// the result, until the engine reports the game is over.
fn play_mission(engine: &mut GameEngine) -> anyhow::Result<()> {
    while !engine.game_over() {
        let line = prompt("Enter target coordinates (e.g. B4): ")?;
        let Some((row, col)) = engine.parse_coordinates(&line) else {
            println!("Invalid coordinates. Use a letter followed by a number, like A1.");
            continue;
        };
        let report = engine.fire(row, col).map_err(|e| anyhow::anyhow!(e))?;
        println!("{}", colorize(&report));
        if report.outcome == ShotOutcome::Duplicate {
            continue;
        }
        if !engine.game_over() {
            println!("{}", engine.render_board(false));
            println!("Missiles remaining: {}\n", engine.missiles_left());
        }
    }
    Ok(())
}

/// Run the full interactive session cycle until the player quits: briefing,
/// acceptance gate, fire loop, end-of-game reveal and the replay prompt.
pub fn run_session(engine: &mut GameEngine, rng: &mut SmallRng) -> anyhow::Result<()> {
    loop {
        println!("{}", engine.intro_message());
        if !confirm_mission()? {
            println!("\nMission declined. Dismissed!");
            return Ok(());
        }
        println!("{}", engine.render_board(false));
        play_mission(engine)?;

        println!("{}", engine.render_board(true));
        println!("{}", engine.stats());
        if engine.has_won() {
            print_banner("MISSION ACCOMPLISHED");
            println!("{}All enemy targets destroyed!{}", GREEN, RESET);
        } else {
            print_banner("MISSION FAILED");
            println!("{}Out of missiles. The enemy got through.{}", RED, RESET);
        }

        match replay_choice()? {
            Replay::SameMission => engine.reset(false, rng),
            Replay::NewMission => engine.reset(true, rng),
            Replay::Quit => return Ok(()),
        }
    }
}
