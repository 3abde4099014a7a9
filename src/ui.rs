//! The interactive menu loop: the thin presentation layer over
//! [`GameSession`]. All printing and prompting happens here; the core only
//! ever hands back view structs, outcome enums, and errors.

use anyhow::Result;
use log::debug;
use std::io::{self, BufRead, Write};

use crate::game::{
    BattleSummary, ChallengeOutcome, Direction, GameSession, Gesture, LocationView, MatchOutcome,
    PeekTarget, PickOutcome, PymonReport, RoundResult, UseOutcome,
};

const MAIN_MENU: &str = "\nPlease issue a command to your Pymon:\n\
    1) Inspect Pymon\n\
    2) Inspect current location\n\
    3) Move\n\
    4) Pick an item\n\
    5) View inventory\n\
    6) Challenge a creature\n\
    7) Generate stats\n\
    8) Exit the program";

const INSPECT_MENU: &str = "\n1) Inspect current Pymon\n\
    2) List and select a benched Pymon to use\n\
    3) Return to main menu";

/// Run the menu loop until the player exits or the session ends.
pub fn run(session: &mut GameSession) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    println!("Welcome to Pymon World\n");
    println!("It's just you and your loyal Pymon roaming around to find more Pymons to capture and adopt.\n");
    println!("You started at {}", session.current_location().name);

    loop {
        if session.is_over() {
            println!("You don't have any Pymon left to help you in this game. GAME OVER!");
            return Ok(());
        }
        println!("{MAIN_MENU}");
        let choice = prompt(&mut input, "Enter your choice: ")?;
        debug!("main menu choice: {choice:?}");
        match choice.trim() {
            "1" => inspect_menu(&mut input, session)?,
            "2" => print_location(&session.current_location()),
            "3" => move_pymon(&mut input, session)?,
            "4" => pick_item(&mut input, session)?,
            "5" => inventory_menu(&mut input, session)?,
            "6" => challenge(&mut input, session)?,
            "7" => print!("{}", format_stats(&session.battle_report())),
            "8" => {
                println!("Exiting the game.");
                return Ok(());
            }
            _ => println!("Error: Please enter between 1 - 8"),
        }
    }
}

fn prompt(input: &mut impl BufRead, text: &str) -> Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn inspect_menu(input: &mut impl BufRead, session: &mut GameSession) -> Result<()> {
    loop {
        println!("{INSPECT_MENU}");
        let choice = prompt(input, "Enter your choice: ")?;
        match choice.as_str() {
            "1" => {
                let pymon = session.active_pymon();
                println!("\nPymon Name: {}", pymon.nickname);
                println!("Description: {}", pymon.description);
                println!("Energy: {}/3", pymon.energy);
                if pymon.immunity {
                    println!("Battle immunity is armed.");
                }
            }
            "2" => select_benched(input, session)?,
            "3" => return Ok(()),
            _ => println!("Error: Please enter a number between 1 and 3"),
        }
    }
}

fn select_benched(input: &mut impl BufRead, session: &mut GameSession) -> Result<()> {
    let bench = session.bench();
    if bench.is_empty() {
        println!("You don't have any other Pymon.");
        return Ok(());
    }
    println!("\nAvailable Pymons:");
    for (index, pymon) in bench.iter().enumerate() {
        println!("{}) {} - {}", index + 1, pymon.nickname, pymon.description);
    }
    let choice = prompt(input, "Enter the number of the Pymon to switch to, or 0 to cancel: ")?;
    let Ok(number) = choice.parse::<usize>() else {
        println!("Error: Invalid selection.");
        return Ok(());
    };
    if number == 0 {
        return Ok(());
    }
    match session.switch_pet(number - 1) {
        Ok(active) => println!("Your primary Pymon is now: {}", active.nickname),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn print_location(view: &LocationView) {
    println!("\nCurrent Location: {}", view.name);
    println!("Description: {}", view.description);
    println!("Creatures here:");
    for creature in &view.creatures {
        println!(" * {creature}");
    }
    println!("Items available here:");
    for item in &view.items {
        println!(" * {item}");
    }
}

fn move_pymon(input: &mut impl BufRead, session: &mut GameSession) -> Result<()> {
    let raw = prompt(input, "Enter a direction to move (west, north, east, south): ")?;
    let direction: Direction = match raw.parse() {
        Ok(direction) => direction,
        Err(err) => {
            println!("Error: {err}");
            return Ok(());
        }
    };
    match session.move_pymon(direction) {
        Ok(report) => {
            println!("You moved to: {}", report.arrived);
            if report.energy_spent {
                println!(
                    "Your Pymon's energy decreased by 1. Current energy: {}",
                    report.energy
                );
            }
            if let Some(refuge) = report.forced_relocation {
                println!("Exhausted, your Pymon escaped to {refuge}!");
            } else if report.energy_spent && report.energy == 0 {
                println!("Your Pymon is exhausted and has nowhere left to run.");
            }
        }
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn pick_item(input: &mut impl BufRead, session: &mut GameSession) -> Result<()> {
    let name = prompt(input, "Enter the item to pick: ")?;
    match session.pick(&name) {
        Ok(PickOutcome::Taken { name }) => println!("{name} has been added to your inventory."),
        Ok(PickOutcome::NotPickable { name }) => println!("{name} cannot be picked up."),
        Ok(PickOutcome::NotHere { name }) => println!("{name} is not available here."),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn inventory_menu(input: &mut impl BufRead, session: &mut GameSession) -> Result<()> {
    let items = session.inventory();
    if items.is_empty() {
        println!("Unlucky. Your inventory is empty.");
        return Ok(());
    }
    println!("\nInventory items:");
    for (index, (name, description)) in items.iter().enumerate() {
        println!("{}. {} - {}", index + 1, name, description);
    }
    let answer = prompt(input, "\nWould you like to use an item? (yes/no): ")?;
    if !answer.eq_ignore_ascii_case("yes") {
        return Ok(());
    }
    let name = prompt(input, "Which item would you like to use? ")?;
    match session.use_item(&name) {
        Ok(UseOutcome::EnergyRestored { energy }) => {
            println!("Your Pymon ate the apple. Energy is now {energy}/3.");
        }
        Ok(UseOutcome::EnergyAlreadyFull) => println!("Energy is already at maximum."),
        Ok(UseOutcome::ImmunityArmed) => {
            println!("Drank a magic potion. Temporary immunity armed for the next battle.");
        }
        Ok(UseOutcome::InspectionReady) => use_binocular(input, session)?,
        Ok(UseOutcome::Inert { name }) => println!("Nothing happens with the {name}."),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn use_binocular(input: &mut impl BufRead, session: &mut GameSession) -> Result<()> {
    let raw = prompt(
        input,
        "Choose a direction to look using your binocular (current, west, north, east, south): ",
    )?;
    let target = if raw.eq_ignore_ascii_case("current") {
        PeekTarget::Current
    } else {
        match raw.parse::<Direction>() {
            Ok(direction) => PeekTarget::Toward(direction),
            Err(err) => {
                println!("Error: {err}");
                return Ok(());
            }
        }
    };
    match session.peek(target) {
        Ok(view) => {
            println!("Through the binocular you see {}: {}", view.name, view.description);
            if view.creatures.is_empty() && view.items.is_empty() {
                println!("No creatures or items in this location.");
            } else {
                for creature in &view.creatures {
                    println!(" - Creature: {creature}");
                }
                for item in &view.items {
                    println!(" - Item: {item}");
                }
            }
            println!("The binocular has been removed from your inventory after use.");
        }
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn challenge(input: &mut impl BufRead, session: &mut GameSession) -> Result<()> {
    let name = prompt(input, "Enter the creature to challenge: ")?;
    match session.challenge(&name) {
        Ok(ChallengeOutcome::Flavor { line }) => println!("{line}"),
        Ok(ChallengeOutcome::Resolved(summary)) => print_summary(&summary),
        Ok(ChallengeOutcome::Underway { opponent }) => {
            println!("You started the challenge with {opponent}!");
            battle_loop(input, session)?;
        }
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn battle_loop(input: &mut impl BufRead, session: &mut GameSession) -> Result<()> {
    loop {
        let raw = prompt(input, "\nChoose rock, paper, or scissors: ")?;
        let gesture: Gesture = match raw.parse() {
            Ok(gesture) => gesture,
            Err(err) => {
                // Invalid input never consumes a round.
                println!("Error: {err}. Try again.");
                continue;
            }
        };
        let turn = match session.battle_round(gesture) {
            Ok(turn) => turn,
            Err(err) => {
                println!("Error: {err}");
                return Ok(());
            }
        };
        println!("Opponent chose {}.", turn.round.opponent);
        match turn.round.result {
            RoundResult::Won => println!("Your Pymon won this encounter!"),
            RoundResult::Draw => println!("Draw, no one wins this encounter."),
            RoundResult::Lost { spared: true } => {
                println!("Your Pymon lost this encounter, but immunity absorbed the blow.");
            }
            RoundResult::Lost { spared: false } => {
                println!(
                    "Your Pymon lost this encounter. Remaining energy: {}",
                    turn.round.energy
                );
            }
        }
        if let Some(summary) = turn.settled {
            print_summary(&summary);
            return Ok(());
        }
    }
}

fn print_summary(summary: &BattleSummary) {
    match &summary.end {
        MatchOutcome::Captured { nickname } => {
            println!("You won the battle against {nickname}!");
            println!("{nickname} has joined your bench.");
        }
        MatchOutcome::Defeated { successor } => {
            println!(
                "Lost the battle against {}. Your Pymon ran away into the wild.",
                summary.opponent
            );
            println!("{successor} is now your primary Pymon.");
        }
        MatchOutcome::GameOver => {
            println!(
                "Lost the battle against {}. Your Pymon ran away into the wild.",
                summary.opponent
            );
        }
    }
}

/// Render the battle ledger the way the stats menu prints it.
pub fn format_stats(reports: &[PymonReport]) -> String {
    if reports.is_empty() {
        return "No battles have been fought yet.\n".to_string();
    }
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!("\nPymon Nickname: \"{}\"\n", report.nickname));
        for (index, entry) in report.entries.iter().enumerate() {
            out.push_str(&format!(
                "Battle {}, {} Opponent: \"{}\", W: {} D: {} L: {}\n",
                index + 1,
                entry.timestamp.format("%d/%m/%Y %I:%M%p"),
                entry.opponent,
                entry.wins,
                entry.draws,
                entry.losses
            ));
        }
        out.push_str(&format!(
            "Total: W: {} D: {} L: {}\n",
            report.total_wins, report.total_draws, report.total_losses
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BattleRecord;
    use chrono::Utc;

    #[test]
    fn stats_formatting_numbers_battles_and_totals() {
        let reports = vec![PymonReport {
            nickname: "Kimimon".to_string(),
            entries: vec![
                BattleRecord {
                    timestamp: Utc::now(),
                    opponent: "Marimon".to_string(),
                    wins: 2,
                    draws: 0,
                    losses: 1,
                },
                BattleRecord {
                    timestamp: Utc::now(),
                    opponent: "Tobimon".to_string(),
                    wins: 0,
                    draws: 1,
                    losses: 2,
                },
            ],
            total_wins: 2,
            total_draws: 1,
            total_losses: 3,
        }];
        let text = format_stats(&reports);
        assert!(text.contains("Pymon Nickname: \"Kimimon\""));
        assert!(text.contains("Battle 1,"));
        assert!(text.contains("Battle 2,"));
        assert!(text.contains("Total: W: 2 D: 1 L: 3"));
    }
}
