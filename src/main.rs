//! Interactive terminal drill.
//!
//! Deals a random hole each round, rotates the hero's seat, prompts for a
//! fold/call/raise decision, and grades it against the embedded chart.

use colored::*;
use dialoguer::Select;
use rangedrill::cards::card::Card;
use rangedrill::cards::hole::Hole;
use rangedrill::session::Session;
use rangedrill::session::Verdict;
use rangedrill::strategy::action::Action;
use rangedrill::strategy::chart::Chart;
use rangedrill::strategy::chart::Range;
use rangedrill::strategy::position::Position;

fn main() {
    rangedrill::log();
    let chart = Chart::load().expect("embedded strategy chart must validate");
    let mut session = Session::new(chart);
    println!("{}", "6-MAX PREFLOP DRILL".bold());
    println!("one hand per seat, graded against the chart\n");
    'drill: loop {
        let (hole, position) = session.deal();
        println!();
        println!(
            "{}  {} - {}",
            position.to_string().bold().yellow(),
            position.label(),
            position.description().dimmed(),
        );
        let Some(action) = choose(hole) else { break 'drill };
        let verdict = session.submit(action).expect("hand is live");
        report(&verdict);
        println!("score: {}", session.stats());
        loop {
            match menu() {
                Menu::Next => continue 'drill,
                Menu::Range => show(session.chart().range(session.position()), session.position()),
                Menu::Reset => session.reset(),
                Menu::Quit => break 'drill,
            }
        }
    }
    println!("\nfinal score: {}", session.stats());
}

enum Menu {
    Next,
    Range,
    Reset,
    Quit,
}

/// Prompt for the hero's decision. None quits the drill.
fn choose(hole: Hole) -> Option<Action> {
    let choices = ["Fold", "Call", "Raise", "Quit"];
    let selection = Select::new()
        .with_prompt(format!("YOU HOLD {} {}", pretty(hole.first()), pretty(hole.second())))
        .report(false)
        .items(&choices)
        .default(0)
        .interact()
        .unwrap();
    Action::all().get(selection).copied()
}

fn menu() -> Menu {
    let choices = ["Next Hand", "Show Range", "Reset Stats", "Quit"];
    let selection = Select::new()
        .report(false)
        .items(&choices)
        .default(0)
        .interact()
        .unwrap();
    match selection {
        0 => Menu::Next,
        1 => Menu::Range,
        2 => Menu::Reset,
        _ => Menu::Quit,
    }
}

fn report(verdict: &Verdict) {
    match verdict.correct {
        true => println!("{}", "correct".green().bold()),
        false => println!("{}", "incorrect".red().bold()),
    }
    println!(
        "chart says {} at {}% | you chose {}",
        verdict.entry.action,
        verdict.entry.frequency,
        verdict.answer,
    );
    println!("{}", verdict.entry.rationale.dimmed());
}

/// Reference display: the explicit entries of one seat's range.
fn show(range: &Range, position: Position) {
    println!("\n{} range ({} explicit entries)", position, range.len());
    for (class, entry) in range.iter().rev() {
        println!("  {:>4}  {:<6} {:>3}%", class.to_string(), entry.action.label(), entry.frequency);
    }
    let fallback = range.fallback();
    println!("  else  {:<6} {:>3}%\n", fallback.action.label(), fallback.frequency);
}

fn pretty(card: Card) -> ColoredString {
    let text = format!("{}{}", card.rank(), card.suit().glyph());
    match card.suit().is_red() {
        true => text.red(),
        false => text.white(),
    }
}
