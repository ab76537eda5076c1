//! Play a seeded battle from content templates
//!
//! Both sides rotate through their template loadouts, one action per turn.
//! The same arguments always replay the same battle.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use combat_core::{ActorOracle, Combatant, TurnResult};
use combat_runtime::{BattleSession, OracleManager, Outcome, RotationProvider, SessionState};
use console::style;
use serde::Serialize;

use crate::content;

/// Play a seeded battle between two actor templates
#[derive(Parser, Debug)]
pub struct Simulate {
    /// Monster template id (e.g., goblin, cave_troll)
    #[arg(value_name = "MONSTER")]
    monster: String,

    /// Player template id
    #[arg(short, long, default_value = "hero")]
    player: String,

    /// Dungeon floor; scales the monster and weapon damage
    #[arg(short, long, default_value_t = 1)]
    floor: u32,

    /// Battle seed
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Stop after this many turns if nobody has fallen
    #[arg(short, long, default_value_t = 50)]
    turns: u64,

    /// Content directory (defaults to the embedded content)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "log")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Turn-by-turn battle log
    Log,
    /// Full JSON report of every turn
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    outcome: Option<Outcome>,
    final_state: &'a SessionState,
    turns: &'a [TurnResult],
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let oracles = OracleManager::from(content::load(self.data_dir.as_deref())?);

        let rotation = |id: &str| {
            oracles
                .actors()
                .template(id)
                .map(RotationProvider::from_template)
                .with_context(|| format!("Unknown actor template '{id}'"))
        };
        let player = rotation(&self.player)?;
        let monster = rotation(&self.monster)?;

        let mut session =
            BattleSession::from_templates(oracles, &self.player, &self.monster, self.floor, self.seed)?;
        let outcome = session.run(&player, &monster, self.turns)?;

        match self.format {
            OutputFormat::Log => {
                print_header(&self, &session);
                print_log(&session);
                print_outcome(outcome, &session);
            }
            OutputFormat::Json => {
                let report = Report {
                    outcome,
                    final_state: session.state(),
                    turns: session.history(),
                };
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize battle report")?;
                println!("{json}");
            }
        }

        Ok(())
    }
}

fn print_header(args: &Simulate, session: &BattleSession) {
    println!(
        "{} {} vs {} on floor {} (seed {}, content: {})",
        style("Battle:").bold().cyan(),
        session.player().name,
        session.monster().name,
        args.floor,
        args.seed,
        content::origin(args.data_dir.as_deref()),
    );
    println!();
}

fn print_log(session: &BattleSession) {
    for (index, turn) in session.history().iter().enumerate() {
        println!("{}", style(format!("Turn {}", index + 1)).bold().yellow());
        for crit in &turn.critical_hits {
            println!("  {}", style(crit).magenta());
        }
        for message in &turn.messages {
            println!("  {message}");
        }
        println!(
            "  {} -{} +{}   {} -{} +{}",
            style(&session.player().name).green(),
            turn.player_damage(),
            turn.player_healing(),
            style(&session.monster().name).red(),
            turn.monster_damage(),
            turn.monster_healing(),
        );
    }
    println!();

    print_combatant(session.player());
    print_combatant(session.monster());
}

fn print_combatant(combatant: &Combatant) {
    let effects: Vec<&str> = combatant
        .status_effects
        .iter()
        .map(|effect| effect.kind.as_str())
        .collect();
    println!(
        "  {:<16} HP {:>3}/{:<3} MP {:>3}/{:<3} {}",
        combatant.name,
        combatant.current_health,
        combatant.max_health,
        combatant.current_mana,
        combatant.max_mana,
        if effects.is_empty() {
            String::new()
        } else {
            format!("[{}]", effects.join(", "))
        },
    );
}

fn print_outcome(outcome: Option<Outcome>, session: &BattleSession) {
    println!();
    match outcome {
        Some(Outcome::PlayerVictory) => println!(
            "{} {} wins after {} turns",
            style("✓").green().bold(),
            session.player().name,
            session.turn()
        ),
        Some(Outcome::MonsterVictory) => println!(
            "{} {} falls after {} turns",
            style("✗").red().bold(),
            session.player().name,
            session.turn()
        ),
        Some(Outcome::Draw) => println!(
            "{} Both sides fall on turn {}",
            style("=").yellow().bold(),
            session.turn()
        ),
        None => println!(
            "{} No winner after {} turns",
            style("…").dim(),
            session.turn()
        ),
    }
}
