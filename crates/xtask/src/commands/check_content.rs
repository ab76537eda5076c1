//! Validate content files
//!
//! Parses every table and reports references that do not resolve: status
//! effects named by weapons, abilities or spells but never defined, and actor
//! loadouts naming missing entries. Exits with an error if anything is found.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use combat_core::{ActorOracle, CounterKind, TablesOracle};
use console::style;
use strum::IntoEnumIterator;

use crate::content;

/// Validate cross-references between content files
#[derive(Parser, Debug)]
pub struct CheckContent {
    /// Content directory (defaults to the embedded content)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl CheckContent {
    pub fn execute(self) -> Result<()> {
        let data_dir = self.data_dir.as_deref();
        let content = content::load(data_dir)?;

        println!(
            "{} {}",
            style("Content:").bold().cyan(),
            content::origin(data_dir)
        );
        println!("  Weapons:        {}", content.tables.weapons.len());
        println!("  Abilities:      {}", content.tables.abilities.len());
        println!("  Spells:         {}", content.tables.spells.len());
        println!("  Status effects: {}", content.tables.status_effects.len());
        println!("  Actors:         {}", content.actors.template_ids().len());
        println!();

        // Counters resolve without a table entry, so a missing one only loses its mana cost.
        for counter in CounterKind::iter() {
            if content.tables.ability(counter.ability_id()).is_none() {
                println!(
                    "{} no ability entry for counter '{}'; it will cost no mana",
                    style("!").yellow().bold(),
                    counter.ability_id()
                );
            }
        }

        let problems = content.problems();
        if problems.is_empty() {
            println!("{} All references resolve", style("✓").green().bold());
            return Ok(());
        }

        for problem in &problems {
            println!("{} {problem}", style("✗").red().bold());
        }
        anyhow::bail!("{} content problem(s) found", problems.len())
    }
}
