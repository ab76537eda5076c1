//! List actor templates
//!
//! Shows each template's stats as spawned on the given floor, with its
//! loadout.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use combat_core::ActorOracle;
use console::style;

use crate::content;

/// List actor templates and their loadouts
#[derive(Parser, Debug)]
pub struct ListActors {
    /// Floor to scale stats for
    #[arg(short, long, default_value_t = 1)]
    floor: u32,

    /// Content directory (defaults to the embedded content)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl ListActors {
    pub fn execute(self) -> Result<()> {
        let content = content::load(self.data_dir.as_deref())?;
        let scaling = content.config.scaling;

        println!(
            "{} floor {} (x{:.2})",
            style("Actors:").bold().cyan(),
            self.floor,
            scaling.factor(self.floor).as_f32()
        );
        println!();

        for id in content.actors.template_ids() {
            let Some(template) = content.actors.template(&id) else {
                continue;
            };
            let spawned = template.spawn_scaled(self.floor, &scaling);
            println!(
                "{} {}",
                style(&template.name).bold().yellow(),
                style(format!("({id})")).dim()
            );
            println!(
                "  HP {}  MP {}  Armor {}  Crit {}%",
                spawned.max_health, spawned.max_mana, spawned.armor, spawned.crit_chance
            );
            println!("  Weapons:   {}", template.weapons.join(", "));
            println!("  Abilities: {}", template.abilities.join(", "));
            println!("  Spells:    {}", template.spells.join(", "));
        }

        Ok(())
    }
}
