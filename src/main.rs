//! Battle Odds - CLI entry point
//!
//! Thin front end over the combat engine: resolve one strike, run a short
//! battle, or print a damage comparison table.

use clap::{Args, Parser, Subcommand};

use battle_odds::combat::{battle, damage_to, roster, CoPower, CombatConfig, Unit};
use battle_odds::core::Result;
use battle_odds::data::{TerrainKind, UnitKind};
use battle_odds::report::{damage_table, hp_summary, DistReport};

#[derive(Parser)]
#[command(name = "battle-odds", about = "Exact combat outcome distributions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct SessionArgs {
    /// Towers captured by the attacking side
    #[arg(long, default_value_t = 1)]
    attacker_towers: u32,
    /// Towers captured by the defending side
    #[arg(long, default_value_t = 1)]
    defender_towers: u32,
    /// Power active for the attacking side
    #[arg(long, value_enum)]
    attacker_power: Option<CoPower>,
    /// Power active for the defending side
    #[arg(long, value_enum)]
    defender_power: Option<CoPower>,
}

impl SessionArgs {
    fn config(&self) -> CombatConfig {
        CombatConfig {
            attacker_towers: self.attacker_towers,
            defender_towers: self.defender_towers,
            attacker_power: self.attacker_power.unwrap_or_default(),
            defender_power: self.defender_power.unwrap_or_default(),
        }
    }
}

#[derive(Args)]
struct UnitArgs {
    /// Officer name (e.g. grit, kanbei); neutral stats when omitted
    #[arg(long)]
    co: Option<String>,
    /// Terrain the unit stands on
    #[arg(long, value_enum)]
    terrain: Option<TerrainKind>,
    /// Displayed hit points, 1-10
    #[arg(long, default_value_t = 10)]
    hp: u32,
}

impl UnitArgs {
    fn build(&self, kind: UnitKind) -> Result<Unit> {
        let mut unit = Unit::new(kind)
            .with_terrain(self.terrain.unwrap_or_default())
            .with_hp(self.hp);
        if let Some(name) = &self.co {
            unit = unit.with_officer(roster::by_name(name)?);
        }
        Ok(unit)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Damage distribution for one strike
    Damage {
        attacker: UnitKind,
        defender: UnitKind,
        #[command(flatten)]
        unit: UnitArgs,
        /// Defender's terrain
        #[arg(long, value_enum)]
        defender_terrain: Option<TerrainKind>,
        /// Defender's displayed hit points
        #[arg(long, default_value_t = 10)]
        defender_hp: u32,
        /// Defender's officer
        #[arg(long)]
        defender_co: Option<String>,
        /// Emit the distribution as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Resolve alternating attack rounds and show both sides' HP odds
    Battle {
        attacker: UnitKind,
        defender: UnitKind,
        #[arg(long, default_value_t = 1)]
        rounds: u32,
        #[command(flatten)]
        unit: UnitArgs,
        #[arg(long, value_enum)]
        defender_terrain: Option<TerrainKind>,
        #[arg(long, default_value_t = 10)]
        defender_hp: u32,
        #[arg(long)]
        defender_co: Option<String>,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Minimum-damage table of the given attackers against every unit
    Table {
        /// Attacking unit kinds
        #[arg(value_delimiter = ',', required = true)]
        attackers: Vec<UnitKind>,
        /// Keep defenders no attacker can damage
        #[arg(long)]
        no_prune: bool,
        #[command(flatten)]
        session: SessionArgs,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "battle_odds=info".to_string()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Damage {
            attacker,
            defender,
            unit,
            defender_terrain,
            defender_hp,
            defender_co,
            json,
            session,
        } => {
            let attacker = unit.build(attacker)?;
            let defender = UnitArgs {
                co: defender_co,
                terrain: defender_terrain,
                hp: defender_hp,
            }
            .build(defender)?;
            let cfg = session.config();
            let damage = damage_to(&attacker, &defender, &cfg)?;
            // Damage is tracked at raw scale; show displayed points.
            let displayed = (&damage / 10.0).normalize();
            let report = DistReport::new(&displayed);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "{} -> {} [{}]",
                    attacker.kind().name(),
                    defender.kind().name(),
                    cfg.tag()
                );
                println!("{displayed}");
                println!(
                    "mean {:.2}  stdev {:.2}  median {:.1}",
                    report.mean, report.stdev, report.median
                );
            }
        }
        Command::Battle {
            attacker,
            defender,
            rounds,
            unit,
            defender_terrain,
            defender_hp,
            defender_co,
            session,
        } => {
            let attacker = unit.build(attacker)?;
            let defender = UnitArgs {
                co: defender_co,
                terrain: defender_terrain,
                hp: defender_hp,
            }
            .build(defender)?;
            let cfg = session.config();
            let (attacker_after, defender_after) = battle(&attacker, &defender, rounds, &cfg)?;
            println!("after {rounds} round(s):");
            println!("{}", hp_summary(&attacker_after));
            println!("{}", hp_summary(&defender_after));
        }
        Command::Table {
            attackers,
            no_prune,
            session,
        } => {
            let attackers: Vec<Unit> = attackers.into_iter().map(Unit::new).collect();
            let defenders: Vec<Unit> = UnitKind::ALL.into_iter().map(Unit::new).collect();
            let table = damage_table(&attackers, &defenders, &session.config(), !no_prune)?;
            println!("{table}");
        }
    }
    Ok(())
}
