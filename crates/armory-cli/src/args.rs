use std::path::PathBuf;

use armory_core::ResourceKind;
use clap::{Parser, Subcommand};

use crate::cli::{LookupCommands, ResourceAction};

/// Command-line interface for the Armory game-data catalog
///
/// Armory stores characters, classes, skills, spells, combat arts, weapons
/// and per-character skill lists in a local SQLite database. Every command
/// prints JSON on stdout.
#[derive(Parser)]
#[command(version, about, name = "armory")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/armory/armory.db
    #[arg(long, global = true, env = "ARMORY_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Armory CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Print the column layout of one or every resource kind
    Schema {
        /// Resource kind, e.g. `weapon` or `combat-art`
        kind: Option<ResourceKind>,
    },
    /// Named lookups (house roster, character by name, ...)
    Lookup {
        #[command(subcommand)]
        command: LookupCommands,
    },
    #[command(flatten)]
    Resource(ResourceCommands),
}

/// One subcommand per resource kind, each taking the same actions
#[derive(Subcommand)]
pub enum ResourceCommands {
    /// Manage characters
    #[command(alias = "char")]
    Character {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Manage classes
    Class {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Manage skill categories
    Skill {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Manage spells
    Spell {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Manage combat arts
    #[command(alias = "ca")]
    CombatArt {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Manage weapons
    Weapon {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Manage per-character skill lists
    SkillList {
        #[command(subcommand)]
        action: ResourceAction,
    },
}
