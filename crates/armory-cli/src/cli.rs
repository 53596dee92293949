//! Command handlers and their clap argument types.
//!
//! Argument structs here stay clap-specific and convert into the core
//! parameter types (`ResourceKey`, `Lookup`) before reaching the catalog.
//! Every resource kind shares the same [`ResourceAction`] set, dispatched
//! to one generic handler.

use std::io;

use anyhow::{Context, Result};
use armory_core::{
    params::decode_payload,
    resources::{Character, Class, CombatArt, Skill, SkillList, Spell, Weapon},
    Catalog, Lookup, Resource, ResourceKey, ResourceKind,
};
use clap::{Args, Subcommand};
use log::debug;
use serde::Serialize;

use crate::args::ResourceCommands;

/// Actions available for every resource kind
#[derive(Subcommand, Debug)]
pub enum ResourceAction {
    /// List every resource, ordered by ID
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show one resource
    #[command(alias = "s")]
    Show(KeyArgs),
    /// Find resources by a column value
    #[command(alias = "f")]
    Find(FindArgs),
    /// Create a resource from a JSON document
    #[command(alias = "c")]
    Create(PayloadArgs),
    /// Change some fields of a resource from a JSON document
    #[command(alias = "u")]
    Update(UpdateArgs),
    /// Delete a resource permanently
    #[command(aliases = ["d", "rm"])]
    Delete(KeyArgs),
    /// Check whether a resource exists
    Exists(KeyArgs),
}

/// Identifies one resource
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Resource ID
    pub id: ResourceKey,
}

/// Single-column lookup
#[derive(Args, Debug)]
pub struct FindArgs {
    /// Column to match, e.g. `name` or `type_id`
    pub column: String,
    /// Value to compare against
    pub value: String,
    /// Match values that start with VALUE (text columns only)
    #[arg(long)]
    pub prefix: bool,
}

impl From<FindArgs> for Lookup {
    fn from(args: FindArgs) -> Self {
        if args.prefix {
            Lookup::prefix(args.column, args.value)
        } else {
            Lookup::exact(args.column, args.value)
        }
    }
}

/// A JSON document, inline or `-` for stdin
#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// JSON document, or `-` to read it from stdin
    pub json: String,
}

/// Partial update of one resource
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Resource ID
    pub id: ResourceKey,
    /// JSON document with only the fields to change, or `-` for stdin
    pub json: String,
}

/// Named lookups
#[derive(Subcommand, Debug)]
pub enum LookupCommands {
    /// Characters of a house, e.g. "Black Eagles"
    House { affinity: String },
    /// Characters by full name, matched after title-casing
    CharacterName { name: String },
    /// Weapons whose name starts with the given text
    WeaponName { prefix: String },
    /// Skill lists belonging to a character
    SkillLists { char_id: ResourceKey },
}

pub struct Cli {
    catalog: Catalog,
}

impl Cli {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub async fn handle_resource_command(&self, command: ResourceCommands) -> Result<()> {
        match command {
            ResourceCommands::Character { action } => self.handle::<Character>(action).await,
            ResourceCommands::Class { action } => self.handle::<Class>(action).await,
            ResourceCommands::Skill { action } => self.handle::<Skill>(action).await,
            ResourceCommands::Spell { action } => self.handle::<Spell>(action).await,
            ResourceCommands::CombatArt { action } => self.handle::<CombatArt>(action).await,
            ResourceCommands::Weapon { action } => self.handle::<Weapon>(action).await,
            ResourceCommands::SkillList { action } => self.handle::<SkillList>(action).await,
        }
    }

    pub async fn handle_lookup_command(&self, command: LookupCommands) -> Result<()> {
        debug!("lookup: {command:?}");

        match command {
            LookupCommands::House { affinity } => {
                print_json(&self.catalog.characters_by_affinity(&affinity).await?)
            }
            LookupCommands::CharacterName { name } => {
                print_json(&self.catalog.characters_by_name(&name).await?)
            }
            LookupCommands::WeaponName { prefix } => {
                print_json(&self.catalog.weapons_by_name(&prefix).await?)
            }
            LookupCommands::SkillLists { char_id } => {
                print_json(&self.catalog.skill_lists_for_character(char_id).await?)
            }
        }
    }

    async fn handle<R: Resource>(&self, action: ResourceAction) -> Result<()> {
        debug!("{}: {action:?}", R::KIND);

        match action {
            ResourceAction::List => print_json(&self.catalog.list::<R>().await?),
            ResourceAction::Show(KeyArgs { id }) => print_json(&self.catalog.get::<R>(id).await?),
            ResourceAction::Find(args) => print_json(&self.catalog.find::<R>(args.into()).await?),
            ResourceAction::Create(PayloadArgs { json }) => {
                let resource: R = decode_payload(&read_payload(json)?)?;
                print_json(&self.catalog.create(resource).await?)
            }
            ResourceAction::Update(UpdateArgs { id, json }) => {
                let patch: R::Patch = decode_payload(&read_payload(json)?)?;
                print_json(&self.catalog.update::<R>(id, patch).await?)
            }
            ResourceAction::Delete(KeyArgs { id }) => {
                print_json(&self.catalog.delete::<R>(id).await?)
            }
            ResourceAction::Exists(KeyArgs { id }) => {
                print_json(&self.catalog.exists::<R>(id).await?)
            }
        }
    }
}

/// Prints the table layout of one kind, or of every kind as an array.
pub fn show_schema(kind: Option<ResourceKind>) -> Result<()> {
    match kind {
        Some(kind) => print_json(&kind.describe()),
        None => {
            let schemas: Vec<_> = ResourceKind::ALL.iter().map(|k| k.describe()).collect();
            print_json(&schemas)
        }
    }
}

fn read_payload(json: String) -> Result<String> {
    if json == "-" {
        io::read_to_string(io::stdin()).context("Failed to read JSON from stdin")
    } else {
        Ok(json)
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use armory_core::MatchMode;
    use clap::Parser;

    use super::*;
    use crate::args::{Args, Commands};

    #[test]
    fn test_find_args_into_lookup() {
        let lookup: Lookup = FindArgs {
            column: "name".to_string(),
            value: "Ad".to_string(),
            prefix: true,
        }
        .into();
        assert_eq!(lookup.mode, MatchMode::Prefix);
        assert_eq!(lookup.column, "name");
    }

    #[test]
    fn test_parse_kebab_case_kind() {
        let args = Args::try_parse_from(["armory", "combat-art", "show", "3"]).unwrap();
        match args.command {
            Commands::Resource(ResourceCommands::CombatArt {
                action: ResourceAction::Show(KeyArgs { id }),
            }) => assert_eq!(id, ResourceKey::new(3)),
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        assert!(Args::try_parse_from(["armory", "weapon", "show", "sword"]).is_err());
    }

    #[test]
    fn test_schema_kind_accepts_table_name() {
        let args = Args::try_parse_from(["armory", "schema", "character_skills"]).unwrap();
        assert!(matches!(
            args.command,
            Commands::Schema {
                kind: Some(ResourceKind::SkillList)
            }
        ));
    }
}
