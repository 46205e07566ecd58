//! Commands Module
//!
//! Name → handler registry for the shell.
//!
//! # Commands
//! - `help` - List commands
//! - `exit` - Leave the shell
//! - `map` / `mapb` - Walk the location listing forward / backward
//! - `explore <area>...` - List creatures found in each area
//! - `catch <name>` - Try to catch a creature
//! - `inspect [name]...` - Show captured creatures
//! - `pokedex` - List captured names
//! - `cache` - Show cache statistics

pub mod handlers;

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{PokedexError, Result};
use crate::session::{PageDirection, Session};

/// Lines a command produced. Printed by the REPL even if the command
/// later fails, so partial progress stays visible.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Output {
    lines: Vec<String>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// What the shell should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Accepted argument counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    Exactly(usize),
    AtLeast(usize),
    Any,
}

impl Arity {
    fn check(self, command: &'static str, given: usize) -> Result<()> {
        let message = match self {
            Arity::None if given > 0 => "takes no arguments".to_string(),
            Arity::Exactly(n) if given != n => {
                format!("expects exactly {n} argument(s), got {given}")
            }
            Arity::AtLeast(n) if given < n => {
                format!("expects at least {n} argument(s), got {given}")
            }
            _ => return Ok(()),
        };
        Err(PokedexError::ArgumentCount { command, message })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Exit,
    Map(PageDirection),
    Explore,
    Catch,
    Inspect,
    Pokedex,
    CacheStats,
}

/// A registered command.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub arity: Arity,
    pub kind: CommandKind,
}

// == Registry ==
/// Command table, ordered by name so help output is stable.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, CommandSpec>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a registry with every shell command.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(CommandSpec {
            name: "help",
            description: "Displays a help message",
            arity: Arity::None,
            kind: CommandKind::Help,
        });
        registry.register(CommandSpec {
            name: "exit",
            description: "Exit the Pokedex",
            arity: Arity::None,
            kind: CommandKind::Exit,
        });
        registry.register(CommandSpec {
            name: "map",
            description: "Displays the next list of location areas",
            arity: Arity::None,
            kind: CommandKind::Map(PageDirection::Forward),
        });
        registry.register(CommandSpec {
            name: "mapb",
            description: "Displays the previous list of location areas",
            arity: Arity::None,
            kind: CommandKind::Map(PageDirection::Backward),
        });
        registry.register(CommandSpec {
            name: "explore",
            description: "Lists the creatures found in one or more areas",
            arity: Arity::AtLeast(1),
            kind: CommandKind::Explore,
        });
        registry.register(CommandSpec {
            name: "catch",
            description: "Throws a Pokeball at a creature by name or ID",
            arity: Arity::Exactly(1),
            kind: CommandKind::Catch,
        });
        registry.register(CommandSpec {
            name: "inspect",
            description: "Shows details of captured creatures (all of them if none named)",
            arity: Arity::Any,
            kind: CommandKind::Inspect,
        });
        registry.register(CommandSpec {
            name: "pokedex",
            description: "Lists the creatures in your Pokedex",
            arity: Arity::None,
            kind: CommandKind::Pokedex,
        });
        registry.register(CommandSpec {
            name: "cache",
            description: "Shows response cache statistics",
            arity: Arity::None,
            kind: CommandKind::CacheStats,
        });
        registry
    }

    /// Creates a registry with no commands.
    pub fn empty() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// Adds `command`, replacing any command with the same name.
    pub fn register(&mut self, command: CommandSpec) {
        self.commands.insert(command.name, command);
    }

    /// Looks up a command by its exact name.
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    /// Registered commands in name order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.values()
    }

    // == Dispatch ==
    /// Resolves `name` and runs it against `session`, appending to `out`.
    pub async fn dispatch(
        &self,
        session: &mut Session,
        name: &str,
        args: &[String],
        out: &mut Output,
    ) -> Result<Flow> {
        let command = self
            .get(name)
            .ok_or_else(|| PokedexError::CommandNotFound(name.to_string()))?;
        command.arity.check(command.name, args.len())?;

        match command.kind {
            CommandKind::Help => handlers::help(self, out),
            CommandKind::Exit => return Ok(handlers::exit(out)),
            CommandKind::Map(direction) => handlers::map(session, direction, out).await?,
            CommandKind::Explore => handlers::explore(session, args, out).await?,
            CommandKind::Catch => handlers::catch(session, &args[0], out).await?,
            CommandKind::Inspect => handlers::inspect(session, args, out).await?,
            CommandKind::Pokedex => handlers::pokedex(session, out)?,
            CommandKind::CacheStats => handlers::cache_stats(session, out).await,
        }
        Ok(Flow::Continue)
    }
}
