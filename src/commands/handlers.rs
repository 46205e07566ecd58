//! Command Handlers
//!
//! One function per shell command. Handlers write user-facing lines to an
//! [`Output`] and return errors for the REPL to print.

use tracing::{debug, info};

use crate::commands::{CommandRegistry, Flow, Output};
use crate::error::{PokedexError, Result};
use crate::session::{attempt_catch, PageDirection, Session};

/// `help`: banner plus one `name: description` line per command.
pub fn help(registry: &CommandRegistry, out: &mut Output) {
    out.push("Welcome to the Pokedex!");
    out.push("Usage:");
    out.push("");
    for command in registry.iter() {
        out.push(format!("{}: {}", command.name, command.description));
    }
}

/// `exit`: says goodbye. The REPL ends the process.
pub fn exit(out: &mut Output) -> Flow {
    out.push("Closing the Pokedex... Goodbye!");
    Flow::Exit
}

/// `map` / `mapb`: prints one page of location area names.
pub async fn map(session: &mut Session, direction: PageDirection, out: &mut Output) -> Result<()> {
    let page = session
        .fetcher
        .walk_locations(&mut session.cursor, direction)
        .await?;

    for name in page.names() {
        out.push(name);
    }
    Ok(())
}

/// `explore <area>...`: lists creatures for each area, stopping at the first failure.
pub async fn explore(session: &mut Session, areas: &[String], out: &mut Output) -> Result<()> {
    for area in areas {
        out.push(format!("Exploring {}...", area));
        let detail = session.fetcher.fetch_location_area(area).await?;
        out.push("Found Pokemon:");
        for name in detail.creature_names() {
            out.push(format!(" - {}", name));
        }
    }
    Ok(())
}

/// `catch <name>`: fetches the creature and rolls for it. A miss is not an error.
pub async fn catch(session: &mut Session, name_or_id: &str, out: &mut Output) -> Result<()> {
    let creature = session.fetcher.fetch_creature(name_or_id).await?;
    out.push(format!("Throwing a Pokeball at {}...", creature.name));

    if attempt_catch(&mut session.rng, creature.base_experience) {
        info!(creature = %creature.name, "caught");
        out.push(format!("{} was caught!", creature.name));
        out.push("You may now inspect it with the inspect command.");
        session.pokedex.insert(creature);
    } else {
        debug!(creature = %creature.name, "escaped");
        out.push(format!("{} escaped!", creature.name));
    }
    Ok(())
}

/// `inspect [name]...`: details for captured creatures.
///
/// With no names, every captured creature is shown. A name that isn't
/// captured is looked up in the catalog to tell "not caught yet" apart from
/// "doesn't exist"; the capture store is never modified.
pub async fn inspect(session: &mut Session, names: &[String], out: &mut Output) -> Result<()> {
    let names: Vec<String> = if names.is_empty() {
        if session.pokedex.is_empty() {
            return Err(PokedexError::EmptyPokedex);
        }
        session.pokedex.names().map(str::to_string).collect()
    } else {
        names.to_vec()
    };

    for name in &names {
        if let Some(creature) = session.pokedex.get(name) {
            out.push(creature.to_string());
            continue;
        }

        // Captures are keyed by catalog name, so an ID resolves here
        match session.fetcher.fetch_creature(name).await {
            Ok(creature) => match session.pokedex.get(&creature.name) {
                Some(caught) => out.push(caught.to_string()),
                None => out.push(format!("You have not caught {} yet.", creature.name)),
            },
            Err(PokedexError::NotFound(_)) => {
                out.push(format!("{}: this creature does not exist.", name))
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// `pokedex`: captured names, sorted.
pub fn pokedex(session: &Session, out: &mut Output) -> Result<()> {
    if session.pokedex.is_empty() {
        return Err(PokedexError::EmptyPokedex);
    }

    out.push("Your Pokedex:");
    for name in session.pokedex.names() {
        out.push(format!("  - {}", name));
    }
    Ok(())
}

/// `cache`: response cache counters.
pub async fn cache_stats(session: &Session, out: &mut Output) {
    let stats = session.fetcher.cache().stats().await;
    out.push(stats.to_string());
}
