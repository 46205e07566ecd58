//! Interactive loop
//!
//! Reads one line at a time, lower-cases and splits it, and hands the tokens
//! to the command registry. Command errors are printed and the loop
//! continues; only `exit` or end of input stops it.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::commands::{CommandRegistry, Flow, Output};
use crate::session::Session;

/// Lower-cases `text` and splits it on any run of whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplExit {
    /// The `exit` command ran
    Command,
    /// Input closed
    EndOfInput,
}

/// A shell session bound to its command table.
pub struct Repl {
    registry: CommandRegistry,
    session: Session,
    prompt: String,
}

impl Repl {
    // == Constructor ==
    /// Binds `session` to `registry`, printing `prompt` before each read.
    pub fn new(registry: CommandRegistry, session: Session, prompt: impl Into<String>) -> Self {
        Self {
            registry,
            session,
            prompt: prompt.into(),
        }
    }

    /// Session state, for inspection after a run.
    pub fn session(&self) -> &Session {
        &self.session
    }

    // == Execute ==
    /// Runs one line of input, printing output and any error to `writer`.
    pub async fn execute_line<W: Write>(
        &mut self,
        line: &str,
        writer: &mut W,
    ) -> std::io::Result<Flow> {
        let tokens = clean_input(line);
        let Some((name, args)) = tokens.split_first() else {
            return Ok(Flow::Continue);
        };

        let mut out = Output::new();
        let result = self
            .registry
            .dispatch(&mut self.session, name, args, &mut out)
            .await;

        if !out.is_empty() {
            writeln!(writer, "{}", out)?;
        }

        match result {
            Ok(flow) => Ok(flow),
            Err(e) => {
                warn!(command = %name, error = %e, "command failed");
                writeln!(writer, "{}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    // == Run ==
    /// Prompts, reads and executes lines until `exit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, writer: &mut W) -> std::io::Result<ReplExit>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        loop {
            write!(writer, "{}", self.prompt)?;
            writer.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(writer)?;
                return Ok(ReplExit::EndOfInput);
            };

            if self.execute_line(&line, writer).await? == Flow::Exit {
                return Ok(ReplExit::Command);
            }
        }
    }
}
