// src/script/writer.rs

//! Script artifact writer.

use std::io::Write;

use tracing::trace;

use crate::errors::Result;
use crate::script::sink::CommandSink;

/// Interpreter used for the `#!` line when none is configured.
pub const DEFAULT_INTERPRETER: &str = "/usr/bin/env bash";

/// Script location used when none is given.
pub const DEFAULT_SCRIPT_PATH: &str = "tasks.sh";

/// Writes resolved commands as a runnable script.
///
/// The header (`#!<interpreter>` and a blank line) is written by
/// [`ScriptWriter::new`], before any command is resolved, so it is present
/// even when resolution fails later on. Each command is flushed as soon as it
/// is emitted.
#[derive(Debug)]
pub struct ScriptWriter<W: Write> {
    out: W,
    commands_written: usize,
}

impl<W: Write> ScriptWriter<W> {
    pub fn new(mut out: W, interpreter: &str) -> Result<Self> {
        writeln!(out, "#!{}", interpreter.trim())?;
        writeln!(out)?;
        out.flush()?;

        Ok(Self {
            out,
            commands_written: 0,
        })
    }

    pub fn with_default_interpreter(out: W) -> Result<Self> {
        Self::new(out, DEFAULT_INTERPRETER)
    }

    /// Number of command lines written after the header.
    pub fn commands_written(&self) -> usize {
        self.commands_written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CommandSink for ScriptWriter<W> {
    fn emit(&mut self, command: &str) -> Result<()> {
        writeln!(self.out, "{}", command)?;
        self.out.flush()?;
        self.commands_written += 1;
        trace!(command, line = self.commands_written, "wrote command");
        Ok(())
    }
}
