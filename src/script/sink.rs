// src/script/sink.rs

use crate::errors::Result;

/// Destination for resolved commands, in the order they are emitted.
///
/// The resolver calls [`CommandSink::emit`] exactly once per task, at the
/// moment all of the task's prerequisites have been emitted.
pub trait CommandSink {
    fn emit(&mut self, command: &str) -> Result<()>;
}

/// In-memory output sequence.
impl CommandSink for Vec<String> {
    fn emit(&mut self, command: &str) -> Result<()> {
        self.push(command.to_string());
        Ok(())
    }
}

impl<S: CommandSink + ?Sized> CommandSink for &mut S {
    fn emit(&mut self, command: &str) -> Result<()> {
        (**self).emit(command)
    }
}
