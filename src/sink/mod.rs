//! Where encoded messages go.
//!
//! The engine only ever appends to a sink and never reads from it. Every encoded message is one
//! `send` call. Sinks are shared between the dispatch loop and running animations, so `send`
//! takes `&self` and implementors serialize writes themselves.

use std::sync::Mutex;

use midir::MidiOutputConnection;

use crate::MidiError;

mod mock;
pub use mock::*;

pub trait OutputSink: Send + Sync {
    fn send(&self, bytes: &[u8]) -> Result<(), MidiError>;
}

/// An open `midir` output connection. The connection closes when this is dropped.
pub struct MidiSink {
    name: String,
    connection: Mutex<MidiOutputConnection>,
}

impl MidiSink {
    pub fn new(name: impl Into<String>, connection: MidiOutputConnection) -> Self {
        Self {
            name: name.into(),
            connection: Mutex::new(connection),
        }
    }

    /// The name of the port this sink is connected to
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl OutputSink for MidiSink {
    fn send(&self, bytes: &[u8]) -> Result<(), MidiError> {
        let mut connection = self
            .connection
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        connection.send(bytes)?;
        Ok(())
    }
}

impl std::fmt::Debug for MidiSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MidiSink").field("name", &self.name).finish()
    }
}
