use log::{debug, info, trace, warn};
use midir::{MidiInput, MidiInputConnection, MidiOutput};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::errors::PortDirection;
use crate::{MidiError, MidiSink, NoteEvent};

macro_rules! ok_or_continue {
	( $e:expr ) => (
		match $e {
			Ok(value) => value,
			Err(e) => {
				trace!("Skipping unreadable port: {}", e);
				continue;
			},
		}
	)
}

/// Find the first port whose name contains `keyword`, returning it along with its full name
fn guess_port<T: midir::MidiIO>(midi_io: &T, keyword: &str) -> Option<(T::Port, String)> {
	for port in midi_io.ports() {
		let name = ok_or_continue!(midi_io.port_name(&port));

		if name.contains(keyword) {
			return Some((port, name));
		}
	}

	return None;
}

fn port_names<T: midir::MidiIO>(midi_io: &T) -> Result<Vec<String>, MidiError> {
	let mut names = Vec::new();
	for port in midi_io.ports() {
		names.push(midi_io.port_name(&port)?);
	}
	return Ok(names);
}

/// Names of every MIDI input port currently visible
pub fn input_port_names() -> Result<Vec<String>, MidiError> {
	return port_names(&MidiInput::new(crate::APPLICATION_NAME)?);
}

/// Names of every MIDI output port currently visible
pub fn output_port_names() -> Result<Vec<String>, MidiError> {
	return port_names(&MidiOutput::new(crate::APPLICATION_NAME)?);
}

/// Connect to the first output port whose name contains `keyword`.
pub fn connect_output(keyword: &str) -> Result<MidiSink, MidiError> {
	let midi_output = MidiOutput::new(crate::APPLICATION_NAME)?;

	let (port, name) = guess_port(&midi_output, keyword)
			.ok_or_else(|| MidiError::NoPortFound {
				direction: PortDirection::Output,
				keyword: keyword.to_string(),
			})?;

	let connection = midi_output
			.connect(&port, crate::OUTPUT_CONNECTION_NAME)
			.map_err(|e| MidiError::ConnectError { port: name.clone(), kind: e.kind() })?;

	info!("Connected to MIDI output {:?}", name);
	return Ok(MidiSink::new(name, connection));
}

/// Keeps the input connection alive. Events stop arriving once this is dropped.
pub struct InputHandler {
	name: String,
	#[allow(dead_code)]
	connection: MidiInputConnection<()>,
}

impl InputHandler {
	pub fn name(&self) -> &str {
		&self.name
	}
}

/// Connect to the first input port whose name contains `keyword` and push every note event it
/// produces into `events`.
///
/// The midir callback runs on its own thread and never blocks: if the queue is full the event is
/// dropped with a warning. Non-note messages are ignored.
#[must_use = "If not saved, the connection will be immediately dropped"]
pub fn connect_input(keyword: &str, events: mpsc::Sender<NoteEvent>)
		-> Result<InputHandler, MidiError> {

	let midi_input = MidiInput::new(crate::APPLICATION_NAME)?;

	let (port, name) = guess_port(&midi_input, keyword)
			.ok_or_else(|| MidiError::NoPortFound {
				direction: PortDirection::Input,
				keyword: keyword.to_string(),
			})?;

	let midir_callback = move |_timestamp: u64, data: &[u8], _: &mut ()| {
		let event = match NoteEvent::decode(data) {
			Some(event) => event,
			None => {
				trace!("Ignoring MIDI message {:02X?}", data);
				return;
			}
		};

		match events.try_send(event) {
			Ok(()) => {}
			Err(TrySendError::Full(event)) => warn!("Event queue full, dropping {:?}", event),
			Err(TrySendError::Closed(_)) => debug!("Dispatcher has stopped, dropping input"),
		}
	};

	let connection = midi_input
			.connect(&port, crate::INPUT_CONNECTION_NAME, midir_callback, ())
			.map_err(|e| MidiError::ConnectError { port: name.clone(), kind: e.kind() })?;

	info!("Listening on MIDI input {:?}", name);
	return Ok(InputHandler { name, connection });
}
