/*!
Per-pad LED feedback for Novation Launchpad style 8x8 MIDI pad controllers.

Every pad of the grid is configured with an [`Effect`], a [`Color`], and a note to forward to a
playback device. When a note event comes in from the controller, the [`Engine`] forwards the note
and draws the pad's effect onto the LED output device, either with plain palette note messages
([`Protocol::Legacy`]) or with one RGB SysEx message per LED ([`Protocol::Extended`]).

# Drawing effects

The engine does not own any devices. It writes to whatever [`OutputSink`]s it is given, which
makes it easy to watch what it does with a [`MockSink`]:

```rust
use std::sync::Arc;
use padlight::{Color, Effect, Engine, Hue, MockSink, NoteEvent, PadConfig, PadGrid, Protocol};

# #[tokio::main(flavor = "current_thread")]
# async fn main() {
let grid = PadGrid::uniform(PadConfig {
    effect: Effect::Dot,
    color: Color::full(Hue::Red),
    ..PadConfig::default()
});

let leds = Arc::new(MockSink::new());
let engine = Engine::new(grid, Protocol::Legacy).with_visual_output(leds.clone());

engine.dispatch(NoteEvent::press(44, 127));
engine.dispatch(NoteEvent::release(44));

assert_eq!(leds.bytes(), vec![vec![0x90, 44, 5], vec![0x90, 44, 0]]);
# }
```

# Talking to real devices

[`midi_io`] connects to ports by keyword, the same way for inputs and outputs:

```no_run
use std::sync::Arc;
use padlight::{midi_io, Engine, PadGrid, Protocol};

# #[tokio::main(flavor = "current_thread")]
# async fn main() -> Result<(), padlight::MidiError> {
let leds = midi_io::connect_output("Launchpad")?;
let engine = Engine::new(PadGrid::new(), Protocol::Extended).with_visual_output(Arc::new(leds));

let (sender, receiver) = tokio::sync::mpsc::channel(64);
let _input = midi_io::connect_input("Launchpad", sender)?;
engine.run(receiver).await;
# Ok(())
# }
```
*/

pub mod coordinate;
pub use coordinate::{coordinate_to_note, note_to_coordinate, Coordinate, NO_NOTE};

pub mod color;
pub use color::{
    color_to_rgb, color_to_velocity, velocity_to_color, Color, Hue, LightnessLevel, RgbColor,
};

pub mod render;
pub use render::{render_page, Frame, LightnessPage};

pub mod effect;
pub use effect::{Effect, EffectPlan, LightnessAnimation};

pub mod protocol;
pub use protocol::{LedMessage, Protocol};

mod grid;
pub use grid::*;

mod event;
pub use event::*;

mod errors;
pub use errors::*;

mod sink;
pub use sink::*;

pub mod midi_io;

mod engine;
pub use engine::*;

/// Identifier used for e.g. the midi port names etc.
const APPLICATION_NAME: &str = "padlight";
const INPUT_CONNECTION_NAME: &str = "padlight input";
const OUTPUT_CONNECTION_NAME: &str = "padlight output";
