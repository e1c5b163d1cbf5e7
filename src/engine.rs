//! The dispatcher: turns note events into playback forwards and LED effects.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, trace, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::effect::DEFAULT_FRAME_DELAY;
use crate::render::Frame;
use crate::{NoteEvent, OutputSink, PadConfig, PadGrid, Protocol};

/// Drives the configured effects for a pad grid.
///
/// The engine holds no device state of its own: the sinks are handed in by whoever owns the
/// connections, and the grid is read-only while dispatching. Events are processed one at a time,
/// in order. The first frame of an effect is sent before [`Engine::dispatch`] returns; later
/// frames of a multi-frame effect are sent by a spawned task so that the frame delays never hold
/// up the next event.
pub struct Engine {
    grid: Arc<PadGrid>,
    protocol: Protocol,
    frame_delay: Duration,
    visual_output: Option<Arc<dyn OutputSink>>,
    playback_outputs: Vec<Arc<dyn OutputSink>>,
}

impl Engine {
    pub fn new(grid: PadGrid, protocol: Protocol) -> Self {
        Self {
            grid: Arc::new(grid),
            protocol,
            frame_delay: DEFAULT_FRAME_DELAY,
            visual_output: None,
            playback_outputs: Vec::new(),
        }
    }

    /// The LED device effects are drawn on. Without one, no effects are drawn.
    pub fn with_visual_output(mut self, sink: Arc<dyn OutputSink>) -> Self {
        self.visual_output = Some(sink);
        self
    }

    /// Append a playback output. Pads pick one by index through [`PadConfig::output_index`].
    pub fn with_playback_output(mut self, sink: Arc<dyn OutputSink>) -> Self {
        self.playback_outputs.push(sink);
        self
    }

    /// Pause between the frames of multi-frame effects
    pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    pub fn grid(&self) -> &PadGrid {
        &self.grid
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Consume events until the sending side of the channel is closed.
    pub async fn run(&self, mut events: mpsc::Receiver<NoteEvent>) {
        while let Some(event) = events.recv().await {
            self.dispatch(event);
        }
        debug!("Event stream closed");
    }

    /// Handle a single note event.
    ///
    /// Returns the handle of the task playing the remaining frames if the effect has more than
    /// one. Dropping the handle does not stop the animation. Must be called from within a tokio
    /// runtime.
    pub fn dispatch(&self, event: NoteEvent) -> Option<JoinHandle<()>> {
        let pressed = event.coordinate();
        let pad = match self.grid.get(pressed) {
            Some(pad) => pad,
            None => {
                debug!("Note {} is not on the pad field, ignoring", event.note);
                return None;
            }
        };

        debug!(
            "{} at ({}, {}) velocity {}: {} in {}",
            if event.is_release() { "Release" } else { "Press" },
            pressed.x,
            pressed.y,
            event.velocity,
            pad.effect,
            pad.color.hue,
        );

        self.forward_playback(event, pad);

        let sink = self.visual_output.as_ref()?;
        let plan = pad.effect.plan(pad.color.hue, event.velocity, self.frame_delay)?;

        let mut frames = plan.render(pressed).into_iter();
        if let Some(first) = frames.next() {
            send_frame(sink.as_ref(), self.protocol, event.status, &first);
        }

        let remaining: Vec<Frame> = frames.collect();
        if remaining.is_empty() {
            return None;
        }

        let sink = Arc::clone(sink);
        let protocol = self.protocol;
        let frame_delay = plan.frame_delay();
        Some(tokio::spawn(async move {
            for frame in remaining {
                tokio::time::sleep(frame_delay).await;
                send_frame(sink.as_ref(), protocol, event.status, &frame);
            }
        }))
    }

    fn forward_playback(&self, event: NoteEvent, pad: &PadConfig) {
        let output = match self.playback_outputs.get(pad.output_index) {
            Some(output) => output,
            None => return,
        };

        let bytes = [event.status, pad.note, event.velocity];
        trace!("Playback {:02X?}", bytes);
        if let Err(e) = output.send(&bytes) {
            warn!("Forwarding note {} to output {} failed: {}", pad.note, pad.output_index, e);
        }
    }
}

fn send_frame(sink: &dyn OutputSink, protocol: Protocol, status: u8, frame: &Frame) {
    for &(coordinate, color) in frame {
        let message = match protocol.encode(status, coordinate, color) {
            Some(message) => message,
            None => continue,
        };

        trace!("LED {:02X?}", message.as_bytes());
        if let Err(e) = sink.send(message.as_bytes()) {
            warn!("Sending LED update for ({}, {}) failed: {}", coordinate.x, coordinate.y, e);
        }
    }
}
