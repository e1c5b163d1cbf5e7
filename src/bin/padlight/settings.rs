use std::time::Duration;

use padlight::{Color, Coordinate, Effect, Hue, PadGrid, Protocol};
use serde::Deserialize;

/// Per-pad changes on top of the default grid. `x` and `y` are required, anything else left out
/// keeps its default.
///
/// Effects always draw at their own fixed brightness, so a pad only picks its hue.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct PadOverride {
    /// Column, 0 is the left edge
    pub x: i32,
    /// Row, 0 is the bottom edge
    pub y: i32,
    pub effect: Option<Effect>,
    pub hue: Option<Hue>,
    /// Note forwarded to the playback output
    pub note: Option<u8>,
    /// Index into `playback_outputs`
    pub output: Option<usize>,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub(crate) struct Settings {
    /// Keyword matched against the MIDI input port names
    pub input_port: String,
    /// Keyword of the LED output port. No effects are drawn when unset.
    pub visual_output: Option<String>,
    /// Keywords of the playback output ports, in `output` index order
    pub playback_outputs: Vec<String>,
    /// "legacy" for palette note messages, "extended" for RGB SysEx
    pub protocol: Protocol,
    /// Pause between explosion frames
    pub frame_delay_ms: u64,
    /// How many input events may wait for the dispatcher before new ones are dropped
    pub event_queue: usize,
    pub pads: Vec<PadOverride>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_port: "Launchpad".to_string(),
            visual_output: Some("Launchpad".to_string()),
            playback_outputs: vec![],
            protocol: Protocol::Extended,
            frame_delay_ms: 50,
            event_queue: 64,
            pads: vec![],
        }
    }
}

impl Settings {
    /// Read the settings from the optional config file, then from `PADLIGHT_*` environment
    /// variables, on top of the defaults.
    ///
    /// `PADLIGHT_PLAYBACK_OUTPUTS` takes a comma separated list. Pad overrides can only come
    /// from the file.
    pub(crate) fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut cfg = config::Config::builder();

        if let Some(path) = path {
            cfg = cfg.add_source(config::File::with_name(path));
        }
        cfg = cfg.add_source(environment());

        cfg.build()?.try_deserialize()
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.input_port.is_empty() {
            return Err("Input port must not be empty".to_string());
        }

        if matches!(&self.visual_output, Some(port) if port.is_empty()) {
            return Err("Visual output port must not be empty, leave it out instead".to_string());
        }

        if self.playback_outputs.iter().any(String::is_empty) {
            return Err("Playback output ports must not be empty".to_string());
        }

        if self.event_queue == 0 {
            return Err("event_queue must be at least 1".to_string());
        }

        for pad in &self.pads {
            if !Coordinate::new(pad.x, pad.y).is_in_field() {
                return Err(format!("Pad ({}, {}) is outside the 8x8 field", pad.x, pad.y));
            }

            if matches!(pad.note, Some(note) if note >= 128) {
                return Err(format!("Pad ({}, {}): MIDI notes should be 0 to 127", pad.x, pad.y));
            }

            if let Some(output) = pad.output {
                if output >= self.playback_outputs.len() {
                    return Err(format!(
                        "Pad ({}, {}) uses playback output {output}, but only {} are configured",
                        pad.x,
                        pad.y,
                        self.playback_outputs.len()
                    ));
                }
            }
        }

        Ok(())
    }

    pub(crate) fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    /// The default grid with every override applied, later overrides winning
    pub(crate) fn pad_grid(&self) -> PadGrid {
        let mut grid = PadGrid::new();

        for pad in &self.pads {
            let config = match grid.get_mut(Coordinate::new(pad.x, pad.y)) {
                Some(config) => config,
                None => continue,
            };

            if let Some(effect) = pad.effect {
                config.effect = effect;
            }
            if let Some(hue) = pad.hue {
                config.color = Color::full(hue);
            }
            if let Some(note) = pad.note {
                config.note = note;
            }
            if let Some(output) = pad.output {
                config.output_index = output;
            }
        }

        grid
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("PADLIGHT")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("playback_outputs")
}
