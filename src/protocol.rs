use crate::{Color, Coordinate, NO_NOTE};

/// Header of the "set LED RGB" SysEx message, up to and including the command byte
pub const SYSEX_RGB_HEADER: [u8; 7] = [0xF0, 0x00, 0x20, 0x29, 0x02, 0x18, 0x0B];
pub const SYSEX_END: u8 = 0xF7;

/// How an output device wants its LEDs addressed
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Protocol {
    /// A plain note message whose velocity picks a palette color. Only four brightness steps per
    /// hue.
    Legacy,
    /// One SysEx message per LED with 6-bit RGB channels
    #[default]
    Extended,
}

/// A single encoded LED update, ready to be written to the device
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LedMessage {
    /// `[status, note, velocity]`
    Note([u8; 3]),
    /// `F0 00 20 29 02 18 0B <note> <r> <g> <b> F7`
    SysEx([u8; 12]),
}

impl LedMessage {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            LedMessage::Note(bytes) => bytes,
            LedMessage::SysEx(bytes) => bytes,
        }
    }
}

impl Protocol {
    /// Encode one LED update. `status` is echoed into legacy note messages, so a press on
    /// channel 3 lights the LED through channel 3.
    ///
    /// Returns `None` for coordinates off the pad field; those are never sent.
    pub fn encode(self, status: u8, coordinate: Coordinate, color: Color) -> Option<LedMessage> {
        let note = coordinate.note();
        if note == NO_NOTE {
            return None;
        }

        match self {
            Protocol::Legacy => Some(LedMessage::Note([status, note, color.velocity()])),
            Protocol::Extended => {
                let rgb = color.rgb();
                let [h0, h1, h2, h3, h4, h5, h6] = SYSEX_RGB_HEADER;
                Some(LedMessage::SysEx([
                    h0,
                    h1,
                    h2,
                    h3,
                    h4,
                    h5,
                    h6,
                    note,
                    rgb.red(),
                    rgb.green(),
                    rgb.blue(),
                    SYSEX_END,
                ]))
            }
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Protocol::Legacy => "legacy",
            Protocol::Extended => "extended",
        })
    }
}
