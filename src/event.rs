use crate::coordinate::note_to_coordinate;
use crate::Coordinate;

const NOTE_OFF: u8 = 0x80;
const NOTE_ON: u8 = 0x90;

/// A note message from the input device, as raw bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NoteEvent {
    pub status: u8,
    pub note: u8,
    pub velocity: u8,
}

impl NoteEvent {
    pub fn new(status: u8, note: u8, velocity: u8) -> Self {
        Self {
            status,
            note,
            velocity,
        }
    }

    /// Note-on on channel 1
    pub fn press(note: u8, velocity: u8) -> Self {
        Self::new(NOTE_ON, note, velocity)
    }

    /// Zero-velocity note-on on channel 1, which is how the pads report a release
    pub fn release(note: u8) -> Self {
        Self::new(NOTE_ON, note, 0)
    }

    /// Decode a raw MIDI message. Only note-on and note-off are of interest, anything else
    /// (clock, CC, SysEx replies...) gives `None`.
    ///
    /// A note-off is turned into a zero velocity event with its status kept, so that downstream
    /// a release always looks the same.
    pub fn decode(data: &[u8]) -> Option<Self> {
        match *data {
            [status, note, velocity] if status & 0xF0 == NOTE_ON => {
                Some(Self::new(status, note & 0x7F, velocity & 0x7F))
            }
            [status, note, _] if status & 0xF0 == NOTE_OFF => Some(Self::new(status, note & 0x7F, 0)),
            _ => None,
        }
    }

    pub fn is_release(&self) -> bool {
        self.velocity == 0
    }

    /// The pad this event came from
    pub fn coordinate(&self) -> Coordinate {
        note_to_coordinate(self.note)
    }

    pub fn to_bytes(self) -> [u8; 3] {
        [self.status, self.note, self.velocity]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_note_on() {
        assert_eq!(NoteEvent::decode(&[0x90, 44, 127]), Some(NoteEvent::new(0x90, 44, 127)));
        assert_eq!(NoteEvent::decode(&[0x93, 11, 20]), Some(NoteEvent::new(0x93, 11, 20)));
    }

    #[test]
    fn note_off_becomes_release() {
        let event = NoteEvent::decode(&[0x80, 44, 0x40]).unwrap();
        assert!(event.is_release());
        assert_eq!(event.to_bytes(), [0x80, 44, 0]);
    }

    #[test]
    fn ignores_everything_else() {
        assert_eq!(NoteEvent::decode(&[0xB0, 104, 127]), None);
        assert_eq!(NoteEvent::decode(&[0xF8]), None);
        assert_eq!(NoteEvent::decode(&[0xF0, 0x00, 0x20, 0x29, 0x02, 0x18, 0x15, 0xF7]), None);
        assert_eq!(NoteEvent::decode(&[]), None);
    }

    #[test]
    fn coordinate_of_pad() {
        assert_eq!(NoteEvent::press(44, 127).coordinate(), Coordinate::new(3, 3));
        assert_eq!(NoteEvent::release(58).coordinate(), Coordinate::new(7, 4));
    }
}
