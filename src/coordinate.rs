/// Width and height of the playable pad field.
pub const FIELD_SIZE: i32 = 8;

/// Returned by [`coordinate_to_note`] for anything outside the playable field. Note 0 is never a
/// grid pad, so callers treat it as "don't send".
pub const NO_NOTE: u8 = 0;

/// A 2d point on the 8x8 pad field. `(0, 0)` is the bottom-left pad, `x` grows to the right and
/// `y` grows upwards, the same way the device numbers its notes.
///
/// Coordinates may be negative or larger than the field. That happens all the time while
/// rendering patterns near the edges; such coordinates are simply never sent.
///
/// [`Coordinate`] implements addition and subtraction of `(i32, i32)` offset tuples:
///
/// ```rust
/// # use padlight::Coordinate;
/// let pad = Coordinate { x: 3, y: 6 };
///
/// assert_eq!(pad + (4, 4), Coordinate { x: 7, y: 10 });
/// assert_eq!(pad - (4, 4), Coordinate { x: -1, y: 2 });
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate lies on the `[0,7]x[0,7]` playing field
    pub fn is_in_field(self) -> bool {
        (0..FIELD_SIZE).contains(&self.x) && (0..FIELD_SIZE).contains(&self.y)
    }

    /// The device note of this pad, or [`NO_NOTE`] if it's off the field
    pub fn note(self) -> u8 {
        coordinate_to_note(self)
    }
}

impl std::ops::Add<(i32, i32)> for Coordinate {
    type Output = Self;

    fn add(self, offset: (i32, i32)) -> Self {
        let (x_offset, y_offset) = offset;
        Self {
            x: self.x + x_offset,
            y: self.y + y_offset,
        }
    }
}

impl std::ops::Sub<(i32, i32)> for Coordinate {
    type Output = Self;

    fn sub(self, offset: (i32, i32)) -> Self {
        let (x_offset, y_offset) = offset;
        Self {
            x: self.x - x_offset,
            y: self.y - y_offset,
        }
    }
}

/// Convert a device note into a field coordinate.
///
/// The device numbers its pads row-major with a 1-based row and column, row times ten: the
/// bottom-left pad is 11, the top-right pad is 88. Notes in the border row or column (e.g. 10 or
/// 19) produce coordinates outside the field.
pub fn note_to_coordinate(note: u8) -> Coordinate {
    Coordinate {
        x: (note % 10) as i32 - 1,
        y: (note / 10) as i32 - 1,
    }
}

/// Convert a field coordinate into its device note. Returns [`NO_NOTE`] instead of failing when
/// the coordinate is outside `[0,7]x[0,7]`.
pub fn coordinate_to_note(coordinate: Coordinate) -> u8 {
    if !coordinate.is_in_field() {
        return NO_NOTE;
    }

    ((coordinate.y + 1) * 10 + coordinate.x + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_note_round_trips() {
        for note in 1..=88u8 {
            let coordinate = note_to_coordinate(note);
            if coordinate.is_in_field() {
                assert_eq!(coordinate_to_note(coordinate), note);
            }
        }
    }

    #[test]
    fn corners() {
        assert_eq!(note_to_coordinate(11), Coordinate::new(0, 0));
        assert_eq!(note_to_coordinate(18), Coordinate::new(7, 0));
        assert_eq!(note_to_coordinate(81), Coordinate::new(0, 7));
        assert_eq!(note_to_coordinate(88), Coordinate::new(7, 7));
    }

    #[test]
    fn border_notes_are_off_field() {
        for note in [10u8, 19, 20, 89, 90, 99] {
            assert!(!note_to_coordinate(note).is_in_field(), "note {}", note);
        }
    }

    #[test]
    fn out_of_field_maps_to_sentinel() {
        for (x, y) in [(-1, 0), (0, -1), (8, 0), (0, 8), (-5, 12), (100, 100)] {
            assert_eq!(coordinate_to_note(Coordinate::new(x, y)), NO_NOTE);
        }
    }
}
