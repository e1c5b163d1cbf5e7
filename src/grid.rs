use crate::color::VELOCITY_TABLE;
use crate::{Color, Coordinate, Effect, Hue};

/// Playback note a fresh pad forwards (middle C)
pub const DEFAULT_NOTE: u8 = 60;

const SIZE: usize = crate::coordinate::FIELD_SIZE as usize;

/// Everything a single pad is configured to do
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PadConfig {
    pub effect: Effect,
    /// Effects paint in this hue with their own lightness, the lightness here is not used for
    /// drawing
    pub color: Color,
    /// Note sent to the playback output instead of the pad's own note
    pub note: u8,
    /// Index into the engine's playback outputs
    pub output_index: usize,
}

/// The 8x8 pad configuration, stored row-major as `[y][x]` like the device numbers its notes.
///
/// The engine only ever reads it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PadGrid {
    rows: [[PadConfig; SIZE]; SIZE],
}

impl PadGrid {
    /// A grid where every pad is a dot forwarding [`DEFAULT_NOTE`] to output 0. The colors walk
    /// through the palette table, so pad `(x, y)` gets table entry `x + 8 * y`; pads past the
    /// end of the table are white and unlit.
    pub fn new() -> Self {
        let mut rows = [[PadConfig::default(); SIZE]; SIZE];

        for (y, row) in rows.iter_mut().enumerate() {
            for (x, pad) in row.iter_mut().enumerate() {
                let color = match VELOCITY_TABLE.get(x + y * SIZE) {
                    Some(&(hue, level, _)) => Color::from_level(hue, level),
                    None => Color::new(Hue::White, 0.0),
                };

                *pad = PadConfig {
                    effect: Effect::Dot,
                    color,
                    note: DEFAULT_NOTE,
                    output_index: 0,
                };
            }
        }

        Self { rows }
    }

    /// A grid with the same configuration on every pad
    pub fn uniform(pad: PadConfig) -> Self {
        Self {
            rows: [[pad; SIZE]; SIZE],
        }
    }

    /// The pad at `coordinate`, or `None` if it's off the field
    pub fn get(&self, coordinate: Coordinate) -> Option<&PadConfig> {
        if !coordinate.is_in_field() {
            return None;
        }
        Some(&self.rows[coordinate.y as usize][coordinate.x as usize])
    }

    pub fn get_mut(&mut self, coordinate: Coordinate) -> Option<&mut PadConfig> {
        if !coordinate.is_in_field() {
            return None;
        }
        Some(&mut self.rows[coordinate.y as usize][coordinate.x as usize])
    }

    /// Replace a pad's configuration. Off-field coordinates are ignored and give `false`.
    pub fn set(&mut self, coordinate: Coordinate, pad: PadConfig) -> bool {
        match self.get_mut(coordinate) {
            Some(slot) => {
                *slot = pad;
                true
            }
            None => false,
        }
    }

    /// The raw rows, indexed `[y][x]`
    pub fn rows(&self) -> &[[PadConfig; SIZE]; SIZE] {
        &self.rows
    }
}

impl Default for PadGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LightnessLevel;

    #[test]
    fn defaults() {
        let grid = PadGrid::new();

        let first = grid.get(Coordinate::new(0, 0)).unwrap();
        assert_eq!(first.effect, Effect::Dot);
        assert_eq!(first.note, DEFAULT_NOTE);
        assert_eq!(first.output_index, 0);
        assert_eq!(first.color, Color::new(Hue::White, 0.0));

        // second palette entry is white at full brightness
        assert_eq!(grid.get(Coordinate::new(1, 0)).unwrap().color, Color::full(Hue::White));

        // (6, 0) is red, dim
        let pad = grid.get(Coordinate::new(6, 0)).unwrap();
        assert_eq!(pad.color.hue, Hue::Red);
        assert_eq!(pad.color.level(), LightnessLevel::Dim);

        // table has 48 entries, the top two rows fall back
        assert_eq!(grid.get(Coordinate::new(0, 6)).unwrap().color, Color::new(Hue::White, 0.0));
        assert_eq!(grid.get(Coordinate::new(7, 5)).unwrap().color.hue, Hue::RedPurple);
    }

    #[test]
    fn indexed_by_row_then_column() {
        let mut grid = PadGrid::uniform(PadConfig::default());
        let pad = PadConfig {
            effect: Effect::Explosion,
            color: Color::full(Hue::Blue),
            note: 36,
            output_index: 2,
        };
        assert!(grid.set(Coordinate::new(2, 5), pad));

        assert_eq!(grid.rows()[5][2], pad);
        assert_eq!(grid.get(Coordinate::new(5, 2)), Some(&PadConfig::default()));
    }

    #[test]
    fn off_field_lookups() {
        let mut grid = PadGrid::new();
        assert_eq!(grid.get(Coordinate::new(8, 0)), None);
        assert_eq!(grid.get(Coordinate::new(0, -1)), None);
        assert!(!grid.set(Coordinate::new(-1, -1), PadConfig::default()));
        assert!(!grid.set(Coordinate::new(3, 8), PadConfig::default()));
        assert_eq!(grid, PadGrid::new());
    }
}
