use crate::{Color, Coordinate, Hue};

/// One rendered frame: every lit (or cleared) pad with its color, in send order.
pub type Frame = Vec<(Coordinate, Color)>;

/// A small lightness pattern that gets stamped onto the pad field, aligned on `center`.
///
/// `rows` are stored the way you would draw them: the first row is the top of the pattern.
/// Rows may have different lengths. `None` cells are transparent and produce no message, while
/// `Some(0.0)` actively turns a pad off.
///
/// `center` is in pattern coordinates, which count columns from the left and rows from the
/// bottom, matching the pad field.
#[derive(Debug, Clone, PartialEq)]
pub struct LightnessPage {
    pub rows: Vec<Vec<Option<f32>>>,
    pub center: Coordinate,
}

impl LightnessPage {
    pub fn new(rows: Vec<Vec<Option<f32>>>, center: Coordinate) -> Self {
        Self { rows, center }
    }

    /// Build a page from static row data, e.g. a const array
    pub fn from_rows<R: AsRef<[Option<f32>]>>(rows: &[R], center: Coordinate) -> Self {
        let rows = rows.iter().map(|row| row.as_ref().to_vec()).collect();
        Self { rows, center }
    }

    /// The same geometry with every present cell set to zero
    pub fn blackout(&self) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.map(|_| 0.0)).collect())
            .collect();
        Self {
            rows,
            center: self.center,
        }
    }

    /// Iterate over the present cells as `(column, row, lightness)`, rows counted bottom-up,
    /// bottom row first.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, f32)> + '_ {
        self.rows.iter().rev().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(column, cell)| cell.map(|lightness| (column as i32, row as i32, lightness)))
        })
    }
}

/// Stamp `page` onto the field so that its center lands on `pressed`, painting every present
/// cell in `hue`. Cells falling outside the 8x8 field are dropped.
pub fn render_page(page: &LightnessPage, hue: Hue, pressed: Coordinate) -> Frame {
    let origin = pressed - (page.center.x, page.center.y);

    page.cells()
        .map(|(column, row, lightness)| (origin + (column, row), Color::new(hue, lightness)))
        .filter(|(coordinate, _)| coordinate.is_in_field())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(size: usize, lightness: f32) -> LightnessPage {
        LightnessPage::new(vec![vec![Some(lightness); size]; size], Coordinate::new(3, 3))
    }

    #[test]
    fn centered_page_lands_on_pressed() {
        let page = LightnessPage::new(vec![vec![Some(1.0)]], Coordinate::new(0, 0));
        let frame = render_page(&page, Hue::Red, Coordinate::new(5, 2));
        assert_eq!(frame, vec![(Coordinate::new(5, 2), Color::full(Hue::Red))]);
    }

    #[test]
    fn clips_at_bottom_left_corner() {
        let frame = render_page(&filled(7, 1.0), Hue::Blue, Coordinate::new(0, 0));

        // only the upper-right 4x4 quadrant of the 7x7 page is on the field
        assert_eq!(frame.len(), 16);
        for (coordinate, _) in &frame {
            assert!(coordinate.is_in_field());
            assert!(coordinate.x <= 3 && coordinate.y <= 3);
        }
    }

    #[test]
    fn clips_everything_far_away() {
        let frame = render_page(&filled(7, 1.0), Hue::Blue, Coordinate::new(20, -20));
        assert!(frame.is_empty());
    }

    #[test]
    fn rows_grow_upwards() {
        // top row is stored first
        let page = LightnessPage::new(
            vec![vec![Some(0.5)], vec![None], vec![Some(1.0)]],
            Coordinate::new(0, 0),
        );
        let frame = render_page(&page, Hue::Green, Coordinate::new(4, 4));
        assert_eq!(
            frame,
            vec![
                (Coordinate::new(4, 4), Color::new(Hue::Green, 1.0)),
                (Coordinate::new(4, 6), Color::new(Hue::Green, 0.5)),
            ]
        );
    }

    #[test]
    fn ragged_rows_and_transparent_cells() {
        let page = LightnessPage::new(
            vec![vec![Some(1.0), None, Some(1.0)], vec![Some(0.0)]],
            Coordinate::new(0, 0),
        );
        let cells: Vec<_> = page.cells().collect();
        assert_eq!(cells, vec![(0, 0, 0.0), (0, 1, 1.0), (2, 1, 1.0)]);
    }

    #[test]
    fn rendering_leaves_page_untouched() {
        let page = LightnessPage::new(vec![vec![Some(1.0)], vec![Some(0.5)]], Coordinate::new(0, 0));
        let before = page.clone();
        render_page(&page, Hue::Red, Coordinate::new(1, 1));
        render_page(&page, Hue::Red, Coordinate::new(1, 1));
        assert_eq!(page, before);
    }

    #[test]
    fn blackout_keeps_geometry() {
        let page = LightnessPage::new(vec![vec![Some(1.0), None, Some(0.3)]], Coordinate::new(1, 0));
        let dark = page.blackout();
        assert_eq!(dark.rows, vec![vec![Some(0.0), None, Some(0.0)]]);
        assert_eq!(dark.center, page.center);
    }
}
