//! The effect sequencer: which pages to render, in which order, for a press or release.

use std::time::Duration;

use crate::render::{render_page, Frame, LightnessPage};
use crate::{Coordinate, Hue};

/// Default pause between the frames of a multi-frame effect
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(50);

/// The lightness falloff used by the horizontal and vertical effects, centered on index 7. It is
/// wider than the field on purpose; the renderer clips it.
pub const BELL_CURVE: [f32; 15] = [
    0.01, 0.02, 0.03, 0.05, 0.1, 0.3, 0.5, 1.0, 0.5, 0.3, 0.1, 0.05, 0.03, 0.02, 0.01,
];

const N: Option<f32> = None;

/// The four stages of the explosion: a 3x3 block, then each ring lights while the ring inside it
/// goes dark.
#[rustfmt::skip]
const EXPLOSION: [[[Option<f32>; 7]; 7]; 4] = [
    [
        [N, N, N,         N,         N,         N, N],
        [N, N, N,         N,         N,         N, N],
        [N, N, Some(1.0), Some(1.0), Some(1.0), N, N],
        [N, N, Some(1.0), Some(1.0), Some(1.0), N, N],
        [N, N, Some(1.0), Some(1.0), Some(1.0), N, N],
        [N, N, N,         N,         N,         N, N],
        [N, N, N,         N,         N,         N, N],
    ],
    [
        [N, N,         N,         N,         N,         N,         N],
        [N, Some(0.5), Some(0.5), Some(0.5), Some(0.5), Some(0.5), N],
        [N, Some(0.5), Some(0.0), Some(0.0), Some(0.0), Some(0.5), N],
        [N, Some(0.5), Some(0.0), Some(0.0), Some(0.0), Some(0.5), N],
        [N, Some(0.5), Some(0.0), Some(0.0), Some(0.0), Some(0.5), N],
        [N, Some(0.5), Some(0.5), Some(0.5), Some(0.5), Some(0.5), N],
        [N, N,         N,         N,         N,         N,         N],
    ],
    [
        [Some(0.1), Some(0.1), Some(0.1), Some(0.1), Some(0.1), Some(0.1), Some(0.1)],
        [Some(0.1), Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(0.1)],
        [Some(0.1), Some(0.0), N,         N,         N,         Some(0.0), Some(0.1)],
        [Some(0.1), Some(0.0), N,         N,         N,         Some(0.0), Some(0.1)],
        [Some(0.1), Some(0.0), N,         N,         N,         Some(0.0), Some(0.1)],
        [Some(0.1), Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(0.1)],
        [Some(0.1), Some(0.1), Some(0.1), Some(0.1), Some(0.1), Some(0.1), Some(0.1)],
    ],
    [
        [Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(0.0)],
        [Some(0.0), N,         N,         N,         N,         N,         Some(0.0)],
        [Some(0.0), N,         N,         N,         N,         N,         Some(0.0)],
        [Some(0.0), N,         N,         N,         N,         N,         Some(0.0)],
        [Some(0.0), N,         N,         N,         N,         N,         Some(0.0)],
        [Some(0.0), N,         N,         N,         N,         N,         Some(0.0)],
        [Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(0.0)],
    ],
];

/// What a pad shows when it's hit
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Effect {
    /// Light the pressed pad, turn it off on release
    #[default]
    Dot,
    /// Light the pressed row with a falloff around the pressed column
    Horizontal,
    /// Light the pressed column with a falloff around the pressed row
    Vertical,
    /// Rings expanding from the pressed pad. Releases are ignored.
    Explosion,
}

/// An ordered list of pages with a fixed pause between them
#[derive(Debug, Clone, PartialEq)]
pub struct LightnessAnimation {
    pub pages: Vec<LightnessPage>,
    pub frame_delay: Duration,
}

impl LightnessAnimation {
    pub fn single(page: LightnessPage) -> Self {
        Self {
            pages: vec![page],
            frame_delay: Duration::ZERO,
        }
    }
}

/// The outcome of the sequencer for a single note event: an animation and the hue to paint it in.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectPlan {
    pub hue: Hue,
    pub animation: LightnessAnimation,
}

impl EffectPlan {
    /// Render every page of the animation around `pressed`
    pub fn render(&self, pressed: Coordinate) -> Vec<Frame> {
        self.animation
            .pages
            .iter()
            .map(|page| render_page(page, self.hue, pressed))
            .collect()
    }

    pub fn frame_delay(&self) -> Duration {
        self.animation.frame_delay
    }
}

fn dot_page() -> LightnessPage {
    LightnessPage::new(vec![vec![Some(1.0)]], Coordinate::new(0, 0))
}

fn horizontal_page() -> LightnessPage {
    let row: Vec<Option<f32>> = BELL_CURVE.iter().copied().map(Some).collect();
    LightnessPage::new(vec![row], Coordinate::new(7, 0))
}

fn vertical_page() -> LightnessPage {
    let rows: Vec<Vec<Option<f32>>> = BELL_CURVE.iter().map(|&lightness| vec![Some(lightness)]).collect();
    LightnessPage::new(rows, Coordinate::new(0, 7))
}

/// The explosion animation, one page per stage
pub fn explosion(frame_delay: Duration) -> LightnessAnimation {
    let pages = EXPLOSION
        .iter()
        .map(|stage| LightnessPage::from_rows(stage, Coordinate::new(3, 3)))
        .collect();

    LightnessAnimation { pages, frame_delay }
}

impl Effect {
    /// Decide what to draw for a note event on a pad configured with this effect and `hue`.
    ///
    /// A velocity of 0 is a release. Dot, horizontal and vertical redraw their geometry in black
    /// on release; the explosion returns `None` because it cleans up after itself.
    pub fn plan(self, hue: Hue, velocity: u8, frame_delay: Duration) -> Option<EffectPlan> {
        let released = velocity == 0;

        let page = match self {
            Effect::Explosion => {
                if released {
                    return None;
                }
                return Some(EffectPlan {
                    hue,
                    animation: explosion(frame_delay),
                });
            }
            Effect::Dot => dot_page(),
            Effect::Horizontal => horizontal_page(),
            Effect::Vertical => vertical_page(),
        };

        let (hue, page) = if released {
            (Hue::Black, page.blackout())
        } else {
            (hue, page)
        };

        Some(EffectPlan {
            hue,
            animation: LightnessAnimation::single(page),
        })
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Effect::Dot => "dot",
            Effect::Horizontal => "horizontal",
            Effect::Vertical => "vertical",
            Effect::Explosion => "explosion",
        })
    }
}
