/// The maximum value of an RGB LED channel in the SysEx color message
pub const MAX_RGB: u8 = 0x3F;

/// A symbolic color, independent of brightness.
///
/// Twelve named hues plus black. `White` is a hue like any other; `Black` is what release
/// effects paint with and always encodes as "off".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Hue {
    #[default]
    Black,
    White,
    Red,
    Orange,
    Yellow,
    YellowGreen,
    Green,
    BlueGreen,
    LightBlue,
    Blue,
    Purple,
    Pink,
    RedPurple,
}

impl Hue {
    pub const ALL: [Hue; 13] = [
        Hue::Black,
        Hue::White,
        Hue::Red,
        Hue::Orange,
        Hue::Yellow,
        Hue::YellowGreen,
        Hue::Green,
        Hue::BlueGreen,
        Hue::LightBlue,
        Hue::Blue,
        Hue::Purple,
        Hue::Pink,
        Hue::RedPurple,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Hue::Black => "black",
            Hue::White => "white",
            Hue::Red => "red",
            Hue::Orange => "orange",
            Hue::Yellow => "yellow",
            Hue::YellowGreen => "yellow-green",
            Hue::Green => "green",
            Hue::BlueGreen => "blue-green",
            Hue::LightBlue => "light-blue",
            Hue::Blue => "blue",
            Hue::Purple => "purple",
            Hue::Pink => "pink",
            Hue::RedPurple => "red-purple",
        }
    }

    /// The full-brightness SysEx color of this hue. Hardware constants, each channel `0..=0x3F`.
    pub fn base_rgb(self) -> RgbColor {
        let (r, g, b) = match self {
            Hue::Black => (0x00, 0x00, 0x00),
            Hue::White => (0x3F, 0x3F, 0x3F),
            Hue::Red => (0x3F, 0x00, 0x00),
            Hue::Orange => (0x3F, 0x1A, 0x00),
            Hue::Yellow => (0x3F, 0x3F, 0x00),
            Hue::YellowGreen => (0x1F, 0x3F, 0x00),
            Hue::Green => (0x00, 0x3F, 0x00),
            Hue::BlueGreen => (0x00, 0x3F, 0x1F),
            Hue::LightBlue => (0x00, 0x2F, 0x3F),
            Hue::Blue => (0x00, 0x00, 0x3F),
            Hue::Purple => (0x1F, 0x00, 0x3F),
            Hue::Pink => (0x3F, 0x1F, 0x2F),
            Hue::RedPurple => (0x3F, 0x00, 0x1F),
        };
        RgbColor { r, g, b }
    }
}

impl std::fmt::Display for Hue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHue(pub String);

impl std::fmt::Display for UnknownHue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown hue {:?}", self.0)
    }
}

impl std::error::Error for UnknownHue {}

impl std::str::FromStr for Hue {
    type Err = UnknownHue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Hue::ALL
            .iter()
            .copied()
            .find(|hue| hue.name() == wanted)
            .ok_or_else(|| UnknownHue(s.to_string()))
    }
}

/// The four brightness steps of the palette (velocity) protocol.
///
/// The numbering follows the order of the shades within each hue's column of the device palette,
/// so `Full` (1) is the brightest and larger numbers get darker. `Off` is always velocity 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LightnessLevel {
    #[default]
    Off = 0,
    Full = 1,
    Dim = 2,
    Faint = 3,
}

impl LightnessLevel {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Off),
            1 => Some(Self::Full),
            2 => Some(Self::Dim),
            3 => Some(Self::Faint),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Quantize a continuous lightness for the palette protocol
    pub fn from_lightness(lightness: f32) -> Self {
        let lightness = clamp_lightness(lightness);
        if lightness <= 0.0 {
            Self::Off
        } else if lightness >= 0.5 {
            Self::Full
        } else if lightness >= 0.1 {
            Self::Dim
        } else {
            Self::Faint
        }
    }

    /// A continuous lightness that quantizes back to this level
    pub fn representative(self) -> f32 {
        match self {
            Self::Off => 0.0,
            Self::Full => 1.0,
            Self::Dim => 0.3,
            Self::Faint => 0.05,
        }
    }
}

/// Clamp into `0..=1`. NaN counts as dark.
pub fn clamp_lightness(lightness: f32) -> f32 {
    if lightness.is_nan() {
        return 0.0;
    }
    lightness.clamp(0.0, 1.0)
}

/// A hue with a continuous brightness in `0..=1`.
///
/// The RGB protocol uses the lightness directly, the palette protocol quantizes it into a
/// [`LightnessLevel`] first.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub hue: Hue,
    pub lightness: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        hue: Hue::Black,
        lightness: 0.0,
    };

    /// Create a new color. The lightness is clamped to `0..=1`.
    pub fn new(hue: Hue, lightness: f32) -> Self {
        Self {
            hue,
            lightness: clamp_lightness(lightness),
        }
    }

    /// The color at full brightness
    pub fn full(hue: Hue) -> Self {
        Self::new(hue, 1.0)
    }

    pub fn from_level(hue: Hue, level: LightnessLevel) -> Self {
        Self::new(hue, level.representative())
    }

    pub fn level(&self) -> LightnessLevel {
        LightnessLevel::from_lightness(self.lightness)
    }

    /// Encode for the palette protocol. See [`color_to_velocity`].
    pub fn velocity(&self) -> u8 {
        color_to_velocity(self.hue, self.level())
    }

    /// Encode for the SysEx RGB protocol. See [`color_to_rgb`].
    pub fn rgb(&self) -> RgbColor {
        color_to_rgb(self.hue, self.lightness)
    }
}

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Default)]
/// An RGB color. Each component may only go up to 63.
pub struct RgbColor {
    r: u8,
    g: u8,
    b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor { r: 0, g: 0, b: 0 };

    /// Create a new RgbColor from the individual component values
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        let self_ = Self { r, g, b };
        assert!(self_.is_valid());
        self_
    }

    /// Check whether the rgb color is valid - each component may only go up to MAX_RGB.
    pub fn is_valid(&self) -> bool {
        self.r <= MAX_RGB && self.g <= MAX_RGB && self.b <= MAX_RGB
    }

    pub fn red(&self) -> u8 {
        self.r
    }
    pub fn green(&self) -> u8 {
        self.g
    }
    pub fn blue(&self) -> u8 {
        self.b
    }

    fn scale(self, lightness: f32) -> Self {
        let channel = |c: u8| (c as f32 * lightness).floor() as u8;
        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }
}

/// Velocity of each lit (hue, level) pair in the device palette. Every `Off` level, and every
/// black color, is velocity 0.
#[rustfmt::skip]
pub const VELOCITY_TABLE: [(Hue, LightnessLevel, u8); 48] = [
    (Hue::White,       LightnessLevel::Off, 0), (Hue::White,       LightnessLevel::Full, 3),  (Hue::White,       LightnessLevel::Dim, 2),  (Hue::White,       LightnessLevel::Faint, 1),
    (Hue::Red,         LightnessLevel::Off, 0), (Hue::Red,         LightnessLevel::Full, 5),  (Hue::Red,         LightnessLevel::Dim, 6),  (Hue::Red,         LightnessLevel::Faint, 7),
    (Hue::Orange,      LightnessLevel::Off, 0), (Hue::Orange,      LightnessLevel::Full, 9),  (Hue::Orange,      LightnessLevel::Dim, 10), (Hue::Orange,      LightnessLevel::Faint, 11),
    (Hue::Yellow,      LightnessLevel::Off, 0), (Hue::Yellow,      LightnessLevel::Full, 13), (Hue::Yellow,      LightnessLevel::Dim, 14), (Hue::Yellow,      LightnessLevel::Faint, 15),
    (Hue::YellowGreen, LightnessLevel::Off, 0), (Hue::YellowGreen, LightnessLevel::Full, 17), (Hue::YellowGreen, LightnessLevel::Dim, 18), (Hue::YellowGreen, LightnessLevel::Faint, 19),
    (Hue::Green,       LightnessLevel::Off, 0), (Hue::Green,       LightnessLevel::Full, 21), (Hue::Green,       LightnessLevel::Dim, 22), (Hue::Green,       LightnessLevel::Faint, 23),
    (Hue::BlueGreen,   LightnessLevel::Off, 0), (Hue::BlueGreen,   LightnessLevel::Full, 33), (Hue::BlueGreen,   LightnessLevel::Dim, 34), (Hue::BlueGreen,   LightnessLevel::Faint, 35),
    (Hue::LightBlue,   LightnessLevel::Off, 0), (Hue::LightBlue,   LightnessLevel::Full, 37), (Hue::LightBlue,   LightnessLevel::Dim, 38), (Hue::LightBlue,   LightnessLevel::Faint, 39),
    (Hue::Blue,        LightnessLevel::Off, 0), (Hue::Blue,        LightnessLevel::Full, 45), (Hue::Blue,        LightnessLevel::Dim, 46), (Hue::Blue,        LightnessLevel::Faint, 47),
    (Hue::Purple,      LightnessLevel::Off, 0), (Hue::Purple,      LightnessLevel::Full, 49), (Hue::Purple,      LightnessLevel::Dim, 50), (Hue::Purple,      LightnessLevel::Faint, 51),
    (Hue::Pink,        LightnessLevel::Off, 0), (Hue::Pink,        LightnessLevel::Full, 57), (Hue::Pink,        LightnessLevel::Dim, 58), (Hue::Pink,        LightnessLevel::Faint, 59),
    (Hue::RedPurple,   LightnessLevel::Off, 0), (Hue::RedPurple,   LightnessLevel::Full, 53), (Hue::RedPurple,   LightnessLevel::Dim, 54), (Hue::RedPurple,   LightnessLevel::Faint, 55),
];

/// What [`velocity_to_color`] answers for velocities that aren't in the table
pub const FALLBACK_COLOR: (Hue, LightnessLevel) = (Hue::Black, LightnessLevel::Off);

/// Palette velocity of a (hue, level) pair
pub fn color_to_velocity(hue: Hue, level: LightnessLevel) -> u8 {
    if hue == Hue::Black || level == LightnessLevel::Off {
        return 0;
    }

    VELOCITY_TABLE
        .iter()
        .find(|&&(h, l, _)| h == hue && l == level)
        .map(|&(_, _, velocity)| velocity)
        .unwrap_or(0)
}

/// Reverse palette lookup. Velocity 0 and anything unmapped give [`FALLBACK_COLOR`].
pub fn velocity_to_color(velocity: u8) -> (Hue, LightnessLevel) {
    if velocity == 0 {
        return FALLBACK_COLOR;
    }

    VELOCITY_TABLE
        .iter()
        .find(|&&(_, _, v)| v == velocity)
        .map(|&(hue, level, _)| (hue, level))
        .unwrap_or(FALLBACK_COLOR)
}

/// The hue's base color scaled by `lightness` (clamped to `0..=1`), rounding each channel down.
pub fn color_to_rgb(hue: Hue, lightness: f32) -> RgbColor {
    hue.base_rgb().scale(clamp_lightness(lightness))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_table_entries_round_trip() {
        for &(hue, level, velocity) in VELOCITY_TABLE.iter() {
            if level == LightnessLevel::Off {
                continue;
            }
            assert_eq!(color_to_velocity(hue, level), velocity);
            assert_eq!(velocity_to_color(velocity), (hue, level));
        }
    }

    #[test]
    fn off_table_entries_collapse_to_black() {
        // all twelve off entries share velocity 0, so the hue is lost on the way back
        let off: Vec<_> = VELOCITY_TABLE
            .iter()
            .filter(|&&(_, level, _)| level == LightnessLevel::Off)
            .collect();
        assert_eq!(off.len(), 12);

        for &&(hue, level, velocity) in &off {
            assert_eq!(velocity, 0);
            assert_eq!(color_to_velocity(hue, level), 0);
            assert_eq!(velocity_to_color(velocity), FALLBACK_COLOR);
        }
    }

    #[test]
    fn lit_velocities_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for &(_, level, velocity) in VELOCITY_TABLE.iter() {
            if level != LightnessLevel::Off {
                assert!(seen.insert(velocity), "velocity {} used twice", velocity);
                assert!(velocity <= 127);
            }
        }
        assert_eq!(seen.len(), 36);
    }

    #[test]
    fn black_and_off_are_velocity_zero() {
        for hue in Hue::ALL {
            assert_eq!(color_to_velocity(hue, LightnessLevel::Off), 0);
        }
        for level in [LightnessLevel::Full, LightnessLevel::Dim, LightnessLevel::Faint] {
            assert_eq!(color_to_velocity(Hue::Black, level), 0);
        }
    }

    #[test]
    fn unmapped_velocity_falls_back_to_black() {
        assert_eq!(velocity_to_color(0), FALLBACK_COLOR);
        assert_eq!(velocity_to_color(4), FALLBACK_COLOR);
        assert_eq!(velocity_to_color(127), FALLBACK_COLOR);
    }

    #[test]
    fn rgb_extremes() {
        for hue in Hue::ALL {
            assert_eq!(color_to_rgb(hue, 1.0), hue.base_rgb());
            assert_eq!(color_to_rgb(hue, 0.0), RgbColor::BLACK);
            assert!(hue.base_rgb().is_valid());
        }
        assert_eq!(color_to_rgb(Hue::Black, 1.0), RgbColor::BLACK);
    }

    #[test]
    fn rgb_is_clamped() {
        assert_eq!(color_to_rgb(Hue::Red, 7.5), Hue::Red.base_rgb());
        assert_eq!(color_to_rgb(Hue::Red, -1.0), RgbColor::BLACK);
        assert_eq!(color_to_rgb(Hue::Red, f32::NAN), RgbColor::BLACK);
    }

    #[test]
    fn rgb_rounds_down() {
        // 0x3F * 0.5 = 31.5
        assert_eq!(color_to_rgb(Hue::White, 0.5), RgbColor::new(31, 31, 31));
        assert_eq!(color_to_rgb(Hue::Orange, 0.1), RgbColor::new(6, 2, 0));
    }

    #[test]
    fn rgb_is_monotonic_in_lightness() {
        for hue in Hue::ALL {
            let mut previous = RgbColor::BLACK;
            for step in 0..=100 {
                let rgb = color_to_rgb(hue, step as f32 / 100.0);
                assert!(rgb.red() >= previous.red());
                assert!(rgb.green() >= previous.green());
                assert!(rgb.blue() >= previous.blue());
                previous = rgb;
            }
        }
    }

    #[test]
    fn quantization() {
        assert_eq!(LightnessLevel::from_lightness(0.0), LightnessLevel::Off);
        assert_eq!(LightnessLevel::from_lightness(0.01), LightnessLevel::Faint);
        assert_eq!(LightnessLevel::from_lightness(0.05), LightnessLevel::Faint);
        assert_eq!(LightnessLevel::from_lightness(0.1), LightnessLevel::Dim);
        assert_eq!(LightnessLevel::from_lightness(0.3), LightnessLevel::Dim);
        assert_eq!(LightnessLevel::from_lightness(0.5), LightnessLevel::Full);
        assert_eq!(LightnessLevel::from_lightness(1.0), LightnessLevel::Full);

        for level in [
            LightnessLevel::Off,
            LightnessLevel::Full,
            LightnessLevel::Dim,
            LightnessLevel::Faint,
        ] {
            assert_eq!(LightnessLevel::from_lightness(level.representative()), level);
        }
    }

    #[test]
    fn hue_names_parse() {
        for hue in Hue::ALL {
            assert_eq!(hue.to_string().parse::<Hue>(), Ok(hue));
        }
        assert_eq!("Yellow_Green".parse::<Hue>(), Ok(Hue::YellowGreen));
        assert!("mauve".parse::<Hue>().is_err());
    }
}
