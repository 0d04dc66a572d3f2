//! Backdrop palette selection and the cross-fade between palettes

use ratatui::style::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::condition::ConditionCategory;

/// Plain RGB triple, kept independent of any renderer's color type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear interpolation; `t` is clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// Vertical gradient painted behind the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Backdrop {
    pub top: Rgb,
    pub bottom: Rgb,
}

impl Backdrop {
    pub const fn new(top: Rgb, bottom: Rgb) -> Self {
        Self { top, bottom }
    }

    pub fn blend(self, other: Backdrop, t: f32) -> Backdrop {
        Backdrop {
            top: self.top.lerp(other.top, t),
            bottom: self.bottom.lerp(other.bottom, t),
        }
    }

    /// Color of `row` out of `height` rows, top to bottom.
    pub fn row_color(&self, row: u16, height: u16) -> Rgb {
        if height <= 1 {
            return self.top;
        }
        let t = row.min(height - 1) as f32 / (height - 1) as f32;
        self.top.lerp(self.bottom, t)
    }
}

pub const NIGHT: Backdrop = Backdrop::new(Rgb(12, 16, 38), Rgb(38, 48, 86));

const CLEAR_DAY: Backdrop = Backdrop::new(Rgb(41, 128, 205), Rgb(135, 206, 250));
const CLOUDS_DAY: Backdrop = Backdrop::new(Rgb(84, 110, 122), Rgb(176, 190, 197));
const RAIN_DAY: Backdrop = Backdrop::new(Rgb(44, 62, 80), Rgb(93, 116, 140));
const DRIZZLE_DAY: Backdrop = Backdrop::new(Rgb(72, 99, 116), Rgb(139, 164, 178));
const THUNDERSTORM_DAY: Backdrop = Backdrop::new(Rgb(33, 33, 52), Rgb(88, 72, 118));
const SNOW_DAY: Backdrop = Backdrop::new(Rgb(120, 144, 156), Rgb(207, 216, 220));
const UNKNOWN_DAY: Backdrop = Backdrop::new(Rgb(66, 66, 72), Rgb(120, 120, 128));

/// Night is local hour before 06:00 or from 18:00 on.
pub fn is_night(hour: u8) -> bool {
    hour < 6 || hour >= 18
}

/// Fixed palette for a condition category; night overrides every category.
pub fn backdrop_for(category: ConditionCategory, night: bool) -> Backdrop {
    if night {
        return NIGHT;
    }
    match category {
        ConditionCategory::Clear => CLEAR_DAY,
        ConditionCategory::Clouds => CLOUDS_DAY,
        ConditionCategory::Rain => RAIN_DAY,
        ConditionCategory::Drizzle => DRIZZLE_DAY,
        ConditionCategory::Thunderstorm => THUNDERSTORM_DAY,
        ConditionCategory::Snow => SNOW_DAY,
        ConditionCategory::Unknown => UNKNOWN_DAY,
    }
}

/// Animation ticks for a full cross-fade.
pub const FADE_TICKS: u32 = 40;

/// Interval between cross-fade ticks.
pub const FADE_TICK_MS: u64 = 15;

/// Committed palette plus an optional staged palette fading in over it
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Crossfade {
    pub committed: Backdrop,
    pub staged: Option<Backdrop>,
    pub elapsed: u32,
}

impl Default for Crossfade {
    fn default() -> Self {
        Self::new(backdrop_for(ConditionCategory::Unknown, false))
    }
}

impl Crossfade {
    pub fn new(committed: Backdrop) -> Self {
        Self {
            committed,
            staged: None,
            elapsed: 0,
        }
    }

    /// Palette the screen is heading towards.
    pub fn target(&self) -> Backdrop {
        self.staged.unwrap_or(self.committed)
    }

    pub fn is_fading(&self) -> bool {
        self.staged.is_some()
    }

    /// Opacity of the staged palette, `0.0..=1.0`.
    pub fn opacity(&self) -> f32 {
        if self.staged.is_none() {
            return 0.0;
        }
        (self.elapsed as f32 / FADE_TICKS.max(1) as f32).min(1.0)
    }

    /// Palette to paint right now.
    pub fn current(&self) -> Backdrop {
        match self.staged {
            Some(staged) => self.committed.blend(staged, self.opacity()),
            None => self.committed,
        }
    }

    /// Point the fade at `next`. Returns whether anything changed.
    ///
    /// A retarget mid-fade commits the blended palette on screen and fades
    /// from there, so the painted colors never jump.
    pub fn retarget(&mut self, next: Backdrop) -> bool {
        if next == self.target() {
            return false;
        }
        self.committed = self.current();
        self.elapsed = 0;
        self.staged = (next != self.committed).then_some(next);
        true
    }

    /// Advance one animation tick; commits the staged palette when done.
    pub fn advance(&mut self) {
        let Some(staged) = self.staged else {
            return;
        };
        self.elapsed += 1;
        if self.elapsed >= FADE_TICKS {
            self.committed = staged;
            self.staged = None;
            self.elapsed = 0;
        }
    }
}
