//! Animation library with compile-time known variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `Animation` trait and renders one frame per
//! call; [`play`] drives the frame loop for a whole session.

mod bouncing_ball;
mod fireworks;
mod heart_beat;
mod hyperspace;
mod pacman;
mod rain;
mod rotate;
mod scroll_text;
mod snake;
mod spiral;
mod wave;

pub use bouncing_ball::{BallState, BouncingBallAnimation};
pub use fireworks::{FireworksAnimation, FireworksPhase};
pub use heart_beat::HeartBeatAnimation;
pub use hyperspace::{FLIGHT_FRAMES, HyperspaceAnimation, STAR_COUNT};
pub use pacman::{PacManAnimation, TRAIL_DECAY, TrailCell};
pub use rain::{RainAnimation, RainVariant};
pub use rotate::RotateAnimation;
pub use scroll_text::{DEFAULT_TEXT, ScrollTextAnimation};
pub use snake::{SNAKE_LENGTH, SnakeAnimation};
pub use spiral::SpiralAnimation;
pub use wave::WaveAnimation;

use embassy_time::Duration;

use crate::display::MatrixDisplay;
use crate::frame_pacer::FramePacer;
use crate::random::Rng;
use crate::{Clock, Maintenance, MatrixDriver};

const ANIMATION_NAME_SPIRAL: &str = "spiral";
const ANIMATION_NAME_RAIN: &str = "rain";
const ANIMATION_NAME_WAVE: &str = "wave";
const ANIMATION_NAME_BOUNCING_BALL: &str = "bouncing_ball";
const ANIMATION_NAME_ROTATE: &str = "rotate";
const ANIMATION_NAME_MATRIX_RAIN: &str = "matrix_rain";
const ANIMATION_NAME_PAC_MAN: &str = "pac_man";
const ANIMATION_NAME_HEART_BEAT: &str = "heart_beat";
const ANIMATION_NAME_FIREWORKS: &str = "fireworks";
const ANIMATION_NAME_SNAKE: &str = "snake";
const ANIMATION_NAME_SCROLL_TEXT: &str = "scroll_text";
const ANIMATION_NAME_HYPERSPACE: &str = "hyperspace";

const ANIMATION_ID_SPIRAL: u8 = 0;
const ANIMATION_ID_RAIN: u8 = 1;
const ANIMATION_ID_WAVE: u8 = 2;
const ANIMATION_ID_BOUNCING_BALL: u8 = 3;
const ANIMATION_ID_ROTATE: u8 = 4;
const ANIMATION_ID_MATRIX_RAIN: u8 = 5;
const ANIMATION_ID_PAC_MAN: u8 = 6;
const ANIMATION_ID_HEART_BEAT: u8 = 7;
const ANIMATION_ID_FIREWORKS: u8 = 8;
const ANIMATION_ID_SNAKE: u8 = 9;
const ANIMATION_ID_SCROLL_TEXT: u8 = 10;
const ANIMATION_ID_HYPERSPACE: u8 = 11;

pub trait Animation {
    /// Render exactly one frame
    ///
    /// Returns how long the frame stays on screen, or `None` once the
    /// animation has nothing left to show.
    fn render_frame<D: MatrixDriver>(
        &mut self,
        display: &mut MatrixDisplay<D>,
        rng: &mut Rng,
    ) -> Option<Duration>;
}

/// Run an animation until the session runs out of time
///
/// The panel is cleared before the first frame and after the last one, and
/// the baseline brightness is restored on the way out.
pub fn play<A, D, C, M>(
    animation: &mut A,
    display: &mut MatrixDisplay<D>,
    rng: &mut Rng,
    pacer: &mut FramePacer<'_, C, M>,
) where
    A: Animation,
    D: MatrixDriver,
    C: Clock,
    M: Maintenance,
{
    display.clear();
    while pacer.is_running() {
        let Some(hold) = animation.render_frame(display, rng) else {
            break;
        };
        pacer.wait(hold);
    }
    display.clear();
    display.restore_brightness();
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    Spiral(SpiralAnimation),
    Rain(RainAnimation),
    Wave(WaveAnimation),
    BouncingBall(BouncingBallAnimation),
    Rotate(RotateAnimation),
    MatrixRain(RainAnimation),
    PacMan(PacManAnimation),
    HeartBeat(HeartBeatAnimation),
    Fireworks(FireworksAnimation),
    Snake(SnakeAnimation),
    ScrollText(ScrollTextAnimation),
    /// Boot sequence, never picked at random
    Hyperspace(HyperspaceAnimation),
}

/// Known animation ids
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Spiral = ANIMATION_ID_SPIRAL,
    Rain = ANIMATION_ID_RAIN,
    Wave = ANIMATION_ID_WAVE,
    BouncingBall = ANIMATION_ID_BOUNCING_BALL,
    Rotate = ANIMATION_ID_ROTATE,
    MatrixRain = ANIMATION_ID_MATRIX_RAIN,
    PacMan = ANIMATION_ID_PAC_MAN,
    HeartBeat = ANIMATION_ID_HEART_BEAT,
    Fireworks = ANIMATION_ID_FIREWORKS,
    Snake = ANIMATION_ID_SNAKE,
    ScrollText = ANIMATION_ID_SCROLL_TEXT,
    Hyperspace = ANIMATION_ID_HYPERSPACE,
}

impl AnimationId {
    /// Animations eligible for random selection
    ///
    /// Rain and Matrix Rain are separate entries, so both variants share one
    /// pool of eleven.
    pub const POOL: [Self; 11] = [
        Self::Spiral,
        Self::Rain,
        Self::Wave,
        Self::BouncingBall,
        Self::Rotate,
        Self::MatrixRain,
        Self::PacMan,
        Self::HeartBeat,
        Self::Fireworks,
        Self::Snake,
        Self::ScrollText,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_SPIRAL => Self::Spiral,
            ANIMATION_ID_RAIN => Self::Rain,
            ANIMATION_ID_WAVE => Self::Wave,
            ANIMATION_ID_BOUNCING_BALL => Self::BouncingBall,
            ANIMATION_ID_ROTATE => Self::Rotate,
            ANIMATION_ID_MATRIX_RAIN => Self::MatrixRain,
            ANIMATION_ID_PAC_MAN => Self::PacMan,
            ANIMATION_ID_HEART_BEAT => Self::HeartBeat,
            ANIMATION_ID_FIREWORKS => Self::Fireworks,
            ANIMATION_ID_SNAKE => Self::Snake,
            ANIMATION_ID_SCROLL_TEXT => Self::ScrollText,
            ANIMATION_ID_HYPERSPACE => Self::Hyperspace,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spiral => ANIMATION_NAME_SPIRAL,
            Self::Rain => ANIMATION_NAME_RAIN,
            Self::Wave => ANIMATION_NAME_WAVE,
            Self::BouncingBall => ANIMATION_NAME_BOUNCING_BALL,
            Self::Rotate => ANIMATION_NAME_ROTATE,
            Self::MatrixRain => ANIMATION_NAME_MATRIX_RAIN,
            Self::PacMan => ANIMATION_NAME_PAC_MAN,
            Self::HeartBeat => ANIMATION_NAME_HEART_BEAT,
            Self::Fireworks => ANIMATION_NAME_FIREWORKS,
            Self::Snake => ANIMATION_NAME_SNAKE,
            Self::ScrollText => ANIMATION_NAME_SCROLL_TEXT,
            Self::Hyperspace => ANIMATION_NAME_HYPERSPACE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_SPIRAL => Some(Self::Spiral),
            ANIMATION_NAME_RAIN => Some(Self::Rain),
            ANIMATION_NAME_WAVE => Some(Self::Wave),
            ANIMATION_NAME_BOUNCING_BALL => Some(Self::BouncingBall),
            ANIMATION_NAME_ROTATE => Some(Self::Rotate),
            ANIMATION_NAME_MATRIX_RAIN => Some(Self::MatrixRain),
            ANIMATION_NAME_PAC_MAN => Some(Self::PacMan),
            ANIMATION_NAME_HEART_BEAT => Some(Self::HeartBeat),
            ANIMATION_NAME_FIREWORKS => Some(Self::Fireworks),
            ANIMATION_NAME_SNAKE => Some(Self::Snake),
            ANIMATION_NAME_SCROLL_TEXT => Some(Self::ScrollText),
            ANIMATION_NAME_HYPERSPACE => Some(Self::Hyperspace),
            _ => None,
        }
    }

    /// Whether the scheduler may pick this animation at random
    pub const fn is_pooled(self) -> bool {
        !matches!(self, Self::Hyperspace)
    }

    /// Build fresh animation state for one run
    pub fn to_slot(self, rng: &mut Rng) -> AnimationSlot {
        match self {
            Self::Spiral => AnimationSlot::Spiral(SpiralAnimation::new()),
            Self::Rain => AnimationSlot::Rain(RainAnimation::new(RainVariant::Rain)),
            Self::Wave => AnimationSlot::Wave(WaveAnimation::new()),
            Self::BouncingBall => {
                AnimationSlot::BouncingBall(BouncingBallAnimation::new(rng))
            }
            Self::Rotate => AnimationSlot::Rotate(RotateAnimation::new()),
            Self::MatrixRain => {
                AnimationSlot::MatrixRain(RainAnimation::new(RainVariant::Matrix))
            }
            Self::PacMan => AnimationSlot::PacMan(PacManAnimation::new()),
            Self::HeartBeat => AnimationSlot::HeartBeat(HeartBeatAnimation::new()),
            Self::Fireworks => AnimationSlot::Fireworks(FireworksAnimation::new(rng)),
            Self::Snake => AnimationSlot::Snake(SnakeAnimation::new()),
            Self::ScrollText => AnimationSlot::ScrollText(ScrollTextAnimation::new()),
            Self::Hyperspace => AnimationSlot::Hyperspace(HyperspaceAnimation::new(rng)),
        }
    }
}

impl AnimationSlot {
    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::Spiral(_) => AnimationId::Spiral,
            Self::Rain(_) => AnimationId::Rain,
            Self::Wave(_) => AnimationId::Wave,
            Self::BouncingBall(_) => AnimationId::BouncingBall,
            Self::Rotate(_) => AnimationId::Rotate,
            Self::MatrixRain(_) => AnimationId::MatrixRain,
            Self::PacMan(_) => AnimationId::PacMan,
            Self::HeartBeat(_) => AnimationId::HeartBeat,
            Self::Fireworks(_) => AnimationId::Fireworks,
            Self::Snake(_) => AnimationId::Snake,
            Self::ScrollText(_) => AnimationId::ScrollText,
            Self::Hyperspace(_) => AnimationId::Hyperspace,
        }
    }
}

impl Animation for AnimationSlot {
    fn render_frame<D: MatrixDriver>(
        &mut self,
        display: &mut MatrixDisplay<D>,
        rng: &mut Rng,
    ) -> Option<Duration> {
        match self {
            Self::Spiral(animation) => animation.render_frame(display, rng),
            Self::Rain(animation) | Self::MatrixRain(animation) => {
                animation.render_frame(display, rng)
            }
            Self::Wave(animation) => animation.render_frame(display, rng),
            Self::BouncingBall(animation) => animation.render_frame(display, rng),
            Self::Rotate(animation) => animation.render_frame(display, rng),
            Self::PacMan(animation) => animation.render_frame(display, rng),
            Self::HeartBeat(animation) => animation.render_frame(display, rng),
            Self::Fireworks(animation) => animation.render_frame(display, rng),
            Self::Snake(animation) => animation.render_frame(display, rng),
            Self::ScrollText(animation) => animation.render_frame(display, rng),
            Self::Hyperspace(animation) => animation.render_frame(display, rng),
        }
    }
}
