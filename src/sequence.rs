//! Brightness sequence generators.
//!
//! Both generators walk the RGB color cube one PWM level per call. Each call
//! either moves the channels of the current phase by one level, or, when the
//! phase has reached its limit, leaves the brightness alone and enters the next
//! phase. A phase therefore takes `MAX_BRIGHTNESS + 1` calls.

use crate::types::{ALL_OFF, Brightness, MAX_BRIGHTNESS, RED_CORNER};

const STEPS_PER_PHASE: u32 = MAX_BRIGHTNESS as u32 + 1;

/// A deterministic phase machine advanced once per timer expiry.
pub trait BrightnessSequence {
    /// Calls to [`step`](Self::step) needed to return to the starting point.
    const STEPS_PER_CYCLE: u32;

    /// Returns to the starting phase and brightness.
    fn reset(&mut self);

    /// Advances by one unit and returns the new brightness.
    fn step(&mut self) -> Brightness;

    /// Current brightness.
    fn brightness(&self) -> Brightness;
}

/// Phases of [`CubeEdge`], one per cube edge, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgePhase {
    BlueUp,
    RedDown,
    GreenUp,
    BlueDown,
    RedUp,
    GreenDown,
}

/// Walks six edges of the color cube, ramping one channel at a time.
///
/// Starts at the red corner and passes through
/// red → magenta → blue → cyan → green → yellow → red.
#[derive(Debug, Clone)]
pub struct CubeEdge {
    phase: EdgePhase,
    level: Brightness,
}

impl CubeEdge {
    pub const fn new() -> Self {
        Self {
            phase: EdgePhase::BlueUp,
            level: RED_CORNER,
        }
    }

    pub fn phase(&self) -> EdgePhase {
        self.phase
    }
}

impl Default for CubeEdge {
    fn default() -> Self {
        Self::new()
    }
}

impl BrightnessSequence for CubeEdge {
    const STEPS_PER_CYCLE: u32 = 6 * STEPS_PER_PHASE;

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn step(&mut self) -> Brightness {
        let c = &mut self.level;
        match self.phase {
            EdgePhase::BlueUp => {
                if c.blue < MAX_BRIGHTNESS {
                    c.blue += 1;
                } else {
                    self.phase = EdgePhase::RedDown;
                }
            }
            EdgePhase::RedDown => {
                if c.red > 0 {
                    c.red -= 1;
                } else {
                    self.phase = EdgePhase::GreenUp;
                }
            }
            EdgePhase::GreenUp => {
                if c.green < MAX_BRIGHTNESS {
                    c.green += 1;
                } else {
                    self.phase = EdgePhase::BlueDown;
                }
            }
            EdgePhase::BlueDown => {
                if c.blue > 0 {
                    c.blue -= 1;
                } else {
                    self.phase = EdgePhase::RedUp;
                }
            }
            EdgePhase::RedUp => {
                if c.red < MAX_BRIGHTNESS {
                    c.red += 1;
                } else {
                    self.phase = EdgePhase::GreenDown;
                }
            }
            EdgePhase::GreenDown => {
                if c.green > 0 {
                    c.green -= 1;
                } else {
                    self.phase = EdgePhase::BlueUp;
                }
            }
        }
        self.level
    }

    fn brightness(&self) -> Brightness {
        self.level
    }
}

/// Phases of [`CubeFace`], one per diagonal, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FacePhase {
    /// Red and blue rise together from all-off.
    RedBlueUp,
    /// Blue falls while green rises.
    BlueDownGreenUp,
    /// Red falls while blue rises.
    RedDownBlueUp,
    /// Blue and green fall together back to all-off.
    BlueGreenDown,
}

/// Walks four face diagonals of the color cube, ramping two channels at once.
#[derive(Debug, Clone)]
pub struct CubeFace {
    phase: FacePhase,
    level: Brightness,
}

impl CubeFace {
    pub const fn new() -> Self {
        Self {
            phase: FacePhase::RedBlueUp,
            level: ALL_OFF,
        }
    }

    pub fn phase(&self) -> FacePhase {
        self.phase
    }
}

impl Default for CubeFace {
    fn default() -> Self {
        Self::new()
    }
}

impl BrightnessSequence for CubeFace {
    const STEPS_PER_CYCLE: u32 = 4 * STEPS_PER_PHASE;

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn step(&mut self) -> Brightness {
        let c = &mut self.level;
        match self.phase {
            FacePhase::RedBlueUp => {
                if c.red < MAX_BRIGHTNESS && c.blue < MAX_BRIGHTNESS {
                    c.red += 1;
                    c.blue += 1;
                } else {
                    self.phase = FacePhase::BlueDownGreenUp;
                }
            }
            FacePhase::BlueDownGreenUp => {
                if c.blue > 0 && c.green < MAX_BRIGHTNESS {
                    c.blue -= 1;
                    c.green += 1;
                } else {
                    self.phase = FacePhase::RedDownBlueUp;
                }
            }
            FacePhase::RedDownBlueUp => {
                if c.red > 0 && c.blue < MAX_BRIGHTNESS {
                    c.red -= 1;
                    c.blue += 1;
                } else {
                    self.phase = FacePhase::BlueGreenDown;
                }
            }
            FacePhase::BlueGreenDown => {
                if c.blue > 0 && c.green > 0 {
                    c.blue -= 1;
                    c.green -= 1;
                } else {
                    self.phase = FacePhase::RedBlueUp;
                }
            }
        }
        self.level
    }

    fn brightness(&self) -> Brightness {
        self.level
    }
}
