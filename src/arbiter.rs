//! Mode arbitration
//!
//! Holds the transition table that decides how each command moves the fixture between
//! [`LightingMode`]s, and the render-time rules that decide which fields of the
//! [`LightingState`] produce the frame.

use crate::color::{BLACK, Hsv, Rgb, hsv2rgb, hue_to_hue8, mireds_to_rgb, scale_color};
use crate::error::LightingError;
use crate::state::{LightingMode, LightingState};

/// Highest accepted hue in degrees
pub const MAX_HUE: u16 = 359;

/// Commands that can be applied to the lighting state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingCommand {
    /// Turn the fixture on or off
    SetPower(bool),
    /// Set global brightness
    SetBrightness(u8),
    /// Set hue in degrees (0-359)
    SetHue(u16),
    /// Set saturation
    SetSaturation(u8),
    /// Set hue and saturation in one write
    SetHueSaturation { hue: u16, saturation: u8 },
    /// Set color temperature in mireds
    SetColorTemperature(u32),
    /// Switch the active mode
    SetMode(LightingMode),
    /// Write one entry of the per-pixel buffer
    SetPixel { index: usize, color: Rgb },
    /// Overwrite the whole per-pixel buffer
    FillPixels(Rgb),
    /// Replace the weather-derived target color
    SetEnvironmentalTarget(Rgb),
}

/// Outcome of a command in the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Mode after the command
    pub mode: LightingMode,
    /// New value of the temperature flag, `None` keeps the current one
    pub use_temperature_mode: Option<bool>,
}

/// Check a command against the strip before it touches any state
pub fn validate(command: &LightingCommand, led_count: usize) -> Result<(), LightingError> {
    match *command {
        LightingCommand::SetHue(hue) | LightingCommand::SetHueSaturation { hue, .. }
            if hue > MAX_HUE =>
        {
            Err(LightingError::HueOutOfRange(hue))
        }
        LightingCommand::SetPixel { index, .. } if index >= led_count => {
            Err(LightingError::PixelOutOfRange { index, led_count })
        }
        _ => Ok(()),
    }
}

/// Transition table
///
/// | command                                        | mode      | temperature flag |
/// |------------------------------------------------|-----------|------------------|
/// | `SetHue`, `SetSaturation`, `SetHueSaturation`  | `Manual`  | cleared          |
/// | `SetColorTemperature`                          | `Manual`  | set              |
/// | `SetMode(m)`                                   | `m`       | kept             |
/// | anything else                                  | unchanged | kept             |
pub const fn transition(current: LightingMode, command: &LightingCommand) -> Transition {
    match command {
        LightingCommand::SetHue(_)
        | LightingCommand::SetSaturation(_)
        | LightingCommand::SetHueSaturation { .. } => Transition {
            mode: LightingMode::Manual,
            use_temperature_mode: Some(false),
        },
        LightingCommand::SetColorTemperature(_) => Transition {
            mode: LightingMode::Manual,
            use_temperature_mode: Some(true),
        },
        LightingCommand::SetMode(mode) => Transition {
            mode: *mode,
            use_temperature_mode: None,
        },
        LightingCommand::SetPower(_)
        | LightingCommand::SetBrightness(_)
        | LightingCommand::SetPixel { .. }
        | LightingCommand::FillPixels(_)
        | LightingCommand::SetEnvironmentalTarget(_) => Transition {
            mode: current,
            use_temperature_mode: None,
        },
    }
}

/// Fields that are authoritative for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authority {
    /// Power is off, every pixel is black
    Off,
    /// Uniform color computed from the manual fields
    Uniform(Rgb),
    /// The per-pixel buffer is rendered as written
    PixelBuffer,
}

/// Decide which color source drives the next frame
pub fn authority<const LEDS: usize>(state: &LightingState<LEDS>) -> Authority {
    if !state.power() {
        return Authority::Off;
    }

    match state.mode() {
        LightingMode::Manual if state.use_temperature_mode() => Authority::Uniform(scale_color(
            mireds_to_rgb(state.color_temperature_mireds()),
            state.brightness(),
        )),
        LightingMode::Manual => Authority::Uniform(hsv2rgb(Hsv {
            hue: hue_to_hue8(state.hue()),
            sat: state.saturation(),
            val: state.brightness(),
        })),
        LightingMode::Adaptive => Authority::PixelBuffer,
        LightingMode::Environmental => Authority::Uniform(scale_color(
            state.environmental_target(),
            state.brightness(),
        )),
    }
}

/// Fill `frame` with the colors the current state asks for
///
/// Pixels past the end of the state's buffer are left black.
pub fn compose<const LEDS: usize>(state: &LightingState<LEDS>, frame: &mut [Rgb]) {
    match authority(state) {
        Authority::Off => frame.fill(BLACK),
        Authority::Uniform(color) => frame.fill(color),
        Authority::PixelBuffer => {
            for (pixel, color) in frame
                .iter_mut()
                .zip(state.pixels().iter().chain(core::iter::repeat(&BLACK)))
            {
                *pixel = *color;
            }
        }
    }
}
