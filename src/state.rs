//! Shared lighting state.
//!
//! One [`LightingStore`] exists per fixture. Every producer writes through it and the
//! renderer reads copied snapshots from it, so a render pass never observes a
//! half-applied command.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::arbiter::{self, LightingCommand};
use crate::color::Rgb;
use crate::config::LightingDefaults;
use crate::error::LightingError;

const MODE_NAME_MANUAL: &str = "manual";
const MODE_NAME_ADAPTIVE: &str = "adaptive";
const MODE_NAME_ENVIRONMENTAL: &str = "environmental";

const MODE_ID_MANUAL: u8 = 0;
const MODE_ID_ADAPTIVE: u8 = 1;
const MODE_ID_ENVIRONMENTAL: u8 = 2;

/// Which producer owns the rendered color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LightingMode {
    /// Hue/saturation or color temperature set by the control plane
    Manual = MODE_ID_MANUAL,
    /// Per-pixel buffer written by the audio pipeline
    Adaptive = MODE_ID_ADAPTIVE,
    /// Target color derived from the weather
    Environmental = MODE_ID_ENVIRONMENTAL,
}

impl LightingMode {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_MANUAL => Self::Manual,
            MODE_ID_ADAPTIVE => Self::Adaptive,
            MODE_ID_ENVIRONMENTAL => Self::Environmental,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manual => MODE_NAME_MANUAL,
            Self::Adaptive => MODE_NAME_ADAPTIVE,
            Self::Environmental => MODE_NAME_ENVIRONMENTAL,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_MANUAL => Some(Self::Manual),
            MODE_NAME_ADAPTIVE => Some(Self::Adaptive),
            MODE_NAME_ENVIRONMENTAL => Some(Self::Environmental),
            _ => None,
        }
    }
}

/// Device intent for the whole fixture
///
/// `LEDS` is the number of pixels on the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightingState<const LEDS: usize> {
    pub(crate) power: bool,
    pub(crate) brightness: u8,
    pub(crate) hue: u16,
    pub(crate) saturation: u8,
    pub(crate) color_temperature_mireds: u32,
    pub(crate) use_temperature_mode: bool,
    pub(crate) mode: LightingMode,
    pub(crate) environmental_target: Rgb,
    pub(crate) pixels: [Rgb; LEDS],
}

impl<const LEDS: usize> LightingState<LEDS> {
    /// Create a state from startup defaults with a dark per-pixel buffer
    pub const fn new(defaults: &LightingDefaults) -> Self {
        Self {
            power: defaults.power,
            brightness: defaults.brightness,
            hue: defaults.hue,
            saturation: defaults.saturation,
            color_temperature_mireds: defaults.color_temperature_mireds,
            use_temperature_mode: false,
            mode: defaults.mode,
            environmental_target: defaults.environmental_target,
            pixels: [Rgb { r: 0, g: 0, b: 0 }; LEDS],
        }
    }

    pub const fn power(&self) -> bool {
        self.power
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Hue in degrees (0-359)
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    pub const fn color_temperature_mireds(&self) -> u32 {
        self.color_temperature_mireds
    }

    /// Whether the color temperature (rather than hue/saturation) drives manual mode
    pub const fn use_temperature_mode(&self) -> bool {
        self.use_temperature_mode
    }

    pub const fn mode(&self) -> LightingMode {
        self.mode
    }

    pub const fn environmental_target(&self) -> Rgb {
        self.environmental_target
    }

    pub const fn pixels(&self) -> &[Rgb; LEDS] {
        &self.pixels
    }

    /// Number of LEDs on the strip
    pub const fn led_count(&self) -> usize {
        LEDS
    }

    /// Apply a command in place
    ///
    /// Validation happens before any field is written, so a rejected command
    /// leaves the state exactly as it was.
    pub fn apply(&mut self, command: LightingCommand) -> Result<LightingMode, LightingError> {
        arbiter::validate(&command, LEDS)?;
        let transition = arbiter::transition(self.mode, &command);

        match command {
            LightingCommand::SetPower(power) => self.power = power,
            LightingCommand::SetBrightness(brightness) => self.brightness = brightness,
            LightingCommand::SetHue(hue) => self.hue = hue,
            LightingCommand::SetSaturation(saturation) => self.saturation = saturation,
            LightingCommand::SetHueSaturation { hue, saturation } => {
                self.hue = hue;
                self.saturation = saturation;
            }
            LightingCommand::SetColorTemperature(mireds) => {
                self.color_temperature_mireds = mireds;
            }
            LightingCommand::SetMode(_) => {}
            LightingCommand::SetPixel { index, color } => self.pixels[index] = color,
            LightingCommand::FillPixels(color) => self.pixels.fill(color),
            LightingCommand::SetEnvironmentalTarget(color) => self.environmental_target = color,
        }

        self.mode = transition.mode;
        if let Some(use_temperature_mode) = transition.use_temperature_mode {
            self.use_temperature_mode = use_temperature_mode;
        }
        Ok(self.mode)
    }
}

impl<const LEDS: usize> Default for LightingState<LEDS> {
    fn default() -> Self {
        Self::new(&LightingDefaults::DEFAULT)
    }
}

/// Lock-protected home of the fixture's [`LightingState`]
///
/// Reads and writes run inside a critical section. Renderers work from
/// [`snapshot`](Self::snapshot) copies.
pub struct LightingStore<const LEDS: usize> {
    inner: Mutex<RefCell<LightingState<LEDS>>>,
}

impl<const LEDS: usize> LightingStore<LEDS> {
    /// Create a store holding the startup defaults
    pub const fn new() -> Self {
        Self::with_defaults(&LightingDefaults::DEFAULT)
    }

    pub const fn with_defaults(defaults: &LightingDefaults) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(LightingState::new(defaults))),
        }
    }

    /// Apply a command atomically
    ///
    /// Returns the mode in effect after the command.
    pub fn apply(&self, command: LightingCommand) -> Result<LightingMode, LightingError> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).apply(command))
    }

    /// Run a closure against the current state under the lock
    pub fn read<R>(&self, f: impl FnOnce(&LightingState<LEDS>) -> R) -> R {
        critical_section::with(|cs| f(&*self.inner.borrow_ref(cs)))
    }

    /// Copy of the complete current state
    pub fn snapshot(&self) -> LightingState<LEDS> {
        self.read(|state| state.clone())
    }

    pub fn power(&self) -> bool {
        self.read(LightingState::power)
    }

    pub fn brightness(&self) -> u8 {
        self.read(LightingState::brightness)
    }

    pub fn hue(&self) -> u16 {
        self.read(LightingState::hue)
    }

    pub fn saturation(&self) -> u8 {
        self.read(LightingState::saturation)
    }

    pub fn color_temperature_mireds(&self) -> u32 {
        self.read(LightingState::color_temperature_mireds)
    }

    pub fn use_temperature_mode(&self) -> bool {
        self.read(LightingState::use_temperature_mode)
    }

    pub fn mode(&self) -> LightingMode {
        self.read(LightingState::mode)
    }

    pub fn environmental_target(&self) -> Rgb {
        self.read(LightingState::environmental_target)
    }

    /// Color of a single pixel in the per-pixel buffer
    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.read(|state| state.pixels.get(index).copied())
    }

    pub fn set_power(&self, power: bool) -> LightingMode {
        self.apply_infallible(LightingCommand::SetPower(power))
    }

    pub fn set_brightness(&self, brightness: u8) -> LightingMode {
        self.apply_infallible(LightingCommand::SetBrightness(brightness))
    }

    /// Set the hue; switches the fixture to manual HSV mode
    pub fn set_hue(&self, hue: u16) -> Result<LightingMode, LightingError> {
        self.apply(LightingCommand::SetHue(hue))
    }

    /// Set the saturation; switches the fixture to manual HSV mode
    pub fn set_saturation(&self, saturation: u8) -> LightingMode {
        self.apply_infallible(LightingCommand::SetSaturation(saturation))
    }

    /// Set hue and saturation together; switches the fixture to manual HSV mode
    pub fn set_hue_saturation(
        &self,
        hue: u16,
        saturation: u8,
    ) -> Result<LightingMode, LightingError> {
        self.apply(LightingCommand::SetHueSaturation { hue, saturation })
    }

    /// Set the color temperature; switches the fixture to manual temperature mode
    pub fn set_color_temperature(&self, mireds: u32) -> LightingMode {
        self.apply_infallible(LightingCommand::SetColorTemperature(mireds))
    }

    pub fn set_mode(&self, mode: LightingMode) -> LightingMode {
        self.apply_infallible(LightingCommand::SetMode(mode))
    }

    /// Write one pixel of the per-pixel buffer. Does not change the mode.
    pub fn set_pixel(&self, index: usize, color: Rgb) -> Result<LightingMode, LightingError> {
        self.apply(LightingCommand::SetPixel { index, color })
    }

    /// Overwrite the whole per-pixel buffer with one color in a single step
    pub fn fill_pixels(&self, color: Rgb) -> LightingMode {
        self.apply_infallible(LightingCommand::FillPixels(color))
    }

    pub fn set_environmental_target(&self, color: Rgb) -> LightingMode {
        self.apply_infallible(LightingCommand::SetEnvironmentalTarget(color))
    }

    /// Apply a command that has no rejection path
    fn apply_infallible(&self, command: LightingCommand) -> LightingMode {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow_ref_mut(cs);
            state.apply(command).unwrap_or(state.mode)
        })
    }
}

impl<const LEDS: usize> Default for LightingStore<LEDS> {
    fn default() -> Self {
        Self::new()
    }
}
