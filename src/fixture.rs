//! Fixture control plane
//!
//! [`LightFixture`] ties the shared [`LightingStore`] to the one [`StripRenderer`].
//! It is the surface the attribute stack, the HTTP API and the producers call into.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex as RenderLock;

use crate::color::Rgb;
use crate::config::LED_COUNT;
use crate::environment::environmental_color;
use crate::error::{LightingError, RenderError};
use crate::renderer::{PixelSink, StripRenderer};
use crate::state::{LightingMode, LightingState, LightingStore};

/// One addressable light fixture
///
/// The renderer sits behind its own lock, so a strip transfer never runs with
/// interrupts masked and never blocks store readers or writers.
///
/// `LEDS` defaults to the deployed strip length.
pub struct LightFixture<S: PixelSink, const LEDS: usize = LED_COUNT> {
    store: LightingStore<LEDS>,
    renderer: RenderLock<CriticalSectionRawMutex, StripRenderer<S, LEDS>>,
    render_pending: Mutex<Cell<bool>>,
}

impl<S: PixelSink, const LEDS: usize> LightFixture<S, LEDS> {
    /// Create a fixture with default lighting state
    pub const fn new(sink: S) -> Self {
        Self::with_store(LightingStore::new(), sink)
    }

    pub const fn with_store(store: LightingStore<LEDS>, sink: S) -> Self {
        Self {
            store,
            renderer: RenderLock::new(StripRenderer::new(sink)),
            render_pending: Mutex::new(Cell::new(false)),
        }
    }

    pub const fn store(&self) -> &LightingStore<LEDS> {
        &self.store
    }

    /// Run a closure with exclusive access to the renderer
    ///
    /// Returns `None` while a render is in progress.
    pub fn with_renderer<R>(&self, f: impl FnOnce(&mut StripRenderer<S, LEDS>) -> R) -> Option<R> {
        let mut renderer = self.renderer.try_lock().ok()?;
        Some(f(&mut *renderer))
    }

    /// Render the current state
    ///
    /// Sink failures are logged and swallowed. Returns `false` if a frame failed to
    /// reach the strip.
    pub fn refresh(&self) -> bool {
        let result = self.try_refresh();
        if let Err(err) = &result {
            log::warn!("failed to present frame: {}", err);
        }
        result.is_ok()
    }

    /// Render the current state and report sink failures to the caller
    ///
    /// Each pass snapshots the store while holding the renderer, so frames follow
    /// the order in which writes completed. If another caller is rendering, the
    /// request is left pending and that caller draws one more frame before it
    /// releases the renderer.
    pub fn try_refresh(&self) -> Result<(), RenderError<S::Error>> {
        critical_section::with(|cs| self.render_pending.borrow(cs).set(true));

        let mut result = Ok(());
        loop {
            let Ok(mut renderer) = self.renderer.try_lock() else {
                return result;
            };
            while critical_section::with(|cs| self.render_pending.borrow(cs).replace(false)) {
                let snapshot = self.store.snapshot();
                result = result.and(renderer.present(&snapshot));
            }
            drop(renderer);

            if !critical_section::with(|cs| self.render_pending.borrow(cs).get()) {
                return result;
            }
        }
    }

    /// Copy of the current lighting state
    pub fn snapshot(&self) -> LightingState<LEDS> {
        self.store.snapshot()
    }

    pub fn power(&self) -> bool {
        self.store.power()
    }

    pub fn brightness(&self) -> u8 {
        self.store.brightness()
    }

    pub fn hue(&self) -> u16 {
        self.store.hue()
    }

    pub fn saturation(&self) -> u8 {
        self.store.saturation()
    }

    pub fn color_temperature(&self) -> u32 {
        self.store.color_temperature_mireds()
    }

    pub fn mode(&self) -> LightingMode {
        self.store.mode()
    }

    pub fn set_power(&self, power: bool) {
        log::info!("set power: {}", power);
        let mode = self.store.set_power(power);
        self.render_after_manual_write(mode);
    }

    pub fn set_brightness(&self, brightness: u8) {
        log::info!("set brightness: {}", brightness);
        let mode = self.store.set_brightness(brightness);
        self.render_after_manual_write(mode);
    }

    pub fn set_hue(&self, hue: u16) -> Result<(), LightingError> {
        log::info!("set hue: {}", hue);
        let mode = self.store.set_hue(hue)?;
        self.render_after_manual_write(mode);
        Ok(())
    }

    pub fn set_saturation(&self, saturation: u8) {
        log::info!("set saturation: {}", saturation);
        let mode = self.store.set_saturation(saturation);
        self.render_after_manual_write(mode);
    }

    /// Set hue and saturation as one write
    pub fn set_hue_saturation(&self, hue: u16, saturation: u8) -> Result<(), LightingError> {
        log::info!("set hue/saturation: {}/{}", hue, saturation);
        let mode = self.store.set_hue_saturation(hue, saturation)?;
        self.render_after_manual_write(mode);
        Ok(())
    }

    /// Set the color temperature in mireds
    pub fn set_color_temperature(&self, mireds: u32) {
        log::info!("set color temperature: {} mireds", mireds);
        let mode = self.store.set_color_temperature(mireds);
        self.render_after_manual_write(mode);
    }

    pub fn set_mode(&self, mode: LightingMode) {
        log::info!("set mode: {}", mode.as_str());
        let mode = self.store.set_mode(mode);
        self.render_after_manual_write(mode);
    }

    /// Set the mode by name (`manual`, `adaptive` or `environmental`)
    pub fn set_mode_str(&self, name: &str) -> Result<(), LightingError> {
        let mode = LightingMode::parse_from_str(name).ok_or(LightingError::InvalidMode)?;
        self.set_mode(mode);
        Ok(())
    }

    /// Set the mode by raw id
    pub fn set_mode_raw(&self, raw: u8) -> Result<(), LightingError> {
        let mode = LightingMode::from_raw(raw).ok_or(LightingError::InvalidMode)?;
        self.set_mode(mode);
        Ok(())
    }

    /// Write one pixel of the per-pixel buffer
    ///
    /// Callable in any mode; the pixel shows up once the fixture renders in adaptive mode.
    pub fn set_pixel(&self, index: usize, r: u8, g: u8, b: u8) -> Result<(), LightingError> {
        self.store.set_pixel(index, Rgb { r, g, b }).map(|_| ())
    }

    /// Overwrite the whole per-pixel buffer in one step
    pub fn fill_pixels(&self, color: Rgb) {
        self.store.fill_pixels(color);
    }

    /// Replace the environmental target and render it if the fixture is in
    /// environmental mode
    pub fn set_environmental_target(&self, color: Rgb) {
        let mode = self.store.set_environmental_target(color);
        if mode == LightingMode::Environmental {
            self.refresh();
        }
    }

    /// Derive the environmental target from a weather report and apply it
    pub fn update_environmental_target(
        &self,
        temperature: f32,
        condition_id: i32,
        description: &str,
    ) {
        let color = environmental_color(temperature, condition_id);
        log::info!(
            "environmental target: {:.1}C, condition {} ({}) -> {:?}",
            temperature,
            condition_id,
            description,
            color
        );
        self.set_environmental_target(color);
    }

    /// Manual writes render right away unless the adaptive producer owns the
    /// strip. Power-off always renders so the strip goes dark.
    fn render_after_manual_write(&self, mode: LightingMode) {
        if mode != LightingMode::Adaptive || !self.store.power() {
            self.refresh();
        }
    }
}
