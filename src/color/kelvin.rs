use super::Rgb;

/// Lowest color temperature the fixture renders
pub const MIN_KELVIN: u16 = 1000;

/// Highest color temperature the fixture renders
pub const MAX_KELVIN: u16 = 10_000;

const MIREDS_PER_KELVIN: u32 = 1_000_000;

/// Convert a color temperature in mireds to Kelvin
///
/// The result is clamped to [`MIN_KELVIN`]..=[`MAX_KELVIN`]. Zero mireds maps to the
/// coldest supported temperature.
#[allow(clippy::cast_possible_truncation)]
pub const fn mireds_to_kelvin(mireds: u32) -> u16 {
    if mireds == 0 {
        return MAX_KELVIN;
    }
    let kelvin = MIREDS_PER_KELVIN / mireds;
    if kelvin < MIN_KELVIN as u32 {
        MIN_KELVIN
    } else if kelvin > MAX_KELVIN as u32 {
        MAX_KELVIN
    } else {
        kelvin as u16
    }
}

/// Convert a Kelvin temperature to mireds
pub const fn kelvin_to_mireds(kelvin: u16) -> u32 {
    if kelvin == 0 {
        return MIREDS_PER_KELVIN;
    }
    MIREDS_PER_KELVIN / kelvin as u32
}

/// Convert a color temperature in mireds straight to an RGB color
pub fn mireds_to_rgb(mireds: u32) -> Rgb {
    kelvin_to_rgb(mireds_to_kelvin(mireds))
}

/// Convert a Kelvin temperature to an RGB color
///
/// Tanner Helland's fit of the blackbody curve, evaluated on `kelvin / 100`.
/// Supports temperatures between 1000K and 40000K.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn kelvin_to_rgb(kelvin: u16) -> Rgb {
    let temp = (f32::from(kelvin) / 100.0).clamp(10.0, 400.0);

    let red = if temp <= 66.0 {
        255.0
    } else {
        329.698_73 * libm::powf(temp - 60.0, -0.133_204_76)
    };

    let green = if temp <= 66.0 {
        99.470_8 * libm::logf(temp) - 161.119_57
    } else {
        288.122_17 * libm::powf(temp - 60.0, -0.075_514_85)
    };

    let blue = if temp >= 66.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        138.517_73 * libm::logf(temp - 10.0) - 305.044_8
    };

    Rgb {
        r: red.clamp(0.0, 255.0) as u8,
        g: green.clamp(0.0, 255.0) as u8,
        b: blue.clamp(0.0, 255.0) as u8,
    }
}
