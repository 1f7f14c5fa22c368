//! Palette helpers and the stock face box colors.

use palette::Srgb;

/// Creates an RGB color from a packed `0xRRGGBB` value.
#[inline]
pub const fn hex(value: u32) -> Srgb {
    let red = ((value >> 16) & 0xff) as f32 / 255.0;
    let green = ((value >> 8) & 0xff) as f32 / 255.0;
    let blue = (value & 0xff) as f32 / 255.0;
    Srgb::new(red, green, blue)
}

/// Red `#f44336`.
pub const RED: Srgb = hex(0xf44336);
/// Deep purple `#673AB7`.
pub const DEEP_PURPLE: Srgb = hex(0x673ab7);
/// Light green `#64DD17`.
pub const LIGHT_GREEN: Srgb = hex(0x64dd17);
/// Yellow `#FFD600`.
pub const YELLOW: Srgb = hex(0xffd600);
/// Dark blue `#01579B`.
pub const DARK_BLUE: Srgb = hex(0x01579b);

/// Background behind the icon, also used for cut-out eyes.
pub const BACKGROUND: Srgb = hex(0xbdbdbd);

/// The five face box colors, in chain order.
pub const DEFAULT_PALETTE: [Srgb; 5] = [RED, DEEP_PURPLE, LIGHT_GREEN, YELLOW, DARK_BLUE];
