use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA8 colour as used in CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, String> {
        parse_hex(s)
    }

    /// Same colour with alpha replaced by `alpha` in `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    pub fn alpha_f64(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Lowercase `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// CSS colour value: hex when opaque, `rgba()` otherwise.
    pub fn css(self) -> String {
        if self.a == 255 {
            return self.to_hex();
        }
        let alpha = (self.alpha_f64() * 1000.0).round() / 1000.0;
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Site palette shared by the presets, sections and stylesheet.
pub mod palette {
    use super::Rgba8;

    /// Security zone accent.
    pub const CYBER: Rgba8 = Rgba8::rgb(0x00, 0xff, 0x9d);
    /// Development zone accent.
    pub const DEV: Rgba8 = Rgba8::rgb(0x00, 0xd4, 0xff);
    pub const BACKGROUND: Rgba8 = Rgba8::rgb(0x0a, 0x0a, 0x0a);
    pub const PANEL: Rgba8 = Rgba8::rgb(0x0d, 0x0d, 0x0d);
    pub const SURFACE: Rgba8 = Rgba8::rgb(0x11, 0x11, 0x11);
    pub const BORDER: Rgba8 = Rgba8::rgb(0x1a, 0x1a, 0x1a);
    pub const WHITE: Rgba8 = Rgba8::rgb(0xff, 0xff, 0xff);
    pub const YELLOW: Rgba8 = Rgba8::rgb(0xea, 0xb3, 0x08);
    pub const BLUE: Rgba8 = Rgba8::rgb(0x3b, 0x82, 0xf6);
    pub const PURPLE: Rgba8 = Rgba8::rgb(0xa8, 0x55, 0xf7);
    pub const ORANGE: Rgba8 = Rgba8::rgb(0xf9, 0x73, 0x16);
    pub const TRAFFIC_RED: Rgba8 = Rgba8::rgb(0xff, 0x5f, 0x56);
    pub const TRAFFIC_YELLOW: Rgba8 = Rgba8::rgb(0xff, 0xbd, 0x2e);
    pub const TRAFFIC_GREEN: Rgba8 = Rgba8::rgb(0x27, 0xca, 0x40);
}

impl Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    match s.len() {
        6 => Ok(Rgba8::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Rgba8::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
