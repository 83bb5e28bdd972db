use std::{fs, path::Path};

use color_eyre::eyre::WrapErr;
use cube_core::Color;
use log::debug;
use serde::{Deserialize, Serialize};

/// An RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Sticker colors used when drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub white: Rgb,
    pub blue: Rgb,
    pub red: Rgb,
    pub green: Rgb,
    pub orange: Rgb,
    pub yellow: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            white: Rgb(255, 255, 255),
            blue: Rgb(0, 0, 255),
            red: Rgb(255, 0, 0),
            green: Rgb(0, 255, 0),
            orange: Rgb(255, 128, 0),
            yellow: Rgb(255, 255, 0),
        }
    }
}

impl Palette {
    pub fn rgb(&self, color: Color) -> Rgb {
        match color {
            Color::White => self.white,
            Color::Blue => self.blue,
            Color::Red => self.red,
            Color::Green => self.green,
            Color::Orange => self.orange,
            Color::Yellow => self.yellow,
        }
    }
}

/// Render configuration, read from a TOML file. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Side length of one sticker in pixels.
    pub cubie_size: u32,
    /// Gap between neighbouring stickers.
    pub inner_padding: u32,
    /// Margin around the whole drawing.
    pub outer_padding: u32,
    /// Corner radius of each sticker.
    pub round: u32,
    /// Draw each sticker's emission index on top of it.
    pub show_text: bool,
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            cubie_size: 30,
            inner_padding: 2,
            outer_padding: 5,
            round: 3,
            show_text: false,
            palette: Palette::default(),
        }
    }
}

impl RenderConfig {
    /// Read the configuration at `path`, or the defaults when there is none.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<Self> {
        let Some(path) = path else {
            debug!(target: "config", "No render configuration given, using defaults");
            return Ok(RenderConfig::default());
        };

        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read render configuration {}", path.display()))?;
        let config = toml::from_str::<RenderConfig>(&text)
            .wrap_err_with(|| format!("Failed to parse render configuration {}", path.display()))?;
        debug!(target: "config", "Loaded render configuration: {config:?}");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: RenderConfig = toml::from_str(
            "cubie_size = 20\nshow_text = true\n\n[palette]\norange = [255, 165, 0]\n",
        )
        .unwrap();
        assert_eq!(config.cubie_size, 20);
        assert!(config.show_text);
        assert_eq!(config.inner_padding, 2);
        assert_eq!(config.palette.orange, Rgb(255, 165, 0));
        assert_eq!(config.palette.rgb(Color::Blue), Rgb(0, 0, 255));
    }

    #[test]
    fn empty_config_is_default() {
        let config: RenderConfig = toml::from_str("").unwrap();
        assert_eq!(config.cubie_size, 30);
        assert_eq!(config.round, 3);
        assert!(!config.show_text);
    }

    #[test]
    fn hex_colors() {
        assert_eq!(Rgb(255, 128, 0).hex(), "#ff8000");
    }
}
