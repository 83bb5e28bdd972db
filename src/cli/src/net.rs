use std::fmt;

use cube_core::{
    Color, Layout,
    facelet::{GRID_HEIGHT, GRID_WIDTH},
};
use owo_colors::OwoColorize;

use crate::config::Palette;

/// The unfolded cube drawn with terminal background colors, two columns per
/// sticker.
pub struct Net<'a> {
    pub layout: &'a Layout,
    pub palette: &'a Palette,
}

impl Net<'_> {
    fn grid(&self) -> [[Option<Color>; GRID_WIDTH as usize]; GRID_HEIGHT as usize] {
        let mut grid = [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        for facelet in self.layout.facelets() {
            let position = facelet.position;
            grid[usize::from(position.y)][usize::from(position.x)] = Some(facelet.color);
        }
        grid
    }
}

impl fmt::Display for Net<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid() {
            for cell in row {
                match cell {
                    Some(color) => {
                        let rgb = self.palette.rgb(color);
                        write!(f, "{}", "  ".on_truecolor(rgb.0, rgb.1, rgb.2))?;
                    }
                    None => write!(f, "  ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
