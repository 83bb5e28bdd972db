use std::fmt;

use cube_core::{
    Layout,
    facelet::{GRID_HEIGHT, GRID_WIDTH},
};

use crate::config::RenderConfig;

/// An SVG drawing of a layout: one rounded square per sticker.
pub struct Svg<'a> {
    pub layout: &'a Layout,
    pub config: &'a RenderConfig,
}

impl Svg<'_> {
    fn extent(&self, cells: u8) -> u32 {
        let config = self.config;
        2 * config.outer_padding + u32::from(cells) * (config.cubie_size + config.inner_padding)
            - config.inner_padding
    }

    fn offset(&self, cell: u8) -> u32 {
        let config = self.config;
        config.outer_padding + (config.cubie_size + config.inner_padding) * u32::from(cell)
    }
}

impl fmt::Display for Svg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="twistypuzzle" width="{}" height="{}">"#,
            self.extent(GRID_WIDTH),
            self.extent(GRID_HEIGHT),
        )?;

        for facelet in self.layout.facelets() {
            writeln!(
                f,
                r#"  <rect class="cubie cubie-{label}" x="{x}" y="{y}" rx="{round}" ry="{round}" width="{size}" height="{size}" fill="{fill}" data-index="{index}"/>"#,
                label = facelet.color.label(),
                x = self.offset(facelet.position.x),
                y = self.offset(facelet.position.y),
                round = config.round,
                size = config.cubie_size,
                fill = config.palette.rgb(facelet.color).hex(),
                index = facelet.index,
            )?;
        }

        if config.show_text {
            for facelet in self.layout.facelets() {
                writeln!(
                    f,
                    r#"  <text x="{}" y="{}" text-anchor="middle">{}</text>"#,
                    self.offset(facelet.position.x) + config.cubie_size / 2,
                    self.offset(facelet.position.y) + config.cubie_size * 11 / 15,
                    facelet.index,
                )?;
            }
        }

        writeln!(f, "</svg>")
    }
}
