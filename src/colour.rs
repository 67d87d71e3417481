/// Stroke and fill colour of drawn primitives
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// An RGB colour from 8-bit channels
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }
}

/// Colours used by the exported documents
pub mod colours {
    use super::*;

    /// Text
    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    /// Separator rules, rgb(200, 200, 200)
    pub const RULE_GREY: Colour = Colour::RGB {
        r: 200.0 / 255.0,
        g: 200.0 / 255.0,
        b: 200.0 / 255.0,
    };
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rule_grey_is_200_on_every_channel() {
        assert_eq!(colours::RULE_GREY, Colour::new_rgb_bytes(200, 200, 200));
    }
}
