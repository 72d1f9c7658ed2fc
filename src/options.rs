use clap::ValueEnum;
use crossterm::style::Color;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

pub struct Theme {
    pub bg_hidden: Color,
    pub bg_highlight: Color,
    pub bg_opened: Color,
    pub bg_exploded: Color,
    pub fg_hidden: Color,
    pub flag: Color,
    pub mine: Color,
    pub nums: [Color; 8],
    pub status: Color,
}

impl Theme {
    /// Colour for an opened cell showing `count`, which must be between 1 and 8.
    pub fn number(&self, count: u8) -> Color {
        self.nums[usize::from(count.clamp(1, 8)) - 1]
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeChoice {
    Frappe,
    Legacy,
    Microsoft,
    BlackAndWhite,
}

impl ThemeChoice {
    pub fn theme(self) -> Theme {
        match self {
            Self::Frappe => Theme {
                bg_hidden: rgb(48, 52, 70),
                bg_highlight: rgb(65, 69, 89),
                bg_opened: rgb(98, 104, 128),
                bg_exploded: rgb(231, 130, 132),
                fg_hidden: rgb(115, 121, 148),
                flag: rgb(239, 159, 118),
                mine: rgb(35, 38, 52),
                nums: [
                    rgb(140, 187, 241),
                    rgb(166, 209, 137),
                    rgb(231, 130, 132),
                    rgb(202, 158, 230),
                    rgb(239, 159, 118),
                    rgb(129, 200, 190),
                    rgb(198, 208, 245),
                    rgb(238, 190, 190),
                ],
                status: rgb(198, 208, 245),
            },
            Self::Legacy => Theme {
                bg_hidden: rgb(40, 40, 40),
                bg_highlight: rgb(70, 70, 70),
                bg_opened: rgb(120, 120, 110),
                bg_exploded: rgb(200, 40, 40),
                fg_hidden: rgb(170, 170, 170),
                flag: rgb(255, 60, 60),
                mine: rgb(0, 0, 0),
                nums: [
                    rgb(120, 250, 250),
                    rgb(130, 250, 120),
                    rgb(250, 140, 120),
                    rgb(230, 100, 255),
                    rgb(240,  90,  20),
                    rgb( 50, 250, 255),
                    rgb( 50,  50,  60),
                    rgb(255, 170, 230),
                ],
                status: rgb(220, 220, 220),
            },
            Self::Microsoft => Theme {
                bg_hidden: rgb(200, 200, 200),
                bg_highlight: rgb(220, 220, 220),
                bg_opened: rgb(188, 188, 188),
                bg_exploded: rgb(255, 0, 0),
                fg_hidden: rgb(128, 128, 128),
                flag: rgb(255, 0, 0),
                mine: rgb(0, 0, 0),
                nums: [
                    rgb(  0,   0, 255),
                    rgb(  0, 128,   0),
                    rgb(255,   0,   0),
                    rgb(  0,   0, 128),
                    rgb(128,   0,   0),
                    rgb(  0, 128, 128),
                    rgb(  0,   0,   0),
                    rgb(128, 128, 128),
                ],
                status: rgb(255, 255, 255),
            },
            Self::BlackAndWhite => Theme {
                bg_hidden: Color::Grey,
                bg_highlight: Color::White,
                bg_opened: Color::AnsiValue(145),
                bg_exploded: Color::Black,
                fg_hidden: Color::Black,
                flag: Color::Black,
                mine: Color::White,
                nums: [Color::Black; 8],
                status: Color::Reset,
            },
        }
    }
}

pub struct IconSet {
    pub empty: char,
    pub hidden: char,
    pub mine: char,
    pub flag: char,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum IconSetChoice {
    Ascii,
    Latin1,
    Unicode,
}

impl IconSetChoice {
    pub fn iconset(self) -> IconSet {
        match self {
            Self::Ascii => IconSet { empty: ' ', hidden: '`', mine: '*', flag: 'P' },
            Self::Latin1 => IconSet { empty: ' ', hidden: '·', mine: '¤', flag: '¶' },
            Self::Unicode => IconSet { empty: ' ', hidden: '·', mine: '✱', flag: '⚑' },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_colours() {
        let theme = ThemeChoice::Microsoft.theme();
        assert_eq!(theme.number(1), rgb(0, 0, 255));
        assert_eq!(theme.number(8), rgb(128, 128, 128));
    }
}
