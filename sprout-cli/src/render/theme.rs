use sprout_core::CareKind;
use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

pub struct Palette;

impl Palette {
    pub fn default_garden_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Palette::FG);
        skin.bold.set_fg(Palette::FG);
        skin.italic.set_fg(Palette::COMMENT);

        skin.headers[0].set_fg(Palette::GREEN);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Palette::YELLOW);
        skin.headers[1].add_attr(Attribute::Bold);

        skin.table.set_fg(Palette::COMMENT);
        skin.bullet.set_fg(Palette::GREEN);
        skin.inline_code.set_fg(Palette::CYAN);
        skin.inline_code.set_bg(Palette::BG);

        skin
    }

    /// Background of a calendar day carrying an event of this kind.
    pub fn care_color(kind: CareKind) -> Color {
        match kind {
            CareKind::Watered => Palette::WATERED,
            CareKind::Fertilized => Palette::FERTILIZED,
            CareKind::Repotted => Palette::REPOTTED,
        }
    }

    pub const BG: Color = Color::Rgb {
        r: 0x28,
        g: 0x2C,
        b: 0x34,
    }; // #282C34
    pub const FG: Color = Color::Rgb {
        r: 0xAB,
        g: 0xB2,
        b: 0xBF,
    }; // #ABB2BF

    pub const RED: Color = Color::Rgb {
        r: 0xE0,
        g: 0x6C,
        b: 0x75,
    }; // #E06C75
    pub const YELLOW: Color = Color::Rgb {
        r: 0xE5,
        g: 0xC0,
        b: 0x7B,
    }; // #E5C07B
    pub const GREEN: Color = Color::Rgb {
        r: 0x98,
        g: 0xC3,
        b: 0x79,
    }; // #98C379
    pub const CYAN: Color = Color::Rgb {
        r: 0x56,
        g: 0xB6,
        b: 0xC2,
    }; // #56B6C2
    pub const COMMENT: Color = Color::Rgb {
        r: 0x5C,
        g: 0x63,
        b: 0x70,
    }; // #5C6370

    // calendar
    pub const WATERED: Color = Color::Rgb {
        r: 0x1D,
        g: 0x0E,
        b: 0xD1,
    }; // #1D0ED1
    pub const FERTILIZED: Color = Color::Rgb {
        r: 0x00,
        g: 0x4B,
        b: 0x26,
    }; // #004B26
    pub const REPOTTED: Color = Color::Rgb {
        r: 0x51,
        g: 0x20,
        b: 0x13,
    }; // #512013
    pub const TODAY_BG: Color = Color::Rgb {
        r: 0xBC,
        g: 0xBC,
        b: 0xBC,
    }; // #BCBCBC
    pub const TODAY_FG: Color = Color::Rgb {
        r: 0x11,
        g: 0x11,
        b: 0x11,
    }; // #111111
}
