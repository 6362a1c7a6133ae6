use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Green title, blue view headings, orange section headings.
pub struct Garden;

impl Garden {
    pub fn default_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Garden::TEXT);
        skin.bold.set_fg(Garden::TEXT);
        skin.bold.add_attr(Attribute::Bold);

        skin.headers[0].set_fg(Garden::GREEN);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Center;

        skin.headers[1].set_fg(Garden::BLUE);
        skin.headers[1].add_attr(Attribute::Bold);
        skin.headers[1].align = Alignment::Left;

        skin.headers[2].set_fg(Garden::ORANGE);
        skin.headers[2].add_attr(Attribute::Bold);

        skin.table.set_fg(Garden::GREEN);
        skin.bullet.set_fg(Garden::GREEN);
        skin.inline_code.set_fg(Garden::GREEN);
        skin.code_block.set_fg(Garden::GREEN);

        skin
    }

    pub const GREEN: Color = Color::Rgb {
        r: 0x4C,
        g: 0xAF,
        b: 0x50,
    }; // #4CAF50
    pub const BLUE: Color = Color::Rgb {
        r: 0x21,
        g: 0x96,
        b: 0xF3,
    }; // #2196F3
    pub const ORANGE: Color = Color::Rgb {
        r: 0xFF,
        g: 0x57,
        b: 0x22,
    }; // #FF5722
    pub const TEXT: Color = Color::Rgb {
        r: 0xD0,
        g: 0xD0,
        b: 0xD0,
    };
}
