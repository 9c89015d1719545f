use std::fmt;

/// Number of block colors in a deal.
pub const NUM_COLORS: usize = 6;

/// Content of a single container slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Empty,
    White,
    Red,
    Green,
    Blue,
    Orange,
    Cyan,
}

impl Color {
    /// Block colors in deal order.
    pub const PALETTE: [Color; NUM_COLORS] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Cyan,
    ];

    pub fn is_empty(self) -> bool {
        self == Color::Empty
    }

    /// Stable code used by the JS view: 0 = empty, 1..=6 palette order.
    pub fn code(self) -> u8 {
        match self {
            Color::Empty => 0,
            Color::White => 1,
            Color::Red => 2,
            Color::Green => 3,
            Color::Blue => 4,
            Color::Orange => 5,
            Color::Cyan => 6,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Empty => (0, 0, 0),
            Color::White => (255, 255, 255),
            Color::Red => (255, 0, 0),
            Color::Green => (0, 255, 0),
            Color::Blue => (0, 0, 255),
            // Rendered magenta; the name is kept from the palette.
            Color::Orange => (255, 0, 255),
            Color::Cyan => (0, 255, 255),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Color::Empty => "NULL",
            Color::White => "WHITE",
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
            Color::Orange => "ORANGE",
            Color::Cyan => "CYAN",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Container outline drawn by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Selected,
    Idle,
}

impl Border {
    pub fn for_selected(selected: bool) -> Self {
        if selected { Border::Selected } else { Border::Idle }
    }

    /// Continues the [`Color::code`] numbering: 7 = yellow, 8 = gray.
    pub fn code(self) -> u8 {
        match self {
            Border::Selected => 7,
            Border::Idle => 8,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Border::Selected => (255, 255, 0),
            Border::Idle => (50, 50, 50),
        }
    }
}
