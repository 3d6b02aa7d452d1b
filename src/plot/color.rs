use std::fmt;

/// Motif colors, assigned in motif-file order and cycled when there are more
/// motifs than colors.
pub const MOTIF_COLORS: [Color; 10] = [
    Color::Yellow,
    Color::Chartreuse,
    Color::Green,
    Color::Emerald,
    Color::Teal,
    Color::Cerulean,
    Color::Blue,
    Color::Indigo,
    Color::Violet,
    Color::Purple,
];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    Black,
    Yellow,
    Chartreuse,
    Green,
    Emerald,
    Teal,
    Cerulean,
    Blue,
    Indigo,
    Violet,
    Purple,
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Black => write!(formatter, "#000000"),
            Color::Yellow => write!(formatter, "#FDE725"),
            Color::Chartreuse => write!(formatter, "#B5DE2B"),
            Color::Green => write!(formatter, "#6ECE58"),
            Color::Emerald => write!(formatter, "#35B779"),
            Color::Teal => write!(formatter, "#1F9E89"),
            Color::Cerulean => write!(formatter, "#26828E"),
            Color::Blue => write!(formatter, "#31688E"),
            Color::Indigo => write!(formatter, "#3E4989"),
            Color::Violet => write!(formatter, "#482878"),
            Color::Purple => write!(formatter, "#440154"),
        }
    }
}
