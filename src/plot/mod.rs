pub mod color;
pub mod diagram;
pub mod layout;

pub use color::{Color, MOTIF_COLORS};
pub use diagram::{plot_tracks, Track};
pub use layout::{Layout, LegendBox};
