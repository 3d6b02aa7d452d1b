pub mod alphabet;
pub mod definition;
pub mod pattern;
pub mod scan;

pub use definition::{load_motifs, parse_motifs, MotifDefinition};
pub use pattern::Pattern;
pub use scan::{find_all, scan_sequence, MotifOccurrence};
