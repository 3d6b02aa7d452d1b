pub mod record;
pub mod segment;

pub use record::{load_sequences, parse_sequences, Sequence};
pub use segment::{segment, GeneModel, Span};
