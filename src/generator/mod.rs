mod engine;
mod types;

pub use engine::{ContinuationEngine, Generator, NOTES_JSON};
pub use types::{Note, NoteSequence};
