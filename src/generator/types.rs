use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub pitch: u8,
    #[serde(default = "default_velocity")]
    pub velocity: u8,
    pub start_time: f64,
    pub end_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteSequence {
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default = "default_qpm")]
    pub qpm: f64,
    #[serde(default)]
    pub total_time: f64,
}

impl NoteSequence {
    /// End of the sequence: the declared total time or the latest note end,
    /// whichever is later.
    pub fn end_time(&self) -> f64 {
        self.notes
            .iter()
            .map(|n| n.end_time)
            .fold(self.total_time, f64::max)
    }
}

impl Default for NoteSequence {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            qpm: default_qpm(),
            total_time: 0.0,
        }
    }
}

fn default_velocity() -> u8 {
    80
}

fn default_qpm() -> f64 {
    120.0
}
