use super::types::NoteSequence;
use crate::{models::ModelHandle, Error, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

/// Input type tag for a JSON-serialized note sequence.
pub const NOTES_JSON: &str = "notes_json";

const DEFAULT_NUM_STEPS: u64 = 64;

/// The generation backend consumed by the endpoint layer.
///
/// `params` is passed through untouched; interpreting it is the backend's
/// business, not the caller's.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        model: &ModelHandle,
        input_data: &str,
        input_type: &str,
        params: &Map<String, Value>,
    ) -> Result<Value>;
}

/// Built-in backend: extends the input phrase by cyclic repetition.
///
/// Stands behind the `Generator` seam where a real checkpoint-backed engine
/// would go; output is deterministic for a given input and params.
pub struct ContinuationEngine {
    steps_per_quarter: u32,
}

impl ContinuationEngine {
    pub fn new() -> Self {
        Self {
            steps_per_quarter: 4,
        }
    }

    fn continue_sequence(&self, input: &NoteSequence, num_steps: u64) -> NoteSequence {
        let step_seconds = 60.0 / (input.qpm * f64::from(self.steps_per_quarter));
        let target_time = input.end_time() + num_steps as f64 * step_seconds;

        let mut output = input.clone();
        let phrase_length = input.end_time();

        if !input.notes.is_empty() && phrase_length > f64::EPSILON {
            'extend: for repeat in 1.. {
                let shift = repeat as f64 * phrase_length;
                for note in &input.notes {
                    if note.start_time + shift >= target_time {
                        break 'extend;
                    }
                    let mut copy = note.clone();
                    copy.start_time += shift;
                    copy.end_time += shift;
                    output.notes.push(copy);
                }
            }
        }

        output.total_time = output
            .notes
            .iter()
            .map(|n| n.end_time)
            .fold(target_time, f64::max);
        output
    }
}

impl Default for ContinuationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Generator for ContinuationEngine {
    async fn generate(
        &self,
        model: &ModelHandle,
        input_data: &str,
        input_type: &str,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        if input_type != NOTES_JSON {
            return Err(Error::generation(format!(
                "unsupported input type: {input_type}"
            )));
        }

        let input: NoteSequence = serde_json::from_str(input_data)
            .map_err(|e| Error::generation(format!("invalid {NOTES_JSON} input: {e}")))?;

        let num_steps = match params.get("num_steps") {
            None => DEFAULT_NUM_STEPS,
            Some(value) => value.as_u64().ok_or_else(|| {
                Error::generation("parameter num_steps must be a non-negative integer")
            })?,
        };

        let output = self.continue_sequence(&input, num_steps);
        debug!(
            "Generated {} notes over {:.2}s with model: {}",
            output.notes.len(),
            output.total_time,
            model.name()
        );

        Ok(serde_json::to_value(output)?)
    }
}
