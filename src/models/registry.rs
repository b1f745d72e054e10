use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Opaque reference to a loaded generative model.
#[derive(Debug)]
pub struct ModelHandle {
    name: String,
    checkpoint: PathBuf,
}

impl ModelHandle {
    pub fn new(name: impl Into<String>, checkpoint: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            checkpoint: checkpoint.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn checkpoint(&self) -> &Path {
        &self.checkpoint
    }
}

/// Context handed to model constructors.
#[derive(Debug, Clone)]
pub struct ModelContext {
    pub checkpoint_dir: PathBuf,
}

impl ModelContext {
    pub fn new(checkpoint_dir: impl Into<PathBuf>) -> Self {
        Self {
            checkpoint_dir: checkpoint_dir.into(),
        }
    }
}

pub type ModelConstructor = fn(&ModelContext) -> Result<ModelHandle>;

/// Enumerated mapping from model name to constructor.
///
/// Unknown names fail closed with `UnsupportedModel`. Registration order is
/// the order `names` reports, so the model listing stays deterministic.
pub struct ModelRegistry {
    entries: Vec<(String, ModelConstructor)>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, constructor: ModelConstructor) {
        self.entries.push((name.into(), constructor));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn construct(&self, name: &str, context: &ModelContext) -> Result<ModelHandle> {
        match self.entries.iter().find(|(n, _)| n == name) {
            Some((_, constructor)) => constructor(context),
            None => Err(Error::unsupported_model(name)),
        }
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register("melody_rnn", melody_rnn);
        registry.register("drums_rnn", drums_rnn);
        registry.register("performance_rnn", performance_rnn);
        registry.register("polyphony_rnn", polyphony_rnn);
        registry
    }
}

fn bundle(context: &ModelContext, name: &str) -> PathBuf {
    context.checkpoint_dir.join(format!("{name}.mag"))
}

fn melody_rnn(context: &ModelContext) -> Result<ModelHandle> {
    Ok(ModelHandle::new("melody_rnn", bundle(context, "melody_rnn")))
}

fn drums_rnn(context: &ModelContext) -> Result<ModelHandle> {
    Ok(ModelHandle::new("drums_rnn", bundle(context, "drums_rnn")))
}

fn performance_rnn(context: &ModelContext) -> Result<ModelHandle> {
    Ok(ModelHandle::new(
        "performance_rnn",
        bundle(context, "performance_rnn"),
    ))
}

fn polyphony_rnn(context: &ModelContext) -> Result<ModelHandle> {
    Ok(ModelHandle::new(
        "polyphony_rnn",
        bundle(context, "polyphony_rnn"),
    ))
}
