use super::{ModelContext, ModelHandle, ModelRegistry};
use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Loads models by name and keeps the resulting handles for reuse.
///
/// Handles are cached for the lifetime of the process; repeated loads of the
/// same name return the same `Arc`. Names outside the registry fail with
/// `UnsupportedModel`.
pub struct ModelLoader {
    registry: ModelRegistry,
    context: ModelContext,
    cache: Mutex<HashMap<String, Arc<ModelHandle>>>,
}

impl ModelLoader {
    pub fn new(registry: ModelRegistry, context: ModelContext) -> Self {
        Self {
            registry,
            context,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn load(&self, name: &str) -> Result<Arc<ModelHandle>> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))?;

        if let Some(handle) = cache.get(name) {
            debug!("Model cache hit: {}", name);
            return Ok(Arc::clone(handle));
        }

        let handle = Arc::new(self.registry.construct(name, &self.context)?);
        cache.insert(name.to_string(), Arc::clone(&handle));
        info!("Loaded model: {}", name);

        Ok(handle)
    }

    pub fn supported_models(&self) -> Vec<String> {
        self.registry.names()
    }
}
