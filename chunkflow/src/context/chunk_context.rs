//! Attribute store scoped to one batch of tasklet invocations.

use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// Externally owned attributes for the current invocation batch.
///
/// The tasklet only reads from it; attributes are set by the driver or by
/// observers. Interior mutability lets it be shared by reference.
#[derive(Debug)]
pub struct ChunkContext {
    step_name: String,
    run_id: Uuid,
    attributes: RwLock<HashMap<String, serde_json::Value>>,
}

impl ChunkContext {
    /// Creates an empty context for the named step with a fresh run ID.
    #[must_use]
    pub fn new(step_name: impl Into<String>) -> Self {
        Self::with_run_id(step_name, Uuid::new_v4())
    }

    /// Creates an empty context with a specific run ID.
    #[must_use]
    pub fn with_run_id(step_name: impl Into<String>, run_id: Uuid) -> Self {
        Self {
            step_name: step_name.into(),
            run_id,
            attributes: RwLock::new(HashMap::new()),
        }
    }

    /// The step this context belongs to.
    #[must_use]
    pub fn step_name(&self) -> &str {
        &self.step_name
    }

    /// The run this context belongs to.
    #[must_use]
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Gets an attribute.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<serde_json::Value> {
        self.attributes.read().get(name).cloned()
    }

    /// Sets an attribute, returning the previous value if any.
    pub fn set_attribute(
        &self,
        name: impl Into<String>,
        value: serde_json::Value,
    ) -> Option<serde_json::Value> {
        self.attributes.write().insert(name.into(), value)
    }

    /// Removes an attribute, returning its value if it was present.
    pub fn remove_attribute(&self, name: &str) -> Option<serde_json::Value> {
        self.attributes.write().remove(name)
    }

    /// Checks if an attribute exists.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.read().contains_key(name)
    }

    /// Returns all attribute names, sorted.
    #[must_use]
    pub fn attribute_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.attributes.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.read().len()
    }
}

impl Clone for ChunkContext {
    fn clone(&self) -> Self {
        Self {
            step_name: self.step_name.clone(),
            run_id: self.run_id,
            attributes: RwLock::new(self.attributes.read().clone()),
        }
    }
}
