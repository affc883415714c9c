// All bound numeric fields of a page, keyed by field id
use engine::NumberFormatter;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use super::binding::{FieldBinding, FieldUpdate};
use crate::config::{AppConfig, FieldConfig};
use crate::view::{NumericField, WordsOutput};

pub struct BindingRegistry<F, O> {
    formatter: Arc<NumberFormatter>,
    bindings: HashMap<String, FieldBinding<F, O>>,
}

impl<F: NumericField, O: WordsOutput> BindingRegistry<F, O> {
    pub fn new(formatter: Arc<NumberFormatter>) -> Self {
        Self {
            formatter,
            bindings: HashMap::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(NumberFormatter::new(config.format.clone())))
    }

    /// Binds `field` once; binding an id that is already bound is a no-op
    /// and returns `false`. A field that already holds a value is formatted
    /// right away.
    pub fn bind(&mut self, id: impl Into<String>, field: F, output: Option<O>) -> bool {
        let id = id.into();
        if self.bindings.contains_key(&id) {
            debug!("Field '{}' is already bound; skipping", id);
            return false;
        }

        let has_value = field.value().is_some_and(|v| !v.is_empty());
        let mut binding = FieldBinding::new(field, output, Arc::clone(&self.formatter));
        if has_value {
            binding.handle_input();
        }
        self.bindings.insert(id, binding);
        true
    }

    /// Binds every configured field the resolvers can find. Returns how many
    /// new bindings were made; fields and outputs that cannot be resolved are
    /// reported and skipped.
    pub fn initialize<RF, RO>(&mut self, fields: &[FieldConfig], mut resolve_field: RF, mut resolve_output: RO) -> usize
    where
        RF: FnMut(&str) -> Option<F>,
        RO: FnMut(&str) -> Option<O>,
    {
        let mut bound = 0;
        for config in fields {
            if self.is_bound(&config.id) {
                debug!("Field '{}' is already bound; skipping", config.id);
                continue;
            }
            let Some(field) = resolve_field(&config.id) else {
                warn!("Numeric field '{}' not found", config.id);
                continue;
            };
            let output = match config.output_target.as_deref() {
                Some(target) => {
                    let output = resolve_output(target);
                    if output.is_none() {
                        warn!("Output target element not found for '{}': {}", config.id, target);
                    }
                    output
                }
                None => {
                    warn!("Field '{}' is missing an output target", config.id);
                    None
                }
            };
            if self.bind(config.id.clone(), field, output) {
                bound += 1;
            }
        }
        bound
    }

    pub fn handle_input(&mut self, id: &str) -> Option<FieldUpdate> {
        self.bindings.get_mut(id).map(FieldBinding::handle_input)
    }

    /// Runs the deferred caret moves of every binding; returns how many moved.
    pub fn on_frame(&mut self) -> usize {
        self.bindings.values_mut().map(|b| b.on_frame()).filter(|moved| *moved).count()
    }

    pub fn get(&self, id: &str) -> Option<&FieldBinding<F, O>> {
        self.bindings.get(id)
    }

    pub fn is_bound(&self, id: &str) -> bool {
        self.bindings.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
