//! Named p-value series
//!
//! A series is the unit the dataset manages: a label, the raw p-values,
//! and optional display attributes. Color and properties are carried
//! opaquely for the rendering collaborator; the numeric core never
//! interprets them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One named series of raw p-values with optional display attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    label: String,
    values: Vec<f64>,
    color: Option<String>,
    properties: HashMap<String, String>,
}

impl Series {
    /// Create a series from a label and raw p-values
    ///
    /// Values are validated lazily, when coordinates are requested;
    /// adding a series computes nothing.
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
            color: None,
            properties: HashMap::new(),
        }
    }

    /// Attach a display color for the renderer
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Attach an opaque display property for the renderer
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    /// Number of p-values in the series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
