//! Sink registry for sink discovery and selection
//!
//! This module provides a centralized registry for all available sinks.
//! Sinks are stateful, so the registry stores factories and hands out a fresh
//! sink for every conversion.

use crate::error::MarkrefError;
use crate::sink::Sink;
use crate::sinks::{FragmentSink, MarkdownSink, SinkOptions, TextSink};
use std::collections::HashMap;

/// Builds a fresh sink from the registry's options.
pub type SinkFactory = Box<dyn Fn(&SinkOptions) -> Box<dyn Sink>>;

struct Entry {
    extensions: &'static [&'static str],
    factory: SinkFactory,
}

/// Registry of sinks
///
/// # Examples
///
/// ```ignore
/// let registry = SinkRegistry::with_defaults();
/// let markdown = registry.convert_html("<p>Hello</p>", "markdown")?;
/// ```
pub struct SinkRegistry {
    options: SinkOptions,
    sinks: HashMap<String, Entry>,
}

impl SinkRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::with_options(SinkOptions::default())
    }

    /// Create a new empty registry whose factories receive `options`
    pub fn with_options(options: SinkOptions) -> Self {
        SinkRegistry {
            options,
            sinks: HashMap::new(),
        }
    }

    /// Register a sink factory
    ///
    /// If a sink with the same name already exists, it will be replaced.
    pub fn register<F>(&mut self, name: &str, extensions: &'static [&'static str], factory: F)
    where
        F: Fn(&SinkOptions) -> Box<dyn Sink> + 'static,
    {
        self.sinks.insert(
            name.to_string(),
            Entry {
                extensions,
                factory: Box::new(factory),
            },
        );
    }

    /// Build a fresh sink by name
    pub fn create(&self, name: &str) -> Result<Box<dyn Sink>, MarkrefError> {
        self.sinks
            .get(name)
            .map(|entry| (entry.factory)(&self.options))
            .ok_or_else(|| MarkrefError::SinkNotFound(name.to_string()))
    }

    /// Check if a sink exists
    pub fn has(&self, name: &str) -> bool {
        self.sinks.contains_key(name)
    }

    /// List all available sink names (sorted)
    pub fn list_sinks(&self) -> Vec<String> {
        let mut names: Vec<_> = self.sinks.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn options(&self) -> &SinkOptions {
        &self.options
    }

    /// Detect the sink for an output filename based on its extension
    ///
    /// ```ignore
    /// let registry = SinkRegistry::default();
    /// assert_eq!(registry.detect_sink_from_filename("out.md"), Some("markdown".to_string()));
    /// assert_eq!(registry.detect_sink_from_filename("out.bin"), None);
    /// ```
    pub fn detect_sink_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        let mut names = self.list_sinks();
        names.retain(|name| self.sinks[name].extensions.contains(&extension));
        names.into_iter().next()
    }

    /// Convert HTML (or plain text) with the named sink
    pub fn convert_html(&self, source: &str, name: &str) -> Result<String, MarkrefError> {
        let mut sink = self.create(name)?;
        let target: &mut dyn Sink = sink.as_mut();
        crate::html::convert_html(&mut [target], source);
        Ok(sink.output())
    }

    /// Create a registry with the built-in sinks, configured by `options`
    pub fn with_defaults_and_options(options: SinkOptions) -> Self {
        let mut registry = Self::with_options(options);

        registry.register("markdown", &["md", "markdown"], |_| {
            Box::new(MarkdownSink::new())
        });
        registry.register("text", &["txt"], |options| {
            Box::new(TextSink::new(options.text.clone()))
        });
        registry.register("fragments", &["json"], |options| {
            Box::new(FragmentSink::new(options.fragments.clone()))
        });

        registry
    }

    /// Create a registry with default sinks
    pub fn with_defaults() -> Self {
        Self::with_defaults_and_options(SinkOptions::default())
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
