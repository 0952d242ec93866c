//! Reuse identifier registry.
//!
//! A reuse identifier is a dotted two-part token, `Bundle.ViewName`: the
//! bundle groups related views (usually one feature or screen), the view name
//! picks one view within it. Before a widget can dequeue a view for an
//! identifier, a [`ViewTemplate`] for it must be registered with the widget.
//!
//! The [`ViewRegistry`] is where templates come from. The application fills it
//! at startup with one factory per identifier; the adapter resolves
//! identifiers against it whenever rows or headers arrive and registers each
//! template with the widget the first time it is seen.
//!
//! # Example
//!
//! ```
//! use ribbon::registry::ViewRegistry;
//! use ribbon::view::ReusableView;
//!
//! #[derive(Default)]
//! struct SpacerCell;
//! impl ReusableView for SpacerCell {}
//!
//! let registry = ViewRegistry::new();
//! registry.register_view::<SpacerCell>("Common.SpacerCell").unwrap();
//!
//! let template = registry.resolve("Common.SpacerCell").unwrap();
//! assert_eq!(template.identifier().bundle(), "Common");
//! assert_eq!(template.identifier().view_name(), "SpacerCell");
//! assert!(registry.resolve("Common.Missing").is_none());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use ribbon_core::logging::targets;

use crate::error::{AdapterError, Result};
use crate::view::ReusableView;

/// A parsed `Bundle.ViewName` reuse identifier.
///
/// The view name is the second dot-separated component; any further
/// components are kept in the identifier string but do not change the view
/// name.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ReuseIdentifier {
    raw: String,
    bundle_end: usize,
    view_name_end: usize,
}

impl ReuseIdentifier {
    /// Parses a reuse identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::InvalidReuseIdentifier`] when the token has no
    /// dot or when either the bundle or the view name is empty.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || AdapterError::InvalidReuseIdentifier(raw.to_string());

        let bundle_end = raw.find('.').ok_or_else(invalid)?;
        let rest = &raw[bundle_end + 1..];
        let view_name_len = rest.find('.').unwrap_or(rest.len());

        if bundle_end == 0 || view_name_len == 0 {
            return Err(invalid());
        }

        Ok(Self {
            raw: raw.to_string(),
            bundle_end,
            view_name_end: bundle_end + 1 + view_name_len,
        })
    }

    /// Returns the full identifier string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the bundle component.
    pub fn bundle(&self) -> &str {
        &self.raw[..self.bundle_end]
    }

    /// Returns the view name component.
    pub fn view_name(&self) -> &str {
        &self.raw[self.bundle_end + 1..self.view_name_end]
    }
}

impl FromStr for ReuseIdentifier {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for ReuseIdentifier {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ReuseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl fmt::Debug for ReuseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReuseIdentifier({:?})", self.raw)
    }
}

/// Constructor for fresh view instances.
pub type ViewFactory = Arc<dyn Fn() -> Box<dyn ReusableView> + Send + Sync>;

/// A view template: what a widget stores per reuse identifier so it can
/// create new views when its reuse pool runs dry.
#[derive(Clone)]
pub struct ViewTemplate {
    identifier: ReuseIdentifier,
    factory: ViewFactory,
}

impl ViewTemplate {
    /// Creates a template from an identifier and a factory.
    pub fn new<F>(identifier: ReuseIdentifier, factory: F) -> Self
    where
        F: Fn() -> Box<dyn ReusableView> + Send + Sync + 'static,
    {
        Self {
            identifier,
            factory: Arc::new(factory),
        }
    }

    /// Returns the identifier this template is registered under.
    pub fn identifier(&self) -> &ReuseIdentifier {
        &self.identifier
    }

    /// Creates a new view instance.
    pub fn instantiate(&self) -> Box<dyn ReusableView> {
        (self.factory)()
    }
}

impl fmt::Debug for ViewTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewTemplate")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

/// Maps reuse identifiers to view factories.
///
/// The registry is shared (`Arc<ViewRegistry>`) between every adapter of an
/// application and is safe to populate through a shared reference.
#[derive(Default)]
pub struct ViewRegistry {
    templates: RwLock<HashMap<String, ViewTemplate>>,
}

impl ViewRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory under `identifier`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::InvalidReuseIdentifier`] if `identifier` is not
    /// a `Bundle.ViewName` token.
    pub fn register<F>(&self, identifier: &str, factory: F) -> Result<()>
    where
        F: Fn() -> Box<dyn ReusableView> + Send + Sync + 'static,
    {
        let parsed = ReuseIdentifier::parse(identifier)?;
        let template = ViewTemplate::new(parsed, factory);
        if self
            .templates
            .write()
            .insert(identifier.to_string(), template)
            .is_some()
        {
            tracing::debug!(target: targets::REGISTRY, identifier, "replaced view factory");
        } else {
            tracing::trace!(target: targets::REGISTRY, identifier, "registered view factory");
        }
        Ok(())
    }

    /// Registers `V::default` as the factory for `identifier`.
    pub fn register_view<V>(&self, identifier: &str) -> Result<()>
    where
        V: ReusableView + Default,
    {
        self.register(identifier, || Box::new(V::default()) as Box<dyn ReusableView>)
    }

    /// Resolves an identifier to its template.
    ///
    /// Returns `None` for unknown or malformed identifiers.
    pub fn resolve(&self, identifier: &str) -> Option<ViewTemplate> {
        self.templates.read().get(identifier).cloned()
    }

    /// Returns `true` if a factory is registered under `identifier`.
    pub fn contains(&self, identifier: &str) -> bool {
        self.templates.read().contains_key(identifier)
    }

    /// Removes the factory registered under `identifier`.
    pub fn unregister(&self, identifier: &str) -> bool {
        self.templates.write().remove(identifier).is_some()
    }

    /// Returns the number of registered identifiers.
    pub fn len(&self) -> usize {
        self.templates.read().len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.templates.read().is_empty()
    }

    /// Returns the registered identifiers, sorted.
    pub fn identifiers(&self) -> Vec<String> {
        let mut identifiers: Vec<String> = self.templates.read().keys().cloned().collect();
        identifiers.sort();
        identifiers
    }
}

impl fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("identifiers", &self.identifiers())
            .finish()
    }
}

static_assertions::assert_impl_all!(ViewRegistry: Send, Sync);
