use futures::future::LocalBoxFuture;

use super::component::{ComponentSource, DeferredComponent};
use super::{Params, PathPattern};
use crate::error::{LoadError, RouterError};

/// One row of the route table.
#[derive(Debug)]
pub struct RouteEntry<C: Clone> {
    name: String,
    pattern: PathPattern,
    source: ComponentSource<C>,
}

impl<C: Clone + 'static> RouteEntry<C> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn source(&self) -> &ComponentSource<C> {
        &self.source
    }
}

/// Immutable, ordered list of routes. Built once at startup.
#[derive(Debug)]
pub struct RouteTable<C: Clone> {
    entries: Vec<RouteEntry<C>>,
}

/// Collects route declarations; the first declaration error is reported by
/// `build()` so the table reads as one expression.
pub struct RouteTableBuilder<C: Clone> {
    entries: Vec<RouteEntry<C>>,
    error: Option<RouterError>,
}

impl<C: Clone + 'static> RouteTableBuilder<C> {
    /// Declare a route whose component is available from startup.
    pub fn route(self, path: &str, name: &str, component: C) -> Self {
        self.push(path, name, ComponentSource::Eager(component))
    }

    /// Declare a route whose component is fetched on first navigation.
    pub fn lazy_route<F>(self, path: &str, name: &str, loader: F) -> Self
    where
        F: Fn() -> LocalBoxFuture<'static, Result<C, LoadError>> + 'static,
    {
        self.push(path, name, ComponentSource::Deferred(DeferredComponent::new(loader)))
    }

    fn push(mut self, path: &str, name: &str, source: ComponentSource<C>) -> Self {
        if self.error.is_some() {
            return self;
        }
        match self.validate(path, name) {
            Ok(pattern) => self.entries.push(RouteEntry {
                name: name.to_string(),
                pattern,
                source,
            }),
            Err(err) => self.error = Some(err),
        }
        self
    }

    fn validate(&self, path: &str, name: &str) -> Result<PathPattern, RouterError> {
        let pattern = PathPattern::parse(path)?;
        if self.entries.iter().any(|e| e.name == name) {
            return Err(RouterError::DuplicateRouteName(name.to_string()));
        }
        if let Some(earlier) = self.entries.iter().find(|e| e.pattern.covers(&pattern)) {
            return Err(RouterError::ShadowedRoute {
                route: name.to_string(),
                by: earlier.name.clone(),
            });
        }
        Ok(pattern)
    }

    pub fn build(self) -> Result<RouteTable<C>, RouterError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(RouteTable {
                entries: self.entries,
            }),
        }
    }
}

impl<C: Clone + 'static> RouteTable<C> {
    pub fn builder() -> RouteTableBuilder<C> {
        RouteTableBuilder {
            entries: Vec::new(),
            error: None,
        }
    }

    /// Select the route for a location path. Entries are tried in
    /// declaration order; `None` is the not-found case.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, C>> {
        self.entries.iter().find_map(|entry| {
            entry
                .pattern
                .matches(path)
                .map(|params| RouteMatch { entry, params })
        })
    }

    pub fn get(&self, name: &str) -> Option<&RouteEntry<C>> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn entries(&self) -> &[RouteEntry<C>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reverse routing by route name.
    pub fn href_for(&self, name: &str, params: &Params) -> Result<String, RouterError> {
        let entry = self
            .get(name)
            .ok_or_else(|| RouterError::UnknownRoute(name.to_string()))?;
        entry.pattern.build(name, params)
    }
}

/// A route selected for a path, with the parameters it captured.
#[derive(Debug)]
pub struct RouteMatch<'a, C: Clone> {
    entry: &'a RouteEntry<C>,
    params: Params,
}

impl<'a, C: Clone + 'static> RouteMatch<'a, C> {
    pub fn name(&self) -> &'a str {
        &self.entry.name
    }

    pub fn entry(&self) -> &'a RouteEntry<C> {
        self.entry
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn into_params(self) -> Params {
        self.params
    }

    /// The component if it can be rendered immediately; `None` for a
    /// deferred route that has not been loaded yet.
    pub fn component(&self) -> Option<C> {
        self.entry.source.current()
    }

    pub async fn load(&self) -> Result<C, RouterError> {
        self.entry
            .source
            .load()
            .await
            .map_err(|err| RouterError::ComponentLoad {
                route: self.entry.name.clone(),
                reason: err.to_string(),
            })
    }
}
