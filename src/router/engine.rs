//! Navigation on top of a `RouteTable`.
//!
//! The browser runs everything on one thread, so state lives in `Cell` /
//! `RefCell` and the router is shared through `Rc`. The only await point is
//! a deferred component load; a navigation that started later wins.

use std::cell::{Cell, RefCell};

use super::{Params, RouteTable};
use crate::debug_log;
use crate::error::RouterError;

/// A route that has been matched and whose component is ready to mount.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute<C> {
    pub name: String,
    pub path: String,
    pub params: Params,
    pub component: C,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Navigation<C> {
    Mounted(ResolvedRoute<C>),
    /// No entry matched; the caller decides what a blank view looks like.
    NotFound { path: String },
    /// A newer navigation started while this one waited for its component.
    Superseded,
}

pub struct Router<C: Clone> {
    table: RouteTable<C>,
    generation: Cell<u64>,
    current: RefCell<Option<ResolvedRoute<C>>>,
}

impl<C: Clone + 'static> Router<C> {
    pub fn new(table: RouteTable<C>) -> Self {
        Self {
            table,
            generation: Cell::new(0),
            current: RefCell::new(None),
        }
    }

    pub fn table(&self) -> &RouteTable<C> {
        &self.table
    }

    pub fn current(&self) -> Option<ResolvedRoute<C>> {
        self.current.borrow().clone()
    }

    pub fn href_for(&self, name: &str, params: &Params) -> Result<String, RouterError> {
        self.table.href_for(name, params)
    }

    pub async fn navigate(&self, path: &str) -> Result<Navigation<C>, RouterError> {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let Some(matched) = self.table.resolve(path) else {
            debug_log!("No route matches {}", path);
            *self.current.borrow_mut() = None;
            return Ok(Navigation::NotFound {
                path: path.to_string(),
            });
        };

        let component = match matched.component() {
            Some(component) => component,
            None => {
                debug_log!("Loading deferred component for route `{}`", matched.name());
                let loaded = matched.load().await;
                if self.generation.get() != generation {
                    debug_log!("Navigation to {} superseded while loading", path);
                    return Ok(Navigation::Superseded);
                }
                loaded?
            }
        };

        let resolved = ResolvedRoute {
            name: matched.name().to_string(),
            path: path.to_string(),
            params: matched.into_params(),
            component,
        };
        debug_log!(
            "Route `{}` matched {} with params {}",
            resolved.name,
            path,
            serde_json::to_string(&resolved.params).unwrap_or_default()
        );
        *self.current.borrow_mut() = Some(resolved.clone());
        Ok(Navigation::Mounted(resolved))
    }
}
