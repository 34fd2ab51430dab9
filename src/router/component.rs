//! Eager and deferred (lazy) route components.
//!
//! A deferred component is only fetched when its route is first visited.
//! The successful result is cached for the rest of the session; a failed
//! load leaves nothing behind so the next visit tries again.

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::LoadError;

type Loader<C> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<C, LoadError>>>;
type InFlight<C> = Shared<LocalBoxFuture<'static, Result<C, LoadError>>>;

enum LoadState<C: Clone> {
    Idle,
    Loading(InFlight<C>),
    Ready(C),
}

pub struct DeferredComponent<C: Clone> {
    loader: Loader<C>,
    state: Rc<RefCell<LoadState<C>>>,
}

impl<C: Clone + 'static> DeferredComponent<C> {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> LocalBoxFuture<'static, Result<C, LoadError>> + 'static,
    {
        Self {
            loader: Rc::new(loader),
            state: Rc::new(RefCell::new(LoadState::Idle)),
        }
    }

    /// The component if an earlier load finished successfully.
    pub fn loaded(&self) -> Option<C> {
        match &*self.state.borrow() {
            LoadState::Ready(component) => Some(component.clone()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(&*self.state.borrow(), LoadState::Loading(_))
    }

    /// Resolve the component, starting the loader if nobody has yet.
    /// Callers arriving while a load is in flight await the same future.
    pub async fn load(&self) -> Result<C, LoadError> {
        let in_flight = {
            let mut state = self.state.borrow_mut();
            match &*state {
                LoadState::Ready(component) => return Ok(component.clone()),
                LoadState::Loading(in_flight) => in_flight.clone(),
                LoadState::Idle => {
                    let in_flight = (self.loader)().shared();
                    *state = LoadState::Loading(in_flight.clone());
                    in_flight
                }
            }
        };

        let result = in_flight.await;

        let mut state = self.state.borrow_mut();
        if let LoadState::Loading(_) = &*state {
            *state = match &result {
                Ok(component) => LoadState::Ready(component.clone()),
                Err(_) => LoadState::Idle,
            };
        }
        result
    }
}

impl<C: Clone> fmt::Debug for DeferredComponent<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &*self.state.borrow() {
            LoadState::Idle => "idle",
            LoadState::Loading(_) => "loading",
            LoadState::Ready(_) => "ready",
        };
        f.debug_struct("DeferredComponent").field("state", &state).finish()
    }
}

/// How a route obtains the component it renders.
#[derive(Debug)]
pub enum ComponentSource<C: Clone> {
    /// Available from startup.
    Eager(C),
    /// Fetched on first navigation.
    Deferred(DeferredComponent<C>),
}

impl<C: Clone + 'static> ComponentSource<C> {
    /// What can be rendered right now without waiting.
    pub fn current(&self) -> Option<C> {
        match self {
            ComponentSource::Eager(component) => Some(component.clone()),
            ComponentSource::Deferred(deferred) => deferred.loaded(),
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, ComponentSource::Deferred(_))
    }

    pub async fn load(&self) -> Result<C, LoadError> {
        match self {
            ComponentSource::Eager(component) => Ok(component.clone()),
            ComponentSource::Deferred(deferred) => deferred.load().await,
        }
    }
}
