// src/router/mod.rs
//
// Route table, hash history and the navigation engine that ties them
// together. Nothing here knows about the concrete pages; the component type
// is generic so the matching logic can be tested without a browser.

pub mod component;
pub mod engine;
pub mod history;
pub mod params;
pub mod pattern;
pub mod table;

pub use component::{ComponentSource, DeferredComponent};
pub use engine::{Navigation, ResolvedRoute, Router};
pub use history::{path_from_hash, HashHistory};
pub use params::Params;
pub use pattern::{PathPattern, Segment};
pub use table::{RouteEntry, RouteMatch, RouteTable, RouteTableBuilder};
