//! The application's route table.

use futures::future::FutureExt;

use crate::constants::{
    ROUTE_ABOUT, ROUTE_CALENDAR, ROUTE_HOME, ROUTE_INFOGRAPHIC, ROUTE_MASTERY, ROUTE_REWIND,
};
use crate::error::RouterError;
use crate::pages::{about, Page, Section};
use crate::router::RouteTable;

pub fn app_routes() -> Result<RouteTable<Page>, RouterError> {
    RouteTable::builder()
        .route("/", ROUTE_HOME, Page::Home)
        .route("/rewind/:riotId/:region", ROUTE_REWIND, Page::Rewind(Section::Summary))
        .route(
            "/rewind/:riotId/:region/calendar",
            ROUTE_CALENDAR,
            Page::Rewind(Section::Calendar),
        )
        .route(
            "/rewind/:riotId/:region/infographic",
            ROUTE_INFOGRAPHIC,
            Page::Rewind(Section::Infographic),
        )
        .route(
            "/rewind/:riotId/:region/mastery",
            ROUTE_MASTERY,
            Page::Rewind(Section::Mastery),
        )
        // Fetched on first visit only.
        .lazy_route("/about", ROUTE_ABOUT, || about::load().boxed_local())
        .build()
}
