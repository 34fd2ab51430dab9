//! Constants for the frontend application
//!
//! Route and parameter names are referenced from the route table, the views
//! and the tests, so they live here to keep them in sync.

// Route names
pub const ROUTE_HOME: &str = "home";
pub const ROUTE_REWIND: &str = "rewind";
pub const ROUTE_CALENDAR: &str = "calendar";
pub const ROUTE_INFOGRAPHIC: &str = "infographic";
pub const ROUTE_MASTERY: &str = "mastery";
pub const ROUTE_ABOUT: &str = "about";

// Path parameters
pub const PARAM_RIOT_ID: &str = "riotId";
pub const PARAM_REGION: &str = "region";

// Element IDs
pub const ID_APP_CONTAINER: &str = "app-container";
pub const ID_HOME_FORM: &str = "home-search-form";
pub const ID_RIOT_ID_INPUT: &str = "riot-id-input";
pub const ID_REGION_SELECT: &str = "region-select";

// CSS Class Names
pub const CSS_PAGE: &str = "page";
pub const CSS_SECTION_NAV: &str = "section-nav";
pub const CSS_NAV_LINK: &str = "nav-link";
pub const CSS_NAV_LINK_ACTIVE: &str = "nav-link active";

/// Riot routing regions accepted by the backend (`americas` is its default).
pub const REGIONS: [&str; 4] = ["americas", "asia", "europe", "sea"];

/// Fragment fetched on first navigation to `/about`, relative to the base URL.
pub const ABOUT_FRAGMENT_PATH: &str = "views/about.html";
