//! Serializable view models for the event list, landing page, image map and
//! statistics page.
//!
//! Nothing here renders; callers turn the models into tables, JSON or
//! whatever their surface needs.

pub mod charts;
pub mod detail;
pub mod map;
pub mod pagination;

pub use charts::{ColumnChart, Dashboard, LineChart, PieChart, load_dashboard};
pub use detail::{
    DEFAULT_LATEST_COUNT, EventDetail, PortraitRow, capitalize, event_from_query, event_link,
    latest_events, parse_event_id,
};
pub use map::{MapConfig, MapView, Marker, PopupCard, build_markers, load_map, load_popup};
pub use pagination::{DEFAULT_PER_PAGE, EventRow, EventTable, Paginator};
