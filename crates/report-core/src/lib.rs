//! Core model and rendering for the stormdeck storm-report overlay.
//!
//! This crate is the pure heart of the pipeline: it turns a raw
//! GeoJSON feature collection into normalized [`StormReport`]s,
//! aggregates them into an ordered [`AggregatedModel`], and renders
//! that model into every presentation shape the overlay serves:
//!
//! - [`render_canonical`] - the multi-line text summary that is the
//!   system's source-of-truth output
//! - [`ticker_items`] - the scrolling ticker
//! - [`compact_model`] - the compact card
//! - [`dashboard_model`] - the statistics dashboard
//!
//! All renderers consume the same [`FeedData`] value; none of them
//! parse another renderer's output. There is no I/O here - fetching
//! and scheduling live in the `feed-client` crate.

mod aggregate;
mod feed;
mod model;
mod normalize;
mod render;

pub use aggregate::aggregate;
pub use feed::{parse_feed, FeedPayload, RawFeedRecord};
pub use model::{
    weather_emoji, AggregatedModel, FeedData, ReportGroup, Snapshot, StateCount, StormReport,
};
pub use normalize::normalize;
pub use render::{
    compact_model, dashboard_model, render_canonical, ticker_items, CompactModel, DashboardCard,
    DashboardGroup, DashboardModel, TickerItem, DISPLAY_TZ,
};
