//! HTTP feed client and refresh scheduling for stormdeck.
//!
//! [`FeedClient`] fetches the storm report feed; [`Refresher`] drives
//! the fetch → normalize → aggregate → publish cycle, once at startup
//! and then on a timer, publishing each complete result to a
//! [`SnapshotStore`]. Readers poll the store without ever blocking a
//! refresh in progress; a failed cycle publishes an explicit error
//! snapshot and waits for the next tick.

mod client;
mod config;
mod error;
mod refresher;
mod store;

pub use client::FeedClient;
pub use config::{FeedConfig, DEFAULT_FEED_URL, DEFAULT_REFRESH_SECS};
pub use error::FeedError;
pub use refresher::{FeedSource, Refresher, RefresherHandle};
pub use store::SnapshotStore;
