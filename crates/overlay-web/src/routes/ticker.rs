//! Scrolling ticker view.

use askama::Template;
use axum::extract::State;

use report_core::{ticker_items, TickerItem};

use crate::state::AppState;

/// Ticker page template.
#[derive(Template)]
#[template(path = "ticker.html")]
pub struct TickerTemplate {
    pub items: Vec<TickerItem>,
}

/// Render the scrolling ticker page.
pub async fn ticker_page(State(state): State<AppState>) -> TickerTemplate {
    let snapshot = state.store.current().await;

    TickerTemplate {
        items: ticker_items(&snapshot.data),
    }
}
