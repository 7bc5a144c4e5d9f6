//! Typed response structures for the Kalshi REST API.
//!
//! Only the fields we consume are modeled; the API returns many more and
//! serde ignores them.

use serde::Deserialize;

/// One market from `GET /trade-api/v2/markets`.
#[derive(Debug, Clone, Deserialize)]
pub struct Market {
    /// Market ticker (e.g., "KXHIGHNY-25AUG23-B85").
    pub ticker: String,
    /// Ticker of the event this market belongs to.
    #[serde(default)]
    pub event_ticker: Option<String>,
    /// Human-readable market title.
    #[serde(default)]
    pub title: Option<String>,
    /// Market lifecycle status (e.g., "active", "closed", "settled").
    #[serde(default)]
    pub status: Option<String>,
    /// Best bid for the YES side, in cents.
    #[serde(default)]
    pub yes_bid: Option<i64>,
    /// Best ask for the YES side, in cents.
    #[serde(default)]
    pub yes_ask: Option<i64>,
    /// Contracts traded over the market lifetime.
    #[serde(default)]
    pub volume: Option<i64>,
}

/// Response envelope for `GET /trade-api/v2/markets`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketsResponse {
    /// Markets in this page.
    pub markets: Vec<Market>,
    /// Pagination cursor; empty or absent on the last page.
    #[serde(default)]
    pub cursor: Option<String>,
}
