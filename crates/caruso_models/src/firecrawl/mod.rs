//! Firecrawl content-extraction client.

mod client;

pub use client::FirecrawlClient;
