//! Client for a quotes REST service.
//!
//! The page logic ([`page::Page`]) runs against an in-memory document and
//! talks to the service through [`client::QuoteStore`]. The terminal UI in
//! [`app`] is one host for it; tests drive the same page directly.

pub mod app;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod dom;
pub mod error;
pub mod list;
pub mod page;
pub mod render;
pub mod runtime;
pub mod state;
pub mod ui;
