//! `vibe-api` — the HTTP surface of the shop backend.
//!
//! Exposes the catalog proxy, session carts, and checkout over a JSON
//! REST API. All handlers speak the same response envelope:
//! `{"success": bool, "message"?, "data"?, ...}`.

pub mod app;
