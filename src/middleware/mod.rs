//! Middleware for request processing.
//!
//! - [`auth`]: Session-cookie extractor used by handlers for their own
//!   identity checks
//! - [`gate`]: The dashboard gate, layered over `/dashboard` so that no
//!   protected request reaches a handler without a valid, role-matched
//!   session
//!
//! # Authentication Flow
//!
//! 1. Client logs in; the session token is set as an HTTP-only `token` cookie
//! 2. Every `/dashboard` request passes the gate: cookie → token validation →
//!    route-policy role check, redirecting to `/login` on any failure
//! 3. Handlers extract [`auth::AuthUser`] to re-verify and read the identity

pub mod auth;
pub mod gate;
