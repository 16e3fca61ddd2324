//! # PawCare API
//!
//! Backend for a pet-care marketplace: pet owners request care services from
//! verified caretakers, and an administrator reviews caretaker accounts. This
//! crate implements the marketplace's access-control core: session-token
//! authentication and the role-gated dashboard areas, together with the
//! auth endpoints that feed it.
//!
//! ## Architecture
//!
//! The codebase follows a modular structure:
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (JWT, CORS)
//! ├── middleware/       # Session extractor and the dashboard gate
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login, register, logout, current-user
//! │   ├── users/       # User entity, roles, user store
//! │   └── dashboard/   # Role-scoped dashboard endpoints
//! └── utils/           # Shared utilities (errors, JWT, password hashing)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models and DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Roles and dashboards
//!
//! | Role | Dashboard | Description |
//! |------|-----------|-------------|
//! | `admin` | `/dashboard/admin` | Reviews and verifies caretaker accounts |
//! | `caretaker` | `/dashboard/zoo-manager` | Logs care activities for assigned pets |
//! | `owner` | `/dashboard/user` | Requests care services for their pets |
//!
//! ## Authentication
//!
//! Sessions are JWTs (HS256) carried in an HTTP-only `token` cookie, valid
//! for 7 days. Every request under `/dashboard` passes through the gate in
//! [`middleware::gate`] before reaching a handler: no cookie, a bad token, or
//! a role mismatch all redirect to `/login` with the requested path preserved
//! in a `redirect` query parameter. Logout deletes the cookie; the token
//! itself stays valid until expiry (there is no server-side revocation list).
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key   # required; protected routes deny without it
//! SESSION_EXPIRY=604800               # optional, seconds (default 7 days)
//! CORS_ALLOWED_ORIGINS=http://localhost:3000
//! ENVIRONMENT=production              # marks session cookies Secure
//! ```

pub mod config;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
