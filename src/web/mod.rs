//! Web server module
//!
//! Provides the JSON API and the demo page.

mod handlers;
mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
