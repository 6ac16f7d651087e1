//! HTTP adapter.
//!
//! Inbound adapter serving the calculator form, the JSON API, health,
//! metrics and static assets.

mod controller;
mod request;
mod response;
mod view;

pub use controller::{AppState, create_router};
pub use request::*;
pub use response::*;
pub use view::{CalculatorPage, escape_html};
