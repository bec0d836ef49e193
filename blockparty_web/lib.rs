pub mod handlers;
mod http;
mod templates;
pub mod views;

pub use http::*;
