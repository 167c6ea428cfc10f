pub mod auth;
pub mod error;
pub mod extract;
pub mod routes;
pub mod sanitize;
pub mod services;
pub mod state;
