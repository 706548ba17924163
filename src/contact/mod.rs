//! # Contact Module
//!
//! The contact-form submission pipeline:
//! - Input validation and normalization
//! - Persistence into the submission store
//! - Best-effort confirmation and notification emails
//! - Allow-list CORS policy for the public endpoint

pub mod cors;
pub mod emails;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;


pub use routes::contact_routes;
