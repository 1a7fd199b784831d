//! Authentication and authorization for the shop.
//!
//! `service` turns credentials into tokens and tokens back into a
//! [`Principal`](models::Principal); `guard` decides whether that principal may
//! touch a given resource.

pub mod errors;
pub mod guard;
pub mod models;
pub mod ports;
pub mod resolver;
pub mod service;

pub use guard::authorize;
pub use resolver::IdentityResolver;
