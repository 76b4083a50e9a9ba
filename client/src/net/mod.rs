//! Networking: the REST client for the generation service.

pub mod api;
