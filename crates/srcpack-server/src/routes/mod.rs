//! Route groups for the server.

pub mod download;
pub mod health;
