//! Teams module - list the teams of an organization

mod api;
mod models;

pub use models::Team;
