//! Members module - list the members of a team

mod api;
mod models;

pub use models::Member;
