pub mod answers;
pub mod auth;
pub mod notifications;
pub mod questions;
pub mod tags;
pub mod users;
