pub mod auth_service;
pub mod forum_store;
pub mod notification_service;
pub mod question_service;
pub mod seed;
pub mod vote_ledger;
