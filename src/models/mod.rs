pub mod auth;
pub mod categories;
pub mod common;
pub mod criteria;
pub mod evaluations;
pub mod questions;
pub mod rubrics;
pub mod scores;
pub mod softwares;
pub mod users;

pub use common::{ApiResponse, ErrorCode, Owner, OwnershipFilter};
