pub mod datetime;
pub mod owner;
pub mod response;

pub use owner::{Owner, OwnershipFilter};
pub use response::{ApiResponse, ErrorCode};
