pub mod error_code;
pub mod pagination;
pub mod response;

pub use error_code::ErrorCode;
pub use pagination::{PaginationInfo, PaginationQuery, clamp_page, clamp_size};
pub use response::{ApiResponse, ResponseMetadata};
