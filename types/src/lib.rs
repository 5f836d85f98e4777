pub mod error_code;
pub mod status;

pub use error_code::ErrorCode;
pub use status::Status;
