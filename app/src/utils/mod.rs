pub mod global_error_handler;
pub mod patch;
pub mod response;
