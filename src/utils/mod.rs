pub mod constants;
pub mod timestamp;
