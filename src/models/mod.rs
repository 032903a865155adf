pub mod credentials;
pub mod issues;
pub mod sheets;
