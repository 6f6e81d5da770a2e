pub mod exception;
pub mod extract;
pub mod filter;
pub mod response;
pub mod transform;
