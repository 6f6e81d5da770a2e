pub use mercenary_core::filter::{normalize_exceptions, panic_to_exception};
pub use mercenary_core::transform::transform_response;
