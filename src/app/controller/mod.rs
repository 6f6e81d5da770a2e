pub mod health;
pub mod mercenary;
