pub mod backends;
pub mod observability;
