mod backends;
mod observability;
