pub mod debounce;
pub mod error;
pub mod filter;
pub mod monitor;
