//! User input adapters feeding collection views.

pub mod debounce;

pub use debounce::{forward_search, DebouncedInput, Debouncer, DEFAULT_DEBOUNCE};
