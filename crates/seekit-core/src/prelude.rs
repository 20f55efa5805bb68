//! Prelude - commonly used functions and traits

pub use crate::indexed::{
    binary_search, exponential_search, fibonacci_search, interpolation_search, jump_search,
    linear_search, recursive_linear_search, Interpolate,
};
pub use crate::linked::{recursive_sublist_search, sublist_search};
