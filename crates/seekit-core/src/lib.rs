//! # Seekit Core
//!
//! Classical search algorithms over generic ordered containers:
//! - [`linear_search`] / [`recursive_linear_search`] — order-free scans
//! - [`binary_search`], [`jump_search`], [`interpolation_search`],
//!   [`exponential_search`], [`fibonacci_search`] — searches over sorted slices
//! - [`sublist_search`] / [`recursive_sublist_search`] — contiguous-run
//!   matching over forward-only cursors
//!
//! Every operation is a pure query returning `bool`: inputs are borrowed for
//! the duration of the call, nothing is retained and nothing is mutated.
//! Sorting is always the caller's job — the sorted-input algorithms state the
//! precondition but never validate it.

pub mod indexed;
pub mod linked;
pub mod prelude;

pub use indexed::{
    binary_search, exponential_search, fibonacci_search, interpolation_search, jump_search,
    linear_search, recursive_linear_search, Interpolate,
};
pub use linked::{recursive_sublist_search, sublist_search};
