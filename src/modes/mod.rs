//! The five merge handlers, one module per combination strategy.
//!
//! Every handler is a pure function of its explicit inputs: two borrowed
//! record streams and a configuration. None of them mutate their inputs or
//! hold state across calls.

/// Concatenation of both streams.
pub mod append;
/// Branch pass-through by index.
pub mod branch;
/// Full cross product.
pub mod cross;
/// Field-matched join.
pub mod field_join;
/// Positional zip.
pub mod position;

#[cfg(test)]
mod append_test;
#[cfg(test)]
mod cross_test;
