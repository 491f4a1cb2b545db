pub mod constants;
pub mod repeat;
pub mod wrap;

#[cfg(test)]
mod tests;

pub use repeat::{repeat, repeated, Repeat};
pub use wrap::{wrap, wrap_default, LineWrapper, Measure, WrapError, WrappedLines};
