//! First-success-wins fallback chains.
//!
//! Export markup drifts between versions, so most facts have several ways to
//! be found. Each way is a plain function from some context to an optional
//! value; a chain is an ordered slice of them.
//!
//! ```
//! use igw::extract::strategy::first_success;
//!
//! fn exact(s: &str) -> Option<u32> { s.parse().ok() }
//! fn leading(s: &str) -> Option<u32> {
//!     s.split_whitespace().next()?.parse().ok()
//! }
//!
//! assert_eq!(first_success("42 posts", &[exact, leading]), Some(42));
//! assert_eq!(first_success("none", &[exact, leading]), None);
//! ```

/// One way of extracting a `T` from a context `C`.
pub type Strategy<C, T> = fn(&C) -> Option<T>;

/// Apply `strategies` in order and return the first value produced.
pub fn first_success<C: ?Sized, T>(ctx: &C, strategies: &[Strategy<C, T>]) -> Option<T> {
    strategies.iter().find_map(|strategy| strategy(ctx))
}
