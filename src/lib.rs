//! Syntax checks for IPv4 and IPv6 address literals.
//!
//! The `addr` module scans dotted-quad and colon-hex notation, including
//! the `::` zero compaction and the embedded dotted-quad tail. The `check`
//! module wraps it behind two total predicates that take a [`Candidate`]
//! of any runtime shape and answer with a plain boolean.

pub mod addr;
pub mod check;

pub use crate::check::is_valid_ipv4;
pub use crate::check::is_valid_ipv6;
pub use crate::check::Candidate;
