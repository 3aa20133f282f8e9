//! A forward-scanning cursor over indexable sequences.
//!
//! [`Scanner`] walks any [`Collection`] (string slices, byte strings, slices
//! of tokens) and offers the primitives hand-written lexers are built from:
//! non-destructive lookahead (`peek*`), consuming matches that report
//! nothing (`skip*`), consuming matches that return the consumed span
//! (`scan*`), and checked matches that report failures (`expect*`).
//!
//! Nothing in the core API fails. A match that does not apply leaves the
//! position where it was, and requests that run past the end saturate there.
//!
//! ```rust
//! use seqscan::Scanner;
//!
//! let mut s = Scanner::new("width = 120px;");
//! let key = s.scan_while(char::is_alphabetic);
//! s.skip_set(" =");
//! let number = s.scan_set('0'..='9');
//! let unit = s.scan_up_to(';');
//!
//! assert_eq!((key, number, unit), ("width", "120", "px"));
//! assert_eq!(s.peek(), Some(';'));
//! ```
//!
//! # Features
//!
//! - `std` (default): [`ElementSet`] for `std::collections::HashSet`.
//! - `tracing`: emits `trace`-level events under the `seqscan::scanner`
//!   target when positions are clamped or matches are abandoned.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod trace;

mod collection;
mod element_set;
mod error;
mod scanner;

#[cfg(test)]
mod tests;

pub use collection::Collection;
pub use element_set::ElementSet;
pub use error::ScanError;
pub use scanner::{Checkpoint, Scanner};
