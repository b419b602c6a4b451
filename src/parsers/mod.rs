//! Parser for ABC notation tune collections
//!
//! # Error Handling Strategy
//!
//! The parsing core is pure string processing and cannot fail:
//!
//! - **Missing fields**: Segments missing optional fields (type, key, meter)
//!   fall back to defaults rather than erroring.
//!
//! - **Untitled segments**: Segments without a `T:` line are not valid tunes
//!   and are dropped silently. This is policy, not an error condition, so no
//!   warning is emitted and no count is surfaced.
//!
//! - **Encoding**: The parser expects text that already went through lossy
//!   UTF-8 recovery at the file-reading boundary and never re-validates
//!   encoding itself.
//!
//! The only caller-visible "failure" is an empty result, which is not
//! distinguished from a file that legitimately contained zero tunes.

pub mod abc;

pub use abc::extract_tunes;
