//! Growable, null-terminated text buffers generic over the code-unit width.
//!
//! A [`Buffer`] keeps its content in one owned allocation and always stores
//! a terminator one slot past the last element, so the content can be handed
//! to code that expects a zero-terminated sequence through
//! [`Buffer::as_terminated`] at any time.
//!
//! Growth is fallible: every operation that may allocate returns
//! `Result<_, AllocError>` and leaves the buffer as it was when allocation is
//! refused. Invalid positions and empty operands are defined no-ops rather
//! than errors.
//!
//! ```rust
//! use growstr::ByteBuffer;
//!
//! let mut buf = ByteBuffer::from("banana");
//! assert_eq!(buf.find("ana"), 1);
//! assert_eq!(buf.remove(b'a'), 3);
//! assert_eq!(buf, "bnn");
//! assert_eq!(buf.as_terminated(), b"bnn\0");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod element;
mod error;
mod options;


pub use buffer::Buffer;
pub use element::{Element, terminated_len};
pub use error::AllocError;
pub use options::GrowthPolicy;

/// Byte (UTF-8 or legacy 8-bit) buffer.
pub type ByteBuffer = Buffer<u8>;
/// UTF-16 code-unit buffer.
pub type WideBuffer = Buffer<u16>;
/// UTF-32 code-unit buffer.
pub type Utf32Buffer = Buffer<u32>;
/// Buffer of Unicode scalar values.
pub type CharBuffer = Buffer<char>;
