//! Fixed-capacity, overwrite-on-full ring buffer
//!
//! A bounded FIFO window for recent history: event logs, telemetry samples,
//! anything where only the last `N` values matter.
//!
//! - **Bounded**: memory is allocated once, at construction
//! - **Overwrite on full**: a write into a full buffer evicts the oldest value
//! - **Thread-safe**: every operation runs under one lock; share via `Arc`
//! - **Snapshots**: `read` returns an owned copy, oldest first
//! - **Resize**: produces a new buffer with the same contents, source untouched
//!
//! # Quick Start
//!
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let buf = RingBuffer::new(3)?;
//! for event in ["a", "b", "c", "d"] {
//!     buf.write(event.to_string());
//! }
//! assert_eq!(buf.read(), ["b", "c", "d"]);
//!
//! let bigger = buf.resize(5)?;
//! bigger.write("e".to_string());
//! assert_eq!(bigger.read(), ["b", "c", "d", "e"]);
//! # Ok::<(), ringbuffer::RingBufferError>(())
//! ```

pub mod buffer;
pub mod config;
pub mod element;
pub mod errors;
pub mod telemetry;

pub use buffer::{RingBuffer, RingBufferStatus};
pub use config::RingBufferConfig;
pub use element::Element;
pub use errors::{Result, RingBufferError};
