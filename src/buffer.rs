//! Fixed-capacity ring buffer
//!
//! `RingBuffer<T>` stores up to `capacity` elements in a circular array.
//! Writes land at the write cursor and advance it modulo capacity; once the
//! buffer is full every write overwrites the oldest element.
//!
//! All state lives behind one `parking_lot::Mutex`. Each public operation
//! takes the lock for its full duration, so callers can share a buffer as
//! `Arc<RingBuffer<T>>` and never observe a half-applied write.

use crate::element::Element;
use crate::errors::{Result, RingBufferError};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Point-in-time view of a buffer's bookkeeping, taken under a single lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingBufferStatus {
    pub capacity: usize,
    pub write_index: usize,
    pub len: usize,
    pub is_full: bool,
    pub is_empty: bool,
}

#[derive(Clone)]
struct Inner<T> {
    /// Always exactly `capacity` slots; stale slots are left in place.
    storage: Vec<T>,
    write_index: usize,
    len: usize,
}

impl<T: Element> Inner<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![T::default(); capacity],
            write_index: 0,
            len: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Physical slot of the oldest valid element.
    fn head(&self) -> usize {
        let capacity = self.capacity();
        (self.write_index + capacity - self.len) % capacity
    }

    fn push(&mut self, value: T) {
        let capacity = self.capacity();
        self.storage[self.write_index] = value;
        self.write_index = (self.write_index + 1) % capacity;
        if self.len < capacity {
            self.len += 1;
        }
    }

    /// Valid elements oldest to newest, copied out in at most two slices.
    fn snapshot(&self) -> Vec<T> {
        let head = self.head();
        let first = (self.capacity() - head).min(self.len);
        let mut out = Vec::with_capacity(self.len);
        out.extend_from_slice(&self.storage[head..head + first]);
        out.extend_from_slice(&self.storage[..self.len - first]);
        out
    }

    /// Copy the logical contents into fresh storage of `new_capacity` slots.
    ///
    /// The cursor is kept when it fits and wrapped otherwise; elements are
    /// laid out backwards from it so the read order is unchanged.
    fn reflow(&self, new_capacity: usize) -> Self {
        let mut next = Self::with_capacity(new_capacity);
        next.write_index = self.write_index % new_capacity;
        next.len = self.len;

        let src_head = self.head();
        let dst_head = next.head();
        for i in 0..self.len {
            next.storage[(dst_head + i) % new_capacity] =
                self.storage[(src_head + i) % self.capacity()].clone();
        }
        next
    }

    fn clear(&mut self) {
        self.storage.fill(T::default());
        self.write_index = 0;
        self.len = 0;
    }

    fn status(&self) -> RingBufferStatus {
        RingBufferStatus {
            capacity: self.capacity(),
            write_index: self.write_index,
            len: self.len,
            is_full: self.len == self.capacity(),
            is_empty: self.len == 0,
        }
    }
}

/// Thread-safe, fixed-capacity, overwrite-on-full FIFO buffer.
pub struct RingBuffer<T> {
    inner: Mutex<Inner<T>>,
}

impl<T: Element> RingBuffer<T> {
    /// Create an empty buffer holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RingBufferError::InvalidCapacity);
        }
        debug!(capacity, "Ring buffer created");
        Ok(Self {
            inner: Mutex::new(Inner::with_capacity(capacity)),
        })
    }

    /// Append one element, overwriting the oldest one if the buffer is full.
    pub fn write(&self, value: T) {
        self.inner.lock().push(value);
    }

    /// Append a batch of elements in order under one lock acquisition.
    ///
    /// Rejects an empty batch and any batch longer than the capacity before
    /// touching the buffer. At most `capacity` values are consumed, even if
    /// the iterator reports a shorter length than it yields.
    pub fn write_many<I>(&self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let batch = values.len();

        let mut inner = self.inner.lock();
        if batch == 0 {
            return Err(RingBufferError::EmptyInput);
        }
        let capacity = inner.capacity();
        if batch > capacity {
            return Err(RingBufferError::CapacityExceeded { batch, capacity });
        }

        for value in values.take(capacity) {
            inner.push(value);
        }
        trace!(
            batch,
            len = inner.len,
            write_index = inner.write_index,
            "Bulk write applied"
        );
        Ok(())
    }

    /// Snapshot of the valid elements, oldest first.
    pub fn read(&self) -> Vec<T> {
        self.inner.lock().snapshot()
    }

    /// Build a new, independent buffer with `new_capacity` slots holding the
    /// same elements in the same order. The source is left untouched.
    pub fn resize(&self, new_capacity: usize) -> Result<Self> {
        if new_capacity == 0 {
            return Err(RingBufferError::InvalidCapacity);
        }

        let inner = self.inner.lock();
        if new_capacity < inner.len {
            return Err(RingBufferError::CapacityTooSmall {
                requested: new_capacity,
                len: inner.len,
            });
        }

        let next = inner.reflow(new_capacity);
        debug!(
            from = inner.capacity(),
            to = new_capacity,
            len = next.len,
            write_index = next.write_index,
            "Ring buffer resized"
        );
        Ok(Self {
            inner: Mutex::new(next),
        })
    }

    /// Drop every element and rewind the cursor. Capacity is unchanged.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.clear();
        debug!(capacity = inner.capacity(), "Ring buffer reset");
    }

    /// Number of valid elements.
    pub fn len(&self) -> usize {
        self.inner.lock().len
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn is_full(&self) -> bool {
        let inner = self.inner.lock();
        inner.len == inner.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().len == 0
    }

    /// Slot the next write will occupy.
    pub fn write_index(&self) -> usize {
        self.inner.lock().write_index
    }

    /// Consistent snapshot of capacity, cursor, length and derived flags.
    pub fn status(&self) -> RingBufferStatus {
        self.inner.lock().status()
    }
}

impl<T: Element> Clone for RingBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Mutex::new(self.inner.lock().clone()),
        }
    }
}

impl<T: Element> fmt::Display for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        let status = inner.status();
        write!(
            f,
            "capacity={}, write_index={}, len={}, full={}, empty={}, slots={:?}",
            status.capacity,
            status.write_index,
            status.len,
            status.is_full,
            status.is_empty,
            inner.storage
        )
    }
}

impl<T: Element> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("RingBuffer")
            .field("capacity", &inner.capacity())
            .field("write_index", &inner.write_index)
            .field("len", &inner.len)
            .field("slots", &inner.storage)
            .finish()
    }
}
