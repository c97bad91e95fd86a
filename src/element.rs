//! Element types a ring buffer may hold.
//!
//! The set is closed: signed and unsigned integers, floats, `bool` and
//! `String`. The trait is sealed so downstream crates cannot widen it.

use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// A primitive scalar that can be stored in a [`RingBuffer`](crate::RingBuffer).
///
/// Unused slots hold `Default::default()`, snapshots are produced with
/// `Clone`, and `Debug` is used when rendering the raw slots.
pub trait Element: sealed::Sealed + Clone + Default + Debug + Send + 'static {}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Element for $ty {}
        )*
    };
}

impl_element!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, String,
);
