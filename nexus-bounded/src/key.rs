//! Arena handles with a reserved sentinel.
//!
//! List nodes link to each other through [`Key`]s rather than pointers.
//! The sentinel [`Key::NONE`] marks the end of a chain, so a link costs
//! one integer instead of an `Option<usize>`.

/// A copyable handle into a [`Storage`](crate::Storage) arena.
///
/// # Example
///
/// ```
/// use nexus_bounded::Key;
///
/// let key: u32 = 7;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// assert_eq!(u32::from_usize(7), key);
/// ```
///
/// # Custom Key Types
///
/// ```
/// use nexus_bounded::Key;
///
/// #[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// struct Slot(u16);
///
/// impl Key for Slot {
///     const NONE: Self = Slot(u16::MAX);
///
///     fn from_usize(val: usize) -> Self {
///         Slot(val as u16)
///     }
///
///     fn as_usize(self) -> usize {
///         self.0 as usize
///     }
/// }
///
/// assert!(Slot::NONE.is_none());
/// ```
pub trait Key: Copy + Eq {
    /// Sentinel meaning "no node". Never handed out by storage.
    const NONE: Self;

    /// Creates a key from an arena slot index.
    fn from_usize(val: usize) -> Self;

    /// Returns the arena slot index.
    fn as_usize(self) -> usize;

    /// Returns `true` if this is the sentinel.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is a real slot.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u8, u16, u32, u64, usize);
