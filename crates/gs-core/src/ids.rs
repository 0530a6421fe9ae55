//! Typed identifiers for cars and servers.
//!
//! Station and register ids are positions in their pool; car ids are
//! arrival sequence numbers.

use std::fmt;

/// `u32` newtype with an `INVALID` sentinel and pool-index helpers.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "not assigned yet".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Position in the owning pool.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;

            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of a car, assigned in arrival order starting at 0.
    pub struct CarId(u32);
}

typed_id! {
    /// Index of a station in the station pool (unique across fuel types).
    pub struct StationId(u32);
}

typed_id! {
    /// Index of a register in the register pool.
    pub struct RegisterId(u32);
}
