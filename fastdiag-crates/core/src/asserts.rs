#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const FASTDIAG_ASSERT_LEVEL_DEFINITION: u8 = FASTDIAG_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const FASTDIAG_ASSERT_LEVEL_DEFINITION: u8 = FASTDIAG_ASSERT_MODERATE;

pub const FASTDIAG_ASSERT_SIMPLE: u8 = 1;
pub const FASTDIAG_ASSERT_MODERATE: u8 = 2;

#[macro_export]
#[doc(hidden)]
macro_rules! fastdiag_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::FASTDIAG_ASSERT_LEVEL_DEFINITION >= $crate::asserts::FASTDIAG_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! fastdiag_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::FASTDIAG_ASSERT_LEVEL_DEFINITION >= $crate::asserts::FASTDIAG_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! fastdiag_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::FASTDIAG_ASSERT_LEVEL_DEFINITION >= $crate::asserts::FASTDIAG_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}
