//! A small handful of helper macros

#[cfg(test)]
use std::sync::atomic::AtomicBool;

#[cfg(test)]
pub(crate) static DEBUG: AtomicBool = AtomicBool::new(false);

#[cfg(test)]
macro_rules! enable_debug {
    () => {{
        $crate::macros::DEBUG.store(true, std::sync::atomic::Ordering::SeqCst);
    }};
}

#[cfg(test)]
macro_rules! disable_debug {
    () => {{
        $crate::macros::DEBUG.store(false, std::sync::atomic::Ordering::SeqCst);
    }};
}

// Structural changes to the chain (splits, merges, frees) are traced through this. It prints only
// in tests, and only between `enable_debug!()` and `disable_debug!()`.
macro_rules! debug_println {
    ($($args:tt)*) => {
        #[cfg(test)]
        {
            if $crate::macros::DEBUG.load(std::sync::atomic::Ordering::SeqCst) {
                println!($($args)*);
            }
        };
    };
}

// Assertions used by `QuickList::validate`, reporting the index of the offending node or element.
#[cfg(any(test, feature = "fuzz"))]
macro_rules! valid_assert {
    ($idx:ident: $cond:expr) => {
        if !$cond {
            panic!(
                concat!("assertion failed: `", stringify!($cond), "` at index {}"),
                $idx
            );
        }
    };
}
