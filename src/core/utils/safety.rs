//! Zero-Cost Safety Macro
//!
//! In Debug mode: normal bounds-checked access (panics with useful errors)
//! In Release mode: unsafe unchecked access (zero overhead)
//!
//! Used in the generation-advance hot loop, where every cell touches up to
//! eight neighbor slots per phase.
//!
//! Usage:
//! ```rust
//! use gridlife_engine::fast;
//!
//! let idx = 2;
//!
//! let arr = vec![1, 2, 3, 4, 5];
//! // Read: fast!(slice, [index])
//! let val = *fast!(arr, [idx]);
//! assert_eq!(val, 3);
//!
//! let mut staleness = vec![0u32; 5];
//! // Write: fast!(slice, [index] = value)
//! fast!(staleness, [idx] = 100);
//! assert_eq!(staleness[idx], 100);
//! ```

/// Zero-cost bounds checking macro
///
/// - Debug: uses normal indexing with bounds checks
/// - Release: uses get_unchecked/get_unchecked_mut
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_fast_read() {
        let arr = vec![1, 2, 3, 4, 5];
        let val = *fast!(arr, [2]);
        assert_eq!(val, 3);
    }

    #[test]
    fn test_fast_write() {
        let mut arr = vec![1, 2, 3, 4, 5];
        fast!(arr, [2] = 100);
        assert_eq!(arr[2], 100);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_fast_bounds_check_debug() {
        let arr = vec![1, 2, 3];
        let _ = *fast!(arr, [10]); // Should panic in debug
    }
}
