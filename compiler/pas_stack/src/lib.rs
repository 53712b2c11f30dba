//! Stack growth for deep recursion.
//!
//! The type parser and the expression evaluator both recurse once per level
//! of nesting. Their depth limits are configurable, so the limit can be set
//! higher than the native stack would survive. Each recursive step runs
//! under [`ensure_sufficient_stack`], which switches to a freshly allocated
//! segment when the remaining stack drops below [`RED_ZONE`].
//!
//! On `wasm32` the call is a plain passthrough.

/// Remaining stack below which a new segment is allocated.
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
pub const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mimics the evaluator: one frame per nested `not`.
    fn nested_not(depth: u32, value: bool) -> bool {
        ensure_sufficient_stack(|| {
            if depth == 0 {
                value
            } else {
                !nested_not(depth - 1, value)
            }
        })
    }

    #[test]
    fn test_shallow_nesting() {
        assert!(nested_not(3, false));
        assert!(nested_not(4, true));
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        // Far deeper than a default thread stack allows for this frame size.
        assert!(nested_not(200_000, true));
    }

    #[test]
    fn test_passes_result_through() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("unbalanced"));
        assert_eq!(result, Err("unbalanced"));
    }
}
