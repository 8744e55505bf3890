//! Program body: two chained decisions ending in a sentinel store.
//!
//! The first decision picks a threshold-dependent value, the second feeds
//! that value into [`compare`] and dispatches to exactly one of the two
//! outcome writers. The writers mark which branch ran by storing a fixed
//! bit pattern through the caller-supplied slot.

/// Marker stored when the comparison takes the true branch.
pub const FIRST_MARK: u32 = 0xdead_beef;
/// Marker stored when the comparison takes the false branch.
pub const SECOND_MARK: u32 = 0xbeef_dead;

/// Strict less-than on signed 32-bit integers.
#[inline(always)]
pub const fn compare(a: i32, b: i32) -> bool {
    a < b
}

/// Store the true-branch marker through `c`.
#[inline(always)]
pub fn first(c: &mut u32) {
    *c = FIRST_MARK;
}

/// Store the false-branch marker through `c`.
#[inline(always)]
pub fn second(c: &mut u32) {
    *c = SECOND_MARK;
}

/// Run the decision chain for a starting value `a` and return the marker
/// left in the output slot.
pub fn run(a: i32) -> u32 {
    // With the fixed input from block_main this always takes the else arm;
    // its result still feeds the comparison below.
    let b = if a < 5 { 15 } else { 5 };

    let mut c = 0;
    if compare(a, b) {
        first(&mut c);
    } else {
        second(&mut c);
    }
    c
}

/// Program body as invoked from `_start`: fixed input, result discarded.
pub fn block_main() {
    let _ = run(10);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_is_strict_less_than() {
        for x in -20..20 {
            for y in -20..20 {
                assert_eq!(compare(x, y), x < y);
            }
        }
        assert!(!compare(7, 7));
        assert!(compare(i32::MIN, i32::MAX));
        assert!(!compare(i32::MAX, i32::MIN));
    }

    #[test]
    fn writers_store_their_marker() {
        let mut c = 0;
        first(&mut c);
        assert_eq!(c, FIRST_MARK);
        second(&mut c);
        assert_eq!(c, SECOND_MARK);
    }

    #[test]
    fn fixed_input_takes_false_branch() {
        // a = 10 picks b = 5, and compare(10, 5) is false.
        assert_eq!(run(10), SECOND_MARK);
    }

    #[test]
    fn small_input_takes_true_branch() {
        // a < 5 picks b = 15, and compare(a, 15) is true for those a.
        assert_eq!(run(3), FIRST_MARK);
        assert_eq!(run(-1), FIRST_MARK);
    }

    #[test]
    fn exactly_one_marker_for_any_input() {
        for a in [i32::MIN, -5, 0, 4, 5, 6, 10, 15, i32::MAX] {
            let c = run(a);
            assert!(c == FIRST_MARK || c == SECOND_MARK);
        }
    }

    #[test]
    fn run_is_deterministic() {
        assert_eq!(run(10), run(10));
        assert_eq!(run(3), run(3));
    }
}
