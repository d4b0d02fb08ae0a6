//! Aliasing rules for source/destination regions of one buffer.

use core::ops::Range;

/// Reports whether `x` and `y` share any (not necessarily corresponding)
/// index.
pub(crate) fn any_overlap(x: &Range<usize>, y: &Range<usize>) -> bool {
    !x.is_empty() && !y.is_empty() && x.start < y.end && y.start < x.end
}

/// Reports whether `x` and `y` share any index at a non-corresponding
/// position. Regions starting at the same offset never overlap inexactly,
/// even when their lengths differ.
pub(crate) fn inexact_overlap(x: &Range<usize>, y: &Range<usize>) -> bool {
    if x.is_empty() || y.is_empty() || x.start == y.start {
        return false;
    }
    any_overlap(x, y)
}
