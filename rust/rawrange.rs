use core::ffi::c_void;
use core::ops::Not;
use core::ptr;

/// Unary predicate over one opaque element address.
pub type UnaryPredicateFn = fn(*const c_void) -> bool;

/// Binary predicate over two opaque element addresses.
pub type BinaryPredicateFn = fn(*const c_void, *const c_void) -> bool;

/// Operator that reads one element and returns the address of a freshly
/// produced value. The engine copies the result; it never takes ownership.
pub type UnaryOperatorFn = fn(*const c_void) -> *const c_void;

/// Left-accumulating applicator: mutates the accumulator (first argument)
/// in place using the element (second argument).
pub type BinaryApplicatorFn = fn(*mut c_void, *const c_void);

/// Value generator. Each call returns the address of a freshly produced
/// value, which the engine copies by element size.
pub type GeneratorFn = fn() -> *const c_void;

/// Integer random-number generator. The engine never seeds or owns it, so
/// determinism is entirely the caller's responsibility.
pub type RandomGeneratorFn = fn() -> i64;

/// A unary predicate bundled with a negation flag.
///
/// Callbacks in this crate are plain function pointers with no captured
/// environment, so "the logical negation of `p`" cannot be expressed as
/// another bare function pointer. Instead of stashing `p` in process-wide
/// storage, the negation is carried by value: each call site gets its own
/// copy, and nested or concurrent negations cannot alias each other.
///
/// # Examples
///
/// ```
/// use core::ffi::c_void;
/// use rawrange::rr::UnaryPredicate;
///
/// let is_even = UnaryPredicate::new(|v| unsafe { *(v as *const i32) } % 2 == 0);
/// let four = 4i32;
/// let addr = &four as *const i32 as *const c_void;
/// assert!(is_even.test(addr));
/// assert!(!(!is_even).test(addr));
/// assert!((!!is_even).test(addr));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UnaryPredicate {
    callback: UnaryPredicateFn,
    negated: bool,
}

impl UnaryPredicate {
    /// Wraps a bare predicate function without negating it.
    #[inline]
    pub const fn new(callback: UnaryPredicateFn) -> Self {
        Self { callback, negated: false }
    }

    /// Evaluates the predicate for the element at `value`.
    ///
    /// The address is forwarded to the wrapped callback untouched; the
    /// callback and the caller must agree out-of-band on the element layout.
    #[inline(always)]
    pub fn test(&self, value: *const c_void) -> bool {
        (self.callback)(value) != self.negated
    }
}

impl Not for UnaryPredicate {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self { negated: !self.negated, ..self }
    }
}

impl From<UnaryPredicateFn> for UnaryPredicate {
    #[inline]
    fn from(callback: UnaryPredicateFn) -> Self {
        Self::new(callback)
    }
}

/// A binary predicate bundled with a negation flag.
///
/// Same rationale as [`UnaryPredicate`]: negation is a per-value tag, not
/// shared state.
#[derive(Debug, Clone, Copy)]
pub struct BinaryPredicate {
    callback: BinaryPredicateFn,
    negated: bool,
}

impl BinaryPredicate {
    /// Wraps a bare predicate function without negating it.
    #[inline]
    pub const fn new(callback: BinaryPredicateFn) -> Self {
        Self { callback, negated: false }
    }

    /// Evaluates the predicate for the elements at `lhs` and `rhs`.
    #[inline(always)]
    pub fn test(&self, lhs: *const c_void, rhs: *const c_void) -> bool {
        (self.callback)(lhs, rhs) != self.negated
    }
}

impl Not for BinaryPredicate {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self { negated: !self.negated, ..self }
    }
}

impl From<BinaryPredicateFn> for BinaryPredicate {
    #[inline]
    fn from(callback: BinaryPredicateFn) -> Self {
        Self::new(callback)
    }
}

/// Two opaque addresses reporting where two parallel traversals stopped.
///
/// Element sizes are deliberately not stored; the caller already knows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub first: *const c_void,
    pub second: *const c_void,
}

impl Pair {
    #[inline]
    pub const fn new(first: *const c_void, second: *const c_void) -> Self {
        Self { first, second }
    }
}

/// Steps an opaque address by one signed stride.
///
/// `wrapping_offset` so that the one-below-the-buffer sentinel of a
/// reverse-direction range can be produced without asserting in-bounds
/// arithmetic; the sentinel is compared against, never dereferenced.
#[inline(always)]
fn advance(ptr: *const c_void, stride: isize) -> *const c_void {
    (ptr as *const u8).wrapping_offset(stride) as *const c_void
}

#[inline(always)]
fn advance_mut(ptr: *mut c_void, stride: isize) -> *mut c_void {
    (ptr as *mut u8).wrapping_offset(stride) as *mut c_void
}

/// Exchanges the contents of two memory cells of `nbytes` bytes each.
///
/// This is the sole primitive behind every in-place reordering operation in
/// the engine, keeping memory use O(1) regardless of element size.
///
/// # Safety
///
/// Both cells must be valid for reads and writes of `nbytes` bytes and must
/// not overlap. Overlapping cells corrupt both.
#[inline(always)]
pub unsafe fn swap_cells(lhs: *mut c_void, rhs: *mut c_void, nbytes: usize) {
    debug_assert!(
        (lhs as usize) + nbytes <= rhs as usize || (rhs as usize) + nbytes <= lhs as usize,
        "swap_cells cells overlap"
    );
    ptr::swap_nonoverlapping(lhs as *mut u8, rhs as *mut u8, nbytes);
}

/// Left-folds the range into `accumulator`.
///
/// Visits every element from `first` to `last` in stride order and invokes
/// `applicator(accumulator, element)`, which is expected to mutate the
/// accumulator in place. The result is observed through the accumulator;
/// there is no return value.
///
/// # Safety
///
/// `last` must be reachable from `first` in whole steps of `stride` bytes,
/// every visited address must be valid for the element layout the callbacks
/// expect, and `stride` must be non-zero. `accumulator` must be valid for
/// whatever the applicator writes through it.
pub unsafe fn reduce(
    first: *const c_void,
    last: *const c_void,
    stride: isize,
    accumulator: *mut c_void,
    applicator: BinaryApplicatorFn,
) {
    debug_assert!(stride != 0, "stride must be non-zero");
    let mut cursor = first;
    while cursor != last {
        applicator(accumulator, cursor);
        cursor = advance(cursor, stride);
    }
}

/// Returns the address of the first element satisfying `predicate`, or
/// `last` if none does.
///
/// "First" is defined with respect to the range's own stride direction: a
/// negative-stride range reports the first match scanning backward over the
/// same storage.
///
/// # Safety
///
/// `last` must be reachable from `first` in whole steps of `stride` bytes,
/// every visited address must be valid for the element layout the predicate
/// expects, and `stride` must be non-zero.
pub unsafe fn find(
    first: *const c_void,
    last: *const c_void,
    stride: isize,
    predicate: UnaryPredicate,
) -> *const c_void {
    debug_assert!(stride != 0, "stride must be non-zero");
    let mut cursor = first;
    while cursor != last && !predicate.test(cursor) {
        cursor = advance(cursor, stride);
    }
    cursor
}

/// Removes every element satisfying `predicate`, stably compacting the
/// survivors toward `first`, and returns one-past the last survivor.
///
/// Survivors keep their original relative order. Elements at and beyond the
/// returned address are left in a valid but unspecified state; they are not
/// zeroed. Moves go through an overlap-safe copy, so adjacent survivors may
/// slide over removed slots.
///
/// # Safety
///
/// Same range obligations as [`find`], and the range must additionally be
/// valid for writes. The element width is `stride.unsigned_abs()`.
pub unsafe fn filter(
    first: *mut c_void,
    last: *const c_void,
    stride: isize,
    predicate: UnaryPredicate,
) -> *mut c_void {
    let width = stride.unsigned_abs();
    let mut write = find(first as *const c_void, last, stride, predicate) as *mut c_void;
    if write as *const c_void == last {
        return write;
    }
    let mut read = advance(write as *const c_void, stride);
    while read != last {
        if !predicate.test(read) {
            ptr::copy(read as *const u8, write as *mut u8, width);
            write = advance_mut(write, stride);
        }
        read = advance(read, stride);
    }
    write
}

/// Checks whether every element satisfies `predicate`.
///
/// Holds iff no element satisfies the negation of the predicate; implemented
/// as [`find`] with the negated predicate reaching `last`.
///
/// # Safety
///
/// Same obligations as [`find`].
pub unsafe fn all(
    first: *const c_void,
    last: *const c_void,
    stride: isize,
    predicate: UnaryPredicate,
) -> bool {
    find(first, last, stride, !predicate) == last
}

/// Checks whether at least one element satisfies `predicate`.
///
/// # Safety
///
/// Same obligations as [`find`].
pub unsafe fn any(
    first: *const c_void,
    last: *const c_void,
    stride: isize,
    predicate: UnaryPredicate,
) -> bool {
    find(first, last, stride, predicate) != last
}

/// Counts the elements satisfying `predicate`.
///
/// # Safety
///
/// Same obligations as [`find`].
pub unsafe fn count(
    first: *const c_void,
    last: *const c_void,
    stride: isize,
    predicate: UnaryPredicate,
) -> usize {
    debug_assert!(stride != 0, "stride must be non-zero");
    let mut total = 0usize;
    let mut cursor = first;
    while cursor != last {
        total += predicate.test(cursor) as usize;
        cursor = advance(cursor, stride);
    }
    total
}

/// Advances two ranges in lock-step while `predicate` holds and neither
/// range is exhausted; returns the pair of addresses where advancement
/// stopped.
///
/// The ranges may have independent strides, including independent directions
/// and element sizes; traversal length is bounded by the shorter of the two.
///
/// # Safety
///
/// Both ranges carry the obligations of [`find`] independently.
pub unsafe fn mismatch(
    first1: *const c_void,
    last1: *const c_void,
    stride1: isize,
    first2: *const c_void,
    last2: *const c_void,
    stride2: isize,
    predicate: BinaryPredicate,
) -> Pair {
    debug_assert!(stride1 != 0 && stride2 != 0, "strides must be non-zero");
    let mut cursor1 = first1;
    let mut cursor2 = first2;
    while cursor1 != last1 && cursor2 != last2 && predicate.test(cursor1, cursor2) {
        cursor1 = advance(cursor1, stride1);
        cursor2 = advance(cursor2, stride2);
    }
    Pair::new(cursor1, cursor2)
}

/// Returns the address of the first element whose successor (one stride
/// ahead) matches it under `predicate`, or `last` when no adjacent pair
/// matches or the range has fewer than two elements.
///
/// # Safety
///
/// Same obligations as [`find`].
pub unsafe fn adjacent_find(
    first: *const c_void,
    last: *const c_void,
    stride: isize,
    predicate: BinaryPredicate,
) -> *const c_void {
    debug_assert!(stride != 0, "stride must be non-zero");
    if first == last {
        return first;
    }
    let mut current = first;
    let mut next = advance(first, stride);
    while next != last {
        if predicate.test(current, next) {
            return current;
        }
        current = next;
        next = advance(next, stride);
    }
    last
}

/// Finds the first position in `[first1, last1)` at which `[first2, last2)`
/// occurs as a contiguous element-wise subsequence under `predicate`.
///
/// Returns `last1` when the needle is not found and `first1` immediately
/// when the needle is empty. The trial starting position advances by one
/// element on any mismatch (classic two-pointer window).
///
/// # Safety
///
/// Both ranges carry the obligations of [`find`] independently.
pub unsafe fn search(
    first1: *const c_void,
    last1: *const c_void,
    stride1: isize,
    first2: *const c_void,
    last2: *const c_void,
    stride2: isize,
    predicate: BinaryPredicate,
) -> *const c_void {
    debug_assert!(stride1 != 0 && stride2 != 0, "strides must be non-zero");
    let mut window = first1;
    loop {
        let mut it1 = window;
        let mut it2 = first2;
        loop {
            if it2 == last2 {
                return window;
            }
            if it1 == last1 {
                return last1;
            }
            if !predicate.test(it1, it2) {
                break;
            }
            it1 = advance(it1, stride1);
            it2 = advance(it2, stride2);
        }
        window = advance(window, stride1);
    }
}

/// Reverses the range in place via pairwise cell swaps converging from both
/// ends to the middle. No-op on an empty range.
///
/// # Safety
///
/// Same range obligations as [`find`], plus validity for writes. The element
/// width is `stride.unsigned_abs()`.
pub unsafe fn reverse(first: *mut c_void, last: *mut c_void, stride: isize) {
    debug_assert!(stride != 0, "stride must be non-zero");
    if first == last {
        return;
    }
    let width = stride.unsigned_abs();
    let mut head = first;
    let mut tail = advance_mut(last, -stride);
    while (stride > 0 && head < tail) || (stride < 0 && head > tail) {
        swap_cells(head, tail, width);
        head = advance_mut(head, stride);
        tail = advance_mut(tail, -stride);
    }
}

/// Overwrites each element with the generator's freshly produced value,
/// copied by element size.
///
/// # Safety
///
/// Same range obligations as [`find`], plus validity for writes. Every
/// address the generator returns must be valid for reads of
/// `stride.unsigned_abs()` bytes and must not alias the range.
pub unsafe fn generate(
    first: *mut c_void,
    last: *const c_void,
    stride: isize,
    generator: GeneratorFn,
) {
    debug_assert!(stride != 0, "stride must be non-zero");
    let width = stride.unsigned_abs();
    let mut cursor = first;
    while cursor as *const c_void != last {
        ptr::copy_nonoverlapping(generator() as *const u8, cursor as *mut u8, width);
        cursor = advance_mut(cursor, stride);
    }
}

/// Overwrites each element with a copy of the value at `value`.
///
/// The source is re-read for every element and is independent of the
/// destination; it must not live inside the range being filled.
///
/// # Safety
///
/// Same range obligations as [`find`], plus validity for writes. `value`
/// must be valid for reads of `stride.unsigned_abs()` bytes and must not
/// alias the range.
pub unsafe fn fill(
    first: *mut c_void,
    last: *const c_void,
    stride: isize,
    value: *const c_void,
) {
    debug_assert!(stride != 0, "stride must be non-zero");
    let width = stride.unsigned_abs();
    let mut cursor = first;
    while cursor as *const c_void != last {
        ptr::copy_nonoverlapping(value as *const u8, cursor as *mut u8, width);
        cursor = advance_mut(cursor, stride);
    }
}

/// Writes `operator(source_element)` into the corresponding destination slot
/// until either range is exhausted.
///
/// Source and destination advance independently and may have different
/// element sizes and directions; the copy width is the destination element
/// size. Source elements past the shorter bound are never read.
///
/// # Safety
///
/// Both ranges carry the obligations of [`find`]; the destination must also
/// be valid for writes. Every address the operator returns must be valid for
/// reads of `dest_stride.unsigned_abs()` bytes and must not alias the
/// destination slot being written.
pub unsafe fn transform(
    source_first: *const c_void,
    source_last: *const c_void,
    source_stride: isize,
    dest_first: *mut c_void,
    dest_last: *const c_void,
    dest_stride: isize,
    operator: UnaryOperatorFn,
) {
    debug_assert!(source_stride != 0 && dest_stride != 0, "strides must be non-zero");
    let width = dest_stride.unsigned_abs();
    let mut source = source_first;
    let mut dest = dest_first;
    while source != source_last && dest as *const c_void != dest_last {
        ptr::copy_nonoverlapping(operator(source) as *const u8, dest as *mut u8, width);
        source = advance(source, source_stride);
        dest = advance_mut(dest, dest_stride);
    }
}

/// Rotates the range in place so the element at `around` becomes the first
/// element and the prefix `[first, around)` becomes the suffix. Returns the
/// new address of the element that was originally at `first`.
///
/// Degenerate cases: `around == first` returns `last` and `around == last`
/// returns `first`, both without touching memory.
///
/// The cyclic-swap formulation is a tail recursion on a strictly shrinking
/// suffix; it runs here as an explicit loop with identical swap order, so
/// the call stack stays flat and total swaps stay O(n).
///
/// # Safety
///
/// Same range obligations as [`find`], plus validity for writes. `around`
/// must lie within `[first, last]` at a whole number of strides from
/// `first`. The element width is `stride.unsigned_abs()`.
pub unsafe fn rotate(
    first: *mut c_void,
    around: *mut c_void,
    last: *mut c_void,
    stride: isize,
) -> *mut c_void {
    debug_assert!(stride != 0, "stride must be non-zero");
    if first == around {
        return last;
    }
    if around == last {
        return first;
    }

    let width = stride.unsigned_abs();
    let mut head = first;
    let mut pivot = around;
    let mut new_first: *mut c_void = ptr::null_mut();
    loop {
        let mut write = head;
        let mut read = pivot;
        let mut next_read = head;
        while read != last {
            if write == next_read {
                next_read = read;
            }
            swap_cells(write, read, width);
            write = advance_mut(write, stride);
            read = advance_mut(read, stride);
        }
        // The first pass parks the original head element at `write`.
        if new_first.is_null() {
            new_first = write;
        }
        if write == next_read || next_read == last {
            break;
        }
        head = write;
        pivot = next_read;
    }
    new_first
}

/// Collapses each run of consecutive elements considered equivalent by
/// `predicate` to its first element, stably compacting toward `first`, and
/// returns one-past the last kept element.
///
/// Mirrors [`filter`]'s compaction contract: the tail beyond the returned
/// address stays valid but unspecified, and applying `unique` twice is a
/// no-op.
///
/// # Safety
///
/// Same range obligations as [`find`], plus validity for writes. The element
/// width is `stride.unsigned_abs()`.
pub unsafe fn unique(
    first: *mut c_void,
    last: *const c_void,
    stride: isize,
    predicate: BinaryPredicate,
) -> *mut c_void {
    debug_assert!(stride != 0, "stride must be non-zero");
    if first as *const c_void == last {
        return first;
    }
    let width = stride.unsigned_abs();
    let mut kept = first;
    let mut cursor = advance_mut(first, stride);
    while cursor as *const c_void != last {
        if !predicate.test(kept as *const c_void, cursor as *const c_void) {
            kept = advance_mut(kept, stride);
            if kept != cursor {
                ptr::copy(cursor as *const u8, kept as *mut u8, width);
            }
        }
        cursor = advance_mut(cursor, stride);
    }
    advance_mut(kept, stride)
}

/// Shuffles the range in place, Fisher-Yates style: one forward pass that
/// swaps each slot with the slot at `rng() mod extent` from the start of the
/// range, where the extent is the whole element count.
///
/// The engine neither seeds nor owns the random source; a deterministic
/// `rng` gives a deterministic permutation. Negative generator outputs are
/// reduced with a Euclidean remainder, so any `i64` output is acceptable.
///
/// # Safety
///
/// Same range obligations as [`find`], plus validity for writes. The element
/// width is `stride.unsigned_abs()`.
pub unsafe fn shuffle(
    first: *mut c_void,
    last: *const c_void,
    stride: isize,
    rng: RandomGeneratorFn,
) {
    debug_assert!(stride != 0, "stride must be non-zero");
    let width = stride.unsigned_abs();
    let initial = first;
    // On reverse ranges the byte difference and the stride are both negative,
    // so the quotient is the positive element count either way.
    let extent = (last as isize).wrapping_sub(first as isize) / stride;
    let mut cursor = first;
    while cursor as *const c_void != last {
        let pick = rng().rem_euclid(extent as i64) as isize;
        let partner = advance_mut(initial, pick * stride);
        if partner != cursor {
            swap_cells(cursor, partner, width);
        }
        cursor = advance_mut(cursor, stride);
    }
}

/// Forward range bounds and stride for a typed slice.
#[inline(always)]
fn slice_bounds<T>(slice: &[T]) -> (*const c_void, *const c_void, isize) {
    assert!(core::mem::size_of::<T>() > 0, "zero-sized element types have no byte stride");
    let first = slice.as_ptr() as *const c_void;
    let last = slice.as_ptr().wrapping_add(slice.len()) as *const c_void;
    (first, last, core::mem::size_of::<T>() as isize)
}

/// Same as [`slice_bounds`], with pointers carrying write provenance.
#[inline(always)]
fn slice_bounds_mut<T>(slice: &mut [T]) -> (*mut c_void, *mut c_void, isize) {
    assert!(core::mem::size_of::<T>() > 0, "zero-sized element types have no byte stride");
    let first = slice.as_mut_ptr() as *mut c_void;
    let last = slice.as_mut_ptr().wrapping_add(slice.len()) as *mut c_void;
    (first, last, core::mem::size_of::<T>() as isize)
}

/// Maps an in-range element address back to its slice index.
#[inline(always)]
fn index_of<T>(slice: &[T], address: *const c_void) -> usize {
    unsafe { (address as *const T).offset_from(slice.as_ptr()) }
        .try_into()
        .unwrap()
}

/// Read-only range algorithms for typed slices.
///
/// Range construction and index translation are handled here, so the
/// reachability invariant of the raw layer holds by construction. Callbacks
/// stay type-erased: they receive the address of a valid `T` and must agree
/// with the slice on its layout.
pub trait RawRange<T> {
    /// Index of the first element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rawrange::rr::{RawRange, UnaryPredicate};
    ///
    /// let data = [5u8, 3, 8, 3, 1];
    /// let is_three = UnaryPredicate::new(|v| unsafe { *(v as *const u8) } == 3);
    /// assert_eq!(data.rr_find(is_three), Some(1));
    /// assert_eq!(data.rr_find(!is_three), Some(0));
    /// ```
    fn rr_find(&self, predicate: UnaryPredicate) -> Option<usize>;

    /// Index of the last element satisfying `predicate`, found by walking a
    /// negative-stride range over the same storage.
    fn rr_rfind(&self, predicate: UnaryPredicate) -> Option<usize>;

    /// Whether every element satisfies `predicate`. True on an empty slice.
    fn rr_all(&self, predicate: UnaryPredicate) -> bool;

    /// Whether any element satisfies `predicate`. False on an empty slice.
    fn rr_any(&self, predicate: UnaryPredicate) -> bool;

    /// Number of elements satisfying `predicate`.
    fn rr_count(&self, predicate: UnaryPredicate) -> usize;

    /// Index of the first element whose immediate successor matches it under
    /// `predicate`.
    fn rr_adjacent_find(&self, predicate: BinaryPredicate) -> Option<usize>;

    /// Index of the first window matching `needle` element-wise under
    /// `predicate`. An empty needle matches at index 0.
    fn rr_search(&self, needle: &[T], predicate: BinaryPredicate) -> Option<usize>;

    /// Left-folds the slice into `accumulator` via `applicator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::ffi::c_void;
    /// use rawrange::rr::RawRange;
    ///
    /// fn add(accum: *mut c_void, value: *const c_void) {
    ///     unsafe { *(accum as *mut i64) += *(value as *const i32) as i64 };
    /// }
    ///
    /// let data = [1i32, 2, 3, 4];
    /// let mut sum = 0i64;
    /// data.rr_reduce(&mut sum, add);
    /// assert_eq!(sum, 10);
    /// ```
    fn rr_reduce<A>(&self, accumulator: &mut A, applicator: BinaryApplicatorFn);
}

impl<T> RawRange<T> for [T] {
    fn rr_find(&self, predicate: UnaryPredicate) -> Option<usize> {
        let (first, last, stride) = slice_bounds(self);
        let hit = unsafe { find(first, last, stride, predicate) };
        (hit != last).then(|| index_of(self, hit))
    }

    fn rr_rfind(&self, predicate: UnaryPredicate) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let stride = -(core::mem::size_of::<T>() as isize);
        let first = self.as_ptr().wrapping_add(self.len() - 1) as *const c_void;
        let last = advance(self.as_ptr() as *const c_void, stride);
        let hit = unsafe { find(first, last, stride, predicate) };
        (hit != last).then(|| index_of(self, hit))
    }

    fn rr_all(&self, predicate: UnaryPredicate) -> bool {
        let (first, last, stride) = slice_bounds(self);
        unsafe { all(first, last, stride, predicate) }
    }

    fn rr_any(&self, predicate: UnaryPredicate) -> bool {
        let (first, last, stride) = slice_bounds(self);
        unsafe { any(first, last, stride, predicate) }
    }

    fn rr_count(&self, predicate: UnaryPredicate) -> usize {
        let (first, last, stride) = slice_bounds(self);
        unsafe { count(first, last, stride, predicate) }
    }

    fn rr_adjacent_find(&self, predicate: BinaryPredicate) -> Option<usize> {
        let (first, last, stride) = slice_bounds(self);
        let hit = unsafe { adjacent_find(first, last, stride, predicate) };
        (hit != last).then(|| index_of(self, hit))
    }

    fn rr_search(&self, needle: &[T], predicate: BinaryPredicate) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        let (first1, last1, stride1) = slice_bounds(self);
        let (first2, last2, stride2) = slice_bounds(needle);
        let hit = unsafe { search(first1, last1, stride1, first2, last2, stride2, predicate) };
        (hit != last1).then(|| index_of(self, hit))
    }

    fn rr_reduce<A>(&self, accumulator: &mut A, applicator: BinaryApplicatorFn) {
        let (first, last, stride) = slice_bounds(self);
        let accum = accumulator as *mut A as *mut c_void;
        unsafe { reduce(first, last, stride, accum, applicator) }
    }
}

/// In-place range algorithms for typed slices.
///
/// Operations that duplicate or discard elements bytewise (`rr_fill`,
/// `rr_generate`, `rr_filter`, `rr_unique`) are restricted to `T: Copy`;
/// the swap-based ones permute intact elements and work for any `T`.
pub trait RawRangeMut<T> {
    /// Reverses the slice in place via pairwise cell swaps.
    fn rr_reverse(&mut self);

    /// Rotates the slice in place so the element at `around` comes first.
    /// Returns the new index of the element that was at index 0, which is
    /// always `len - around`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rawrange::rr::RawRangeMut;
    ///
    /// let mut data = [1, 2, 3, 4, 5];
    /// let origin = data.rr_rotate(2);
    /// assert_eq!(data, [3, 4, 5, 1, 2]);
    /// assert_eq!(origin, 3);
    /// ```
    fn rr_rotate(&mut self, around: usize) -> usize;

    /// Shuffles the slice in place using `rng`, one swap per element.
    fn rr_shuffle(&mut self, rng: RandomGeneratorFn);

    /// Overwrites every element with a copy of `value`.
    fn rr_fill(&mut self, value: &T)
    where
        T: Copy;

    /// Overwrites every element with the generator's next value.
    fn rr_generate(&mut self, generator: GeneratorFn)
    where
        T: Copy;

    /// Removes elements satisfying `predicate`, stably compacting the
    /// survivors to the front, and returns the surviving count. Elements
    /// past the returned length are valid but unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use rawrange::rr::{RawRangeMut, UnaryPredicate};
    ///
    /// let mut data = [5u8, 3, 8, 3, 1];
    /// let is_three = UnaryPredicate::new(|v| unsafe { *(v as *const u8) } == 3);
    /// let kept = data.rr_filter(is_three);
    /// assert_eq!(kept, 3);
    /// assert_eq!(&data[..kept], &[5, 8, 1]);
    /// ```
    fn rr_filter(&mut self, predicate: UnaryPredicate) -> usize
    where
        T: Copy;

    /// Collapses runs of consecutive `predicate`-equivalent elements to
    /// their first element and returns the kept count.
    fn rr_unique(&mut self, predicate: BinaryPredicate) -> usize
    where
        T: Copy;
}

impl<T> RawRangeMut<T> for [T] {
    fn rr_reverse(&mut self) {
        let (first, last, stride) = slice_bounds_mut(self);
        unsafe { reverse(first, last, stride) }
    }

    fn rr_rotate(&mut self, around: usize) -> usize {
        assert!(around <= self.len(), "rotation pivot out of range");
        let (first, last, stride) = slice_bounds_mut(self);
        let pivot = self.as_mut_ptr().wrapping_add(around) as *mut c_void;
        let origin = unsafe { rotate(first, pivot, last, stride) };
        index_of(self, origin as *const c_void)
    }

    fn rr_shuffle(&mut self, rng: RandomGeneratorFn) {
        let (first, last, stride) = slice_bounds_mut(self);
        unsafe { shuffle(first, last as *const c_void, stride, rng) }
    }

    fn rr_fill(&mut self, value: &T)
    where
        T: Copy,
    {
        let source = value as *const T as *const c_void;
        let (first, last, stride) = slice_bounds_mut(self);
        unsafe { fill(first, last as *const c_void, stride, source) }
    }

    fn rr_generate(&mut self, generator: GeneratorFn)
    where
        T: Copy,
    {
        let (first, last, stride) = slice_bounds_mut(self);
        unsafe { generate(first, last as *const c_void, stride, generator) }
    }

    fn rr_filter(&mut self, predicate: UnaryPredicate) -> usize
    where
        T: Copy,
    {
        let (first, last, stride) = slice_bounds_mut(self);
        let new_end = unsafe { filter(first, last as *const c_void, stride, predicate) };
        index_of(self, new_end as *const c_void)
    }

    fn rr_unique(&mut self, predicate: BinaryPredicate) -> usize
    where
        T: Copy,
    {
        let (first, last, stride) = slice_bounds_mut(self);
        let new_end = unsafe { unique(first, last as *const c_void, stride, predicate) };
        index_of(self, new_end as *const c_void)
    }
}

/// Compares two slices in lock-step under `predicate` and returns the pair
/// of indices where advancement stopped. The element types may differ; the
/// shorter slice bounds the traversal.
///
/// Identical slices under an equality predicate report `(len, len)`.
///
/// # Examples
///
/// ```
/// use core::ffi::c_void;
/// use rawrange::rr::{mismatch_slices, BinaryPredicate};
///
/// fn same_value(lhs: *const c_void, rhs: *const c_void) -> bool {
///     unsafe { *(lhs as *const u8) as i32 == *(rhs as *const i32) }
/// }
///
/// let bytes = [1u8, 2, 3, 4];
/// let words = [1i32, 2, 9, 4];
/// let stop = mismatch_slices(&bytes, &words, BinaryPredicate::new(same_value));
/// assert_eq!(stop, (2, 2));
/// ```
pub fn mismatch_slices<A, B>(lhs: &[A], rhs: &[B], predicate: BinaryPredicate) -> (usize, usize) {
    let (first1, last1, stride1) = slice_bounds(lhs);
    let (first2, last2, stride2) = slice_bounds(rhs);
    let stop = unsafe { mismatch(first1, last1, stride1, first2, last2, stride2, predicate) };
    (index_of(lhs, stop.first), index_of(rhs, stop.second))
}

/// Maps `source` through `operator` into `destination` and returns the
/// number of slots written, which is the length of the shorter slice.
/// Source elements past that bound are never read.
pub fn transform_slices<S, D>(
    source: &[S],
    destination: &mut [D],
    operator: UnaryOperatorFn,
) -> usize
where
    D: Copy,
{
    let (source_first, source_last, source_stride) = slice_bounds(source);
    let (dest_first, dest_last, dest_stride) = slice_bounds_mut(destination);
    unsafe {
        transform(
            source_first,
            source_last,
            source_stride,
            dest_first,
            dest_last as *const c_void,
            dest_stride,
            operator,
        )
    };
    source.len().min(destination.len())
}
