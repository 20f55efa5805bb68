//! Sublist search over forward-only cursors.
//!
//! Linked sequences are consumed through cloneable forward iterators:
//! advancing is `next`, saving a restart position is `Clone`. Nothing here
//! assumes random access or a length query, so `std::collections::LinkedList`,
//! slices, `Vec` and any other source with a cloneable iterator all work.

/// Whether `needle` appears as a contiguous, order-preserving run within
/// `haystack`.
///
/// Naive lock-step matching: both cursors advance while elements compare
/// equal; on the first mismatch the needle cursor resets to its start and the
/// attempt restarts one element past where it began. O(n·m) worst case.
///
/// An empty needle matches any haystack. A needle longer than the haystack
/// never matches — the scan stops as soon as the remaining haystack runs out
/// mid-attempt, since every later attempt has even less to offer.
pub fn sublist_search<H, N>(haystack: H, needle: N) -> bool
where
    H: IntoIterator,
    N: IntoIterator<Item = H::Item>,
    H::IntoIter: Clone,
    N::IntoIter: Clone,
    H::Item: PartialEq,
{
    let needle = needle.into_iter();
    let mut attempt = haystack.into_iter();

    loop {
        let mut large = attempt.clone();
        let mut small = needle.clone();
        loop {
            let want = match small.next() {
                Some(want) => want,
                // needle exhausted: the whole run matched
                None => return true,
            };
            match large.next() {
                Some(got) if got == want => {}
                Some(_) => break,
                // haystack exhausted mid-attempt: no later start can be longer
                None => return false,
            }
        }
        if attempt.next().is_none() {
            return false;
        }
    }
}

/// [`sublist_search`] expressed as recursion over the three cursors: the
/// current haystack position, the start of the current attempt and the
/// current needle position.
///
/// Identical matching policy and result for every input pair. Recursion depth
/// is O(n·m) in the worst case, so keep the inputs modest; the iterative form
/// has no such bound.
pub fn recursive_sublist_search<H, N>(haystack: H, needle: N) -> bool
where
    H: IntoIterator,
    N: IntoIterator<Item = H::Item>,
    H::IntoIter: Clone,
    N::IntoIter: Clone,
    H::Item: PartialEq,
{
    let large = haystack.into_iter();
    let needle = needle.into_iter();
    search_from(large.clone(), large, needle.clone(), needle)
}

fn search_from<H, N>(mut large: H, attempt: H, needle: N, mut small: N) -> bool
where
    H: Iterator + Clone,
    N: Iterator<Item = H::Item> + Clone,
    H::Item: PartialEq,
{
    let want = match small.next() {
        Some(want) => want,
        None => return true,
    };
    let got = match large.next() {
        Some(got) => got,
        None => return false,
    };
    if got == want {
        search_from(large, attempt, needle, small)
    } else {
        let mut restart = attempt;
        restart.next();
        search_from(restart.clone(), restart, needle.clone(), needle)
    }
}
