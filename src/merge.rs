//! Timestamp-ordered chain merge
//!
//! Merge step of two commit chains that are each already sorted by
//! timestamp, newest first. Equal timestamps keep the first chain's
//! commit ahead, and relative order within each input is preserved.
//!
//! Author: Mara Ellison

use crate::commit::Link;

/// Merge two descending-sorted chains into one descending-sorted chain.
///
/// Two-cursor walk: at each step the chain whose current commit has the
/// greater-or-equal timestamp contributes the next output commit (ties
/// go to `ours`). Once either input runs out, the remainder of the other
/// is spliced on wholesale — it is already internally ordered, so no
/// further comparisons are needed. O(n + m), no auxiliary allocation;
/// every commit is re-linked in place.
pub fn merge_chains(mut ours: Link, mut theirs: Link) -> Link {
    let mut merged: Link = None;
    let mut tail = &mut merged;

    loop {
        match (ours.take(), theirs.take()) {
            (Some(mut a), Some(b)) if a.timestamp >= b.timestamp => {
                ours = a.past.take();
                theirs = Some(b);
                tail = &mut tail.insert(a).past;
            }
            (a, Some(mut b)) => {
                theirs = b.past.take();
                ours = a;
                tail = &mut tail.insert(b).past;
            }
            (rest, None) => {
                *tail = rest;
                return merged;
            }
        }
    }
}
