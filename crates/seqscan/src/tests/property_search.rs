//! Search results checked against naive reference implementations.

use quickcheck_macros::quickcheck;

use super::arbitrary::{Input, Needle};
use crate::Scanner;

fn naive_find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Property: `scan_up_to_collection` stops at the first occurrence of the
/// target, or consumes everything when there is none.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn up_to_collection_finds_first_occurrence(input: Input, start: usize, needle: Needle) -> bool {
    let mut s = Scanner::new(input.0.as_slice());
    s.set_position(start % (input.0.len() + 1));
    let before = s.position();
    let rest = &input.0[before..];

    let span = s.scan_up_to_collection(needle.0.as_slice());
    let expected = match (needle.0.is_empty(), naive_find(rest, &needle.0)) {
        (true, _) => 0,
        (false, Some(at)) => at,
        (false, None) => rest.len(),
    };
    span.len() == expected && s.position() == before + expected
}

/// Property: after `skip_up_to_collection`, the target is next unless the
/// scanner reached the end.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn up_to_collection_lands_on_match(input: Input, needle: Needle) -> bool {
    let mut s = Scanner::new(input.0.as_slice());
    s.skip_up_to_collection(needle.0.as_slice());
    needle.0.is_empty() || s.is_at_end() || s.starts_with(needle.0.as_slice())
}

/// Property: `scan_set` and `scan_up_to_set` split the input at the first
/// boundary between members and non-members.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn set_scans_partition_input(input: Input, set: Needle) -> bool {
    let set = set.0.as_slice();
    let mut s = Scanner::new(input.0.as_slice());
    let members = s.scan_set(set);
    let others = s.scan_up_to_set(set);

    let m = input.0.iter().take_while(|&&b| set.contains(&b)).count();
    let o = input.0[m..].iter().take_while(|&&b| !set.contains(&b)).count();
    members.len() == m && others.len() == o && s.position() == m + o
}
