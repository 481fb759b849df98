use alloc::string::String;

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::RelaxedString;

/// Property: whatever the input and capacity, the raw stored content never
/// exceeds `capacity - 2` bytes and never contains the terminator.
#[test]
fn truncation_bound_quickcheck() {
    fn prop(content: String, capacity: u8) -> bool {
        let capacity = usize::from(capacity);
        let label = RelaxedString::with_capacity(capacity);
        label.set(&content);
        let bytes = label.snapshot_bytes();
        bytes.len() <= capacity.saturating_sub(2) && !bytes.contains(&0)
    }
    QuickCheck::new().quickcheck(prop as fn(String, u8) -> bool);
}

/// Property: content that fits (and carries no embedded NUL) round-trips
/// exactly through a single-threaded set/snapshot pair.
#[quickcheck]
fn fitting_content_roundtrips(content: String) -> bool {
    let content: String = content.chars().filter(|&c| c != '\0').collect();
    let label = RelaxedString::with_capacity(content.len() + 2);
    label.set(&content);
    label.snapshot() == content
}

/// Property: a second assignment fully hides the first one in the
/// sequential case, even when it is shorter.
#[test]
fn sequential_overwrite_quickcheck() {
    fn prop(first: String, second: String) -> bool {
        let strip = |s: &String| s.chars().filter(|&c| c != '\0').collect::<String>();
        let (first, second) = (strip(&first), strip(&second));
        let capacity = first.len().max(second.len()) + 2;
        let label = RelaxedString::with_capacity(capacity);
        label.set(&first);
        label.set(&second);
        label.snapshot() == second
    }
    QuickCheck::new().quickcheck(prop as fn(String, String) -> bool);
}
