// Tests for the exact-match engine
use crate::*;
use proptest::prelude::*;

fn naive_positions(pat: &[u8], text: &[u8]) -> Vec<usize> {
    if pat.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pat.len())
        .filter(|&i| &text[i..i + pat.len()] == pat)
        .collect()
}

fn naive_non_overlapping(pat: &[u8], text: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i + pat.len() <= text.len() {
        if &text[i..i + pat.len()] == pat {
            count += 1;
            i += pat.len();
        } else {
            i += 1;
        }
    }
    count
}

#[test]
fn test_find_examples() {
    assert_eq!(find(b"ab", b"aabab", 0), Ok(Some(1)));
    assert_eq!(find_all(b"aba", b"ababa", 0), Ok(vec![0, 2]));
    assert_eq!(replace_all(b"a", b"X", b"banana", 0), Ok(b"bXnXnX".to_vec()));
    assert_eq!(
        split(b",", b"a,b,,c", 0, None),
        Ok(vec![b"a".to_vec(), b"b".to_vec(), b"".to_vec(), b"c".to_vec()])
    );
}

#[test]
fn test_find_all_vs_replace_all_overlap() {
    // find_all keeps automaton state, replace_all rewinds past each hit
    assert_eq!(find_all(b"aa", b"aaaa", 0).unwrap(), vec![0, 1, 2]);
    assert_eq!(replace_all(b"aa", b"b", b"aaaa", 0).unwrap(), b"bb");
}

#[test]
fn test_replace_idempotent_when_absent() {
    let text = b"the quick brown fox";
    assert_eq!(&*replace(b"cat", b"dog", text, 0).unwrap(), &text[..]);
    assert_eq!(replace_all(b"cat", b"dog", text, 0).unwrap(), text.to_vec());
}

#[test]
fn test_invalid_argument_is_not_a_miss() {
    let err = find(b"a", b"abc", -1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(find(b"z", b"abc", 0), Ok(None));
}

#[test]
fn test_cursor_reuse_across_rewinds() {
    let mut cursor = Cursor::new(b"needle", b"needle in a needle stack");
    let first: Vec<_> = cursor.by_ref().collect();
    assert_eq!(first, vec![0, 12]);
    cursor.rewind(1);
    assert_eq!(cursor.next_match(), Some(12));
    assert_eq!(cursor.table(), kmp::failure_table(b"needle").as_slice());
}

#[test]
fn test_binary_bytes() {
    let text = [0u8, 255, 0, 255, 0];
    assert_eq!(find_all(&[255, 0], &text, 0).unwrap(), vec![1, 3]);
    assert_eq!(replace_all(&[0], &[1, 1], &text, 0).unwrap(), vec![1, 1, 255, 1, 1, 255, 1, 1]);
}

proptest! {
    #[test]
    fn prop_find_is_leftmost(pat in "[ab]{1,3}", text in "[ab]{0,24}", start in 0usize..8) {
        let found = find(pat.as_bytes(), text.as_bytes(), start as i64).unwrap();
        let expected = naive_positions(pat.as_bytes(), text.as_bytes())
            .into_iter()
            .find(|&i| i >= start);
        prop_assert_eq!(found, expected);
        if let Some(o) = found {
            prop_assert_eq!(&text.as_bytes()[o..o + pat.len()], pat.as_bytes());
        }
    }

    #[test]
    fn prop_find_all_reports_every_occurrence(pat in "[ab]{1,3}", text in "[ab]{0,24}") {
        let found = find_all(pat.as_bytes(), text.as_bytes(), 0).unwrap();
        prop_assert_eq!(found, naive_positions(pat.as_bytes(), text.as_bytes()));
    }

    #[test]
    fn prop_replace_all_length(pat in "[ab]{1,3}", subst in "[xyz]{0,4}", text in "[ab]{0,24}") {
        let out = replace_all(pat.as_bytes(), subst.as_bytes(), text.as_bytes(), 0).unwrap();
        let n = naive_non_overlapping(pat.as_bytes(), text.as_bytes());
        prop_assert_eq!(out.len(), text.len() - n * pat.len() + n * subst.len());
    }

    #[test]
    fn prop_split_then_join_roundtrips(delim in "[ab]{1,2}", text in "[abc]{0,24}") {
        let parts = split(delim.as_bytes(), text.as_bytes(), 0, None).unwrap();
        prop_assert_eq!(parts.len(), naive_non_overlapping(delim.as_bytes(), text.as_bytes()) + 1);
        prop_assert_eq!(parts.join(delim.as_bytes()), text.as_bytes().to_vec());
    }
}
