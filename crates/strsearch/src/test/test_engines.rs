// Cross-checks between the exact-match engine and the pattern engine
use crate::*;
use proptest::prelude::*;

#[test]
fn test_literal_pattern_agrees_with_kmp() {
    let text = b"the cat sat on the mat";
    for pat in [&b"at"[..], b"the", b"mat", b"dog", b""] {
        assert!(pattern::is_plain_pattern(pat));
        let kmp_hit = find(pat, text, 0).unwrap();
        let lua_hit = LuaPattern::new(pat).unwrap().find(text, 0).unwrap().map(|m| m.start);
        assert_eq!(kmp_hit, lua_hit, "{}", String::from_utf8_lossy(pat));
    }
}

#[test]
fn test_no_match_is_not_an_error() {
    assert_eq!(find(b"zz", b"abc", 0), Ok(None));
    assert_eq!(str_match(b"abc", b"%d", 1), Ok(None));
    assert_eq!(gsub(b"abc", b"%d", b"x", None), Ok((b"abc".to_vec(), 0)));
    assert!(gmatch(b"abc", b"%d").unwrap().next().is_none());
}

#[test]
fn test_check_set_matches_bracket_class() {
    let text = b"deadbeef";
    assert!(check_set(b"0123456789abcdef", text, false));
    assert!(str_match(text, b"^%x+$", 1).unwrap().is_some());
    assert!(!check_set(b"0123456789abcdef", b"xyz", false));
}

proptest! {
    #[test]
    fn prop_plain_pattern_leftmost_agrees(pat in "[abc]{1,4}", text in "[abc]{0,30}", start in 0usize..10) {
        let kmp_hit = find(pat.as_bytes(), text.as_bytes(), start as i64).unwrap();
        let lua_hit = LuaPattern::new(pat.as_bytes())
            .unwrap()
            .find(text.as_bytes(), start)
            .unwrap()
            .map(|m| m.start);
        prop_assert_eq!(kmp_hit, lua_hit);
    }

    #[test]
    fn prop_gsub_plain_agrees_with_replace_all(pat in "[ab]{1,3}", subst in "[xy]{0,3}", text in "[ab]{0,24}") {
        let (lua_out, _) = gsub(text.as_bytes(), pat.as_bytes(), subst.as_bytes(), None).unwrap();
        let kmp_out = replace_all(pat.as_bytes(), subst.as_bytes(), text.as_bytes(), 0).unwrap();
        prop_assert_eq!(lua_out, kmp_out);
    }
}
