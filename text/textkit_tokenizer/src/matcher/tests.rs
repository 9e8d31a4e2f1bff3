use super::*;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

// === Single character ===

#[test]
fn char_matcher_matches_exact_char() {
    let buf = chars("a,b");
    let m = StrMatcher::char_matcher(',');
    assert_eq!(m.matches(&buf, 0, 0, 3), 0);
    assert_eq!(m.matches(&buf, 1, 0, 3), 1);
    assert_eq!(m.matches(&buf, 2, 0, 3), 0);
}

#[test]
fn comma_tab_space_are_char_matchers() {
    let buf = chars(", \t");
    assert_eq!(StrMatcher::comma_matcher().matches(&buf, 0, 0, 3), 1);
    assert_eq!(StrMatcher::space_matcher().matches(&buf, 1, 0, 3), 1);
    assert_eq!(StrMatcher::tab_matcher().matches(&buf, 2, 0, 3), 1);
}

// === Character set ===

#[test]
fn char_set_matches_any_member() {
    let buf = chars("a/b\\c");
    let m = StrMatcher::char_set_matcher("/\\");
    assert_eq!(m.matches(&buf, 0, 0, 5), 0);
    assert_eq!(m.matches(&buf, 1, 0, 5), 1);
    assert_eq!(m.matches(&buf, 3, 0, 5), 1);
}

#[test]
fn empty_char_set_never_matches() {
    let buf = chars("abc");
    let m = StrMatcher::char_set_matcher("");
    for pos in 0..3 {
        assert_eq!(m.matches(&buf, pos, 0, 3), 0);
    }
}

#[test]
fn split_matcher_covers_whitespace_set() {
    let buf = chars(" \t\n\r\u{c}x");
    let m = StrMatcher::split_matcher();
    for pos in 0..5 {
        assert_eq!(m.matches(&buf, pos, 0, 6), 1, "pos {pos}");
    }
    assert_eq!(m.matches(&buf, 5, 0, 6), 0);
}

#[test]
fn split_matcher_does_not_match_other_control_chars() {
    let buf = chars("\u{1}");
    assert_eq!(StrMatcher::split_matcher().matches(&buf, 0, 0, 1), 0);
}

// === Literal string ===

#[test]
fn string_matcher_matches_full_literal() {
    let buf = chars("a##b");
    let m = StrMatcher::string_matcher("##");
    assert_eq!(m.matches(&buf, 0, 0, 4), 0);
    assert_eq!(m.matches(&buf, 1, 0, 4), 2);
    assert_eq!(m.matches(&buf, 2, 0, 4), 0);
}

#[test]
fn string_matcher_respects_range_end() {
    let buf = chars("a##");
    let m = StrMatcher::string_matcher("##");
    // The literal would fit in the buffer but not in the range.
    assert_eq!(m.matches(&buf, 1, 0, 2), 0);
    assert_eq!(m.matches(&buf, 1, 0, 3), 2);
}

#[test]
fn empty_string_matcher_never_matches() {
    let buf = chars("abc");
    let m = StrMatcher::string_matcher("");
    assert_eq!(m.matches(&buf, 0, 0, 3), 0);
}

// === Trim ===

#[test]
fn trim_matches_space_and_control_chars() {
    let buf = chars(" \t\u{1}a");
    let m = StrMatcher::trim_matcher();
    assert_eq!(m.matches(&buf, 0, 0, 4), 1);
    assert_eq!(m.matches(&buf, 1, 0, 4), 1);
    assert_eq!(m.matches(&buf, 2, 0, 4), 1);
    assert_eq!(m.matches(&buf, 3, 0, 4), 0);
}

// === None ===

#[test]
fn none_matcher_never_matches() {
    let buf = chars("   ");
    let m = StrMatcher::none_matcher();
    for pos in 0..3 {
        assert_eq!(m.matches(&buf, pos, 0, 3), 0);
    }
}

// === Quotes ===

#[test]
fn quote_matchers() {
    let buf = chars("'\"x");
    assert_eq!(StrMatcher::single_quote_matcher().matches(&buf, 0, 0, 3), 1);
    assert_eq!(StrMatcher::single_quote_matcher().matches(&buf, 1, 0, 3), 0);
    assert_eq!(StrMatcher::double_quote_matcher().matches(&buf, 1, 0, 3), 1);
    assert_eq!(StrMatcher::quote_matcher().matches(&buf, 0, 0, 3), 1);
    assert_eq!(StrMatcher::quote_matcher().matches(&buf, 1, 0, 3), 1);
    assert_eq!(StrMatcher::quote_matcher().matches(&buf, 2, 0, 3), 0);
}

// === Custom ===

#[test]
fn custom_matcher_gets_full_contract() {
    // Matches a run of digits in one call.
    let m = StrMatcher::custom(|buffer: &[char], pos, _start, end| {
        buffer[pos..end].iter().take_while(|c| c.is_ascii_digit()).count()
    });
    let buf = chars("ab123cd");
    assert_eq!(m.matches(&buf, 0, 0, 7), 0);
    assert_eq!(m.matches(&buf, 2, 0, 7), 3);
    assert_eq!(m.matches(&buf, 2, 0, 4), 2);
}

// === Bounds ===

#[test]
fn out_of_range_position_never_matches() {
    let buf = chars("aaa");
    let m = StrMatcher::char_matcher('a');
    assert_eq!(m.matches(&buf, 2, 0, 2), 0, "pos at range_end");
    assert_eq!(m.matches(&buf, 0, 1, 3), 0, "pos before range_start");
}

#[test]
fn matchers_are_cloneable_and_debuggable() {
    let m = StrMatcher::string_matcher("ab");
    let copy = m.clone();
    let buf = chars("ab");
    assert_eq!(copy.matches(&buf, 0, 0, 2), 2);
    assert_eq!(format!("{m:?}"), "StrMatcher::Str(\"ab\")");
    assert_eq!(
        format!("{:?}", StrMatcher::custom(|_, _, _, _| 0)),
        "StrMatcher::Custom(..)"
    );
}
