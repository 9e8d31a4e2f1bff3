use super::*;

fn cursor_abc() -> TokenCursor {
    TokenCursor::new(vec![Token::text("a"), Token::text("b"), Token::text("c")])
}

// === Boundaries ===

#[test]
fn fresh_cursor_is_before_first() {
    let cursor = cursor_abc();
    assert!(cursor.has_next());
    assert!(!cursor.has_previous());
    assert_eq!(cursor.next_index(), 0);
    assert_eq!(cursor.previous_index(), None);
}

#[test]
fn previous_before_first_fails() {
    let mut cursor = cursor_abc();
    assert_eq!(cursor.previous(), Err(CursorError::NoPreviousToken));
}

#[test]
fn next_past_last_fails() -> Result<(), CursorError> {
    let mut cursor = cursor_abc();
    cursor.next()?;
    cursor.next()?;
    cursor.next()?;
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), Err(CursorError::NoNextToken));
    // A failed call does not move the cursor.
    assert_eq!(cursor.next_index(), 3);
    Ok(())
}

#[test]
fn empty_cursor_has_nothing_either_way() {
    let mut cursor = TokenCursor::new(Vec::new());
    assert_eq!(cursor.size(), 0);
    assert!(!cursor.has_next());
    assert!(!cursor.has_previous());
    assert_eq!(cursor.next(), Err(CursorError::NoNextToken));
    assert_eq!(cursor.previous(), Err(CursorError::NoPreviousToken));
    assert_eq!(cursor.next_token(), None);
    assert_eq!(cursor.previous_token(), None);
}

// === Traversal ===

#[test]
fn forward_traversal_in_order() -> Result<(), CursorError> {
    let mut cursor = cursor_abc();
    assert_eq!(*cursor.next()?, "a");
    assert_eq!(*cursor.next()?, "b");
    assert_eq!(*cursor.next()?, "c");
    Ok(())
}

#[test]
fn forward_then_backward_replays_in_reverse() {
    let mut cursor = cursor_abc();
    let mut forward = Vec::new();
    while let Some(token) = cursor.next_token() {
        forward.push(token.clone());
    }
    let mut backward = Vec::new();
    while let Some(token) = cursor.previous_token() {
        backward.push(token.clone());
    }
    backward.reverse();
    assert_eq!(forward, backward);
    // Back at the initial position.
    assert_eq!(cursor.next_index(), 0);
    assert_eq!(cursor.previous_index(), None);
}

#[test]
fn indexes_track_position() -> Result<(), CursorError> {
    let mut cursor = cursor_abc();
    cursor.next()?;
    assert_eq!(cursor.next_index(), 1);
    assert_eq!(cursor.previous_index(), Some(0));
    cursor.next()?;
    cursor.next()?;
    assert_eq!(cursor.next_index(), 3);
    assert_eq!(cursor.previous_index(), Some(2));
    Ok(())
}

#[test]
fn sentinel_accessors_do_not_fail_at_boundaries() {
    let mut cursor = cursor_abc();
    assert_eq!(cursor.previous_token(), None);
    while cursor.next_token().is_some() {}
    assert_eq!(cursor.next_token(), None);
    // Position unchanged by the refused calls.
    assert_eq!(cursor.next_index(), 3);
}

// === Random access ===

#[test]
fn get_peeks_without_moving() {
    let cursor = cursor_abc();
    assert_eq!(cursor.get(1).and_then(Token::as_str), Some("b"));
    assert_eq!(cursor.get(3), None);
    assert_eq!(cursor.next_index(), 0);
}

#[test]
fn null_tokens_traverse_like_any_other() -> Result<(), CursorError> {
    let mut cursor = TokenCursor::new(vec![Token::text("a"), Token::Null]);
    assert_eq!(*cursor.next()?, "a");
    assert!(cursor.next()?.is_null());
    assert_eq!(cursor.previous()?.as_str(), None);
    Ok(())
}

#[test]
fn reset_returns_to_before_first() -> Result<(), CursorError> {
    let mut cursor = cursor_abc();
    cursor.next()?;
    cursor.next()?;
    cursor.reset();
    assert_eq!(cursor.next_index(), 0);
    assert_eq!(*cursor.next()?, "a");
    Ok(())
}
