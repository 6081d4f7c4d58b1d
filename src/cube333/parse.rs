//! Reading moves out of free-form notation.
//!
//! A move is a letter from the symbol table followed by an optional `2` and an optional `'`.
//! Anything else in the text (spaces, brackets, commas, stray letters) is skipped, so this is as
//! happy reading `R U R' U'` as `(R U R' U'),x2 y'`.

use super::moves::{Move333, Move333Type, Turn};
use crate::error::Error;
use crate::moves::MoveSequence;

/// Extract every move from `text`, left to right. This never fails: text with no moves in it
/// gives an empty sequence.
pub fn parse(text: &str) -> MoveSequence<Move333> {
    let mut moves = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let Some(ty) = Move333Type::from_symbol(c) else {
            continue;
        };
        let double = chars.next_if_eq(&'2').is_some();
        let inverted = chars.next_if_eq(&'\'').is_some();
        moves.push(Move333 {
            ty,
            turn: Turn::from_markers(double, inverted),
        });
    }

    MoveSequence(moves)
}

/// Like [`parse`], but for a field that has to contain at least one move. `field` names the field
/// in the error.
pub fn parse_required(text: &str, field: &'static str) -> Result<MoveSequence<Move333>, Error> {
    let moves = parse(text);
    if moves.is_empty() {
        return Err(Error::UnrecognizedSymbol { field });
    }
    Ok(moves)
}

/// Remove a `//` comment, and everything after it, from a line.
pub fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(i) => &line[..i],
        None => line,
    }
}
