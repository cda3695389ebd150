//! Reserved-word resolution.
//!
//! The keyword table is immutable, process-wide data: a pure lookup function
//! over `'static` spellings, shared by every scanner instance without
//! copying or locking. Lookup uses the identifier's length as a first-pass
//! filter (j-- keywords range from 2 to 10 characters), then matches against
//! the specific keywords of that length.

use crate::token::TokenKind;

/// Look up a reserved word by exact spelling.
///
/// Returns the corresponding [`TokenKind`] when `text` is a j-- reserved
/// word, `None` for a regular identifier. Identifiers whose length falls
/// outside the 2-10 range are rejected without any comparison.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-10 chars and start with a lowercase letter
    if !(2..=10).contains(&len) {
        return None;
    }
    if !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "do" => Some(TokenKind::Do),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "int" => Some(TokenKind::Int),
            "new" => Some(TokenKind::New),
            _ => None,
        },
        4 => match text {
            "case" => Some(TokenKind::Case),
            "char" => Some(TokenKind::Char),
            "else" => Some(TokenKind::Else),
            "long" => Some(TokenKind::Long),
            "null" => Some(TokenKind::Null),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            "void" => Some(TokenKind::Void),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenKind::Break),
            "class" => Some(TokenKind::Class),
            "false" => Some(TokenKind::False),
            "super" => Some(TokenKind::Super),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "double" => Some(TokenKind::Double),
            "import" => Some(TokenKind::Import),
            "public" => Some(TokenKind::Public),
            "return" => Some(TokenKind::Return),
            "static" => Some(TokenKind::Static),
            "switch" => Some(TokenKind::Switch),
            _ => None,
        },
        7 => match text {
            "boolean" => Some(TokenKind::Boolean),
            "default" => Some(TokenKind::Default),
            "extends" => Some(TokenKind::Extends),
            "package" => Some(TokenKind::Package),
            "private" => Some(TokenKind::Private),
            _ => None,
        },
        8 => match text {
            "abstract" => Some(TokenKind::Abstract),
            "continue" => Some(TokenKind::Continue),
            _ => None,
        },
        9 => match text {
            "protected" => Some(TokenKind::Protected),
            _ => None,
        },
        10 => match text {
            "instanceof" => Some(TokenKind::Instanceof),
            _ => None,
        },
        _ => None,
    }
}
