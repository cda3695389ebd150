//! Token types for the j-- lexer.

use std::fmt;

/// A scanned token: kind, optional verbatim text, and 1-based line number.
///
/// `text` is present only for literal and identifier kinds and holds the
/// verbatim matched source text: quotes included for char/string literals,
/// suffix letters included for numeric literals. Every other kind has a
/// single canonical spelling available through [`TokenKind::image`].
///
/// Invariant: `line` is the source line on which the token's first
/// character appeared.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    pub line: u32,
}

impl Token {
    /// A token with no attached text (operators, punctuation, keywords, EOF).
    #[inline]
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Token {
            kind,
            text: None,
            line,
        }
    }

    /// A literal or identifier token carrying its verbatim source text.
    #[inline]
    pub fn with_text(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Token {
            kind,
            text: Some(text.into()),
            line,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{:?}({text:?}) @ {}", self.kind, self.line),
            None => write!(f, "{:?} @ {}", self.kind, self.line),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{text}"),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Every token kind in the j-- lexical grammar.
///
/// A closed enumeration: punctuation, single- and multi-character operators,
/// reserved words, the five literal categories, identifiers, and the
/// terminal end-of-input marker.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // Punctuation
    Comma,
    LBrack,
    LCurly,
    LParen,
    RBrack,
    RCurly,
    RParen,
    Semi,
    Colon,
    Question,
    Tilde,
    Dot,

    // Operators
    Assign,
    Equal,
    Not,
    NotEqual,
    Div,
    DivAssign,
    Minus,
    MinusAssign,
    Dec,
    Plus,
    PlusAssign,
    Inc,
    Star,
    StarAssign,
    Mod,
    ModAssign,
    Gt,
    Ge,
    Lt,
    Le,
    Ampersand,
    Land,
    Lor,

    // Reserved words
    Abstract,
    Boolean,
    Break,
    Case,
    Char,
    Class,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Extends,
    False,
    For,
    If,
    Import,
    Instanceof,
    Int,
    Long,
    New,
    Null,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Static,
    Super,
    Switch,
    This,
    True,
    Void,
    While,

    // Literals
    IntLiteral,
    LongLiteral,
    DoubleLiteral,
    CharLiteral,
    StringLiteral,

    Identifier,

    /// Terminal end-of-input marker.
    Eof,
}

impl TokenKind {
    /// The canonical spelling of this kind, or `None` for literal,
    /// identifier, and end-of-input kinds (whose text varies or is absent).
    pub fn image(self) -> Option<&'static str> {
        let image = match self {
            TokenKind::Comma => ",",
            TokenKind::LBrack => "[",
            TokenKind::LCurly => "{",
            TokenKind::LParen => "(",
            TokenKind::RBrack => "]",
            TokenKind::RCurly => "}",
            TokenKind::RParen => ")",
            TokenKind::Semi => ";",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Tilde => "~",
            TokenKind::Dot => ".",
            TokenKind::Assign => "=",
            TokenKind::Equal => "==",
            TokenKind::Not => "!",
            TokenKind::NotEqual => "!=",
            TokenKind::Div => "/",
            TokenKind::DivAssign => "/=",
            TokenKind::Minus => "-",
            TokenKind::MinusAssign => "-=",
            TokenKind::Dec => "--",
            TokenKind::Plus => "+",
            TokenKind::PlusAssign => "+=",
            TokenKind::Inc => "++",
            TokenKind::Star => "*",
            TokenKind::StarAssign => "*=",
            TokenKind::Mod => "%",
            TokenKind::ModAssign => "%=",
            TokenKind::Gt => ">",
            TokenKind::Ge => ">=",
            TokenKind::Lt => "<",
            TokenKind::Le => "<=",
            TokenKind::Ampersand => "&",
            TokenKind::Land => "&&",
            TokenKind::Lor => "||",
            TokenKind::Abstract => "abstract",
            TokenKind::Boolean => "boolean",
            TokenKind::Break => "break",
            TokenKind::Case => "case",
            TokenKind::Char => "char",
            TokenKind::Class => "class",
            TokenKind::Continue => "continue",
            TokenKind::Default => "default",
            TokenKind::Do => "do",
            TokenKind::Double => "double",
            TokenKind::Else => "else",
            TokenKind::Extends => "extends",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Import => "import",
            TokenKind::Instanceof => "instanceof",
            TokenKind::Int => "int",
            TokenKind::Long => "long",
            TokenKind::New => "new",
            TokenKind::Null => "null",
            TokenKind::Package => "package",
            TokenKind::Private => "private",
            TokenKind::Protected => "protected",
            TokenKind::Public => "public",
            TokenKind::Return => "return",
            TokenKind::Static => "static",
            TokenKind::Super => "super",
            TokenKind::Switch => "switch",
            TokenKind::This => "this",
            TokenKind::True => "true",
            TokenKind::Void => "void",
            TokenKind::While => "while",
            TokenKind::IntLiteral
            | TokenKind::LongLiteral
            | TokenKind::DoubleLiteral
            | TokenKind::CharLiteral
            | TokenKind::StringLiteral
            | TokenKind::Identifier
            | TokenKind::Eof => return None,
        };
        Some(image)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(image) = self.image() {
            return write!(f, "{image}");
        }
        let name = match self {
            TokenKind::IntLiteral => "int literal",
            TokenKind::LongLiteral => "long literal",
            TokenKind::DoubleLiteral => "double literal",
            TokenKind::CharLiteral => "char literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::Identifier => "identifier",
            _ => "end of input",
        };
        write!(f, "{name}")
    }
}
