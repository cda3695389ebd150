//! The j-- tokenizing state machine.
//!
//! One exposed operation: [`Scanner::next_token`]. Each call pulls zero or
//! more characters from the underlying [`CharReader`] and returns exactly
//! one token; once the end-of-input token has been produced it is returned
//! on every subsequent call.
//!
//! Every lexical error is recovered locally: the error is reported through
//! the injected sink, the sticky flag is set, and either a (possibly
//! malformed) token is still returned or scanning retries from the next
//! character. The retry is an explicit loop, not a recursive self-call, so
//! a pathological run of invalid characters cannot grow the stack. Only an
//! underlying read failure is escalated, by substituting the end-of-input
//! sentinel so that scanning always terminates.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use jmm_lexer_core::{CharReader, SourceError, EOF_CHAR};
use tracing::{debug, trace};

use crate::diagnostic::{DiagnosticSink, StderrSink};
use crate::keywords;
use crate::number::{NumberClass, NumberMachine, Step};
use crate::token::{Token, TokenKind};

/// A lexical analyzer for j--, with no backtracking mechanism.
///
/// Owns its character source exclusively. `R` is the underlying byte
/// source, `S` the diagnostic sink; production code uses the file-backed
/// defaults via [`Scanner::from_path`].
pub struct Scanner<R = BufReader<File>, S = StderrSink> {
    input: CharReader<R>,
    sink: S,
    /// Next unscanned character (lookahead), or [`EOF_CHAR`].
    ch: char,
    /// Line of the lookahead character.
    line: u32,
    /// Sticky: set by the first lexical error, never cleared.
    in_error: bool,
}

impl Scanner {
    /// Open a scanner over a source file, reporting to stderr.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        Ok(Scanner::new(CharReader::open(path)?, StderrSink))
    }
}

impl<R: Read, S: DiagnosticSink> Scanner<R, S> {
    /// Construct a scanner over an already-opened character source.
    ///
    /// Primes the lookahead immediately, so the first `next_token` call
    /// starts with a valid current character.
    pub fn new(input: CharReader<R>, sink: S) -> Self {
        let mut scanner = Scanner {
            input,
            sink,
            ch: EOF_CHAR,
            line: 1,
            in_error: false,
        };
        scanner.next_ch();
        scanner
    }

    /// Scan and return the next token.
    ///
    /// Invalid input never yields a token of its own: the error is reported
    /// and scanning retries here, iteratively, until a real token (possibly
    /// `Eof`) is found.
    pub fn next_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.scan_once() {
                trace!(kind = ?token.kind, line = token.line, "token");
                return token;
            }
        }
    }

    /// Whether any lexical error has been reported so far.
    ///
    /// The caller checks this after scanning completes and suppresses later
    /// compilation phases if it is set.
    pub fn has_error(&self) -> bool {
        self.in_error
    }

    /// Identifier of the source being scanned, as used in diagnostics.
    pub fn source_id(&self) -> &str {
        self.input.source_id()
    }

    /// The injected diagnostic sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Release the underlying input resource.
    ///
    /// Must be called once scanning is done or abandoned.
    pub fn close(self) -> io::Result<()> {
        self.input.close()
    }

    /// One attempt at producing a token. `None` means an error was reported
    /// and the caller should retry.
    fn scan_once(&mut self) -> Option<Token> {
        // Whitespace/comment skip loop. A '/' is tentative: it may open a
        // comment (skip and repeat) or turn out to be an operator.
        loop {
            while is_whitespace(self.ch) {
                self.next_ch();
            }
            if self.ch != '/' {
                break;
            }
            let line = self.line;
            self.next_ch();
            match self.ch {
                '/' => {
                    // Line comment: skip to end of line
                    while self.ch != '\n' && self.ch != EOF_CHAR {
                        self.next_ch();
                    }
                }
                '*' => {
                    if !self.skip_block_comment() {
                        // Unterminated: reported; stop scanning immediately
                        return Some(Token::new(TokenKind::Eof, self.line));
                    }
                }
                '=' => return self.take(TokenKind::DivAssign, line),
                _ => return Some(Token::new(TokenKind::Div, line)),
            }
        }

        let line = self.line;
        match self.ch {
            EOF_CHAR => Some(Token::new(TokenKind::Eof, line)),
            ',' => self.take(TokenKind::Comma, line),
            '[' => self.take(TokenKind::LBrack, line),
            '{' => self.take(TokenKind::LCurly, line),
            '(' => self.take(TokenKind::LParen, line),
            ']' => self.take(TokenKind::RBrack, line),
            '}' => self.take(TokenKind::RCurly, line),
            ')' => self.take(TokenKind::RParen, line),
            ';' => self.take(TokenKind::Semi, line),
            ':' => self.take(TokenKind::Colon, line),
            '?' => self.take(TokenKind::Question, line),
            '~' => self.take(TokenKind::Tilde, line),
            '-' => {
                self.next_ch();
                match self.ch {
                    '=' => self.take(TokenKind::MinusAssign, line),
                    '-' => self.take(TokenKind::Dec, line),
                    _ => Some(Token::new(TokenKind::Minus, line)),
                }
            }
            '+' => {
                self.next_ch();
                match self.ch {
                    '=' => self.take(TokenKind::PlusAssign, line),
                    '+' => self.take(TokenKind::Inc, line),
                    _ => Some(Token::new(TokenKind::Plus, line)),
                }
            }
            '*' => {
                self.next_ch();
                if self.ch == '=' {
                    self.take(TokenKind::StarAssign, line)
                } else {
                    Some(Token::new(TokenKind::Star, line))
                }
            }
            '%' => {
                self.next_ch();
                if self.ch == '=' {
                    self.take(TokenKind::ModAssign, line)
                } else {
                    Some(Token::new(TokenKind::Mod, line))
                }
            }
            '!' => {
                self.next_ch();
                if self.ch == '=' {
                    self.take(TokenKind::NotEqual, line)
                } else {
                    Some(Token::new(TokenKind::Not, line))
                }
            }
            '=' => {
                self.next_ch();
                if self.ch == '=' {
                    self.take(TokenKind::Equal, line)
                } else {
                    Some(Token::new(TokenKind::Assign, line))
                }
            }
            '>' => {
                self.next_ch();
                if self.ch == '=' {
                    self.take(TokenKind::Ge, line)
                } else {
                    Some(Token::new(TokenKind::Gt, line))
                }
            }
            '<' => {
                self.next_ch();
                if self.ch == '=' {
                    self.take(TokenKind::Le, line)
                } else {
                    Some(Token::new(TokenKind::Lt, line))
                }
            }
            '&' => {
                self.next_ch();
                if self.ch == '&' {
                    self.take(TokenKind::Land, line)
                } else {
                    Some(Token::new(TokenKind::Ampersand, line))
                }
            }
            '|' => {
                self.next_ch();
                if self.ch == '|' {
                    self.take(TokenKind::Lor, line)
                } else {
                    self.report("operator | is not supported in j--");
                    None
                }
            }
            '.' => {
                self.next_ch();
                if self.ch.is_ascii_digit() {
                    Some(self.number(NumberMachine::from_dot(), line))
                } else {
                    Some(Token::new(TokenKind::Dot, line))
                }
            }
            '0'..='9' => Some(self.number(NumberMachine::new(), line)),
            '\'' => Some(self.char_literal(line)),
            '"' => Some(self.string_literal(line)),
            _ if is_identifier_start(self.ch) => Some(self.identifier(line)),
            other => {
                self.report(&format!("unidentified input token '{other}'"));
                self.next_ch();
                None
            }
        }
    }

    /// Consume the current character and emit a token at `line`.
    fn take(&mut self, kind: TokenKind, line: u32) -> Option<Token> {
        self.next_ch();
        Some(Token::new(kind, line))
    }

    /// Skip a block comment body; the lookahead is the opening `*`.
    /// Returns `false` when end of input was reached inside the comment.
    fn skip_block_comment(&mut self) -> bool {
        self.next_ch();
        loop {
            match self.ch {
                EOF_CHAR => {
                    self.report("unterminated multiline comment");
                    return false;
                }
                '*' => {
                    self.next_ch();
                    if self.ch == '/' {
                        self.next_ch();
                        return true;
                    }
                }
                _ => self.next_ch(),
            }
        }
    }

    /// Drive the numeric-literal automaton from the current lookahead.
    fn number(&mut self, mut machine: NumberMachine, line: u32) -> Token {
        loop {
            match machine.push(self.ch) {
                Step::Consumed => self.next_ch(),
                Step::ConsumedAndDone => {
                    self.next_ch();
                    break;
                }
                Step::Done => break,
            }
        }
        if machine.bad_exponent() {
            self.report("invalid exponent format");
        }
        let (text, class) = machine.finish();
        let kind = match class {
            NumberClass::Int => TokenKind::IntLiteral,
            NumberClass::Long => TokenKind::LongLiteral,
            NumberClass::Double => TokenKind::DoubleLiteral,
        };
        Token::with_text(kind, text, line)
    }

    /// Character literal; the lookahead is the opening quote.
    fn char_literal(&mut self, line: u32) -> Token {
        let mut text = String::from("'");
        self.next_ch();
        if self.ch == '\\' {
            self.next_ch();
            let esc = self.escape();
            text.push_str(esc);
        } else if self.ch != EOF_CHAR {
            text.push(self.ch);
            self.next_ch();
        }
        if self.ch == '\'' {
            text.push('\'');
            self.next_ch();
            return Token::with_text(TokenKind::CharLiteral, text, line);
        }
        self.report(&format!(
            "{} found by scanner where closing ' was expected",
            describe(self.ch)
        ));
        // Bounded recovery: skip to a quote, semicolon, newline, or EOF,
        // consuming the quote if that is what ended the skip. A (possibly
        // malformed) literal is still returned.
        while self.ch != '\'' && self.ch != ';' && self.ch != '\n' && self.ch != EOF_CHAR {
            self.next_ch();
        }
        if self.ch == '\'' {
            text.push('\'');
            self.next_ch();
        }
        Token::with_text(TokenKind::CharLiteral, text, line)
    }

    /// String literal; the lookahead is the opening quote. The closing
    /// quote must appear on the same line.
    fn string_literal(&mut self, line: u32) -> Token {
        let mut text = String::from("\"");
        self.next_ch();
        while self.ch != '"' && self.ch != '\n' && self.ch != EOF_CHAR {
            if self.ch == '\\' {
                self.next_ch();
                let esc = self.escape();
                text.push_str(esc);
            } else {
                text.push(self.ch);
                self.next_ch();
            }
        }
        match self.ch {
            '\n' => self.report("unexpected end of line found in string"),
            EOF_CHAR => self.report("unexpected end of file found in string"),
            _ => {
                // Scan the closing "
                text.push('"');
                self.next_ch();
            }
        }
        Token::with_text(TokenKind::StringLiteral, text, line)
    }

    /// Recognized escape, normalized to its canonical two-character form.
    /// The lookahead is the character after the backslash. An unrecognized
    /// code is reported and contributes no text.
    fn escape(&mut self) -> &'static str {
        let text = match self.ch {
            'b' => "\\b",
            't' => "\\t",
            'n' => "\\n",
            'f' => "\\f",
            'r' => "\\r",
            '"' => "\\\"",
            '\'' => "\\'",
            '\\' => "\\\\",
            EOF_CHAR => {
                self.report("badly formed escape at end of input");
                return "";
            }
            other => {
                self.report(&format!("badly formed escape: \\{other}"));
                self.next_ch();
                return "";
            }
        };
        self.next_ch();
        text
    }

    /// Greedy identifier match followed by reserved-word lookup.
    fn identifier(&mut self, line: u32) -> Token {
        let mut text = String::new();
        while is_identifier_part(self.ch) {
            text.push(self.ch);
            self.next_ch();
        }
        match keywords::lookup(&text) {
            Some(kind) => Token::new(kind, line),
            None => Token::with_text(TokenKind::Identifier, text, line),
        }
    }

    /// Advance the lookahead, updating the line number. A read failure is
    /// reported once and end-of-input substituted, guaranteeing forward
    /// progress.
    fn next_ch(&mut self) {
        match self.input.next_char() {
            Ok(c) => {
                self.ch = c;
                self.line = self.input.current_line();
            }
            Err(e) => {
                self.report(&e.to_string());
                self.ch = EOF_CHAR;
            }
        }
    }

    /// Report a lexical error and record that one has occurred.
    fn report(&mut self, message: &str) {
        self.in_error = true;
        debug!(line = self.line, message, "lexical error");
        self.sink.error(self.input.source_id(), self.line, message);
    }
}

/// j-- whitespace: space, tab, newline, form feed.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{c}')
}

/// Identifier-start: ASCII letters, `_`, `$`.
fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

/// Identifier-part: identifier-start plus digits.
fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

/// Printable description of a lookahead character for error messages.
fn describe(c: char) -> String {
    if c == EOF_CHAR {
        String::from("end of input")
    } else if c == '\n' {
        String::from("end of line")
    } else {
        c.to_string()
    }
}
