//! Lexical analyzer for j--, a restricted Java-like source language.
//!
//! The scanner converts raw source text into a left-to-right stream of
//! classified [`Token`]s with no backtracking: a single character of
//! lookahead resolves every multi-character token. Lexical errors are
//! recovered locally: every call to [`Scanner::next_token`] returns exactly
//! one token, and a sticky error flag records that something went wrong so
//! the driver can suppress later compilation phases.
//!
//! Diagnostics are pushed through an injected [`DiagnosticSink`] as they are
//! discovered, one line per error, so a single pass over a defective input
//! surfaces every lexical problem it contains.

mod diagnostic;
mod keywords;
mod number;
mod scanner;
mod token;

pub use diagnostic::{CollectingSink, DiagnosticSink, StderrSink};
pub use scanner::Scanner;
pub use token::{Token, TokenKind};

// Re-export the character layer so callers need not depend on it directly.
pub use jmm_lexer_core::{CharReader, SourceError, EOF_CHAR};
