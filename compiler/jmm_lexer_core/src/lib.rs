//! Character-level input layer for the j-- compiler.
//!
//! This crate owns exactly one concern: turning a raw, named input resource
//! into a stream of characters with all platform line-ending conventions
//! collapsed to `'\n'` and a running 1-based line count. The tokenizer in
//! `jmm_lexer` sits on top of it with a single character of lookahead.
//!
//! The crate is standalone (no `jmm_*` dependencies) so that external tools
//! can consume source text the same way the compiler does.

mod char_reader;

pub use char_reader::{CharReader, SourceError, EOF_CHAR};
