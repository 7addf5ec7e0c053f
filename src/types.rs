// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens produced by the `Tokenizer` use this type;
/// the alignment functions themselves accept any token type implementing `PartialEq`.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A 0-based position within a reference or hypothesis sequence.
pub type TokenIndex = usize;

/// The minimum number of insertions, deletions, and substitutions that transform one
/// sequence into the other.
pub type EditDistance = usize;

/// A closed interval `(start, end)` of token indices, with `start <= end`.
///
/// A single index is represented as `(idx, idx)`.
pub type Interval = (TokenIndex, TokenIndex);
