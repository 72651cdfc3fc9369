//! Lexical analysis for the interpreter's line grammar.

use std::mem;

/// A token produced from one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A maximal run of characters that are neither whitespace nor an
    /// operator.
    Word(String),
    /// The output redirection operator, `>`.
    RedirectOut,
    /// The command separator, `&`.
    Amp,
}

/// Splits a line into tokens.
///
/// `>` and `&` stand on their own no matter how they are spaced, so `a>b`
/// produces three tokens. Whitespace only separates. The grammar has no
/// quoting or escaping, so tokenization cannot fail; a blank line simply
/// produces no tokens.
pub fn split_into_tokens(line: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut buffer = String::new();

    for ch in line.chars() {
        match ch {
            c if c.is_whitespace() => {
                if !buffer.is_empty() {
                    out.push(Token::Word(mem::take(&mut buffer)));
                }
            }
            '>' | '&' => {
                if !buffer.is_empty() {
                    out.push(Token::Word(mem::take(&mut buffer)));
                }
                out.push(if ch == '>' {
                    Token::RedirectOut
                } else {
                    Token::Amp
                });
            }
            c => buffer.push(c),
        }
    }
    if !buffer.is_empty() {
        out.push(Token::Word(buffer));
    }

    out
}
