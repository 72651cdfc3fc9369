//! Grouping of tokens into commands and validation of output redirection.

use crate::lexer::Token;

/// One command parsed out of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Command name followed by its arguments. Never empty for a segment
    /// produced by [`parse_line`].
    pub argv: Vec<String>,
    /// Target file of `> file`, when the command has one.
    pub redirect: Option<String>,
    /// Whether the command was followed by `&`.
    pub background: bool,
}

/// Ways a single command's tokens can be malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `>` with no command in front of it.
    RedirectWithoutCommand,
    /// `>` with nothing after it.
    MissingRedirectTarget,
    /// More than one token after `>`.
    TrailingAfterRedirect,
    /// A second `>` in the same command.
    DuplicateRedirect,
}

/// Splits a token stream on `&` and validates each resulting command.
///
/// `&` marks the command right before it as a background command; the
/// final command of a line, when not followed by `&`, runs in the
/// foreground. Empty stretches between separators are dropped, so a line
/// of only `&` parses to nothing at all. A malformed command yields an
/// error in its slot without affecting its neighbors.
pub fn parse_line(tokens: &[Token]) -> Vec<Result<Segment, ParseError>> {
    let mut out = Vec::new();
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        if *token == Token::Amp {
            if i > start {
                out.push(build_segment(&tokens[start..i], true));
            }
            start = i + 1;
        }
    }
    if start < tokens.len() {
        out.push(build_segment(&tokens[start..], false));
    }

    out
}

/// Checks `>` placement within a single command's tokens.
///
/// Valid placements are no `>` at all, or exactly one with at least one
/// token before it and exactly one token after it.
pub fn is_valid_redirection(tokens: &[Token]) -> bool {
    check_redirection(tokens).is_ok()
}

/// Returns the position of the `>` token, if the run has a valid one.
fn check_redirection(tokens: &[Token]) -> Result<Option<usize>, ParseError> {
    let pos = match tokens.iter().position(|t| *t == Token::RedirectOut) {
        Some(pos) => pos,
        None => return Ok(None),
    };

    if pos == 0 {
        return Err(ParseError::RedirectWithoutCommand);
    }
    let rest = &tokens[pos + 1..];
    if rest.contains(&Token::RedirectOut) {
        return Err(ParseError::DuplicateRedirect);
    }
    match rest.len() {
        0 => Err(ParseError::MissingRedirectTarget),
        1 => Ok(Some(pos)),
        _ => Err(ParseError::TrailingAfterRedirect),
    }
}

fn build_segment(run: &[Token], background: bool) -> Result<Segment, ParseError> {
    let (command, redirect) = match check_redirection(run)? {
        Some(pos) => {
            let target = match &run[pos + 1] {
                Token::Word(text) => Some(text.clone()),
                _ => None,
            };
            (&run[..pos], target)
        }
        None => (run, None),
    };

    Ok(Segment {
        argv: words(command),
        redirect,
        background,
    })
}

fn words(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Word(text) => Some(text.clone()),
            _ => None,
        })
        .collect()
}
