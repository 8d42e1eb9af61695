//! Lexer for Closure type annotations.
//!
//! Tokens carry only a kind and a span; [`token_text`] slices the source.
//! Unrecognized characters become one `Garbage` token per run, which the
//! parser reports as soon as it reaches it.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::token::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Consecutive lexer errors are coalesced into single `Garbage` tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut garbage_start: Option<usize> = None;
    let mut lexer = SyntaxKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => {
                flush_garbage(&mut tokens, &mut garbage_start, span.start);
                tokens.push(Token::new(kind, to_text_range(span)));
            }
            Err(()) => {
                garbage_start.get_or_insert(span.start);
            }
        }
    }
    flush_garbage(&mut tokens, &mut garbage_start, source.len());

    tokens
}

fn flush_garbage(tokens: &mut Vec<Token>, garbage_start: &mut Option<usize>, end: usize) {
    if let Some(start) = garbage_start.take() {
        tokens.push(Token::new(SyntaxKind::Garbage, to_text_range(start..end)));
    }
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
