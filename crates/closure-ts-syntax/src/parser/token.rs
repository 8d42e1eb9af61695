//! Token kinds for Closure type annotations.
//!
//! Logos derives token recognition. Keywords are defined as tokens so they win
//! over `Id` for equal-length matches; longer identifiers (`nullable`) still lex as `Id`.

use logos::Logos;

/// All token kinds, plus the `Garbage`/`Error` sentinels that the lexer and
/// parser produce themselves. `#[repr(u16)]` keeps discriminants small for `TokenSet`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    /// `.<` opening type arguments in `Array.<string>`. Longer than `Dot`, so it wins.
    #[token(".<")]
    DotLt,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("...")]
    Ellipsis,

    #[token(".")]
    Dot,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    /// Trailing optional marker: `number=`
    #[token("=")]
    Equals,

    #[token("|")]
    Pipe,

    #[token("?")]
    Question,

    #[token("!")]
    Bang,

    #[token("*")]
    Star,

    #[token("function")]
    KwFunction,

    #[token("null")]
    KwNull,

    #[token("undefined")]
    KwUndefined,

    #[token("void")]
    KwVoid,

    #[token("new")]
    KwNew,

    #[token("this")]
    KwThis,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    StringLiteral,

    #[regex(r"-?[0-9]+(?:\.[0-9]+)?")]
    NumberLiteral,

    #[regex(r"[\p{XID_Start}_$][\p{XID_Continue}$]*")]
    Id,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Coalesced unrecognized characters
    Garbage,

    /// End of input as seen by the parser
    Error,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace)
    }

    /// Keywords that double as plain names outside their special positions.
    #[inline]
    pub fn is_contextual_keyword(self) -> bool {
        matches!(self, KwNew | KwThis)
    }

    /// Human-readable description for "expected X, found Y" messages.
    pub fn describe(self) -> &'static str {
        match self {
            ParenOpen => "`(`",
            ParenClose => "`)`",
            BracketOpen => "`[`",
            BracketClose => "`]`",
            BraceOpen => "`{`",
            BraceClose => "`}`",
            DotLt => "`.<`",
            Lt => "`<`",
            Gt => "`>`",
            Ellipsis => "`...`",
            Dot => "`.`",
            Comma => "`,`",
            Colon => "`:`",
            Equals => "`=`",
            Pipe => "`|`",
            Question => "`?`",
            Bang => "`!`",
            Star => "`*`",
            KwFunction => "`function`",
            KwNull => "`null`",
            KwUndefined => "`undefined`",
            KwVoid => "`void`",
            KwNew => "`new`",
            KwThis => "`this`",
            StringLiteral => "string literal",
            NumberLiteral => "number literal",
            Id => "name",
            Whitespace => "whitespace",
            Garbage => "unrecognized characters",
            Error => "end of annotation",
        }
    }
}

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for kind in ALL_KINDS {
            if self.contains(*kind) {
                list.entry(kind);
            }
        }
        list.finish()
    }
}

const ALL_KINDS: &[SyntaxKind] = &[
    ParenOpen,
    ParenClose,
    BracketOpen,
    BracketClose,
    BraceOpen,
    BraceClose,
    DotLt,
    Lt,
    Gt,
    Ellipsis,
    Dot,
    Comma,
    Colon,
    Equals,
    Pipe,
    Question,
    Bang,
    Star,
    KwFunction,
    KwNull,
    KwUndefined,
    KwVoid,
    KwNew,
    KwThis,
    StringLiteral,
    NumberLiteral,
    Id,
    Whitespace,
    Garbage,
    Error,
];

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// FIRST set of a type expression.
    pub const TYPE_FIRST: TokenSet = TokenSet::new(&[
        ParenOpen,
        BracketOpen,
        BraceOpen,
        Question,
        Bang,
        Star,
        KwFunction,
        KwNull,
        KwUndefined,
        KwVoid,
        KwNew,
        KwThis,
        StringLiteral,
        NumberLiteral,
        Id,
    ]);

    /// Tokens after which a lone `?` is the unknown type rather than a prefix.
    pub const NULLABLE_LITERAL_FOLLOW: TokenSet = TokenSet::new(&[
        ParenClose,
        BracketClose,
        BraceClose,
        Comma,
        Pipe,
        Equals,
        Gt,
        Error,
    ]);

    /// Suffixes that wrap the preceding type: `T?`, `T!`, `T[]`.
    pub const POSTFIX: TokenSet = TokenSet::new(&[Question, Bang, BracketOpen]);

    /// Tokens that open type arguments: `Array.<T>` and `Array<T>`.
    pub const TYPE_ARGS_OPEN: TokenSet = TokenSet::new(&[DotLt, Lt]);

    /// Segments after a `.` in a dotted name: `goog.functions`, `ns.new`.
    pub const NAME_SEGMENT: TokenSet = TokenSet::new(&[
        Id,
        KwFunction,
        KwNull,
        KwUndefined,
        KwVoid,
        KwNew,
        KwThis,
    ]);

    /// Tokens usable as record keys besides identifiers.
    pub const RECORD_KEY: TokenSet = TokenSet::new(&[
        Id,
        StringLiteral,
        NumberLiteral,
        KwFunction,
        KwNull,
        KwUndefined,
        KwVoid,
        KwNew,
        KwThis,
    ]);
}
