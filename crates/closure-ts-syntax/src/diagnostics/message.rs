use rowan::TextRange;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// Parser kinds are errors: any of them makes the annotation unparseable.
/// Conversion kinds are warnings: the converter degrades and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Unclosed delimiters
    UnclosedParen,
    UnclosedBracket,
    UnclosedBrace,
    UnclosedTypeArguments,

    // User omitted something required
    ExpectedType,
    ExpectedName,
    ExpectedFieldName,
    ExpectedParameterList,

    // User wrote something that doesn't belong
    UnrecognizedCharacters,
    OptionalOutsideParameter,
    RequiredAfterOptional,
    TrailingInput,

    // Parsed fine, but has no counterpart in the target type system
    UnsupportedSyntax,
    ArrayArity,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::UnsupportedSyntax | Self::ArrayArity => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::OptionalOutsideParameter => {
                Some("a trailing `=` is only allowed in parameter annotations")
            }
            Self::ArrayArity => Some("e.g., `Array.<string>`"),
            Self::ExpectedParameterList => Some("e.g., `function(string): number`"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBracket => "missing closing `]`",
            Self::UnclosedBrace => "missing closing `}`",
            Self::UnclosedTypeArguments => "missing closing `>`",

            Self::ExpectedType => "expected a type",
            Self::ExpectedName => "expected a name",
            Self::ExpectedFieldName => "expected field name",
            Self::ExpectedParameterList => "expected `(` after `function`",

            Self::UnrecognizedCharacters => "unrecognized characters",
            Self::OptionalOutsideParameter => "optional marker outside a parameter",
            Self::RequiredAfterOptional => "required parameter after an optional one",
            Self::TrailingInput => "unexpected input after type",

            Self::UnsupportedSyntax => "unsupported syntax",
            Self::ArrayArity => "`Array` takes exactly one type argument",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedParen
            | Self::UnclosedBracket
            | Self::UnclosedBrace
            | Self::UnclosedTypeArguments => format!("{}; {{}}", self.fallback_message()),
            Self::UnsupportedSyntax => "unsupported syntax: `{}` has no equivalent".to_string(),
            Self::ArrayArity => "`Array` takes exactly one type argument, found {}".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        let hints = kind
            .default_hint()
            .map(|h| vec![h.to_string()])
            .unwrap_or_default();
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
            hints,
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
