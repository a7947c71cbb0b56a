//! Token types for the OpenSearch SQL lexer.
//!
//! Defines the full token vocabulary of the dialect — reserved keywords,
//! punctuators, literal kinds, trivia, and sentinels — together with the
//! `Token` value the lexer hands to its consumers.

use std::fmt;

use crate::keyword;

/// A half-open byte range in the source, with the 1-based line and column
/// of its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source (inclusive).
    pub start: usize,
    /// End byte offset in source (exclusive).
    pub end: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The channel a token is emitted on.
///
/// Channels let a parser ignore non-grammar tokens wholesale: the filtered
/// stream ([`crate::Lexer::next_token`]) surfaces only `Default` and `Error`
/// tokens, while the raw stream carries all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Grammar-significant tokens.
    Default,
    /// Whitespace and block comments.
    Hidden,
    /// Line comments, kept separately so documentation tooling can surface
    /// them without seeing whitespace.
    SqlComment,
    /// Single-character fallback tokens for unrecognized input.
    Error,
}

impl Channel {
    /// Returns true for channels the filtered token stream delivers.
    pub fn is_significant(self) -> bool {
        matches!(self, Channel::Default | Channel::Error)
    }
}

/// A classified, positioned substring of the input.
///
/// Tokens are plain values: they borrow their lexeme from the input buffer
/// and carry no state beyond their creation. Concatenating the lexemes of
/// all raw tokens reproduces the input byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// What the lexeme was classified as.
    pub kind: TokenKind,
    /// The channel this token belongs to.
    pub channel: Channel,
    /// The exact source text matched, original casing preserved.
    pub lexeme: &'a str,
    /// Where the lexeme sits in the source.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    pub fn new(kind: TokenKind, channel: Channel, lexeme: &'a str, span: Span) -> Self {
        Self {
            kind,
            channel,
            lexeme,
            span,
        }
    }

    /// Returns true for the synthetic end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}('{}') at {}", self.kind, self.lexeme, self.span)
    }
}

/// The token vocabulary of the OpenSearch SQL dialect.
///
/// A flat enumeration: keyword kinds differ only in identity, so each is a
/// unit variant and the canonical spelling lives in the keyword table
/// (see [`crate::keyword`]). Reserved words are matched case-insensitively;
/// the token's lexeme keeps the casing that was written.
// Keyword variants are named after their canonical spelling and carry no
// individual docs.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Core SQL keywords.
    All,
    And,
    As,
    Asc,
    Boolean,
    Between,
    By,
    Case,
    Cast,
    Cross,
    Columns,
    Datetime,
    Delete,
    Desc,
    Describe,
    Distinct,
    Div,
    Double,
    Else,
    Exists,
    False,
    Float,
    First,
    From,
    Group,
    Having,
    In,
    Inner,
    Int,
    Integer,
    Is,
    Join,
    Last,
    Left,
    Like,
    Limit,
    Long,
    Match,
    Natural,
    Missing,
    Mod,
    Not,
    Null,
    Nulls,
    On,
    Or,
    Order,
    Outer,
    Over,
    Partition,
    Regexp,
    Right,
    Select,
    Show,
    String,
    Then,
    True,
    Union,
    Using,
    When,
    Where,
    Except,

    // Aggregate and string functions usable as bare keywords.
    Avg,
    Count,
    Max,
    Min,
    Sum,
    VarPop,
    VarSamp,
    Variance,
    Std,
    Stddev,
    StddevPop,
    StddevSamp,
    Substring,
    Trim,
    End,
    Full,
    Offset,

    // INTERVAL and its time units.
    Interval,
    Microsecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    SecondMicrosecond,
    MinuteMicrosecond,
    MinuteSecond,
    HourMicrosecond,
    HourSecond,
    HourMinute,
    DayMicrosecond,
    DaySecond,
    DayMinute,
    DayHour,
    YearMonth,

    // Metadata commands.
    Tables,

    // Scalar function names.
    Abs,
    Acos,
    Add,
    Addtime,
    Ascii,
    Asin,
    Atan,
    Atan2,
    Cbrt,
    Ceil,
    Ceiling,
    Concat,
    ConcatWs,
    Conv,
    ConvertTz,
    Cos,
    Cosh,
    Cot,
    Crc32,
    Curdate,
    Curtime,
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    Date,
    DateAdd,
    DateFormat,
    DateSub,
    Datediff,
    Dayname,
    Dayofmonth,
    Dayofweek,
    Dayofyear,
    Degrees,
    Divide,
    E,
    Exp,
    Expm1,
    Extract,
    Floor,
    FromDays,
    FromUnixtime,
    GetFormat,
    If,
    Ifnull,
    Isnull,
    LastDay,
    Length,
    Ln,
    Localtime,
    Localtimestamp,
    Locate,
    Log,
    Log10,
    Log2,
    Lower,
    Ltrim,
    Makedate,
    Maketime,
    Modulus,
    Monthname,
    Multiply,
    Now,
    Nullif,
    PeriodAdd,
    PeriodDiff,
    Pi,
    Position,
    Pow,
    Power,
    Radians,
    Rand,
    Replace,
    Rint,
    Round,
    Rtrim,
    Reverse,
    SecToTime,
    Sign,
    Signum,
    Sin,
    Sinh,
    Sqrt,
    StrToDate,
    Subdate,
    Subtime,
    Subtract,
    Sysdate,
    Tan,
    Time,
    Timediff,
    TimeFormat,
    TimeToSec,
    Timestamp,
    Truncate,
    ToDays,
    ToSeconds,
    UnixTimestamp,
    Upper,
    UtcDate,
    UtcTime,
    UtcTimestamp,

    // ODBC date/time escape markers, as in `{ts '...'}`.
    D,
    T,
    Ts,

    // Window function names.
    DenseRank,
    Rank,
    RowNumber,

    // OpenSearch query-DSL and aggregation keywords.
    DateHistogram,
    DayOfMonth,
    DayOfYear,
    DayOfWeek,
    Exclude,
    ExtendedStats,
    Field,
    Filter,
    GeoBoundingBox,
    GeoCell,
    GeoDistance,
    GeoDistanceRange,
    GeoIntersects,
    GeoPolygon,
    Histogram,
    HourOfDay,
    Include,
    InTerms,
    Matchphrase,
    MatchPhrase,
    Matchphrasequery,
    SimpleQueryString,
    QueryString,
    MatchPhrasePrefix,
    Matchquery,
    MatchQuery,
    MinuteOfDay,
    MinuteOfHour,
    MonthOfYear,
    Multimatch,
    MultiMatch,
    Multimatchquery,
    Nested,
    Percentiles,
    RegexpQuery,
    ReverseNested,
    Query,
    Range,
    Score,
    Scorequery,
    ScoreQuery,
    SecondOfMinute,
    Stats,
    Term,
    Terms,
    Timestampadd,
    Timestampdiff,
    Tophits,
    Typeof,
    WeekOfYear,
    Weekofyear,
    Weekday,
    Wildcardquery,
    WildcardQuery,
    Substr,
    Strcmp,
    Adddate,
    Yearweek,

    // Relevance-search parameter names.
    AllowLeadingWildcard,
    Analyzer,
    AnalyzeWildcard,
    AutoGenerateSynonymsPhraseQuery,
    Boost,
    CaseInsensitive,
    CutoffFrequency,
    DefaultField,
    DefaultOperator,
    Escape,
    EnablePositionIncrements,
    Fields,
    Flags,
    Fuzziness,
    FuzzyMaxExpansions,
    FuzzyPrefixLength,
    FuzzyRewrite,
    FuzzyTranspositions,
    Lenient,
    LowFreqOperator,
    MaxDeterminizedStates,
    MaxExpansions,
    MinimumShouldMatch,
    Operator,
    PhraseSlop,
    PrefixLength,
    QuoteAnalyzer,
    QuoteFieldSuffix,
    Rewrite,
    Slop,
    TieBreaker,
    TimeZone,
    Type,
    ZeroTermsQuery,
    Highlight,
    PreTags,
    PostTags,
    MatchBoolPrefix,
    // Punctuators. The dialect has no multi-character operator tokens:
    // `<=`, `!=` and friends are adjacent-token pairs at the parser level.
    Star,
    Slash,
    Percent,
    Plus,
    Minus,
    Eq,
    Gt,
    Lt,
    Exclamation,
    Tilde,
    Pipe,
    Ampersand,
    Caret,
    Dot,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    AtSign,
    LBrace,
    RBrace,
    /// A lone `'` — also the fall-through for an unterminated string.
    SingleQuote,
    /// A lone `"` — also the fall-through for an unterminated quoted identifier.
    DoubleQuote,
    /// A lone `` ` `` — also the fall-through for an unterminated quoted identifier.
    Backtick,
    Colon,

    // Literals and identifiers.
    /// Single-quoted string, e.g. `'it''s'`.
    StringLiteral,
    /// National string, e.g. `N'text'`.
    NationalStringLiteral,
    /// Decimal integer, e.g. `42`.
    DecimalLiteral,
    /// Hexadecimal literal, `0x1F` or `X'1F'`.
    HexadecimalLiteral,
    /// Real literal with fraction and/or exponent, e.g. `1.5e-2`.
    RealLiteral,
    /// Bit-string literal, e.g. `B'0101'`.
    BitString,
    /// The `\N` null marker.
    NullSpecLiteral,
    /// Unquoted identifier that is not a reserved word.
    Identifier,
    /// Double-quoted identifier, e.g. `"col"`.
    DoubleQuoteIdentifier,
    /// Backtick-quoted identifier, e.g. `` `col` ``.
    BacktickIdentifier,

    // Trivia.
    /// A run of spaces, tabs, and line breaks.
    Space,
    /// `/* ... */`, possibly unterminated at end of input.
    BlockComment,
    /// `-- ...` or `# ...` up to the end of the line.
    LineComment,

    // Sentinels.
    /// Single unrecognized character.
    Error,
    /// Synthetic zero-width end-of-input token.
    Eof,
}

impl TokenKind {
    /// Returns the canonical uppercase spelling when this kind is a
    /// reserved word.
    pub fn keyword_spelling(self) -> Option<&'static str> {
        keyword::spelling(self)
    }

    /// Returns true if this kind is a reserved word.
    pub fn is_keyword(self) -> bool {
        self.keyword_spelling().is_some()
    }

    /// Returns true for literal kinds (strings, numbers, `\N`).
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral
                | TokenKind::NationalStringLiteral
                | TokenKind::DecimalLiteral
                | TokenKind::HexadecimalLiteral
                | TokenKind::RealLiteral
                | TokenKind::BitString
                | TokenKind::NullSpecLiteral
        )
    }

    /// Returns true for identifier kinds, quoted or not.
    pub fn is_identifier(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::DoubleQuoteIdentifier
                | TokenKind::BacktickIdentifier
        )
    }

    /// Returns true for single-character punctuator kinds.
    pub fn is_punctuation(self) -> bool {
        self.punctuation_symbol().is_some()
    }

    /// Returns true for whitespace and comment kinds.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Space | TokenKind::BlockComment | TokenKind::LineComment
        )
    }

    /// Returns the symbol for punctuator kinds.
    pub fn punctuation_symbol(self) -> Option<char> {
        Some(match self {
            TokenKind::Star => '*',
            TokenKind::Slash => '/',
            TokenKind::Percent => '%',
            TokenKind::Plus => '+',
            TokenKind::Minus => '-',
            TokenKind::Eq => '=',
            TokenKind::Gt => '>',
            TokenKind::Lt => '<',
            TokenKind::Exclamation => '!',
            TokenKind::Tilde => '~',
            TokenKind::Pipe => '|',
            TokenKind::Ampersand => '&',
            TokenKind::Caret => '^',
            TokenKind::Dot => '.',
            TokenKind::LParen => '(',
            TokenKind::RParen => ')',
            TokenKind::LBracket => '[',
            TokenKind::RBracket => ']',
            TokenKind::Comma => ',',
            TokenKind::Semicolon => ';',
            TokenKind::AtSign => '@',
            TokenKind::LBrace => '{',
            TokenKind::RBrace => '}',
            TokenKind::SingleQuote => '\'',
            TokenKind::DoubleQuote => '"',
            TokenKind::Backtick => '`',
            TokenKind::Colon => ':',
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(spelling) = self.keyword_spelling() {
            return f.write_str(spelling);
        }
        if let Some(symbol) = self.punctuation_symbol() {
            return write!(f, "{}", symbol);
        }
        let name = match self {
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::NationalStringLiteral => "NATIONAL_STRING_LITERAL",
            TokenKind::DecimalLiteral => "DECIMAL_LITERAL",
            TokenKind::HexadecimalLiteral => "HEXADECIMAL_LITERAL",
            TokenKind::RealLiteral => "REAL_LITERAL",
            TokenKind::BitString => "BIT_STRING",
            TokenKind::NullSpecLiteral => "NULL_SPEC_LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::DoubleQuoteIdentifier => "DOUBLE_QUOTE_IDENTIFIER",
            TokenKind::BacktickIdentifier => "BACKTICK_QUOTE_IDENTIFIER",
            TokenKind::Space => "SPACE",
            TokenKind::BlockComment => "BLOCK_COMMENT",
            TokenKind::LineComment => "LINE_COMMENT",
            TokenKind::Error => "ERROR",
            TokenKind::Eof => "EOF",
            _ => unreachable!("keyword and punctuator kinds handled above"),
        };
        f.write_str(name)
    }
}
