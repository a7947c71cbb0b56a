//! The reserved-word table of the OpenSearch SQL dialect.
//!
//! Changing the dialect's reserved-word set is purely a data change to
//! [`KEYWORDS`]; the matching algorithm never needs to know which words
//! exist. Lookup is case-insensitive on the ASCII range only (no
//! locale-specific folding), with a handful of single-letter markers
//! recognized in uppercase only.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::token::TokenKind;

/// Every reserved word, as `(canonical uppercase spelling, kind)`.
///
/// Quirks inherited from the dialect:
/// - set difference is spelled `MINUS` (kind [`TokenKind::Except`]);
/// - the highlight tag parameters are spelled `PRE_TAGS`/`POST_TAGS`.
pub static KEYWORDS: &[(&str, TokenKind)] = &[
    ("ALL", TokenKind::All),
    ("AND", TokenKind::And),
    ("AS", TokenKind::As),
    ("ASC", TokenKind::Asc),
    ("BOOLEAN", TokenKind::Boolean),
    ("BETWEEN", TokenKind::Between),
    ("BY", TokenKind::By),
    ("CASE", TokenKind::Case),
    ("CAST", TokenKind::Cast),
    ("CROSS", TokenKind::Cross),
    ("COLUMNS", TokenKind::Columns),
    ("DATETIME", TokenKind::Datetime),
    ("DELETE", TokenKind::Delete),
    ("DESC", TokenKind::Desc),
    ("DESCRIBE", TokenKind::Describe),
    ("DISTINCT", TokenKind::Distinct),
    ("DIV", TokenKind::Div),
    ("DOUBLE", TokenKind::Double),
    ("ELSE", TokenKind::Else),
    ("EXISTS", TokenKind::Exists),
    ("FALSE", TokenKind::False),
    ("FLOAT", TokenKind::Float),
    ("FIRST", TokenKind::First),
    ("FROM", TokenKind::From),
    ("GROUP", TokenKind::Group),
    ("HAVING", TokenKind::Having),
    ("IN", TokenKind::In),
    ("INNER", TokenKind::Inner),
    ("INT", TokenKind::Int),
    ("INTEGER", TokenKind::Integer),
    ("IS", TokenKind::Is),
    ("JOIN", TokenKind::Join),
    ("LAST", TokenKind::Last),
    ("LEFT", TokenKind::Left),
    ("LIKE", TokenKind::Like),
    ("LIMIT", TokenKind::Limit),
    ("LONG", TokenKind::Long),
    ("MATCH", TokenKind::Match),
    ("NATURAL", TokenKind::Natural),
    ("MISSING", TokenKind::Missing),
    ("MOD", TokenKind::Mod),
    ("NOT", TokenKind::Not),
    ("NULL", TokenKind::Null),
    ("NULLS", TokenKind::Nulls),
    ("ON", TokenKind::On),
    ("OR", TokenKind::Or),
    ("ORDER", TokenKind::Order),
    ("OUTER", TokenKind::Outer),
    ("OVER", TokenKind::Over),
    ("PARTITION", TokenKind::Partition),
    ("REGEXP", TokenKind::Regexp),
    ("RIGHT", TokenKind::Right),
    ("SELECT", TokenKind::Select),
    ("SHOW", TokenKind::Show),
    ("STRING", TokenKind::String),
    ("THEN", TokenKind::Then),
    ("TRUE", TokenKind::True),
    ("UNION", TokenKind::Union),
    ("USING", TokenKind::Using),
    ("WHEN", TokenKind::When),
    ("WHERE", TokenKind::Where),
    ("MINUS", TokenKind::Except),
    ("AVG", TokenKind::Avg),
    ("COUNT", TokenKind::Count),
    ("MAX", TokenKind::Max),
    ("MIN", TokenKind::Min),
    ("SUM", TokenKind::Sum),
    ("VAR_POP", TokenKind::VarPop),
    ("VAR_SAMP", TokenKind::VarSamp),
    ("VARIANCE", TokenKind::Variance),
    ("STD", TokenKind::Std),
    ("STDDEV", TokenKind::Stddev),
    ("STDDEV_POP", TokenKind::StddevPop),
    ("STDDEV_SAMP", TokenKind::StddevSamp),
    ("SUBSTRING", TokenKind::Substring),
    ("TRIM", TokenKind::Trim),
    ("END", TokenKind::End),
    ("FULL", TokenKind::Full),
    ("OFFSET", TokenKind::Offset),
    ("INTERVAL", TokenKind::Interval),
    ("MICROSECOND", TokenKind::Microsecond),
    ("SECOND", TokenKind::Second),
    ("MINUTE", TokenKind::Minute),
    ("HOUR", TokenKind::Hour),
    ("DAY", TokenKind::Day),
    ("WEEK", TokenKind::Week),
    ("MONTH", TokenKind::Month),
    ("QUARTER", TokenKind::Quarter),
    ("YEAR", TokenKind::Year),
    ("SECOND_MICROSECOND", TokenKind::SecondMicrosecond),
    ("MINUTE_MICROSECOND", TokenKind::MinuteMicrosecond),
    ("MINUTE_SECOND", TokenKind::MinuteSecond),
    ("HOUR_MICROSECOND", TokenKind::HourMicrosecond),
    ("HOUR_SECOND", TokenKind::HourSecond),
    ("HOUR_MINUTE", TokenKind::HourMinute),
    ("DAY_MICROSECOND", TokenKind::DayMicrosecond),
    ("DAY_SECOND", TokenKind::DaySecond),
    ("DAY_MINUTE", TokenKind::DayMinute),
    ("DAY_HOUR", TokenKind::DayHour),
    ("YEAR_MONTH", TokenKind::YearMonth),
    ("TABLES", TokenKind::Tables),
    ("ABS", TokenKind::Abs),
    ("ACOS", TokenKind::Acos),
    ("ADD", TokenKind::Add),
    ("ADDTIME", TokenKind::Addtime),
    ("ASCII", TokenKind::Ascii),
    ("ASIN", TokenKind::Asin),
    ("ATAN", TokenKind::Atan),
    ("ATAN2", TokenKind::Atan2),
    ("CBRT", TokenKind::Cbrt),
    ("CEIL", TokenKind::Ceil),
    ("CEILING", TokenKind::Ceiling),
    ("CONCAT", TokenKind::Concat),
    ("CONCAT_WS", TokenKind::ConcatWs),
    ("CONV", TokenKind::Conv),
    ("CONVERT_TZ", TokenKind::ConvertTz),
    ("COS", TokenKind::Cos),
    ("COSH", TokenKind::Cosh),
    ("COT", TokenKind::Cot),
    ("CRC32", TokenKind::Crc32),
    ("CURDATE", TokenKind::Curdate),
    ("CURTIME", TokenKind::Curtime),
    ("CURRENT_DATE", TokenKind::CurrentDate),
    ("CURRENT_TIME", TokenKind::CurrentTime),
    ("CURRENT_TIMESTAMP", TokenKind::CurrentTimestamp),
    ("DATE", TokenKind::Date),
    ("DATE_ADD", TokenKind::DateAdd),
    ("DATE_FORMAT", TokenKind::DateFormat),
    ("DATE_SUB", TokenKind::DateSub),
    ("DATEDIFF", TokenKind::Datediff),
    ("DAYNAME", TokenKind::Dayname),
    ("DAYOFMONTH", TokenKind::Dayofmonth),
    ("DAYOFWEEK", TokenKind::Dayofweek),
    ("DAYOFYEAR", TokenKind::Dayofyear),
    ("DEGREES", TokenKind::Degrees),
    ("DIVIDE", TokenKind::Divide),
    ("E", TokenKind::E),
    ("EXP", TokenKind::Exp),
    ("EXPM1", TokenKind::Expm1),
    ("EXTRACT", TokenKind::Extract),
    ("FLOOR", TokenKind::Floor),
    ("FROM_DAYS", TokenKind::FromDays),
    ("FROM_UNIXTIME", TokenKind::FromUnixtime),
    ("GET_FORMAT", TokenKind::GetFormat),
    ("IF", TokenKind::If),
    ("IFNULL", TokenKind::Ifnull),
    ("ISNULL", TokenKind::Isnull),
    ("LAST_DAY", TokenKind::LastDay),
    ("LENGTH", TokenKind::Length),
    ("LN", TokenKind::Ln),
    ("LOCALTIME", TokenKind::Localtime),
    ("LOCALTIMESTAMP", TokenKind::Localtimestamp),
    ("LOCATE", TokenKind::Locate),
    ("LOG", TokenKind::Log),
    ("LOG10", TokenKind::Log10),
    ("LOG2", TokenKind::Log2),
    ("LOWER", TokenKind::Lower),
    ("LTRIM", TokenKind::Ltrim),
    ("MAKEDATE", TokenKind::Makedate),
    ("MAKETIME", TokenKind::Maketime),
    ("MODULUS", TokenKind::Modulus),
    ("MONTHNAME", TokenKind::Monthname),
    ("MULTIPLY", TokenKind::Multiply),
    ("NOW", TokenKind::Now),
    ("NULLIF", TokenKind::Nullif),
    ("PERIOD_ADD", TokenKind::PeriodAdd),
    ("PERIOD_DIFF", TokenKind::PeriodDiff),
    ("PI", TokenKind::Pi),
    ("POSITION", TokenKind::Position),
    ("POW", TokenKind::Pow),
    ("POWER", TokenKind::Power),
    ("RADIANS", TokenKind::Radians),
    ("RAND", TokenKind::Rand),
    ("REPLACE", TokenKind::Replace),
    ("RINT", TokenKind::Rint),
    ("ROUND", TokenKind::Round),
    ("RTRIM", TokenKind::Rtrim),
    ("REVERSE", TokenKind::Reverse),
    ("SEC_TO_TIME", TokenKind::SecToTime),
    ("SIGN", TokenKind::Sign),
    ("SIGNUM", TokenKind::Signum),
    ("SIN", TokenKind::Sin),
    ("SINH", TokenKind::Sinh),
    ("SQRT", TokenKind::Sqrt),
    ("STR_TO_DATE", TokenKind::StrToDate),
    ("SUBDATE", TokenKind::Subdate),
    ("SUBTIME", TokenKind::Subtime),
    ("SUBTRACT", TokenKind::Subtract),
    ("SYSDATE", TokenKind::Sysdate),
    ("TAN", TokenKind::Tan),
    ("TIME", TokenKind::Time),
    ("TIMEDIFF", TokenKind::Timediff),
    ("TIME_FORMAT", TokenKind::TimeFormat),
    ("TIME_TO_SEC", TokenKind::TimeToSec),
    ("TIMESTAMP", TokenKind::Timestamp),
    ("TRUNCATE", TokenKind::Truncate),
    ("TO_DAYS", TokenKind::ToDays),
    ("TO_SECONDS", TokenKind::ToSeconds),
    ("UNIX_TIMESTAMP", TokenKind::UnixTimestamp),
    ("UPPER", TokenKind::Upper),
    ("UTC_DATE", TokenKind::UtcDate),
    ("UTC_TIME", TokenKind::UtcTime),
    ("UTC_TIMESTAMP", TokenKind::UtcTimestamp),
    ("D", TokenKind::D),
    ("T", TokenKind::T),
    ("TS", TokenKind::Ts),
    ("DENSE_RANK", TokenKind::DenseRank),
    ("RANK", TokenKind::Rank),
    ("ROW_NUMBER", TokenKind::RowNumber),
    ("DATE_HISTOGRAM", TokenKind::DateHistogram),
    ("DAY_OF_MONTH", TokenKind::DayOfMonth),
    ("DAY_OF_YEAR", TokenKind::DayOfYear),
    ("DAY_OF_WEEK", TokenKind::DayOfWeek),
    ("EXCLUDE", TokenKind::Exclude),
    ("EXTENDED_STATS", TokenKind::ExtendedStats),
    ("FIELD", TokenKind::Field),
    ("FILTER", TokenKind::Filter),
    ("GEO_BOUNDING_BOX", TokenKind::GeoBoundingBox),
    ("GEO_CELL", TokenKind::GeoCell),
    ("GEO_DISTANCE", TokenKind::GeoDistance),
    ("GEO_DISTANCE_RANGE", TokenKind::GeoDistanceRange),
    ("GEO_INTERSECTS", TokenKind::GeoIntersects),
    ("GEO_POLYGON", TokenKind::GeoPolygon),
    ("HISTOGRAM", TokenKind::Histogram),
    ("HOUR_OF_DAY", TokenKind::HourOfDay),
    ("INCLUDE", TokenKind::Include),
    ("IN_TERMS", TokenKind::InTerms),
    ("MATCHPHRASE", TokenKind::Matchphrase),
    ("MATCH_PHRASE", TokenKind::MatchPhrase),
    ("MATCHPHRASEQUERY", TokenKind::Matchphrasequery),
    ("SIMPLE_QUERY_STRING", TokenKind::SimpleQueryString),
    ("QUERY_STRING", TokenKind::QueryString),
    ("MATCH_PHRASE_PREFIX", TokenKind::MatchPhrasePrefix),
    ("MATCHQUERY", TokenKind::Matchquery),
    ("MATCH_QUERY", TokenKind::MatchQuery),
    ("MINUTE_OF_DAY", TokenKind::MinuteOfDay),
    ("MINUTE_OF_HOUR", TokenKind::MinuteOfHour),
    ("MONTH_OF_YEAR", TokenKind::MonthOfYear),
    ("MULTIMATCH", TokenKind::Multimatch),
    ("MULTI_MATCH", TokenKind::MultiMatch),
    ("MULTIMATCHQUERY", TokenKind::Multimatchquery),
    ("NESTED", TokenKind::Nested),
    ("PERCENTILES", TokenKind::Percentiles),
    ("REGEXP_QUERY", TokenKind::RegexpQuery),
    ("REVERSE_NESTED", TokenKind::ReverseNested),
    ("QUERY", TokenKind::Query),
    ("RANGE", TokenKind::Range),
    ("SCORE", TokenKind::Score),
    ("SCOREQUERY", TokenKind::Scorequery),
    ("SCORE_QUERY", TokenKind::ScoreQuery),
    ("SECOND_OF_MINUTE", TokenKind::SecondOfMinute),
    ("STATS", TokenKind::Stats),
    ("TERM", TokenKind::Term),
    ("TERMS", TokenKind::Terms),
    ("TIMESTAMPADD", TokenKind::Timestampadd),
    ("TIMESTAMPDIFF", TokenKind::Timestampdiff),
    ("TOPHITS", TokenKind::Tophits),
    ("TYPEOF", TokenKind::Typeof),
    ("WEEK_OF_YEAR", TokenKind::WeekOfYear),
    ("WEEKOFYEAR", TokenKind::Weekofyear),
    ("WEEKDAY", TokenKind::Weekday),
    ("WILDCARDQUERY", TokenKind::Wildcardquery),
    ("WILDCARD_QUERY", TokenKind::WildcardQuery),
    ("SUBSTR", TokenKind::Substr),
    ("STRCMP", TokenKind::Strcmp),
    ("ADDDATE", TokenKind::Adddate),
    ("YEARWEEK", TokenKind::Yearweek),
    ("ALLOW_LEADING_WILDCARD", TokenKind::AllowLeadingWildcard),
    ("ANALYZER", TokenKind::Analyzer),
    ("ANALYZE_WILDCARD", TokenKind::AnalyzeWildcard),
    ("AUTO_GENERATE_SYNONYMS_PHRASE_QUERY", TokenKind::AutoGenerateSynonymsPhraseQuery),
    ("BOOST", TokenKind::Boost),
    ("CASE_INSENSITIVE", TokenKind::CaseInsensitive),
    ("CUTOFF_FREQUENCY", TokenKind::CutoffFrequency),
    ("DEFAULT_FIELD", TokenKind::DefaultField),
    ("DEFAULT_OPERATOR", TokenKind::DefaultOperator),
    ("ESCAPE", TokenKind::Escape),
    ("ENABLE_POSITION_INCREMENTS", TokenKind::EnablePositionIncrements),
    ("FIELDS", TokenKind::Fields),
    ("FLAGS", TokenKind::Flags),
    ("FUZZINESS", TokenKind::Fuzziness),
    ("FUZZY_MAX_EXPANSIONS", TokenKind::FuzzyMaxExpansions),
    ("FUZZY_PREFIX_LENGTH", TokenKind::FuzzyPrefixLength),
    ("FUZZY_REWRITE", TokenKind::FuzzyRewrite),
    ("FUZZY_TRANSPOSITIONS", TokenKind::FuzzyTranspositions),
    ("LENIENT", TokenKind::Lenient),
    ("LOW_FREQ_OPERATOR", TokenKind::LowFreqOperator),
    ("MAX_DETERMINIZED_STATES", TokenKind::MaxDeterminizedStates),
    ("MAX_EXPANSIONS", TokenKind::MaxExpansions),
    ("MINIMUM_SHOULD_MATCH", TokenKind::MinimumShouldMatch),
    ("OPERATOR", TokenKind::Operator),
    ("PHRASE_SLOP", TokenKind::PhraseSlop),
    ("PREFIX_LENGTH", TokenKind::PrefixLength),
    ("QUOTE_ANALYZER", TokenKind::QuoteAnalyzer),
    ("QUOTE_FIELD_SUFFIX", TokenKind::QuoteFieldSuffix),
    ("REWRITE", TokenKind::Rewrite),
    ("SLOP", TokenKind::Slop),
    ("TIE_BREAKER", TokenKind::TieBreaker),
    ("TIME_ZONE", TokenKind::TimeZone),
    ("TYPE", TokenKind::Type),
    ("ZERO_TERMS_QUERY", TokenKind::ZeroTermsQuery),
    ("HIGHLIGHT", TokenKind::Highlight),
    ("PRE_TAGS", TokenKind::PreTags),
    ("POST_TAGS", TokenKind::PostTags),
    ("MATCH_BOOL_PREFIX", TokenKind::MatchBoolPrefix),
];

fn keyword_map() -> &'static FxHashMap<&'static str, TokenKind> {
    static MAP: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    MAP.get_or_init(|| KEYWORDS.iter().copied().collect())
}

fn spelling_map() -> &'static FxHashMap<TokenKind, &'static str> {
    static MAP: OnceLock<FxHashMap<TokenKind, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| KEYWORDS.iter().map(|&(s, k)| (k, s)).collect())
}

/// Keywords recognized only in their exact uppercase spelling: the ODBC
/// escape markers and the exponent marker. Matched case-insensitively they
/// would swallow single-letter aliases such as the `t` in `FROM t`.
const CASE_SENSITIVE: &[TokenKind] = &[TokenKind::D, TokenKind::T, TokenKind::Ts, TokenKind::E];

/// Looks up an identifier-shaped lexeme in the keyword table,
/// case-insensitively (except for the uppercase-only markers).
///
/// # Example
///
/// ```
/// use osql_lex::{keyword, TokenKind};
///
/// assert_eq!(keyword::lookup("select"), Some(TokenKind::Select));
/// assert_eq!(keyword::lookup("sElEcT"), Some(TokenKind::Select));
/// assert_eq!(keyword::lookup("selector"), None);
/// assert_eq!(keyword::lookup("t"), None);
/// assert_eq!(keyword::lookup("T"), Some(TokenKind::T));
/// ```
pub fn lookup(ident: &str) -> Option<TokenKind> {
    // ASCII-only fold; a lexeme with non-ASCII bytes can never be a keyword.
    if !ident.is_ascii() {
        return None;
    }
    let upper = ident.to_ascii_uppercase();
    let kind = keyword_map().get(upper.as_str()).copied()?;
    if CASE_SENSITIVE.contains(&kind) && ident != upper {
        return None;
    }
    Some(kind)
}

/// Returns the canonical spelling of a keyword kind.
pub fn spelling(kind: TokenKind) -> Option<&'static str> {
    spelling_map().get(&kind).copied()
}
