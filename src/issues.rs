//! Issue types produced by every scanner.
//!
//! Each issue is self-contained with all information needed by:
//! - the reporter, to print it cargo-style and write it into the JSON/Markdown reports
//! - actions, to fix it in place (delete keys, insert alt text)

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::core::{
    LocaleTypeMismatch, MessageContext, SourceContext, ValueType,
    monitoring::{Comparison, MetricAction},
};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue. Only errors fail a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Rule identifier for each kind of finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    ConditionalString,
    ObjectLiteral,
    TernaryOperator,
    ChineseString,
    JsxText,
    MedicalAdvice,
    Dosage,
    ProhibitedClaim,
    MissingDisclaimer,
    HardcodedUrl,
    MissingKey,
    UnusedKey,
    DynamicKey,
    MissingTranslation,
    OrphanKey,
    TypeMismatch,
    EmptyValue,
    Unfinished,
    MixedLanguage,
    Untranslated,
    KeyNaming,
    KeyTooLong,
    MissingAlt,
    EmptyAlt,
    GenericAlt,
    SeoAlt,
    SeoRequired,
    SeoMissingH1,
    SeoMultipleH1,
    SeoMissingArticle,
    SeoRecommendation,
    MetricBreach,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::ConditionalString => "conditional-string",
            Rule::ObjectLiteral => "object-literal",
            Rule::TernaryOperator => "ternary-operator",
            Rule::ChineseString => "chinese-string",
            Rule::JsxText => "jsx-text",
            Rule::MedicalAdvice => "medical-advice",
            Rule::Dosage => "dosage",
            Rule::ProhibitedClaim => "prohibited-claim",
            Rule::MissingDisclaimer => "missing-disclaimer",
            Rule::HardcodedUrl => "hardcoded-url",
            Rule::MissingKey => "missing-key",
            Rule::UnusedKey => "unused-key",
            Rule::DynamicKey => "dynamic-key",
            Rule::MissingTranslation => "missing-translation",
            Rule::OrphanKey => "orphan-key",
            Rule::TypeMismatch => "type-mismatch",
            Rule::EmptyValue => "empty-value",
            Rule::Unfinished => "unfinished",
            Rule::MixedLanguage => "mixed-language",
            Rule::Untranslated => "untranslated",
            Rule::KeyNaming => "key-naming",
            Rule::KeyTooLong => "key-too-long",
            Rule::MissingAlt => "missing-alt",
            Rule::EmptyAlt => "empty-alt",
            Rule::GenericAlt => "generic-alt",
            Rule::SeoAlt => "seo-alt",
            Rule::SeoRequired => "seo-required",
            Rule::SeoMissingH1 => "seo-missing-h1",
            Rule::SeoMultipleH1 => "seo-multiple-h1",
            Rule::SeoMissingArticle => "seo-missing-article",
            Rule::SeoRecommendation => "seo-recommendation",
            Rule::MetricBreach => "metric-breach",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================
// Issue Types - Source Code (SourceContext)
// ============================================================

/// Which heuristic matched a hardcoded string.
///
/// Variants are declared from most to least specific; when several match
/// the same text only the first is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HardcodeKind {
    /// `locale === 'zh' ? '经期' : 'Period'`
    ConditionalString,
    /// `{ zh: '经期', en: 'Period' }`
    ObjectLiteral,
    /// `locale === 'zh' ? zhTitle : enTitle`
    TernaryOperator,
    /// `<h1>经期指南</h1>`
    JsxText,
    /// `const title = '经期指南'`
    ChineseString,
}

impl HardcodeKind {
    pub fn severity(&self) -> Severity {
        match self {
            HardcodeKind::ConditionalString | HardcodeKind::ObjectLiteral => Severity::Error,
            HardcodeKind::TernaryOperator | HardcodeKind::JsxText => Severity::Warning,
            HardcodeKind::ChineseString => Severity::Info,
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            HardcodeKind::ConditionalString => Rule::ConditionalString,
            HardcodeKind::ObjectLiteral => Rule::ObjectLiteral,
            HardcodeKind::TernaryOperator => Rule::TernaryOperator,
            HardcodeKind::JsxText => Rule::JsxText,
            HardcodeKind::ChineseString => Rule::ChineseString,
        }
    }
}

/// Locale-specific text written directly into source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardcodedTextIssue {
    pub context: SourceContext,
    pub kind: HardcodeKind,
    /// The matched text.
    pub text: String,
    /// Translation key proposed for the text, e.g. `components.painTracker.title`.
    pub suggested_key: String,
}

/// Medical-content compliance findings inside string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplianceKind {
    MedicalAdvice,
    Dosage,
    ProhibitedClaim,
}

impl ComplianceKind {
    pub fn severity(&self) -> Severity {
        match self {
            ComplianceKind::Dosage => Severity::Error,
            ComplianceKind::MedicalAdvice | ComplianceKind::ProhibitedClaim => Severity::Warning,
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            ComplianceKind::MedicalAdvice => Rule::MedicalAdvice,
            ComplianceKind::Dosage => Rule::Dosage,
            ComplianceKind::ProhibitedClaim => Rule::ProhibitedClaim,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceIssue {
    pub context: SourceContext,
    pub kind: ComplianceKind,
    /// The phrase that triggered the finding.
    pub matched: String,
}

/// Absolute URL pointing at the site's own host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardcodedUrlIssue {
    pub context: SourceContext,
    pub url: String,
    /// Path part of the URL, used for the replacement hint.
    pub path: String,
    /// `www.` variants are warnings; bare hosts are errors.
    pub www: bool,
}

impl HardcodedUrlIssue {
    pub fn rule() -> Rule {
        Rule::HardcodedUrl
    }
}

/// Translation key used in code but absent from one or more locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    pub context: SourceContext,
    pub key: String,
    /// Locales lacking the key, sorted.
    pub missing_in: Vec<String>,
}

impl MissingKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// Translation call whose key is not a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicKeyIssue {
    pub context: SourceContext,
    /// The argument expression as written.
    pub expression: String,
}

impl DynamicKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DynamicKey
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AltIssueKind {
    Missing,
    Empty,
    Generic,
    /// Too short, too long, or lacking any configured keyword.
    SeoUnfriendly { reason: String },
}

impl AltIssueKind {
    pub fn severity(&self) -> Severity {
        match self {
            AltIssueKind::Missing => Severity::Error,
            AltIssueKind::Empty | AltIssueKind::Generic => Severity::Warning,
            AltIssueKind::SeoUnfriendly { .. } => Severity::Info,
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            AltIssueKind::Missing => Rule::MissingAlt,
            AltIssueKind::Empty => Rule::EmptyAlt,
            AltIssueKind::Generic => Rule::GenericAlt,
            AltIssueKind::SeoUnfriendly { .. } => Rule::SeoAlt,
        }
    }
}

/// Image tag with missing or weak alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAltIssue {
    /// Points at the start of the tag.
    pub context: SourceContext,
    pub kind: AltIssueKind,
    pub tag: String,
    pub src: String,
    pub alt: Option<String>,
}

// ============================================================
// Issue Types - Locale Files (MessageContext)
// ============================================================

/// Primary-locale key that nothing in the code uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedKeyIssue {
    pub context: MessageContext,
}

impl UnusedKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedKey
    }
}

/// Primary-locale key absent from other locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    pub context: MessageContext,
    pub missing_in: Vec<String>,
}

impl MissingTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingTranslation
    }
}

/// Key present in a non-primary locale but not in the primary one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanKeyIssue {
    pub context: MessageContext,
    pub locale: String,
}

impl OrphanKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::OrphanKey
    }
}

/// Value shape differs between the primary locale and others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatchIssue {
    /// Context in the primary locale.
    pub context: MessageContext,
    pub expected_type: ValueType,
    pub mismatched_in: Vec<LocaleTypeMismatch>,
}

impl TypeMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::TypeMismatch
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueIssueKind {
    Empty,
    /// Contains TODO, TBD, FIXME or `[translate]`.
    Unfinished,
    /// English words inside a CJK locale value.
    MixedLanguage,
    /// Identical to the primary-locale value.
    Untranslated,
}

impl ValueIssueKind {
    pub fn severity(&self) -> Severity {
        match self {
            ValueIssueKind::MixedLanguage => Severity::Info,
            _ => Severity::Warning,
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            ValueIssueKind::Empty => Rule::EmptyValue,
            ValueIssueKind::Unfinished => Rule::Unfinished,
            ValueIssueKind::MixedLanguage => Rule::MixedLanguage,
            ValueIssueKind::Untranslated => Rule::Untranslated,
        }
    }
}

/// Problem with a single translated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueIssue {
    pub context: MessageContext,
    pub locale: String,
    pub kind: ValueIssueKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyNamingKind {
    InvalidSegment { segment: String },
    TooLong { length: usize },
}

/// Key that does not follow the naming convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNamingIssue {
    pub context: MessageContext,
    pub kind: KeyNamingKind,
}

// ============================================================
// Issue Types - File Level
// ============================================================

/// No medical disclaimer anywhere in the primary locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDisclaimerIssue {
    pub file_path: String,
    pub locale: String,
}

impl MissingDisclaimerIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingDisclaimer
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeoIssueKind {
    MissingField { field: String },
    MissingH1,
    MultipleH1 { count: usize },
    /// The same file name is absent from another locale's directory.
    MissingArticle { locale: String },
    Recommendation { message: String },
}

impl SeoIssueKind {
    pub fn severity(&self) -> Severity {
        match self {
            SeoIssueKind::MissingField { .. } | SeoIssueKind::MissingH1 => Severity::Error,
            SeoIssueKind::MultipleH1 { .. } | SeoIssueKind::MissingArticle { .. } => {
                Severity::Warning
            }
            SeoIssueKind::Recommendation { .. } => Severity::Info,
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            SeoIssueKind::MissingField { .. } => Rule::SeoRequired,
            SeoIssueKind::MissingH1 => Rule::SeoMissingH1,
            SeoIssueKind::MultipleH1 { .. } => Rule::SeoMultipleH1,
            SeoIssueKind::MissingArticle { .. } => Rule::SeoMissingArticle,
            SeoIssueKind::Recommendation { .. } => Rule::SeoRecommendation,
        }
    }
}

/// SEO finding for one Markdown article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoIssue {
    pub file_path: String,
    pub kind: SeoIssueKind,
}

/// Observed metric outside its configured threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricBreachIssue {
    /// The metrics file that was checked.
    pub file_path: String,
    /// Dotted metric name, e.g. `performance.lcp`.
    pub metric: String,
    pub value: f64,
    pub baseline: Option<f64>,
    pub threshold: f64,
    pub comparison: Comparison,
    pub action: MetricAction,
    pub description: String,
}

impl MetricBreachIssue {
    pub fn rule() -> Rule {
        Rule::MetricBreach
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone)]
pub enum Issue {
    HardcodedText(HardcodedTextIssue),
    Compliance(ComplianceIssue),
    MissingDisclaimer(MissingDisclaimerIssue),
    HardcodedUrl(HardcodedUrlIssue),
    MissingKey(MissingKeyIssue),
    DynamicKey(DynamicKeyIssue),
    UnusedKey(UnusedKeyIssue),
    MissingTranslation(MissingTranslationIssue),
    OrphanKey(OrphanKeyIssue),
    TypeMismatch(TypeMismatchIssue),
    Value(ValueIssue),
    KeyNaming(KeyNamingIssue),
    ImageAlt(ImageAltIssue),
    Seo(SeoIssue),
    MetricBreach(MetricBreachIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

/// Order issues by file, line and column, then by rule.
pub fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    let (a_loc, b_loc) = (a.location(), b.location());
    a_loc
        .position()
        .cmp(&b_loc.position())
        .then_with(|| a.rule().cmp(&b.rule()))
}

// ============================================================
// Report Trait
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// Locale file location (no source line, but has key/value).
    Message(&'a MessageContext),
    /// File-level only.
    File { path: &'a str },
}

impl<'a> ReportLocation<'a> {
    /// (path, line, col); file-level locations report 0 for both.
    pub fn position(&self) -> (&'a str, usize, usize) {
        match self {
            ReportLocation::Source(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
            ReportLocation::Message(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
            ReportLocation::File { path } => (*path, 0, 0),
        }
    }
}

/// Common view over every issue type, used by the console reporter and
/// the JSON/Markdown report writers.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name, text, URL, ...).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for HardcodedTextIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.text.clone()
    }

    fn report_severity(&self) -> Severity {
        self.kind.severity()
    }

    fn report_rule(&self) -> Rule {
        self.kind.rule()
    }

    fn hint(&self) -> Option<String> {
        Some(format!("move the text to messages and use t('{}')", self.suggested_key))
    }
}

impl Report for ComplianceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.matched.clone()
    }

    fn report_severity(&self) -> Severity {
        self.kind.severity()
    }

    fn report_rule(&self) -> Rule {
        self.kind.rule()
    }

    fn hint(&self) -> Option<String> {
        let hint = match self.kind {
            ComplianceKind::MedicalAdvice => "phrase as general information, not personal advice",
            ComplianceKind::Dosage => "refer readers to a doctor or pharmacist instead of stating doses",
            ComplianceKind::ProhibitedClaim => "avoid absolute health claims",
        };
        Some(hint.to_string())
    }
}

impl Report for MissingDisclaimerIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        format!("no medical disclaimer in '{}' messages", self.locale)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some("add a `disclaimer` message stating the content is not medical advice".to_string())
    }
}

impl Report for HardcodedUrlIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.url.clone()
    }

    fn report_severity(&self) -> Severity {
        if self.www {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some(format!(
            "use `${{process.env.NEXT_PUBLIC_BASE_URL}}{}`",
            self.path
        ))
    }
}

impl Report for MissingKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("missing in: {}", self.missing_in.join(", ")))
    }
}

impl Report for DynamicKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.expression.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some("use a template key or add the possible keys to 'whitelist'".to_string())
    }
}

impl Report for ImageAltIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        match (&self.kind, &self.alt) {
            (AltIssueKind::Missing, _) => format!("<{}> without alt: {}", self.tag, self.src),
            (AltIssueKind::Empty, _) => format!("<{}> with empty alt: {}", self.tag, self.src),
            (_, Some(alt)) => alt.clone(),
            (_, None) => self.src.clone(),
        }
    }

    fn report_severity(&self) -> Severity {
        self.kind.severity()
    }

    fn report_rule(&self) -> Rule {
        self.kind.rule()
    }

    fn hint(&self) -> Option<String> {
        match &self.kind {
            AltIssueKind::Missing | AltIssueKind::Empty => {
                Some("run `i18nkit fix-alt` to generate alt text".to_string())
            }
            AltIssueKind::Generic => Some("describe what the image shows".to_string()),
            AltIssueKind::SeoUnfriendly { .. } => None,
        }
    }

    fn details(&self) -> Option<String> {
        match &self.kind {
            AltIssueKind::SeoUnfriendly { reason } => Some(reason.clone()),
            _ => None,
        }
    }
}

impl Report for UnusedKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("(\"{}\")", self.context.value))
    }
}

impl Report for MissingTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") missing in: {}",
            self.context.value,
            self.missing_in.join(", ")
        ))
    }
}

impl Report for OrphanKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("in {} (\"{}\")", self.locale, self.context.value))
    }
}

impl Report for TypeMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mismatches: Vec<String> = self
            .mismatched_in
            .iter()
            .map(|m| format!("{} ({})", m.locale, m.actual_type))
            .collect();
        Some(format!(
            "expected {}, found in: {}",
            self.expected_type,
            mismatches.join(", ")
        ))
    }
}

impl Report for ValueIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        self.kind.severity()
    }

    fn report_rule(&self) -> Rule {
        self.kind.rule()
    }

    fn details(&self) -> Option<String> {
        let detail = match self.kind {
            ValueIssueKind::Empty => format!("empty value in {}", self.locale),
            ValueIssueKind::Unfinished => {
                format!("unfinished in {} (\"{}\")", self.locale, self.context.value)
            }
            ValueIssueKind::MixedLanguage => {
                format!("English text in {} (\"{}\")", self.locale, self.context.value)
            }
            ValueIssueKind::Untranslated => format!(
                "identical to primary locale in {} (\"{}\")",
                self.locale, self.context.value
            ),
        };
        Some(detail)
    }
}

impl Report for KeyNamingIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        match self.kind {
            KeyNamingKind::InvalidSegment { .. } => Severity::Info,
            KeyNamingKind::TooLong { .. } => Severity::Warning,
        }
    }

    fn report_rule(&self) -> Rule {
        match self.kind {
            KeyNamingKind::InvalidSegment { .. } => Rule::KeyNaming,
            KeyNamingKind::TooLong { .. } => Rule::KeyTooLong,
        }
    }

    fn details(&self) -> Option<String> {
        match &self.kind {
            KeyNamingKind::InvalidSegment { segment } => Some(format!(
                "segment '{}' should be camelCase letters and digits",
                segment
            )),
            KeyNamingKind::TooLong { length } => {
                Some(format!("{} characters (limit 100)", length))
            }
        }
    }
}

impl Report for SeoIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        match &self.kind {
            SeoIssueKind::MissingField { field } => format!("missing required field '{}'", field),
            SeoIssueKind::MissingH1 => "missing H1 heading".to_string(),
            SeoIssueKind::MultipleH1 { count } => format!("{} H1 headings, keep exactly one", count),
            SeoIssueKind::MissingArticle { locale } => {
                format!("no '{}' version of this article", locale)
            }
            SeoIssueKind::Recommendation { message } => message.clone(),
        }
    }

    fn report_severity(&self) -> Severity {
        self.kind.severity()
    }

    fn report_rule(&self) -> Rule {
        self.kind.rule()
    }
}

impl Report for MetricBreachIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        format!("{} = {}", self.metric, self.value)
    }

    fn report_severity(&self) -> Severity {
        match self.action {
            MetricAction::Rollback => Severity::Error,
            MetricAction::Alert => Severity::Warning,
        }
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some(format!("action: {}", self.action))
    }

    fn details(&self) -> Option<String> {
        let limit = match (self.comparison, self.baseline) {
            (Comparison::DropBy, Some(baseline)) => format!(
                "dropped more than {:.0}% below baseline {}",
                self.threshold.abs() * 100.0,
                baseline
            ),
            (Comparison::Above, _) => format!("above threshold {}", self.threshold),
            (Comparison::Below, _) => format!("below threshold {}", self.threshold),
            (Comparison::DropBy, None) => format!("threshold {}", self.threshold),
        };
        if self.description.is_empty() {
            Some(limit)
        } else {
            Some(format!("{} ({})", limit, self.description))
        }
    }
}
