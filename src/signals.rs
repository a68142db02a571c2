//! Normalised view of a [`ClaimRecord`] that the scoring rules read from.
//!
//! Missing or unparseable fields collapse to `false`, `0` or `""` here, so
//! nothing downstream has to deal with partial records.

use crate::types::ClaimRecord;

/// Words that make a claim sound absolute.
pub const EXAGGERATION_WORDS: &[&str] = &[
    "dramatically",
    "instantly",
    "guaranteed",
    "eliminates",
    "removes",
    "erases",
];

/// Language implying a visible physical change (volume, wrinkles).
pub const REDUCTION_WORDS: &[&str] = &["reduce", "plump", "fine lines", "volume"];

/// Qualifiers that scope a claim down.
pub const HEDGE_WORDS: &[&str] = &["may", "helps"];

/// Claim category picked in the builder, matched on the lower-cased label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimKind {
    Hydration,
    Plumping,
    Smoothing,
    SensitiveSkin,
    DermatologistTested,
    Other,
}

impl ClaimKind {
    pub fn from_label(lowered: &str) -> Self {
        match lowered {
            "hydration" => ClaimKind::Hydration,
            "plumping" => ClaimKind::Plumping,
            "smoothing" => ClaimKind::Smoothing,
            "sensitive skin" => ClaimKind::SensitiveSkin,
            "dermatologist tested" => ClaimKind::DermatologistTested,
            _ => ClaimKind::Other,
        }
    }

    /// Plumping and smoothing promise visible change and need a device reading.
    pub fn needs_measurement(self) -> bool {
        matches!(self, ClaimKind::Plumping | ClaimKind::Smoothing)
    }

    /// The instrument whose readings directly back this kind of claim.
    pub fn matching_instrument(self) -> Option<Instrument> {
        match self {
            ClaimKind::Hydration => Some(Instrument::Corneometer),
            ClaimKind::Plumping => Some(Instrument::ThreeDImaging),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instrument {
    Corneometer,
    ThreeDImaging,
}

impl Instrument {
    /// Marker looked for (case-sensitively) in the method name.
    pub fn marker(self) -> &'static str {
        match self {
            Instrument::Corneometer => "Corneometer",
            Instrument::ThreeDImaging => "3D Imaging",
        }
    }
}

/// Keyword hits in the lower-cased claim statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatementSignals {
    pub exaggerated: bool,
    pub reduction_language: bool,
    pub hedged: bool,
    pub bounded: bool, // "up to"
    pub mentions_reduce: bool,
    pub mentions_fine_lines: bool,
}

impl StatementSignals {
    pub fn scan(lowered: &str) -> Self {
        let any = |words: &[&str]| words.iter().any(|w| lowered.contains(w));
        Self {
            exaggerated: any(EXAGGERATION_WORDS),
            reduction_language: any(REDUCTION_WORDS),
            hedged: any(HEDGE_WORDS),
            bounded: lowered.contains("up to"),
            mentions_reduce: lowered.contains("reduce"),
            mentions_fine_lines: lowered.contains("fine lines"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signals {
    pub has_instrumental: bool,
    pub instrumental_method: String,
    pub sample_size: i64,
    pub duration: String,
    pub has_consumer_study: bool,
    pub consumer_sample_size: i64,
    pub has_dermatologist: bool,
    pub claim_type: String, // lower-cased
    pub kind: ClaimKind,
    pub statement: StatementSignals,
    /// Statement exactly as supplied, for echoing back to the user.
    pub raw_statement: Option<String>,
}

impl Signals {
    pub fn extract(rec: &ClaimRecord) -> Self {
        let ev = &rec.evidence;
        let claim_type = rec.claim_type.as_deref().unwrap_or_default().to_lowercase();
        let lowered = rec.claim_statement.as_deref().unwrap_or_default().to_lowercase();
        Self {
            has_instrumental: ev.instrumental.unwrap_or(false),
            instrumental_method: ev.instrumental_method.clone().unwrap_or_default(),
            sample_size: parse_leading_int(ev.instrumental_sample_size.as_deref()),
            duration: ev.instrumental_duration.clone().unwrap_or_default(),
            has_consumer_study: ev.consumer_study.unwrap_or(false),
            consumer_sample_size: parse_leading_int(ev.consumer_sample_size.as_deref()),
            has_dermatologist: ev.dermatologist_tested.unwrap_or(false),
            kind: ClaimKind::from_label(&claim_type),
            claim_type,
            statement: StatementSignals::scan(&lowered),
            raw_statement: rec.claim_statement.clone(),
        }
    }

    /// Instrument reading matches what the claim type needs to prove.
    pub fn method_matches_claim(&self) -> bool {
        self.kind
            .matching_instrument()
            .is_some_and(|i| self.instrumental_method.contains(i.marker()))
    }

    /// Duration text names a time window.
    pub fn duration_defined(&self) -> bool {
        self.duration.contains('8') || self.duration.contains("hour")
    }
}

/// Reads the integer at the start of `text` the way form inputs are read:
/// leading whitespace and an optional sign, then digits up to the first
/// non-digit. Absent or digit-less input yields 0.
///
/// Decimal only: a `0x` prefix stops at the `x`, so `"0x1F"` reads as 0.
pub fn parse_leading_int(text: Option<&str>) -> i64 {
    let s = text.unwrap_or_default().trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));
    if negative {
        -value
    } else {
        value
    }
}
