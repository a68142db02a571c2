use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::ClaimCheckError;

/// A claim plus the evidence behind it, as filled in by the claim builder.
/// Every field may be missing while a form is still being filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClaimRecord {
    pub category: Option<String>,
    pub product_name: Option<String>,
    pub target_user: Option<String>,
    pub region: Option<String>,
    pub claim_type: Option<String>,
    pub claim_statement: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    pub no_fragrance: Option<bool>,
    pub fragrance_present: Option<bool>,
    pub essential_oils: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub evidence: EvidenceRecord,
    #[serde(deserialize_with = "null_as_default")]
    pub context: Vec<String>, // usage channels, e.g. "Packaging"
    /// Builder fields not modelled here, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClaimRecord {
    /// One record per line; blank lines are skipped. Line numbers in errors
    /// start at 1.
    pub fn parse_jsonl(input: &str) -> Result<Vec<ClaimRecord>, ClaimCheckError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .map(|(i, l)| {
                serde_json::from_str(l).map_err(|source| ClaimCheckError::InvalidRecord { line: i + 1, source })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvidenceRecord {
    pub instrumental: Option<bool>,
    pub instrumental_method: Option<String>,
    pub instrumental_duration: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub instrumental_sample_size: Option<String>,
    pub instrumental_result: Option<String>,
    pub consumer_study: Option<bool>,
    #[serde(deserialize_with = "string_or_number")]
    pub consumer_sample_size: Option<String>,
    pub consumer_question: Option<String>,
    pub consumer_duration: Option<String>,
    pub dermatologist_tested: Option<bool>,
    pub dermatologist_covers: Option<String>,
    pub before_after_photos: Option<bool>,
    pub photo_disclosure: Option<bool>,
}

/// An explicit `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(de).map(Option::unwrap_or_default)
}

/// Form inputs send sample sizes as text, API callers often send numbers.
fn string_or_number<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(de)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

/// Qualitative bucket derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Strong,
    Moderate,
    #[serde(rename = "Weak / Risky")]
    WeakOrRisky,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Strong => "Strong",
            Tier::Moderate => "Moderate",
            Tier::WeakOrRisky => "Weak / Risky",
        }
    }

    pub fn color(self) -> TierColor {
        match self {
            Tier::Strong => TierColor::Green,
            Tier::Moderate => TierColor::Amber,
            Tier::WeakOrRisky => TierColor::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierColor {
    Green,
    Amber,
    Red,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub overall_score: u8,
    pub overall_level: Tier,
    pub overall_color: TierColor,
    pub evidence_strength: u8,
    pub clarity: u8,
    pub risk_level: u8,
    pub reasoning: String,
    pub why_score: Vec<String>,
    pub what_to_add: Vec<String>,
    pub safe_wording: String,
    pub confident_wording: String,
    pub risky_wording: String,
}
