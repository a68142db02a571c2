use crate::narrative::Narrative;
use crate::scoring::SubScores;
use crate::signals::Signals;
use crate::types::{ClaimRecord, EvaluationResult, Tier};

/// Scores a claim against its evidence. Pure and total: partial records
/// are read with defaults instead of being rejected.
pub fn evaluate_claim(rec: &ClaimRecord) -> EvaluationResult {
    let signals = Signals::extract(rec);
    let scores = SubScores::compute(&signals);
    let overall = scores.overall();
    let tier = Tier::from_score(overall);

    tracing::debug!(
        evidence = scores.evidence,
        clarity = scores.clarity,
        risk = scores.risk,
        overall,
        tier = tier.label(),
        "Evaluated claim"
    );

    let guidance = Narrative::classify(overall).render(&signals);

    EvaluationResult {
        overall_score: overall,
        overall_level: tier,
        overall_color: tier.color(),
        evidence_strength: scores.evidence,
        clarity: scores.clarity,
        risk_level: scores.risk,
        reasoning: guidance.reasoning,
        why_score: guidance.why_score,
        what_to_add: guidance.what_to_add,
        safe_wording: guidance.safe_wording,
        confident_wording: guidance.confident_wording,
        risky_wording: guidance.risky_wording,
    }
}
