use crate::signals::Signals;
use crate::types::Tier;

/// Weights of evidence, clarity and inverted risk in the overall score.
pub const WEIGHTS: (f64, f64, f64) = (0.5, 0.3, 0.2);

pub const STRONG_THRESHOLD: u8 = 75;
pub const MODERATE_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubScores {
    pub evidence: u8,
    pub clarity: u8,
    pub risk: u8,
}

impl SubScores {
    pub fn compute(s: &Signals) -> Self {
        Self { evidence: evidence_strength(s), clarity: clarity(s), risk: risk_level(s) }
    }

    pub fn overall(&self) -> u8 {
        overall_score(self.evidence, self.clarity, self.risk)
    }
}

fn clamp_score(raw: i64) -> u8 {
    raw.clamp(0, 100) as u8
}

/// Bonus for the instrumental panel size.
fn instrumental_sample_bonus(n: i64) -> i64 {
    match n {
        30.. => 20,
        20..=29 => 15,
        10..=19 => 8,
        _ => 0,
    }
}

/// Bonus for a consumer perception study; any study earns something.
fn consumer_study_bonus(s: &Signals) -> i64 {
    if !s.has_consumer_study {
        return 0;
    }
    match s.consumer_sample_size {
        50.. => 10,
        30..=49 => 7,
        20..=29 => 4,
        _ => 2,
    }
}

pub fn evidence_strength(s: &Signals) -> u8 {
    let mut score = if s.has_instrumental {
        let mut base = 50 + instrumental_sample_bonus(s.sample_size);
        if s.duration_defined() {
            base += 10;
        }
        base
    } else if s.kind.needs_measurement() || s.statement.mentions_reduce {
        10
    } else {
        25
    };

    score += consumer_study_bonus(s);
    if s.has_dermatologist {
        score += 5;
    }
    clamp_score(score)
}

pub fn clarity(s: &Signals) -> u8 {
    let mut score = 50;
    if s.duration.contains("hour") || s.statement.bounded {
        score += 20;
    }
    if s.method_matches_claim() {
        score += 15;
    }
    if s.statement.hedged {
        score += 10;
    }
    clamp_score(score)
}

/// Higher means riskier.
pub fn risk_level(s: &Signals) -> u8 {
    let mut score: i64 = 30;
    if s.statement.exaggerated {
        score += 30;
    }
    if s.statement.reduction_language && !s.has_instrumental {
        score += 35;
    }
    if s.has_instrumental && s.sample_size < 20 {
        score += 15;
    }
    // Stacks with the reduction penalty above.
    if !s.has_instrumental && s.kind.needs_measurement() {
        score += 20;
    }
    if s.has_instrumental && s.sample_size >= 30 {
        score -= 25;
    }
    if s.has_dermatologist {
        score -= 10;
    }
    if s.statement.hedged {
        score -= 15;
    }
    clamp_score(score)
}

pub fn overall_score(evidence: u8, clarity: u8, risk: u8) -> u8 {
    let (we, wc, wr) = WEIGHTS;
    let raw = f64::from(evidence) * we + f64::from(clarity) * wc + f64::from(100 - risk) * wr;
    raw.round().clamp(0.0, 100.0) as u8
}

impl Tier {
    pub fn from_score(overall: u8) -> Self {
        if overall >= STRONG_THRESHOLD {
            Tier::Strong
        } else if overall >= MODERATE_THRESHOLD {
            Tier::Moderate
        } else {
            Tier::WeakOrRisky
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClaimRecord, EvidenceRecord};

    fn signals(claim_type: &str, statement: &str, ev: EvidenceRecord) -> Signals {
        Signals::extract(&ClaimRecord {
            claim_type: Some(claim_type.into()),
            claim_statement: Some(statement.into()),
            evidence: ev,
            ..Default::default()
        })
    }

    fn instrumental(n: &str, duration: &str) -> EvidenceRecord {
        EvidenceRecord {
            instrumental: Some(true),
            instrumental_sample_size: Some(n.into()),
            instrumental_duration: Some(duration.into()),
            ..Default::default()
        }
    }

    #[test]
    fn instrumental_sample_tiers() {
        for (n, expected) in [("35", 70), ("30", 70), ("29", 65), ("20", 65), ("10", 58), ("9", 50)] {
            let s = signals("Hydration", "Softens lips", instrumental(n, "two days"));
            assert_eq!(evidence_strength(&s), expected, "sample size {n}");
        }
    }

    #[test]
    fn duration_bonus_on_eight_or_hour() {
        assert_eq!(evidence_strength(&signals("", "", instrumental("0", "48 days"))), 60);
        assert_eq!(evidence_strength(&signals("", "", instrumental("0", "2 hours"))), 60);
        assert_eq!(evidence_strength(&signals("", "", instrumental("0", "2 HOURS"))), 50);
    }

    #[test]
    fn uninstrumented_base_depends_on_claim() {
        let none = EvidenceRecord::default();
        assert_eq!(evidence_strength(&signals("Smoothing", "Softens", none.clone())), 10);
        assert_eq!(evidence_strength(&signals("Hydration", "Helps reduce dryness", none.clone())), 10);
        assert_eq!(evidence_strength(&signals("Hydration", "Softens", none)), 25);
    }

    #[test]
    fn consumer_and_dermatologist_bonuses() {
        let with = |n: &str| EvidenceRecord {
            consumer_study: Some(true),
            consumer_sample_size: Some(n.into()),
            dermatologist_tested: Some(true),
            ..Default::default()
        };
        for (n, expected) in [("50", 40), ("30", 37), ("20", 34), ("5", 32), ("", 32)] {
            assert_eq!(evidence_strength(&signals("Hydration", "Softens", with(n))), expected);
        }
    }

    #[test]
    fn clarity_bonuses() {
        let mut ev = instrumental("0", "8 hours");
        ev.instrumental_method = Some("Corneometer hydration".into());
        assert_eq!(clarity(&signals("Hydration", "Helps lips", ev.clone())), 95);
        assert_eq!(clarity(&signals("Plumping", "Lips", ev)), 70);
        assert_eq!(clarity(&signals("", "up to a day", EvidenceRecord::default())), 70);
        assert_eq!(clarity(&signals("", "", EvidenceRecord::default())), 50);
    }

    #[test]
    fn risk_penalties_stack_and_clamp() {
        let s = signals("Plumping", "Dramatically reduces fine lines instantly", EvidenceRecord::default());
        assert_eq!(risk_level(&s), 100);

        let mut ev = instrumental("40", "8 hours");
        ev.dermatologist_tested = Some(true);
        assert_eq!(risk_level(&signals("Hydration", "Helps hydrate", ev)), 0);

        assert_eq!(risk_level(&signals("Hydration", "Hydrates", instrumental("12", ""))), 45);
        assert_eq!(risk_level(&signals("Hydration", "Hydrates", instrumental("25", ""))), 30);
    }

    #[test]
    fn reduction_language_without_instrument_adds_35() {
        let s = signals("Hydration", "Adds volume", EvidenceRecord::default());
        assert_eq!(risk_level(&s), 65);
        assert_eq!(evidence_strength(&s), 25);
    }

    #[test]
    fn dermatologist_testing_alone_lowers_risk_by_10() {
        let derm = EvidenceRecord { dermatologist_tested: Some(true), ..Default::default() };
        assert_eq!(risk_level(&signals("Hydration", "Hydrates", derm)), 20);

        let mut ev = instrumental("25", "");
        ev.dermatologist_tested = Some(true);
        assert_eq!(risk_level(&signals("Hydration", "Hydrates", ev)), 20);
    }

    #[test]
    fn overall_weighting_and_tiers() {
        assert_eq!(overall_score(95, 95, 0), 96);
        assert_eq!(overall_score(10, 50, 100), 20);
        assert_eq!(overall_score(0, 0, 100), 0);
        assert_eq!(overall_score(100, 100, 0), 100);

        assert_eq!(Tier::from_score(75), Tier::Strong);
        assert_eq!(Tier::from_score(74), Tier::Moderate);
        assert_eq!(Tier::from_score(50), Tier::Moderate);
        assert_eq!(Tier::from_score(49), Tier::WeakOrRisky);
    }
}
