//! Explanations and wording suggestions generated from the scores.

use crate::scoring::STRONG_THRESHOLD;
use crate::signals::{ClaimKind, Signals};

const FALLBACK_RISKY_WORDING: &str = "Performance claims without measurement";

/// Everything shown to the user besides the numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guidance {
    pub reasoning: String,
    pub why_score: Vec<String>,
    pub what_to_add: Vec<String>,
    pub safe_wording: String,
    pub confident_wording: String,
    pub risky_wording: String,
}

/// Which story the evaluation tells. Moderate claims get the same
/// cautionary treatment as weak ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narrative {
    Strong,
    Weak,
}

impl Narrative {
    pub fn classify(overall: u8) -> Self {
        if overall >= STRONG_THRESHOLD {
            Narrative::Strong
        } else {
            Narrative::Weak
        }
    }

    pub fn render(self, s: &Signals) -> Guidance {
        match self {
            Narrative::Strong => strong(s),
            Narrative::Weak => weak(s),
        }
    }
}

fn strong(s: &Signals) -> Guidance {
    let method = &s.instrumental_method;
    let claim = &s.claim_type;
    let duration = &s.duration;
    let n = s.sample_size;

    let derm_clause = if s.has_dermatologist {
        "Dermatologist testing adds credibility for safety."
    } else {
        ""
    };
    let consumer_clause = if s.has_consumer_study {
        "Consumer perception data strengthens user experience validation."
    } else {
        ""
    };
    let reasoning = format!(
        "This claim is supported by instrumental {} testing on {n} participants over {duration}. \
         The study includes a defined sample size and measurable outcome. {derm_clause} {consumer_clause} \
         The wording matches the available evidence.",
        method.to_lowercase(),
    );

    let why_score = vec![
        format!("Instrumental testing ({method}) with {n} participants confirms the {claim} claim"),
        format!("Duration clearly defined ({duration}) and supported by objective measurement data"),
        format!("Ingredients align with {claim} function"),
        if s.has_dermatologist {
            "Dermatologist testing confirms safety—correctly positioned as safety evidence, not performance proof"
                .to_string()
        } else {
            "Well-structured evidence hierarchy".to_string()
        },
    ];

    let feeling = if s.kind == ClaimKind::Hydration { "hydrated" } else { "fuller" };

    Guidance {
        reasoning,
        why_score,
        what_to_add: vec![
            "Optional: Add specific test conditions or methodology in fine print for full transparency"
                .to_string(),
        ],
        safe_wording: format!("Helps keep lips feeling {feeling} for up to {duration}."),
        confident_wording: format!("Clinically measured {claim} for up to {duration}."),
        risky_wording: format!("Guarantees {duration} {claim} for all skin types."),
    }
}

fn weak(s: &Signals) -> Guidance {
    let exaggerated = s.statement.exaggerated;
    let consumer_n = s.consumer_sample_size;
    let plumping = s.kind == ClaimKind::Plumping;

    let mut issues = Vec::new();
    if !s.has_instrumental {
        issues.push("no instrumental measurement".to_string());
    }
    if exaggerated {
        issues.push(r#"strong wording such as "dramatically" or "reduces fine lines""#.to_string());
    }
    if consumer_n < 20 {
        issues.push(format!("small consumer study sample size ({consumer_n} participants)"));
    }

    let reasoning = format!(
        "This claim uses {}. {} The claim wording {} the available evidence.",
        issues.join(", but there is "),
        if s.has_instrumental {
            "The evidence base is limited."
        } else {
            "There is no objective proof of volume change or performance metrics."
        },
        if exaggerated { "overstates" } else { "exceeds" },
    );

    let why_score = vec![
        if exaggerated {
            r#"This claim uses strong wording such as "dramatically" and "reduces fine lines", but there is no instrumental volume measurement."#
                .to_string()
        } else {
            "Performance claim with no objective measurement".to_string()
        },
        if consumer_n < 20 {
            format!(
                "The consumer study sample size is small (only {consumer_n} participants) and only reflects perception, not measurable change."
            )
        } else {
            "Consumer perception alone is insufficient for performance claims".to_string()
        },
        "There is no objective proof of volume change or wrinkle reduction.".to_string(),
        "The claim wording overstates the available evidence.".to_string(),
    ];

    let mut what_to_add = Vec::new();
    if !s.has_instrumental {
        let (measure, example) = if plumping {
            ("volume", "3D imaging")
        } else {
            (s.claim_type.as_str(), "corneometer")
        };
        what_to_add.push(format!("Add instrumental {measure} measurement (e.g., {example})"));
    }
    if consumer_n < 30 {
        what_to_add.push("Increase consumer study sample size to at least 30 participants".to_string());
    }
    if exaggerated {
        what_to_add.push(
            r#"Remove absolute language like "dramatically" and "reduces fine lines" without clinical proof"#
                .to_string(),
        );
    }
    what_to_add.push(if s.statement.mentions_fine_lines {
        "Consider testing wrinkle depth if claiming anti-aging benefits".to_string()
    } else {
        "Match wording strength to evidence strength".to_string()
    });

    let (safe_wording, confident_wording) = if plumping {
        (
            "Provides a tingling sensation that may create a temporary fuller appearance.",
            "Creates a plumping sensation with a refreshing tingle.",
        )
    } else {
        ("Helps moisturize lips.", "Leaves lips feeling hydrated.")
    };

    Guidance {
        reasoning,
        why_score,
        what_to_add,
        safe_wording: safe_wording.to_string(),
        confident_wording: confident_wording.to_string(),
        risky_wording: s
            .raw_statement
            .clone()
            .filter(|st| !st.is_empty())
            .unwrap_or_else(|| FALLBACK_RISKY_WORDING.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClaimRecord, EvidenceRecord};

    #[test]
    fn classification_threshold() {
        assert_eq!(Narrative::classify(75), Narrative::Strong);
        assert_eq!(Narrative::classify(74), Narrative::Weak);
    }

    #[test]
    fn strong_reasoning_keeps_gaps_for_missing_clauses() {
        let s = Signals::extract(&ClaimRecord {
            claim_type: Some("Plumping".into()),
            evidence: EvidenceRecord {
                instrumental: Some(true),
                instrumental_method: Some("3D Imaging".into()),
                instrumental_duration: Some("4 weeks".into()),
                instrumental_sample_size: Some("40".into()),
                ..Default::default()
            },
            ..Default::default()
        });
        let g = Narrative::Strong.render(&s);
        assert_eq!(
            g.reasoning,
            "This claim is supported by instrumental 3d imaging testing on 40 participants over 4 weeks. \
             The study includes a defined sample size and measurable outcome.   \
             The wording matches the available evidence."
        );
        assert_eq!(g.why_score[3], "Well-structured evidence hierarchy");
        assert_eq!(g.safe_wording, "Helps keep lips feeling fuller for up to 4 weeks.");
        assert_eq!(g.confident_wording, "Clinically measured plumping for up to 4 weeks.");
        assert_eq!(g.risky_wording, "Guarantees 4 weeks plumping for all skin types.");
        assert_eq!(g.what_to_add.len(), 1);
    }

    #[test]
    fn strong_reasoning_with_consumer_study_only() {
        let s = Signals::extract(&ClaimRecord {
            claim_type: Some("Hydration".into()),
            evidence: EvidenceRecord {
                instrumental: Some(true),
                instrumental_method: Some("Corneometer hydration".into()),
                instrumental_duration: Some("8 hours".into()),
                instrumental_sample_size: Some("32".into()),
                consumer_study: Some(true),
                consumer_sample_size: Some("60".into()),
                ..Default::default()
            },
            ..Default::default()
        });
        let g = Narrative::Strong.render(&s);
        assert_eq!(
            g.reasoning,
            "This claim is supported by instrumental corneometer hydration testing on 32 participants over 8 hours. \
             The study includes a defined sample size and measurable outcome.  \
             Consumer perception data strengthens user experience validation. \
             The wording matches the available evidence."
        );
        assert_eq!(g.why_score[3], "Well-structured evidence hierarchy");
    }

    #[test]
    fn weak_first_reason_names_strong_wording() {
        let hyped = Signals::extract(&ClaimRecord {
            claim_statement: Some("Instantly hydrates".into()),
            ..Default::default()
        });
        assert_eq!(
            Narrative::Weak.render(&hyped).why_score[0],
            "This claim uses strong wording such as \"dramatically\" and \"reduces fine lines\", \
             but there is no instrumental volume measurement."
        );

        let plain = Signals::extract(&ClaimRecord {
            claim_statement: Some("Hydrates".into()),
            ..Default::default()
        });
        assert_eq!(
            Narrative::Weak.render(&plain).why_score[0],
            "Performance claim with no objective measurement"
        );
    }

    #[test]
    fn weak_reasoning_joins_issues_verbatim() {
        let s = Signals::extract(&ClaimRecord {
            claim_type: Some("Plumping".into()),
            claim_statement: Some("Dramatically reduces fine lines instantly".into()),
            ..Default::default()
        });
        let g = Narrative::Weak.render(&s);
        assert_eq!(
            g.reasoning,
            "This claim uses no instrumental measurement, but there is strong wording such as \
             \"dramatically\" or \"reduces fine lines\", but there is small consumer study sample size \
             (0 participants). There is no objective proof of volume change or performance metrics. \
             The claim wording overstates the available evidence."
        );
        assert_eq!(
            g.what_to_add,
            vec![
                "Add instrumental volume measurement (e.g., 3D imaging)",
                "Increase consumer study sample size to at least 30 participants",
                "Remove absolute language like \"dramatically\" and \"reduces fine lines\" without clinical proof",
                "Consider testing wrinkle depth if claiming anti-aging benefits",
            ]
        );
        assert_eq!(g.safe_wording, "Provides a tingling sensation that may create a temporary fuller appearance.");
        assert_eq!(g.risky_wording, "Dramatically reduces fine lines instantly");
    }

    #[test]
    fn weak_with_no_issues_keeps_empty_lead() {
        let s = Signals::extract(&ClaimRecord {
            claim_type: Some("Hydration".into()),
            claim_statement: Some("Hydrates".into()),
            evidence: EvidenceRecord {
                instrumental: Some(true),
                consumer_study: Some(true),
                consumer_sample_size: Some("40".into()),
                ..Default::default()
            },
            ..Default::default()
        });
        let g = Narrative::Weak.render(&s);
        assert_eq!(
            g.reasoning,
            "This claim uses . The evidence base is limited. The claim wording exceeds the available evidence."
        );
        assert_eq!(g.why_score[1], "Consumer perception alone is insufficient for performance claims");
        assert_eq!(g.what_to_add, vec!["Match wording strength to evidence strength"]);
        assert_eq!(g.confident_wording, "Leaves lips feeling hydrated.");
    }

    #[test]
    fn missing_statement_gets_fallback_risky_wording() {
        let g = Narrative::Weak.render(&Signals::extract(&ClaimRecord::default()));
        assert_eq!(g.risky_wording, FALLBACK_RISKY_WORDING);
        assert_eq!(g.what_to_add[0], "Add instrumental  measurement (e.g., corneometer)");
    }
}
