//! Plain-text claim summary, the copy-to-clipboard form of an evaluation.

use chrono::NaiveDate;

use crate::types::{ClaimRecord, EvaluationResult};

const FOOTER_BRAND: &str = "Beauty Claim Checker";

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or_default()
}

pub fn render_plain_text(rec: &ClaimRecord, result: &EvaluationResult, generated_on: NaiveDate) -> String {
    let ev = &rec.evidence;
    let mut lines: Vec<String> = vec![
        "CLAIM SUMMARY REPORT".into(),
        "====================".into(),
        String::new(),
        "PRODUCT INFORMATION".into(),
        format!("Product Name: {}", text(&rec.product_name)),
        format!("Category: {}", text(&rec.category)),
        format!("Target User: {}", text(&rec.target_user)),
        format!("Region: {}", text(&rec.region)),
        String::new(),
        "CLAIM CHECKED".into(),
        format!("Claim Type: {}", text(&rec.claim_type)),
        format!("Claim Statement: \"{}\"", text(&rec.claim_statement)),
        String::new(),
        "STRENGTH ASSESSMENT".into(),
        format!("Overall Score: {} / 100 — {}", result.overall_score, result.overall_level.label()),
        format!("Evidence Strength: {}%", result.evidence_strength),
        format!("Clarity: {}%", result.clarity),
        format!("Risk Level: {}%", result.risk_level),
        String::new(),
        "EVIDENCE USED".into(),
    ];

    if ev.instrumental.unwrap_or(false) {
        lines.push(format!("• Instrumental Testing: {}", text(&ev.instrumental_method)));
        lines.push(format!("  Duration: {}", text(&ev.instrumental_duration)));
        lines.push(format!("  Sample Size: {} participants", text(&ev.instrumental_sample_size)));
        if !text(&ev.instrumental_result).is_empty() {
            lines.push(format!("  Result: {}", text(&ev.instrumental_result)));
        }
    }
    if ev.consumer_study.unwrap_or(false) {
        lines.push(format!("• Consumer Perception Study: {} participants", text(&ev.consumer_sample_size)));
        if !text(&ev.consumer_question).is_empty() {
            lines.push(format!("  Finding: {}", text(&ev.consumer_question)));
        }
    }
    if ev.dermatologist_tested.unwrap_or(false) {
        lines.push(format!("• Dermatologist Tested: {}", text(&ev.dermatologist_covers)));
    }

    lines.push(String::new());
    lines.push("INGREDIENTS".into());
    lines.extend(rec.ingredients.iter().map(|i| format!("• {i}")));

    lines.push(String::new());
    lines.push("RISK & UNCERTAINTIES".into());
    lines.extend(result.why_score.iter().map(|r| format!("• {r}")));

    lines.push(String::new());
    lines.push("RECOMMENDED NEXT STEPS".into());
    lines.extend(result.what_to_add.iter().enumerate().map(|(i, s)| format!("{}. {s}", i + 1)));

    lines.push(String::new());
    lines.push(format!("Generated on {} — {FOOTER_BRAND}", generated_on.format("%-m/%-d/%Y")));
    lines.join("\n")
}
