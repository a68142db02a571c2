use std::sync::LazyLock;

use crate::types::{ClaimRecord, EvidenceRecord};

/// The "HydraFull Lip Tint" walkthrough shown when no claim has been built yet.
pub static HYDRAFULL_DEMO_DATA: LazyLock<ClaimRecord> = LazyLock::new(|| ClaimRecord {
    category: Some("Lip Tint".into()),
    product_name: Some("HydraFull Lip Tint".into()),
    target_user: Some("Everyday makeup users".into()),
    region: Some("EU".into()),
    claim_type: Some("Hydration".into()),
    claim_statement: Some("Hydrates lips for up to 8 hours and helps reduce dryness.".into()),
    ingredients: vec![
        "Glycerin".into(),
        "Shea Butter".into(),
        "Palmitoyl Tripeptide-1".into(),
    ],
    no_fragrance: Some(false),
    fragrance_present: Some(false),
    evidence: EvidenceRecord {
        instrumental: Some(true),
        instrumental_method: Some("Corneometer hydration".into()),
        instrumental_duration: Some("8 hours".into()),
        instrumental_sample_size: Some("32".into()),
        instrumental_result: Some("+28% hydration increase vs baseline".into()),
        consumer_study: Some(true),
        consumer_sample_size: Some("60".into()),
        consumer_question: Some("84% agreed lips felt hydrated after 8 hours".into()),
        dermatologist_tested: Some(true),
        dermatologist_covers: Some("Irritation / safety".into()),
        ..Default::default()
    },
    context: vec!["Website PDP".into(), "Packaging".into()],
    ..Default::default()
});

/// Returns `candidate` when it names a product, the demo record otherwise.
///
/// The substitution is all-or-nothing: a candidate with a product name is
/// returned untouched even if every other field is missing.
pub fn resolve_form_data(candidate: Option<ClaimRecord>) -> ClaimRecord {
    match candidate {
        Some(rec) if rec.product_name.as_deref().is_some_and(|n| !n.is_empty()) => rec,
        _ => HYDRAFULL_DEMO_DATA.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_unnamed_candidates_fall_back_to_demo() {
        assert_eq!(resolve_form_data(None), *HYDRAFULL_DEMO_DATA);
        assert_eq!(resolve_form_data(Some(ClaimRecord::default())), *HYDRAFULL_DEMO_DATA);

        let unnamed = ClaimRecord {
            product_name: Some(String::new()),
            claim_type: Some("Plumping".into()),
            ..Default::default()
        };
        assert_eq!(resolve_form_data(Some(unnamed)), *HYDRAFULL_DEMO_DATA);
    }

    #[test]
    fn named_candidate_is_returned_without_merging() {
        let rec = ClaimRecord { product_name: Some("X".into()), ..Default::default() };
        let out = resolve_form_data(Some(rec.clone()));
        assert_eq!(out, rec);
        assert!(out.claim_type.is_none());
        assert!(out.ingredients.is_empty());
    }

    #[test]
    fn resolving_twice_is_a_no_op() {
        let once = resolve_form_data(None);
        assert_eq!(resolve_form_data(Some(once.clone())), once);
    }
}
