//! Multi-criteria roster search.
//!
//! Pure, synchronous filtering over the in-memory roster. A patient is
//! included only when every active predicate passes; inactive predicates
//! (empty query, empty selections, no age range, default tab) pass
//! everything. Output preserves roster order — this is a stable filter,
//! not a sort.

use crate::models::{Patient, PatientFilter, PatientTab, RiskLevel};

/// Compute the visible subset of the roster for the current search state.
///
/// Re-evaluated on every search submit, filter toggle, or tab switch. All
/// inputs are treated as well-formed; an inverted age range simply matches
/// nothing.
pub fn filter_patients(
    patients: &[Patient],
    query: &str,
    filter: &PatientFilter,
    tab: PatientTab,
) -> Vec<Patient> {
    let needle = query.to_lowercase();

    patients
        .iter()
        .filter(|p| matches_query(p, &needle))
        .filter(|p| matches_risk_levels(p, filter))
        .filter(|p| matches_age_range(p, filter))
        .filter(|p| matches_conditions(p, filter))
        .filter(|p| matches_tab(p, &tab))
        .cloned()
        .collect()
}

/// Case-insensitive substring match over name, id, and condition labels.
fn matches_query(patient: &Patient, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    patient.name.to_lowercase().contains(needle)
        || patient.id.to_lowercase().contains(needle)
        || patient
            .conditions
            .iter()
            .any(|c| c.to_lowercase().contains(needle))
}

fn matches_risk_levels(patient: &Patient, filter: &PatientFilter) -> bool {
    filter.risk_levels.is_empty() || filter.risk_levels.contains(&patient.risk_level)
}

fn matches_age_range(patient: &Patient, filter: &PatientFilter) -> bool {
    match filter.age_range {
        Some(range) => range.contains(patient.age),
        None => true,
    }
}

/// Any selected term matching any patient condition passes. The match is
/// an asymmetric case-insensitive substring: the term "Diabetes" matches
/// the label "Diabetes Type 2", not the other way around.
fn matches_conditions(patient: &Patient, filter: &PatientFilter) -> bool {
    if filter.conditions.is_empty() {
        return true;
    }
    filter.conditions.iter().any(|term| {
        let term = term.to_lowercase();
        patient
            .conditions
            .iter()
            .any(|label| label.to_lowercase().contains(&term))
    })
}

fn matches_tab(patient: &Patient, tab: &PatientTab) -> bool {
    match tab {
        PatientTab::All => true,
        PatientTab::HighRisk => patient.risk_level == RiskLevel::High,
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeRange, ContactInfo, Gender};
    use chrono::NaiveDate;

    fn patient(n: usize, risk_level: RiskLevel, age: u32, conditions: &[&str]) -> Patient {
        let (lo, _) = risk_level.score_band();
        Patient {
            id: format!("P{}", 1000 + n),
            name: format!("Patient {n}"),
            age,
            gender: Gender::Male,
            risk_level,
            risk_score: lo,
            conditions: conditions.iter().map(|c| c.to_string()).collect(),
            last_checkup: NaiveDate::from_ymd_opt(2026, 7, 2).unwrap(),
            contact: ContactInfo {
                email: format!("patient{n}@example.com"),
                phone: "(555) 410-9921".into(),
            },
        }
    }

    fn roster() -> Vec<Patient> {
        vec![
            patient(1, RiskLevel::High, 25, &["Hypertension"]),
            patient(2, RiskLevel::Medium, 45, &["Diabetes Type 2", "Asthma"]),
            patient(3, RiskLevel::Low, 67, &["Arthritis"]),
            patient(4, RiskLevel::High, 72, &["Heart Disease", "COPD"]),
        ]
    }

    fn ids(patients: &[Patient]) -> Vec<&str> {
        patients.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn defaults_return_full_roster_in_order() {
        let roster = roster();
        let visible = filter_patients(&roster, "", &PatientFilter::default(), PatientTab::All);
        assert_eq!(ids(&visible), ids(&roster));
    }

    #[test]
    fn id_query_is_substring_match() {
        let roster = roster();
        let visible = filter_patients(&roster, "P1001", &PatientFilter::default(), PatientTab::All);
        assert_eq!(ids(&visible), ["P1001"]);

        // A prefix matches every id that contains it.
        let visible = filter_patients(&roster, "P100", &PatientFilter::default(), PatientTab::All);
        assert_eq!(visible.len(), roster.len());
    }

    #[test]
    fn query_is_case_insensitive_over_conditions() {
        let roster = roster();
        let visible = filter_patients(&roster, "hyperTENSION", &PatientFilter::default(), PatientTab::All);
        assert_eq!(ids(&visible), ["P1001"]);
    }

    #[test]
    fn age_range_bounds_are_inclusive() {
        let roster = roster();
        let filter = PatientFilter {
            age_range: AgeRange::preset("18-30"),
            ..Default::default()
        };
        let visible = filter_patients(&roster, "", &filter, PatientTab::All);
        assert_eq!(ids(&visible), ["P1001"]); // 45, 67, 72 all excluded
    }

    #[test]
    fn inverted_age_range_matches_nothing() {
        let roster = roster();
        let filter = PatientFilter {
            age_range: Some(AgeRange::new(60, 40)),
            ..Default::default()
        };
        assert!(filter_patients(&roster, "", &filter, PatientTab::All).is_empty());
    }

    #[test]
    fn risk_level_filter_is_membership() {
        let roster = roster();
        let filter = PatientFilter {
            risk_levels: vec![RiskLevel::Medium, RiskLevel::Low],
            ..Default::default()
        };
        let visible = filter_patients(&roster, "", &filter, PatientTab::All);
        assert_eq!(ids(&visible), ["P1002", "P1003"]);
    }

    #[test]
    fn condition_filter_matches_substring_asymmetrically() {
        let roster = roster();
        let filter = PatientFilter {
            conditions: vec!["Diabetes".into()],
            ..Default::default()
        };
        let visible = filter_patients(&roster, "", &filter, PatientTab::All);
        assert_eq!(ids(&visible), ["P1002"]);

        // The full label is not a substring of the shorter term.
        let filter = PatientFilter {
            conditions: vec!["Diabetes Type 2 Mellitus".into()],
            ..Default::default()
        };
        assert!(filter_patients(&roster, "", &filter, PatientTab::All).is_empty());
    }

    #[test]
    fn high_risk_tab_scopes_to_high_only() {
        let roster = roster();
        let visible = filter_patients(&roster, "", &PatientFilter::default(), PatientTab::HighRisk);
        assert_eq!(ids(&visible), ["P1001", "P1004"]);
    }

    #[test]
    fn predicates_combine_with_and() {
        let roster = roster();
        let filter = PatientFilter {
            age_range: AgeRange::preset("71+"),
            ..Default::default()
        };
        let visible = filter_patients(&roster, "heart", &filter, PatientTab::HighRisk);
        assert_eq!(ids(&visible), ["P1004"]);

        // Same query, but the age range now excludes the only match.
        let filter = PatientFilter {
            age_range: AgeRange::preset("18-30"),
            ..Default::default()
        };
        assert!(filter_patients(&roster, "heart", &filter, PatientTab::HighRisk).is_empty());
    }
}
