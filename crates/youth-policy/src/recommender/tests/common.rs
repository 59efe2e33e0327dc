use std::collections::BTreeSet;

use crate::recommender::catalog::{
    EligibilityRules, EmploymentRequirement, PolicyCatalog, PolicyDefinition, PolicyId,
};
use crate::recommender::profile::{EmploymentStatus, HouseholdType, UserProfile};
use crate::recommender::PolicyRecommender;

/// 27-year-old Seoul renter working full time, no prior support.
pub(super) fn profile() -> UserProfile {
    UserProfile {
        age: 27,
        is_seoul_resident: true,
        is_house_owner: false,
        household_type: HouseholdType::Single,
        employment_status: EmploymentStatus::FullTime,
        monthly_income: 2_400_000,
        is_student: false,
        is_graduate: true,
        rent_deposit: 10_000_000,
        monthly_rent: 500_000,
        transit_usage_count: 30,
        has_received_support: BTreeSet::new(),
        caregiver: false,
        is_foster_youth: false,
    }
}

pub(super) fn received(ids: &[&str]) -> BTreeSet<PolicyId> {
    ids.iter().map(|id| PolicyId::from(*id)).collect()
}

pub(super) fn policy(id: &str, eligibility: EligibilityRules) -> PolicyDefinition {
    let mut policy = PolicyDefinition::new(id, format!("{id} programme"), eligibility);
    policy.description = format!("{id} description");
    policy.benefit = format!("{id} benefit");
    policy
}

pub(super) fn youth_rules() -> EligibilityRules {
    EligibilityRules {
        age_range: Some((19, 39)),
        seoul_resident: Some(true),
        ..EligibilityRules::default()
    }
}

pub(super) fn rent_subsidy() -> PolicyDefinition {
    policy(
        "YOUTH_RENT_SUBSIDY",
        EligibilityRules {
            living_with_parents: Some(false),
            deposit_max: Some(50_000_000),
            rent_max: Some(450_000),
            total_rent_limit: Some(550_000),
            income_threshold_percent: Some(150),
            ..youth_rules()
        },
    )
}

pub(super) fn youth_allowance() -> PolicyDefinition {
    policy(
        "YOUTH_ALLOWANCE",
        EligibilityRules {
            age_range: Some((19, 34)),
            income_threshold_percent: Some(150),
            employment_status: Some(EmploymentRequirement::AnyOf(vec![
                EmploymentStatus::Unemployed,
                EmploymentStatus::ShortTerm,
            ])),
            ..youth_rules()
        },
    )
}

pub(super) fn seoul_transport() -> PolicyDefinition {
    policy(
        "TRANSPORT_SUPPORT_SEOUL",
        EligibilityRules {
            age_range: Some((19, 24)),
            ..youth_rules()
        },
    )
}

pub(super) fn kpass() -> PolicyDefinition {
    policy(
        "KPASS_YOUTH",
        EligibilityRules {
            age_range: Some((19, 34)),
            ..EligibilityRules::default()
        },
    )
}

pub(super) fn hope_saving() -> PolicyDefinition {
    policy(
        "HOPE_SAVING",
        EligibilityRules {
            income_monthly_max: Some(2_550_000),
            duplicate_programs_blocked: vec![PolicyId::from("FUTURE_SAVING")],
            ..youth_rules()
        },
    )
}

pub(super) fn future_saving() -> PolicyDefinition {
    policy(
        "FUTURE_SAVING",
        EligibilityRules {
            age_range: Some((19, 34)),
            income_range: Some((500_000, 2_500_000)),
            duplicate_programs_blocked: vec![PolicyId::from("HOPE_SAVING")],
            ..EligibilityRules::default()
        },
    )
}

pub(super) fn recommender(policies: Vec<PolicyDefinition>) -> PolicyRecommender {
    PolicyRecommender::new(PolicyCatalog::new(policies).expect("valid catalog"))
}

pub(super) fn full_recommender() -> PolicyRecommender {
    recommender(vec![
        rent_subsidy(),
        youth_allowance(),
        seoul_transport(),
        kpass(),
        hope_saving(),
        future_saving(),
    ])
}
