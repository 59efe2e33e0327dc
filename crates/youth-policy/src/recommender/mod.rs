//! Eligibility engine matching a survey profile against the programme catalog.
//!
//! The catalog is loaded once and shared read-only; every call to
//! [`PolicyRecommender::recommend`] is a pure function of the catalog and the profile.

mod benefit;
pub mod catalog;
mod eligibility;
mod income;
pub mod kind;
pub mod profile;

#[cfg(test)]
mod tests;

pub use catalog::{
    CatalogError, EligibilityRules, EmploymentRequirement, PolicyCatalog, PolicyDefinition,
    PolicyId,
};
pub use eligibility::{EligibilityDecision, IneligibleReason};
pub use kind::{Category, PolicyKind};
pub use profile::{EmploymentStatus, HouseholdType, UserProfile};

use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Stateless evaluator over an immutable programme catalog.
#[derive(Debug, Clone)]
pub struct PolicyRecommender {
    catalog: PolicyCatalog,
}

impl PolicyRecommender {
    pub fn new(catalog: PolicyCatalog) -> Self {
        Self { catalog }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        PolicyCatalog::from_path(path).map(Self::new)
    }

    pub fn catalog(&self) -> &PolicyCatalog {
        &self.catalog
    }

    /// Decision for a single programme, including why it was excluded.
    pub fn evaluate(
        &self,
        policy: &PolicyDefinition,
        profile: &UserProfile,
    ) -> EligibilityDecision {
        eligibility::check_eligibility(policy, profile)
    }

    /// Evaluates every programme in catalog order and keeps the eligible ones.
    pub fn recommend(&self, profile: &UserProfile) -> AggregateResult {
        let recommendations: Vec<RecommendationResult> = self
            .catalog
            .iter()
            .filter_map(|policy| match self.evaluate(policy, profile) {
                EligibilityDecision::Eligible { tip } => {
                    Some(RecommendationResult::build(policy, profile, tip))
                }
                EligibilityDecision::Ineligible(reason) => {
                    debug!(policy = %policy.id, reason = %reason.summary(), "policy excluded");
                    None
                }
            })
            .collect();

        debug!(
            eligible = recommendations.len(),
            evaluated = self.catalog.len(),
            "recommendation complete"
        );

        AggregateResult {
            eligible_count: recommendations.len(),
            recommendations,
        }
    }
}

/// One eligible programme with its rationale and estimated savings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationResult {
    pub policy_id: PolicyId,
    pub policy_name: String,
    pub category: Category,
    pub description: String,
    pub benefit: String,
    pub tip: String,
    pub estimated_savings: String,
}

impl RecommendationResult {
    fn build(policy: &PolicyDefinition, profile: &UserProfile, tip: String) -> Self {
        Self {
            policy_id: policy.id.clone(),
            policy_name: policy.name.clone(),
            category: policy.kind.category(),
            description: policy.description.clone(),
            benefit: policy.benefit.clone(),
            tip,
            estimated_savings: benefit::estimate_benefit(policy.kind, profile),
        }
    }
}

/// Eligible programmes in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    pub eligible_count: usize,
    pub recommendations: Vec<RecommendationResult>,
}

impl AggregateResult {
    pub fn is_empty(&self) -> bool {
        self.eligible_count == 0
    }
}
