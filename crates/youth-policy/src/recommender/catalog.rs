use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::kind::PolicyKind;
use super::profile::EmploymentStatus;

/// Stable identifier of a support programme, e.g. `YOUTH_RENT_SUBSIDY`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyId(pub String);

impl PolicyId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for PolicyId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Either one required employment status or a set of acceptable ones.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EmploymentRequirement {
    Exactly(EmploymentStatus),
    AnyOf(Vec<EmploymentStatus>),
}

impl EmploymentRequirement {
    pub fn admits(&self, status: EmploymentStatus) -> bool {
        match self {
            EmploymentRequirement::Exactly(required) => *required == status,
            EmploymentRequirement::AnyOf(allowed) => allowed.contains(&status),
        }
    }
}

/// Constraint block of a catalog entry. Every field is optional; an absent field
/// imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EligibilityRules {
    #[serde(default)]
    pub age_range: Option<(u32, u32)>,
    #[serde(default)]
    pub seoul_resident: Option<bool>,
    #[serde(default)]
    pub living_with_parents: Option<bool>,
    #[serde(default)]
    pub deposit_max: Option<u64>,
    #[serde(default)]
    pub rent_max: Option<u64>,
    #[serde(default)]
    pub total_rent_limit: Option<u64>,
    #[serde(default)]
    pub income_threshold_percent: Option<u32>,
    #[serde(default)]
    pub employment_status: Option<EmploymentRequirement>,
    #[serde(default)]
    pub transit_rides_monthly_min: Option<u32>,
    #[serde(default)]
    pub income_monthly_max: Option<u64>,
    #[serde(default)]
    pub income_range: Option<(u64, u64)>,
    #[serde(default)]
    pub duplicate_programs_blocked: Vec<PolicyId>,
}

impl EligibilityRules {
    pub const DEFAULT_AGE_RANGE: (u32, u32) = (0, 999);

    pub fn age_bounds(&self) -> (u32, u32) {
        self.age_range.unwrap_or(Self::DEFAULT_AGE_RANGE)
    }

    pub fn requires_seoul_residency(&self) -> bool {
        self.seoul_resident.unwrap_or(false)
    }

    /// `living_with_parents: false` restricts the programme to single households.
    pub fn requires_single_household(&self) -> bool {
        self.living_with_parents == Some(false)
    }

    pub fn deposit_cap(&self) -> u64 {
        self.deposit_max.unwrap_or(u64::MAX)
    }

    pub fn rent_cap(&self) -> u64 {
        self.rent_max.unwrap_or(u64::MAX)
    }

    pub fn effective_rent_cap(&self) -> f64 {
        self.total_rent_limit.map(|limit| limit as f64).unwrap_or(f64::INFINITY)
    }

    pub fn min_rides_or(&self, default: u32) -> u32 {
        self.transit_rides_monthly_min.unwrap_or(default)
    }
}

/// Catalog entry exactly as it appears in the rules file.
#[derive(Debug, Clone, Deserialize)]
struct PolicyRecord {
    id: PolicyId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    benefit: String,
    #[serde(default)]
    eligibility: EligibilityRules,
}

/// Loaded programme definition with its behaviour tag resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDefinition {
    pub id: PolicyId,
    pub kind: PolicyKind,
    pub name: String,
    pub description: String,
    pub benefit: String,
    pub eligibility: EligibilityRules,
}

impl PolicyDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        eligibility: EligibilityRules,
    ) -> Self {
        let id = PolicyId(id.into());
        Self {
            kind: PolicyKind::from_id(id.as_str()),
            id,
            name: name.into(),
            description: String::new(),
            benefit: String::new(),
            eligibility,
        }
    }
}

impl From<PolicyRecord> for PolicyDefinition {
    fn from(record: PolicyRecord) -> Self {
        Self {
            kind: PolicyKind::from_id(record.id.as_str()),
            id: record.id,
            name: record.name,
            description: record.description,
            benefit: record.benefit,
            eligibility: record.eligibility,
        }
    }
}

/// Errors raised while loading the rule catalog. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unable to read rule catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("rule catalog is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("rule catalog contains no policies")]
    Empty,
    #[error("rule catalog lists policy {0} more than once")]
    DuplicateId(PolicyId),
    #[error("policy {id} has an inverted {field} ({min} > {max})")]
    InvalidRange {
        id: PolicyId,
        field: &'static str,
        min: u64,
        max: u64,
    },
}

/// Ordered, immutable set of programme definitions.
#[derive(Debug, Clone)]
pub struct PolicyCatalog {
    policies: Vec<PolicyDefinition>,
}

impl PolicyCatalog {
    pub fn new(policies: Vec<PolicyDefinition>) -> Result<Self, CatalogError> {
        validate(&policies)?;
        Ok(Self { policies })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(file).map_err(|err| match err {
            CatalogError::Io { source, .. } => CatalogError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        info!(path = %path.display(), policies = catalog.len(), "rule catalog loaded");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, CatalogError> {
        let mut raw = String::new();
        reader
            .read_to_string(&mut raw)
            .map_err(|source| CatalogError::Io {
                path: PathBuf::new(),
                source,
            })?;
        Self::from_yaml_str(&raw)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, CatalogError> {
        if raw.trim().is_empty() {
            return Err(CatalogError::Empty);
        }

        let records: Vec<PolicyRecord> = serde_yaml::from_str(raw)?;
        let policies = records
            .into_iter()
            .map(PolicyDefinition::from)
            .collect();
        Self::new(policies)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PolicyDefinition> {
        self.policies.iter()
    }

    pub fn get(&self, id: &PolicyId) -> Option<&PolicyDefinition> {
        self.policies.iter().find(|policy| &policy.id == id)
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

fn validate(policies: &[PolicyDefinition]) -> Result<(), CatalogError> {
    if policies.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for policy in policies {
        if !seen.insert(&policy.id) {
            return Err(CatalogError::DuplicateId(policy.id.clone()));
        }

        let rules = &policy.eligibility;
        if let Some((min, max)) = rules.age_range {
            if min > max {
                return Err(CatalogError::InvalidRange {
                    id: policy.id.clone(),
                    field: "age_range",
                    min: u64::from(min),
                    max: u64::from(max),
                });
            }
        }
        if let Some((min, max)) = rules.income_range {
            if min > max {
                return Err(CatalogError::InvalidRange {
                    id: policy.id.clone(),
                    field: "income_range",
                    min,
                    max,
                });
            }
        }
    }

    Ok(())
}
