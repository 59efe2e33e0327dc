use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::catalog::PolicyId;

/// Living arrangement declared by the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseholdType {
    Single,
    WithParents,
}

/// Employment situation as understood by the support programmes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Unemployed,
    ShortTerm,
    FullTime,
}

/// Survey answers submitted for a single recommendation request.
///
/// Currency amounts are in won. Field names follow the camelCase wire format used by
/// the survey front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age: u32,
    pub is_seoul_resident: bool,
    pub is_house_owner: bool,
    pub household_type: HouseholdType,
    pub employment_status: EmploymentStatus,
    pub monthly_income: u64,
    pub is_student: bool,
    pub is_graduate: bool,
    #[serde(default)]
    pub rent_deposit: u64,
    #[serde(default)]
    pub monthly_rent: u64,
    #[serde(default)]
    pub transit_usage_count: u32,
    #[serde(default)]
    pub has_received_support: BTreeSet<PolicyId>,
    #[serde(default)]
    pub caregiver: bool,
    #[serde(default)]
    pub is_foster_youth: bool,
}

impl UserProfile {
    pub fn has_received(&self, id: &PolicyId) -> bool {
        self.has_received_support.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let payload = json!({
            "age": 25,
            "isSeoulResident": true,
            "isHouseOwner": false,
            "householdType": "single",
            "employmentStatus": "full_time",
            "monthlyIncome": 2500000,
            "isStudent": false,
            "isGraduate": true
        });

        let profile: UserProfile = serde_json::from_value(payload).expect("profile parses");

        assert_eq!(profile.rent_deposit, 0);
        assert_eq!(profile.monthly_rent, 0);
        assert_eq!(profile.transit_usage_count, 0);
        assert!(profile.has_received_support.is_empty());
        assert!(!profile.caregiver);
        assert!(!profile.is_foster_youth);
    }

    #[test]
    fn rejects_unknown_household_type() {
        let payload = json!({
            "age": 25,
            "isSeoulResident": true,
            "isHouseOwner": false,
            "householdType": "shared",
            "employmentStatus": "full_time",
            "monthlyIncome": 2500000,
            "isStudent": false,
            "isGraduate": false
        });

        assert!(serde_json::from_value::<UserProfile>(payload).is_err());
    }

    #[test]
    fn rejects_negative_amounts() {
        let payload = json!({
            "age": 25,
            "isSeoulResident": true,
            "isHouseOwner": false,
            "householdType": "single",
            "employmentStatus": "unemployed",
            "monthlyIncome": -1,
            "isStudent": false,
            "isGraduate": false
        });

        assert!(serde_json::from_value::<UserProfile>(payload).is_err());
    }
}
