use serde::Serialize;

/// Behavioural tag assigned to every catalog entry when the catalog is loaded.
///
/// This is the only place that knows the programme identifiers. The eligibility
/// predicate, the benefit estimator and the category classifier all match on the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    RentSubsidy,
    OneTimeRent,
    MoveSupport,
    DepositInterest,
    YouthAllowance,
    EmploymentSupport,
    TransitRefund,
    TransitComparison,
    HopeSaving,
    FutureSaving,
    Generic,
}

impl PolicyKind {
    pub fn from_id(id: &str) -> Self {
        match id {
            "YOUTH_RENT_SUBSIDY" => PolicyKind::RentSubsidy,
            "YOUTH_RENT_ONETIME" => PolicyKind::OneTimeRent,
            "MOVE_SUPPORT" => PolicyKind::MoveSupport,
            "DEPOSIT_INTEREST_SUBSIDY" => PolicyKind::DepositInterest,
            "YOUTH_ALLOWANCE" => PolicyKind::YouthAllowance,
            "EMPLOYMENT_SUPPORT" => PolicyKind::EmploymentSupport,
            "TRANSPORT_SUPPORT_SEOUL" => PolicyKind::TransitRefund,
            "KPASS_YOUTH" => PolicyKind::TransitComparison,
            "HOPE_SAVING" => PolicyKind::HopeSaving,
            "FUTURE_SAVING" => PolicyKind::FutureSaving,
            _ => PolicyKind::Generic,
        }
    }

    /// Housing programmes that screen ownership, household, deposit and rent.
    ///
    /// The one-time rent programme is categorised as housing but is not screened here.
    pub fn is_housing_screened(&self) -> bool {
        matches!(
            self,
            PolicyKind::RentSubsidy | PolicyKind::MoveSupport | PolicyKind::DepositInterest
        )
    }

    pub fn is_savings_account(&self) -> bool {
        matches!(self, PolicyKind::HopeSaving | PolicyKind::FutureSaving)
    }

    pub fn category(&self) -> Category {
        match self {
            PolicyKind::RentSubsidy
            | PolicyKind::OneTimeRent
            | PolicyKind::MoveSupport
            | PolicyKind::DepositInterest => Category::Housing,
            PolicyKind::YouthAllowance | PolicyKind::EmploymentSupport => Category::Income,
            PolicyKind::HopeSaving | PolicyKind::FutureSaving => Category::AssetBuilding,
            PolicyKind::TransitRefund | PolicyKind::TransitComparison => Category::Transportation,
            PolicyKind::Generic => Category::Other,
        }
    }
}

/// Display grouping shown next to each recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Housing,
    Income,
    AssetBuilding,
    Transportation,
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Housing => "주거",
            Category::Income => "소득",
            Category::AssetBuilding => "자산형성",
            Category::Transportation => "교통",
            Category::Other => "기타",
        }
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_are_generic_and_uncategorised() {
        let kind = PolicyKind::from_id("CULTURE_PASS");
        assert_eq!(kind, PolicyKind::Generic);
        assert_eq!(kind.category(), Category::Other);
        assert_eq!(kind.category().label(), "기타");
    }

    #[test]
    fn one_time_rent_is_housing_without_screening() {
        let kind = PolicyKind::from_id("YOUTH_RENT_ONETIME");
        assert_eq!(kind.category(), Category::Housing);
        assert!(!kind.is_housing_screened());
    }

    #[test]
    fn category_labels_cover_known_programmes() {
        let cases = [
            ("YOUTH_RENT_SUBSIDY", "주거"),
            ("MOVE_SUPPORT", "주거"),
            ("DEPOSIT_INTEREST_SUBSIDY", "주거"),
            ("YOUTH_ALLOWANCE", "소득"),
            ("EMPLOYMENT_SUPPORT", "소득"),
            ("HOPE_SAVING", "자산형성"),
            ("FUTURE_SAVING", "자산형성"),
            ("TRANSPORT_SUPPORT_SEOUL", "교통"),
            ("KPASS_YOUTH", "교통"),
        ];

        for (id, label) in cases {
            assert_eq!(PolicyKind::from_id(id).category().label(), label, "{id}");
        }
    }
}
