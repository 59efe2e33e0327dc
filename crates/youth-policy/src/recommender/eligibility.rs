use super::catalog::{PolicyDefinition, PolicyId};
use super::income::within_income_threshold;
use super::kind::PolicyKind;
use super::profile::{EmploymentStatus, HouseholdType, UserProfile};

/// Annual rate used to convert a lease deposit into an equivalent monthly rent.
pub(crate) const DEPOSIT_CONVERSION_RATE: f64 = 0.05;
pub(crate) const SEOUL_REFUND_MIN_RIDES: u32 = 44;
pub(crate) const KPASS_MIN_RIDES: u32 = 15;
pub(crate) const AVERAGE_FARE: u64 = 1_500;
/// Monthly spend above which the flat-rate climate card beats the K-Pass refund.
pub(crate) const CLIMATE_CARD_BREAK_EVEN: u64 = 77_500;

const TIP_SEPARATOR: &str = " · ";
const DEFAULT_TIP: &str = "조건 충족";

/// Outcome of matching one programme against one profile.
#[derive(Debug, Clone, PartialEq)]
pub enum EligibilityDecision {
    Eligible { tip: String },
    Ineligible(IneligibleReason),
}

impl EligibilityDecision {
    pub fn is_eligible(&self) -> bool {
        matches!(self, EligibilityDecision::Eligible { .. })
    }

    pub fn tip(&self) -> Option<&str> {
        match self {
            EligibilityDecision::Eligible { tip } => Some(tip),
            EligibilityDecision::Ineligible(_) => None,
        }
    }
}

/// First check that excluded the profile.
#[derive(Debug, Clone, PartialEq)]
pub enum IneligibleReason {
    AgeOutOfRange { age: u32, min: u32, max: u32 },
    NotSeoulResident,
    HouseOwner,
    NotSingleHousehold,
    DepositTooHigh { deposit: u64, max: u64 },
    EffectiveRentTooHigh { effective_rent: f64, limit: f64 },
    IncomeAboveThreshold { income: u64, threshold_percent: u32 },
    EmploymentStatusMismatch,
    Student,
    InsufficientTransitUse { rides: u32, min: u32 },
    Unemployed,
    IncomeAboveMonthlyMax { income: u64, max: u64 },
    IncomeOutsideRange { income: u64, min: u64, max: u64 },
    AlreadyReceived(PolicyId),
}

impl IneligibleReason {
    pub fn summary(&self) -> String {
        match self {
            IneligibleReason::AgeOutOfRange { age, min, max } => {
                format!("age {age} outside {min}..={max}")
            }
            IneligibleReason::NotSeoulResident => "requires Seoul residency".to_string(),
            IneligibleReason::HouseOwner => "house owners are excluded".to_string(),
            IneligibleReason::NotSingleHousehold => "requires a single household".to_string(),
            IneligibleReason::DepositTooHigh { deposit, max } => {
                format!("deposit {deposit} exceeds {max}")
            }
            IneligibleReason::EffectiveRentTooHigh {
                effective_rent,
                limit,
            } => format!("effective rent {effective_rent:.0} exceeds {limit:.0}"),
            IneligibleReason::IncomeAboveThreshold {
                income,
                threshold_percent,
            } => format!("income {income} above {threshold_percent}% of median"),
            IneligibleReason::EmploymentStatusMismatch => {
                "employment status not accepted".to_string()
            }
            IneligibleReason::Student => "students are excluded".to_string(),
            IneligibleReason::InsufficientTransitUse { rides, min } => {
                format!("{rides} rides below minimum {min}")
            }
            IneligibleReason::Unemployed => "requires earned income".to_string(),
            IneligibleReason::IncomeAboveMonthlyMax { income, max } => {
                format!("income {income} exceeds {max}")
            }
            IneligibleReason::IncomeOutsideRange { income, min, max } => {
                format!("income {income} outside {min}..={max}")
            }
            IneligibleReason::AlreadyReceived(id) => format!("already received {id}"),
        }
    }
}

/// Deposit converted at 5% a year and spread over twelve months, added to the rent.
pub(crate) fn effective_monthly_rent(deposit: u64, monthly_rent: u64) -> f64 {
    monthly_rent as f64 + deposit as f64 * DEPOSIT_CONVERSION_RATE / 12.0
}

pub(crate) fn estimated_transit_cost(rides: u32) -> u64 {
    u64::from(rides) * AVERAGE_FARE
}

/// Runs the ordered chain of disqualifying checks; the first failure wins.
pub(crate) fn check_eligibility(
    policy: &PolicyDefinition,
    profile: &UserProfile,
) -> EligibilityDecision {
    match collect_tips(policy, profile) {
        Ok(tips) if tips.is_empty() => EligibilityDecision::Eligible {
            tip: DEFAULT_TIP.to_string(),
        },
        Ok(tips) => EligibilityDecision::Eligible {
            tip: tips.join(TIP_SEPARATOR),
        },
        Err(reason) => EligibilityDecision::Ineligible(reason),
    }
}

fn collect_tips(
    policy: &PolicyDefinition,
    profile: &UserProfile,
) -> Result<Vec<String>, IneligibleReason> {
    let rules = &policy.eligibility;
    let mut tips = Vec::new();

    let (min_age, max_age) = rules.age_bounds();
    if !(min_age..=max_age).contains(&profile.age) {
        return Err(IneligibleReason::AgeOutOfRange {
            age: profile.age,
            min: min_age,
            max: max_age,
        });
    }

    if rules.requires_seoul_residency() && !profile.is_seoul_resident {
        return Err(IneligibleReason::NotSeoulResident);
    }

    if policy.kind.is_housing_screened() {
        tips.push(check_housing(policy, profile)?);
    }

    if let Some(threshold_percent) = rules.income_threshold_percent {
        if !within_income_threshold(profile.monthly_income, threshold_percent) {
            return Err(IneligibleReason::IncomeAboveThreshold {
                income: profile.monthly_income,
                threshold_percent,
            });
        }
        tips.push(format!("중위소득 {threshold_percent}% 이하 충족"));
    }

    if let Some(requirement) = &rules.employment_status {
        if !requirement.admits(profile.employment_status) {
            return Err(IneligibleReason::EmploymentStatusMismatch);
        }
    }

    match policy.kind {
        PolicyKind::YouthAllowance if profile.is_student => {
            return Err(IneligibleReason::Student);
        }
        PolicyKind::TransitRefund => {
            let rides = profile.transit_usage_count;
            let min = rules.min_rides_or(SEOUL_REFUND_MIN_RIDES);
            if rides < min {
                return Err(IneligibleReason::InsufficientTransitUse { rides, min });
            }
            tips.push(format!("월 {rides}회 이용 → 환급 가능"));
        }
        PolicyKind::TransitComparison => {
            let rides = profile.transit_usage_count;
            let min = rules.min_rides_or(KPASS_MIN_RIDES);
            if rides < min {
                return Err(IneligibleReason::InsufficientTransitUse { rides, min });
            }
            if estimated_transit_cost(rides) > CLIMATE_CARD_BREAK_EVEN {
                tips.push(
                    "월 교통비가 77,500원 이상이므로 기후동행카드(월 55,000원)가 더 유리할 수 있습니다"
                        .to_string(),
                );
            } else {
                tips.push(format!("월 {rides}회 이용 → 30% 환급 (최대 2만원)"));
            }
        }
        kind if kind.is_savings_account() => check_savings(policy, profile)?,
        _ => {}
    }

    if let Some(blocked) = rules
        .duplicate_programs_blocked
        .iter()
        .find(|blocked| profile.has_received(blocked))
    {
        return Err(IneligibleReason::AlreadyReceived(blocked.clone()));
    }

    Ok(tips)
}

fn check_housing(
    policy: &PolicyDefinition,
    profile: &UserProfile,
) -> Result<String, IneligibleReason> {
    let rules = &policy.eligibility;

    if profile.is_house_owner {
        return Err(IneligibleReason::HouseOwner);
    }

    if rules.requires_single_household() && profile.household_type != HouseholdType::Single {
        return Err(IneligibleReason::NotSingleHousehold);
    }

    if profile.rent_deposit > rules.deposit_cap() {
        return Err(IneligibleReason::DepositTooHigh {
            deposit: profile.rent_deposit,
            max: rules.deposit_cap(),
        });
    }

    if profile.monthly_rent > rules.rent_cap() {
        let effective_rent = effective_monthly_rent(profile.rent_deposit, profile.monthly_rent);
        let limit = rules.effective_rent_cap();
        if effective_rent > limit {
            return Err(IneligibleReason::EffectiveRentTooHigh {
                effective_rent,
                limit,
            });
        }
    }

    Ok(format!(
        "보증금 {}만원, 월세 {}만원 조건 충족",
        profile.rent_deposit / 10_000,
        profile.monthly_rent / 10_000
    ))
}

fn check_savings(
    policy: &PolicyDefinition,
    profile: &UserProfile,
) -> Result<(), IneligibleReason> {
    let rules = &policy.eligibility;
    let income = profile.monthly_income;

    if profile.employment_status == EmploymentStatus::Unemployed {
        return Err(IneligibleReason::Unemployed);
    }

    if let Some(max) = rules.income_monthly_max {
        if income > max {
            return Err(IneligibleReason::IncomeAboveMonthlyMax { income, max });
        }
    }

    if let Some((min, max)) = rules.income_range {
        if !(min..=max).contains(&income) {
            return Err(IneligibleReason::IncomeOutsideRange { income, min, max });
        }
    }

    Ok(())
}
