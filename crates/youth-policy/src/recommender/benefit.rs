use super::eligibility::estimated_transit_cost;
use super::kind::PolicyKind;
use super::profile::UserProfile;

pub(crate) const KPASS_REFUND_PERCENT: u64 = 30;
pub(crate) const KPASS_MONTHLY_REFUND_CAP: u64 = 20_000;
const GENERIC_BENEFIT: &str = "혜택 있음";

/// Monthly K-Pass refund: 30% of the estimated fare spend, capped at 20,000 won.
pub(crate) fn kpass_monthly_refund(rides: u32) -> u64 {
    (estimated_transit_cost(rides) * KPASS_REFUND_PERCENT / 100).min(KPASS_MONTHLY_REFUND_CAP)
}

/// Estimated savings shown for an eligible programme.
///
/// Depends only on the programme kind, plus the ride count for K-Pass.
pub(crate) fn estimate_benefit(kind: PolicyKind, profile: &UserProfile) -> String {
    let fixed = match kind {
        PolicyKind::RentSubsidy => "월 최대 20만원 (연 240만원)",
        PolicyKind::MoveSupport => "최대 40만원 (1회)",
        PolicyKind::DepositInterest => "연 2% 이자 지원",
        PolicyKind::YouthAllowance => "월 50만원 (최대 300만원)",
        PolicyKind::EmploymentSupport => "월 50~60만원 (최대 6개월)",
        PolicyKind::TransitRefund => "월 1만원 (연 12만원)",
        PolicyKind::HopeSaving => "3년 후 최대 1,080만원",
        PolicyKind::FutureSaving => "3년 후 720~1,440만원",
        PolicyKind::TransitComparison => {
            let thousands = kpass_monthly_refund(profile.transit_usage_count) / 1_000;
            if thousands == 0 {
                return "월 약 0원 환급".to_string();
            }
            return format!("월 약 {thousands},000원 환급");
        }
        PolicyKind::OneTimeRent | PolicyKind::Generic => GENERIC_BENEFIT,
    };

    fixed.to_string()
}
