use crate::infra::{load_recommender, read_profile};
use crate::routes::RecommendResponse;
use clap::Args;
use std::path::PathBuf;
use youth_policy::config::AppConfig;
use youth_policy::error::AppError;
use youth_policy::recommender::PolicyRecommender;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// JSON file holding the survey profile (same shape as the HTTP payload)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Rule catalog to load instead of the resolved default
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Rule catalog to load instead of the resolved default
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let recommender = load_recommender(args.rules, &config.catalog)?;
    let profile = read_profile(&args.profile)?;

    let response = RecommendResponse::from(recommender.recommend(&profile));
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let recommender = load_recommender(args.rules, &config.catalog)?;

    for line in catalog_lines(&recommender) {
        println!("{line}");
    }
    Ok(())
}

fn catalog_lines(recommender: &PolicyRecommender) -> Vec<String> {
    let mut lines = vec![format!("{} policies", recommender.catalog().len())];
    lines.extend(recommender.catalog().iter().map(|policy| {
        let (min_age, max_age) = policy.eligibility.age_bounds();
        format!(
            "- {:<26} [{}] {:?}, ages {}-{}: {}",
            policy.id,
            policy.kind.category().label(),
            policy.kind,
            min_age,
            max_age,
            policy.name
        )
    }));
    lines
}
