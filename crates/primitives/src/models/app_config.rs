use eyre::Report;
use secrecy::SecretString;
use std::env;

#[derive(Debug, Clone)]
pub struct JwtInfo {
    pub jwt_secret: SecretString,
    pub jwt_issuer: String,
    pub jwt_audience: String,
}

impl JwtInfo {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET").map_err(|_| eyre::eyre!("JWT_SECRET must be set"))?,
            ),
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "clubvest".into()),
            jwt_audience: env::var("JWT_AUDIENCE").unwrap_or_else(|_| "clubvest_api".into()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_details: JwtInfo,

    /// Minimum withdrawal, minor units.
    pub min_withdrawal_minor: i64,

    /// One-time referrer bonus, minor units.
    pub referral_bonus_minor: i64,

    /// Window for best-effort duplicate investment suppression.
    pub duplicate_investment_window_secs: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            jwt_details: JwtInfo::from_env()?,

            min_withdrawal_minor: env::var("MIN_WITHDRAWAL_MINOR")
                .unwrap_or_else(|_| "10000".into())
                .parse()?,

            referral_bonus_minor: env::var("REFERRAL_BONUS_MINOR")
                .unwrap_or_else(|_| "2500".into())
                .parse()?,

            duplicate_investment_window_secs: env::var("DUPLICATE_INVESTMENT_WINDOW_SECS")
                .unwrap_or_else(|_| "300".into())
                .parse()?,
        })
    }
}
