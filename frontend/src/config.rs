use log::error;
use shared::constants::{GEMINI_MODEL, PROMOTION_COMPANY_NAME};
use shared::shared_wheel_game::SpinConfig;
use shared::PrizeSet;

// Values are baked in at build time, e.g. `GEMINI_API_KEY=... trunk build`.

pub fn get_gemini_api_key() -> Option<String> {
    option_env!("GEMINI_API_KEY")
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}

pub fn get_gemini_model() -> &'static str {
    option_env!("GEMINI_MODEL").unwrap_or(GEMINI_MODEL)
}

pub fn get_company_name() -> &'static str {
    option_env!("PROMOTION_COMPANY_NAME").unwrap_or(PROMOTION_COMPANY_NAME)
}

/// Prize catalog, optionally overridden with a JSON array in
/// `LUCKY_WHEEL_PRIZES`. A bad override is logged and the stock catalog used.
pub fn get_prize_catalog() -> PrizeSet {
    match option_env!("LUCKY_WHEEL_PRIZES") {
        Some(json) => PrizeSet::from_json(json).unwrap_or_else(|e| {
            error!("Ignoring LUCKY_WHEEL_PRIZES: {}", e);
            PrizeSet::default_catalog()
        }),
        None => PrizeSet::default_catalog(),
    }
}

pub fn get_spin_config() -> SpinConfig {
    match option_env!("LUCKY_WHEEL_SPIN") {
        Some(json) => SpinConfig::from_json(json).unwrap_or_else(|e| {
            error!("Ignoring LUCKY_WHEEL_SPIN: {}", e);
            SpinConfig::default()
        }),
        None => SpinConfig::default(),
    }
}
