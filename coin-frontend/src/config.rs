// Endpoints can be overridden when building, e.g. `PREDICTION_URL=... trunk build`.
const DEFAULT_COIN_API_BASE: &str = "https://api.coingecko.com/api/v3";
const DEFAULT_PREDICTION_URL: &str = "http://localhost:5000/predict";

pub fn coin_api_base() -> &'static str {
    option_env!("COIN_API_BASE").unwrap_or(DEFAULT_COIN_API_BASE)
}

pub fn prediction_url() -> &'static str {
    option_env!("PREDICTION_URL").unwrap_or(DEFAULT_PREDICTION_URL)
}

pub fn single_coin_url(id: &str) -> String {
    format!("{}/coins/{}", coin_api_base().trim_end_matches('/'), id)
}
