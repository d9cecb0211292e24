use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Numbers keyed by lowercase currency code ("usd", "inr", ...).
pub type CurrencyMap = HashMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    #[serde(default)]
    pub symbol: String,
    pub name: String,
    pub image: CoinImage,
    #[serde(default)]
    pub description: Description,
    pub market_cap_rank: Option<u32>,
    pub market_data: MarketData,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinImage {
    pub large: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub en: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub current_price: CurrencyMap,
    #[serde(default)]
    pub market_cap: CurrencyMap,
    #[serde(default)]
    pub high_24h: CurrencyMap,
    #[serde(default)]
    pub low_24h: CurrencyMap,
    #[serde(default)]
    pub total_volume: CurrencyMap,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub symbol: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_price: f64,
    pub predicted_change_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BITCOIN: &str = r#"{
        "id": "bitcoin",
        "symbol": "btc",
        "name": "Bitcoin",
        "image": { "thumb": "t.png", "large": "https://example.com/btc.png" },
        "description": { "en": "Bitcoin is digital. It is decentralized.", "de": "" },
        "market_cap_rank": 1,
        "market_data": {
            "current_price": { "usd": 64000.5, "inr": 5340000 },
            "market_cap": { "usd": 1234567890123, "inr": 98765432101234 },
            "high_24h": { "usd": 65000 },
            "price_change_percentage_24h": -1.25
        },
        "last_updated": "2024-05-01T12:30:00.000Z"
    }"#;

    #[test]
    fn deserializes_coin_detail_ignoring_unknown_fields() {
        let coin: CoinDetail = serde_json::from_str(BITCOIN).unwrap();
        assert_eq!(coin.name, "Bitcoin");
        assert_eq!(coin.image.large, "https://example.com/btc.png");
        assert_eq!(coin.market_cap_rank, Some(1));
        assert_eq!(coin.market_data.current_price["usd"], 64000.5);
        assert_eq!(coin.market_data.market_cap["inr"], 98765432101234.0);
        assert!(coin.market_data.low_24h.is_empty());
        assert_eq!(coin.market_data.price_change_percentage_24h, Some(-1.25));
        assert!(coin.last_updated.is_some());
    }

    #[test]
    fn optional_sections_default_when_missing() {
        let json = r#"{
            "id": "tiny",
            "name": "Tiny",
            "image": { "large": "tiny.png" },
            "market_cap_rank": null,
            "market_data": {}
        }"#;
        let coin: CoinDetail = serde_json::from_str(json).unwrap();
        assert_eq!(coin.description.en, None);
        assert_eq!(coin.market_cap_rank, None);
        assert!(coin.market_data.current_price.is_empty());
        assert_eq!(coin.last_updated, None);
    }

    #[test]
    fn prediction_request_uses_symbol_key() {
        let body = serde_json::to_value(PredictionRequest {
            symbol: "ethereum".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "symbol": "ethereum" }));
    }

    #[test]
    fn deserializes_prediction_result() {
        let prediction: PredictionResult =
            serde_json::from_str(r#"{"predicted_price": 70123.4, "predicted_change_percent": -2.75}"#)
                .unwrap();
        assert_eq!(prediction.predicted_price, 70123.4);
        assert_eq!(prediction.predicted_change_percent, -2.75);
    }
}
