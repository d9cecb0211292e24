use crate::config;
use crate::types::*;
use reqwest::{Client, StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} answered {status}")]
    Status { url: String, status: StatusCode },
}

fn check_status(url: &str, status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status {
            url: url.to_string(),
            status,
        })
    }
}

pub struct CoinService;

impl CoinService {
    pub async fn get_coin(id: &str) -> Result<CoinDetail, FetchError> {
        let url = config::single_coin_url(id);
        log::info!("Fetching coin metadata for {}", id);

        let response = Client::new().get(&url).send().await?;
        check_status(&url, response.status())?;

        let coin = response.json::<CoinDetail>().await?;
        Ok(coin)
    }
}

pub struct PredictionService;

impl PredictionService {
    pub async fn predict(id: &str) -> Result<PredictionResult, FetchError> {
        let url = config::prediction_url();
        log::info!("Requesting price prediction for {}", id);

        let response = Client::new()
            .post(url)
            .json(&PredictionRequest {
                symbol: id.to_string(),
            })
            .send()
            .await?;
        check_status(url, response.status())?;

        let prediction = response.json::<PredictionResult>().await?;
        Ok(prediction)
    }
}
