use crate::components::{coin_info::CoinInfo, loading::LoadingBar, sidebar::CoinSidebar};
use crate::hooks::use_coin_page::use_coin_page;
use crate::state::{CoinPageState, FetchState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CoinPageProps {
    pub id: String,
}

#[function_component(CoinPage)]
pub fn coin_page(props: &CoinPageProps) -> Html {
    let state = use_coin_page(props.id.clone());

    html! { <CoinPageView id={props.id.clone()} state={(*state).clone()} /> }
}

#[derive(Properties, PartialEq)]
pub struct CoinPageViewProps {
    /// Id the route asks for.
    pub id: String,
    pub state: CoinPageState,
}

#[function_component(CoinPageView)]
pub fn coin_page_view(props: &CoinPageViewProps) -> Html {
    let state = &props.state;

    // The reset for a new id lands a render later; never show the old coin.
    if state.id != props.id {
        return html! { <LoadingBar /> };
    }

    match &state.coin {
        FetchState::Loading => html! { <LoadingBar /> },
        FetchState::Failed(err) => html! {
            <div class="bg-red-50 border border-red-200 rounded-lg p-4">
                <div class="text-red-800">
                    <strong>{format!("Could not load {}: ", state.id)}</strong>{err}
                </div>
            </div>
        },
        FetchState::Loaded(coin) => html! {
            <div class="flex flex-col items-center lg:flex-row lg:items-start">
                <CoinSidebar coin={coin.clone()} prediction={state.prediction.data().copied()} />
                <CoinInfo coin={coin.clone()} />
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CoinDetail, PredictionResult};
    use yew::ServerRenderer;

    fn bitcoin() -> CoinDetail {
        serde_json::from_value(serde_json::json!({
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": { "large": "https://example.com/btc.png" },
            "description": { "en": "Bitcoin is digital. It is decentralized." },
            "market_cap_rank": 1,
            "market_data": {
                "current_price": { "inr": 5340000.5, "usd": 64000 },
                "market_cap": { "inr": 1234567890, "usd": 999 }
            }
        }))
        .unwrap()
    }

    async fn render(state: CoinPageState) -> String {
        let id = state.id.clone();
        render_for(id, state).await
    }

    async fn render_for(id: String, state: CoinPageState) -> String {
        ServerRenderer::<CoinPageView>::with_props(move || CoinPageViewProps { id, state })
            .hydratable(false)
            .render()
            .await
    }

    fn loaded(prediction: FetchState<PredictionResult>) -> CoinPageState {
        CoinPageState {
            id: "bitcoin".to_string(),
            coin: FetchState::Loaded(bitcoin()),
            prediction,
        }
    }

    #[tokio::test]
    async fn loading_shows_only_the_progress_bar() {
        let html = render(CoinPageState::new("bitcoin")).await;
        assert!(html.contains("progressbar"));
        assert!(!html.contains("Bitcoin"));
        assert!(!html.contains("Price Prediction"));
    }

    #[tokio::test]
    async fn loaded_coin_renders_sidebar_with_grouped_numbers() {
        let html = render(loaded(FetchState::Loading)).await;
        assert!(!html.contains("progressbar"));
        assert!(html.contains("Bitcoin"));
        assert!(html.contains("https://example.com/btc.png"));
        assert!(html.contains("Bitcoin is digital."));
        assert!(!html.contains("decentralized"));
        assert!(html.contains("Rank:"));
        assert!(html.contains("₹ 5,340,000.5"));
        assert!(html.contains("₹ 1,234M"));
        assert!(html.contains("Market Overview"));
        assert!(!html.contains("Price Prediction"));
    }

    #[tokio::test]
    async fn prediction_panel_appears_once_resolved() {
        let html = render(loaded(FetchState::Loaded(PredictionResult {
            predicted_price: 5500000.0,
            predicted_change_percent: 3.5,
        })))
        .await;
        assert!(html.contains("Price Prediction"));
        assert!(html.contains("5,500,000"));
        assert!(html.contains("+3.50%"));
        assert!(html.contains("Strong Buy Signal"));
    }

    #[tokio::test]
    async fn sell_and_hold_signals() {
        let sell = render(loaded(FetchState::Loaded(PredictionResult {
            predicted_price: 1.0,
            predicted_change_percent: -5.0,
        })))
        .await;
        assert!(sell.contains("Strong Sell Signal"));
        assert!(sell.contains("-5.00%"));

        let hold = render(loaded(FetchState::Loaded(PredictionResult {
            predicted_price: 1.0,
            predicted_change_percent: 2.0,
        })))
        .await;
        assert!(hold.contains("Hold Position"));
    }

    #[tokio::test]
    async fn failed_prediction_omits_the_panel() {
        let html = render(loaded(FetchState::Failed("connection refused".to_string()))).await;
        assert!(html.contains("Bitcoin"));
        assert!(!html.contains("Price Prediction"));
        assert!(!html.contains("connection refused"));
    }

    #[tokio::test]
    async fn new_route_id_shows_loading_before_reset() {
        let html = render_for(
            "ethereum".to_string(),
            loaded(FetchState::Loaded(PredictionResult {
                predicted_price: 1.0,
                predicted_change_percent: 3.0,
            })),
        )
        .await;
        assert!(html.contains("progressbar"));
        assert!(!html.contains("Bitcoin"));
        assert!(!html.contains("Price Prediction"));
    }

    #[tokio::test]
    async fn failed_metadata_shows_an_error() {
        let html = render(CoinPageState {
            id: "nocoin".to_string(),
            coin: FetchState::Failed("nocoin answered 404 Not Found".to_string()),
            prediction: FetchState::Loading,
        })
        .await;
        assert!(html.contains("Could not load nocoin"));
        assert!(!html.contains("progressbar"));
    }
}
