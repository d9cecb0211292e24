use crate::services::{CoinService, PredictionService};
use crate::state::{CoinPageAction, CoinPageState, FetchState};
use crate::types::{CoinDetail, PredictionResult};
use std::fmt::Display;
use std::future::Future;
use yew::prelude::*;

/// Resets the page to `id`, then fetches metadata and, once that settles
/// either way, the prediction. Each result is dispatched tagged with `id`.
pub async fn load_coin_page<C, CF, CE, P, PF, PE, D>(
    id: String,
    get_coin: C,
    predict: P,
    dispatch: D,
) where
    C: FnOnce(String) -> CF,
    CF: Future<Output = Result<CoinDetail, CE>>,
    CE: Display,
    P: FnOnce(String) -> PF,
    PF: Future<Output = Result<PredictionResult, PE>>,
    PE: Display,
    D: Fn(CoinPageAction),
{
    dispatch(CoinPageAction::Reset(id.clone()));

    let coin: FetchState<CoinDetail> = get_coin(id.clone())
        .await
        .inspect(|_| log::info!("Loaded coin metadata for {}", id))
        .inspect_err(|e| log::error!("Error fetching coin {}: {}", id, e))
        .into();
    dispatch(CoinPageAction::Coin {
        id: id.clone(),
        state: coin,
    });

    let prediction: FetchState<PredictionResult> = predict(id.clone())
        .await
        .inspect(|p| log::info!("Prediction for {}: {:.2}%", id, p.predicted_change_percent))
        .inspect_err(|e| log::error!("Error fetching prediction for {}: {}", id, e))
        .into();
    dispatch(CoinPageAction::Prediction {
        id,
        state: prediction,
    });
}

/// Loads the coin page for `id` whenever it changes.
///
/// Failures are logged and stored as `FetchState::Failed`. Results that
/// arrive after the id changed are dropped by the reducer.
#[hook]
pub fn use_coin_page(id: String) -> UseReducerHandle<CoinPageState> {
    let state = {
        let id = id.clone();
        use_reducer(move || CoinPageState::new(id))
    };

    {
        let state = state.clone();
        use_effect_with(id, move |id| {
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(load_coin_page(
                id,
                |id| async move { CoinService::get_coin(&id).await },
                |id| async move { PredictionService::predict(&id).await },
                move |action| state.dispatch(action),
            ));

            || ()
        });
    }

    state
}
