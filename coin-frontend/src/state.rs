use crate::types::{CoinDetail, PredictionResult};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for FetchState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => FetchState::Loaded(data),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }
}

/// Everything the coin page shows for one route id.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinPageState {
    pub id: String,
    pub coin: FetchState<CoinDetail>,
    pub prediction: FetchState<PredictionResult>,
}

impl CoinPageState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            coin: FetchState::Loading,
            prediction: FetchState::Loading,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CoinPageAction {
    /// The route id changed; forget everything fetched so far.
    Reset(String),
    Coin {
        id: String,
        state: FetchState<CoinDetail>,
    },
    Prediction {
        id: String,
        state: FetchState<PredictionResult>,
    },
}

impl Reducible for CoinPageState {
    type Action = CoinPageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CoinPageAction::Reset(id) => Rc::new(CoinPageState::new(id)),
            CoinPageAction::Coin { id, state } => {
                if id != self.id {
                    log::debug!("Dropping stale coin result for {} (showing {})", id, self.id);
                    return self;
                }
                Rc::new(CoinPageState {
                    coin: state,
                    ..(*self).clone()
                })
            }
            CoinPageAction::Prediction { id, state } => {
                if id != self.id {
                    log::debug!(
                        "Dropping stale prediction result for {} (showing {})",
                        id,
                        self.id
                    );
                    return self;
                }
                Rc::new(CoinPageState {
                    prediction: state,
                    ..(*self).clone()
                })
            }
        }
    }
}
