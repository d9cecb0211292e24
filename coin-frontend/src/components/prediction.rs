use crate::currency::use_currency;
use crate::format::{format_number, signed_percent};
use crate::signal::{change_color, Signal};
use crate::types::PredictionResult;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PredictionPanelProps {
    pub prediction: PredictionResult,
}

#[function_component(PredictionPanel)]
pub fn prediction_panel(props: &PredictionPanelProps) -> Html {
    let currency = use_currency();
    let change = props.prediction.predicted_change_percent;
    let signal = Signal::from_change(change);

    html! {
        <div class="flex flex-col gap-2 p-4 mt-5 border border-yellow-400 rounded-lg">
            <h5 class="text-2xl font-bold mb-5">{"Price Prediction"}</h5>
            <span class="flex items-center">
                <h6 class="text-xl">
                    {"Predicted Price: "}{currency.symbol()}{" "}
                    {format_number(props.prediction.predicted_price)}
                </h6>
            </span>
            <span class="flex items-center">
                <h6 class="text-xl font-medium" style={format!("color: {};", change_color(change))}>
                    {"Expected Change: "}{signed_percent(change)}
                </h6>
            </span>
            <h6 class="text-xl mt-2 px-4 py-2 rounded font-bold text-center" style={signal.style()}>
                {signal.label()}
            </h6>
        </div>
    }
}
