use crate::components::{description::CoinDescription, prediction::PredictionPanel};
use crate::currency::use_currency;
use crate::format::{format_number, market_cap_display};
use crate::types::{CoinDetail, PredictionResult};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub coin: CoinDetail,
    #[prop_or_default]
    pub prediction: Option<PredictionResult>,
}

fn stat_row(label: &str, value: String) -> Html {
    html! {
        <span class="flex">
            <h5 class="text-2xl font-bold mb-5">{label}</h5>
            {"\u{a0} \u{a0}"}
            <h5 class="text-2xl">{value}</h5>
        </span>
    }
}

#[function_component(CoinSidebar)]
pub fn coin_sidebar(props: &SidebarProps) -> Html {
    let currency = use_currency();
    let coin = &props.coin;
    let market = &coin.market_data;

    let rank = coin
        .market_cap_rank
        .map(|rank| format_number(rank.into()))
        .unwrap_or_else(|| "-".to_string());
    let price = currency
        .pick(&market.current_price)
        .map(|price| format!("{} {}", currency.symbol(), format_number(price)))
        .unwrap_or_else(|| "-".to_string());
    let market_cap = currency
        .pick(&market.market_cap)
        .map(|cap| format!("{} {}", currency.symbol(), market_cap_display(cap)))
        .unwrap_or_else(|| "-".to_string());

    html! {
        <div class="w-full lg:w-[30%] flex flex-col items-center mt-6 lg:border-r-2 border-gray-400">
            <img src={coin.image.large.clone()} alt={coin.name.clone()} height="200" class="mb-5" />
            <h3 class="text-5xl font-bold mb-5">{&coin.name}</h3>
            <CoinDescription text={coin.description.en.clone()} />
            <div class="self-start w-full p-6 pt-2">
                {stat_row("Rank:", rank)}
                {stat_row("Current Price:", price)}
                {stat_row("Market Cap:", market_cap)}

                if let Some(prediction) = props.prediction {
                    <PredictionPanel {prediction} />
                }
            </div>
        </div>
    }
}
