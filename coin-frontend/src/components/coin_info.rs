use crate::currency::use_currency;
use crate::format::{format_number, signed_percent};
use crate::signal::change_color;
use crate::types::{CoinDetail, CurrencyMap};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CoinInfoProps {
    pub coin: CoinDetail,
}

#[function_component(CoinInfo)]
pub fn coin_info(props: &CoinInfoProps) -> Html {
    let currency = use_currency();
    let market = &props.coin.market_data;

    let money = |values: &CurrencyMap| {
        currency
            .pick(values)
            .map(|value| format!("{} {}", currency.symbol(), format_number(value)))
            .unwrap_or_else(|| "-".to_string())
    };

    let rows = [
        ("Symbol", props.coin.symbol.to_uppercase()),
        ("24h High", money(&market.high_24h)),
        ("24h Low", money(&market.low_24h)),
        ("24h Volume", money(&market.total_volume)),
    ];

    let updated = props
        .coin
        .last_updated
        .map(|ts| ts.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "-".to_string());

    html! {
        <div class="w-full lg:w-[70%] flex flex-col mt-6 p-6 lg:p-10">
            <h3 class="text-2xl font-bold mb-6">{"Market Overview"}</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {rows.into_iter().map(|(label, value)| html! {
                    <div key={label} class="bg-white shadow rounded-lg p-4 flex justify-between">
                        <span class="text-gray-600">{label}</span>
                        <span class="font-medium">{value}</span>
                    </div>
                }).collect::<Html>()}
                <div class="bg-white shadow rounded-lg p-4 flex justify-between">
                    <span class="text-gray-600">{"24h Change"}</span>
                    {
                        match market.price_change_percentage_24h {
                            Some(change) => html! {
                                <span class="font-medium" style={format!("color: {};", change_color(change))}>
                                    {signed_percent(change)}
                                </span>
                            },
                            None => html! { <span class="font-medium">{"-"}</span> },
                        }
                    }
                </div>
                <div class="bg-white shadow rounded-lg p-4 flex justify-between">
                    <span class="text-gray-600">{"Last Updated"}</span>
                    <span class="font-medium">{updated}</span>
                </div>
            </div>
        </div>
    }
}
