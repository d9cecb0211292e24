use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const FEATURED_COINS: [(&str, &str); 6] = [
    ("bitcoin", "Bitcoin"),
    ("ethereum", "Ethereum"),
    ("solana", "Solana"),
    ("cardano", "Cardano"),
    ("dogecoin", "Dogecoin"),
    ("ripple", "XRP"),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="space-y-6">
            <div class="bg-white shadow rounded-lg p-6">
                <h1 class="text-3xl font-bold text-gray-900 mb-4">
                    {"Crypto Dashboard"}
                </h1>
                <p class="text-gray-600 mb-6">
                    {"Market statistics and model price predictions for popular cryptocurrencies.
                    Pick a coin to see its rank, price, market cap and a buy / sell / hold signal."}
                </p>

                <div class="grid grid-cols-2 md:grid-cols-3 gap-6">
                    {FEATURED_COINS.into_iter().map(|(id, name)| html! {
                        <Link<Route>
                            key={id}
                            to={Route::Coin { id: id.to_string() }}
                            classes="bg-blue-50 p-4 rounded-lg text-lg font-semibold text-blue-900 hover:bg-blue-100"
                        >
                            {name}
                        </Link<Route>>
                    }).collect::<Html>()}
                </div>
            </div>

            <div class="bg-white shadow rounded-lg p-6">
                <h2 class="text-xl font-semibold text-gray-900 mb-4">{"Signals"}</h2>
                <div class="text-gray-600 space-y-2">
                    <p>{"• Strong Buy: predicted change above +2%"}</p>
                    <p>{"• Strong Sell: predicted change below -2%"}</p>
                    <p>{"• Hold: anything in between"}</p>
                </div>
            </div>
        </div>
    }
}
