use wasm_bindgen::prelude::wasm_bindgen;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod currency;
mod format;
mod hooks;
mod pages;
mod services;
mod signal;
mod state;
mod types;

use components::layout::Layout;
use currency::CurrencyProvider;
use pages::{coin::CoinPage, home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/coins/:id")]
    Coin { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Coin { id } => html! { <CoinPage {id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <CurrencyProvider>
                <Layout>
                    <Switch<Route> render={switch} />
                </Layout>
            </CurrencyProvider>
        </BrowserRouter>
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    yew::Renderer::<App>::new().render();
}
