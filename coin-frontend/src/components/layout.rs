use crate::currency::{Currency, CurrencyContext};
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(CurrencySelect)]
fn currency_select() -> Html {
    let Some(ctx) = use_context::<CurrencyContext>() else {
        return html! {};
    };

    let on_change = {
        let set_currency = ctx.set_currency.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                match Currency::from_code(&select.value()) {
                    Some(currency) => set_currency.emit(currency),
                    None => log::warn!("Unknown currency selected: {}", select.value()),
                }
            }
        })
    };

    html! {
        <select
            onchange={on_change}
            class="bg-blue-700 text-white border border-blue-300 rounded-md px-3 py-1 text-sm"
        >
            {Currency::ALL.into_iter().map(|currency| html! {
                <option
                    key={currency.code()}
                    value={currency.code()}
                    selected={currency == ctx.currency}
                >
                    {currency.code()}
                </option>
            }).collect::<Html>()}
        </select>
    }
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-gray-100">
            <nav class="bg-blue-600 shadow-lg">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="flex justify-between h-16">
                        <div class="flex items-center">
                            <Link<Route> to={Route::Home} classes="text-white text-xl font-bold">
                                {"Crypto Dashboard"}
                            </Link<Route>>
                        </div>
                        <div class="flex items-center space-x-4">
                            <Link<Route> to={Route::Home} classes="text-white hover:text-blue-200 px-3 py-2 rounded-md text-sm font-medium">
                                {"Home"}
                            </Link<Route>>
                            <CurrencySelect />
                        </div>
                    </div>
                </div>
            </nav>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {props.children.clone()}
            </main>
        </div>
    }
}
