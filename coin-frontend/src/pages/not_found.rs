use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="bg-white shadow rounded-lg p-6 text-center">
            <h1 class="text-2xl font-bold text-gray-900 mb-4">{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                {"Back to the dashboard"}
            </Link<Route>>
        </div>
    }
}
