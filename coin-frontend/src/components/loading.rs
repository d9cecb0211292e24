use yew::prelude::*;

#[function_component(LoadingBar)]
pub fn loading_bar() -> Html {
    html! {
        <div role="progressbar" class="w-full h-1 overflow-hidden bg-yellow-200">
            <div class="h-full w-1/3 bg-yellow-400 animate-pulse"></div>
        </div>
    }
}
