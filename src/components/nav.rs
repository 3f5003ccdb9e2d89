use yew::prelude::*;

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <header class="top-nav">
            <div class="nav-brand">
                <div class="nav-logo-mark"></div>
                <span class="nav-logo">{"paired"}</span>
            </div>
            <div class="nav-badge">{"private beta"}</div>
        </header>
    }
}
