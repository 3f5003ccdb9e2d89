use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::waitlist_form::WaitlistForm;
use crate::tagline::Tagline;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub theme: Theme,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let alternate = use_bool_toggle(false);
    let tagline = Tagline::from_toggle(*alternate);
    let [first, second] = tagline.lines();

    let toggle_tagline = {
        let alternate = alternate.clone();
        Callback::from(move |_: MouseEvent| {
            alternate.toggle();
        })
    };

    html! {
        <div class="hero-copy">
            <h1 class="hero-title">
                {first}
                <br />
                {second}
            </h1>
            if props.theme.has_tagline_toggle() {
                <button type="button" class="tagline-toggle" onclick={toggle_tagline}>
                    {"switch tagline"}
                </button>
            }
            <p class="hero-subtitle">
                {"the network for the few. signal over noise. curated connections, verified identity, and access that moves quietly."}
            </p>
            <WaitlistForm />
        </div>
    }
}
