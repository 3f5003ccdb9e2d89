use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::signup::{self, FormAction, HttpTransport, SignupForm};

#[function_component(WaitlistForm)]
pub fn waitlist_form() -> Html {
    let form = use_reducer(SignupForm::default);

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.can_submit() {
                return;
            }

            let email = form.email.clone();
            form.dispatch(FormAction::Submit);
            info!("Submitting waitlist signup");

            let form = form.clone();
            spawn_local(async move {
                let result = signup::request_access(&HttpTransport, config::get_backend_url(), &email).await;
                form.dispatch(FormAction::Resolved(result));
            });
        })
    };

    html! {
        <form class="waitlist-form" {onsubmit}>
            <div class="input-shell">
                <div class="input-glow"></div>
                <div class="input-row">
                    <input
                        type="email"
                        required=true
                        placeholder="ivy league email"
                        value={form.email.clone()}
                        {oninput}
                    />
                    <button type="submit" disabled={form.status.is_loading()}>
                        {signup::button_label(&form.status)}
                    </button>
                </div>
            </div>
            {
                if let Some((message, tone)) = signup::status_line(&form.status) {
                    html! { <p class={tone.class()}>{message}</p> }
                } else {
                    html! {}
                }
            }
            <p class="eligibility-hint">{"only ivy league domains are eligible for now."}</p>
        </form>
    }
}
