use yew::prelude::*;

use crate::config;

/// The Spline scene, rendered by the `<spline-viewer>` element that
/// index.html loads. Nothing here knows what is inside it.
#[function_component(Scene)]
pub fn scene() -> Html {
    html! {
        <div class="scene-frame">
            <div class="scene-inner">
                <spline-viewer url={config::SCENE_URL} class="scene-viewer"></spline-viewer>
                <div class="scene-overlay"></div>
            </div>
        </div>
    }
}
