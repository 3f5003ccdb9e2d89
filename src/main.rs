use log::info;
use yew::prelude::*;

mod components;
mod config;
mod signup;
mod tagline;
mod theme;

use components::{footer::Footer, hero::Hero, nav::Nav, scene::Scene};
use theme::Theme;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub theme: Theme,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let theme = props.theme;

    html! {
        <div class={theme.class()}>
            <style>{PAGE_STYLES}</style>
            if theme.has_glow() {
                <div class="glow" aria-hidden="true">
                    <div class="glow-top"></div>
                    <div class="glow-bottom"></div>
                </div>
            }
            <Nav />
            <main class="hero">
                <Hero {theme} />
                <Scene />
            </main>
            <Footer />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::get_log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    let theme = config::get_theme();
    info!("Starting paired landing ({:?} theme, backend {})", theme, config::get_backend_url());
    yew::Renderer::<App>::with_props(AppProps { theme }).render();
}

const PAGE_STYLES: &str = r#"
    * { box-sizing: border-box; }
    body { margin: 0; }

    .paired {
        min-height: 100vh;
        position: relative;
        overflow: hidden;
        font-family: Inter, system-ui, sans-serif;
        text-transform: lowercase;
    }
    .theme-dark { background: #000; color: #fff; }
    .theme-light { background: #fff; color: #18181b; }

    .glow { position: absolute; inset: 0; opacity: 0.6; pointer-events: none; }
    .glow-top, .glow-bottom { position: absolute; border-radius: 9999px; filter: blur(64px); }
    .glow-top {
        top: -8rem; left: -8rem; width: 24rem; height: 24rem;
        background: radial-gradient(circle at 30% 30%, rgba(56, 189, 248, 0.25), transparent 60%);
    }
    .glow-bottom {
        bottom: -6rem; right: -6rem; width: 28rem; height: 28rem;
        background: radial-gradient(circle at 70% 70%, rgba(168, 85, 247, 0.25), transparent 60%);
    }

    .top-nav {
        position: relative; z-index: 10;
        display: flex; align-items: center; justify-content: space-between;
        padding: 1.5rem 2.5rem;
    }
    .nav-brand { display: flex; align-items: center; gap: 0.75rem; }
    .nav-logo { font-size: 1.125rem; letter-spacing: 0.025em; }
    .nav-logo-mark { width: 1.75rem; height: 1.75rem; border-radius: 0.375rem; }
    .theme-dark .nav-logo-mark {
        background: linear-gradient(to bottom right, #22d3ee, #8b5cf6);
        box-shadow: 0 0 20px rgba(59, 130, 246, 0.6);
    }
    .theme-light .nav-logo-mark { background: #18181b; }
    .nav-badge { font-size: 0.875rem; color: #a1a1aa; }

    .hero {
        position: relative; z-index: 10;
        display: grid; gap: 2rem; align-items: center;
        padding: 1rem 2.5rem 6rem;
    }
    @media (min-width: 1024px) {
        .hero { grid-template-columns: 1fr 1fr; }
    }
    .hero-copy > * + * { margin-top: 1.5rem; }
    .hero-title {
        font-size: clamp(3rem, 7vw, 4.5rem);
        font-weight: 600; letter-spacing: -0.025em; line-height: 0.95;
        margin: 0;
    }
    .hero-subtitle { max-width: 36rem; color: #a1a1aa; }
    .theme-light .hero-subtitle { color: #52525b; }

    .tagline-toggle {
        background: none; border: 1px solid #e4e4e7; border-radius: 9999px;
        padding: 0.25rem 0.75rem; font-size: 0.75rem; color: #52525b;
        cursor: pointer; text-transform: lowercase;
    }
    .tagline-toggle:hover { border-color: #18181b; color: #18181b; }

    .waitlist-form { max-width: 28rem; }
    .input-shell { position: relative; }
    .input-glow {
        position: absolute; inset: 0; border-radius: 0.75rem;
        filter: blur(8px); opacity: 0.6; transition: opacity 0.2s;
    }
    .theme-dark .input-glow {
        background: linear-gradient(to right, rgba(6, 182, 212, 0.3), rgba(139, 92, 246, 0.3));
    }
    .input-shell:focus-within .input-glow { opacity: 0.9; }
    .input-row {
        position: relative; display: flex; overflow: hidden; border-radius: 0.75rem;
    }
    .theme-dark .input-row {
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
        backdrop-filter: blur(8px);
    }
    .theme-light .input-row { border: 1px solid #e4e4e7; }
    .input-row input {
        width: 100%; background: transparent; border: none; color: inherit;
        padding: 0.75rem 1rem; font-size: 0.875rem; text-transform: lowercase;
    }
    .input-row input:focus { outline: none; }
    .input-row button {
        padding: 0.75rem 1rem; font-size: 0.875rem; font-weight: 500;
        border: none; cursor: pointer; text-transform: lowercase; white-space: nowrap;
    }
    .theme-dark .input-row button {
        color: #fff; background: linear-gradient(to right, #06b6d4, #8b5cf6);
    }
    .theme-dark .input-row button:hover { background: linear-gradient(to right, #22d3ee, #a78bfa); }
    .theme-light .input-row button { color: #fff; background: #18181b; }
    .input-row button:disabled { opacity: 0.6; cursor: default; }

    .status-line { margin-top: 0.5rem; font-size: 0.875rem; }
    .status-line.muted { color: #a1a1aa; }
    .status-line.error { color: #fb7185; }
    .theme-light .status-line.error { color: #e11d48; }
    .eligibility-hint { margin-top: 0.5rem; font-size: 0.75rem; color: #71717a; }

    .scene-frame { position: relative; height: 480px; }
    @media (min-width: 640px) { .scene-frame { height: 560px; } }
    @media (min-width: 1024px) { .scene-frame { height: 640px; } }
    @media (min-width: 1280px) { .scene-frame { height: 720px; } }
    .scene-inner { position: absolute; inset: 0; border-radius: 1.5rem; overflow: hidden; }
    .theme-dark .scene-inner { border: 1px solid rgba(255, 255, 255, 0.1); }
    .theme-light .scene-inner { border: 1px solid #e4e4e7; }
    .scene-viewer { display: block; width: 100%; height: 100%; }
    .scene-overlay { position: absolute; inset: 0; pointer-events: none; }
    .theme-dark .scene-overlay {
        background: linear-gradient(to bottom, transparent, rgba(0, 0, 0, 0.1), rgba(0, 0, 0, 0.3));
    }

    .page-footer {
        position: relative; z-index: 10;
        padding: 0 2.5rem 2.5rem; font-size: 0.75rem; color: #71717a;
    }
"#;
