use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, Document, HtmlScriptElement, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod lead {
    pub mod api;
    pub mod form;
    pub mod model;
    pub mod wizard;
}
mod pages {
    pub mod audit_process;
    pub mod disclaimer;
    pub mod faq;
    pub mod home;
}

use pages::{audit_process::AuditProcess, disclaimer::Disclaimer, faq::Faq, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/audit-process")]
    AuditProcess,
    #[at("/faq")]
    Faq,
    #[at("/disclaimer")]
    Disclaimer,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::AuditProcess => {
            info!("Rendering Audit Process page");
            html! { <AuditProcess /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
        Route::Disclaimer => {
            info!("Rendering Disclaimer page");
            html! { <Disclaimer /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 10);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
            {r#"
            .top-nav {
                position: sticky;
                top: 0;
                z-index: 50;
                background: #fff;
                border-bottom: 1px solid #e2e8f0;
            }
            .top-nav.scrolled { box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08); }
            .nav-content {
                max-width: 1100px;
                margin: 0 auto;
                height: 64px;
                padding: 0 1rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }
            .nav-logo {
                font-weight: 800;
                font-size: 1.15rem;
                color: #0f172a;
                text-decoration: none;
            }
            .nav-right { display: flex; align-items: center; gap: 1.5rem; }
            .nav-link {
                color: #475569;
                font-size: 0.9rem;
                font-weight: 500;
                text-decoration: none;
            }
            .nav-link:hover { color: #0f172a; }
            .burger-menu { display: none; background: none; border: none; cursor: pointer; }
            .burger-menu span {
                display: block;
                width: 22px;
                height: 2px;
                background: #0f172a;
                margin: 5px 0;
            }
            @media (max-width: 768px) {
                .burger-menu { display: block; }
                .nav-right {
                    display: none;
                    position: absolute;
                    top: 64px;
                    left: 0;
                    right: 0;
                    background: #fff;
                    border-bottom: 1px solid #e2e8f0;
                    flex-direction: column;
                    padding: 1rem;
                }
                .nav-right.mobile-menu-open { display: flex; }
            }
            "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Fleet Clarity"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::AuditProcess} classes="nav-link">
                            {"Audit Process"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Faq} classes="nav-link">
                            {"FAQ"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
            {r#"
            .site-footer {
                background: #0f172a;
                color: #94a3b8;
                padding: 3rem 1rem;
                text-align: center;
                font-size: 0.9rem;
            }
            .site-footer .agency { margin-bottom: 1rem; }
            .site-footer .fmcsa-note { opacity: 0.5; margin-bottom: 1rem; }
            .footer-links { display: flex; justify-content: center; gap: 1rem; margin-top: 1rem; }
            .footer-links a { color: #64748b; text-decoration: none; }
            .footer-links a:hover { color: #cbd5e1; }
            "#}
            </style>
            <p class="agency">{"The Data & AI Clarity Agency™"}</p>
            <p class="fmcsa-note">{"We use public FMCSA data for qualification. Not affiliated with the DOT."}</p>
            <div class="footer-links">
                <Link<Route> to={Route::Disclaimer}>{"Disclaimer"}</Link<Route>>
                <a href="#" class="termly-display-preferences">{"Consent Preferences"}</a>
            </div>
        </footer>
    }
}

fn inject_head_script(document: &Document, src: &str) {
    let head = match document.head() {
        Some(head) => head,
        None => return,
    };
    let script = document
        .create_element("script")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlScriptElement>().ok());
    if let Some(script) = script {
        script.set_src(src);
        let _ = script.set_attribute("async", "");
        let _ = head.append_child(&script);
    }
}

#[function_component]
fn App() -> Html {
    // Third-party scripts go into <head> once on mount. The URLs/IDs are
    // opaque config values, passed through untouched.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(document) = window().and_then(|w| w.document()) {
                    inject_head_script(&document, config::get_consent_script_url());
                    inject_head_script(
                        &document,
                        &format!(
                            "https://www.googletagmanager.com/gtm.js?id={}",
                            config::get_analytics_container_id()
                        ),
                    );
                }
                || ()
            },
            (),
        );
    }

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
