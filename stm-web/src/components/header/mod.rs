mod header_view;

use leptos::*;
use log::{error, warn};
pub use header_view::HeaderView;
use wasm_bindgen_futures::spawn_local;

use super::LogoutButton;
use crate::vars::{
    APP_DISPLAY_NAME, HOME_URL, LOGIN_URL, NAV_LINKS, REGISTER_URL,
};
use crate::GlobalState;

const LINK_CLASS: &str = "hover:text-green-500 mr-4 font-mono font-bold";

#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().unwrap_or_else(|| {
        warn!("No GlobalState in context, using browser session");
        GlobalState::default()
    });

    let header_view = HeaderView::new(state.session(), state.host());
    let is_logged_in = header_view.is_logged_in();

    // displays as logged out until the session check settles
    spawn_local({
        let header_view = header_view.clone();
        async move {
            if let Err(err) = header_view.initialize().await {
                error!("Failed to read session state: {}", err);
            }
        }
    });

    let nav_links = NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <a href=link.href class=LINK_CLASS>{link.label}</a>
            }
        })
        .collect_view();

    view! {
        <nav class="py-2 px-4 text-lg font-medium h-24 bg-black">
            <a
                href=HOME_URL
                class="mb-4 text-4xl font-sans font-bold text-sky-200 inline-block tracking-widest"
            >
                {APP_DISPLAY_NAME}
            </a>
            <div class="flex items-end text-white">
                {nav_links}
                <div class="ml-auto">
                    { move ||
                        if is_logged_in.get() {
                            view! {
                                <LogoutButton header_view=header_view.clone()/>
                            }.into_view()
                        } else {
                            view! {
                                <a href=LOGIN_URL class=LINK_CLASS>"Log In"</a>
                                <a href=REGISTER_URL class=LINK_CLASS>"Register"</a>
                            }.into_view()
                        }
                    }
                </div>
            </div>
        </nav>
    }
}
