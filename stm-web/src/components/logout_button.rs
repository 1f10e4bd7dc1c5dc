use leptos::ev::MouseEvent;
use leptos::*;
use log::debug;
use wasm_bindgen_futures::spawn_local;

use super::HeaderView;

#[component]
pub fn LogoutButton(header_view: HeaderView) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        debug!("Logging out");
        let header_view = header_view.clone();
        spawn_local(async move {
            header_view.logout().await;
        });
    };

    view! {
        <button
            class="text-red-500 hover:text-red-700 font-mono font-bold"
            on:click=on_click
        >
            "Log Out"
        </button>
    }
}
