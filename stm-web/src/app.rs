use leptos::*;
use leptos_meta::*;

use crate::components::Header;
use crate::vars::{APP_DISPLAY_NAME, APP_NAME};
use crate::GlobalState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(GlobalState::default());
    log::debug!("Starting {}", APP_NAME);

    view! {
        <Stylesheet id=APP_NAME href="/pkg/tailwind.css"/>
        <Title text=APP_DISPLAY_NAME/>
        <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico"/>
        <div class="my-0 mx-auto px-8 max-w-7xl text-left">
            <Header />
            <main></main>
        </div>
    }
}
