//! Site A landing page carrying the cross-site navigation menu.

use leptos::prelude::*;

use crate::components::navigation_menu::NavigationMenu;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Site A"</h1>
                <NavigationMenu/>
            </header>
        </div>
    }
}
