//! Site A login page, the target for users without a live token.
//!
//! The sign-in flow itself belongs to the identity provider; this page only
//! explains why the user landed here and where to go next.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

fn login_notice(target_site: &str) -> String {
    format!("Sign in to Site A to continue to {target_site}.")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Site A"</h1>
                <p class="login-card__subtitle">{login_notice("Site B")}</p>
                <a href="/" class="login-button">
                    "Back to Site A"
                </a>
            </div>
        </div>
    }
}
