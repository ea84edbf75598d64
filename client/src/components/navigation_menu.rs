//! Dropdown for jumping from Site A to the other properties.
//!
//! SYSTEM CONTEXT
//! ==============
//! "Go to Site B" hands off to the session gate, which either sends the user
//! to Site A's login page or starts the identity provider redirect.

#[cfg(test)]
#[path = "navigation_menu_test.rs"]
mod navigation_menu_test;

use gate::RedirectConfig;
use leptos::prelude::*;

use crate::browser::browser_gate;

/// Entries listed in the dropdown, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    SiteB,
    Placeholder,
}

impl MenuEntry {
    pub const ALL: [Self; 2] = [Self::SiteB, Self::Placeholder];

    pub fn label(self) -> &'static str {
        match self {
            Self::SiteB => "Go to Site B",
            Self::Placeholder => "Other Site (Placeholder)",
        }
    }

    /// Static link target; `None` when the entry runs an action instead.
    pub fn href(self) -> Option<&'static str> {
        match self {
            Self::SiteB => None,
            Self::Placeholder => Some("#"),
        }
    }
}

fn dropdown_class(open: bool) -> &'static str {
    if open { "dropdown dropdown--open" } else { "dropdown" }
}

/// Navigation dropdown. Expects a [`RedirectConfig`] in context.
#[component]
pub fn NavigationMenu() -> impl IntoView {
    let config = expect_context::<RedirectConfig>();
    let open = RwSignal::new(false);

    let on_toggle = move |_| open.update(|o| *o = !*o);

    let entries = MenuEntry::ALL
        .into_iter()
        .map(|entry| match entry.href() {
            Some(href) => view! { <a href=href>{entry.label()}</a> }.into_any(),
            None => {
                let config = config.clone();
                let on_click = move |_| {
                    open.set(false);
                    browser_gate(config.clone()).initiate_site_b_transfer();
                };
                view! { <a on:click=on_click>{entry.label()}</a> }.into_any()
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=move || dropdown_class(open.get())>
            <button class="dropbtn" on:click=on_toggle>
                "Navigate to Other Sites"
            </button>
            <div class="dropdown-content">{entries}</div>
        </div>
    }
}
