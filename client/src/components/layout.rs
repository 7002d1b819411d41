//! Role layout: header with the signed-in user, role menu, and logout.
//!
//! DESIGN
//! ======
//! Logout goes through `session::auth::logout` so clearing storage and
//! the login redirect happen the same way everywhere.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use session::Session;
use session::routes::menu;

use crate::util::storage::AppSessionStore;

/// Chrome shared by every protected view.
#[component]
pub fn RoleLayout(current: Session, children: Children) -> impl IntoView {
    let store = expect_context::<AppSessionStore>();
    let navigate = use_navigate();
    let on_logout = move |_| {
        let to = session::auth::logout(&store);
        navigate(to, NavigateOptions::default());
    };

    let role = current.role();
    let entries = menu(role);

    view! {
        <div class="panel">
            <header class="panel__header">
                <span class="panel__brand">"SmartCar"</span>
                <span class="panel__user">
                    <strong>{current.user.nombre.clone()}</strong>
                    <span class="panel__role">{role.as_str()}</span>
                </span>
                <button class="panel__logout" type="button" on:click=on_logout>
                    "Cerrar sesión"
                </button>
            </header>
            <nav class="panel__menu">
                {entries
                    .into_iter()
                    .map(|entry| view! { <A href=entry.path>{entry.label}</A> })
                    .collect_view()}
            </nav>
            <main class="panel__content">{children()}</main>
        </div>
    }
}
