//! Login page: username, password and role selection.
//!
//! The selected role is sent as a hint; where the user lands afterwards is
//! decided by the role the backend returns.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use session::Role;
use session::routes::LOGIN_PATH;

use crate::state::login::LoginFormState;
use crate::util::guard::{Navigation, resolve};
use crate::util::storage::AppSessionStore;

/// Pause between the success message and the redirect.
pub const LANDING_DELAY_MS: u64 = 1000;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<AppSessionStore>();
    let navigate = use_navigate();

    // Already signed in: go straight to the role's landing page.
    if let Navigation::Redirect(to) = resolve(&store, LOGIN_PATH) {
        return view! { <Redirect path=to/> }.into_any();
    }

    let form = RwSignal::new(LoginFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        form.update(|f| request = f.begin_submit());
        let Some(request) = request else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&store, &request).await {
                    Ok(landing) => {
                        form.update(LoginFormState::succeed);
                        gloo_timers::future::sleep(std::time::Duration::from_millis(LANDING_DELAY_MS)).await;
                        navigate(&landing, NavigateOptions::default());
                    }
                    Err(err) => form.update(|f| f.fail(&err)),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, &store, &navigate);
        }
    };

    let role_options = Role::ALL
        .into_iter()
        .map(|role| {
            view! {
                <label class="login-role">
                    <input
                        type="radio"
                        name="rol"
                        value=role.as_str()
                        prop:checked=move || form.with(|f| f.rol == Some(role))
                        on:change=move |_| form.update(|f| f.rol = Some(role))
                    />
                    {role.as_str()}
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Bienvenido a SmartCar"</h1>
                <p class="login-card__subtitle">"Inicia sesión para continuar"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="usuario">"Usuario"</label>
                    <input
                        id="usuario"
                        class="login-input"
                        type="text"
                        placeholder="Ingresa tu usuario"
                        prop:value=move || form.with(|f| f.usuario.clone())
                        on:input=move |ev| form.update(|f| f.usuario = event_target_value(&ev))
                    />
                    <label class="login-label" for="clave">"Contraseña"</label>
                    <input
                        id="clave"
                        class="login-input"
                        type="password"
                        placeholder="Ingresa tu contraseña"
                        prop:value=move || form.with(|f| f.clave.clone())
                        on:input=move |ev| form.update(|f| f.clave = event_target_value(&ev))
                    />
                    <div class="login-roles">{role_options}</div>
                    <button class="login-button" type="submit" disabled=move || form.with(|f| f.busy)>
                        {move || form.with(LoginFormState::button_label)}
                    </button>
                    {move || {
                        form.with(|f| f.alert.clone())
                            .map(|alert| view! { <div class=alert.css_class()>{alert.text.clone()}</div> })
                    }}
                </form>
            </div>
        </div>
    }
    .into_any()
}
