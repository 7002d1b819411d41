use leptos::prelude::*;
use leptos_router::components::A;
use session::routes::LOGIN_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Página No Encontrada"</p>
            <A href=LOGIN_PATH>"Volver al inicio"</A>
        </div>
    }
}
