//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, not_found::NotFoundPage, section::SectionPage};
use crate::util::storage::session_store;

/// Root application component.
///
/// Provides the session store and sets up client-side routing. Every
/// protected path goes through `SectionPage`, which runs the route guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(session_store());

    view! {
        <Title text="SmartCar"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("admin") view=SectionPage/>
                <Route path=(StaticSegment("admin"), ParamSegment("view")) view=SectionPage/>
                <Route path=StaticSegment("vigilante") view=SectionPage/>
                <Route path=(StaticSegment("vigilante"), ParamSegment("view")) view=SectionPage/>
            </Routes>
        </Router>
    }
}
