//! Application shell: router wiring for the two item screens.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::{ItemPage, ItensPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="container">
                <Routes fallback=|| view! { <p>"Página não encontrada."</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/itens"/> }/>
                    <Route path=path!("/itens") view=ItensPage/>
                    <Route path=path!("/itens/:id") view=ItemPage/>
                </Routes>
            </main>
        </Router>
    }
}
