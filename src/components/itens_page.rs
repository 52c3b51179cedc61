//! Items list page.
//!
//! Drives the `/itens` screen: loads the collection once on mount, then
//! runs the create sub-flow, all through [`ListState`].

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use itens_client::ItemDraft;

use crate::components::ItemForm;
use crate::services;
use crate::state::ListState;

#[component]
pub fn ItensPage() -> impl IntoView {
    let state = RwSignal::new(ListState::Loading);
    let (nome, set_nome) = signal(String::new());
    let (descricao, set_descricao) = signal(String::new());

    // Load once on mount.
    Effect::new(move |_| {
        spawn_local(async move {
            match services::list_all().await {
                Ok(itens) => state.update(|s| s.load_ok(itens)),
                Err(err) => {
                    web_sys::console::warn_1(&format!("carregar itens: {err}").into());
                    state.update(|s| s.load_err());
                }
            }
        });
    });

    let novo = move |_| {
        set_nome.set(String::new());
        set_descricao.set(String::new());
        state.update(|s| s.new_item());
    };

    let salvar = move |()| {
        state.update(|s| s.begin_save());
        let draft = ItemDraft {
            nome: nome.get(),
            descricao: descricao.get(),
        };
        spawn_local(async move {
            match services::create(&draft).await {
                Ok(item) => state.update(|s| s.create_ok(item)),
                Err(err) => {
                    web_sys::console::warn_1(&format!("criar item: {err}").into());
                    state.update(|s| s.create_err());
                }
            }
        });
    };

    let cancelar = move |()| state.update(|s| s.cancel());

    view! {
        <Show when=move || state.with(|s| matches!(s, ListState::Loading))>
            <p>"Carregando..."</p>
        </Show>

        <Show when=move || state.with(|s| matches!(s, ListState::LoadError))>
            <p class="error">"ERRO ao tentar carregar."</p>
        </Show>

        <Show when=move || state.with(ListState::shows_itens)>
            <h1>"Itens"</h1>
            <ul class="itens">
                {move || {
                    state.with(|s| s.itens().map(<[_]>::to_vec)).map(|itens| {
                        itens
                            .into_iter()
                            .map(|item| {
                                let href = format!("/itens/{}", item.id);
                                view! { <li><A href=href>{item.nome.clone()}</A></li> }
                            })
                            .collect_view()
                    })
                }}
            </ul>
        </Show>

        <Show when=move || state.with(|s| matches!(s, ListState::Created { .. }))>
            <p class="success">"SUCESSO em criar."</p>
        </Show>

        <Show when=move || state.with(ListState::shows_new_button)>
            <button on:click=novo>"Novo"</button>
        </Show>

        <Show when=move || state.with(ListState::shows_form)>
            <ItemForm
                nome=nome
                set_nome=set_nome
                descricao=descricao
                set_descricao=set_descricao
                on_salvar=salvar
                on_cancelar=cancelar
            />
        </Show>

        <Show when=move || state.with(|s| matches!(s, ListState::Saving { .. }))>
            <p>"Salvando..."</p>
        </Show>

        <Show when=move || state.with(|s| matches!(s, ListState::CreateError { .. }))>
            <p class="error">"ERRO ao tentar criar."</p>
        </Show>
    }
}
