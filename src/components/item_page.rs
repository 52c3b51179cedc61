//! Item detail page.
//!
//! Drives the `/itens/:id` screen through [`DetailState`]: load keyed by
//! the route param, then the edit/save and remove sub-flows. An absent or
//! non-numeric id attempts no load at all.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use itens_client::Item;

use crate::components::ItemForm;
use crate::services;
use crate::state::DetailState;

#[component]
pub fn ItemPage() -> impl IntoView {
    let params = use_params_map();
    let item_id = move || params.with(|p| p.get("id").and_then(|raw| raw.parse::<u32>().ok()));

    let state = RwSignal::new(DetailState::Loading);
    let (novo_nome, set_novo_nome) = signal(String::new());
    let (nova_descricao, set_nova_descricao) = signal(String::new());

    Effect::new(move |_| {
        if let Some(id) = item_id() {
            spawn_local(async move {
                match services::read(id).await {
                    Ok(item) => state.update(|s| s.load_ok(item)),
                    Err(err) => {
                        web_sys::console::warn_1(&format!("carregar item {id}: {err}").into());
                        state.update(|s| s.load_err());
                    }
                }
            });
        }
    });

    // Seed the form from the held item.
    let editar = move |_| {
        if let Some(item) = state.with(|s| s.item().cloned()) {
            set_novo_nome.set(item.nome);
            set_nova_descricao.set(item.descricao);
            state.update(|s| s.edit());
        }
    };

    let salvar = move |()| {
        state.update(|s| s.begin_save());
        match item_id() {
            Some(id) => {
                let novo_item = Item {
                    id,
                    nome: novo_nome.get(),
                    descricao: nova_descricao.get(),
                };
                spawn_local(async move {
                    match services::update(&novo_item).await {
                        Ok(()) => state.update(|s| s.save_ok(novo_item)),
                        Err(err) => {
                            web_sys::console::warn_1(&format!("salvar item {id}: {err}").into());
                            state.update(|s| s.save_err());
                        }
                    }
                });
            }
            None => state.update(|s| s.save_err()),
        }
    };

    let cancelar = move |()| state.update(|s| s.cancel());

    let remover = move |_| {
        state.update(|s| s.begin_remove());
        match item_id() {
            Some(id) => spawn_local(async move {
                match services::remove(id).await {
                    Ok(()) => state.update(|s| s.remove_ok()),
                    Err(err) => {
                        web_sys::console::warn_1(&format!("remover item {id}: {err}").into());
                        state.update(|s| s.remove_err());
                    }
                }
            }),
            None => state.update(|s| s.remove_err()),
        }
    };

    let navigate = StoredValue::new(use_navigate());
    let voltar = move |_| navigate.with_value(|nav| nav("/itens", Default::default()));

    view! {
        <Show when=move || state.with(|s| matches!(s, DetailState::Loading))>
            <p>"Carregando..."</p>
        </Show>

        <Show when=move || state.with(|s| matches!(s, DetailState::LoadError))>
            <p class="error">"ERRO ao tentar carregar."</p>
        </Show>

        <Show when=move || state.with(|s| matches!(s, DetailState::Saving { .. }))>
            <p>"Salvando..."</p>
        </Show>

        <Show when=move || state.with(|s| matches!(s, DetailState::Saved { .. }))>
            <p class="success">"SUCESSO em salvar!"</p>
        </Show>

        <Show when=move || state.with(|s| matches!(s, DetailState::SaveError { .. }))>
            <p class="error">"ERRO ao tentar salvar."</p>
        </Show>

        <Show when=move || state.with(|s| matches!(s, DetailState::Removing { .. }))>
            <p>"Removendo..."</p>
        </Show>

        <Show when=move || state.with(|s| matches!(s, DetailState::RemoveError { .. }))>
            <p class="error">"ERRO ao tentar remover."</p>
        </Show>

        <Show when=move || state.with(|s| matches!(s, DetailState::Removed))>
            <p class="success">"SUCESSO em remover!"</p>
            <button on:click=voltar>"Voltar"</button>
        </Show>

        <Show when=move || state.with(DetailState::shows_item)>
            <h1>{move || state.with(|s| s.item().map(|item| item.nome.clone()))}</h1>
            <p>{move || state.with(|s| s.item().map(|item| item.descricao.clone()))}</p>
            <div>
                <button on:click=editar>"Editar"</button>
                <button on:click=remover>"Remover"</button>
            </div>
        </Show>

        <Show when=move || state.with(DetailState::shows_form)>
            <ItemForm
                nome=novo_nome
                set_nome=set_novo_nome
                descricao=nova_descricao
                set_descricao=set_nova_descricao
                on_salvar=salvar
                on_cancelar=cancelar
            />
        </Show>
    }
}
