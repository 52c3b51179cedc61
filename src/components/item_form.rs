//! Shared item form.
//!
//! The nome/descricao fieldset used by both the list page's create flow and
//! the detail page's edit flow. The owning page holds the field signals and
//! decides what submit means.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn ItemForm(
    nome: ReadSignal<String>,
    set_nome: WriteSignal<String>,
    descricao: ReadSignal<String>,
    set_descricao: WriteSignal<String>,
    #[prop(into)] on_salvar: Callback<()>,
    #[prop(into)] on_cancelar: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="item-form"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                on_salvar.run(());
            }
        >
            <div>
                <label>
                    "Nome:"
                    <input
                        type="text"
                        prop:value=move || nome.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_nome.set(input.value());
                        }
                    />
                </label>
            </div>
            <div>
                <label>
                    "Descrição:"
                    <textarea
                        prop:value=move || descricao.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_descricao.set(area.value());
                        }
                    ></textarea>
                </label>
            </div>
            <div>
                <button type="submit">"Salvar"</button>
                <button type="button" on:click=move |_| on_cancelar.run(())>"Cancelar"</button>
            </div>
        </form>
    }
}
