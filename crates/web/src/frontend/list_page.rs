//! `/products`: searchable, paginated product table with delete confirmation.

use leptos::*;
use leptos_router::*;

use prodcat_client::{HttpProductApi, ProductApi};
use prodcat_products::Product;

use crate::frontend::components::{Modal, ProductActions, SkeletonTable};
use crate::list::{LoadOutcome, PAGE_SIZE_OPTIONS, ProductListState};

const DISPLAY_DATE: &str = "%d/%m/%Y";

#[component]
pub fn ProductListPage() -> impl IntoView {
    let api = store_value(expect_context::<HttpProductApi>());
    let state = create_rw_signal(ProductListState::new());

    spawn_local(async move {
        state.update(ProductListState::begin_load);
        let result = api.get_value().list_products().await;
        let outcome = state.try_update(|s| s.apply_load(result));
        if let Some(LoadOutcome::Loaded {
            hide_loading_after, ..
        }) = outcome
        {
            set_timeout(
                move || state.update(ProductListState::finish_loading),
                hide_loading_after,
            );
        }
    });

    let confirm = move |_: ev::MouseEvent| {
        let Some(id) = state.try_update(ProductListState::begin_delete).flatten() else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            let result = api.delete_product(&id).await;
            state.update(|s| {
                s.apply_delete(&id, result);
            });
        });
    };

    let rows = move || {
        state.with(|s| s.visible().into_iter().cloned().collect::<Vec<Product>>())
    };

    view! {
        <section class="product-list">
            <div class="toolbar">
                <input
                    type="search"
                    class="search"
                    placeholder="Search..."
                    prop:value=move || state.with(|s| s.search_term().to_string())
                    on:input=move |ev| state.update(|s| s.set_search_term(event_target_value(&ev)))
                />
                <A href="/products/add" class="btn btn-primary">"Agregar"</A>
            </div>

            <Show
                when=move || !state.with(ProductListState::is_loading)
                fallback=|| view! { <SkeletonTable/> }
            >
                <table class="products">
                    <thead>
                        <tr>
                            <th>"Logo"</th>
                            <th>"Nombre del producto"</th>
                            <th>"Descripción"</th>
                            <th>"Fecha de liberación"</th>
                            <th>"Fecha de reestructuración"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|p| p.id.clone()
                            children=move |product: Product| {
                                let target = product.clone();
                                view! {
                                    <tr>
                                        <td><img class="logo" src=product.logo.clone() alt=product.name.clone()/></td>
                                        <td>{product.name.clone()}</td>
                                        <td>{product.description.clone()}</td>
                                        <td>{product.date_release.format(DISPLAY_DATE).to_string()}</td>
                                        <td>{product.date_revision.format(DISPLAY_DATE).to_string()}</td>
                                        <td>
                                            <ProductActions
                                                product=product
                                                on_delete=move |_| state.update(|s| s.confirm_delete(target.clone()))
                                            />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                {move || {
                    state
                        .with(|s| s.empty_state_message())
                        .map(|msg| view! { <p class="empty-state">{msg}</p> })
                }}
            </Show>

            <footer class="list-footer">
                <span>{move || format!("{} Resultados", state.with(ProductListState::total_results))}</span>
                <div class="pager">
                    <button type="button" on:click=move |_| state.update(ProductListState::previous_page)>"‹"</button>
                    <span>
                        {move || state.with(|s| format!("{} / {}", s.current_page(), s.page_count()))}
                    </span>
                    <button type="button" on:click=move |_| state.update(ProductListState::next_page)>"›"</button>
                </div>
                <select on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        state.update(|s| s.set_page_size(size));
                    }
                }>
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|size| {
                            let size = *size;
                            view! {
                                <option
                                    value=size.to_string()
                                    prop:selected=move || state.with(|s| s.page_size() == size)
                                >
                                    {size}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </footer>

            {move || {
                state
                    .with(|s| s.pending_delete().map(|p| p.name.clone()))
                    .map(|name| {
                        view! {
                            <Modal on_close=move |_| state.update(ProductListState::cancel_delete)>
                                <p>{format!("¿Estás seguro de eliminar el producto {name}?")}</p>
                                <div class="modal-actions">
                                    <button
                                        type="button"
                                        class="btn btn-secondary"
                                        on:click=move |_| state.update(ProductListState::cancel_delete)
                                    >
                                        "Cancelar"
                                    </button>
                                    <button
                                        type="button"
                                        class="btn btn-primary"
                                        disabled=move || state.with(ProductListState::is_deleting)
                                        on:click=confirm
                                    >
                                        "Confirmar"
                                    </button>
                                </div>
                            </Modal>
                        }
                    })
            }}
        </section>
    }
}
