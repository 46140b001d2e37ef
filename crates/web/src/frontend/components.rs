//! Shared presentational components.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use prodcat_products::Product;

use crate::menu::{ActionsMenu, MenuAction};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <A href="/products" class="brand">"BANCO"</A>
        </header>
    }
}

/// Placeholder rows shown while the product list loads.
#[component]
pub fn SkeletonTable(
    #[prop(default = 5)] rows: usize,
    #[prop(default = 6)] columns: usize,
) -> impl IntoView {
    view! {
        <table class="skeleton-table" aria-busy="true">
            <tbody>
                {(0..rows)
                    .map(|_| {
                        view! {
                            <tr>
                                {(0..columns)
                                    .map(|_| view! { <td><span class="skeleton"></span></td> })
                                    .collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// Overlay; clicking the backdrop emits `on_close`.
#[component]
pub fn Modal(#[prop(into)] on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.call(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

/// Row dropdown with Edit / Delete. Closes on any click outside it.
#[component]
pub fn ProductActions(product: Product, #[prop(into)] on_delete: Callback<()>) -> impl IntoView {
    let menu = create_rw_signal(ActionsMenu::default());
    let root = create_node_ref::<html::Div>();
    let edit_href = format!("/products/edit/{}", product.id);

    let listener = window_event_listener(ev::click, move |ev| {
        let inside = match (root.get_untracked(), ev.target()) {
            (Some(el), Some(target)) => el.contains(target.dyn_ref::<web_sys::Node>()),
            _ => false,
        };
        if !inside {
            menu.update(ActionsMenu::close);
        }
    });
    on_cleanup(move || listener.remove());

    view! {
        <div class="product-actions" node_ref=root>
            <button type="button" class="kebab" on:click=move |_| menu.update(ActionsMenu::toggle)>
                "⋮"
            </button>
            <Show when=move || menu.with(ActionsMenu::is_open)>
                <ul class="dropdown">
                    <li on:click=move |_| menu.update(|m| {
                        m.select(MenuAction::Edit);
                    })>
                        <A href=edit_href.clone()>"Editar"</A>
                    </li>
                    <li>
                        <button
                            type="button"
                            on:click=move |_| {
                                menu.update(|m| {
                                    m.select(MenuAction::Delete);
                                });
                                on_delete.call(());
                            }
                        >
                            "Eliminar"
                        </button>
                    </li>
                </ul>
            </Show>
        </div>
    }
}
