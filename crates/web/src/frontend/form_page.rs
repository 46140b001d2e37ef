//! `/products/add` and `/products/edit/:id`.

use leptos::*;
use leptos_router::*;

use prodcat_client::{HttpProductApi, ProductApi};
use prodcat_core::{Field, today_local};
use prodcat_products::ProductId;

use crate::form::ProductFormState;

#[component]
pub fn ProductFormPage() -> impl IntoView {
    let api = store_value(expect_context::<HttpProductApi>());
    let params = use_params_map();
    let route_id = params.with_untracked(|p| p.get("id").cloned());

    let state = create_rw_signal(match route_id {
        Some(id) => ProductFormState::new_edit(ProductId::existing(id)),
        None => ProductFormState::new_create(),
    });
    // Errors on untouched empty fields only show up after a submit attempt.
    let show_errors = create_rw_signal(false);

    let load = move || {
        if !state.with_untracked(ProductFormState::is_edit) {
            return;
        }
        let api = api.get_value();
        spawn_local(async move {
            let result = api.list_products().await;
            state.update(|s| {
                s.apply_loaded(result);
            });
        });
    };
    load();

    // Identifier is checked on blur, like a form control with updateOn: blur.
    let check_id = move || {
        let Some(id) = state.try_update(ProductFormState::begin_id_check).flatten() else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            let result = api.verify_id(&id).await;
            state.update(|s| s.apply_id_check(&id, result));
        });
    };

    // Set from the click until the request is built, covering the id check await.
    let queued = create_rw_signal(false);
    let navigate = use_navigate();
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        show_errors.set(true);
        if queued.get_untracked() || state.with_untracked(ProductFormState::is_submitting) {
            return;
        }
        queued.set(true);

        let api = api.get_value();
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Some(id) = state.try_update(ProductFormState::begin_id_check).flatten() {
                let result = api.verify_id(&id).await;
                state.update(|s| s.apply_id_check(&id, result));
            }

            let today = today_local();
            let request = state.try_update(|s| s.begin_submit(today));
            queued.set(false);
            let Some(Ok(request)) = request else {
                return;
            };
            let result = request.send(&api).await;
            if let Some(Ok(_)) = state.try_update(|s| s.apply_submit(result)) {
                navigate("/products", Default::default());
            }
        });
    };

    let reset = move |_| {
        show_errors.set(false);
        if state.with_untracked(ProductFormState::is_edit) {
            load();
        } else {
            state.update(ProductFormState::clear);
        }
    };

    view! {
        <section class="product-form">
            <h1>{move || state.with(ProductFormState::title)}</h1>
            <form on:submit=submit>
                <div class="grid">
                    <FormField label="ID" field=Field::Id state=state show_errors=show_errors>
                        <input
                            id="id"
                            type="text"
                            prop:value=move || state.with(|s| s.draft().id.clone())
                            prop:disabled=move || state.with(ProductFormState::is_edit)
                            on:input=move |ev| state.update(|s| s.set_id(event_target_value(&ev)))
                            on:blur=move |_| check_id()
                        />
                    </FormField>
                    <FormField label="Nombre" field=Field::Name state=state show_errors=show_errors>
                        <input
                            id="name"
                            type="text"
                            prop:value=move || state.with(|s| s.draft().name.clone())
                            on:input=move |ev| state.update(|s| s.set_name(event_target_value(&ev)))
                        />
                    </FormField>
                    <FormField label="Descripción" field=Field::Description state=state show_errors=show_errors>
                        <input
                            id="description"
                            type="text"
                            prop:value=move || state.with(|s| s.draft().description.clone())
                            on:input=move |ev| state.update(|s| s.set_description(event_target_value(&ev)))
                        />
                    </FormField>
                    <FormField label="Logo" field=Field::Logo state=state show_errors=show_errors>
                        <input
                            id="logo"
                            type="text"
                            prop:value=move || state.with(|s| s.draft().logo.clone())
                            on:input=move |ev| state.update(|s| s.set_logo(event_target_value(&ev)))
                        />
                    </FormField>
                    <FormField label="Fecha Liberación" field=Field::DateRelease state=state show_errors=show_errors>
                        <input
                            id="date_release"
                            type="date"
                            prop:value=move || state.with(|s| s.draft().date_release.clone())
                            on:change=move |ev| state.update(|s| s.set_date_release(event_target_value(&ev)))
                        />
                    </FormField>
                    <FormField label="Fecha Revisión" field=Field::DateRevision state=state show_errors=show_errors>
                        <input
                            id="date_revision"
                            type="date"
                            disabled=true
                            prop:value=move || state.with(|s| s.draft().date_revision.clone())
                        />
                    </FormField>
                </div>
                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" on:click=reset>"Reiniciar"</button>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || {
                            queued.get() || state.with(|s| s.is_submitting() || !s.is_valid(today_local()))
                        }
                    >
                        "Enviar"
                    </button>
                </div>
            </form>
        </section>
    }
}

/// Label, control and the field's current validation message.
#[component]
fn FormField(
    label: &'static str,
    field: Field,
    state: RwSignal<ProductFormState>,
    show_errors: RwSignal<bool>,
    children: Children,
) -> impl IntoView {
    let message = move || {
        state.with(|s| {
            let visible = show_errors.get() || !s.draft().get(field).is_empty();
            visible
                .then(|| s.field_error(field, today_local()))
                .flatten()
                .map(|err| err.to_string())
        })
    };

    view! {
        <div class="form-field" class:invalid=move || message().is_some()>
            <label for=field.as_str()>{label}</label>
            {children()}
            <span class="error">{message}</span>
        </div>
    }
}
