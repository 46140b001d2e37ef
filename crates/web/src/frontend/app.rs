//! Root component and routes.

use leptos::*;
use leptos_router::*;

use prodcat_client::{ClientConfig, DEFAULT_API_URL, HttpProductApi};

use crate::frontend::components::Header;
use crate::frontend::form_page::ProductFormPage;
use crate::frontend::list_page::ProductListPage;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_env().or_else(|err| {
        tracing::error!(error = %err, "invalid products API configuration; using default");
        ClientConfig::new(DEFAULT_API_URL)
    });
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "no usable products API configuration");
            return view! { <p class="fatal">"Servicio no disponible"</p> }.into_view();
        }
    };
    tracing::info!(base_url = %config.base_url(), "products API configured");
    provide_context(HttpProductApi::new(&config));

    view! {
        <Router>
            <Header/>
            <main class="container">
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/products"/> }/>
                    <Route path="/products" view=ProductListPage/>
                    <Route path="/products/add" view=ProductFormPage/>
                    <Route path="/products/edit/:id" view=ProductFormPage/>
                </Routes>
            </main>
        </Router>
    }
    .into_view()
}
