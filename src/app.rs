//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    auth_callback::AuthCallbackPage, checkout_success::CheckoutSuccessPage,
    dashboard::DashboardPage, game_products::GameProductsPage, guides::GuidesPage, home::HomePage,
    product_detail::ProductDetailPage, products::ProductsPage, status::StatusPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth context, kicks off the session bootstrap, and
/// sets up client-side routing. The URL fragment is checked for an
/// external-login token synchronously, before the router mounts, so the
/// one-time token is consumed instead of being routed on.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Re-validate the ambient session cookie once per load.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::auth::bootstrap(auth));

    if crate::util::fragment::fragment_has_session_token() {
        return view! { <AuthCallbackPage/> }.into_any();
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/cheatcore-storefront.css"/>
        <Title text="Cheatcore"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("status") view=StatusPage/>
                <Route path=StaticSegment("products") view=ProductsPage/>
                <Route path=(StaticSegment("products"), ParamSegment("slug")) view=GameProductsPage/>
                <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductDetailPage/>
                <Route path=StaticSegment("guides") view=GuidesPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("checkout"), StaticSegment("success")) view=CheckoutSuccessPage/>
            </Routes>
        </Router>
    }
    .into_any()
}
