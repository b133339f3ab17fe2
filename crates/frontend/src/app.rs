use leptos::prelude::*;

use crate::domain::a004_shortlist::service::ShortlistService;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notify::NotifyService;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Navigation, notifications and the shortlist cache are app-wide
    // contexts.
    provide_context(AppGlobalContext::new());
    provide_context(NotifyService::new());
    provide_context(ShortlistService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
