use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::notify::use_notify;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_state = use_auth();
    let notify = use_notify();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let submit = move |_| {
        if submitting.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if email_value.trim().is_empty() || password_value.is_empty() {
            notify.error("Please enter your email and password");
            return;
        }
        submitting.set(true);
        spawn_local(async move {
            match do_login(auth_state, email_value, password_value).await {
                Ok(()) => notify.success("Welcome back!"),
                Err(message) => notify.error(message),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <input
                    type="email"
                    class="form-input"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    class="form-input"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    disabled=move || submitting.get()
                    on:click=submit
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </div>
        </div>
    }
}
