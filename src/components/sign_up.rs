//! Sign-Up Screen
//!
//! The password-confirmation check is the only local validation; everything
//! else is the provider's call.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::auth;
use crate::context::AppContext;
use crate::router::Route;

#[component]
pub fn SignUp() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if password.get() != confirm.get() {
            set_error.set(Some("Passwords do not match".to_string()));
            return;
        }
        set_error.set(None);
        set_pending.set(true);
        let email = email.get();
        let password = password.get();
        spawn_local(async move {
            if let Err(err) = auth::sign_up(&email, &password).await {
                set_error.set(Some(format!("Failed to create account: {}", err)));
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <form class="card auth-form" on:submit=submit>
                <h1 class="brand">"Kaarya"</h1>
                <h2>"Create Account"</h2>

                {move || {
                    error.get().map(|message| view! { <p class="alert error">{message}</p> })
                }}

                <input
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_email.set(input.value());
                    }
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                    }
                />
                <input
                    type="password"
                    placeholder="Confirm Password"
                    required
                    prop:value=move || confirm.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_confirm.set(input.value());
                    }
                />
                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Creating Account..." } else { "Sign Up" }}
                </button>

                <p class="auth-switch">
                    "Already have an account? "
                    <a on:click=move |_| ctx.navigate(Route::Login)>"Sign In"</a>
                </p>
            </form>
        </div>
    }
}
