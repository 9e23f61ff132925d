use contracts::domain::account::{directory, AccountLookup};
use contracts::forms::{error_for, FieldError, LoginForm, RecoverForm, RegisterForm};
use leptos::prelude::*;

use crate::layout::nav_context::{use_nav, Screen};
use crate::shared::components::ui::{Button, Input};
use crate::shared::defer::DeferSlot;
use crate::system::auth::context::use_session;

/// Simulated processing delay before a submission is acknowledged
const SUBMIT_DELAY_MS: u32 = 600;
/// The registration success banner clears after this long
const REGISTER_BANNER_MS: u32 = 1500;

#[derive(Clone, Copy, PartialEq)]
enum AuthPanel {
    SignIn,
    Register,
    Recover,
}

/// Auth screen hosting the sign-in, registration and password-recovery
/// panels. The screen identifier stays `login` for all three.
#[component]
pub fn AuthPage() -> impl IntoView {
    let (panel, set_panel) = create_signal(AuthPanel::SignIn);

    view! {
        <div class="auth">
            <div class="auth__box">
                <h1 class="auth__brand">"MotionMatrix"</h1>
                {move || match panel.get() {
                    AuthPanel::SignIn => view! { <SignInPanel set_panel=set_panel /> }.into_any(),
                    AuthPanel::Register => view! { <RegisterPanel set_panel=set_panel /> }.into_any(),
                    AuthPanel::Recover => view! { <RecoverPanel set_panel=set_panel /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn SignInPanel(set_panel: WriteSignal<AuthPanel>) -> impl IntoView {
    let session = use_session();
    let nav = use_nav();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (errors, set_errors) = create_signal(Vec::<FieldError>::new());
    let (auth_error, set_auth_error) = create_signal(Option::<String>::None);
    let (is_loading, set_is_loading) = create_signal(false);
    let submit = DeferSlot::new();

    let field_error = move |field: &'static str| {
        errors.with(|list| error_for(list, field).map(str::to_string))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm {
            email: email.get(),
            password: password.get(),
        };

        set_auth_error.set(None);
        let found = form.validate();
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }
        set_errors.set(Vec::new());
        set_is_loading.set(true);

        submit.schedule(SUBMIT_DELAY_MS, move || {
            set_is_loading.set(false);
            match directory().authenticate(&form.email, &form.password) {
                Ok(identity) => {
                    if identity.is_admin() {
                        session.login(identity);
                        nav.navigate(Screen::Admin);
                    } else {
                        // Accepted, but no dashboard exists for this role yet
                        nav.navigate(Screen::Home);
                    }
                }
                Err(e) => set_auth_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <h2 class="auth__title">"Sign in"</h2>

        <Show when=move || auth_error.get().is_some()>
            <div class="auth__alert auth__alert--error">
                {move || auth_error.get().unwrap_or_default()}
            </div>
        </Show>

        <form on:submit=on_submit>
            <Input
                label="Email"
                id="login-email"
                value=email
                on_input=Callback::new(move |v| set_email.set(v))
                placeholder="you@motionmatrix.com"
                autocomplete="email"
                error=Signal::derive(move || field_error("email"))
            />
            <Input
                label="Password"
                id="login-password"
                input_type="password"
                value=password
                on_input=Callback::new(move |v| set_password.set(v))
                autocomplete="current-password"
                error=Signal::derive(move || field_error("password"))
            />

            <Button button_type="submit" disabled=is_loading class="auth__submit">
                {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
            </Button>
        </form>

        <div class="auth__links">
            <a href="#" on:click=move |ev| {
                ev.prevent_default();
                set_panel.set(AuthPanel::Recover);
            }>"Forgot password?"</a>
            <a href="#" on:click=move |ev| {
                ev.prevent_default();
                set_panel.set(AuthPanel::Register);
            }>"Create an account"</a>
            <a href="#" on:click=move |ev| {
                ev.prevent_default();
                nav.navigate(Screen::Home);
            }>"Back to home"</a>
        </div>
    }
}

#[component]
fn RegisterPanel(set_panel: WriteSignal<AuthPanel>) -> impl IntoView {
    let (full_name, set_full_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (errors, set_errors) = create_signal(Vec::<FieldError>::new());
    let (succeeded, set_succeeded) = create_signal(false);
    let (is_loading, set_is_loading) = create_signal(false);
    let submit = DeferSlot::new();
    let banner = DeferSlot::new();

    let field_error = move |field: &'static str| {
        errors.with(|list| error_for(list, field).map(str::to_string))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = RegisterForm {
            full_name: full_name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm.get(),
        };

        let found = form.validate();
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }
        set_errors.set(Vec::new());
        set_is_loading.set(true);

        submit.schedule(SUBMIT_DELAY_MS, move || {
            // The submission is acknowledged and discarded; nothing persists
            set_is_loading.set(false);
            set_succeeded.set(true);
            banner.schedule(REGISTER_BANNER_MS, move || {
                set_succeeded.set(false);
                set_panel.set(AuthPanel::SignIn);
            });
        });
    };

    view! {
        <h2 class="auth__title">"Create an account"</h2>

        <Show when=move || succeeded.get()>
            <div class="auth__alert auth__alert--success">
                "Registration received. You can sign in once an administrator approves it."
            </div>
        </Show>

        <form on:submit=on_submit>
            <Input
                label="Full name"
                id="register-name"
                value=full_name
                on_input=Callback::new(move |v| set_full_name.set(v))
                error=Signal::derive(move || field_error("full_name"))
            />
            <Input
                label="Email"
                id="register-email"
                value=email
                on_input=Callback::new(move |v| set_email.set(v))
                placeholder="you@motionmatrix.com"
                autocomplete="email"
                error=Signal::derive(move || field_error("email"))
            />
            <Input
                label="Password"
                id="register-password"
                input_type="password"
                value=password
                on_input=Callback::new(move |v| set_password.set(v))
                autocomplete="new-password"
                error=Signal::derive(move || field_error("password"))
            />
            <Input
                label="Confirm password"
                id="register-confirm"
                input_type="password"
                value=confirm
                on_input=Callback::new(move |v| set_confirm.set(v))
                autocomplete="new-password"
                error=Signal::derive(move || field_error("confirm_password"))
            />

            <Button button_type="submit" disabled=is_loading class="auth__submit">
                {move || if is_loading.get() { "Submitting..." } else { "Register" }}
            </Button>
        </form>

        <div class="auth__links">
            <a href="#" on:click=move |ev| {
                ev.prevent_default();
                set_panel.set(AuthPanel::SignIn);
            }>"Already have an account? Sign in"</a>
        </div>
    }
}

#[component]
fn RecoverPanel(set_panel: WriteSignal<AuthPanel>) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (errors, set_errors) = create_signal(Vec::<FieldError>::new());
    let (sent, set_sent) = create_signal(false);
    let (is_loading, set_is_loading) = create_signal(false);
    let submit = DeferSlot::new();

    let field_error = move |field: &'static str| {
        errors.with(|list| error_for(list, field).map(str::to_string))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = RecoverForm { email: email.get() };
        let found = form.validate();
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }
        set_errors.set(Vec::new());
        set_is_loading.set(true);

        let address = email.get();
        submit.schedule(SUBMIT_DELAY_MS, move || {
            // The lookup result must not change the outcome; the form
            // never confirms which emails exist.
            let _ = directory().find_by_email(&address);
            set_is_loading.set(false);
            set_sent.set(true);
        });
    };

    view! {
        <h2 class="auth__title">"Reset password"</h2>

        <Show
            when=move || !sent.get()
            fallback=|| view! {
                <div class="auth__alert auth__alert--success">
                    "Password reset instructions have been sent. Check your inbox."
                </div>
            }
        >
            <form on:submit=on_submit>
                <Input
                    label="Email"
                    id="recover-email"
                    value=email
                    on_input=Callback::new(move |v| set_email.set(v))
                    placeholder="you@motionmatrix.com"
                    autocomplete="email"
                    error=Signal::derive(move || field_error("email"))
                />

                <Button button_type="submit" disabled=is_loading class="auth__submit">
                    {move || if is_loading.get() { "Sending..." } else { "Send reset link" }}
                </Button>
            </form>
        </Show>

        <div class="auth__links">
            <a href="#" on:click=move |ev| {
                ev.prevent_default();
                set_panel.set(AuthPanel::SignIn);
            }>"Back to sign in"</a>
        </div>
    }
}
