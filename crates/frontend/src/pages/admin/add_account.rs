use contracts::enums::{AccountStatus, Department, Gender, Role};
use contracts::forms::{error_for, FieldError, NewAccountForm};
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::defer::DeferSlot;

const SUBMIT_DELAY_MS: u32 = 700;
const BANNER_MS: u32 = 2000;

/// Account intake form; the only form offering the full role set and the
/// Administration department. Submissions are acknowledged and discarded.
#[component]
pub fn AddAccountSection() -> impl IntoView {
    let (full_name, set_full_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (role, set_role) = create_signal(String::new());
    let (department, set_department) = create_signal(String::new());
    let (gender, set_gender) = create_signal(String::new());
    let (joined, set_joined) = create_signal(String::new());
    let (status, set_status) = create_signal(AccountStatus::Active.code().to_string());
    let (errors, set_errors) = create_signal(Vec::<FieldError>::new());
    let (succeeded, set_succeeded) = create_signal(false);
    let (is_saving, set_is_saving) = create_signal(false);
    let submit = DeferSlot::new();
    let banner = DeferSlot::new();

    let field_error = move |field: &'static str| {
        errors.with(|list| error_for(list, field).map(str::to_string))
    };

    let reset = move || {
        set_full_name.set(String::new());
        set_email.set(String::new());
        set_phone.set(String::new());
        set_password.set(String::new());
        set_confirm.set(String::new());
        set_role.set(String::new());
        set_department.set(String::new());
        set_gender.set(String::new());
        set_joined.set(String::new());
        set_status.set(AccountStatus::Active.code().to_string());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = NewAccountForm {
            full_name: full_name.get(),
            email: email.get(),
            phone: phone.get(),
            password: password.get(),
            confirm_password: confirm.get(),
            role: role.get(),
            department: department.get(),
            gender: gender.get(),
            joined: joined.get(),
            status: status.get(),
        };

        let found = form.validate();
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }
        set_errors.set(Vec::new());
        set_is_saving.set(true);

        submit.schedule(SUBMIT_DELAY_MS, move || {
            log::debug!("account submission acknowledged and discarded");
            set_is_saving.set(false);
            set_succeeded.set(true);
            banner.schedule(BANNER_MS, move || {
                set_succeeded.set(false);
                reset();
            });
        });
    };

    let role_options: Vec<(String, String)> = Role::all()
        .into_iter()
        .map(|r| (r.code().to_string(), r.display_name().to_string()))
        .collect();
    let department_options: Vec<(String, String)> = Department::all()
        .into_iter()
        .map(|d| (d.code().to_string(), d.display_name().to_string()))
        .collect();
    let gender_options: Vec<(String, String)> = Gender::all()
        .into_iter()
        .map(|g| (g.code().to_string(), g.display_name().to_string()))
        .collect();
    let status_options: Vec<(String, String)> = AccountStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect();

    view! {
        <div class="panel">
            <h2 class="panel__title">"Add account"</h2>

            <Show when=move || succeeded.get()>
                <div class="panel__alert panel__alert--success">
                    "Account added successfully."
                </div>
            </Show>

            <form on:submit=on_submit>
                <Input
                    label="Full name"
                    id="account-name"
                    value=full_name
                    on_input=Callback::new(move |v| set_full_name.set(v))
                    error=Signal::derive(move || field_error("full_name"))
                />
                <Input
                    label="Email"
                    id="account-email"
                    value=email
                    on_input=Callback::new(move |v| set_email.set(v))
                    placeholder="name@motionmatrix.com"
                    error=Signal::derive(move || field_error("email"))
                />
                <Input
                    label="Phone number"
                    id="account-phone"
                    value=phone
                    on_input=Callback::new(move |v| set_phone.set(v))
                    placeholder="01XXXXXXXXX"
                    error=Signal::derive(move || field_error("phone"))
                />
                <Input
                    label="Password"
                    id="account-password"
                    input_type="password"
                    value=password
                    on_input=Callback::new(move |v| set_password.set(v))
                    autocomplete="new-password"
                    error=Signal::derive(move || field_error("password"))
                />
                <Input
                    label="Confirm password"
                    id="account-confirm"
                    input_type="password"
                    value=confirm
                    on_input=Callback::new(move |v| set_confirm.set(v))
                    autocomplete="new-password"
                    error=Signal::derive(move || field_error("confirm_password"))
                />
                <Select
                    label="Role"
                    id="account-role"
                    value=role
                    on_change=Callback::new(move |v| set_role.set(v))
                    options=role_options
                    placeholder="Select role"
                    error=Signal::derive(move || field_error("role"))
                />
                <Select
                    label="Department"
                    id="account-department"
                    value=department
                    on_change=Callback::new(move |v| set_department.set(v))
                    options=department_options
                    placeholder="Select department"
                    error=Signal::derive(move || field_error("department"))
                />
                <Select
                    label="Gender"
                    id="account-gender"
                    value=gender
                    on_change=Callback::new(move |v| set_gender.set(v))
                    options=gender_options
                    placeholder="Select gender"
                    error=Signal::derive(move || field_error("gender"))
                />
                <Input
                    label="Join date"
                    id="account-joined"
                    input_type="date"
                    value=joined
                    on_input=Callback::new(move |v| set_joined.set(v))
                    error=Signal::derive(move || field_error("joined"))
                />
                <Select
                    label="Status"
                    id="account-status"
                    value=status
                    on_change=Callback::new(move |v| set_status.set(v))
                    options=status_options
                    error=Signal::derive(move || field_error("status"))
                />

                <Button button_type="submit" disabled=is_saving>
                    {move || if is_saving.get() { "Saving..." } else { "Add account" }}
                </Button>
            </form>
        </div>
    }
}
