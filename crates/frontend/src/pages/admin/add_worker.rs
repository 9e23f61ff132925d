use contracts::enums::{AccountStatus, Department, Gender};
use contracts::forms::{error_for, FieldError, NewWorkerForm};
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::defer::DeferSlot;

/// Simulated processing delay before a submission is acknowledged
const SUBMIT_DELAY_MS: u32 = 700;
/// The success banner clears after this long
const BANNER_MS: u32 = 2000;

/// Worker intake form. The submission is validated and acknowledged, then
/// discarded; the directory never grows.
#[component]
pub fn AddWorkerSection() -> impl IntoView {
    let (full_name, set_full_name) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (employee_no, set_employee_no) = create_signal(String::new());
    let (gender, set_gender) = create_signal(String::new());
    let (department, set_department) = create_signal(String::new());
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
        set_phone.set(String::new());
        set_employee_no.set(String::new());
        set_gender.set(String::new());
        set_department.set(String::new());
        set_joined.set(String::new());
        set_status.set(AccountStatus::Active.code().to_string());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = NewWorkerForm {
            full_name: full_name.get(),
            phone: phone.get(),
            employee_no: employee_no.get(),
            gender: gender.get(),
            department: department.get(),
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
            log::debug!("worker submission acknowledged and discarded");
            set_is_saving.set(false);
            set_succeeded.set(true);
            banner.schedule(BANNER_MS, move || {
                set_succeeded.set(false);
                reset();
            });
        });
    };

    let gender_options: Vec<(String, String)> = Gender::all()
        .into_iter()
        .map(|g| (g.code().to_string(), g.display_name().to_string()))
        .collect();
    let department_options: Vec<(String, String)> = Department::floor()
        .into_iter()
        .map(|d| (d.code().to_string(), d.display_name().to_string()))
        .collect();
    let status_options: Vec<(String, String)> = AccountStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect();

    view! {
        <div class="panel">
            <h2 class="panel__title">"Add worker"</h2>

            <Show when=move || succeeded.get()>
                <div class="panel__alert panel__alert--success">
                    "Worker added successfully."
                </div>
            </Show>

            <form on:submit=on_submit>
                <Input
                    label="Full name"
                    id="worker-name"
                    value=full_name
                    on_input=Callback::new(move |v| set_full_name.set(v))
                    error=Signal::derive(move || field_error("full_name"))
                />
                <Input
                    label="Phone number"
                    id="worker-phone"
                    value=phone
                    on_input=Callback::new(move |v| set_phone.set(v))
                    placeholder="01XXXXXXXXX"
                    error=Signal::derive(move || field_error("phone"))
                />
                <Input
                    label="Employee ID"
                    id="worker-employee-no"
                    value=employee_no
                    on_input=Callback::new(move |v| set_employee_no.set(v))
                    placeholder="EMP-000"
                    error=Signal::derive(move || field_error("employee_no"))
                />
                <Select
                    label="Gender"
                    id="worker-gender"
                    value=gender
                    on_change=Callback::new(move |v| set_gender.set(v))
                    options=gender_options
                    placeholder="Select gender"
                    error=Signal::derive(move || field_error("gender"))
                />
                <Select
                    label="Department"
                    id="worker-department"
                    value=department
                    on_change=Callback::new(move |v| set_department.set(v))
                    options=department_options
                    placeholder="Select department"
                    error=Signal::derive(move || field_error("department"))
                />
                <Input
                    label="Join date"
                    id="worker-joined"
                    input_type="date"
                    value=joined
                    on_input=Callback::new(move |v| set_joined.set(v))
                    error=Signal::derive(move || field_error("joined"))
                />
                <Select
                    label="Status"
                    id="worker-status"
                    value=status
                    on_change=Callback::new(move |v| set_status.set(v))
                    options=status_options
                    error=Signal::derive(move || field_error("status"))
                />

                <Button button_type="submit" disabled=is_saving>
                    {move || if is_saving.get() { "Saving..." } else { "Add worker" }}
                </Button>
            </form>
        </div>
    }
}
