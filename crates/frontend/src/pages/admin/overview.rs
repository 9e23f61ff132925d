use contracts::domain::account::{directory, AccountLookup};
use contracts::enums::{Department, Role};
use leptos::prelude::*;

use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_joined;

/// Static statistics over the seeded directory plus the staff roster,
/// grouped by role in seed order.
#[component]
pub fn OverviewSection() -> impl IntoView {
    let dir = directory();

    let roster: Vec<_> = Role::all()
        .into_iter()
        .flat_map(|role| dir.list_by_role(role))
        .collect();

    view! {
        <div class="overview">
            <div class="overview__cards">
                <StatCard label="Total staff" value=dir.len() />
                {Department::floor()
                    .into_iter()
                    .map(|dep| view! {
                        <StatCard
                            label=dep.display_name()
                            value=dir.count_by_department(dep)
                            caption="on the floor"
                        />
                    })
                    .collect_view()}
            </div>

            <table class="overview__roster">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Department"</th>
                        <th>"Joined"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {roster
                        .into_iter()
                        .map(|account| view! {
                            <tr>
                                <td>{account.full_name.clone()}</td>
                                <td>{account.email.clone()}</td>
                                <td>{account.role.display_name()}</td>
                                <td>{account.department.display_name()}</td>
                                <td>{format_joined(account.joined)}</td>
                                <td>{account.status.display_name()}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
