//! 咨询消息列表：只读 + 行删除（带确认）。

use crate::components::record_table::{Column, RecordTable};
use leptos::prelude::*;
use qafzah_shared::Consultation;

fn consultation_columns() -> Vec<Column<Consultation>> {
    vec![
        Column {
            header: "Name",
            render: |c, _| view! { <span class="font-bold">{c.name.clone()}</span> }.into_any(),
        },
        Column {
            header: "Email",
            render: |c, _| c.email.clone().into_any(),
        },
        Column {
            header: "Phone",
            render: |c, _| c.phone.clone().unwrap_or_default().into_any(),
        },
        Column {
            header: "Message",
            render: |c, _| c.message.clone().into_any(),
        },
        Column {
            header: "Received",
            render: |c, _| {
                c.created_at
                    .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default()
                    .into_any()
            },
        },
    ]
}

#[component]
pub fn ConsultationsPage() -> impl IntoView {
    view! {
        <RecordTable
            title="Consultation Requests"
            columns=consultation_columns()
            deletable=true
            delete_prompt="Are you sure you want to delete this consultation? This action cannot be undone."
        />
    }
}
