//! 学生列表（只读）。

use crate::components::record_table::{Column, RecordTable};
use leptos::prelude::*;
use qafzah_shared::Student;

fn student_columns() -> Vec<Column<Student>> {
    vec![
        Column {
            header: "Name",
            render: |s, _| view! { <span class="font-bold">{s.full_name()}</span> }.into_any(),
        },
        Column {
            header: "Email",
            render: |s, _| s.email.clone().into_any(),
        },
        Column {
            header: "Phone",
            render: |s, _| s.phone.clone().unwrap_or_default().into_any(),
        },
    ]
}

#[component]
pub fn StudentsPage() -> impl IntoView {
    view! { <RecordTable title="Students" columns=student_columns() /> }
}
