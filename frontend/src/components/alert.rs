//! 表单页顶部的成功/失败提示。

use crate::forms::FormPhase;
use leptos::prelude::*;

/// 按当前表单阶段渲染一条提示；其余阶段不渲染任何内容。
#[component]
pub fn FormAlert(phase: RwSignal<FormPhase>) -> impl IntoView {
    move || match phase.get() {
        FormPhase::Failed(message) => view! {
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{message}</span>
            </div>
        }
        .into_any(),
        FormPhase::Success(message) => view! {
            <div role="alert" class="alert alert-success text-sm py-2">
                <span>{message}</span>
            </div>
        }
        .into_any(),
        _ => ().into_any(),
    }
}
