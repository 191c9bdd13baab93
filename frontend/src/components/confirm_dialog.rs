//! 删除确认对话框。
//!
//! 仅在用户显式点击确认后才触发回调；取消或点击遮罩关闭
//! 不产生任何请求。

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    /// 打开/关闭信号，由调用方持有
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    /// 确认按钮文案（如 "Delete"）
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{title}</h3>
                <p class="py-4 text-base-content/70">{message}</p>
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class="btn btn-error"
                        on:click=move |_| {
                            open.set(false);
                            on_confirm.run(());
                        }
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
