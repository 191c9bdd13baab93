//! 图片上传字段。
//!
//! 选择文件后立即：(a) 生成本地临时预览；(b) 发起上传请求。
//! 成功后的服务端相对路径进入 `ImagePhase`，随表单提交；
//! 失败则保留先前的挂起值并向页面回报错误。

use crate::auth::use_api;
use crate::forms::ImagePhase;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

#[component]
pub fn ImageUploadField(
    /// 两阶段上传状态，由表单页持有并作为提交门槛
    phase: RwSignal<ImagePhase>,
    /// 本地临时预览 URL（object URL，不随记录提交）
    preview: RwSignal<Option<String>>,
    /// 上传失败回报
    #[prop(into)]
    on_error: Callback<String>,
) -> impl IntoView {
    let api = use_api();
    let upload_api = api.clone();

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
            preview.set(Some(url));
        }
        phase.update(|p| *p = std::mem::take(p).begin());

        let api = upload_api.clone();
        spawn_local(async move {
            match api.upload(file).await {
                Ok(res) => phase.update(|p| *p = std::mem::take(p).complete(res.file_path)),
                Err(_) => {
                    phase.update(|p| *p = std::mem::take(p).fail());
                    on_error.run("Failed to upload image.".to_string());
                }
            }
        });
    };

    // 优先展示本地预览；编辑模式下回落到已存储的服务端图片
    let shown_src = move || {
        if let Some(url) = preview.get() {
            return Some(url);
        }
        phase
            .get()
            .value()
            .map(|path| api.asset_url(path))
    };

    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">"Image"</span>
            </label>
            <input
                type="file"
                accept="image/*"
                class="file-input file-input-bordered w-full"
                on:change=on_change
            />
            {move || {
                shown_src()
                    .map(|src| {
                        view! {
                            <img
                                src=src
                                alt="Image Preview"
                                class="mt-2 max-h-72 w-full rounded-lg object-contain bg-base-200"
                            />
                        }
                    })
            }}
            <Show when=move || phase.get().is_uploading()>
                <span class="loading loading-spinner loading-sm mt-2"></span>
            </Show>
        </div>
    }
}
