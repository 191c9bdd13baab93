//! Category 列表与新建/编辑表单。

use crate::auth::use_api;
use crate::components::alert::FormAlert;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::image_upload::ImageUploadField;
use crate::components::record_table::{Column, RecordTable};
use crate::forms::{FormPhase, ImagePhase, REDIRECT_DELAY, require_text};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use qafzah_shared::{Category, CategoryPayload, RecordId};

// =========================================================
// 列表
// =========================================================

fn category_columns() -> Vec<Column<Category>> {
    vec![
        Column {
            header: "Name",
            render: |c, _| view! { <span class="font-bold">{c.name.clone()}</span> }.into_any(),
        },
        Column {
            header: "Description",
            render: |c, _| c.description.clone().into_any(),
        },
        Column {
            header: "Image",
            render: |c, api| {
                view! { <img src=api.asset_url(&c.image_url) class="w-24 rounded" /> }.into_any()
            },
        },
    ]
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    view! {
        <RecordTable
            title="Category List"
            columns=category_columns()
            add_route=AppRoute::CategoryAdd
            add_label="Add category"
            edit_route=(AppRoute::CategoryEdit as fn(RecordId) -> AppRoute)
        />
    }
}

// =========================================================
// 表单
// =========================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFields {
    pub name: String,
    pub description: String,
}

impl CategoryFields {
    /// 校验必填项并装配提交载荷。失败时不发出任何请求。
    pub fn payload(&self, image: &ImagePhase) -> Result<CategoryPayload, &'static str> {
        require_text(&self.name, "Please fill in all required fields.")?;
        let image_url = image.require()?;
        Ok(CategoryPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            image_url,
        })
    }
}

#[component]
pub fn CategoryFormPage(
    /// 编辑模式的记录 id；缺省为纯新建
    #[prop(optional)]
    id: Option<RecordId>,
) -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let fields = RwSignal::new(CategoryFields::default());
    let image = RwSignal::new(ImagePhase::Unset);
    let preview = RwSignal::new(Option::<String>::None);
    let phase = RwSignal::new(if id.is_some() {
        FormPhase::Loading
    } else {
        FormPhase::Ready
    });
    let delete_open = RwSignal::new(false);

    // 编辑模式：预填充
    if let Some(record_id) = id {
        let api = api.clone();
        spawn_local(async move {
            match api.fetch_one::<Category>(record_id).await {
                Ok(record) => {
                    fields.set(CategoryFields {
                        name: record.name,
                        description: record.description,
                    });
                    image.set(ImagePhase::from_existing(record.image_url));
                    phase.set(FormPhase::Ready);
                }
                Err(_) => {
                    phase.set(FormPhase::Failed("Failed to load category details.".to_string()));
                }
            }
        });
    }

    let submit_api = api.clone();
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let payload = fields.with_untracked(|f| image.with_untracked(|img| f.payload(img)));
        let payload = match payload {
            Ok(payload) => payload,
            Err(message) => {
                phase.set(FormPhase::Failed(message.to_string()));
                return;
            }
        };

        phase.set(FormPhase::Submitting);
        let api = submit_api.clone();
        spawn_local(async move {
            let result = match id {
                Some(record_id) => api.update::<Category>(record_id, &payload).await,
                None => api.create::<Category>(&payload).await,
            };
            match result {
                Ok(()) if id.is_some() => {
                    phase.set(FormPhase::Success("Category updated successfully!".to_string()));
                    set_timeout(
                        move || router.navigate_route(AppRoute::Categories),
                        REDIRECT_DELAY,
                    );
                }
                Ok(()) => {
                    // 纯新建：清空字段，停留在页面上
                    phase.set(FormPhase::Success("Category created successfully!".to_string()));
                    fields.set(CategoryFields::default());
                    image.set(ImagePhase::Unset);
                    preview.set(None);
                }
                Err(_) => phase.set(FormPhase::Failed("Failed to save category.".to_string())),
            }
        });
    };

    let delete_api = api.clone();
    let on_confirm_delete = Callback::new(move |_: ()| {
        let Some(record_id) = id else { return };
        phase.set(FormPhase::Submitting);
        let api = delete_api.clone();
        spawn_local(async move {
            match api.delete::<Category>(record_id).await {
                Ok(()) => {
                    phase.set(FormPhase::Success("Category deleted successfully!".to_string()));
                    set_timeout(
                        move || router.navigate_route(AppRoute::Categories),
                        REDIRECT_DELAY,
                    );
                }
                Err(_) => phase.set(FormPhase::Failed("Failed to delete category.".to_string())),
            }
        });
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-4">
            <h2 class="text-2xl font-bold">
                {if id.is_some() { "Edit Category" } else { "Create New Category" }}
            </h2>

            <FormAlert phase=phase />

            <Show when=move || phase.get().is_loading()>
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </Show>

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body space-y-4" on:submit=on_submit>
                    <div class="form-control">
                        <label class="label" for="name">
                            <span class="label-text">"Name"</span>
                        </label>
                        <input
                            id="name"
                            type="text"
                            class="input input-bordered w-full"
                            prop:value=move || fields.get().name
                            on:input=move |ev| {
                                fields.update(|f| f.name = event_target_value(&ev))
                            }
                            required
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="description">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            id="description"
                            rows="6"
                            class="textarea textarea-bordered w-full"
                            prop:value=move || fields.get().description
                            on:input=move |ev| {
                                fields.update(|f| f.description = event_target_value(&ev))
                            }
                        ></textarea>
                    </div>

                    <ImageUploadField
                        phase=image
                        preview=preview
                        on_error=Callback::new(move |message: String| {
                            phase.set(FormPhase::Failed(message))
                        })
                    />

                    <button type="submit" class="btn btn-primary w-full">
                        {move || {
                            if phase.get().is_busy() {
                                view! { <span class="loading loading-spinner"></span> }.into_any()
                            } else if id.is_some() {
                                "Update Category".into_any()
                            } else {
                                "Create Category".into_any()
                            }
                        }}
                    </button>
                </form>
            </div>

            {id.map(|_| {
                view! {
                    <button class="btn btn-error w-full" on:click=move |_| delete_open.set(true)>
                        "Delete Category"
                    </button>
                    <ConfirmDialog
                        open=delete_open
                        title="Delete Category"
                        message="Are you sure you want to delete this category? This action cannot be undone."
                        confirm_label="Delete"
                        on_confirm=on_confirm_delete
                    />
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests;
