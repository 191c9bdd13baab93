//! 博文列表与新建/编辑表单。
//!
//! 正文为纯多行文本；富文本编辑器属于外部协作方，不在此实现。

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
use qafzah_shared::{Blog, BlogPayload, RecordId};

// =========================================================
// 列表
// =========================================================

/// 表格里只截取正文开头，避免整篇文章撑开行高。
fn excerpt(content: &str) -> String {
    const LIMIT: usize = 120;
    if content.chars().count() <= LIMIT {
        content.to_string()
    } else {
        let cut: String = content.chars().take(LIMIT).collect();
        format!("{}…", cut)
    }
}

fn blog_columns() -> Vec<Column<Blog>> {
    vec![
        Column {
            header: "Title",
            render: |b, _| view! { <span class="font-bold">{b.title.clone()}</span> }.into_any(),
        },
        Column {
            header: "Content",
            render: |b, _| excerpt(&b.content).into_any(),
        },
        Column {
            header: "Image",
            render: |b, api| {
                view! { <img src=api.asset_url(&b.image_url) class="w-24 rounded" /> }.into_any()
            },
        },
    ]
}

#[component]
pub fn BlogsPage() -> impl IntoView {
    view! {
        <RecordTable
            title="Blog Posts"
            columns=blog_columns()
            add_route=AppRoute::BlogAdd
            add_label="Add blog post"
            edit_route=(AppRoute::BlogEdit as fn(RecordId) -> AppRoute)
        />
    }
}

// =========================================================
// 表单
// =========================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogFields {
    pub title: String,
    pub content: String,
}

impl BlogFields {
    pub fn payload(&self, image: &ImagePhase) -> Result<BlogPayload, &'static str> {
        const MESSAGE: &str = "Please fill in all required fields and upload an image.";
        require_text(&self.title, MESSAGE)?;
        require_text(&self.content, MESSAGE)?;
        let image_url = image.require()?;
        Ok(BlogPayload {
            title: self.title.clone(),
            content: self.content.clone(),
            image_url,
        })
    }
}

#[component]
pub fn BlogFormPage(
    #[prop(optional)] id: Option<RecordId>,
) -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let fields = RwSignal::new(BlogFields::default());
    let image = RwSignal::new(ImagePhase::Unset);
    let preview = RwSignal::new(Option::<String>::None);
    let phase = RwSignal::new(if id.is_some() {
        FormPhase::Loading
    } else {
        FormPhase::Ready
    });
    let delete_open = RwSignal::new(false);

    if let Some(record_id) = id {
        let api = api.clone();
        spawn_local(async move {
            match api.fetch_one::<Blog>(record_id).await {
                Ok(record) => {
                    fields.set(BlogFields {
                        title: record.title,
                        content: record.content,
                    });
                    image.set(ImagePhase::from_existing(record.image_url));
                    phase.set(FormPhase::Ready);
                }
                Err(_) => {
                    phase.set(FormPhase::Failed("Failed to load blog post details.".to_string()));
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
                Some(record_id) => api.update::<Blog>(record_id, &payload).await,
                None => api.create::<Blog>(&payload).await,
            };
            match result {
                Ok(()) if id.is_some() => {
                    phase.set(FormPhase::Success("Blog post updated successfully!".to_string()));
                    set_timeout(move || router.navigate_route(AppRoute::Blogs), REDIRECT_DELAY);
                }
                Ok(()) => {
                    phase.set(FormPhase::Success("Blog post added successfully!".to_string()));
                    fields.set(BlogFields::default());
                    image.set(ImagePhase::Unset);
                    preview.set(None);
                }
                Err(_) => phase.set(FormPhase::Failed("Failed to save blog post.".to_string())),
            }
        });
    };

    let delete_api = api.clone();
    let on_confirm_delete = Callback::new(move |_: ()| {
        let Some(record_id) = id else { return };
        phase.set(FormPhase::Submitting);
        let api = delete_api.clone();
        spawn_local(async move {
            match api.delete::<Blog>(record_id).await {
                Ok(()) => {
                    phase.set(FormPhase::Success("Blog post deleted successfully!".to_string()));
                    set_timeout(move || router.navigate_route(AppRoute::Blogs), REDIRECT_DELAY);
                }
                Err(_) => phase.set(FormPhase::Failed("Failed to delete blog post.".to_string())),
            }
        });
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-4">
            <h2 class="text-2xl font-bold">
                {if id.is_some() { "Edit Blog Post" } else { "Add New Blog Post" }}
            </h2>

            <FormAlert phase=phase />

            <Show when=move || phase.get().is_loading()>
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </Show>

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body space-y-4" on:submit=on_submit>
                    <div class="form-control">
                        <label class="label" for="title">
                            <span class="label-text">"Title"</span>
                        </label>
                        <input
                            id="title"
                            type="text"
                            class="input input-bordered w-full"
                            prop:value=move || fields.get().title
                            on:input=move |ev| {
                                fields.update(|f| f.title = event_target_value(&ev))
                            }
                            required
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="content">
                            <span class="label-text">"Content"</span>
                        </label>
                        <textarea
                            id="content"
                            rows="10"
                            class="textarea textarea-bordered w-full"
                            prop:value=move || fields.get().content
                            on:input=move |ev| {
                                fields.update(|f| f.content = event_target_value(&ev))
                            }
                            required
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
                                "Update Blog Post".into_any()
                            } else {
                                "Add Blog Post".into_any()
                            }
                        }}
                    </button>
                </form>
            </div>

            {id.map(|_| {
                view! {
                    <button class="btn btn-error w-full" on:click=move |_| delete_open.set(true)>
                        "Delete Blog Post"
                    </button>
                    <ConfirmDialog
                        open=delete_open
                        title="Delete Blog Post"
                        message="Are you sure you want to delete this blog post? This action cannot be undone."
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
