//! 讲师列表与新建/编辑表单。

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
use qafzah_shared::{RecordId, Teacher, TeacherPayload};

// =========================================================
// 列表
// =========================================================

fn teacher_columns() -> Vec<Column<Teacher>> {
    vec![
        Column {
            header: "Name",
            render: |t, _| view! { <span class="font-bold">{t.full_name()}</span> }.into_any(),
        },
        Column {
            header: "Email",
            render: |t, _| t.email.clone().into_any(),
        },
        Column {
            header: "Title",
            render: |t, _| t.title.clone().into_any(),
        },
        Column {
            header: "Image",
            render: |t, api| {
                view! { <img src=api.asset_url(&t.image_url) class="w-16 rounded-full" /> }
                    .into_any()
            },
        },
    ]
}

#[component]
pub fn TeachersPage() -> impl IntoView {
    view! {
        <RecordTable
            title="Teachers"
            columns=teacher_columns()
            add_route=AppRoute::TeacherAdd
            add_label="Add teacher"
            edit_route=(AppRoute::TeacherEdit as fn(RecordId) -> AppRoute)
        />
    }
}

// =========================================================
// 表单
// =========================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherFields {
    pub email: String,
    pub fname: String,
    pub lname: String,
    pub password: String,
    pub bio: String,
    pub title: String,
}

impl TeacherFields {
    /// 新建时密码必填；编辑时留空表示不修改密码。
    pub fn payload(
        &self,
        image: &ImagePhase,
        is_create: bool,
    ) -> Result<TeacherPayload, &'static str> {
        const MESSAGE: &str = "Please fill in all required fields.";
        require_text(&self.email, MESSAGE)?;
        require_text(&self.fname, MESSAGE)?;
        require_text(&self.lname, MESSAGE)?;
        if is_create {
            require_text(&self.password, MESSAGE)?;
        }
        let image_url = image.require()?;

        let password = if self.password.is_empty() {
            None
        } else {
            Some(self.password.clone())
        };

        Ok(TeacherPayload {
            email: self.email.clone(),
            fname: self.fname.clone(),
            lname: self.lname.clone(),
            password,
            bio: self.bio.clone(),
            title: self.title.clone(),
            image_url,
        })
    }
}

#[component]
pub fn TeacherFormPage(
    #[prop(optional)] id: Option<RecordId>,
) -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let fields = RwSignal::new(TeacherFields::default());
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
            match api.fetch_one::<Teacher>(record_id).await {
                Ok(record) => {
                    fields.set(TeacherFields {
                        email: record.email,
                        fname: record.fname,
                        lname: record.lname,
                        password: String::new(),
                        bio: record.bio,
                        title: record.title,
                    });
                    image.set(ImagePhase::from_existing(record.image_url));
                    phase.set(FormPhase::Ready);
                }
                Err(_) => {
                    phase.set(FormPhase::Failed("Failed to load teacher details.".to_string()));
                }
            }
        });
    }

    let submit_api = api.clone();
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let payload = fields
            .with_untracked(|f| image.with_untracked(|img| f.payload(img, id.is_none())));
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
                Some(record_id) => api.update::<Teacher>(record_id, &payload).await,
                None => api.create::<Teacher>(&payload).await,
            };
            match result {
                Ok(()) if id.is_some() => {
                    phase.set(FormPhase::Success("Teacher updated successfully!".to_string()));
                    set_timeout(move || router.navigate_route(AppRoute::Teachers), REDIRECT_DELAY);
                }
                Ok(()) => {
                    phase.set(FormPhase::Success("Teacher added successfully!".to_string()));
                    fields.set(TeacherFields::default());
                    image.set(ImagePhase::Unset);
                    preview.set(None);
                }
                Err(_) => phase.set(FormPhase::Failed("Failed to save teacher.".to_string())),
            }
        });
    };

    let delete_api = api.clone();
    let on_confirm_delete = Callback::new(move |_: ()| {
        let Some(record_id) = id else { return };
        phase.set(FormPhase::Submitting);
        let api = delete_api.clone();
        spawn_local(async move {
            match api.delete::<Teacher>(record_id).await {
                Ok(()) => {
                    phase.set(FormPhase::Success("Teacher deleted successfully!".to_string()));
                    set_timeout(move || router.navigate_route(AppRoute::Teachers), REDIRECT_DELAY);
                }
                Err(_) => phase.set(FormPhase::Failed("Failed to delete teacher.".to_string())),
            }
        });
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-4">
            <h2 class="text-2xl font-bold">
                {if id.is_some() { "Edit Teacher" } else { "Add New Teacher" }}
            </h2>

            <FormAlert phase=phase />

            <Show when=move || phase.get().is_loading()>
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </Show>

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body space-y-4" on:submit=on_submit>
                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="fname">
                                <span class="label-text">"First name"</span>
                            </label>
                            <input
                                id="fname"
                                type="text"
                                class="input input-bordered w-full"
                                prop:value=move || fields.get().fname
                                on:input=move |ev| {
                                    fields.update(|f| f.fname = event_target_value(&ev))
                                }
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="lname">
                                <span class="label-text">"Last name"</span>
                            </label>
                            <input
                                id="lname"
                                type="text"
                                class="input input-bordered w-full"
                                prop:value=move || fields.get().lname
                                on:input=move |ev| {
                                    fields.update(|f| f.lname = event_target_value(&ev))
                                }
                                required
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">"Email"</span>
                        </label>
                        <input
                            id="email"
                            type="email"
                            class="input input-bordered w-full"
                            prop:value=move || fields.get().email
                            on:input=move |ev| {
                                fields.update(|f| f.email = event_target_value(&ev))
                            }
                            required
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">
                                {if id.is_some() {
                                    "Password (leave blank to keep current)"
                                } else {
                                    "Password"
                                }}
                            </span>
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="input input-bordered w-full"
                            prop:value=move || fields.get().password
                            on:input=move |ev| {
                                fields.update(|f| f.password = event_target_value(&ev))
                            }
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="title">
                            <span class="label-text">"Title"</span>
                        </label>
                        <input
                            id="title"
                            type="text"
                            placeholder="Senior Instructor"
                            class="input input-bordered w-full"
                            prop:value=move || fields.get().title
                            on:input=move |ev| {
                                fields.update(|f| f.title = event_target_value(&ev))
                            }
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="bio">
                            <span class="label-text">"Bio"</span>
                        </label>
                        <textarea
                            id="bio"
                            rows="4"
                            class="textarea textarea-bordered w-full"
                            prop:value=move || fields.get().bio
                            on:input=move |ev| {
                                fields.update(|f| f.bio = event_target_value(&ev))
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
                                "Update Teacher".into_any()
                            } else {
                                "Add Teacher".into_any()
                            }
                        }}
                    </button>
                </form>
            </div>

            {id.map(|_| {
                view! {
                    <button class="btn btn-error w-full" on:click=move |_| delete_open.set(true)>
                        "Delete Teacher"
                    </button>
                    <ConfirmDialog
                        open=delete_open
                        title="Delete Teacher"
                        message="Are you sure you want to delete this teacher? This action cannot be undone."
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
