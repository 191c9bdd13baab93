//! 课程列表与新建/编辑表单。
//!
//! 表单额外拉取讲师与分类集合用于下拉/多选；
//! 读取模型携带分类名称，提交载荷携带分类 id。

use crate::auth::use_api;
use crate::components::alert::FormAlert;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::image_upload::ImageUploadField;
use crate::components::record_table::{Column, RecordTable};
use crate::forms::{FormPhase, ImagePhase, REDIRECT_DELAY, require_text};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use qafzah_shared::{Category, Course, CoursePayload, CourseType, RecordId, Teacher};
use std::collections::BTreeSet;

// =========================================================
// 列表
// =========================================================

fn course_columns() -> Vec<Column<Course>> {
    vec![
        Column {
            header: "Title",
            render: |c, _| view! { <span class="font-bold">{c.title.clone()}</span> }.into_any(),
        },
        Column {
            header: "Teacher",
            render: |c, _| {
                c.teacher_name
                    .clone()
                    .unwrap_or_else(|| format!("#{}", c.teacher_id))
                    .into_any()
            },
        },
        Column {
            header: "Cost",
            render: |c, _| format!("{:.2}", c.cost).into_any(),
        },
        Column {
            header: "Type",
            render: |c, _| {
                view! { <span class="badge badge-accent badge-outline">{c.kind.as_str()}</span> }
                    .into_any()
            },
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
pub fn CoursesPage() -> impl IntoView {
    view! {
        <RecordTable
            title="Courses"
            columns=course_columns()
            add_route=AppRoute::CourseAdd
            add_label="Add course"
            edit_route=(AppRoute::CourseEdit as fn(RecordId) -> AppRoute)
        />
    }
}

// =========================================================
// 表单
// =========================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFields {
    pub title: String,
    pub description: String,
    pub teacher_id: Option<RecordId>,
    /// 数字字段以原始文本持有，提交时解析
    pub cost: String,
    pub kind: CourseType,
    pub categories: BTreeSet<RecordId>,
    /// `YYYY-MM-DD`（date 输入框的格式）
    pub start_date: String,
    pub hours: String,
}

impl CourseFields {
    pub fn toggle_category(&mut self, id: RecordId) {
        if !self.categories.insert(id) {
            self.categories.remove(&id);
        }
    }

    pub fn payload(&self, image: &ImagePhase) -> Result<CoursePayload, &'static str> {
        require_text(&self.title, "Please fill in all required fields.")?;
        let teacher_id = self.teacher_id.ok_or("Please select a teacher.")?;

        let cost = match self.cost.trim() {
            "" => None,
            raw => Some(raw.parse::<f64>().map_err(|_| "Please enter a valid cost.")?),
        };
        let hours = match self.hours.trim() {
            "" => 0,
            raw => raw
                .parse::<u32>()
                .map_err(|_| "Please enter valid course hours.")?,
        };
        let start_date = NaiveDate::parse_from_str(self.start_date.trim(), "%Y-%m-%d")
            .map_err(|_| "Please choose a start date.")?;
        let image_url = image.require()?;

        Ok(CoursePayload {
            title: self.title.clone(),
            description: self.description.clone(),
            teacher_id,
            cost,
            kind: self.kind,
            image_url,
            categories: self.categories.iter().copied().collect(),
            start_date,
            hours,
        })
    }
}

/// 读取模型按名称携带分类；映射回 id 以预填充多选框。
fn category_ids_by_name(names: &[String], categories: &[Category]) -> BTreeSet<RecordId> {
    categories
        .iter()
        .filter(|c| names.contains(&c.name))
        .map(|c| c.id)
        .collect()
}

#[component]
pub fn CourseFormPage(
    #[prop(optional)] id: Option<RecordId>,
) -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let fields = RwSignal::new(CourseFields::default());
    let image = RwSignal::new(ImagePhase::Unset);
    let preview = RwSignal::new(Option::<String>::None);
    let phase = RwSignal::new(if id.is_some() {
        FormPhase::Loading
    } else {
        FormPhase::Ready
    });
    let delete_open = RwSignal::new(false);

    // 下拉/多选的选项集合
    let (teachers, set_teachers) = signal(Vec::<Teacher>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());

    // 选项集合（以及编辑模式下的课程本身）在挂载时拉取
    {
        let api = api.clone();
        spawn_local(async move {
            let teacher_list = api.fetch_all::<Teacher>().await;
            let category_list = api.fetch_all::<Category>().await;
            let (teacher_list, category_list) = match (teacher_list, category_list) {
                (Ok(t), Ok(c)) => (t, c),
                _ => {
                    phase.set(FormPhase::Failed(
                        "Failed to fetch teachers or categories.".to_string(),
                    ));
                    return;
                }
            };

            if let Some(record_id) = id {
                match api.fetch_one::<Course>(record_id).await {
                    Ok(course) => {
                        fields.set(CourseFields {
                            title: course.title,
                            description: course.description,
                            teacher_id: Some(course.teacher_id),
                            cost: format!("{}", course.cost),
                            kind: course.kind,
                            categories: category_ids_by_name(&course.categories, &category_list),
                            start_date: course
                                .start_date
                                .map(|d| d.format("%Y-%m-%d").to_string())
                                .unwrap_or_default(),
                            hours: course.hours.to_string(),
                        });
                        image.set(ImagePhase::from_existing(course.image_url));
                        phase.set(FormPhase::Ready);
                    }
                    Err(_) => {
                        phase.set(FormPhase::Failed("Failed to load course details.".to_string()));
                    }
                }
            }

            set_teachers.set(teacher_list);
            set_categories.set(category_list);
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
                Some(record_id) => api.update::<Course>(record_id, &payload).await,
                None => api.create::<Course>(&payload).await,
            };
            match result {
                Ok(()) if id.is_some() => {
                    phase.set(FormPhase::Success("Course updated successfully!".to_string()));
                    set_timeout(move || router.navigate_route(AppRoute::Courses), REDIRECT_DELAY);
                }
                Ok(()) => {
                    phase.set(FormPhase::Success("Course created successfully!".to_string()));
                    fields.set(CourseFields::default());
                    image.set(ImagePhase::Unset);
                    preview.set(None);
                }
                Err(_) => phase.set(FormPhase::Failed("Failed to save course.".to_string())),
            }
        });
    };

    let delete_api = api.clone();
    let on_confirm_delete = Callback::new(move |_: ()| {
        let Some(record_id) = id else { return };
        phase.set(FormPhase::Submitting);
        let api = delete_api.clone();
        spawn_local(async move {
            match api.delete::<Course>(record_id).await {
                Ok(()) => {
                    phase.set(FormPhase::Success("Course deleted successfully!".to_string()));
                    set_timeout(move || router.navigate_route(AppRoute::Courses), REDIRECT_DELAY);
                }
                Err(_) => phase.set(FormPhase::Failed("Failed to delete course.".to_string())),
            }
        });
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-4">
            <h2 class="text-2xl font-bold">
                {if id.is_some() { "Edit Course" } else { "Add New Course" }}
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
                        <label class="label" for="description">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            id="description"
                            rows="4"
                            class="textarea textarea-bordered w-full"
                            prop:value=move || fields.get().description
                            on:input=move |ev| {
                                fields.update(|f| f.description = event_target_value(&ev))
                            }
                        ></textarea>
                    </div>

                    <div class="form-control">
                        <label class="label" for="teacher">
                            <span class="label-text">"Teacher"</span>
                        </label>
                        <select
                            id="teacher"
                            class="select select-bordered w-full"
                            on:change=move |ev| {
                                let selected = event_target_value(&ev).parse::<RecordId>().ok();
                                fields.update(|f| f.teacher_id = selected);
                            }
                        >
                            <option value="" selected=move || fields.get().teacher_id.is_none()>
                                "Select a teacher"
                            </option>
                            <For
                                each=move || teachers.get()
                                key=|t| t.id
                                children=move |teacher| {
                                    let teacher_id = teacher.id;
                                    view! {
                                        <option
                                            value=teacher_id.to_string()
                                            selected=move || {
                                                fields.get().teacher_id == Some(teacher_id)
                                            }
                                        >
                                            {teacher.full_name()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="cost">
                                <span class="label-text">"Cost"</span>
                            </label>
                            <input
                                id="cost"
                                type="number"
                                min="0"
                                step="0.01"
                                class="input input-bordered w-full"
                                prop:value=move || fields.get().cost
                                on:input=move |ev| {
                                    fields.update(|f| f.cost = event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="kind">
                                <span class="label-text">"Type"</span>
                            </label>
                            <select
                                id="kind"
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    if let Some(kind) = CourseType::parse(&event_target_value(&ev)) {
                                        fields.update(|f| f.kind = kind);
                                    }
                                }
                            >
                                {CourseType::ALL
                                    .into_iter()
                                    .map(|kind| {
                                        view! {
                                            <option
                                                value=kind.as_str()
                                                selected=move || fields.get().kind == kind
                                            >
                                                {kind.as_str()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Categories"</span>
                        </label>
                        <div class="flex flex-wrap gap-3">
                            <For
                                each=move || categories.get()
                                key=|c| c.id
                                children=move |category| {
                                    let category_id = category.id;
                                    view! {
                                        <label class="label cursor-pointer gap-2">
                                            <input
                                                type="checkbox"
                                                class="checkbox checkbox-primary checkbox-sm"
                                                prop:checked=move || {
                                                    fields.get().categories.contains(&category_id)
                                                }
                                                on:change=move |_| {
                                                    fields.update(|f| f.toggle_category(category_id))
                                                }
                                            />
                                            <span class="label-text">{category.name.clone()}</span>
                                        </label>
                                    }
                                }
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="start-date">
                                <span class="label-text">"Start date"</span>
                            </label>
                            <input
                                id="start-date"
                                type="date"
                                class="input input-bordered w-full"
                                prop:value=move || fields.get().start_date
                                on:input=move |ev| {
                                    fields.update(|f| f.start_date = event_target_value(&ev))
                                }
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="hours">
                                <span class="label-text">"Hours"</span>
                            </label>
                            <input
                                id="hours"
                                type="number"
                                min="0"
                                class="input input-bordered w-full"
                                prop:value=move || fields.get().hours
                                on:input=move |ev| {
                                    fields.update(|f| f.hours = event_target_value(&ev))
                                }
                            />
                        </div>
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
                                "Update Course".into_any()
                            } else {
                                "Create Course".into_any()
                            }
                        }}
                    </button>
                </form>
            </div>

            {id.map(|_| {
                view! {
                    <button class="btn btn-error w-full" on:click=move |_| delete_open.set(true)>
                        "Delete Course"
                    </button>
                    <ConfirmDialog
                        open=delete_open
                        title="Delete Course"
                        message="Are you sure you want to delete this course? This action cannot be undone."
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
