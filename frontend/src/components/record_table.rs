//! 通用实体列表视图。
//!
//! 挂载时一次性拉取整个集合，之后全部在客户端完成：
//! 连续切片分页、整表行选择、编辑跳转与带确认的行删除。
//! 拉取失败仅记录到控制台，列表保持为空。

use crate::api::QafzahApi;
use crate::auth::use_api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::icons::{ChevronLeft, ChevronRight, Pencil, Plus, Trash2};
use crate::listing::{PAGE_SIZE_OPTIONS, Paginator, Selection};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use qafzah_shared::{Record, RecordId};

/// 一列的表头与单元格渲染。
///
/// 渲染函数拿到记录与 API 客户端（图片列需要拼接资源地址）。
pub struct Column<R: 'static> {
    pub header: &'static str,
    pub render: fn(&R, &QafzahApi) -> AnyView,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

#[component]
pub fn RecordTable<R: Record + Send + Sync>(
    #[prop(into)] title: String,
    columns: Vec<Column<R>>,
    /// "新建" 按钮的目标路由
    #[prop(optional)]
    add_route: Option<AppRoute>,
    #[prop(optional)]
    add_label: Option<&'static str>,
    /// 行编辑路由构造函数
    #[prop(optional)]
    edit_route: Option<fn(RecordId) -> AppRoute>,
    /// 行删除（带确认对话框）
    #[prop(optional)]
    deletable: bool,
    #[prop(optional)]
    delete_prompt: Option<&'static str>,
) -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (records, set_records) = signal(Vec::<R>::new());
    let (loading, set_loading) = signal(true);
    let (paginator, set_paginator) = signal(Paginator::new());
    let (selection, set_selection) = signal(Selection::default());
    let (pending_delete, set_pending_delete) = signal(Option::<RecordId>::None);
    let delete_open = RwSignal::new(false);

    let cell_api = StoredValue::new(api.clone());
    let columns = StoredValue::new(columns);
    let has_actions = edit_route.is_some() || deletable;

    // 挂载时拉取整个集合；不发送任何分页/过滤参数
    {
        let api = api.clone();
        spawn_local(async move {
            match api.fetch_all::<R>().await {
                Ok(data) => set_records.set(data),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("failed to load {}: {}", R::COLLECTION, err).into(),
                    );
                }
            }
            set_loading.set(false);
        });
    }

    let total = move || records.with(|r| r.len());
    let all_ids = move || records.with(|r| r.iter().map(Record::id).collect::<Vec<_>>());
    let visible = move || {
        let p = paginator.get();
        records.with(|r| p.slice(r).to_vec())
    };

    // 确认后才真正发出 DELETE；成功即从本地集合中移除该行
    let on_confirm_delete = {
        let api = api.clone();
        Callback::new(move |_: ()| {
            let Some(id) = pending_delete.get_untracked() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                match api.delete::<R>(id).await {
                    Ok(()) => {
                        set_records.update(|list| list.retain(|r| r.id() != id));
                        set_selection.update(|s| s.remove(id));
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("failed to delete {}/{}: {}", R::COLLECTION, id, err).into(),
                        );
                    }
                }
            });
        })
    };

    // 复选框列 + 数据列 + 可选操作列
    let colspan: usize = columns.with_value(|c| c.len()) + 1 + usize::from(has_actions);

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex items-center justify-between p-6 pb-2">
                    <h3 class="card-title">{title}</h3>
                    {add_route
                        .map(|route| {
                            view! {
                                <button
                                    class="btn btn-primary btn-sm gap-2"
                                    on:click=move |_| router.navigate_route(route)
                                >
                                    <Plus attr:class="h-4 w-4" />
                                    {add_label.unwrap_or("Add new")}
                                </button>
                            }
                        })}
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th class="w-12">
                                    <input
                                        type="checkbox"
                                        class="checkbox checkbox-primary checkbox-sm"
                                        prop:checked=move || selection.get().is_all(total())
                                        prop:indeterminate=move || {
                                            selection.get().is_partial(total())
                                        }
                                        on:change=move |ev| {
                                            let on = event_target_checked(&ev);
                                            set_selection.update(|s| s.set_all(all_ids(), on));
                                        }
                                    />
                                </th>
                                {columns
                                    .with_value(|cols| {
                                        cols.iter()
                                            .map(|col| view! { <th>{col.header}</th> })
                                            .collect_view()
                                    })}
                                {has_actions.then(|| view! { <th class="text-right">"Actions"</th> })}
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || total() == 0 && !loading.get()>
                                <tr>
                                    <td
                                        colspan=colspan.to_string()
                                        class="text-center py-8 text-base-content/50"
                                    >
                                        "No records to display."
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || loading.get()>
                                <tr>
                                    <td
                                        colspan=colspan.to_string()
                                        class="text-center py-8 text-base-content/50"
                                    >
                                        <span class="loading loading-spinner loading-md"></span>
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=visible
                                key=|record| record.id()
                                children=move |record| {
                                    let id = record.id();
                                    let cells = cell_api
                                        .with_value(|api| {
                                            columns
                                                .with_value(|cols| {
                                                    cols.iter()
                                                        .map(|col| {
                                                            let cell = (col.render)(&record, api);
                                                            view! { <td>{cell}</td> }
                                                        })
                                                        .collect_view()
                                                })
                                        });
                                    view! {
                                        <tr class="hover">
                                            <td>
                                                <input
                                                    type="checkbox"
                                                    class="checkbox checkbox-primary checkbox-sm"
                                                    prop:checked=move || selection.get().contains(id)
                                                    on:change=move |_| {
                                                        set_selection.update(|s| s.toggle(id))
                                                    }
                                                />
                                            </td>
                                            {cells}
                                            {has_actions
                                                .then(|| {
                                                    view! {
                                                        <td class="text-right">
                                                            {edit_route
                                                                .map(|to_edit| {
                                                                    view! {
                                                                        <button
                                                                            class="btn btn-ghost btn-sm btn-square text-primary"
                                                                            on:click=move |_| {
                                                                                router.navigate_route(to_edit(id))
                                                                            }
                                                                        >
                                                                            <Pencil attr:class="h-4 w-4" />
                                                                        </button>
                                                                    }
                                                                })}
                                                            {deletable
                                                                .then(|| {
                                                                    view! {
                                                                        <button
                                                                            class="btn btn-ghost btn-sm btn-square text-error"
                                                                            on:click=move |_| {
                                                                                set_pending_delete.set(Some(id));
                                                                                delete_open.set(true);
                                                                            }
                                                                        >
                                                                            <Trash2 attr:class="h-4 w-4" />
                                                                        </button>
                                                                    }
                                                                })}
                                                        </td>
                                                    }
                                                })}
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>

                // 分页页脚：每页行数 {5, 10, 25} + 前后翻页
                <div class="flex items-center justify-end gap-4 p-4 text-sm">
                    <label class="flex items-center gap-2">
                        "Rows per page:"
                        <select
                            class="select select-bordered select-sm"
                            on:change=move |ev| {
                                if let Ok(limit) = event_target_value(&ev).parse::<usize>() {
                                    set_paginator.update(|p| p.set_limit(limit));
                                }
                            }
                        >
                            {PAGE_SIZE_OPTIONS
                                .into_iter()
                                .map(|size| {
                                    view! {
                                        <option
                                            value=size.to_string()
                                            selected=move || paginator.get().limit() == size
                                        >
                                            {size.to_string()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <span>{move || paginator.get().range_label(total())}</span>
                    <div class="join">
                        <button
                            class="join-item btn btn-sm btn-outline"
                            disabled=move || !paginator.get().has_prev()
                            on:click=move |_| set_paginator.update(|p| p.prev())
                        >
                            <ChevronLeft attr:class="h-4 w-4" />
                        </button>
                        <button
                            class="join-item btn btn-sm btn-outline"
                            disabled=move || !paginator.get().has_next(total())
                            on:click=move |_| {
                                let n = total();
                                set_paginator.update(|p| p.next(n));
                            }
                        >
                            <ChevronRight attr:class="h-4 w-4" />
                        </button>
                    </div>
                </div>
            </div>
        </div>

        {deletable
            .then(|| {
                view! {
                    <ConfirmDialog
                        open=delete_open
                        title="Delete record"
                        message=delete_prompt
                            .unwrap_or(
                                "Are you sure you want to delete this record? This action cannot be undone.",
                            )
                        confirm_label="Delete"
                        on_confirm=on_confirm_delete
                    />
                }
            })}
    }
}
