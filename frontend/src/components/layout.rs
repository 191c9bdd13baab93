//! 管理区页面骨架：顶部导航 + 内容区。

use crate::auth::{sign_out, use_auth};
use crate::components::icons::{GraduationCap, LogOut};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

const NAV_LINKS: [(&str, AppRoute); 7] = [
    ("Blogs", AppRoute::Blogs),
    ("Teachers", AppRoute::Teachers),
    ("Courses", AppRoute::Courses),
    ("Categories", AppRoute::Categories),
    ("Consultations", AppRoute::Consultations),
    ("Students", AppRoute::Students),
    ("Profile", AppRoute::ProfileDetails),
];

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let auth = use_auth();

    // 登出后的跳转由路由服务监听会话信号完成
    let on_sign_out = move |_| sign_out(&auth);

    let email = move || {
        auth.session
            .get()
            .map(|session| session.user.email)
            .unwrap_or_default()
    };

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <div class="navbar bg-base-100 shadow-lg px-4">
                <div class="flex-1 gap-1">
                    <Link to=AppRoute::Blogs class="btn btn-ghost text-xl gap-2">
                        <GraduationCap attr:class="h-6 w-6 text-primary" />
                        "Qafzah Admin"
                    </Link>
                    <ul class="menu menu-horizontal px-1 hidden lg:flex">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(label, route)| {
                                view! {
                                    <li>
                                        <Link to=route>{label}</Link>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="flex-none gap-2">
                    <span class="badge badge-neutral hidden md:inline-flex">{email}</span>
                    <button on:click=on_sign_out class="btn btn-outline btn-error btn-sm gap-2">
                        <LogOut attr:class="h-4 w-4" />
                        "Sign out"
                    </button>
                </div>
            </div>

            <main class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">{children()}</main>
        </div>
    }
}
