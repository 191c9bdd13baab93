//! 当前管理员的个人资料页。

use crate::auth::{sign_out, use_auth};
use crate::components::icons::LogOut;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
fn ProfileTabs(active: AppRoute) -> impl IntoView {
    view! {
        <div role="tablist" class="tabs tabs-bordered">
            <Link
                to=AppRoute::ProfileDetails
                class=if active == AppRoute::ProfileDetails { "tab tab-active" } else { "tab" }
            >
                "Details"
            </Link>
            <Link
                to=AppRoute::ProfileSettings
                class=if active == AppRoute::ProfileSettings { "tab tab-active" } else { "tab" }
            >
                "Settings"
            </Link>
        </div>
    }
}

#[component]
pub fn ProfileDetailsPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="max-w-2xl mx-auto space-y-4">
            <h2 class="text-2xl font-bold">"Profile"</h2>
            <ProfileTabs active=AppRoute::ProfileDetails />

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body space-y-2">
                    {move || {
                        auth.session
                            .get()
                            .map(|session| {
                                let user = session.user;
                                view! {
                                    <div class="flex items-center gap-4">
                                        <div class="avatar placeholder">
                                            <div class="bg-primary text-primary-content rounded-full w-16">
                                                <span class="text-xl">
                                                    {user.fname.chars().next().unwrap_or('?').to_string()}
                                                </span>
                                            </div>
                                        </div>
                                        <div>
                                            <p class="text-lg font-bold">{user.full_name()}</p>
                                            <p class="text-base-content/70">{user.email.clone()}</p>
                                            <span class="badge badge-primary badge-outline mt-1">
                                                {user.role.clone()}
                                            </span>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProfileSettingsPage() -> impl IntoView {
    let auth = use_auth();
    let on_sign_out = move |_| sign_out(&auth);

    view! {
        <div class="max-w-2xl mx-auto space-y-4">
            <h2 class="text-2xl font-bold">"Profile"</h2>
            <ProfileTabs active=AppRoute::ProfileSettings />

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body space-y-4">
                    <div>
                        <h3 class="font-bold">"Session"</h3>
                        <p class="text-base-content/70 text-sm">
                            "Signing out clears the stored credential on this device. "
                            "You will need to sign in again to manage the platform."
                        </p>
                    </div>
                    <button class="btn btn-outline btn-error w-fit gap-2" on:click=on_sign_out>
                        <LogOut attr:class="h-4 w-4" />
                        "Sign out"
                    </button>
                </div>
            </div>
        </div>
    }
}
