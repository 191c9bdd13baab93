//! 状态页（裸布局）。

use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn Status404Page() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">"The page you were looking for doesn't exist."</p>
                <Link to=AppRoute::Login class="btn btn-primary">
                    "Go back"
                </Link>
            </div>
        </div>
    }
}

#[component]
pub fn Status500Page() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">"500"</h1>
                <p class="text-xl">"There was an error, please try again later."</p>
                <Link to=AppRoute::Login class="btn btn-primary">
                    "Go back"
                </Link>
            </div>
        </div>
    }
}
