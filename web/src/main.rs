// Custom Mods
mod components;
mod config;
mod requests;


use components::gen_components::ErrorDialog;
use components::profile::Profile;
use components::routes::Route;

// Yew Imports
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen p-8">
            <div class="flex flex-col items-center text-center max-w-md space-y-6">
                <div class="flex items-center gap-4 mb-4">
                    <i class="ph ph-warning-circle text-8xl item_container-text opacity-80" />
                    <span class="text-8xl font-bold item_container-text opacity-80">{"404"}</span>
                </div>

                <h1 class="text-3xl font-bold item_container-text">
                    {"Page Not Found"}
                </h1>

                <Link<Route> to={Route::Profile} classes={classes!("flex", "items-center", "gap-2", "px-6", "py-3", "mt-4", "rounded-lg", "item_container-text", "border-2", "border-current", "hover:opacity-80", "text-lg", "font-medium")}>
                    <i class="ph ph-user-circle text-xl" />
                    {"Back to your profile"}
                </Link<Route>>
            </div>
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Profile => html! { <Profile /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(Main)]
fn main_component() -> Html {
    html! {
        <BrowserRouter>
            <ErrorDialog />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::log_1(&format!("Logger already set: {}", e).into());
    }
    yew::Renderer::<Main>::new().render();
}
