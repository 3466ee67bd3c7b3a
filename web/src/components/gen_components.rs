use crate::components::context::AppState;
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <span role="status">
            <i class="ph ph-circle-notch animate-spin"></i>
            <span class="sr-only">{"Loading..."}</span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessBannerProps {
    pub message: String,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(SuccessBanner)]
pub fn success_banner(props: &SuccessBannerProps) -> Html {
    html! {
        <div class="success-message flex justify-between items-center" role="alert">
            <span>{&props.message}</span>
            <button type="button" onclick={props.on_close.clone()} class="close-button" aria-label="Close">
                <i class="ph ph-x"></i>
            </button>
        </div>
    }
}

/// Blocking modal for whatever `AppState::dialog` holds. Any dismissal clears it.
#[function_component(ErrorDialog)]
pub fn error_dialog() -> Html {
    let (state, dispatch) = use_store::<AppState>();

    let close_dialog = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|state| state.dialog = None);
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let Some(dialog) = state.dialog.as_ref() else {
        return html! {};
    };

    html! {
        <div id="error-dialog" tabindex="-1" onclick={close_dialog.clone()} class="fixed top-0 right-0 left-0 z-50 flex justify-center items-center w-full h-full bg-black bg-opacity-25">
            <div role="alertdialog" aria-modal="true" onclick={keep_open} class="relative p-4 w-full max-w-md modal-container rounded-lg shadow">
                <div class="flex flex-col items-start justify-between p-4 md:p-5">
                    <button onclick={close_dialog.clone()} class="self-end text-sm w-8 h-8 ms-auto inline-flex justify-center items-center rounded-lg">
                        <i class="ph ph-x"></i>
                        <span class="sr-only">{"Close modal"}</span>
                    </button>
                    <i class="ph ph-warning-circle text-4xl error-text"></i>
                    <h3 class="text-xl font-semibold item_container-text">{&dialog.title}</h3>
                    <p class="text-m item_container-text mt-2">{&dialog.text}</p>
                    <button onclick={close_dialog} type="button" class="mt-4 submit-button self-end">
                        {"OK"}
                    </button>
                </div>
            </div>
        </div>
    }
}
