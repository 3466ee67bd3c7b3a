use crate::components::context::{AppState, Dialog};
use crate::components::gen_components::{LoadingSpinner, SuccessBanner};
use crate::config::stored_token;
use crate::requests::profile_reqs::{
    HttpProfileApi, PasswordUpdateRequest, ProfileApi, UserProfile, PASSWORD_UPDATE_SUCCESS,
    USER_FOUND,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

pub const PROFILE_FETCH_FALLBACK: &str = "Unable to fetch profile.";
pub const PASSWORD_UPDATE_FALLBACK: &str = "Unable to update password.";
pub const PASSWORD_UPDATED_FALLBACK: &str = "Password updated successfully!";
pub const PROFILE_UNAVAILABLE: &str = "Unable to load profile information.";

/// Progress of the one-shot profile fetch. Never goes back to `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLoad {
    Loading,
    Loaded(UserProfile),
    Failed,
}

impl ProfileLoad {
    pub fn is_loading(&self) -> bool {
        matches!(self, ProfileLoad::Loading)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PasswordUpdateOutcome {
    /// Fields differ; nothing was sent.
    Mismatch,
    Updated { message: String },
    Rejected { message: String },
}

/// What the password form does once a submission has settled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormUpdate {
    pub banner: Option<String>,
    pub clear_fields: bool,
    pub dialog: Option<Dialog>,
}

impl PasswordUpdateOutcome {
    pub fn form_update(&self) -> FormUpdate {
        match self {
            PasswordUpdateOutcome::Updated { message } => FormUpdate {
                banner: Some(message.clone()),
                clear_fields: true,
                dialog: None,
            },
            _ => FormUpdate {
                dialog: self.dialog(),
                ..FormUpdate::default()
            },
        }
    }

    pub fn dialog(&self) -> Option<Dialog> {
        match self {
            PasswordUpdateOutcome::Mismatch => Some(Dialog::password_mismatch()),
            PasswordUpdateOutcome::Rejected { message } => Some(Dialog::error(message.clone())),
            PasswordUpdateOutcome::Updated { .. } => None,
        }
    }
}

pub async fn load_profile<A: ProfileApi>(api: &A, token: &str) -> Result<UserProfile, Dialog> {
    let reply = api.get_user_details(token).await;
    let message = reply.message_or(PROFILE_FETCH_FALLBACK);

    match (reply.has_code(USER_FOUND), reply.result) {
        (true, Some(profile)) => Ok(profile),
        (true, None) => {
            log::warn!("Profile reply had no result");
            Err(Dialog::error(PROFILE_FETCH_FALLBACK))
        }
        (false, _) => {
            log::warn!("Profile fetch rejected: {:?}", reply.code);
            Err(Dialog::error(message))
        }
    }
}

pub async fn submit_password_update<A: ProfileApi>(
    api: &A,
    token: &str,
    update: &PasswordUpdateRequest,
) -> PasswordUpdateOutcome {
    if !update.passwords_match() {
        return PasswordUpdateOutcome::Mismatch;
    }

    let reply = api.update_password(token, update).await;
    if reply.has_code(PASSWORD_UPDATE_SUCCESS) {
        log::info!("Password updated");
        PasswordUpdateOutcome::Updated {
            message: reply.message_or(PASSWORD_UPDATED_FALLBACK),
        }
    } else {
        log::warn!("Password update rejected: {:?}", reply.code);
        PasswordUpdateOutcome::Rejected {
            message: reply.message_or(PASSWORD_UPDATE_FALLBACK),
        }
    }
}

pub fn can_submit(load: &ProfileLoad, update: &PasswordUpdateRequest, updating: bool) -> bool {
    !load.is_loading() && !updating && update.is_complete()
}

fn bearer_token() -> String {
    stored_token().unwrap_or_else(|| {
        log::warn!("No stored token, sending request without credentials");
        String::new()
    })
}

#[derive(Properties, PartialEq)]
pub struct ProfileDetailsProps {
    pub load: ProfileLoad,
}

#[function_component(ProfileDetails)]
pub fn profile_details(props: &ProfileDetailsProps) -> Html {
    match &props.load {
        ProfileLoad::Loading => html! {
            <div class="text-center">
                <LoadingSpinner />
                <p>{"Loading profile..."}</p>
            </div>
        },
        ProfileLoad::Loaded(profile) => html! {
            <div>
                <p><strong>{"Name:"}</strong>{" "}{profile.full_name()}</p>
                <p><strong>{"Email:"}</strong>{" "}{&profile.email}</p>
                <p><strong>{"Contact Number:"}</strong>{" "}{&profile.contact_number}</p>
            </div>
        },
        ProfileLoad::Failed => html! {
            <p class="error-text">{PROFILE_UNAVAILABLE}</p>
        },
    }
}

#[function_component(Profile)]
pub fn profile() -> Html {
    let (_state, dispatch) = use_store::<AppState>();

    let profile_load = use_state(|| ProfileLoad::Loading);
    let new_password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let success_message: UseStateHandle<Option<String>> = use_state(|| None);
    let updating = use_state(|| false);

    // Fetch once on mount
    {
        let profile_load = profile_load.clone();
        let dispatch = dispatch.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let api = HttpProfileApi::default();
                match load_profile(&api, &bearer_token()).await {
                    Ok(profile) => profile_load.set(ProfileLoad::Loaded(profile)),
                    Err(dialog) => {
                        profile_load.set(ProfileLoad::Failed);
                        dispatch.reduce_mut(|state| state.dialog = Some(dialog));
                    }
                }
            });
            || ()
        });
    }

    let on_password_change = {
        let new_password = new_password.clone();
        Callback::from(move |e: InputEvent| {
            let target = e.target_unchecked_into::<HtmlInputElement>();
            new_password.set(target.value());
        })
    };

    let on_confirm_password_change = {
        let confirm_password = confirm_password.clone();
        Callback::from(move |e: InputEvent| {
            let target = e.target_unchecked_into::<HtmlInputElement>();
            confirm_password.set(target.value());
        })
    };

    let on_dismiss_success = {
        let success_message = success_message.clone();
        Callback::from(move |_: MouseEvent| success_message.set(None))
    };

    let on_submit = {
        let new_password = new_password.clone();
        let confirm_password = confirm_password.clone();
        let success_message = success_message.clone();
        let updating = updating.clone();
        let dispatch = dispatch.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *updating {
                return;
            }

            let update = PasswordUpdateRequest {
                new_password: (*new_password).clone(),
                confirm_password: (*confirm_password).clone(),
            };
            success_message.set(None);

            let new_password = new_password.clone();
            let confirm_password = confirm_password.clone();
            let success_message = success_message.clone();
            let updating = updating.clone();
            let dispatch = dispatch.clone();

            updating.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let api = HttpProfileApi::default();
                let outcome = submit_password_update(&api, &bearer_token(), &update).await;
                updating.set(false);

                let form_update = outcome.form_update();
                success_message.set(form_update.banner);
                if form_update.clear_fields {
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                if let Some(dialog) = form_update.dialog {
                    dispatch.reduce_mut(|state| state.dialog = Some(dialog));
                }
            });
        })
    };

    let current_update = PasswordUpdateRequest {
        new_password: (*new_password).clone(),
        confirm_password: (*confirm_password).clone(),
    };
    let submit_enabled = can_submit(&profile_load, &current_update, *updating);
    let busy = profile_load.is_loading() || *updating;

    html! {
        <div class="profile-container mt-5">
            <h2 class="text-xl font-semibold text-center mb-4">{"Profile Settings"}</h2>

            <div class="grid grid-cols-2 gap-6">
                <div class="profile-card shadow-sm rounded-lg">
                    <div class="profile-card-header">
                        <i class="ph ph-user-circle text-2xl"></i>
                        <h5>{"Your Profile"}</h5>
                    </div>
                    <div class="profile-card-body">
                        <ProfileDetails load={(*profile_load).clone()} />
                    </div>
                </div>

                <div class="profile-card shadow-sm rounded-lg">
                    <div class="profile-card-header">
                        <i class="ph ph-lock-key text-2xl"></i>
                        <h5>{"Update Password"}</h5>
                    </div>
                    <div class="profile-card-body">
                        if let Some(message) = &*success_message {
                            <SuccessBanner message={message.clone()} on_close={on_dismiss_success} />
                        }
                        <form onsubmit={on_submit} class="space-y-4">
                            <div class="form-group">
                                <label for="new-password" class="form-label">{"New Password"}</label>
                                <input
                                    type="password"
                                    id="new-password"
                                    value={(*new_password).clone()}
                                    oninput={on_password_change}
                                    class="form-input"
                                    placeholder="Enter new password"
                                    required=true
                                />
                            </div>

                            <div class="form-group">
                                <label for="confirm-password" class="form-label">{"Confirm New Password"}</label>
                                <input
                                    type="password"
                                    id="confirm-password"
                                    value={(*confirm_password).clone()}
                                    oninput={on_confirm_password_change}
                                    class="form-input"
                                    placeholder="Confirm new password"
                                    required=true
                                />
                            </div>

                            <button type="submit" class="submit-button w-full" disabled={!submit_enabled}>
                                if busy {
                                    <LoadingSpinner />
                                } else {
                                    {"Update Password"}
                                }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
