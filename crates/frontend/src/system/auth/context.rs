use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::enums::UserRole;
use contracts::system::auth::UserInfo;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user_info.as_ref().map(|user| user.role.clone())
    }

    pub fn is_employer(&self) -> bool {
        self.role().map(|role| role.is_employer()).unwrap_or(false)
    }

    pub fn is_cleaner(&self) -> bool {
        self.role().map(|role| role.is_cleaner()).unwrap_or(false)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState::default());

    // Restore the session from localStorage on mount; an invalid token is
    // simply cleared, the user lands on the login page.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(access_token) = storage::get_access_token() {
                match api::get_current_user().await {
                    Ok(user_info) => {
                        auth_state.set(AuthState {
                            access_token: Some(access_token),
                            user_info: Some(user_info),
                        });
                    }
                    Err(_) => {
                        storage::clear_access_token();
                    }
                }
            }
        });
    });

    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Helper: Perform login
pub async fn do_login(auth_state: RwSignal<AuthState>, email: String, password: String) -> Result<(), String> {
    let response = api::login(email, password).await?;
    storage::save_access_token(&response.access);

    let user_info = api::get_current_user().await?;
    auth_state.set(AuthState {
        access_token: Some(response.access),
        user_info: Some(user_info),
    });
    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(auth_state: RwSignal<AuthState>) {
    storage::clear_access_token();
    auth_state.set(AuthState::default());
}
