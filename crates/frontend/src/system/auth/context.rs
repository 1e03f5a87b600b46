use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;

use super::storage;

/// Session snapshot for the running screen session.
///
/// There is no ambient singleton: the state lives in a signal provided via
/// context, and everything that needs the session (API client, guards,
/// header) reads it from there.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

/// Session context provider component.
///
/// On mount it restores the persisted snapshot from localStorage, or yields
/// an empty (logged-out) session.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let initial = SessionState {
        token: storage::get_token(),
        user: storage::get_user(),
    };
    let (session, set_session) = signal(initial);

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the session state
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session = use_context::<ReadSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}

/// Apply a successful login: persist the snapshot and update the state.
pub fn do_login(set_session: WriteSignal<SessionState>, response: LoginResponse) {
    storage::save_session(&response.token, &response.user);

    set_session.set(SessionState {
        token: Some(response.token),
        user: Some(response.user),
    });
}

/// Log out: clear the persisted snapshot and the state. The API keeps no
/// server-side session, so no request is involved.
pub fn do_logout(set_session: WriteSignal<SessionState>) {
    storage::clear_session();
    set_session.set(SessionState::default());
}
