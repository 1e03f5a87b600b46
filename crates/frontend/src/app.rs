use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal_stack::ModalStackService;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Centralized modal stack for dialogs and confirmations.
    provide_context(ModalStackService::new());

    view! {
        <SessionProvider>
            <AppShell />
        </SessionProvider>
    }
}
