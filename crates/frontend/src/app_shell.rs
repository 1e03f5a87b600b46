//! Application shell - root components.
//!
//! - `AppShell` - auth gate (LoginPage / RegisterPage or MainLayout)
//! - `MainLayout` - Shell with Sidebar and the tab area

use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::modal_stack::ModalHost;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
        <ModalHost />
    }
}

/// Auth gate: unauthenticated users see the login form (with a local switch
/// to registration); an authenticated session renders the main layout.
#[component]
pub fn AppShell() -> impl IntoView {
    let (session, _) = use_session();
    let (show_register, set_show_register) = signal(false);

    view! {
        <Show
            when=move || session.get().token.is_some()
            fallback=move || {
                view! {
                    <Show
                        when=move || show_register.get()
                        fallback=move || {
                            view! {
                                <LoginPage on_register=Callback::new(move |_| {
                                    set_show_register.set(true)
                                }) />
                            }
                        }
                    >
                        <RegisterPage on_back=Callback::new(move |_| {
                            set_show_register.set(false)
                        }) />
                    </Show>
                }
            }
        >
            <MainLayout />
        </Show>
    }
}
