use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context::do_login, context::use_session};

#[component]
pub fn LoginPage(
    /// Switch to the registration form
    on_register: Callback<()>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_session) = use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    // Updating the session switches the shell to MainLayout.
                    do_login(set_session, response);
                    set_is_loading.set(false);
                }
                Err(_) => {
                    set_error_message
                        .set(Some("Credenciales incorrectas. Inténtalo de nuevo.".to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Gestor de Ventas"</h1>
                <h2>"Iniciar Sesión"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Usuario"</label>
                        <input
                            type="text"
                            id="email"
                            placeholder="Ingrese su correo electrónico"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "¿No tienes una cuenta? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            on_register.run(());
                        }>"Regístrate"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
