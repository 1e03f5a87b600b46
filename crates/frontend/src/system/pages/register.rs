use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::api;

#[component]
pub fn RegisterPage(
    /// Return to the login form
    on_back: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (success_message, set_success_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let name_val = name.get();
        let email_val = email.get();
        let password_val = password.get();

        set_error_message.set(None);
        set_success_message.set(None);

        spawn_local(async move {
            match api::register(name_val, email_val, password_val).await {
                Ok(()) => {
                    set_success_message.set(Some(
                        "¡Usuario registrado con éxito! Redirigiendo al login...".to_string(),
                    ));
                    TimeoutFuture::new(2_000).await;
                    on_back.run(());
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Gestor de Ventas"</h1>
                <h2>"Crear Cuenta"</h2>
                <p class="login-subtitle">"Ingresa tus datos para registrarte."</p>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || success_message.get().is_some()>
                    <div class="success-message">
                        {move || success_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"Nombre de Usuario"</label>
                        <input
                            type="text"
                            id="name"
                            placeholder="tu_usuario"
                            value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="email">"Correo Electrónico"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="tu@correo.com"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
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
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        "Registrarse"
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "¿Ya tienes una cuenta? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            on_back.run(());
                        }>"Inicia sesión"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
