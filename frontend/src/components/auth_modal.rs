//! Login / register modal.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api::auth_api::{login, register};
use crate::session::use_session;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

#[component]
pub fn AuthModal(on_close: Callback<()>) -> Element {
    let session = use_session();
    let mut mode = use_signal(|| AuthMode::Login);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let mut error_txt = use_signal(|| None::<String>);

    let submit = Callback::new(move |_: ()| {
        if *pending.peek() {
            return;
        }
        pending.set(true);
        error_txt.set(None);
        spawn(async move {
            let username = username.peek().trim().to_string();
            let email = email.peek().trim().to_string();
            let password = password.peek().clone();
            let result = async {
                if *mode.peek() == AuthMode::Register {
                    register(username.clone(), email, password.clone()).await?;
                }
                login(username, password).await
            }
            .await;
            match result {
                Ok(auth_session) => {
                    session.sign_in(auth_session);
                    on_close.call(());
                }
                Err(e) => {
                    tracing::error!("auth failed: {e}");
                    error_txt.set(Some(e.to_string()));
                }
            }
            pending.set(false);
        });
    });

    let title = use_memo(move || match mode() {
        AuthMode::Login => "Sign In",
        AuthMode::Register => "Create Account",
    });
    let switch_label = use_memo(move || match mode() {
        AuthMode::Login => "No account yet? Register",
        AuthMode::Register => "Already registered? Sign in",
    });
    let submit_label = use_memo(move || {
        if pending() {
            "Please wait..."
        } else {
            match mode() {
                AuthMode::Login => "Sign In",
                AuthMode::Register => "Register",
            }
        }
    });

    let field_style = "
        width: 100%;
        background: #27272a;
        border: 1px solid #3f3f46;
        border-radius: 6px;
        padding: 10px 12px;
        font-size: 14px;
        color: white;
        box-sizing: border-box;
    ";

    rsx! {
        div {
            id: "x-auth-modal-backdrop",
            style: "
                position: fixed;
                inset: 0;
                z-index: 100;
                background: rgba(0,0,0,0.7);
                display: flex;
                align-items: center;
                justify-content: center;
            ",
            onclick: move |_| on_close.call(()),
            div {
                style: "
                    background: #18181b;
                    border: 1px solid #3f3f46;
                    border-radius: 12px;
                    padding: 32px;
                    width: min(380px, 90vw);
                    display: flex;
                    flex-direction: column;
                    gap: 14px;
                ",
                // keep clicks inside the card from closing the modal
                onclick: move |event| event.stop_propagation(),

                h2 {
                    style: "margin: 0; font-size: 22px; color: white;",
                    "{title}"
                }

                if let Some(error) = error_txt() {
                    div {
                        style: "
                            background: rgba(248,113,113,0.1);
                            border: 1px solid #f87171;
                            border-radius: 6px;
                            padding: 8px 12px;
                            color: #fca5a5;
                            font-size: 13px;
                        ",
                        "{error}"
                    }
                }

                input {
                    r#type: "text",
                    placeholder: "Username",
                    style: field_style,
                    value: "{username}",
                    oninput: move |event| username.set(event.value()),
                }
                if mode() == AuthMode::Register {
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        style: field_style,
                        value: "{email}",
                        oninput: move |event| email.set(event.value()),
                    }
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    style: field_style,
                    value: "{password}",
                    oninput: move |event| password.set(event.value()),
                    onkeydown: move |event| {
                        if event.key() == Key::Enter {
                            submit.call(());
                        }
                    },
                }

                button {
                    disabled: pending(),
                    onclick: move |_| submit.call(()),
                    style: "
                        background: #4ade80;
                        color: black;
                        font-weight: 700;
                        font-size: 14px;
                        padding: 10px;
                        border: none;
                        border-radius: 8px;
                        cursor: pointer;
                    ",
                    "{submit_label}"
                }
                button {
                    onclick: move |_| {
                        let next = match *mode.peek() {
                            AuthMode::Login => AuthMode::Register,
                            AuthMode::Register => AuthMode::Login,
                        };
                        mode.set(next);
                        error_txt.set(None);
                    },
                    style: "background: none; border: none; color: #71717a; font-size: 13px; cursor: pointer;",
                    "{switch_label}"
                }
            }
        }
    }
}
