//! Registration page with client-side validation mirroring the backend
//! rules, plus a live password-policy checklist.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

/// Password policy checklist, evaluated live as the user types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SenhaRules {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl SenhaRules {
    #[must_use]
    pub fn all(self) -> bool {
        self.length && self.uppercase && self.lowercase && self.digit && self.symbol
    }
}

/// Evaluate the password policy for `senha`.
#[must_use]
pub fn senha_rules(senha: &str) -> SenhaRules {
    SenhaRules {
        length: senha.chars().count() >= 8,
        uppercase: senha.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: senha.chars().any(|c| c.is_ascii_lowercase()),
        digit: senha.chars().any(|c| c.is_ascii_digit()),
        symbol: senha.chars().any(|c| "!@#$%^&*(),.?\":{}|<>".contains(c)),
    }
}

/// Same email shape the backend enforces: `local@domain.tld`, no
/// whitespace anywhere.
#[must_use]
pub fn plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Field-level validation messages for the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
    pub confirma: Option<String>,
}

impl RegisterErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nome.is_none()
            && self.email.is_none()
            && self.senha.is_none()
            && self.confirma.is_none()
    }
}

/// Validate the form fields, reporting the first failed rule per field.
#[must_use]
pub fn validate(nome: &str, email: &str, senha: &str, confirma: &str) -> RegisterErrors {
    let mut errors = RegisterErrors::default();

    let nome = nome.trim();
    if nome.is_empty() {
        errors.nome = Some("Nome é obrigatório.".to_owned());
    } else if nome.chars().count() < 3 {
        errors.nome = Some("Nome deve ter pelo menos 3 caracteres.".to_owned());
    }

    let email = email.trim();
    if email.is_empty() {
        errors.email = Some("Email é obrigatório.".to_owned());
    } else if !plausible_email(email) {
        errors.email = Some("Formato de email inválido.".to_owned());
    }

    let rules = senha_rules(senha);
    if senha.is_empty() {
        errors.senha = Some("Senha é obrigatória.".to_owned());
    } else if !rules.length {
        errors.senha = Some("Senha deve ter pelo menos 8 caracteres.".to_owned());
    } else if !rules.uppercase {
        errors.senha = Some("Senha deve conter ao menos uma letra maiúscula.".to_owned());
    } else if !rules.lowercase {
        errors.senha = Some("Senha deve conter ao menos uma letra minúscula.".to_owned());
    } else if !rules.digit {
        errors.senha = Some("Senha deve conter ao menos um número.".to_owned());
    } else if !rules.symbol {
        errors.senha = Some("Senha deve conter ao menos um símbolo (ex: !@#$%).".to_owned());
    }

    if confirma.is_empty() {
        errors.confirma = Some("Confirmação de senha é obrigatória.".to_owned());
    } else if senha != confirma {
        errors.confirma = Some("As senhas não coincidem.".to_owned());
    }

    errors
}

fn rule_item(ok: bool, label: &'static str) -> impl IntoView {
    view! {
        <li class=if ok { "rule rule--ok" } else { "rule" }>
            {if ok { "✔ " } else { "✘ " }}
            {label}
        </li>
    }
}

fn field_error(message: Option<String>) -> impl IntoView {
    message.map(|m| view! { <p class="auth-error">{m}</p> })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let nome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let confirma = RwSignal::new(String::new());
    let errors = RwSignal::new(RegisterErrors::default());
    let backend_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let rules = move || senha_rules(&senha.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let checked = validate(&nome.get(), &email.get(), &senha.get(), &confirma.get());
        let ok = checked.is_empty();
        errors.set(checked);
        if !ok {
            return;
        }
        busy.set(true);
        backend_error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let nome_value = nome.get().trim().to_owned();
            let email_value = email.get().trim().to_owned();
            let senha_value = senha.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&nome_value, &email_value, &senha_value).await {
                    Ok(_) => {
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        backend_error
                            .set(err.user_message("Erro ao cadastrar. Tente novamente."));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Criar Conta"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Nome completo"
                        prop:value=move || nome.get()
                        on:input=move |ev| nome.set(event_target_value(&ev))
                    />
                    {move || field_error(errors.get().nome)}

                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    {move || field_error(errors.get().email)}

                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Senha"
                        prop:value=move || senha.get()
                        on:input=move |ev| senha.set(event_target_value(&ev))
                    />
                    <ul class="auth-rules">
                        {move || rule_item(rules().length, "Pelo menos 8 caracteres")}
                        {move || rule_item(rules().uppercase, "Uma letra maiúscula")}
                        {move || rule_item(rules().lowercase, "Uma letra minúscula")}
                        {move || rule_item(rules().digit, "Um número")}
                        {move || rule_item(rules().symbol, "Um símbolo (!@#$%)")}
                    </ul>
                    {move || field_error(errors.get().senha)}

                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirmar senha"
                        prop:value=move || confirma.get()
                        on:input=move |ev| confirma.set(event_target_value(&ev))
                    />
                    {move || field_error(errors.get().confirma)}

                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registrando..." } else { "Registrar" }}
                    </button>
                    <Show when=move || !backend_error.get().is_empty()>
                        <p class="auth-error">{move || backend_error.get()}</p>
                    </Show>
                </form>
                <p class="auth-switch">
                    "Já tem uma conta? " <a href="/login">"Faça login"</a>
                </p>
            </div>
        </div>
    }
}
