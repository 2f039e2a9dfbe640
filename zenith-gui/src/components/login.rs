use iced::{
    Element, Task,
    widget::{button, center, checkbox, column, container, row, space, text, text_input},
};
use zenith_lib::{
    Repository,
    repository::auth::{Identity, IdentityProvider, LocalProvider},
};

#[derive(Debug, Clone)]
pub enum Message {
    EmailInput(String),
    PasswordInput(String),
    ShowPasswordToggled(bool),
    RememberToggled(bool),
    SignInPressed,
    FederatedPressed,
}

/// Action used for communicating with the parent component
pub enum Action {
    None,
    SignedIn,
}

pub struct Login {
    repo: Repository,
    provider: LocalProvider,
    email: String,
    password: String,
    show_password: bool,
    remember: bool,
    error: Option<String>,
}

impl Login {
    pub fn new(repo: Repository) -> (Self, Task<Message>) {
        // Prefill the remembered email, if the user opted in last time
        let email = repo.session().remember_email().unwrap_or_default();

        (
            Self {
                repo,
                provider: LocalProvider::new(),
                email,
                password: String::new(),
                show_password: false,
                remember: false,
                error: None,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::EmailInput(content) => {
                self.email = content;
                Action::None
            }
            Message::PasswordInput(content) => {
                self.password = content;
                Action::None
            }
            Message::ShowPasswordToggled(state) => {
                self.show_password = state;
                Action::None
            }
            Message::RememberToggled(state) => {
                self.remember = state;
                Action::None
            }
            Message::SignInPressed => match self.provider.sign_in(&self.email, &self.password) {
                Ok(identity) => self.finish(identity),
                Err(err) => {
                    self.error = Some(err.to_string());
                    Action::None
                }
            },
            Message::FederatedPressed => match self.provider.sign_in_federated() {
                Ok(identity) => self.finish(identity),
                Err(err) => {
                    self.error = Some(err.to_string());
                    Action::None
                }
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut form = column![
            text("Welcome to Zenith").size(28),
            text("Your healthcare companion"),
            text_input("Email", &self.email).on_input(Message::EmailInput),
            text_input("Password", &self.password)
                .secure(!self.show_password)
                .on_input(Message::PasswordInput),
            row![
                checkbox(self.show_password).on_toggle(Message::ShowPasswordToggled),
                text("Show password"),
                space::horizontal(),
                checkbox(self.remember).on_toggle(Message::RememberToggled),
                text("Remember me"),
            ]
            .spacing(6),
        ]
        .spacing(12);

        if let Some(error) = &self.error {
            form = form.push(text(error).style(text::danger));
        }

        form = form.push(
            button(text("Sign in"))
                .on_press_maybe(self.validate().then_some(Message::SignInPressed)),
        );
        form = form.push(
            button(text("Continue with Google"))
                .style(button::subtle)
                .on_press(Message::FederatedPressed),
        );

        center(container(form).padding(30).max_width(420)).into()
    }

    /// Record the sign-in and hand control back to the parent.
    fn finish(&mut self, identity: Identity) -> Action {
        if let Err(err) = self.repo.sign_in(identity, self.remember) {
            self.error = Some(err.to_string());
            return Action::None;
        }

        self.error = None;
        self.password.clear();

        Action::SignedIn
    }

    fn validate(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}
