use std::sync::Arc;

use iced::{
    Color, Element,
    Length::{self, Fill},
    Task, Theme, application,
    widget::{button, center, column, container, mouse_area, opaque, row, space, stack, text},
};
use parking_lot::RwLock;
use tracing::{Level, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use zenith_lib::{Repository, repository::ThemeMode};

use crate::{
    components::{
        appointments::{self, Appointments},
        dashboard::{self, Dashboard},
        feedback::{self, FeedbackBoard},
        login::{self, Login},
        prescriptions::{self, Prescriptions},
        profile::{self, ProfileEditor},
        wellness::{self, Wellness},
    },
    config::GuiConfig,
};

pub mod components;
pub mod config;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Login,
    Dashboard,
    Appointments,
    Prescriptions,
    Wellness,
    Profile,
    Feedback,
}

#[derive(Debug, Clone)]
enum Message {
    NavigateTo(Screen),
    ThemeToggled,
    SignOutPressed,
    Login(login::Message),
    Dashboard(dashboard::Message),
    Appointments(appointments::Message),
    Prescriptions(prescriptions::Message),
    Wellness(wellness::Message),
    Profile(profile::Message),
    Feedback(feedback::Message),
}

struct App {
    title: String,
    theme: Theme,
    repo: Repository,
    screen: Screen,
    // Components
    login: Login,
    dashboard: Dashboard,
    appointments: Appointments,
    prescriptions: Prescriptions,
    wellness: Wellness,
    profile: ProfileEditor,
    feedback: FeedbackBoard,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        let repo = Repository::new().expect("the data store must be reachable");
        let cfg = Arc::new(RwLock::new(GuiConfig::load()));

        // An unauthenticated start lands on the login screen
        let screen = if repo.session().is_signed_in() {
            Screen::Dashboard
        } else {
            Screen::Login
        };

        let (login, login_task) = Login::new(repo.clone());
        let (dashboard, dashboard_task) = Dashboard::new(repo.clone());
        let (appointments, appointments_task) = Appointments::new(repo.clone(), cfg.clone());
        let (prescriptions, prescriptions_task) = Prescriptions::new(repo.clone());
        let (wellness, wellness_task) = Wellness::new(cfg.clone());
        let (profile, profile_task) = ProfileEditor::new(repo.clone());
        let (feedback, feedback_task) = FeedbackBoard::new(repo.clone());

        (
            Self {
                title: "Zenith".into(),
                theme: theme_for(repo.session().theme()),
                repo,
                screen,
                login,
                dashboard,
                appointments,
                prescriptions,
                wellness,
                profile,
                feedback,
            },
            Task::batch([
                login_task.map(Message::Login),
                dashboard_task.map(Message::Dashboard),
                appointments_task.map(Message::Appointments),
                prescriptions_task.map(Message::Prescriptions),
                wellness_task.map(Message::Wellness),
                profile_task.map(Message::Profile),
                feedback_task.map(Message::Feedback),
            ]),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(screen) => {
                self.screen = screen;

                // Reload the records behind the page being shown
                match screen {
                    Screen::Dashboard => self.dashboard.refresh().map(Message::Dashboard),
                    Screen::Appointments => self.appointments.refresh().map(Message::Appointments),
                    Screen::Prescriptions => {
                        self.prescriptions.refresh().map(Message::Prescriptions)
                    }
                    Screen::Profile => self.profile.refresh().map(Message::Profile),
                    Screen::Feedback => self.feedback.refresh().map(Message::Feedback),
                    Screen::Wellness | Screen::Login => Task::none(),
                }
            }
            Message::ThemeToggled => {
                match self.repo.session().toggle_theme() {
                    Ok(mode) => self.theme = theme_for(mode),
                    Err(err) => warn!("Failed to persist the theme: {err}"),
                }
                Task::none()
            }
            Message::SignOutPressed => {
                if let Err(err) = self.repo.sign_out() {
                    warn!("Failed to sign out: {err}");
                }
                self.screen = Screen::Login;
                Task::none()
            }
            // Redirect messages to relevant child components
            Message::Login(msg) => match self.login.update(msg) {
                login::Action::None => Task::none(),
                login::Action::SignedIn => {
                    self.screen = Screen::Dashboard;
                    self.dashboard.refresh().map(Message::Dashboard)
                }
            },
            Message::Dashboard(msg) => self.dashboard.update(msg).map(Message::Dashboard),
            Message::Appointments(msg) => self.appointments.update(msg).map(Message::Appointments),
            Message::Prescriptions(msg) => {
                self.prescriptions.update(msg).map(Message::Prescriptions)
            }
            Message::Wellness(msg) => self.wellness.update(msg).map(Message::Wellness),
            Message::Profile(msg) => self.profile.update(msg).map(Message::Profile),
            Message::Feedback(msg) => self.feedback.update(msg).map(Message::Feedback),
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let content = match self.screen {
            Screen::Login => return self.login.view().map(Message::Login),
            Screen::Dashboard => self.dashboard.view().map(Message::Dashboard),
            Screen::Appointments => self.appointments.view().map(Message::Appointments),
            Screen::Prescriptions => self.prescriptions.view().map(Message::Prescriptions),
            Screen::Wellness => self.wellness.view().map(Message::Wellness),
            Screen::Profile => self.profile.view().map(Message::Profile),
            Screen::Feedback => self.feedback.view().map(Message::Feedback),
        };

        column![self.nav_bar(), content].height(Fill).into()
    }

    fn nav_bar(&self) -> Element<'_, Message> {
        let link = |label: &'static str, screen: Screen| {
            let style = if self.screen == screen {
                button::primary
            } else {
                button::subtle
            };

            button(text(label))
                .style(style)
                .on_press(Message::NavigateTo(screen))
        };

        let theme_label = match self.repo.session().theme() {
            ThemeMode::Light => "Dark mode",
            ThemeMode::Dark => "Light mode",
        };

        row![
            text("Zenith").size(22),
            link("Dashboard", Screen::Dashboard),
            link("Appointments", Screen::Appointments),
            link("Prescriptions", Screen::Prescriptions),
            link("Wellness", Screen::Wellness),
            link("Profile", Screen::Profile),
            link("Feedback", Screen::Feedback),
            space::horizontal(),
            button(text(theme_label))
                .style(button::subtle)
                .on_press(Message::ThemeToggled),
            button(text("Sign out"))
                .style(button::subtle)
                .on_press(Message::SignOutPressed),
        ]
        .spacing(8)
        .padding(10)
        .into()
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

fn theme_for(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme::Light,
        ThemeMode::Dark => Theme::Dark,
    }
}

pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_click_outside: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let mouse_area = mouse_area(center(opaque(content)).style(|_theme| {
        container::Style {
            background: Some(
                Color {
                    a: 0.8,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        }
    }));

    stack![
        base.into(),
        opaque(if let Some(msg) = on_click_outside {
            mouse_area.on_press(msg)
        } else {
            mouse_area
        })
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
