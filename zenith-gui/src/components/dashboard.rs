use iced::{
    Element,
    Length::Fill,
    Task,
    widget::{button, column, container, row, scrollable, space, text, text_input},
};
use tokio::task::spawn_blocking;
use tracing::warn;
use zenith_lib::{
    Repository,
    repository::{AppointmentFilter, RecordId, Reminder},
};

use crate::{components::parse_time, modal};

/// Placeholder metric until real health insights land.
const HEALTH_SCORE: u8 = 85;

#[derive(Debug, Clone)]
pub enum Message {
    StateChanged(State),
    AddReminderPressed,
    DialogDismissed,
    TitleInput(String),
    TimeInput(String),
    CreatePressed,
    ReminderDeleted(RecordId),
}

#[derive(Debug, Clone)]
pub enum State {
    Loading,
    Error(String),
    Loaded {
        reminders: Vec<Reminder>,
        upcoming_appointments: usize,
    },
}

pub struct Dashboard {
    repo: Repository,
    state: State,
    show_dialog: bool,
    // New reminder form
    title: String,
    time: String,
}

impl Dashboard {
    pub fn new(repo: Repository) -> (Self, Task<Message>) {
        (
            Self {
                repo: repo.clone(),
                state: State::Loading,
                show_dialog: false,
                title: String::new(),
                time: String::new(),
            },
            load_state(&repo),
        )
    }

    pub fn refresh(&self) -> Task<Message> {
        load_state(&self.repo)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StateChanged(state) => {
                self.state = state;
                Task::none()
            }
            Message::AddReminderPressed => {
                self.show_dialog = true;
                Task::none()
            }
            Message::DialogDismissed => {
                self.clear_form();
                Task::none()
            }
            Message::TitleInput(content) => {
                self.title = content;
                Task::none()
            }
            Message::TimeInput(content) => {
                self.time = content;
                Task::none()
            }
            Message::CreatePressed => {
                let Some(time) = parse_time(&self.time) else {
                    return Task::none();
                };

                if let Err(err) = self.repo.add_reminder(&self.title, time) {
                    warn!("Failed to add reminder: {err}");
                }
                self.clear_form();

                self.refresh()
            }
            Message::ReminderDeleted(id) => {
                if let Err(err) = self.repo.remove_reminder(id) {
                    warn!("Failed to remove reminder: {err}");
                }

                self.refresh()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = match &self.state {
            State::Loading => column![text("Loading your dashboard...")].into(),
            State::Error(e) => column![text(e)].into(),
            State::Loaded {
                reminders,
                upcoming_appointments,
            } => self.overview(reminders, *upcoming_appointments),
        };

        if self.show_dialog {
            modal(content, self.dialog(), Some(Message::DialogDismissed))
        } else {
            content
        }
    }

    fn overview<'a>(
        &'a self,
        reminders: &'a [Reminder],
        upcoming_appointments: usize,
    ) -> Element<'a, Message> {
        let name = self
            .repo
            .session()
            .user()
            .map(|user| user.name)
            .unwrap_or_else(|| "Patient".to_string());

        let reminder_rows = reminders.iter().map(|reminder| {
            row![
                column![
                    text(reminder.title().clone()),
                    text(reminder.time().format("%H:%M").to_string()).size(12),
                ],
                space::horizontal(),
                button(text("✕"))
                    .style(button::subtle)
                    .on_press(Message::ReminderDeleted(reminder.id())),
            ]
            .spacing(6)
            .into()
        });

        let reminders_card = column![
            text("Reminders").size(18),
            button(text("+ Add Reminder")).on_press(Message::AddReminderPressed),
            scrollable(iced::widget::Column::with_children(reminder_rows).spacing(4)),
        ]
        .spacing(10);

        let stats_card = column![
            text("Stats").size(18),
            stat_tile("Total Reminders", reminders.len().to_string()),
            stat_tile("Upcoming Appointments", upcoming_appointments.to_string()),
            stat_tile("Health Score", format!("{HEALTH_SCORE}/100")),
        ]
        .spacing(10);

        let consultations_card = column![
            text("Consultations").size(18),
            text("No upcoming consultations"),
        ]
        .spacing(10);

        column![
            text(format!("Welcome, {name}!")).size(26),
            text("Here's your health overview"),
            row![
                container(reminders_card).padding(16).width(Fill),
                container(stats_card).padding(16).width(Fill),
                container(consultations_card).padding(16).width(Fill),
            ]
            .spacing(12),
        ]
        .spacing(12)
        .padding(16)
        .into()
    }

    fn dialog(&self) -> Element<'_, Message> {
        container(column![
            text("Add New Reminder").size(18),
            text_input("Reminder title", &self.title).on_input(Message::TitleInput),
            text_input("Time, e.g. 08:30", &self.time).on_input(Message::TimeInput),
            space::vertical(),
            row![
                space::horizontal(),
                button(text("Cancel")).on_press(Message::DialogDismissed),
                button(text("Add"))
                    .on_press_maybe(self.validate().then_some(Message::CreatePressed)),
            ]
            .spacing(8),
        ])
        .padding(20)
        .max_width(380)
        .into()
    }

    fn validate(&self) -> bool {
        !self.title.trim().is_empty() && parse_time(&self.time).is_some()
    }

    fn clear_form(&mut self) {
        self.title.clear();
        self.time.clear();
        self.show_dialog = false;
    }
}

fn stat_tile<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    container(column![text(label).size(12), text(value).size(22)])
        .padding(10)
        .into()
}

fn load_state(repo: &Repository) -> Task<Message> {
    let repo = repo.clone();
    Task::perform(
        async {
            spawn_blocking(move || {
                let reminders = match repo.reminders() {
                    Ok(reminders) => reminders,
                    Err(err) => return State::Error(err.to_string()),
                };
                let upcoming_appointments = match repo.appointments() {
                    Ok(appointments) => AppointmentFilter::Upcoming.apply(&appointments).len(),
                    Err(err) => return State::Error(err.to_string()),
                };

                State::Loaded {
                    reminders,
                    upcoming_appointments,
                }
            })
            .await
            .unwrap()
        },
        Message::StateChanged,
    )
}
