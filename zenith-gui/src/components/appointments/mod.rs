use derive_more::Deref;
use iced::{
    Element,
    Length::Fill,
    Task,
    widget::{Column, button, column, container, row, scrollable, space, text},
};
use strum::IntoEnumIterator;
use tokio::task::spawn_blocking;
use tracing::warn;
use zenith_lib::{
    Repository,
    repository::{Appointment, AppointmentFilter, AppointmentStatus, RecordId},
};

use crate::{config::Cfg, modal};

mod book_dialog;

#[derive(Debug, Clone)]
pub enum Message {
    StateChanged(State),
    FilterSelected(AppointmentFilter),
    BookPressed,
    Cancelled(RecordId),
    Completed(RecordId),
    // Components
    BookDialog(book_dialog::Message),
}

#[derive(Debug, Clone)]
pub enum State {
    Loading,
    Error(String),
    Loaded(Vec<Appointment>),
}

pub struct Appointments {
    repo: Repository,
    cfg: Cfg,
    state: State,
    filter: AppointmentFilter,
    // Components
    book_dialog: BookDialog,
}

impl Appointments {
    pub fn new(repo: Repository, cfg: Cfg) -> (Self, Task<Message>) {
        let filter = cfg.read().appointments.filter;
        let (dialog, dialog_task) = book_dialog::Dialog::new();

        (
            Self {
                repo: repo.clone(),
                cfg,
                state: State::Loading,
                filter,
                book_dialog: BookDialog {
                    dialog,
                    visible: false,
                },
            },
            Task::batch([dialog_task.map(Message::BookDialog), load_state(&repo)]),
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
            Message::FilterSelected(filter) => {
                self.filter = filter;

                let mut cfg = self.cfg.write();
                cfg.appointments.filter = filter;
                cfg.save();

                Task::none()
            }
            Message::BookPressed => {
                self.book_dialog.visible = true;
                Task::none()
            }
            Message::Cancelled(id) => {
                if let Err(err) = self.repo.cancel_appointment(id) {
                    warn!("Failed to cancel appointment: {err}");
                }

                self.refresh()
            }
            Message::Completed(id) => {
                if let Err(err) = self.repo.complete_appointment(id) {
                    warn!("Failed to complete appointment: {err}");
                }

                self.refresh()
            }
            Message::BookDialog(message) => match self.book_dialog.dialog.update(message) {
                book_dialog::Action::None => Task::none(),
                book_dialog::Action::Cancel => {
                    self.book_dialog.visible = false;
                    Task::none()
                }
                book_dialog::Action::Book(booking) => {
                    self.book_dialog.visible = false;

                    if let Err(err) =
                        self.repo
                            .book_appointment(&booking.doctor, booking.date, booking.time)
                    {
                        warn!("Failed to book appointment: {err}");
                    }

                    self.refresh()
                }
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let filter_button = |filter: AppointmentFilter| {
            let style = if self.filter == filter {
                button::primary
            } else {
                button::subtle
            };

            button(text(filter.to_string()))
                .style(style)
                .on_press(Message::FilterSelected(filter))
        };

        let header = row![
            text("Appointments").size(26),
            space::horizontal(),
            button(text("+ Book Appointment")).on_press(Message::BookPressed),
        ];

        let content = match &self.state {
            State::Loading => column![header, text("Loading appointments...")],
            State::Error(e) => column![header, text(e)],
            State::Loaded(appointments) => {
                let filtered = self.filter.apply(appointments);

                let list: Element<'_, Message> = if filtered.is_empty() {
                    text("No appointments found").into()
                } else {
                    scrollable(Column::with_children(
                        filtered.iter().map(appointment_row).collect::<Vec<_>>(),
                    ))
                    .into()
                };

                column![
                    header,
                    row(AppointmentFilter::iter().map(|f| filter_button(f).into())).spacing(6),
                    list,
                ]
            }
        }
        .spacing(12)
        .padding(16)
        .height(Fill);

        if self.book_dialog.visible {
            modal(
                content,
                self.book_dialog.view().map(Message::BookDialog),
                Some(Message::BookDialog(book_dialog::Message::CancelPressed)),
            )
        } else {
            content.into()
        }
    }
}

fn appointment_row(appointment: &Appointment) -> Element<'static, Message> {
    let status = match appointment.status() {
        AppointmentStatus::Upcoming => text("upcoming"),
        AppointmentStatus::Completed => text("completed").style(text::success),
        AppointmentStatus::Cancelled => text("cancelled").style(text::danger),
    };

    let mut actions = row![].spacing(6);
    if appointment.status() == AppointmentStatus::Upcoming {
        actions = actions.push(
            button(text("Done"))
                .style(button::subtle)
                .on_press(Message::Completed(appointment.id())),
        );
        actions = actions.push(
            button(text("✕"))
                .style(button::subtle)
                .on_press(Message::Cancelled(appointment.id())),
        );
    }

    container(
        row![
            column![
                text(format!("Dr. {}", appointment.doctor())),
                text(format!(
                    "{} at {}",
                    appointment.date(),
                    appointment.time().format("%H:%M")
                ))
                .size(12),
            ],
            space::horizontal(),
            status,
            actions,
        ]
        .spacing(10),
    )
    .padding(10)
    .into()
}

fn load_state(repo: &Repository) -> Task<Message> {
    let repo = repo.clone();
    Task::perform(
        async {
            spawn_blocking(move || match repo.appointments() {
                Ok(appointments) => State::Loaded(appointments),
                Err(err) => State::Error(err.to_string()),
            })
            .await
            .unwrap()
        },
        Message::StateChanged,
    )
}

#[derive(Deref)]
struct BookDialog {
    #[deref]
    dialog: book_dialog::Dialog,
    visible: bool,
}
