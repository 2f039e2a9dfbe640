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
    repository::{Prescription, PrescriptionStatus, RecordId},
};

use crate::modal;

mod new_dialog;

#[derive(Debug, Clone)]
pub enum Message {
    StateChanged(State),
    TabSelected(PrescriptionStatus),
    AddPressed,
    RefillRequested(RecordId),
    Completed(RecordId),
    // Components
    NewDialog(new_dialog::Message),
}

#[derive(Debug, Clone)]
pub enum State {
    Loading,
    Error(String),
    Loaded(Vec<Prescription>),
}

pub struct Prescriptions {
    repo: Repository,
    state: State,
    active_tab: PrescriptionStatus,
    // Components
    new_dialog: NewDialog,
}

impl Prescriptions {
    pub fn new(repo: Repository) -> (Self, Task<Message>) {
        let (dialog, dialog_task) = new_dialog::Dialog::new();

        (
            Self {
                repo: repo.clone(),
                state: State::Loading,
                active_tab: PrescriptionStatus::Active,
                new_dialog: NewDialog {
                    dialog,
                    visible: false,
                },
            },
            Task::batch([dialog_task.map(Message::NewDialog), load_state(&repo)]),
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
            Message::TabSelected(tab) => {
                self.active_tab = tab;
                Task::none()
            }
            Message::AddPressed => {
                self.new_dialog.visible = true;
                Task::none()
            }
            Message::RefillRequested(id) => {
                if let Err(err) = self.repo.request_refill(id) {
                    warn!("Failed to request a refill: {err}");
                }

                self.refresh()
            }
            Message::Completed(id) => {
                if let Err(err) = self.repo.complete_prescription(id) {
                    warn!("Failed to complete prescription: {err}");
                }

                self.refresh()
            }
            Message::NewDialog(message) => match self.new_dialog.dialog.update(message) {
                new_dialog::Action::None => Task::none(),
                new_dialog::Action::Cancel => {
                    self.new_dialog.visible = false;
                    Task::none()
                }
                new_dialog::Action::Add(new) => {
                    self.new_dialog.visible = false;

                    if let Err(err) =
                        self.repo
                            .add_prescription(&new.name, &new.dosage, &new.frequency)
                    {
                        warn!("Failed to add prescription: {err}");
                    }

                    self.refresh()
                }
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let tab_button = |tab: PrescriptionStatus| {
            let style = if self.active_tab == tab {
                button::primary
            } else {
                button::subtle
            };

            button(text(tab.to_string()))
                .style(style)
                .on_press(Message::TabSelected(tab))
        };

        let header = row![
            text("Prescriptions").size(26),
            space::horizontal(),
            button(text("+ Add Prescription")).on_press(Message::AddPressed),
        ];

        let content = match &self.state {
            State::Loading => column![header, text("Loading prescriptions...")],
            State::Error(e) => column![header, text(e)],
            State::Loaded(prescriptions) => {
                let shown: Vec<_> = prescriptions
                    .iter()
                    .filter(|prescription| prescription.status() == self.active_tab)
                    .collect();

                let list: Element<'_, Message> = if shown.is_empty() {
                    text(format!("No {} prescriptions", self.active_tab)).into()
                } else {
                    scrollable(Column::with_children(
                        shown.into_iter().map(prescription_row).collect::<Vec<_>>(),
                    ))
                    .into()
                };

                column![
                    header,
                    row(PrescriptionStatus::iter().map(|tab| tab_button(tab).into())).spacing(6),
                    list,
                ]
            }
        }
        .spacing(12)
        .padding(16)
        .height(Fill);

        if self.new_dialog.visible {
            modal(
                content,
                self.new_dialog.view().map(Message::NewDialog),
                Some(Message::NewDialog(new_dialog::Message::CancelPressed)),
            )
        } else {
            content.into()
        }
    }
}

fn prescription_row(prescription: &Prescription) -> Element<'static, Message> {
    let mut details = format!(
        "Dosage: {} | Frequency: {}",
        prescription.dosage(),
        prescription.frequency()
    );
    if prescription.refills() > 0 {
        details.push_str(&format!(" | Refills: {}", prescription.refills()));
    }

    let mut actions = row![].spacing(6);
    if prescription.status() == PrescriptionStatus::Active {
        actions = actions.push(
            button(text("Request Refill"))
                .on_press(Message::RefillRequested(prescription.id())),
        );
        actions = actions.push(
            button(text("Mark completed"))
                .style(button::subtle)
                .on_press(Message::Completed(prescription.id())),
        );
    }

    container(
        row![
            column![
                text(prescription.name().clone()),
                text(details).size(12),
            ],
            space::horizontal(),
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
            spawn_blocking(move || match repo.prescriptions() {
                Ok(prescriptions) => State::Loaded(prescriptions),
                Err(err) => State::Error(err.to_string()),
            })
            .await
            .unwrap()
        },
        Message::StateChanged,
    )
}

#[derive(Deref)]
struct NewDialog {
    #[deref]
    dialog: new_dialog::Dialog,
    visible: bool,
}
