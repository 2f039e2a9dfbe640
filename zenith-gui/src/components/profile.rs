use iced::{
    Element,
    Length::Fill,
    Task,
    widget::{button, column, combo_box, container, row, space, text, text_input},
};
use strum::IntoEnumIterator;
use tokio::task::spawn_blocking;
use tracing::warn;
use zenith_lib::{
    Repository,
    repository::{BloodType, HealthProfile},
};

use crate::components::parse_date;

#[derive(Debug, Clone)]
pub enum Message {
    StateChanged(State),
    EditPressed,
    SavePressed,
    NameInput(String),
    EmailInput(String),
    PhoneInput(String),
    DobInput(String),
    BloodTypeSelected(BloodType),
    HeightInput(String),
    WeightInput(String),
    AllergiesInput(String),
}

#[derive(Debug, Clone)]
pub enum State {
    Loading,
    Error(String),
    Loaded(HealthProfile),
}

pub struct ProfileEditor {
    repo: Repository,
    state: State,
    editing: bool,
    // Form fields, filled from the loaded profile
    name: String,
    email: String,
    phone: String,
    dob: String,
    blood_type: Option<BloodType>,
    height: String,
    weight: String,
    allergies: String,
    blood_types: combo_box::State<BloodType>,
}

impl ProfileEditor {
    pub fn new(repo: Repository) -> (Self, Task<Message>) {
        (
            Self {
                repo: repo.clone(),
                state: State::Loading,
                editing: false,
                name: String::new(),
                email: String::new(),
                phone: String::new(),
                dob: String::new(),
                blood_type: None,
                height: String::new(),
                weight: String::new(),
                allergies: String::new(),
                blood_types: combo_box::State::new(BloodType::iter().collect()),
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
                if let State::Loaded(profile) = &state {
                    self.fill_form(profile);
                }
                self.state = state;
            }
            Message::EditPressed => self.editing = true,
            Message::SavePressed => {
                let mut profile = HealthProfile::default();
                profile.set_name(self.name.clone());
                profile.set_email(self.email.clone());
                profile.set_phone(self.phone.clone());
                profile.set_dob(parse_date(&self.dob));
                profile.set_blood_type(self.blood_type.unwrap_or_default());
                profile.set_height(self.height.clone());
                profile.set_weight(self.weight.clone());
                profile.set_allergies(self.allergies.clone());

                if let Err(err) = self.repo.save_health_profile(&profile) {
                    warn!("Failed to save the health profile: {err}");
                }

                self.editing = false;
                self.state = State::Loaded(profile);
            }
            Message::NameInput(content) => self.name = content,
            Message::EmailInput(content) => self.email = content,
            Message::PhoneInput(content) => self.phone = content,
            Message::DobInput(content) => self.dob = content,
            Message::BloodTypeSelected(blood_type) => self.blood_type = Some(blood_type),
            Message::HeightInput(content) => self.height = content,
            Message::WeightInput(content) => self.weight = content,
            Message::AllergiesInput(content) => self.allergies = content,
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let action = if self.editing {
            button(text("Save Changes"))
                .on_press_maybe(self.validate().then_some(Message::SavePressed))
        } else {
            button(text("Edit Profile")).on_press(Message::EditPressed)
        };

        let header = row![text("Profile").size(26), space::horizontal(), action];

        let content = match &self.state {
            State::Loading => column![header, text("Loading your profile...")],
            State::Error(e) => column![header, text(e)],
            State::Loaded(_) => {
                let blood_type: Element<'_, Message> = if self.editing {
                    combo_box(
                        &self.blood_types,
                        "Select a blood type",
                        self.blood_type.as_ref(),
                        Message::BloodTypeSelected,
                    )
                    .into()
                } else {
                    text(
                        self.blood_type
                            .map(|blood_type| blood_type.to_string())
                            .unwrap_or_default(),
                    )
                    .into()
                };

                column![
                    header,
                    row![
                        self.field("Full Name", &self.name, Message::NameInput),
                        self.field("Email", &self.email, Message::EmailInput),
                    ]
                    .spacing(12),
                    row![
                        self.field("Phone", &self.phone, Message::PhoneInput),
                        self.field("Date of Birth (e.g. 1990-04-21)", &self.dob, Message::DobInput),
                    ]
                    .spacing(12),
                    row![
                        column![text("Blood Type").size(12), blood_type].spacing(4).width(Fill),
                        self.field("Height", &self.height, Message::HeightInput),
                    ]
                    .spacing(12),
                    row![
                        self.field("Weight", &self.weight, Message::WeightInput),
                        self.field("Allergies", &self.allergies, Message::AllergiesInput),
                    ]
                    .spacing(12),
                ]
            }
        };

        container(content.spacing(12).padding(16)).into()
    }

    /// A labeled input that only accepts edits in editing mode.
    fn field<'a>(
        &'a self,
        label: &'a str,
        value: &'a str,
        on_input: fn(String) -> Message,
    ) -> Element<'a, Message> {
        let mut input = text_input(label, value);
        if self.editing {
            input = input.on_input(on_input);
        }

        column![text(label).size(12), input]
            .spacing(4)
            .width(Fill)
            .into()
    }

    fn validate(&self) -> bool {
        self.dob.trim().is_empty() || parse_date(&self.dob).is_some()
    }

    fn fill_form(&mut self, profile: &HealthProfile) {
        self.name = profile.name().clone();
        self.email = profile.email().clone();
        self.phone = profile.phone().clone();
        self.dob = profile
            .dob()
            .map(|dob| dob.to_string())
            .unwrap_or_default();
        self.blood_type = Some(profile.blood_type());
        self.height = profile.height().clone();
        self.weight = profile.weight().clone();
        self.allergies = profile.allergies().clone();
    }
}

fn load_state(repo: &Repository) -> Task<Message> {
    let repo = repo.clone();
    Task::perform(
        async {
            spawn_blocking(move || match repo.health_profile() {
                Ok(profile) => State::Loaded(profile),
                Err(err) => State::Error(err.to_string()),
            })
            .await
            .unwrap()
        },
        Message::StateChanged,
    )
}
