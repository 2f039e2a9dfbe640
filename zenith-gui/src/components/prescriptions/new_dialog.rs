use iced::{
    Element, Task,
    widget::{button, column, container, row, space, text, text_input},
};

#[derive(Debug, Clone)]
pub enum Message {
    NameInput(String),
    DosageInput(String),
    FrequencyInput(String),
    CancelPressed,
    AddPressed,
}

pub enum Action {
    None,
    Cancel,
    Add(NewPrescription),
}

#[derive(Debug, Clone)]
pub struct NewPrescription {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

pub struct Dialog {
    name: String,
    dosage: String,
    frequency: String,
}

impl Dialog {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                name: String::new(),
                dosage: String::new(),
                frequency: String::new(),
            },
            Task::none(),
        )
    }

    /// Reset the dialog state
    pub fn clear(&mut self) {
        self.name.clear();
        self.dosage.clear();
        self.frequency.clear();
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::NameInput(content) => {
                self.name = content;
                Action::None
            }
            Message::DosageInput(content) => {
                self.dosage = content;
                Action::None
            }
            Message::FrequencyInput(content) => {
                self.frequency = content;
                Action::None
            }
            Message::CancelPressed => {
                self.clear();
                Action::Cancel
            }
            Message::AddPressed => {
                let new = NewPrescription {
                    name: self.name.clone(),
                    dosage: self.dosage.clone(),
                    frequency: self.frequency.clone(),
                };

                self.clear();

                Action::Add(new)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        container(column![
            text("Add Prescription").size(18),
            text_input("Medication name", &self.name).on_input(Message::NameInput),
            text_input("Dosage (e.g., 500mg)", &self.dosage).on_input(Message::DosageInput),
            text_input("Frequency (e.g., Twice daily)", &self.frequency)
                .on_input(Message::FrequencyInput),
            space::vertical(),
            row![
                space::horizontal(),
                button(text("Cancel")).on_press(Message::CancelPressed),
                button(text("Add")).on_press_maybe(self.validate().then_some(Message::AddPressed)),
            ]
            .spacing(8),
        ])
        .padding(20)
        .max_width(380)
        .into()
    }

    fn validate(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.dosage.trim().is_empty()
            && !self.frequency.trim().is_empty()
    }
}
