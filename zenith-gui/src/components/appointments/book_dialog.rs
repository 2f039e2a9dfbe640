use chrono::{NaiveDate, NaiveTime};
use iced::{
    Element, Task,
    widget::{button, column, container, row, space, text, text_input},
};

use crate::components::{parse_date, parse_time};

#[derive(Debug, Clone)]
pub enum Message {
    DoctorInput(String),
    DateInput(String),
    TimeInput(String),
    CancelPressed,
    BookPressed,
}

pub enum Action {
    None,
    Cancel,
    Book(Booking),
}

#[derive(Debug, Clone)]
pub struct Booking {
    pub doctor: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

pub struct Dialog {
    doctor: String,
    date: String,
    time: String,
}

impl Dialog {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                doctor: String::new(),
                date: String::new(),
                time: String::new(),
            },
            Task::none(),
        )
    }

    /// Reset the dialog state
    pub fn clear(&mut self) {
        self.doctor.clear();
        self.date.clear();
        self.time.clear();
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::DoctorInput(content) => {
                self.doctor = content;
                Action::None
            }
            Message::DateInput(content) => {
                self.date = content;
                Action::None
            }
            Message::TimeInput(content) => {
                self.time = content;
                Action::None
            }
            Message::CancelPressed => {
                self.clear();
                Action::Cancel
            }
            Message::BookPressed => {
                let (Some(date), Some(time)) = (parse_date(&self.date), parse_time(&self.time))
                else {
                    return Action::None;
                };
                let doctor = self.doctor.clone();

                self.clear();

                Action::Book(Booking { doctor, date, time })
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        container(column![
            text("Book Appointment").size(18),
            text_input("Doctor name", &self.doctor).on_input(Message::DoctorInput),
            text_input("Date, e.g. 2026-09-01", &self.date).on_input(Message::DateInput),
            text_input("Time, e.g. 10:15", &self.time).on_input(Message::TimeInput),
            space::vertical(),
            row![
                space::horizontal(),
                button(text("Cancel")).on_press(Message::CancelPressed),
                button(text("Book")).on_press_maybe(self.validate().then_some(Message::BookPressed)),
            ]
            .spacing(8),
        ])
        .padding(20)
        .max_width(380)
        .into()
    }

    fn validate(&self) -> bool {
        !self.doctor.trim().is_empty()
            && parse_date(&self.date).is_some()
            && parse_time(&self.time).is_some()
    }
}
