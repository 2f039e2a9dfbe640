use iced::{
    Element,
    Length::Fill,
    Task,
    widget::{Column, button, column, combo_box, container, row, scrollable, space, text, text_input},
};
use strum::IntoEnumIterator;
use tokio::task::spawn_blocking;
use tracing::warn;
use zenith_lib::{
    Repository,
    repository::{Feedback, FeedbackKind, Rating},
};

#[derive(Debug, Clone)]
pub enum Message {
    StateChanged(State),
    ToggleFormPressed,
    NameInput(String),
    KindSelected(FeedbackKind),
    RatingSet(u8),
    MessageInput(String),
    SubmitPressed,
}

#[derive(Debug, Clone)]
pub enum State {
    Loading,
    Error(String),
    Loaded(Vec<Feedback>),
}

pub struct FeedbackBoard {
    repo: Repository,
    state: State,
    show_form: bool,
    submitted: bool,
    // Form fields
    name: String,
    kind: Option<FeedbackKind>,
    rating: Rating,
    message: String,
    kinds: combo_box::State<FeedbackKind>,
}

impl FeedbackBoard {
    pub fn new(repo: Repository) -> (Self, Task<Message>) {
        (
            Self {
                repo: repo.clone(),
                state: State::Loading,
                show_form: false,
                submitted: false,
                name: String::new(),
                kind: None,
                rating: Rating::default(),
                message: String::new(),
                kinds: combo_box::State::new(FeedbackKind::iter().collect()),
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
            Message::ToggleFormPressed => {
                self.show_form = !self.show_form;
                self.submitted = false;
                Task::none()
            }
            Message::NameInput(content) => {
                self.name = content;
                Task::none()
            }
            Message::KindSelected(kind) => {
                self.kind = Some(kind);
                Task::none()
            }
            Message::RatingSet(stars) => {
                self.rating = Rating::new(stars);
                Task::none()
            }
            Message::MessageInput(content) => {
                self.message = content;
                Task::none()
            }
            Message::SubmitPressed => {
                let kind = self.kind.unwrap_or(FeedbackKind::Doctor);

                if let Err(err) =
                    self.repo
                        .submit_feedback(&self.name, self.rating, kind, &self.message)
                {
                    warn!("Failed to submit feedback: {err}");
                    return Task::none();
                }

                self.clear_form();
                self.submitted = true;

                self.refresh()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let toggle_label = if self.show_form {
            "Cancel"
        } else {
            "+ Leave Feedback"
        };

        let header = row![
            text("Feedback & Ratings").size(26),
            space::horizontal(),
            button(text(toggle_label)).on_press(Message::ToggleFormPressed),
        ];

        let mut content = column![header].spacing(12).padding(16).height(Fill);

        if self.submitted {
            content = content.push(
                container(text("Thank you for your feedback!"))
                    .padding(14)
                    .width(Fill),
            );
        }

        if self.show_form {
            content = content.push(self.form());
        }

        content = content.push(match &self.state {
            State::Loading => Element::from(text("Loading feedback...")),
            State::Error(e) => text(e).into(),
            State::Loaded(feedbacks) if feedbacks.is_empty() => {
                text("No feedback yet. Be the first to leave one!").into()
            }
            State::Loaded(feedbacks) => scrollable(Column::with_children(
                feedbacks.iter().map(feedback_card).collect::<Vec<_>>(),
            ))
            .into(),
        });

        content.into()
    }

    fn form(&self) -> Element<'_, Message> {
        let stars = row((1..=Rating::MAX.stars()).map(|i| {
            let label = if i <= self.rating.stars() { "★" } else { "☆" };

            button(text(label))
                .style(button::subtle)
                .on_press(Message::RatingSet(i))
                .into()
        }))
        .spacing(2);

        container(column![
            text_input("Your name", &self.name).on_input(Message::NameInput),
            combo_box(
                &self.kinds,
                "What is this about?",
                self.kind.as_ref(),
                Message::KindSelected,
            ),
            column![text("Rating").size(12), stars].spacing(4),
            text_input("Your feedback...", &self.message).on_input(Message::MessageInput),
            button(text("Submit Feedback"))
                .on_press_maybe(self.validate().then_some(Message::SubmitPressed)),
        ]
        .spacing(10))
        .padding(14)
        .into()
    }

    fn validate(&self) -> bool {
        !self.name.trim().is_empty() && !self.message.trim().is_empty() && self.kind.is_some()
    }

    fn clear_form(&mut self) {
        self.name.clear();
        self.message.clear();
        self.kind = None;
        self.rating = Rating::default();
        self.show_form = false;
    }
}

fn load_state(repo: &Repository) -> Task<Message> {
    let repo = repo.clone();
    Task::perform(
        async {
            spawn_blocking(move || match repo.feedbacks() {
                Ok(feedbacks) => State::Loaded(feedbacks),
                Err(err) => State::Error(err.to_string()),
            })
            .await
            .unwrap()
        },
        Message::StateChanged,
    )
}

fn feedback_card(feedback: &Feedback) -> Element<'static, Message> {
    let stars = "★".repeat(usize::from(feedback.rating().stars()));

    container(column![
        row![
            text(feedback.name().clone()),
            space::horizontal(),
            text(stars),
        ],
        text(format!("{} • {}", feedback.kind(), feedback.date())).size(12),
        text(feedback.message().clone()),
    ])
    .padding(12)
    .into()
}
