use iced::{
    Element,
    Length::Fill,
    Task,
    widget::{Column, button, column, container, row, scrollable, text, text_input},
};
use strum::IntoEnumIterator;
use zenith_lib::wellness::{self, Article, Category};

use crate::config::Cfg;

#[derive(Debug, Clone)]
pub enum Message {
    SearchInput(String),
    CategorySelected(Option<Category>),
}

pub struct Wellness {
    cfg: Cfg,
    search: String,
    category: Option<Category>,
}

impl Wellness {
    pub fn new(cfg: Cfg) -> (Self, Task<Message>) {
        let category = cfg.read().wellness.category;

        (
            Self {
                cfg,
                search: String::new(),
                category,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchInput(content) => self.search = content,
            Message::CategorySelected(category) => {
                self.category = category;

                let mut cfg = self.cfg.write();
                cfg.wellness.category = category;
                cfg.save();
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let category_button = |label: &'static str, category: Option<Category>| {
            let style = if self.category == category {
                button::primary
            } else {
                button::subtle
            };

            button(text(label))
                .style(style)
                .on_press(Message::CategorySelected(category))
        };

        let mut filters = row![category_button("All", None)].spacing(6);
        for category in Category::iter() {
            filters = filters.push(category_button(category.label(), Some(category)));
        }

        let articles = wellness::search(self.category, &self.search);
        let list: Element<'_, Message> = if articles.is_empty() {
            text("No wellness tips found").into()
        } else {
            scrollable(Column::with_children(
                articles.into_iter().map(article_card).collect::<Vec<_>>(),
            ))
            .into()
        };

        column![
            text("Wellness Tips").size(26),
            text("Discover articles to improve your health and well-being"),
            text_input("Search wellness tips...", &self.search).on_input(Message::SearchInput),
            filters,
            list,
        ]
        .spacing(12)
        .padding(16)
        .height(Fill)
        .into()
    }
}

fn article_card(article: &'static Article) -> Element<'static, Message> {
    container(column![
        text(article.emoji).size(32),
        text(article.title).size(16),
        text(article.summary).size(12),
        text(article.category.label()).size(12),
    ])
    .padding(14)
    .into()
}
