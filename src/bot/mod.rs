pub mod resources;
pub mod view;

use std::sync::Arc;

use log::{debug, warn};
use teloxide::{
    dispatching::{dialogue::ErasedStorage, UpdateHandler},
    prelude::*,
    types::{ChatId, InputFile, KeyboardButton, KeyboardMarkup},
};

use crate::quiz::history::HISTORY_QUIZ;
use crate::session::{QuizSession, Screen, Transition};
use resources::AssetDir;
use view::{render, Action, View};

pub type QuizDialogue = Dialogue<QuizSession, ErasedStorage<QuizSession>>;
pub type SessionStorage = Arc<ErasedStorage<QuizSession>>;
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;
pub type HandlerResult = Result<(), HandlerError>;

/// Handler tree: one endpoint per group of screens, picked by the stored session.
pub fn schema() -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .enter_dialogue::<Message, ErasedStorage<QuizSession>, QuizSession>()
        .branch(dptree::filter(|s: QuizSession| s.screen() == Screen::MainMenu).endpoint(main_menu))
        .branch(dptree::filter(|s: QuizSession| s.screen().is_question()).endpoint(question))
        .branch(dptree::filter(|s: QuizSession| s.screen() == Screen::Results).endpoint(results))
}

async fn main_menu(
    bot: Bot,
    dialogue: QuizDialogue,
    mut session: QuizSession,
    msg: Message,
    assets: Arc<AssetDir>,
) -> HandlerResult {
    let transition = match msg.text().and_then(|text| Action::parse(text, None)) {
        Some(Action::Start) => session.on_start(),
        _ => Transition::Ignored,
    };
    finish(bot, dialogue, session, msg, assets, transition).await
}

async fn question(
    bot: Bot,
    dialogue: QuizDialogue,
    mut session: QuizSession,
    msg: Message,
    assets: Arc<AssetDir>,
) -> HandlerResult {
    let current = session.screen().question_id().and_then(|id| HISTORY_QUIZ.question(id));
    let action = msg.text().and_then(|text| Action::parse(text, current));
    let transition = match (action, current) {
        (Some(Action::Toggle(index)), Some(question)) => {
            let included = !session.selection().contains(&index);
            session.on_toggle(&HISTORY_QUIZ, question.id, index, included)
        }
        (Some(Action::Submit), _) => {
            if !session.can_submit() {
                bot.send_message(msg.chat.id, "Выберите хотя бы один вариант")
                    .await?;
            }
            session.on_submit()
        }
        _ => Transition::Ignored,
    };
    finish(bot, dialogue, session, msg, assets, transition).await
}

async fn results(
    bot: Bot,
    dialogue: QuizDialogue,
    mut session: QuizSession,
    msg: Message,
    assets: Arc<AssetDir>,
) -> HandlerResult {
    let transition = match msg.text().and_then(|text| Action::parse(text, None)) {
        Some(Action::Restart) => session.on_restart(),
        _ => Transition::Ignored,
    };
    finish(bot, dialogue, session, msg, assets, transition).await
}

/// Stores the session and shows the screen it is on now.
async fn finish(
    bot: Bot,
    dialogue: QuizDialogue,
    session: QuizSession,
    msg: Message,
    assets: Arc<AssetDir>,
    transition: Transition,
) -> HandlerResult {
    debug!("chat {}: {:?} -> {:?}", msg.chat.id, transition, session.screen());

    let view = render(&HISTORY_QUIZ, &session);
    let entered = matches!(transition, Transition::Moved { .. });
    dialogue.update(session).await?;

    // pictures only go out once, when the question is first shown
    if entered {
        send_images(&bot, msg.chat.id, &view, &assets).await?;
    }
    bot.send_message(msg.chat.id, view.text)
        .reply_markup(keyboard(view.buttons))
        .await?;
    Ok(())
}

async fn send_images(bot: &Bot, chat_id: ChatId, view: &View, assets: &AssetDir) -> HandlerResult {
    for (caption, image) in &view.images {
        match assets.resolve(*image) {
            Some(path) => {
                bot.send_photo(chat_id, InputFile::file(path))
                    .caption(caption.clone())
                    .await?;
            }
            None => {
                warn!(
                    "image {} not found in {}",
                    image.name(),
                    assets.root().display()
                );
                bot.send_message(chat_id, caption.clone()).await?;
            }
        }
    }
    Ok(())
}

fn keyboard(buttons: Vec<Vec<String>>) -> KeyboardMarkup {
    KeyboardMarkup::new(
        buttons
            .into_iter()
            .map(|row| row.into_iter().map(KeyboardButton::new).collect::<Vec<_>>())
            .collect::<Vec<_>>(),
    )
}
