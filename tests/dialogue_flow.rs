use history_quiz_bot::{
    bot::QuizDialogue,
    quiz::{history::HISTORY_QUIZ, AnswerSet, Answers},
    session::{QuizSession, Screen, Transition},
};
use teloxide::{
    dispatching::dialogue::{
        serializer::{Json, Serializer},
        InMemStorage, Storage,
    },
    types::ChatId,
};

fn set(indices: &[usize]) -> AnswerSet {
    indices.iter().copied().collect()
}

fn dialogue(chat: i64) -> QuizDialogue {
    QuizDialogue::new(InMemStorage::<QuizSession>::new().erase(), ChatId(chat))
}

#[tokio::test]
async fn fresh_chat_starts_on_main_menu() {
    let dialogue = dialogue(1);
    let session = dialogue.get_or_default().await.unwrap();
    assert_eq!(session.screen(), Screen::MainMenu);
    assert!(session.answers().is_empty());
}

#[tokio::test]
async fn session_survives_between_updates() {
    let dialogue = dialogue(2);

    let mut session = dialogue.get_or_default().await.unwrap();
    session.on_start();
    session.on_toggle(&HISTORY_QUIZ, 1, 0, true);
    dialogue.update(session).await.unwrap();

    let mut session = dialogue.get().await.unwrap().expect("session stored");
    assert_eq!(session.screen(), Screen::Question1);
    assert_eq!(session.selection(), &set(&[0]));

    session.on_submit();
    dialogue.update(session).await.unwrap();

    let session = dialogue.get().await.unwrap().expect("session stored");
    assert_eq!(session.screen(), Screen::Question2);
    assert_eq!(session.answers(), &Answers::from([(1, set(&[0]))]));
}

#[tokio::test]
async fn whole_quiz_then_restart() {
    let dialogue = dialogue(3);
    let picks: [(u32, &[usize]); 3] = [(1, &[0, 1]), (2, &[0]), (3, &[0, 1])];

    let mut session = dialogue.get_or_default().await.unwrap();
    session.on_start();
    dialogue.update(session).await.unwrap();

    for (id, indices) in picks {
        let mut session = dialogue.get_or_default().await.unwrap();
        for index in indices {
            assert_eq!(
                session.on_toggle(&HISTORY_QUIZ, id, *index, true),
                Transition::Selected
            );
        }
        assert!(matches!(session.on_submit(), Transition::Moved { .. }));
        dialogue.update(session).await.unwrap();
    }

    let mut session = dialogue.get_or_default().await.unwrap();
    assert_eq!(session.screen(), Screen::Results);
    // question 3 is single choice: the second toggle replaced the first
    assert_eq!(session.answers()[&3], set(&[1]));
    assert_eq!(session.score(&HISTORY_QUIZ), 2);

    session.on_restart();
    dialogue.update(session).await.unwrap();

    let session = dialogue.get_or_default().await.unwrap();
    assert_eq!(session, QuizSession::new());
}

#[tokio::test]
async fn chats_do_not_share_sessions() {
    let storage = InMemStorage::<QuizSession>::new().erase();
    let alice = QuizDialogue::new(storage.clone(), ChatId(10));
    let bob = QuizDialogue::new(storage, ChatId(11));

    let mut session = alice.get_or_default().await.unwrap();
    session.on_start();
    alice.update(session).await.unwrap();

    let other = bob.get_or_default().await.unwrap();
    assert_eq!(other.screen(), Screen::MainMenu);
}

#[test]
fn json_round_trip_keeps_every_screen() {
    let mut session = QuizSession::new();
    let mut seen = vec![session.clone()];

    session.on_start();
    seen.push(session.clone());
    for id in 1..=3 {
        session.on_toggle(&HISTORY_QUIZ, id, 1, true);
        seen.push(session.clone());
        session.on_submit();
        seen.push(session.clone());
    }

    for original in seen {
        let bytes = Json.serialize(&original).unwrap();
        let restored: QuizSession = Json.deserialize(&bytes).unwrap();
        assert_eq!(restored, original);
    }
}

#[test]
fn stored_form_is_plain_data() {
    let mut session = QuizSession::new();
    session.on_start();
    session.on_toggle(&HISTORY_QUIZ, 1, 0, true);
    session.on_toggle(&HISTORY_QUIZ, 1, 2, true);
    session.on_submit();

    let bytes = Json.serialize(&session).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "screen": "Question2",
            "answers": { "1": [0, 2] },
            "selection": []
        })
    );
}
