//! Visitor flows through the engine, end to end

mod common;

use std::time::Duration;

use kiosk_app::config::{data_dir, FeedbackSubmitPolicy, Settings};
use kiosk_app::{Control, Message};
use kiosk_core::{FieldId, Screen};
use kiosk_submit::RecordStore;
use tempfile::tempdir;
use tokio::time::Instant;

use common::{engine, fill_valid_form, pump_until};

#[tokio::test]
async fn test_full_visit_persists_trimmed_form() {
    let temp = tempdir().unwrap();
    let mut engine = engine(temp.path(), Settings::default());
    engine.start();
    assert_eq!(engine.state.active_screen(), Some(Screen::Home));

    engine.process_message(Message::Activate(Control::Explore));
    assert_eq!(engine.state.active_screen(), Some(Screen::VideoSelection));

    engine.process_message(Message::Activate(Control::Continue));
    engine.process_message(Message::Activate(Control::StartForm));
    assert_eq!(engine.state.active_screen(), Some(Screen::Form));

    fill_valid_form(&mut engine);
    engine.process_message(Message::Activate(Control::SubmitForm));

    // The visitor never waits on delivery
    assert_eq!(engine.state.active_screen(), Some(Screen::ThankYou));

    pump_until(&mut engine, |e| e.state.diagnostics.delivered == 1).await;

    let forms = RecordStore::new(data_dir(temp.path())).load_forms().unwrap();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].name, "Ada Lovelace");
    assert_eq!(forms[0].email, "ada@engines.io");

    engine.process_message(Message::Activate(Control::Home));
    assert_eq!(engine.state.active_screen(), Some(Screen::Home));
}

#[tokio::test]
async fn test_exactly_one_screen_visible_throughout() {
    let temp = tempdir().unwrap();
    let mut engine = engine(temp.path(), Settings::default());
    engine.start();

    for screen in Screen::ALL {
        engine.process_message(Message::ShowScreen(screen));
        assert_eq!(engine.state.screens.active_count(), 1);
        assert_eq!(engine.state.active_screen(), Some(screen));
    }
}

#[tokio::test]
async fn test_without_video_explore_skips_selection() {
    let temp = tempdir().unwrap();
    let mut settings = Settings::default();
    settings.capabilities.has_video = false;
    let mut engine = engine(temp.path(), settings);
    engine.start();

    engine.process_message(Message::Activate(Control::Explore));
    assert_eq!(engine.state.active_screen(), Some(Screen::AreYouReady));

    engine.process_message(Message::ShowScreen(Screen::VideoSelection));
    assert_eq!(engine.state.active_screen(), Some(Screen::AreYouReady));
}

#[tokio::test(start_paused = true)]
async fn test_invalid_submit_keeps_form_and_messages_expire() {
    let temp = tempdir().unwrap();
    let mut engine = engine(temp.path(), Settings::default());
    engine.start();
    engine.process_message(Message::ShowScreen(Screen::Form));
    engine.process_message(Message::SetFieldText {
        field: FieldId::Name,
        text: "Ada".into(),
    });

    engine.process_message(Message::Activate(Control::SubmitForm));
    assert_eq!(engine.state.active_screen(), Some(Screen::Form));
    assert_eq!(engine.state.form.messages.len(), 4);
    assert!(engine.state.form.messages.get(FieldId::Name).is_none());

    let shown_at = Instant::now();
    pump_until(&mut engine, |e| e.state.form.messages.is_empty()).await;

    assert!(shown_at.elapsed() >= Duration::from_millis(2000));
    assert_eq!(engine.state.active_screen(), Some(Screen::Form));
    assert_eq!(engine.pending_message_clears(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_resubmit_restarts_message_clock() {
    let temp = tempdir().unwrap();
    let mut engine = engine(temp.path(), Settings::default());
    engine.start();
    engine.process_message(Message::ShowScreen(Screen::Form));

    engine.process_message(Message::Activate(Control::SubmitForm));
    tokio::time::sleep(Duration::from_millis(1500)).await;
    engine.process_message(Message::Activate(Control::SubmitForm));
    let resubmitted_at = Instant::now();

    pump_until(&mut engine, |e| e.state.form.messages.is_empty()).await;
    assert!(resubmitted_at.elapsed() >= Duration::from_millis(2000));
}

#[tokio::test]
async fn test_feedback_submits_on_select_when_configured() {
    let temp = tempdir().unwrap();
    let mut settings = Settings::default();
    settings.feedback.submit_policy = FeedbackSubmitPolicy::OnSelect;
    let mut engine = engine(temp.path(), settings);
    engine.start();
    engine.process_message(Message::ShowScreen(Screen::Feedback));

    engine.process_message(Message::SelectRating(4));
    assert_eq!(engine.state.active_screen(), Some(Screen::ThankYou));

    pump_until(&mut engine, |e| e.state.diagnostics.delivered == 1).await;
    let feedbacks = RecordStore::new(data_dir(temp.path()))
        .load_feedbacks()
        .unwrap();
    assert_eq!(feedbacks.len(), 1);
    assert_eq!(feedbacks[0].star_rating, 4);
}

#[tokio::test]
async fn test_feedback_waits_for_button_by_default() {
    let temp = tempdir().unwrap();
    let mut engine = engine(temp.path(), Settings::default());
    engine.start();
    engine.process_message(Message::ShowScreen(Screen::Feedback));

    engine.process_message(Message::SelectRating(3));
    assert_eq!(engine.state.active_screen(), Some(Screen::Feedback));
    assert_eq!(engine.state.feedback.rating().stars(), 3);

    engine.process_message(Message::Activate(Control::SubmitFeedback));
    assert_eq!(engine.state.active_screen(), Some(Screen::ThankYou));
}

#[tokio::test(start_paused = true)]
async fn test_thank_you_returns_home_after_timeout() {
    let temp = tempdir().unwrap();
    let mut settings = Settings::default();
    settings.timing.thank_you_timeout_ms = 5000;
    let mut engine = engine(temp.path(), settings);
    engine.start();
    engine.process_message(Message::ShowScreen(Screen::ThankYou));
    let entered_at = Instant::now();

    pump_until(&mut engine, |e| {
        e.state.active_screen() == Some(Screen::Home)
    })
    .await;
    assert!(entered_at.elapsed() >= Duration::from_millis(5000));
}
