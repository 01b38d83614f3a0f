//! Delivery through the engine: local records, remote POST, retry queue

mod common;

use kiosk_app::config::{data_dir, Settings};
use kiosk_app::{Control, EngineEvent, Message};
use kiosk_core::{FeedbackSubmission, Screen, Submission, SubmissionKind};
use kiosk_submit::{PendingQueue, RecordStore};
use tempfile::tempdir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{engine, fill_valid_form, pump_until};

fn remote_settings(url: String) -> Settings {
    let mut settings = Settings::default();
    settings.capabilities.submits_remotely = true;
    settings.submission.endpoint_url = Some(url);
    settings.submission.timeout_ms = 1000;
    settings
}

fn submit_rating(engine: &mut kiosk_app::Engine, stars: u8) {
    engine.process_message(Message::ShowScreen(Screen::Feedback));
    engine.process_message(Message::SelectRating(stars));
    engine.process_message(Message::Activate(Control::SubmitFeedback));
}

#[tokio::test]
async fn test_remote_success_posts_single_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/exec"))
        .and(body_json(serde_json::json!({"starRating": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();
    let mut engine = engine(temp.path(), remote_settings(format!("{}/exec", server.uri())));
    engine.start();

    submit_rating(&mut engine, 5);
    assert_eq!(engine.state.active_screen(), Some(Screen::ThankYou));

    pump_until(&mut engine, |e| e.state.diagnostics.delivered == 1).await;
    assert_eq!(engine.state.diagnostics.failed, 0);

    // Local record is kept alongside the POST
    let feedbacks = RecordStore::new(data_dir(temp.path()))
        .load_feedbacks()
        .unwrap();
    assert_eq!(feedbacks, vec![FeedbackSubmission { star_rating: 5 }]);
}

#[tokio::test]
async fn test_remote_failure_is_reported_and_queued() {
    let temp = tempdir().unwrap();
    // Nothing listens on the discard port
    let mut settings = remote_settings("http://127.0.0.1:9/exec".to_string());
    settings.submission.retry_pending_on_start = false;
    let mut engine = engine(temp.path(), settings);
    engine.start();
    let mut events = engine.subscribe();

    engine.process_message(Message::ShowScreen(Screen::Form));
    fill_valid_form(&mut engine);
    engine.process_message(Message::Activate(Control::SubmitForm));
    assert_eq!(engine.state.active_screen(), Some(Screen::ThankYou));

    pump_until(&mut engine, |e| e.state.diagnostics.failed == 1).await;

    let failure = engine.state.diagnostics.last_failure.clone().unwrap();
    assert_eq!(failure.kind, SubmissionKind::Form);
    assert!(failure.queued);
    assert_eq!(engine.state.diagnostics.pending, 1);

    let mut saw_failure = false;
    while let Ok(event) = events.try_recv() {
        if let EngineEvent::SubmissionFailed { queued, .. } = event {
            saw_failure = queued;
        }
    }
    assert!(saw_failure);

    // The local record still landed; the POST waits in the queue
    let dir = data_dir(temp.path());
    assert_eq!(RecordStore::new(&dir).load_forms().unwrap().len(), 1);
    assert_eq!(PendingQueue::new(&dir).len(), 1);
}

#[tokio::test]
async fn test_pending_queue_drained_on_start() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/exec"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();
    let dir = data_dir(temp.path());
    let queue = PendingQueue::new(&dir);
    for stars in [2, 4] {
        queue
            .enqueue(
                &Submission::Feedback(FeedbackSubmission { star_rating: stars }),
                "offline",
            )
            .unwrap();
    }

    let mut engine = engine(temp.path(), remote_settings(format!("{}/exec", server.uri())));
    assert_eq!(engine.state.diagnostics.pending, 2);

    engine.start();
    pump_until(&mut engine, |e| e.state.diagnostics.pending == 0).await;

    assert_eq!(engine.state.diagnostics.delivered, 2);
    assert!(PendingQueue::new(&dir).is_empty());
}

#[tokio::test]
async fn test_local_only_never_queues() {
    let temp = tempdir().unwrap();
    let mut engine = engine(temp.path(), Settings::default());
    engine.start();

    submit_rating(&mut engine, 1);
    submit_rating(&mut engine, 2);
    pump_until(&mut engine, |e| e.state.diagnostics.delivered == 2).await;

    let dir = data_dir(temp.path());
    assert_eq!(RecordStore::new(&dir).load_feedbacks().unwrap().len(), 2);
    assert!(PendingQueue::new(&dir).is_empty());
}
