//! Full-pipeline runs against the in-memory calendar: utterance in,
//! booked (or conflicted) event out.

use chrono::{Duration, Local, NaiveTime};
use std::sync::Arc;
use voxcal::parser::parse_utterance;
use voxcal::scheduler::{Scheduler, SimulatedCalendar};
use voxcal::session::{Response, Session};

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn quiet_session() -> (Arc<SimulatedCalendar>, Session) {
    let calendar = Arc::new(SimulatedCalendar::new());
    let session = Session::new(calendar.clone());
    (calendar, session)
}

#[tokio::test]
async fn explicit_range_is_booked_verbatim() {
    let (calendar, session) = quiet_session();
    let r = session
        .schedule("Schedule a meeting with the CEO tomorrow from 2pm to 4pm")
        .await
        .unwrap();

    let Response::Scheduled { event, .. } = r else {
        panic!("expected Scheduled, got {r:?}");
    };
    assert_eq!(event.title, "Meeting With The Ceo");
    assert_eq!(event.date, Local::now().date_naive() + Duration::days(1));
    assert_eq!(event.start, time(14, 0));
    assert_eq!(event.end, time(16, 0));
    assert_eq!(calendar.booked_count().await, 1);
}

#[tokio::test]
async fn vague_input_still_produces_a_booking() {
    let (calendar, session) = quiet_session();
    let r = session.schedule("doctor appointment").await.unwrap();

    let Response::Scheduled { event, .. } = r else {
        panic!("expected Scheduled, got {r:?}");
    };
    assert_eq!(event.title, "Doctor Appointment");
    assert_eq!(event.start, time(10, 0));
    assert_eq!(event.end, time(11, 0));
    assert!(!event.date_explicit);
    assert_eq!(calendar.booked_count().await, 1);
}

#[tokio::test]
async fn chinese_utterance_books_the_adjusted_afternoon_slot() {
    let (_, session) = quiet_session();
    let r = session.schedule("明天下午三点开会").await.unwrap();

    let Response::Scheduled { event, .. } = r else {
        panic!("expected Scheduled, got {r:?}");
    };
    assert_eq!(event.title, "开会");
    assert_eq!(event.start, time(15, 0));
    assert_eq!(event.end, time(16, 0));
}

#[tokio::test]
async fn conflict_prompts_and_the_reply_moves_the_event() {
    let (calendar, session) = quiet_session();

    // Occupy tomorrow 10:00 so the next request collides.
    let blocker = parse_utterance("planning tomorrow from 10 am to 11 am").unwrap();
    assert!(calendar.submit(&blocker).await.unwrap().ok);

    let r = session.schedule("team sync tomorrow 10 to 11 am").await.unwrap();
    let Response::Conflict { event, message } = r else {
        panic!("expected Conflict, got {r:?}");
    };
    assert_eq!(event.start, time(10, 0));
    assert!(message.contains("Planning"));

    let r = session.reschedule("3 pm instead").await.unwrap();
    let Response::Scheduled { event, .. } = r else {
        panic!("expected Scheduled, got {r:?}");
    };
    assert_eq!(event.title, "Team Sync");
    assert_eq!(event.date, blocker.date);
    assert_eq!(event.start, time(15, 0));
    assert_eq!(event.end, time(16, 0));
    assert_eq!(calendar.booked_count().await, 2);
}

#[tokio::test]
async fn adjacent_slots_do_not_conflict() {
    let (calendar, session) = quiet_session();

    assert!(matches!(
        session.schedule("standup tomorrow 9 to 10 am").await.unwrap(),
        Response::Scheduled { .. }
    ));
    // Touching end/start boundaries is not an overlap.
    assert!(matches!(
        session.schedule("review tomorrow 10 to 11 am").await.unwrap(),
        Response::Scheduled { .. }
    ));
    assert_eq!(calendar.booked_count().await, 2);
}
