use chrono::{NaiveDate, NaiveDateTime};
use voxcal::model::Locale;
use voxcal::parser::parse_utterance_at;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 6)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn title_of(input: &str) -> String {
    parse_utterance_at(input, now(), None).unwrap().title
}

#[test]
fn command_and_temporal_phrases_leave_the_title() {
    assert_eq!(
        title_of("Schedule a meeting with the CEO tomorrow from 2pm to 4pm"),
        "Meeting With The Ceo"
    );
    assert_eq!(title_of("book lunch with sarah friday at noon"), "Lunch With Sarah");
    assert_eq!(title_of("set up a team standup next monday at 9:30 am"), "Team Standup");
}

#[test]
fn calendar_surface_phrases_are_stripped() {
    assert_eq!(
        title_of("add dentist appointment to my calendar tomorrow"),
        "Dentist Appointment"
    );
    assert_eq!(title_of("put sprint review in google calendar friday"), "Put Sprint Review");
}

#[test]
fn nothing_substantive_falls_back_to_meeting() {
    assert_eq!(title_of("schedule it tomorrow at 2pm"), "Meeting");
    assert_eq!(title_of("book tomorrow morning"), "Meeting");
}

#[test]
fn duration_phrases_do_not_leak_into_titles() {
    assert_eq!(title_of("lunch tomorrow at 1pm for two hours"), "Lunch");
}

#[test]
fn chinese_titles_come_from_the_residue() {
    let e = parse_utterance_at("明天下午三点开会", now(), None).unwrap();
    assert_eq!(e.locale, Locale::Zh);
    assert_eq!(e.title, "开会");

    let e = parse_utterance_at("后天上午十点和客户讨论方案", now(), None).unwrap();
    assert_eq!(e.title, "和客户讨论方案");
}

#[test]
fn chinese_give_up_path_truncates_the_utterance() {
    // Temporal-only input leaves no residue; the short original survives.
    let e = parse_utterance_at("明天下午", now(), None).unwrap();
    assert_eq!(e.title, "明天下午");

    // Digits never reach the residue, so this long input has none and the
    // original is truncated to twenty characters.
    let long = "1234567890123456789012345 明天";
    let e = parse_utterance_at(long, now(), None).unwrap();
    assert!(e.title.ends_with("..."));
    assert_eq!(e.title.chars().count(), 23);
}

#[test]
fn locale_override_wins_over_detection() {
    let e = parse_utterance_at("tomorrow at 2pm", now(), Some(Locale::En)).unwrap();
    assert_eq!(e.locale, Locale::En);
}
