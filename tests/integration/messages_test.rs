//! Inbox metrics over multi-chat archives

use chrono::NaiveDate;

use igw::config::ExtractionConfig;
use igw::result::{RankedName, ResponseTime};
use igw::Pipeline;

use crate::helpers::{message, ExportBuilder};

fn names(ranked: &[RankedName]) -> Vec<(&str, u32)> {
    ranked.iter().map(|r| (r.name.as_str(), r.count)).collect()
}

fn run(builder: ExportBuilder, config: ExtractionConfig) -> igw::ExtractionResult {
    Pipeline::new(config)
        .with_today(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        .run(&builder.bytes())
        .unwrap()
}

/// Four individual chats of different sizes plus one group chat.
fn inbox() -> ExportBuilder {
    let mut builder = ExportBuilder::new().owner("me_user", "Me");
    for (folder, sender, count) in [
        ("ana_1", "Ana", 2),
        ("ben_2", "Ben", 5),
        ("cy_3", "Cy", 1),
        ("dee_4", "Dee", 4),
    ] {
        let mut messages: Vec<String> = (0..count)
            .map(|i| message(sender, &format!("Feb {}, 2024 9:00 am", i + 1), "hey"))
            .collect();
        messages.push(message("Me", "Feb 20, 2024 9:00 am", "hello"));
        builder = builder.chat(folder, 1, &messages);
    }
    builder.chat(
        "crew_9",
        1,
        &[
            message("Me", "Mar 1, 2024 9:10 am", r#"<a href="https://www.instagram.com/p/a/">post</a>"#),
            message("Zoe", "Mar 1, 2024 9:05 am", r#"<a href="https://www.instagram.com/stories/zoe/1/">story</a>"#),
            message("Yan", "Mar 1, 2024 9:00 am", "Yan shared a video."),
            message("Zoe", "Mar 1, 2024 8:00 am", "morning"),
        ],
    )
}

#[test]
fn partners_are_individual_chats_ranked_and_capped() {
    let result = run(inbox(), ExtractionConfig::default());
    assert_eq!(
        names(&result.top_chat_partners),
        vec![("Ben", 5), ("Dee", 4), ("Ana", 2)]
    );
    assert!(result.top_chat_partners.iter().all(|r| r.name != "Me"));
}

#[test]
fn group_shares_are_tallied_under_the_group() {
    let result = run(inbox(), ExtractionConfig::default());
    assert_eq!(names(&result.top_received_from), vec![("crew", 2)]);
    assert_eq!(names(&result.top_shared_to), vec![("crew", 1)]);
}

#[test]
fn top_n_is_configurable() {
    let config = ExtractionConfig {
        top_n: 1,
        ..ExtractionConfig::default()
    };
    let result = run(inbox(), config);
    assert_eq!(names(&result.top_chat_partners), vec![("Ben", 5)]);
}

#[test]
fn response_time_averages_same_day_replies_only() {
    let builder = ExportBuilder::new().owner("me_user", "Me").chat(
        "ana_1",
        1,
        &[
            message("Me", "Feb 3, 2024 9:00 am", "days later"),
            message("Ana", "Feb 1, 2024 9:00 am", "anyone?"),
            message("Me", "Jan 1, 2024 10:30 am", "sure"),
            message("Ana", "Jan 1, 2024 10:00 am", "coffee?"),
            message("Me", "Jan 1, 2024 9:10 am", "yes"),
            message("Ana", "Jan 1, 2024 9:00 am", "up?"),
        ],
    );
    let result = run(builder, ExtractionConfig::default());
    // (10 + 30) / 2 minutes; the two-day gap is dropped
    assert_eq!(
        result.avg_response_time,
        Some(ResponseTime { hours: 0, minutes: 20 })
    );
}

#[test]
fn pages_of_one_folder_form_a_single_chat() {
    let builder = ExportBuilder::new()
        .owner("me_user", "Me")
        .chat("ana_1", 10, &[message("Me", "Jan 1, 2024 9:30 am", "ok")])
        .chat("ana_1", 2, &[message("Ana", "Jan 1, 2024 9:00 am", "hi")]);
    let result = run(builder, ExtractionConfig::default());
    assert_eq!(
        result.avg_response_time,
        Some(ResponseTime { hours: 0, minutes: 30 })
    );
    assert_eq!(names(&result.top_chat_partners), vec![("Ana", 1)]);
}
