//! Integration tests for the conversation engine: age gate, dispatch,
//! pairing resolution, rating confirmation, and multi-user isolation.

use std::sync::Arc;

use chrono::{Datelike, Days, Months};
use tempfile::TempDir;
use vinobot_catalog::{CatalogRepository, Dish, DishCategory, Wine, WineType};
use vinobot_core::{KeyboardHint, UserId};
use vinobot_engine::{ConversationState, Engine};
use vinobot_ledger::FavoritesLedger;

/// Engine over a seeded temp catalog: Merlot Reserve pairs Duck (9) and
/// Cheesecake (5); Riesling Kabinett pairs Trout (8).
async fn seeded_engine() -> (TempDir, Engine) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("catalog.db");
    let catalog = CatalogRepository::new(db_path.to_str().unwrap())
        .await
        .expect("Failed to create catalog");

    let merlot = catalog
        .add_wine(
            &Wine::new("Merlot Reserve", WineType::Red, 4, 3, 2018)
                .unwrap()
                .with_region("Bordeaux"),
        )
        .await
        .unwrap();
    let riesling = catalog
        .add_wine(&Wine::new("Riesling Kabinett", WineType::White, 1, 5, 2021).unwrap())
        .await
        .unwrap();

    let duck = catalog
        .add_dish(&Dish::new("Duck", DishCategory::Meat, 4, 5, 90).unwrap())
        .await
        .unwrap();
    let cheesecake = catalog
        .add_dish(&Dish::new("Cheesecake", DishCategory::Dessert, 5, 2, 60).unwrap())
        .await
        .unwrap();
    let trout = catalog
        .add_dish(&Dish::new("Trout", DishCategory::Fish, 2, 4, 30).unwrap())
        .await
        .unwrap();

    catalog.add_pairing(merlot, cheesecake, 5).await.unwrap();
    catalog.add_pairing(merlot, duck, 9).await.unwrap();
    catalog.add_pairing(riesling, trout, 8).await.unwrap();

    let ledger = FavoritesLedger::new(dir.path().join("favorites.jsonl"));
    (dir, Engine::new(catalog, ledger))
}

/// A birth date exactly `years` years (and one day) before today, DD.MM.YYYY.
fn birth_date_years_ago(years: u32) -> String {
    let birth = chrono::Utc::now()
        .date_naive()
        .checked_sub_months(Months::new(years * 12))
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .expect("date arithmetic");
    format!(
        "{:02}.{:02}.{:04}",
        birth.day(),
        birth.month(),
        birth.year()
    )
}

/// Walks a user through /start + an adult birth date.
async fn verify_age(engine: &Engine, user: UserId) {
    let prompt = engine.handle_message(user, "/start").await;
    assert!(prompt.text.contains("DD.MM.YYYY"));
    let welcome = engine
        .handle_message(user, &birth_date_years_ago(25))
        .await;
    assert!(welcome.text.contains("Welcome"));
}

#[tokio::test]
async fn test_age_gate_blocks_commands_until_verified() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(1);

    let reply = engine.handle_message(user, "/wines").await;
    assert!(reply.text.contains("verify your age"));

    let reply = engine.handle_message(user, "Merlot").await;
    assert!(reply.text.contains("verify your age"));

    verify_age(&engine, user).await;

    let reply = engine.handle_message(user, "/help").await;
    assert!(reply.text.contains("Available commands"));
}

#[tokio::test]
async fn test_adult_birth_date_verifies_and_shows_menu() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(2);

    engine.handle_message(user, "/start").await;
    let welcome = engine
        .handle_message(user, &birth_date_years_ago(18))
        .await;
    assert!(welcome.text.contains("Welcome"));
    assert_eq!(welcome.keyboard, Some(KeyboardHint::MainMenu));
}

#[tokio::test]
async fn test_underage_birth_date_rejected_and_stays_gated() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(3);

    engine.handle_message(user, "/start").await;
    let reply = engine
        .handle_message(user, &birth_date_years_ago(14))
        .await;
    assert!(reply.text.contains("18"));

    // Still gated: every command gets the reminder, never a result.
    let reply = engine.handle_message(user, "/wines").await;
    assert!(reply.text.contains("verify your age"));
}

#[tokio::test]
async fn test_malformed_date_reprompts_without_leaving_state() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(4);

    engine.handle_message(user, "/start").await;
    let reply = engine.handle_message(user, "1.1.2000").await;
    assert!(reply.text.contains("DD.MM.YYYY"));
    let reply = engine.handle_message(user, "yesterday").await;
    assert!(reply.text.contains("DD.MM.YYYY"));

    // The state is still AwaitingAge, so a valid date completes the gate.
    let welcome = engine
        .handle_message(user, &birth_date_years_ago(30))
        .await;
    assert!(welcome.text.contains("Welcome"));
}

#[tokio::test]
async fn test_start_after_verification_shows_menu_without_regate() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(5);
    verify_age(&engine, user).await;

    let reply = engine.handle_message(user, "/start").await;
    assert!(reply.text.contains("Welcome"));
    assert!(!reply.text.contains("DD.MM.YYYY"));
}

#[tokio::test]
async fn test_free_text_query_ranks_dishes_by_score() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(6);
    verify_age(&engine, user).await;

    let reply = engine.handle_message(user, "Merlot").await;
    assert!(reply.text.contains("Pairings for Merlot"));
    let duck_pos = reply.text.find("Duck").expect("Duck missing");
    let cake_pos = reply.text.find("Cheesecake").expect("Cheesecake missing");
    assert!(duck_pos < cake_pos, "Duck (score 9) must rank first");
}

#[tokio::test]
async fn test_pair_command_with_argument() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(7);
    verify_age(&engine, user).await;

    let reply = engine.handle_message(user, "/pair Riesling").await;
    assert!(reply.text.contains("Trout"));
}

#[tokio::test]
async fn test_bare_pair_asks_for_wine_then_resolves() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(8);
    verify_age(&engine, user).await;

    let reply = engine.handle_message(user, "/pair").await;
    assert!(reply.text.contains("Which wine"));

    let reply = engine.handle_message(user, "Merlot Reserve").await;
    assert!(reply.text.contains("Duck"));
}

#[tokio::test]
async fn test_cancel_in_wine_name_state_and_idle_noop() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(9);
    verify_age(&engine, user).await;

    engine.handle_message(user, "/pair").await;
    let reply = engine.handle_message(user, "/cancel").await;
    assert!(reply.text.contains("cancelled"));

    // No pending question afterwards: /cancel is an idempotent no-op.
    let reply = engine.handle_message(user, "/cancel").await;
    assert!(reply.text.contains("Nothing to cancel"));
}

#[tokio::test]
async fn test_no_pairings_leaves_context_untouched() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(10);
    verify_age(&engine, user).await;

    // Twice: the empty result must be idempotent and never create a context.
    for _ in 0..2 {
        let reply = engine.handle_message(user, "Nebbiolo").await;
        assert!(reply.text.contains("No matching dishes"));
    }

    let reply = engine.handle_message(user, "/rate").await;
    assert!(reply.text.contains("no active pairing"));
}

#[tokio::test]
async fn test_rate_confirm_saves_favorite_once() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(11);
    verify_age(&engine, user).await;

    engine.handle_message(user, "Merlot").await;
    let prompt = engine.handle_message(user, "/rate").await;
    assert!(prompt.text.contains("favorites"));
    assert_eq!(prompt.keyboard, Some(KeyboardHint::YesNo));

    let reply = engine.handle_message(user, "YES").await;
    assert!(reply.text.contains("added"));

    let favorites = engine.handle_message(user, "/favorites").await;
    // The entry is keyed by the query as typed, paired with the top dish.
    assert!(favorites.text.contains("🍷 Merlot"));
    assert!(favorites.text.contains("🍽 Duck"));

    // Same pairing again: the ledger's duplicate check rejects the append.
    engine.handle_message(user, "Merlot").await;
    engine.handle_message(user, "/rate").await;
    let reply = engine.handle_message(user, "yes").await;
    assert!(reply.text.contains("already"));
}

#[tokio::test]
async fn test_rate_deny_discards_context() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(12);
    verify_age(&engine, user).await;

    engine.handle_message(user, "Merlot").await;
    engine.handle_message(user, "/rate").await;
    let reply = engine.handle_message(user, "no").await;
    assert!(reply.text.contains("not saved"));

    // The context was discarded with the denial.
    let reply = engine.handle_message(user, "/rate").await;
    assert!(reply.text.contains("no active pairing"));
}

#[tokio::test]
async fn test_rate_without_context_is_guidance_not_state_change() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(13);
    verify_age(&engine, user).await;

    let reply = engine.handle_message(user, "/rate").await;
    assert!(reply.text.contains("no active pairing"));

    // Still Idle: "yes" is not swallowed by a confirmation flow.
    let reply = engine.handle_message(user, "/help").await;
    assert!(reply.text.contains("Available commands"));
}

#[tokio::test]
async fn test_confirm_with_lost_context_reports_and_resets() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(14);

    {
        let entry = engine.sessions().session(user).await;
        let mut session = entry.lock().await;
        session.age_verified = true;
        session.state = ConversationState::AwaitingRatingConfirm;
        session.pairing = None;
    }

    let reply = engine.handle_message(user, "yes").await;
    assert!(reply.text.contains("context was lost"));

    let entry = engine.sessions().session(user).await;
    assert_eq!(entry.lock().await.state, ConversationState::Idle);
}

#[tokio::test]
async fn test_new_resolution_overwrites_context_entirely() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(15);
    verify_age(&engine, user).await;

    engine.handle_message(user, "Merlot").await;
    engine.handle_message(user, "Riesling").await;

    engine.handle_message(user, "/rate").await;
    let reply = engine.handle_message(user, "yes").await;
    assert!(reply.text.contains("added"));

    let favorites = engine.handle_message(user, "/favorites").await;
    assert!(favorites.text.contains("Riesling"));
    assert!(favorites.text.contains("Trout"));
    assert!(!favorites.text.contains("Duck"));
}

#[tokio::test]
async fn test_type_filters_and_listings() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(16);
    verify_age(&engine, user).await;

    let reply = engine.handle_message(user, "/red").await;
    assert!(reply.text.contains("Merlot Reserve"));
    assert!(!reply.text.contains("Riesling"));

    let reply = engine.handle_message(user, "/rose").await;
    assert!(reply.text.contains("No wines found"));

    let reply = engine.handle_message(user, "/wines").await;
    assert!(reply.text.contains("Merlot Reserve"));
    assert!(reply.text.contains("Riesling Kabinett"));

    let reply = engine.handle_message(user, "/dishes").await;
    assert!(reply.text.contains("Duck"));
    assert!(reply.text.contains("Trout"));
}

#[tokio::test]
async fn test_unknown_marker_command() {
    let (_dir, engine) = seeded_engine().await;
    let user = UserId(17);
    verify_age(&engine, user).await;

    let reply = engine.handle_message(user, "/teleport").await;
    assert!(reply.text.contains("Unknown command"));
}

#[tokio::test]
async fn test_users_do_not_share_state() {
    let (_dir, engine) = seeded_engine().await;
    let engine = Arc::new(engine);

    verify_age(&engine, UserId(20)).await;

    // A different user is still behind the age gate.
    let reply = engine.handle_message(UserId(21), "/wines").await;
    assert!(reply.text.contains("verify your age"));

    // Concurrent full flows for independent users complete cleanly.
    let mut handles = Vec::new();
    for id in 30..34 {
        let engine = engine.clone();
        handles.push(tokio::spawn(async move {
            let user = UserId(id);
            engine.handle_message(user, "/start").await;
            engine
                .handle_message(user, &birth_date_years_ago(25))
                .await;
            engine.handle_message(user, "Merlot").await;
            engine.handle_message(user, "/rate").await;
            engine.handle_message(user, "no").await
        }));
    }
    for handle in handles {
        let reply = handle.await.expect("task panicked");
        assert!(reply.text.contains("not saved"));
    }
}

#[tokio::test]
async fn test_same_user_concurrent_starts_stay_consistent() {
    let (_dir, engine) = seeded_engine().await;
    let engine = Arc::new(engine);
    let user = UserId(40);

    // Two /start messages racing for the same session. Whichever wins opens
    // the age gate; the loser lands in AwaitingAge and gets the date
    // re-prompt. Either way both replies ask for a birth date.
    let mut handles = Vec::new();
    for _ in 0..2 {
        let engine = engine.clone();
        handles.push(tokio::spawn(
            async move { engine.handle_message(user, "/start").await },
        ));
    }
    for handle in handles {
        let reply = handle.await.expect("task panicked");
        assert!(reply.text.contains("DD.MM.YYYY"));
    }

    // One session entry, parked at the age question, still unverified.
    assert_eq!(engine.sessions().len().await, 1);
    {
        let entry = engine.sessions().session(user).await;
        let session = entry.lock().await;
        assert_eq!(session.state, ConversationState::AwaitingAge);
        assert!(!session.age_verified);
    }

    // The session is not wedged: a valid date completes the gate.
    let welcome = engine
        .handle_message(user, &birth_date_years_ago(25))
        .await;
    assert!(welcome.text.contains("Welcome"));
    let entry = engine.sessions().session(user).await;
    let session = entry.lock().await;
    assert_eq!(session.state, ConversationState::Idle);
    assert!(session.age_verified);
}
