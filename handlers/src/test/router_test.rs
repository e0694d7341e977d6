//! End-to-end router scenarios over the in-memory store.

use std::sync::Arc;

use pdfbot_core::{BotError, HandlerResponse, UpdateKind};
use storage::{DocumentStore, InMemoryDocumentStore};

use super::fixtures::{callback, command, text, update_from, RecordingBot, Sent, CHAT_ID};
use crate::{build_router, HandlerConfig, RouterDeps};

const DEFAULT: &str = "Telegram_bot";

struct Harness {
    bot: Arc<RecordingBot>,
    store: InMemoryDocumentStore,
    chain: handler_chain::HandlerChain,
}

fn harness_with(bot: RecordingBot, config: HandlerConfig) -> Harness {
    let bot = Arc::new(bot);
    let store = InMemoryDocumentStore::new(DEFAULT);
    let deps = RouterDeps::new(
        bot.clone(),
        Arc::new(store.clone()) as Arc<dyn DocumentStore>,
        config,
    );
    Harness {
        bot,
        store,
        chain: build_router(&deps),
    }
}

fn harness() -> Harness {
    harness_with(RecordingBot::new(), HandlerConfig::default())
}

fn menu(text: &str, labels: &[&str], tokens: &[String]) -> Sent {
    Sent::Menu {
        chat_id: CHAT_ID,
        text: text.to_string(),
        labels: labels.iter().map(|l| l.to_string()).collect(),
        tokens: tokens.to_vec(),
    }
}

fn message(text: &str) -> Sent {
    Sent::Message {
        chat_id: CHAT_ID,
        text: text.to_string(),
    }
}

/// **Test: /start replies with the welcome menu and exactly two options.**
#[tokio::test]
async fn test_start_shows_main_menu() {
    let h = harness();
    let response = h.chain.handle(&command("start")).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply("🤖 Welcome! Choose an option:".to_string()));
    assert_eq!(
        h.bot.sent(),
        vec![menu(
            "🤖 Welcome! Choose an option:",
            &["🔍 Search PDF", "📚 PDF SubjectWise"],
            &["search_pdf".to_string(), "subject_wise".to_string()],
        )]
    );
}

/// **Test: /search then "algebra" lists Algebra_Notes.pdf; the next text is not a search.**
#[tokio::test]
async fn test_search_scenario() {
    let h = harness();
    let algebra = h.store.insert(DEFAULT, "Algebra_Notes.pdf", "file-ref-1").await;
    h.store.insert(DEFAULT, "Physics.pdf", "file-ref-2").await;

    h.chain.handle(&command("search")).await.unwrap();
    h.chain.handle(&text("algebra")).await.unwrap();
    let third = h.chain.handle(&text("algebra")).await.unwrap();

    assert_eq!(third, HandlerResponse::Continue);
    assert_eq!(
        h.bot.sent(),
        vec![
            message("Enter the PDF name to search:"),
            menu(
                "Select a file:",
                &["📄 Algebra_Notes.pdf"],
                &[format!("file_{}", algebra.id)],
            ),
        ]
    );
}

#[tokio::test]
async fn test_search_pdf_alias_and_button_arm_search() {
    let h = harness();
    h.chain.handle(&command("search_pdf")).await.unwrap();
    h.chain.handle(&text("nothing")).await.unwrap();
    h.chain.handle(&callback("search_pdf")).await.unwrap();
    h.chain.handle(&text("nothing")).await.unwrap();

    assert_eq!(
        h.bot.visible(),
        vec![
            message("Enter the PDF name to search:"),
            message("❌ No files found."),
            message("Enter the PDF name to search:"),
            message("❌ No files found."),
        ]
    );
    assert_eq!(h.bot.answers(), vec!["query-1"]);
}

/// **Test: text without an initiated search produces no response.**
#[tokio::test]
async fn test_text_without_search_is_ignored() {
    let h = harness();
    h.store.insert(DEFAULT, "Algebra_Notes.pdf", "file-ref-1").await;

    let response = h.chain.handle(&text("algebra")).await.unwrap();
    assert_eq!(response, HandlerResponse::Continue);
    assert!(h.bot.sent().is_empty());
}

#[tokio::test]
async fn test_pending_search_belongs_to_the_user_who_asked() {
    let h = harness();
    h.chain.handle(&command("search")).await.unwrap();
    h.chain
        .handle(&update_from(999, UpdateKind::Text("algebra".to_string())))
        .await
        .unwrap();

    assert_eq!(h.bot.sent(), vec![message("Enter the PDF name to search:")]);

    h.chain.handle(&text("algebra")).await.unwrap();
    assert_eq!(h.bot.sent().last(), Some(&message("❌ No files found.")));
}

/// **Test: browse lists collections as 📁 buttons; the button and both commands agree.**
#[tokio::test]
async fn test_browse_lists_collections() {
    let h = harness();
    h.store.insert("Math", "Algebra_Notes.pdf", "f1").await;
    h.store.insert("Physics", "Optics.pdf", "f2").await;

    let expected = menu(
        "Select a subject:",
        &["📁 Math", "📁 Physics"],
        &["subject_Math".to_string(), "subject_Physics".to_string()],
    );

    h.chain.handle(&command("browse")).await.unwrap();
    h.chain.handle(&command("pdf_subjectwise")).await.unwrap();
    h.chain.handle(&callback("subject_wise")).await.unwrap();

    assert_eq!(h.bot.visible(), vec![expected.clone(), expected.clone(), expected]);
}

#[tokio::test]
async fn test_browse_without_collections() {
    let h = harness();
    h.chain.handle(&command("browse")).await.unwrap();
    assert_eq!(h.bot.sent(), vec![message("❌ No subjects found.")]);
}

/// **Test: picking a collection lists its documents; an unknown one says no files.**
#[tokio::test]
async fn test_collection_listing() {
    let h = harness();
    let a = h.store.insert("Computer_Science", "Rust.pdf", "f1").await;
    let b = h.store.insert("Computer_Science", "Go.pdf", "f2").await;

    h.chain.handle(&callback("subject_Computer_Science")).await.unwrap();
    h.chain.handle(&callback("subject_Chemistry")).await.unwrap();

    assert_eq!(
        h.bot.visible(),
        vec![
            menu(
                "Select a file:",
                &["📄 Rust.pdf", "📄 Go.pdf"],
                &[format!("file_{}", a.id), format!("file_{}", b.id)],
            ),
            message("❌ No files found."),
        ]
    );
}

/// **Test: selecting a file sends it by file id; a deleted one sends nothing.**
#[tokio::test]
async fn test_delivery_and_deleted_document() {
    let h = harness();
    let record = h.store.insert(DEFAULT, "Algebra_Notes.pdf", "file-ref-1").await;
    let token = format!("file_{}", record.id);

    h.chain.handle(&callback(&token)).await.unwrap();
    assert!(h.store.delete(&record.id).await);
    let response = h.chain.handle(&callback(&token)).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(
        h.bot.visible(),
        vec![Sent::Document {
            chat_id: CHAT_ID,
            file_ref: "file-ref-1".to_string(),
        }]
    );
    assert_eq!(h.bot.answers().len(), 2);
}

#[tokio::test]
async fn test_deleted_document_notice_when_enabled() {
    let config = HandlerConfig {
        notify_missing_document: true,
        ..HandlerConfig::default()
    };
    let h = harness_with(RecordingBot::new(), config);

    h.chain.handle(&callback("file_65a1f0c2e4b0a1b2c3d4e5f6")).await.unwrap();
    assert_eq!(
        h.bot.visible(),
        vec![message("❌ This file is no longer available.")]
    );
}

#[tokio::test]
async fn test_large_result_menu_is_truncated_with_notice() {
    let config = HandlerConfig {
        menu_max_buttons: 2,
        ..HandlerConfig::default()
    };
    let h = harness_with(RecordingBot::new(), config);
    for i in 0..3 {
        h.store.insert(DEFAULT, &format!("Algebra {i}.pdf"), &format!("f{i}")).await;
    }

    h.chain.handle(&command("search")).await.unwrap();
    h.chain.handle(&text("algebra")).await.unwrap();

    match h.bot.sent().last() {
        Some(Sent::Menu { text, labels, .. }) => {
            assert_eq!(text, "Select a file:\n\nShowing the first 2 of 3 results.");
            assert_eq!(labels, &vec!["📄 Algebra 0.pdf".to_string(), "📄 Algebra 1.pdf".to_string()]);
        }
        other => panic!("expected a menu, got {other:?}"),
    }
}

/// **Test: unknown tokens are acknowledged and otherwise ignored.**
#[tokio::test]
async fn test_unknown_token_is_acknowledged_only() {
    let h = harness();
    let response = h.chain.handle(&callback("refresh")).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(h.bot.sent(), vec![Sent::Answer("query-1".to_string())]);
}

#[tokio::test]
async fn test_malformed_token_is_an_error() {
    let h = harness();
    let err = h.chain.handle(&callback("file_")).await.unwrap_err();

    assert!(matches!(err, BotError::MalformedToken(_)));
    assert!(err.is_malformed_input());
    assert_eq!(h.bot.sent(), vec![Sent::Answer("query-1".to_string())]);
}

/// **Test: a failed acknowledgment does not stop the button from working.**
#[tokio::test]
async fn test_failed_ack_still_handles_button() {
    let h = harness_with(RecordingBot::failing_answers(), HandlerConfig::default());
    h.chain.handle(&callback("search_pdf")).await.unwrap();
    assert_eq!(h.bot.sent(), vec![message("Enter the PDF name to search:")]);
}

#[tokio::test]
async fn test_other_commands_are_ignored() {
    let h = harness();
    let response = h.chain.handle(&command("help")).await.unwrap();
    assert_eq!(response, HandlerResponse::Continue);
    assert!(h.bot.sent().is_empty());
}
