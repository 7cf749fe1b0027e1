//! End-to-end flows through the application core.

use propdf::app::{Action, App, AppState, Outcome, TextOutput};
use propdf::config::Config;
use tempfile::TempDir;

use crate::common::{FakeRenderer, QueuedDialogs, write_bytes, write_pdf};

type TestApp = App<FakeRenderer, QueuedDialogs, TextOutput>;

fn new_app() -> TestApp {
    App::new(
        Config::default(),
        FakeRenderer::default(),
        QueuedDialogs::default(),
        TextOutput::new(),
    )
}

#[tokio::test]
async fn test_open_search_merge_session() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &["Hello World", "Goodbye", "hello again"]);
    let b = write_pdf(&dir, "b.pdf", &["Other"]);
    let mut app = new_app();

    // Search before anything is open
    assert_eq!(app.perform(Action::Search).await, Outcome::Rejected);
    assert_eq!(app.dialogs().last().message, "Please open a PDF first!");
    assert_eq!(app.state(), AppState::Idle);

    // Open
    app.dialogs_mut().open.push_back(a.clone());
    assert_eq!(app.perform(Action::Open).await, Outcome::Completed);
    assert_eq!(app.state(), AppState::DocumentOpen);
    assert!(app.surface().text().contains("Total Pages: 3"));
    assert_eq!(app.queue().iter().collect::<Vec<_>>(), vec![a.as_path()]);

    // Search
    app.dialogs_mut().queries.push_back("hello".to_string());
    assert_eq!(app.perform(Action::Search).await, Outcome::Completed);
    let notice = app.dialogs().last();
    assert_eq!(notice.title, "Search Results");
    assert_eq!(notice.message, "Text found on pages: Page 1, Page 3");

    app.dialogs_mut().queries.push_back("zebra".to_string());
    app.perform(Action::Search).await;
    assert_eq!(app.dialogs().last().message, "No matches found.");

    // Merge
    let output = dir.path().join("combined.pdf");
    app.dialogs_mut().merge_inputs.push_back(vec![a, b]);
    app.dialogs_mut().save_paths.push_back(output.clone());
    assert_eq!(app.perform(Action::Merge).await, Outcome::Completed);
    assert_eq!(
        app.dialogs().last().message,
        format!("Merged PDFs into {}", output.display())
    );
    assert!(output.exists());

    // The merge did not touch the open session or the queue
    assert_eq!(app.session().unwrap().page_count(), 3);
    assert_eq!(app.queue().len(), 1);

    assert_eq!(app.perform(Action::Exit).await, Outcome::Exit);
}

#[tokio::test]
async fn test_opening_second_document_replaces_first() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &["first doc"]);
    let b = write_pdf(&dir, "b.pdf", &["second doc", "page two"]);
    let mut app = new_app();

    app.open_path(&a).await;
    app.open_path(&b).await;

    let text = app.surface().text();
    assert!(!text.contains("first doc"));
    assert!(text.contains("second doc"));
    assert!(text.contains("Total Pages: 2"));
    assert_eq!(app.session().unwrap().source(), b);
    assert_eq!(app.queue().len(), 2);

    app.dialogs_mut().queries.push_back("first doc".to_string());
    assert_eq!(app.search_text(), Outcome::Completed);
    assert_eq!(app.dialogs().last().message, "No matches found.");
}

#[tokio::test]
async fn test_failed_open_after_success() {
    let dir = TempDir::new().unwrap();
    let good = write_pdf(&dir, "good.pdf", &["good"]);
    let bad = write_bytes(&dir, "bad.pdf", b"garbage");
    let mut app = new_app();

    app.open_path(&good).await;
    assert_eq!(app.open_path(&bad).await, Outcome::Failed);

    let notice = app.dialogs().last();
    assert_eq!(notice.kind, "error");
    assert!(notice.message.starts_with("Error opening PDF: "));
    assert_eq!(app.session().unwrap().source(), good);
    assert!(!app.queue().contains(&bad));
}

#[tokio::test]
async fn test_open_missing_file() {
    let dir = TempDir::new().unwrap();
    let mut app = new_app();

    let outcome = app.open_path(&dir.path().join("nope.pdf")).await;
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(app.state(), AppState::Idle);
    assert!(app.surface().text().is_empty());
}

#[tokio::test]
async fn test_drop_then_open_does_not_duplicate() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "with space.pdf", &["dropped"]);
    let mut app = new_app();

    let payload = format!("{{{}}} {}", a.display(), dir.path().join("notes.txt").display());
    assert_eq!(app.handle_drop(&payload), 1);
    assert!(
        app.surface()
            .text()
            .contains(&format!("Added PDF: {}", a.display()))
    );

    app.open_path(&a).await;
    assert_eq!(app.queue().len(), 1);
    assert!(!app.surface().text().contains("File Added for Merging"));
}

#[tokio::test]
async fn test_render_failure_does_not_fail_open() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &["text"]);
    let mut app = App::new(
        Config {
            quiet: true,
            ..Config::default()
        },
        FakeRenderer { fail: true },
        QueuedDialogs::default(),
        TextOutput::new(),
    );

    assert_eq!(app.open_path(&a).await, Outcome::Completed);
    assert!(app.surface().thumbnail().is_none());
    assert!(app.dialogs().notices.is_empty());
}
