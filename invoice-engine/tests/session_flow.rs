//! End-to-end editing session tests
//!
//! Run with: cargo test -p invoice-engine --test session_flow

use std::sync::Arc;

use invoice_client::{InMemoryCatalog, ProductLookup};
use invoice_engine::{
    Command, EditingSession, FixedClock, InvoiceRenderer, InvoiceState, Mode, Reply,
    SessionError,
};
use invoice_printer::TextFileExporter;
use shared::LineItem;

fn product(id: &str, title: &str, price: &str) -> LineItem {
    LineItem {
        id: id.to_string(),
        title: title.to_string(),
        price: price.to_string(),
        quantity: 1,
        brand: "Acme".to_string(),
        image: format!("https://cdn.example.com/{}.jpg", id),
    }
}

fn new_session(export_dir: &std::path::Path) -> EditingSession<TextFileExporter> {
    let catalog: Arc<dyn ProductLookup> = Arc::new(
        InMemoryCatalog::new()
            .with_item(product("A-100", "Smartphone X", "100.00 KZT"))
            .with_item(product("B-200", "Wireless charger", "50.00 USD"))
            .with_item(product("C-300", "Broken feed entry", "n/a")),
    );
    let clock = FixedClock::at_millis(1_705_314_600_000);
    EditingSession::new(
        InvoiceState::draft(&clock, 30),
        catalog,
        TextFileExporter::new(export_dir),
        InvoiceRenderer::default(),
    )
}

async fn run_script(
    session: &mut EditingSession<TextFileExporter>,
    script: &str,
) -> Vec<Result<Reply, SessionError>> {
    let mut replies = Vec::new();
    for line in script.lines() {
        match Command::parse(line) {
            Ok(Some(command)) => replies.push(session.execute(command).await),
            Ok(None) => {}
            Err(e) => replies.push(Err(e)),
        }
    }
    replies
}

#[tokio::test]
async fn test_script_builds_and_exports_invoice() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = new_session(&dir.path().join("exports"));

    let replies = run_script(
        &mut session,
        "
        # parties
        sender name Sender LLP
        sender taxId 111111111111
        recipient name Recipient JSC
        recipient address Dostyk 5, Astana
        set notes Payment within 30 days

        lookup A-100
        confirm 2
        lookup B-200
        confirm
        export
        ",
    )
    .await;
    assert!(replies.iter().all(|r| r.is_ok()), "{:?}", replies);

    let path = dir
        .path()
        .join("exports")
        .join("invoice-INV-1705314600000.txt");
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(content.contains("INVOICE"));
    assert!(content.contains("Date: 2024-01-15"));
    assert!(content.contains("Due Date: 2024-02-14"));
    assert!(content.contains("Tax ID: 111111111111"));
    assert!(content.contains("Dostyk 5, Astana"));
    assert!(content.contains("Smartphone X"));
    assert!(content.contains("200.00 KZT"));
    assert!(content.contains("250.00 KZT"));
    assert!(content.contains("Payment within 30 days"));
    assert!(content.contains("Page 1/1"));
}

#[tokio::test]
async fn test_unparsable_catalog_price_shows_nan_total() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = new_session(dir.path());

    run_script(&mut session, "lookup A-100\nconfirm\nlookup C-300\nconfirm").await;
    assert_eq!(session.invoice().items.len(), 2);

    let replies = run_script(&mut session, "total").await;
    let Ok(Reply::Text(total)) = &replies[0] else {
        panic!("unexpected reply: {:?}", replies);
    };
    assert!(total.starts_with("Total: NaN KZT"));
}

#[tokio::test]
async fn test_remove_and_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = new_session(dir.path());

    run_script(
        &mut session,
        "lookup A-100\nconfirm\nlookup B-200\nconfirm\nlookup A-100\nconfirm 3\nremove 0\nremove 9",
    )
    .await;

    let ids: Vec<_> = session
        .invoice()
        .items
        .iter()
        .map(|i| (i.id.as_str(), i.quantity))
        .collect();
    assert_eq!(ids, [("B-200", 1), ("A-100", 3)]);
}

#[tokio::test]
async fn test_preview_mode_is_read_only() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = new_session(dir.path());

    run_script(&mut session, "set number INV-42\npreview").await;
    assert_eq!(session.mode(), Mode::Preview);
    let before = session.invoice().clone();

    let replies = run_script(&mut session, "set number INV-43\nlookup A-100\nremove 0").await;
    assert!(
        replies
            .iter()
            .all(|r| matches!(r, Err(SessionError::WrongMode { .. })))
    );
    assert_eq!(session.invoice(), &before);

    // Export works from preview mode and uses the edited number
    run_script(&mut session, "export").await;
    assert!(dir.path().join("invoice-INV-42.txt").exists());

    run_script(&mut session, "edit\nset number INV-43").await;
    assert_eq!(session.invoice().number, "INV-43");
}

#[tokio::test]
async fn test_invalid_commands_do_not_change_invoice() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = new_session(dir.path());
    let before = session.state().clone();

    let replies = run_script(
        &mut session,
        "frobnicate\nset total 5\nconfirm\nremove x\nsender nickname Bob",
    )
    .await;
    assert_eq!(replies.len(), 5);
    assert!(replies.iter().all(|r| r.is_err()));
    assert_eq!(session.state(), &before);
}
