use std::io::Write;
use std::sync::Arc;

use invoice_client::HttpCatalog;
use invoice_engine::{
    Command, EditingSession, InvoiceRenderer, InvoiceState, Reply, SystemClock, print_banner,
    setup_environment,
};
use invoice_printer::{PageFormat, TextFileExporter};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, work dir, logging)
    let config = setup_environment()?;

    if config.is_development() {
        print_banner();
    }
    tracing::info!(environment = %config.environment, "Invoice desk starting");

    // 2. Collaborators
    let catalog = HttpCatalog::new(&config.client_config())?;
    let exporter = TextFileExporter::new(config.exports_dir());
    let state = InvoiceState::draft(&SystemClock, config.due_in_days);

    let mut session = EditingSession::new(
        state,
        Arc::new(catalog),
        exporter,
        InvoiceRenderer::new(PageFormat::A4),
    );

    println!(
        "Invoice {} drafted, due {}. Type `help` for commands.",
        session.invoice().number,
        session.invoice().due_date
    );

    // 3. Command loop
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}> ", session.mode());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("error [{}]: {}", e.code(), e);
                continue;
            }
        };

        match session.execute(command).await {
            Ok(Reply::Text(text)) => println!("{}", text),
            Ok(Reply::Quit) => break,
            Err(e) => {
                let code = e.code();
                tracing::warn!(%code, category = code.category().name(), "Command failed: {}", e);
                println!("error [{}]: {}", e.code(), e);
            }
        }
    }

    tracing::info!(
        number = %session.invoice().number,
        revision = session.state().revision(),
        "Invoice desk stopped"
    );
    Ok(())
}
