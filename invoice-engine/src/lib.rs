//! Invoice Desk - invoice editing engine
//!
//! # Overview
//!
//! - **Invoice state** (`invoice`): copy-on-write editing of one invoice
//! - **Money** (`invoice_money`): line totals and grand total with `rust_decimal`
//! - **Printing** (`printing`): fixed-width paginated invoice layout
//! - **Session** (`session`): command parsing, modes and lookup candidates
//!
//! # Module layout
//!
//! ```text
//! invoice-engine/src/
//! ├── core/            # configuration
//! ├── invoice/         # invoice state manager
//! ├── invoice_money/   # total calculator
//! ├── printing/        # invoice renderer
//! ├── session/         # editing session and commands
//! └── utils/           # logger, clock
//! ```

pub mod core;
pub mod invoice;
pub mod invoice_money;
pub mod printing;
pub mod session;
pub mod utils;

// Re-export public types
pub use core::Config;
pub use invoice::InvoiceState;
pub use invoice_money::{Amount, InvoiceTotals, calculate_grand_total, calculate_totals, format_amount};
pub use printing::InvoiceRenderer;
pub use session::{Command, EditingSession, Mode, Reply, SessionError, SessionResult};
pub use utils::{Clock, FixedClock, SystemClock};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Prepare the process environment
///
/// Loads `.env` when present, reads [`Config`], creates the working and log
/// directories and installs the tracing subscriber.
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(config.logs_dir())?;
    init_logger_with_file(Some(&config.log_level), Some(&config.logs_dir()));

    tracing::debug!(
        work_dir = %config.work_dir.display(),
        environment = %config.environment,
        "Environment ready"
    );
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____                 _              ____            __
   /  _/___ _   ______  (_)_______     / __ \___  _____/ /__
   / // __ \ | / / __ \/ / ___/ _ \   / / / / _ \/ ___/ //_/
 _/ // / / / |/ / /_/ / / /__/  __/  / /_/ /  __(__  ) ,<
/___/_/ /_/|___/\____/_/\___/\___/  /_____/\___/____/_/|_|
    "#
    );
}
