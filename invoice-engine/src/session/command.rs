//! Line-oriented command parser

use shared::{AppError, CompanyField, ErrorCode, InvoiceField};

use super::error::{SessionError, SessionResult};

/// One editing command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit,
    Preview,
    Sender(CompanyField, String),
    Recipient(CompanyField, String),
    Set(InvoiceField, String),
    Lookup(String),
    Confirm(Option<u32>),
    Discard,
    Remove(usize),
    Items,
    Total,
    Show,
    Export,
    Help,
    Quit,
}

impl Command {
    /// Command name as typed
    pub fn name(&self) -> &'static str {
        match self {
            Command::Edit => "edit",
            Command::Preview => "preview",
            Command::Sender(..) => "sender",
            Command::Recipient(..) => "recipient",
            Command::Set(..) => "set",
            Command::Lookup(_) => "lookup",
            Command::Confirm(_) => "confirm",
            Command::Discard => "discard",
            Command::Remove(_) => "remove",
            Command::Items => "items",
            Command::Total => "total",
            Command::Show => "show",
            Command::Export => "export",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }


    /// Parse one input line
    ///
    /// Blank lines and `#` comments yield `Ok(None)`. Values keep their inner
    /// spaces: `set notes Thank you` sets the notes to `"Thank you"`.
    pub fn parse(line: &str) -> SessionResult<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (name, rest) = split_word(line);
        let command = match name.to_ascii_lowercase().as_str() {
            "edit" => Command::Edit,
            "preview" => Command::Preview,
            "sender" => {
                let (field, value) = company_args("sender", rest)?;
                Command::Sender(field, value)
            }
            "recipient" => {
                let (field, value) = company_args("recipient", rest)?;
                Command::Recipient(field, value)
            }
            "set" => {
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err(usage("set <number|date|dueDate|notes> <value>"));
                }
                let field = InvoiceField::parse(field).ok_or_else(|| {
                    AppError::with_message(
                        ErrorCode::InvoiceFieldUnknown,
                        format!("Unknown invoice field: {}", field),
                    )
                    .with_detail("field", field)
                })?;
                Command::Set(field, value.to_string())
            }
            "lookup" => {
                if rest.is_empty() {
                    return Err(usage("lookup <article-id>"));
                }
                Command::Lookup(rest.to_string())
            }
            "confirm" => {
                if rest.is_empty() {
                    Command::Confirm(None)
                } else {
                    match rest.parse::<u32>() {
                        Ok(qty) if qty > 0 => Command::Confirm(Some(qty)),
                        _ => {
                            return Err(SessionError::InvalidArgument(format!(
                                "quantity must be a positive integer, got '{}'",
                                rest
                            )));
                        }
                    }
                }
            }
            "discard" => Command::Discard,
            "remove" => {
                let index = rest.parse::<usize>().map_err(|_| {
                    SessionError::InvalidArgument(format!(
                        "index must be a non-negative integer, got '{}'",
                        rest
                    ))
                })?;
                Command::Remove(index)
            }
            "items" => Command::Items,
            "total" => Command::Total,
            "show" => Command::Show,
            "export" => Command::Export,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(SessionError::UnknownCommand(name.to_string())),
        };
        Ok(Some(command))
    }
}

/// First word and the trimmed remainder
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (s, ""),
    }
}

fn company_args(command: &str, rest: &str) -> SessionResult<(CompanyField, String)> {
    let (field, value) = split_word(rest);
    if field.is_empty() {
        return Err(usage(&format!(
            "{} <name|address|phone|email|taxId> <value>",
            command
        )));
    }
    let field = CompanyField::parse(field).ok_or_else(|| {
        SessionError::InvalidArgument(format!("unknown company field: {}", field))
    })?;
    Ok((field, value.to_string()))
}

fn usage(text: &str) -> SessionError {
    SessionError::InvalidArgument(format!("usage: {}", text))
}

/// Text printed by `help`
pub const HELP: &str = "\
Commands:
  edit | preview                     switch mode (preview prints the invoice)
  sender <field> <value>             name | address | phone | email | taxId
  recipient <field> <value>          same fields as sender
  set <field> <value>                number | date | dueDate | notes
  lookup <article-id>                find a product in the catalog
  confirm [qty]                      add the found product
  discard                            drop the found product
  remove <index>                     remove an item (0-based)
  items | total | show               list items, grand total, invoice JSON
  export                             write the printable invoice
  help | quit";
