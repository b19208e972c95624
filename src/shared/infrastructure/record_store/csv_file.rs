// File-backed implementation of the RecordStore port.
//
// Layout, matching what the operator sees on disk:
// - `responses.csv`: append-only ledger, header row `timestamp,name,response`,
//   every field double-quoted with `"` doubled inside fields.
// - `summary.json`: tally sidecar, `{"accepted": N, "declined": N}`.
//
// The ledger is the source of truth. A missing or unreadable sidecar is
// recomputed from the ledger rows; a ledger row whose sidecar update failed
// gets its tally credit back the same way.
//
// Writers within this process are serialized by a mutex. Concurrent writers
// from other processes are outside this adapter's contract.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::warn;

use crate::modules::rsvp::core::event::{RsvpEvent, RsvpResponse};
use crate::modules::rsvp::core::tally::Tally;
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};

pub const LEDGER_FILE: &str = "responses.csv";
pub const SUMMARY_FILE: &str = "summary.json";
pub const LEDGER_HEADER: &str = "timestamp,name,response";

pub struct CsvFileStore {
    ledger_path: PathBuf,
    summary_path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvFileStore {
    /// Open the store under `data_dir`, creating the directory, the ledger
    /// header and the tally sidecar when missing. Idempotent: opening an
    /// already-initialized directory changes nothing.
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)
            .await
            .map_err(|err| StoreError::Unavailable(format!("create {}: {err}", data_dir.display())))?;

        let store = Self {
            ledger_path: data_dir.join(LEDGER_FILE),
            summary_path: data_dir.join(SUMMARY_FILE),
            write_lock: Mutex::new(()),
        };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StoreError> {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.ledger_path)
            .await
        {
            Ok(mut file) => {
                file.write_all(format!("{LEDGER_HEADER}\n").as_bytes())
                    .await
                    .map_err(|err| StoreError::Unavailable(format!("write ledger header: {err}")))?;
                file.sync_all()
                    .await
                    .map_err(|err| StoreError::Unavailable(format!("sync ledger header: {err}")))?;
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {}
            Err(err) => {
                return Err(StoreError::Unavailable(format!(
                    "create {}: {err}",
                    self.ledger_path.display()
                )));
            }
        }

        if fs::metadata(&self.summary_path).await.is_err() {
            let tally = self.recompute().await?;
            self.write_summary(&tally).await.map_err(StoreError::Unavailable)?;
        }
        Ok(())
    }

    /// Tally as currently recorded, falling back to a recompute over the
    /// ledger when the sidecar is missing or unreadable.
    async fn current_tally(&self) -> Result<Tally, StoreError> {
        match fs::read_to_string(&self.summary_path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(tally) => Ok(tally),
                Err(err) => {
                    warn!(error = %err, "tally sidecar unreadable, recomputing from ledger");
                    self.recompute().await
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => self.recompute().await,
            Err(err) => Err(StoreError::Unavailable(format!(
                "read {}: {err}",
                self.summary_path.display()
            ))),
        }
    }

    async fn recompute(&self) -> Result<Tally, StoreError> {
        let raw = match fs::read_to_string(&self.ledger_path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Tally::default()),
            Err(err) => {
                return Err(StoreError::Unavailable(format!(
                    "read {}: {err}",
                    self.ledger_path.display()
                )));
            }
        };

        let mut tally = Tally::default();
        for (number, line) in raw.lines().enumerate().skip(1) {
            if line.is_empty() {
                continue;
            }
            match parse_row(line) {
                Some(fields) if fields.len() == 3 => match RsvpResponse::parse(&fields[2]) {
                    Some(response) => tally.record(response),
                    None => warn!(row = number + 1, "ledger row has an unknown response, skipping"),
                },
                _ => warn!(row = number + 1, "malformed ledger row, skipping"),
            }
        }
        Ok(tally)
    }

    async fn write_summary(&self, tally: &Tally) -> Result<(), String> {
        let body = serde_json::to_string_pretty(tally)
            .map_err(|err| format!("encode tally: {err}"))?;
        fs::write(&self.summary_path, body)
            .await
            .map_err(|err| format!("write {}: {err}", self.summary_path.display()))
    }
}

#[async_trait::async_trait]
impl RecordStore for CsvFileStore {
    async fn append(&self, event: &RsvpEvent) -> Result<Tally, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut tally = self.current_tally().await?;

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.ledger_path)
            .await
            .map_err(|err| StoreError::Unavailable(format!(
                "open {}: {err}",
                self.ledger_path.display()
            )))?;
        file.write_all(ledger_line(event).as_bytes())
            .await
            .map_err(|err| StoreError::WriteFailed(format!("append ledger row: {err}")))?;
        file.sync_all()
            .await
            .map_err(|err| StoreError::WriteFailed(format!("sync ledger: {err}")))?;

        // The row is durable from here; a sidecar failure leaves the event
        // without tally credit until the next recompute.
        tally.record(event.response);
        self.write_summary(&tally)
            .await
            .map_err(StoreError::WriteFailed)?;
        Ok(tally)
    }

    async fn tally(&self) -> Result<Tally, StoreError> {
        self.current_tally().await
    }
}

fn ledger_line(event: &RsvpEvent) -> String {
    // The ledger is line-oriented; newlines inside a name would split the row.
    let name = event.name.replace(['\r', '\n'], " ").replace('"', "\"\"");
    format!(
        "\"{}\",\"{}\",\"{}\"\n",
        event.timestamp_string(),
        name,
        event.response
    )
}

/// Parse one ledger row of fully-quoted fields with `""` escapes.
fn parse_row(line: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut rest = line;
    loop {
        rest = rest.strip_prefix('"')?;
        let mut field = String::new();
        loop {
            let end = rest.find('"')?;
            field.push_str(&rest[..end]);
            rest = &rest[end + 1..];
            match rest.strip_prefix('"') {
                Some(after_escape) => {
                    field.push('"');
                    rest = after_escape;
                }
                None => break,
            }
        }
        fields.push(field);
        if rest.is_empty() {
            return Some(fields);
        }
        rest = rest.strip_prefix(',')?;
    }
}
