use crate::error::Result;
use crate::record::{LedgerRow, COLUMNS};

/// Minimal worksheet surface the appender needs. The production
/// implementation is HTTP-backed (`sheets::SheetsClient`); tests use an
/// in-memory store.
pub trait WorksheetStore {
    /// Every populated row, top to bottom.
    fn read_all(&self) -> Result<Vec<Vec<String>>>;
    /// Append one row after the current contents (used for the header).
    fn append_row(&mut self, cells: &[String]) -> Result<()>;
    /// One batched write covering `range`, e.g. "A2:U2".
    fn update_range(&mut self, range: &str, rows: &[Vec<String>]) -> Result<()>;
}

/// A1 reference for a 1-based (row, col) pair: (2, 21) -> "U2".
pub fn cell_ref(row: usize, col: usize) -> String {
    let mut letters = String::new();
    let mut c = col;
    while c > 0 {
        let rem = ((c - 1) % 26) as u8;
        letters.insert(0, (b'A' + rem) as char);
        c = (c - 1) / 26;
    }
    format!("{letters}{row}")
}

/// Append rows in one batched write. Existing contents are scanned to
/// find the next free row; an empty worksheet gets the header row first.
/// The scan-then-write is not atomic, so two concurrent submitters can
/// race on the target row.
pub fn append_rows<S: WorksheetStore>(store: &mut S, rows: &[LedgerRow]) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    let existing = store.read_all()?;
    let start_row = if existing.is_empty() {
        let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
        store.append_row(&header)?;
        2
    } else {
        existing.len() + 1
    };

    let end_row = start_row + rows.len() - 1;
    let range = format!("A{start_row}:{}", cell_ref(end_row, COLUMNS.len()));
    let data: Vec<Vec<String>> = rows.iter().map(|r| r.cells().to_vec()).collect();
    store.update_range(&range, &data)
}
