//! Bulk import of person records from CSV.
//!
//! Layout: one header row (discarded), then `[ignored, name, age, hobbies]`.
//! The hobbies column holds comma-separated names; when it is not quoted the
//! CSV tokenizer spreads it over several columns, so every column from the
//! fourth on is treated as part of the hobby list.
//!
//! Rows are created one at a time. The first bad row stops the import, and
//! rows created before it stay in the store.

use std::io::Read;

use models::person::Person;
use thiserror::Error;
use tracing::{info, warn};

use crate::person::repository::PersonRepository;

const NAME_COLUMN: usize = 1;
const AGE_COLUMN: usize = 2;
const HOBBIES_COLUMN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImportErrorKind {
    #[error("Error reading CSV header")]
    Header,
    #[error("Error reading CSV file")]
    Row,
    #[error("Invalid age format")]
    Age,
    #[error("Invalid person data")]
    InvalidPerson,
}

/// Why an import stopped and how far it got.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct ImportError {
    pub kind: ImportErrorKind,
    /// 1-based data row (header excluded) that failed; 0 for header errors.
    pub row: usize,
    /// Records created before the failure. They are not rolled back.
    pub committed: usize,
}

/// Turn one data row into a validated candidate record.
pub fn parse_row(record: &csv::StringRecord) -> Result<Person, ImportErrorKind> {
    if record.len() <= HOBBIES_COLUMN {
        return Err(ImportErrorKind::Row);
    }
    let name = record[NAME_COLUMN].trim().to_string();
    let age = record[AGE_COLUMN]
        .trim()
        .parse::<i64>()
        .map_err(|_| ImportErrorKind::Age)?;
    let hobbies = record
        .iter()
        .skip(HOBBIES_COLUMN)
        .flat_map(|field| field.split(','))
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(String::from)
        .collect();

    let person = Person::new(name, age, hobbies);
    person.validate().map_err(|_| ImportErrorKind::InvalidPerson)?;
    Ok(person)
}

/// Read `reader` as CSV and create one record per data row.
///
/// Returns the stored records, ids included, in file order.
pub async fn import_csv<R>(repo: &dyn PersonRepository, reader: R) -> Result<Vec<Person>, ImportError>
where
    R: Read + Send,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header_ok = rdr.headers().map(|h| !h.is_empty()).unwrap_or(false);
    if !header_ok {
        return Err(ImportError { kind: ImportErrorKind::Header, row: 0, committed: 0 });
    }

    let mut imported = Vec::new();
    let mut record = csv::StringRecord::new();
    let mut row = 0;
    loop {
        row += 1;
        let fail = |kind, committed| ImportError { kind, row, committed };
        match rdr.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                warn!(row, error = %e, committed = imported.len(), "csv tokenizer error, import stopped");
                return Err(fail(ImportErrorKind::Row, imported.len()));
            }
        }
        let candidate = match parse_row(&record) {
            Ok(p) => p,
            Err(kind) => {
                warn!(row, %kind, committed = imported.len(), "malformed import row, import stopped");
                return Err(fail(kind, imported.len()));
            }
        };
        imported.push(repo.create(candidate).await);
    }

    info!(imported = imported.len(), "csv import finished");
    Ok(imported)
}
