//! CSV row -> BusinessRecord conversion

use crate::error::IngestError;
use crate::industry::infer_industry;
use crate::sanitize::{sanitize_or_default, sanitize_text};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tandem_domain::{BusinessId, BusinessRecord};
use tracing::{info, warn};

// Column names as exported by the intake form. Headers are matched
// exactly after trimming; anything else is ignored.
const COL_COMPANY: &str = "Company / Brand Name";
const COL_CONTACT: &str = "Name";
const COL_DESCRIPTION: &str = "Your Product or Service in one sentence";
const COL_WEBSITE: &str = "Business Website";
const COL_TARGET_MARKET: &str = "Your Ideal Client / Target Market";
const COL_CURRENT_NEEDS: &str = "Your current need (capital, marketing, legal, tech etc.)";
const COL_EMAIL: &str = "Contact EMAIL";
const COL_PHONE: &str = "Contact Phone";
const COL_LINKEDIN: &str = "LinkedIn Profile URL";
const COL_FUN_FACT: &str = "Fun Fact About You";

/// Result of parsing an intake CSV
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Successfully parsed records, in file order
    pub businesses: Vec<BusinessRecord>,

    /// Rows that could not be read and were skipped
    pub rows_skipped: usize,
}

/// Parse an intake CSV from any reader
///
/// Individually malformed rows are skipped and counted; only an
/// unreadable header is fatal.
pub fn parse_csv<R: Read>(reader: R) -> Result<ParseOutcome, IngestError> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(false)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns: HashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name, idx))
        .collect();

    let mut businesses = Vec::new();
    let mut rows_skipped = 0;

    for (index, row) in csv_reader.records().enumerate() {
        match row {
            Ok(record) => businesses.push(business_from_row(&columns, &record, index)),
            Err(e) => {
                warn!("Skipping malformed CSV row {}: {}", index + 1, e);
                rows_skipped += 1;
            }
        }
    }

    info!(
        "Parsed {} businesses from CSV ({} rows skipped)",
        businesses.len(),
        rows_skipped
    );

    Ok(ParseOutcome {
        businesses,
        rows_skipped,
    })
}

/// Parse an intake CSV from a file path
pub fn parse_csv_path<P: AsRef<Path>>(path: P) -> Result<ParseOutcome, IngestError> {
    let file = File::open(path.as_ref())?;
    parse_csv(file)
}

fn business_from_row(
    columns: &HashMap<&str, usize>,
    record: &StringRecord,
    index: usize,
) -> BusinessRecord {
    let field = |name: &str| -> &str {
        columns
            .get(name)
            .and_then(|idx| record.get(*idx))
            .unwrap_or("")
    };

    let company_raw = field(COL_COMPANY);
    let contact_raw = field(COL_CONTACT);
    let description_raw = field(COL_DESCRIPTION);

    // Name falls back to the contact person, then a positional label, so
    // every record is at least addressable in the UI.
    let name = [company_raw, contact_raw]
        .iter()
        .map(|raw| sanitize_text(raw))
        .find(|s| !s.is_empty())
        .unwrap_or_else(|| format!("Business {}", index + 1));

    let contact_email = sanitize_text(field(COL_EMAIL));
    let id = BusinessId::derive(&name, &contact_email);

    BusinessRecord {
        id,
        name,
        contact_name: sanitize_text(contact_raw),
        description: sanitize_or_default(description_raw),
        website: sanitize_text(field(COL_WEBSITE)),
        target_market: sanitize_or_default(field(COL_TARGET_MARKET)),
        current_needs: sanitize_or_default(field(COL_CURRENT_NEEDS)),
        contact_email,
        contact_phone: sanitize_text(field(COL_PHONE)),
        linkedin: sanitize_text(field(COL_LINKEDIN)),
        fun_fact: sanitize_text(field(COL_FUN_FACT)),
        industry: infer_industry(description_raw, company_raw),
        services: sanitize_or_default(description_raw),
    }
}
