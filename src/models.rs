use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One CSV data row keyed by header name.
///
/// Keys may be missing entirely (short rows, renamed form questions); values
/// are stored exactly as exported, untrimmed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    /// Raw value of `column`, if the column exists in this row.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A registered member after field normalization.
///
/// Text fields hold cleaned values: trimmed, never empty, single quotes doubled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberRecord {
    pub timestamp: Option<NaiveDateTime>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub second_email: Option<String>,
    pub active_email: Option<String>,
    pub year_of_completion: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub active_phone_number: Option<String>,
    pub other_phone_number: Option<String>,
    pub currently_employed: bool,
    pub current_address: Option<String>,
    pub relationship_status: Option<String>,
    pub has_children: bool,
    pub number_of_children: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub postgrad_year_of_completion: Option<String>,
    pub completed_tertiary: bool,
    pub tertiary_institution_name: Option<String>,
    pub current_employer: Option<String>,
    pub prefered_work_industry: Option<String>,
    pub area_of_work: Option<String>,
    pub on_associate_whatsapp: bool,
}

impl MemberRecord {
    /// Natural key used by dependent rows to find this member after load.
    pub fn natural_key(&self) -> MemberKey<'_> {
        MemberKey {
            full_name: self.full_name.as_deref(),
            email: self.email.as_deref(),
        }
    }
}

/// Borrowed `(full_name, email)` pair identifying a member row in the database.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemberKey<'a> {
    pub full_name: Option<&'a str>,
    pub email: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpouseRecord {
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub marriage_anniversary_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChildRecord {
    /// Nominal form slot (1..=5); gaps are preserved, not renumbered.
    pub child_order: u8,
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// Everything derived from one CSV row.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub member: MemberRecord,
    pub spouse: Option<SpouseRecord>,
    pub children: Vec<ChildRecord>,
}

/// Position of one batch within the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchInfo {
    /// 1-based batch number.
    pub number: usize,
    /// 1-based index of the first record in the batch.
    pub first_record: usize,
    /// 1-based index of the last record in the batch (inclusive).
    pub last_record: usize,
}

impl BatchInfo {
    pub fn len(&self) -> usize {
        self.last_record + 1 - self.first_record
    }

    /// Zero-based slice range into the full row list.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.first_record - 1..self.last_record
    }
}

/// What was written for one batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    #[serde(flatten)]
    pub batch: BatchInfo,
    pub file: PathBuf,
    pub members: usize,
    pub spouses: usize,
    pub children: usize,
}

/// Result of a full conversion run, printed as the final report.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub input: PathBuf,
    pub schema_file: String,
    pub batches: Vec<BatchSummary>,
}

impl Manifest {
    pub fn total_members(&self) -> usize {
        self.batches.iter().map(|b| b.members).sum()
    }

    pub fn total_spouses(&self) -> usize {
        self.batches.iter().map(|b| b.spouses).sum()
    }

    pub fn total_children(&self) -> usize {
        self.batches.iter().map(|b| b.children).sum()
    }
}
