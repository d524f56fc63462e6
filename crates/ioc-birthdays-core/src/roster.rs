//! Loading the member roster from CSV.
//!
//! A roster load only fails for problems with the file as a whole (it cannot
//! be read, or it has no `name` column). Individual bad rows are skipped and
//! bad birth dates become unknown.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::error::RosterError;
use crate::models::{Member, MemberRecord};
use crate::normalize::BirthDateFormat;

/// Columns a roster file must have.
pub const REQUIRED_COLUMNS: [&str; 1] = ["name"];

/// Columns that are read when present and left empty when absent.
pub const OPTIONAL_COLUMNS: [&str; 6] = [
    "classification",
    "born",
    "mugshot_url",
    "profile_url",
    "entry_in_ioc",
    "games_participated",
];

/// An immutable snapshot of the roster.
#[derive(Debug, Clone)]
pub struct Roster {
    members: Vec<Member>,
    loaded_at: DateTime<Local>,
    skipped_rows: usize,
}

impl Roster {
    pub fn empty() -> Self {
        Self {
            members: Vec::new(),
            loaded_at: Local::now(),
            skipped_rows: 0,
        }
    }

    pub fn from_members(members: Vec<Member>) -> Self {
        Self {
            members,
            ..Self::empty()
        }
    }

    pub fn load(path: &Path, format: &BirthDateFormat) -> Result<Self, RosterError> {
        let file = File::open(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let roster = Self::from_reader(file, format)?;

        info!(
            path = %path.display(),
            members = roster.len(),
            skipped = roster.skipped_rows,
            unknown_birthdays = roster.unknown_birthdays(),
            "Roster loaded"
        );
        Ok(roster)
    }

    pub fn from_reader<R: Read>(reader: R, format: &BirthDateFormat) -> Result<Self, RosterError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(RosterError::MissingColumn(column));
            }
        }
        for column in OPTIONAL_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                warn!(column, "Roster has no such column, leaving it empty");
            }
        }

        let mut members = Vec::new();
        let mut skipped_rows = 0;

        for (index, result) in csv_reader.deserialize::<MemberRecord>().enumerate() {
            // Line 1 is the header
            let line = index + 2;
            match result {
                Ok(record) if record.name.is_empty() => {
                    warn!(line, "Skipping roster row with no name");
                    skipped_rows += 1;
                }
                Ok(record) => {
                    let member = Member::new(record, format);
                    if !member.birth_date.is_valid() && !member.record.raw_birth_text.is_empty() {
                        debug!(line, name = %member.name(), born = %member.record.raw_birth_text, "Unknown birthday");
                    }
                    members.push(member);
                }
                Err(e) => {
                    warn!(line, error = %e, "Skipping unreadable roster row");
                    skipped_rows += 1;
                }
            }
        }

        Ok(Self {
            members,
            loaded_at: Local::now(),
            skipped_rows,
        })
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members whose birth date could not be parsed.
    pub fn unknown_birthdays(&self) -> usize {
        self.members
            .iter()
            .filter(|m| !m.birth_date.is_valid())
            .count()
    }

    /// Rows dropped during load (no name, or undecodable).
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn age_minutes(&self) -> i64 {
        (Local::now() - self.loaded_at).num_minutes()
    }

    pub fn age_display(&self) -> String {
        format_age(self.age_minutes())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::empty()
    }
}

/// Render an age in minutes as "just now", "5m ago", "2h ago" or "3d ago".
pub fn format_age(minutes: i64) -> String {
    if minutes < 1 {
        // Negative on clock skew
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 1440 {
        let hours = minutes / 60;
        if minutes % 60 >= 30 {
            format!("{}h ago", hours + 1)
        } else {
            format!("{}h ago", hours)
        }
    } else {
        let days = minutes / 1440;
        if (minutes % 1440) / 60 >= 12 {
            format!("{}d ago", days + 1)
        } else {
            format!("{}d ago", days)
        }
    }
}
