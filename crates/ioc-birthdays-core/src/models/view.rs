//! Display-ready shapes handed to the presentation layer.

use serde::Serialize;

/// A member shown in one of the birthday views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayCard {
    pub classification: String,
    pub name: String,
    pub profile_url: Option<String>,
    pub mugshot_url: Option<String>,
    pub birthday: String,
}

/// A member shown in the full roster listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub name: String,
    pub classification: String,
    pub birthday: String,
    pub entry_in_ioc: String,
    pub games_participated: String,
    pub profile_url: Option<String>,
}
