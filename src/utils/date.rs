use chrono::{Local, NaiveDate};
use crate::core::library::{LibraryError, LibraryResult};

pub const DATE_FMT: &str = "%Y-%m-%d";

// parses a calendar date supplied by a caller, e.g. 2024-03-01
pub fn parse_date(field: &str, value: &str) -> LibraryResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FMT).map_err(|err| {
        LibraryError::invalid_field(field, format!("{} is not a date ({})", value, err).as_str())
    })
}

// resolves an optional caller supplied date, defaulting to the local calendar day
pub fn parse_date_or_today(field: &str, value: Option<&str>) -> LibraryResult<NaiveDate> {
    match value {
        Some(value) => parse_date(field, value),
        None => Ok(today()),
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    format!("{}", date.format(DATE_FMT))
}

pub mod serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::{DATE_FMT, format_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        format_date(*date).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        let date = NaiveDate::parse_from_str(&str_date, DATE_FMT).map_err(D::Error::custom)?;
        Ok(date)
    }
}
