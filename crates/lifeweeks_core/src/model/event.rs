//! Dated annotation records.

use serde::{Deserialize, Serialize};

/// One annotation attached to a calendar date.
///
/// Birthday records are synthesized by the timeline builder and never come
/// from input rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub link: Option<String>,
    pub is_birthday: bool,
}

impl EventRecord {
    /// Creates the synthesized birthday marker for `age` reached in `year`.
    pub fn birthday(age: i32, year: i32) -> Self {
        Self {
            name: format!("\u{1F382}{age} in {year}"),
            description: None,
            category: None,
            link: None,
            is_birthday: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EventRecord;

    #[test]
    fn birthday_name_embeds_age_and_year() {
        let event = EventRecord::birthday(25, 2015);
        assert!(event.is_birthday);
        assert!(event.name.contains("25"));
        assert!(event.name.ends_with("in 2015"));
        assert_eq!(event.description, None);
        assert_eq!(event.link, None);
    }
}
