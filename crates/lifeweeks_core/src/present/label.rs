//! Decade headings and event label markup.

use crate::model::week::WeekRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static LINK_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)<(.*)>(.*)$").expect("link markup pattern must compile"));

const LABEL_JOINER: &str = " + ";

/// Styling class of a decade heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecadeLabelClass {
    First,
    Teens,
    Generic,
}

/// Heading text and class for the decade starting at `age`.
pub fn decade_label(age: i32) -> (String, DecadeLabelClass) {
    match age {
        0 => ("My first ten years".to_string(), DecadeLabelClass::First),
        10 => ("My teens".to_string(), DecadeLabelClass::Teens),
        _ => (format!("My {age}s"), DecadeLabelClass::Generic),
    }
}

/// `before<link text>after` split of an event name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMarkup {
    pub before: String,
    pub link_text: String,
    pub after: String,
}

/// Splits the linked part out of `name`, if it carries `<...>` markup.
pub fn split_link_markup(name: &str) -> Option<LinkMarkup> {
    let caps = LINK_MARKUP.captures(name)?;
    Some(LinkMarkup {
        before: caps[1].to_string(),
        link_text: caps[2].to_string(),
        after: caps[3].to_string(),
    })
}

/// Event name with link markers removed.
pub fn display_name(name: &str) -> String {
    name.replace(['<', '>'], "")
}

/// One piece of a week's inline label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LabelSegment {
    Text { text: String },
    Link { text: String, href: String },
}

/// Inline label for a week with events.
///
/// Linked events render their markup split (the whole name is the link when
/// there is no markup); plain events after the first are joined with ` + `.
pub fn week_label(week: &WeekRecord) -> Vec<LabelSegment> {
    let mut segments = Vec::new();
    for (position, entry) in week.events.iter().enumerate() {
        let event = &entry.event;
        match event.link.as_deref() {
            Some(href) => match split_link_markup(&event.name) {
                Some(markup) => {
                    push_text(&mut segments, markup.before);
                    segments.push(LabelSegment::Link {
                        text: markup.link_text,
                        href: href.to_string(),
                    });
                    push_text(&mut segments, markup.after);
                }
                None => segments.push(LabelSegment::Link {
                    text: event.name.clone(),
                    href: href.to_string(),
                }),
            },
            None if position > 0 => {
                push_text(&mut segments, format!("{LABEL_JOINER}{}", event.name));
            }
            None => push_text(&mut segments, event.name.clone()),
        }
    }
    segments
}

fn push_text(segments: &mut Vec<LabelSegment>, text: String) {
    if !text.is_empty() {
        segments.push(LabelSegment::Text { text });
    }
}
