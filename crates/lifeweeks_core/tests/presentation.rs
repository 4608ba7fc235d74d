use lifeweeks_core::present::{
    group_by_date, render_grid, render_tooltip, tooltip_blocks, week_glyph, week_label,
    LabelSegment,
};
use lifeweeks_core::{
    build_timeline, CalendarDate, EventIndex, PhaseResolver, RawEventRow, TimelineConfig,
};

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).unwrap()
}

fn row(date: &str, name: &str, link: Option<&str>, desc: Option<&str>) -> RawEventRow {
    RawEventRow {
        date: Some(date.to_string()),
        name: Some(name.to_string()),
        link: link.map(str::to_string),
        desc: desc.map(str::to_string),
        ..RawEventRow::default()
    }
}

fn birthday_week_timeline(rows: Vec<RawEventRow>) -> lifeweeks_core::Timeline {
    let config = TimelineConfig::new(date(1990, 6, 20), 2015, date(2024, 1, 1)).unwrap();
    build_timeline(&config, &EventIndex::build(rows), &PhaseResolver::default()).unwrap()
}

#[test]
fn groups_follow_first_appearance_with_birthday_first() {
    let timeline = birthday_week_timeline(vec![
        row("2015-06-22", "A", None, None),
        row("2015-06-22", "B", None, None),
        row("2015-06-20", "C", None, None),
    ]);
    let week = timeline.week_containing(date(2015, 6, 20)).unwrap();
    let groups = group_by_date(week);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].date, date(2015, 6, 20));
    assert!(groups[0].events[0].is_birthday);
    assert_eq!(groups[0].events[1].name, "C");
    assert_eq!(groups[1].date, date(2015, 6, 22));
    let names: Vec<_> = groups[1].events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn label_joins_plain_events_and_splits_links() {
    let timeline = birthday_week_timeline(vec![
        row("2015-06-21", "Visited <Paris> again", Some("https://paris.example"), None),
        row("2015-06-23", "B", None, None),
    ]);
    let week = timeline.week_containing(date(2015, 6, 21)).unwrap();
    let segments = week_label(week);

    assert_eq!(segments.len(), 5);
    assert!(matches!(&segments[0], LabelSegment::Text { text } if text.contains("25 in 2015")));
    assert_eq!(
        segments[1],
        LabelSegment::Text {
            text: "Visited ".to_string()
        }
    );
    assert_eq!(
        segments[2],
        LabelSegment::Link {
            text: "Paris".to_string(),
            href: "https://paris.example".to_string()
        }
    );
    assert_eq!(
        segments[3],
        LabelSegment::Text {
            text: " again".to_string()
        }
    );
    assert_eq!(
        segments[4],
        LabelSegment::Text {
            text: " + B".to_string()
        }
    );
}

#[test]
fn tooltip_lists_dates_names_and_descriptions() {
    let timeline = birthday_week_timeline(vec![row(
        "2015-06-22",
        "Joined <Acme>",
        Some("https://acme.example"),
        Some("first job"),
    )]);
    let week = timeline.week_containing(date(2015, 6, 22)).unwrap();

    let blocks = tooltip_blocks(week);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].date_label, "June 20, 2015");
    assert!(blocks[0].entries[0].is_birthday);
    assert_eq!(blocks[1].date_label, "June 22, 2015");
    assert_eq!(blocks[1].entries[0].title, "Joined Acme");

    let text = render_tooltip(week);
    assert!(text.contains("June 22, 2015\n  Joined Acme\n    first job"));
}

#[test]
fn empty_week_tooltip_shows_start_date_only() {
    let timeline = birthday_week_timeline(Vec::new());
    let week = timeline.week_containing(date(2015, 7, 1)).unwrap();
    assert!(week.events.is_empty());

    let blocks = tooltip_blocks(week);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].date_label, "June 27, 2015");
    assert!(blocks[0].entries.is_empty());
}

#[test]
fn grid_has_decade_headings_and_one_row_per_age() {
    let config = TimelineConfig::new(date(2000, 1, 1), 2010, date(2005, 1, 1)).unwrap();
    let events = EventIndex::build(vec![row("2003-02-01", "event", None, None)]);
    let timeline = build_timeline(&config, &events, &PhaseResolver::default()).unwrap();

    let grid = render_grid(&timeline);
    let lines: Vec<_> = grid.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "My first ten years");
    assert_eq!(lines[11], "My teens");
    assert!(lines[1].starts_with("  0 *"));
    assert_eq!(lines[1].chars().count(), 4 + 52);
    assert!(lines[4].contains('●'));
    assert!(lines[12].ends_with('░'));

    let week = timeline.week_containing(date(2003, 2, 1)).unwrap();
    assert_eq!(week_glyph(week), '●');
}
