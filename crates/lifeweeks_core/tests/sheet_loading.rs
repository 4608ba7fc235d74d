use lifeweeks_core::{
    AcquisitionError, CalendarDate, DirectorySheetSource, ServiceError, SheetSource, SheetTable,
    StaticSheetSource, TimelineConfig, TimelineService,
};
use std::fs;

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).unwrap()
}

const EVENTS_PAYLOAD: &str = r#"/*O_o*/
google.visualization.Query.setResponse({"version":"0.6","reqId":"0","status":"ok","table":{
 "cols":[{"id":"A","label":"date","type":"date"},{"id":"B","label":"name","type":"string"},{"id":"C","label":"desc","type":"string"}],
 "rows":[
  {"c":[{"v":"Date(2015,5,22)","f":"6/22/2015"},{"v":"Road trip"},{"v":"Coast to coast"}]},
  {"c":[{"v":"Date(2015,5,22)"},{"v":"Second"},null]},
  {"c":[null,{"v":"no date"},null]},
  {"c":[{"v":"2016-1-9"},null,null]}
 ]}});"#;

const PHASES_PAYLOAD: &str = r#"{"table":{
 "cols":[{"label":"key"},{"label":"start"},{"label":"end"},{"label":"color"},{"label":"eventColor"}],
 "rows":[
  {"c":[{"v":"school"},{"v":"Date(1996,8,1)"},{"v":"2008-06-30"},{"v":"88aaee"},null]},
  {"c":[{"v":"work"},{"v":"2012-09-03"},null,{"v":"ee8844"},{"v":"cc0000"}]}
 ]}}"#;

fn write_fixture_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Life.json"), EVENTS_PAYLOAD).unwrap();
    fs::write(dir.path().join("LifePhases.json"), PHASES_PAYLOAD).unwrap();
    dir
}

#[test]
fn directory_source_loads_snapshot_and_builds() {
    let dir = write_fixture_dir();
    let service = TimelineService::new(DirectorySheetSource::new(dir.path()));
    let config = TimelineConfig::new(date(1990, 6, 20), 2030, date(2020, 1, 1)).unwrap();

    let snapshot = service.load(&config).unwrap();
    assert_eq!(snapshot.events.len(), 2);
    assert_eq!(snapshot.events.skipped_rows(), 2);
    assert_eq!(snapshot.phases.phases().len(), 2);
    assert_eq!(snapshot.phases.phases()[0].color, "#88aaee");

    let timeline = service.build(&config).unwrap();
    let week = timeline.week_containing(date(2015, 6, 22)).unwrap();
    let names: Vec<_> = week.events.iter().map(|e| e.event.name.as_str()).collect();
    assert_eq!(names[1..], ["Road trip", "Second"]);
    assert_eq!(
        week.events[1].event.description.as_deref(),
        Some("Coast to coast")
    );
    assert_eq!(week.phase_key.as_deref(), Some("work"));

    let school = timeline.week_containing(date(2000, 3, 1)).unwrap();
    assert_eq!(school.phase_key.as_deref(), Some("school"));
    assert_eq!(school.phase_color.as_deref(), Some("#88aaee"));
}

#[test]
fn reload_reflects_replaced_sheet() {
    let dir = write_fixture_dir();
    let service = TimelineService::new(DirectorySheetSource::new(dir.path()));
    let config = TimelineConfig::new(date(1990, 6, 20), 2030, date(2020, 1, 1)).unwrap();

    let first = service.load(&config).unwrap();
    fs::write(
        dir.path().join("Life.json"),
        r#"{"cols":[{"label":"name"},{"label":"date"}],"rows":[]}"#,
    )
    .unwrap();
    let second = service.load(&config).unwrap();

    assert_eq!(first.events.len(), 2);
    assert!(second.events.is_empty());
}

#[test]
fn missing_phase_sheet_fails_the_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Life.json"), EVENTS_PAYLOAD).unwrap();
    let service = TimelineService::new(DirectorySheetSource::new(dir.path()));
    let config = TimelineConfig::new(date(1990, 6, 20), 2030, date(2020, 1, 1)).unwrap();

    let err = service.build(&config).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Acquisition(AcquisitionError::SheetNotFound(ref name)) if name == "LifePhases"
    ));
}

#[test]
fn malformed_payload_is_a_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Life.json"), "<html>quota exceeded</html>").unwrap();
    let source = DirectorySheetSource::new(dir.path());

    let err = source.fetch_table("Life").unwrap_err();
    assert!(matches!(err, AcquisitionError::Parse { ref sheet, .. } if sheet == "Life"));
}

#[test]
fn directory_source_rejects_path_like_sheet_names() {
    let source = DirectorySheetSource::new("/nonexistent");
    for name in ["../etc/passwd", "a/b", ".hidden", ""] {
        assert!(matches!(
            source.fetch_table(name),
            Err(AcquisitionError::InvalidSheetName(_))
        ));
    }
}

#[test]
fn static_source_uses_custom_sheet_name() {
    let events = SheetTable::from_text_rows(
        &["date", "name"],
        &[vec![Some("2001-01-03"), Some("first steps")]],
    );
    let phases = SheetTable::from_text_rows(&["key", "start", "color"], &[]);
    let source = StaticSheetSource::new()
        .with_table("Sam", events)
        .with_table("SamPhases", phases);
    let service = TimelineService::new(&source);
    let config = TimelineConfig::new(date(2000, 12, 30), 2001, date(2024, 1, 1))
        .unwrap()
        .with_sheet_name("Sam");

    let timeline = service.build(&config).unwrap();
    let week = timeline.week_containing(date(2001, 1, 3)).unwrap();
    assert_eq!(week.index_in_year, 0);
    assert_eq!(week.age, 0);
    assert_eq!(week.sourced_events().count(), 1);
}
