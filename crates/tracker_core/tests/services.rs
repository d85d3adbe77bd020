use chrono::NaiveDate;
use tracker_core::{
    ColumnDefinition, ColumnKind, Field, FieldRequest, FieldService, FieldValue, InMemoryRepository,
    Installation, InstallationService, Repository, ReviewService, ServiceError, WeeklyReview,
};

fn installation_service() -> InstallationService<InMemoryRepository<Installation>> {
    InstallationService::new(InMemoryRepository::new("installation"))
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

#[test]
fn installation_crud_by_index() {
    let mut service = installation_service();
    let first = service.create(Installation::new("Sleep", None, None));
    let second = service.create(Installation::new("Read", None, None));
    assert_eq!((first, second), (0, 1));
    assert_eq!(service.list().len(), 2);

    let previous = service
        .replace(1, Installation::new("Read more", None, None))
        .unwrap();
    assert_eq!(previous.repair(), "Read");
    assert_eq!(service.get(1).unwrap().repair(), "Read more");

    let removed = service.delete(0).unwrap();
    assert_eq!(removed.repair(), "Sleep");
    assert_eq!(service.get(0).unwrap().repair(), "Read more");
    assert!(matches!(
        service.get(1).unwrap_err(),
        ServiceError::NotFound { index: 1, .. }
    ));
}

#[test]
fn installation_sub_resources() {
    let mut service = installation_service();
    let index = service.create(Installation::new(
        "Improve Typing Speed",
        date(2024, 12, 1),
        date(2024, 12, 31),
    ));

    service.add_plan_item(index, "Practice daily").unwrap();
    service.add_outcome(index, "60 wpm").unwrap();
    service
        .add_weekly_review(index, WeeklyReview::new("Week 1"))
        .unwrap();
    let installation = service
        .add_field_for_tracking(
            index,
            ColumnDefinition::new("WPM", ColumnKind::Number),
            Field::with_value(ColumnKind::Number, 52.0).unwrap(),
        )
        .unwrap();

    assert_eq!(installation.plan(), &["Practice daily".to_string()]);
    assert_eq!(installation.outcome(), &["60 wpm".to_string()]);
    assert_eq!(installation.weekly_reviews().len(), 1);
    assert_eq!(installation.fields_for_tracking().len(), 1);
}

#[test]
fn update_dates_through_service() {
    let mut service = installation_service();
    let index = service.create(Installation::new("Walk", date(2024, 1, 1), date(2024, 1, 31)));

    let installation = service
        .update_dates(index, date(2024, 1, 1), date(2024, 3, 1))
        .unwrap();
    assert_eq!(installation.days_between_start_and_end(), 60);
}

#[test]
fn add_field_from_request_coerces_raw_text() {
    let mut service = installation_service();
    let index = service.create(Installation::new("Budget", None, None));

    let installation = service
        .add_field_from_request(
            index,
            FieldRequest::new("Spent", ColumnKind::Currency, Some("19.90".into())),
        )
        .unwrap();

    let column = ColumnDefinition::new("Spent", ColumnKind::Currency);
    let values = installation.fields_for_tracking().values(&column).unwrap();
    assert_eq!(values[0].value(), Some(&FieldValue::Number(19.9)));
}

#[test]
fn add_field_from_request_reports_bad_input() {
    let mut service = installation_service();
    let index = service.create(Installation::new("Budget", None, None));

    let err = service
        .add_field_from_request(
            index,
            FieldRequest::new("Spent", ColumnKind::Currency, Some("a lot".into())),
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::Field(_)));
    assert!(service.get(index).unwrap().fields_for_tracking().is_empty());

    let err = service
        .add_field_from_request(9, FieldRequest::default())
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { index: 9, .. }));
}

#[test]
fn field_service_retype_and_update() {
    let mut service = FieldService::new(InMemoryRepository::new("field"));
    let index = service.create(Field::with_value(ColumnKind::Text, "Invalid").unwrap());

    assert!(service.set_kind(index, ColumnKind::Number).is_err());
    let stored = service.get(index).unwrap();
    assert_eq!(stored.kind(), ColumnKind::Text);
    assert_eq!(stored.value(), Some(&FieldValue::Text("Invalid".into())));

    service
        .set_value(index, Some(FieldValue::Text("15".into())))
        .unwrap();
    let stored = service.set_kind(index, ColumnKind::Percentage).unwrap();
    assert_eq!(stored.value(), Some(&FieldValue::Number(15.0)));
}

#[test]
fn review_service_crud() {
    let mut repo = InMemoryRepository::new("weekly review");
    repo.create(WeeklyReview::default());
    let mut service = ReviewService::new(repo);

    let index = service.create(WeeklyReview::new("Second"));
    assert_eq!(index, 1);
    assert_eq!(service.list().len(), 2);

    service.revise(index, "Second, revised").unwrap();
    assert_eq!(service.get(index).unwrap().review(), "Second, revised");

    service.delete(0).unwrap();
    assert_eq!(service.list()[0].review(), "Second, revised");
    assert!(service.delete(1).is_err());
}
