use chrono::NaiveDate;
use serde_json::json;
use tracker_core::{
    ColumnDefinition, ColumnKind, Field, FieldRequest, FieldValue, Installation, TrackedFields,
    WeeklyReview, DEFAULT_REVIEW_TEXT,
};

#[test]
fn field_serialization_uses_native_representations() {
    let number = Field::with_value(ColumnKind::Number, 42.5).unwrap();
    assert_eq!(
        serde_json::to_value(&number).unwrap(),
        json!({"type": "NUMBER", "value": 42.5})
    );

    let date = Field::with_value(
        ColumnKind::Date,
        NaiveDate::from_ymd_opt(2024, 12, 14).unwrap(),
    )
    .unwrap();
    assert_eq!(
        serde_json::to_value(&date).unwrap(),
        json!({"type": "DATE", "value": "2024-12-14"})
    );

    let empty = Field::empty(ColumnKind::Currency);
    assert_eq!(
        serde_json::to_value(&empty).unwrap(),
        json!({"type": "CURRENCY", "value": null})
    );
}

#[test]
fn field_round_trips_through_json() {
    let fields = vec![
        Field::with_value(ColumnKind::Text, "Hello").unwrap(),
        Field::with_value(ColumnKind::Percentage, 12.0).unwrap(),
        Field::with_value(
            ColumnKind::Date,
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
        )
        .unwrap(),
        Field::empty(ColumnKind::Uncategorized),
    ];

    for field in fields {
        let json = serde_json::to_string(&field).unwrap();
        let decoded: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, field);
    }
}

#[test]
fn field_deserialize_validates_payload() {
    let err = serde_json::from_value::<Field>(json!({"type": "PERCENTAGE", "value": 150}))
        .unwrap_err();
    assert!(
        err.to_string().contains("does not match the expected kind"),
        "unexpected error: {err}"
    );

    let err = serde_json::from_value::<Field>(json!({"value": "orphan"})).unwrap_err();
    assert!(
        err.to_string().contains("invalid argument"),
        "unexpected error: {err}"
    );

    let integer = serde_json::from_value::<Field>(json!({"type": "NUMBER", "value": 42})).unwrap();
    assert_eq!(integer.value(), Some(&FieldValue::Number(42.0)));
}

#[test]
fn column_definition_requires_title() {
    let err =
        serde_json::from_value::<ColumnDefinition>(json!({"title": null, "type": "TEXT"}))
            .unwrap_err();
    assert!(err.to_string().contains("column title cannot be null"));

    let column: ColumnDefinition =
        serde_json::from_value(json!({"title": "Date", "type": "DATE"})).unwrap();
    assert_eq!(column, ColumnDefinition::new("Date", ColumnKind::Date));
}

#[test]
fn tracked_fields_serialize_as_entry_list() {
    let mut tracked = TrackedFields::new();
    tracked
        .add_value(
            ColumnDefinition::new("Mood", ColumnKind::Text),
            Field::with_value(ColumnKind::Text, "calm").unwrap(),
        )
        .unwrap();

    assert_eq!(
        serde_json::to_value(&tracked).unwrap(),
        json!([{
            "column": {"title": "Mood", "type": "TEXT"},
            "values": [{"type": "TEXT", "value": "calm"}]
        }])
    );
}

#[test]
fn tracked_fields_deserialize_rejects_mismatched_entries() {
    let err = serde_json::from_value::<TrackedFields>(json!([{
        "column": {"title": "Weight", "type": "NUMBER"},
        "values": [{"type": "TEXT", "value": "heavy"}]
    }]))
    .unwrap_err();
    assert!(err.to_string().contains("does not match"), "unexpected error: {err}");
}

#[test]
fn installation_round_trips_and_recomputes_day_count() {
    let mut installation = Installation::new(
        "Improve Typing Speed",
        NaiveDate::from_ymd_opt(2024, 12, 1),
        NaiveDate::from_ymd_opt(2024, 12, 31),
    );
    installation.add_plan_item("Practice daily");
    installation.add_outcome("Faster");
    installation.add_weekly_review(WeeklyReview::new("Week 1"));
    installation
        .add_field_for_tracking(
            ColumnDefinition::new("WPM", ColumnKind::Number),
            Field::with_value(ColumnKind::Number, 55.0).unwrap(),
        )
        .unwrap();

    let value = serde_json::to_value(&installation).unwrap();
    assert_eq!(value["repairStartDate"], "2024-12-01");
    assert_eq!(value["daysBetweenStartAndEnd"], 30);
    assert_eq!(value["plan"], json!(["Practice daily"]));

    let decoded: Installation = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, installation);
}

#[test]
fn installation_input_ignores_supplied_day_count_and_defaults_lists() {
    let decoded: Installation = serde_json::from_value(json!({
        "repair": "Drink water",
        "repairStartDate": "2024-01-01",
        "repairEndDate": "2024-01-11",
        "daysBetweenStartAndEnd": 999
    }))
    .unwrap();

    assert_eq!(decoded.days_between_start_and_end(), 10);
    assert!(decoded.plan().is_empty());
    assert!(decoded.weekly_reviews().is_empty());
    assert!(decoded.fields_for_tracking().is_empty());
}

#[test]
fn weekly_review_defaults_missing_text() {
    let review: WeeklyReview =
        serde_json::from_value(json!({"createdAt": "2024-12-14T10:00:00Z"})).unwrap();
    assert_eq!(review.review(), DEFAULT_REVIEW_TEXT);
    assert_eq!(review.updated_at(), review.created_at());
}

#[test]
fn field_request_reads_camel_case() {
    let request: FieldRequest = serde_json::from_value(json!({
        "title": "Completion",
        "columnType": "PERCENTAGE",
        "value": "40"
    }))
    .unwrap();
    let (column, field) = request.into_parts().unwrap();
    assert_eq!(column.kind(), ColumnKind::Percentage);
    assert_eq!(field.value(), Some(&FieldValue::Number(40.0)));
}

#[test]
fn uncategorized_date_round_trips_as_date() {
    let date = NaiveDate::from_ymd_opt(2024, 12, 14).unwrap();
    let field = Field::with_value(ColumnKind::Uncategorized, date).unwrap();

    let value = serde_json::to_value(&field).unwrap();
    assert_eq!(
        value,
        json!({"type": "UNCATEGORIZED", "value": {"date": "2024-12-14"}})
    );
    let decoded: Field = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, field);

    let text = Field::with_value(ColumnKind::Uncategorized, "2024-12-14").unwrap();
    let decoded: Field = serde_json::from_str(&serde_json::to_string(&text).unwrap()).unwrap();
    assert_eq!(decoded.value(), Some(&FieldValue::Text("2024-12-14".into())));
}

#[test]
fn installation_with_uncategorized_date_in_date_column_round_trips() {
    let date = NaiveDate::from_ymd_opt(2024, 12, 14).unwrap();
    let mut installation = Installation::new("Stretch", None, None);
    installation
        .add_field_for_tracking(
            ColumnDefinition::new("When", ColumnKind::Date),
            Field::with_value(ColumnKind::Uncategorized, date).unwrap(),
        )
        .unwrap();

    let json = serde_json::to_string(&installation).unwrap();
    let decoded: Installation = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, installation);
}
