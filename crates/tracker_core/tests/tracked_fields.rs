use tracker_core::{ColumnDefinition, ColumnKind, Field, FieldValue, TrackedFields};

#[test]
fn add_value_creates_column_with_single_field() {
    let column = ColumnDefinition::new("Test Column", ColumnKind::Text);
    let field = Field::with_value(ColumnKind::Text, "Sample Value").unwrap();
    let mut tracked = TrackedFields::new();

    tracked.add_value(column.clone(), field.clone()).unwrap();

    assert!(tracked.contains_column(&column));
    assert_eq!(tracked.values(&column), Some(&[field][..]));
    assert_eq!(tracked.len(), 1);
}

#[test]
fn add_value_preserves_insertion_order() {
    let column = ColumnDefinition::new("Minutes practiced", ColumnKind::Number);
    let mut tracked = TrackedFields::new();
    for minutes in [15.0, 20.0, 10.0] {
        tracked
            .add_value(
                column.clone(),
                Field::with_value(ColumnKind::Number, minutes).unwrap(),
            )
            .unwrap();
    }

    let recorded = tracked
        .values(&column)
        .unwrap()
        .iter()
        .filter_map(|field| field.value().and_then(FieldValue::as_number))
        .collect::<Vec<_>>();
    assert_eq!(recorded, vec![15.0, 20.0, 10.0]);
}

#[test]
fn mismatched_value_leaves_set_unchanged() {
    let column = ColumnDefinition::new("Words per minute", ColumnKind::Number);
    let mut tracked = TrackedFields::new();
    tracked
        .add_value(
            column.clone(),
            Field::with_value(ColumnKind::Number, 48.0).unwrap(),
        )
        .unwrap();
    let before = tracked.clone();

    let err = tracked
        .add_value(
            column.clone(),
            Field::with_value(ColumnKind::Text, "fast").unwrap(),
        )
        .unwrap_err();

    assert!(err.is_type_mismatch());
    assert_eq!(tracked, before);
    assert_eq!(tracked.values(&column).map(<[Field]>::len), Some(1));
}

#[test]
fn mismatch_on_new_column_does_not_register_it() {
    let column = ColumnDefinition::new("Started", ColumnKind::Date);
    let mut tracked = TrackedFields::new();

    assert!(tracked
        .add_value(
            column.clone(),
            Field::with_value(ColumnKind::Number, 1.0).unwrap()
        )
        .is_err());
    assert!(!tracked.contains_column(&column));
}

#[test]
fn payload_is_checked_against_column_kind() {
    let mut tracked = TrackedFields::new();

    let currency = ColumnDefinition::new("Spent", ColumnKind::Currency);
    tracked
        .add_value(
            currency.clone(),
            Field::with_value(ColumnKind::Number, 250.0).unwrap(),
        )
        .unwrap();

    let percentage = ColumnDefinition::new("Completion", ColumnKind::Percentage);
    let too_large = Field::with_value(ColumnKind::Number, 150.0).unwrap();
    assert!(tracked.add_value(percentage.clone(), too_large).is_err());

    let empty_text = Field::empty(ColumnKind::Text);
    tracked.add_value(percentage.clone(), empty_text).unwrap();
    assert_eq!(tracked.values(&percentage).map(<[Field]>::len), Some(1));
}

#[test]
fn same_title_with_different_kind_is_a_different_column() {
    let text = ColumnDefinition::new("Mood", ColumnKind::Text);
    let number = ColumnDefinition::new("Mood", ColumnKind::Number);
    let mut tracked = TrackedFields::new();

    tracked
        .add_value(text.clone(), Field::with_value(ColumnKind::Text, "calm").unwrap())
        .unwrap();
    tracked
        .add_value(number.clone(), Field::with_value(ColumnKind::Number, 7.0).unwrap())
        .unwrap();

    assert_eq!(tracked.len(), 2);
    assert_eq!(tracked.columns().count(), 2);
}
