use super::*;

// =============================================================
// urgency
// =============================================================

#[test]
fn under_three_hours_is_critical() {
    assert_eq!(urgency("2h 34m"), Urgency::Critical);
    assert_eq!(urgency("0h 59m"), Urgency::Critical);
}

#[test]
fn under_twelve_hours_is_warning() {
    assert_eq!(urgency("6h 18m"), Urgency::Warning);
    assert_eq!(urgency("3h 0m"), Urgency::Warning);
    assert_eq!(urgency("11h 59m"), Urgency::Warning);
}

#[test]
fn twelve_hours_and_up_is_calm() {
    assert_eq!(urgency("12h 0m"), Urgency::Calm);
    assert_eq!(urgency("23h 45m"), Urgency::Calm);
}

#[test]
fn day_scale_labels_are_calm() {
    assert_eq!(urgency("1d 12h"), Urgency::Calm);
    assert_eq!(urgency("3d 2h"), Urgency::Calm);
}

#[test]
fn unreadable_labels_fall_back_to_calm() {
    assert_eq!(urgency(""), Urgency::Calm);
    assert_eq!(urgency("soon"), Urgency::Calm);
    assert_eq!(urgency("h 30m"), Urgency::Calm);
}

// =============================================================
// Badge classes
// =============================================================

#[test]
fn urgency_classes_are_distinct() {
    let classes = [
        Urgency::Critical.class(),
        Urgency::Warning.class(),
        Urgency::Calm.class(),
    ];
    assert_eq!(classes, ["timer--critical", "timer--warning", "timer--calm"]);
}
