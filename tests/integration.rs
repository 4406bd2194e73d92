use decitime::{
    format_label, format_signed_delta, labels, parse_longitude_degrees,
    parse_unix_value_to_unix_ms, shortest_signed_delta,
    solar_noon_utc_seconds_of_day, unix_ms_to_utc_seconds_of_day, DecimalLabel, LabelStyle, Parts,
    TenDayWeekDate, UnixUnit, Visibility,
};

#[test]
fn unix_timestamp_renders_end_to_end() {
    // 2024-01-01T08:00:00Z.
    let unix_ms = 1_704_096_000_000.0;
    let seconds = unix_ms_to_utc_seconds_of_day(unix_ms).unwrap();
    assert_eq!(seconds, 28_800.0);

    let parts = Parts::from_utc_seconds_of_day(seconds).unwrap();
    let reading = parts.labels();

    // 28 800 s is the top of decimal hour 32, so both readings apply.
    assert_eq!(
        format_label(&reading.primary, LabelStyle::Colon, Visibility::ALL),
        "32:0:00"
    );
    assert_eq!(
        format_label(&reading.alternate.unwrap(), LabelStyle::Brackets, Visibility::ALL),
        "31(9)00"
    );

    let week = TenDayWeekDate::from_unix_ms(unix_ms).unwrap();
    assert_eq!(week.to_string(), "2024(00.0)");
}

#[test]
fn wall_clock_input_feeds_the_same_pipeline() {
    let unix_ms =
        decitime::wall_time_with_utc_offset_to_unix_ms("2024-06-15", "10:00", 120).unwrap();
    let seconds = unix_ms_to_utc_seconds_of_day(unix_ms as f64).unwrap();
    assert_eq!(seconds, 28_800.0);

    let reading = labels(seconds).unwrap();
    assert_eq!(reading.primary.hour, 32);
}

#[test]
fn longitude_field_to_solar_noon_countdown() {
    let longitude = parse_longitude_degrees(" -15 ").unwrap().unwrap();
    let noon = solar_noon_utc_seconds_of_day(longitude).unwrap();
    assert_eq!(noon.value(), 46_800.0);

    // Solar noon lands on the top of decimal hour 52.
    let parts = Parts::from_utc_seconds_of_day(noon.value()).unwrap();
    assert_eq!(parts.hour_index(), 52);
    assert_eq!(parts.minute_index(), 0);

    // One standard hour to go from Greenwich noon.
    let delta = shortest_signed_delta(noon.value(), 43_200.0).unwrap();
    assert_eq!(format_signed_delta(delta.value()).unwrap(), "+01:00:00");
}

#[test]
fn greenwich_solar_noon_is_decimal_hour_48() {
    let noon = solar_noon_utc_seconds_of_day(0.0).unwrap();
    assert_eq!(noon.value(), 43_200.0);

    let parts = Parts::from_utc_seconds_of_day(noon.value()).unwrap();
    assert_eq!(parts.hour_index(), 48);
    assert_eq!(parts.minute_index(), 0);
}

#[test]
fn raw_unix_string_input_is_accepted_in_both_units() {
    let from_seconds = parse_unix_value_to_unix_ms("1704096000", UnixUnit::Seconds).unwrap();
    let from_millis =
        parse_unix_value_to_unix_ms("1704096000000", UnixUnit::Milliseconds).unwrap();
    assert_eq!(from_seconds, from_millis);

    let seconds = unix_ms_to_utc_seconds_of_day(from_seconds as f64).unwrap();
    assert_eq!(labels(seconds).unwrap().primary.hour, 32);
}

#[test]
fn labels_helper_matches_the_generic_path() {
    for s in [0.0, 99.0, 100.0, 43_250.5, 86_399.0] {
        let via_helper = labels(s).unwrap();
        let via_parts = Parts::from_utc_seconds_of_day(s).unwrap().labels();
        assert_eq!(via_helper, via_parts);
    }
}

#[test]
fn formatting_is_total_over_every_visibility_combination() {
    let label = DecimalLabel {
        hour: 7,
        minute: 3,
        second: 42,
    };
    for show_hour in [false, true] {
        for show_minute in [false, true] {
            for show_seconds in [false, true] {
                let visibility = Visibility {
                    show_hour,
                    show_minute,
                    show_seconds,
                };
                for style in [LabelStyle::Colon, LabelStyle::Brackets] {
                    let rendered = format_label(&label, style, visibility);
                    if style == LabelStyle::Colon {
                        assert!(!rendered.is_empty());
                    }
                }
            }
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_parts_roundtrip_through_the_seconds_scalar() {
    let parts = Parts::from_utc_seconds_of_day(12_345.5).unwrap();
    let json = serde_json::to_string(&parts).unwrap();
    assert_eq!(json, "12345.5");

    let back: Parts = serde_json::from_str(&json).unwrap();
    assert_eq!(back, parts);
}

#[cfg(feature = "serde")]
#[test]
fn serde_labels_use_plain_field_names() {
    let reading = labels(0.0).unwrap();
    let json = serde_json::to_string(&reading).unwrap();
    assert!(json.contains("\"primary\""));
    assert!(json.contains("\"alternate\""));
    assert!(json.contains("\"hour\":95"));
}
