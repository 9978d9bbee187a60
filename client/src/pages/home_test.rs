use super::*;

#[test]
fn format_position_rounds_coordinates() {
    let point = MonitorPoint {
        point_code: "IP01".to_owned(),
        point_name: "Inverted plumb 1".to_owned(),
        longitude: 111.283_456_7,
        latitude: 30.823_111_9,
        height: 75.44,
        device_type: "inverted_plumb".to_owned(),
    };
    assert_eq!(format_position(&point), "30.82311, 111.28346 @ 75.4 m");
}
