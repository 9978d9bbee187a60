use super::*;
use crate::client::parse_json;

#[test]
fn point_paths_percent_encode_codes() {
    assert_eq!(point_path("IP01"), "/points/IP01");
    assert_eq!(point_path("IP 01/a"), "/points/IP%2001%2Fa");
    assert_eq!(measurements_path("倒垂1"), "/measurements/%E5%80%92%E5%9E%821");
    assert_eq!(measurement_stats_path("WL-3"), "/measurements/WL-3/stats");
}

#[test]
fn point_detail_flattens_point_fields() {
    let json = r#"{
        "point_code": "IP01",
        "point_name": "Inverted plumb 1",
        "longitude": 111.0,
        "latitude": 30.8,
        "height": 75.5,
        "device_type": "inverted_plumb",
        "latest_value": 1.25,
        "latest_time": "2024-06-01T12:00:00",
        "data_count": 48
    }"#;
    let detail: PointDetail = parse_json(json).unwrap();
    assert_eq!(detail.point.point_code, "IP01");
    assert_eq!(detail.latest_value, Some(1.25));
    assert_eq!(detail.data_count, 48);
}

#[test]
fn point_detail_without_readings() {
    let json = r#"{
        "point_code": "WL1",
        "point_name": "Water level",
        "longitude": 0.0,
        "latitude": 0.0,
        "height": 0.0,
        "device_type": "water_level",
        "latest_value": null,
        "latest_time": null
    }"#;
    let detail: PointDetail = parse_json(json).unwrap();
    assert_eq!(detail.latest_value, None);
    assert_eq!(detail.data_count, 0);
}

#[test]
fn measurement_optional_fields_default() {
    let json = r#"[{"id": 1, "point_code": "IP01", "value": 0.5, "time": "2024-06-01T00:00:00"}]"#;
    let rows: Vec<Measurement> = parse_json(json).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].measurement_type, None);
}

#[test]
fn malformed_body_is_a_parse_error() {
    let err = parse_json::<Vec<MonitorPoint>>("{\"detail\": \"oops\"}").unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}
