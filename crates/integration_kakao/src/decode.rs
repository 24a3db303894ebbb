//! Strict response decoding
//!
//! A 200 body is first parsed into a generic [`Value`] tree and then decoded
//! into the typed models. Either step failing yields an internal error; no
//! partially decoded response is ever returned.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{DirectionsError, InternalError};
use crate::models::{DirectionResponse, MultiDirectionResponse};

/// Parse a response body into a generic JSON tree
///
/// # Errors
///
/// Returns [`InternalError::MalformedJson`] if the body is not valid JSON.
pub fn parse_tree(body: &[u8]) -> Result<Value, DirectionsError> {
    serde_json::from_slice(body).map_err(|e| InternalError::MalformedJson(e).into())
}

/// Decode a single-origin or multi-waypoint response tree
///
/// # Errors
///
/// Returns [`InternalError::Schema`] if a required key is missing or any
/// value has an incompatible type.
pub fn decode_directions(tree: Value) -> Result<DirectionResponse, DirectionsError> {
    decode_envelope(tree)
}

/// Decode a multi-origin response tree
///
/// # Errors
///
/// Returns [`InternalError::Schema`] if a required key is missing or any
/// value has an incompatible type.
pub fn decode_multi_directions(tree: Value) -> Result<MultiDirectionResponse, DirectionsError> {
    decode_envelope(tree)
}

/// Parse and decode a response body in one step
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, DirectionsError> {
    decode_envelope(parse_tree(body)?)
}

fn decode_envelope<T: DeserializeOwned>(tree: Value) -> Result<T, DirectionsError> {
    // serde would otherwise accept a positional array for a struct
    if !tree.is_object() {
        return Err(InternalError::Schema(serde::de::Error::custom(format!(
            "expected a JSON object envelope, found {}",
            kind(&tree)
        )))
        .into());
    }
    serde_json::from_value(tree).map_err(|e| InternalError::Schema(e).into())
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn detailed_fixture() -> Value {
        json!({
            "trans_id": "abc",
            "routes": [{
                "result_code": 0,
                "result_msg": "길찾기 성공",
                "summary": {
                    "origin": { "name": "", "x": 127.11, "y": 37.39 },
                    "destination": { "name": "", "x": 127.10, "y": 37.40 },
                    "waypoints": [
                        { "name": "name0", "x": 127.12, "y": 37.39 },
                        { "name": "name1", "x": 127.13, "y": 37.38 }
                    ],
                    "priority": "RECOMMEND",
                    "bound": { "min_x": 127.10, "min_y": 37.38, "max_x": 127.13, "max_y": 37.40 },
                    "fare": { "taxi": 4800, "toll": 0 },
                    "distance": 1630,
                    "duration": 420
                },
                "sections": [{
                    "distance": 1630,
                    "duration": 420,
                    "bound": { "min_x": 127.10, "min_y": 37.38, "max_x": 127.13, "max_y": 37.40 },
                    "roads": [
                        {
                            "name": "판교역로",
                            "distance": 800,
                            "duration": 200,
                            "traffic_speed": 22.0,
                            "traffic_state": 2,
                            "vertexes": [127.11, 37.39, 127.12, 37.39]
                        },
                        {
                            "name": "",
                            "distance": 830,
                            "duration": 220,
                            "traffic_speed": 30,
                            "traffic_state": 0,
                            "vertexes": [127.12, 37.39, 127.10, 37.40]
                        }
                    ],
                    "guides": [
                        { "name": "출발지", "x": 127.11, "y": 37.39, "distance": 0, "duration": 0,
                          "type": 100, "guidance": "출발지", "road_index": 0 },
                        { "name": "", "x": 127.12, "y": 37.39, "distance": 800, "duration": 200,
                          "type": 2, "guidance": "우회전", "road_index": 1 },
                        { "name": "목적지", "x": 127.10, "y": 37.40, "distance": 830, "duration": 220,
                          "type": 101, "guidance": "목적지", "road_index": 1 }
                    ]
                }]
            }]
        })
    }

    fn summary_fixture() -> Value {
        json!({
            "trans_id": "sum",
            "routes": [{
                "result_code": 0,
                "result_msg": "ok",
                "summary": {
                    "origin": { "name": "A", "x": 127.11, "y": 37.39 },
                    "destination": { "name": "B", "x": 127.10, "y": 37.40 },
                    "waypoints": [],
                    "priority": "TIME",
                    "fare": { "taxi": 3800, "toll": 0 },
                    "distance": 900,
                    "duration": 180
                },
                "sections": [{ "distance": 900, "duration": 180 }]
            }]
        })
    }

    #[test]
    fn test_decode_detailed_response() {
        let response = decode_directions(detailed_fixture()).unwrap();
        assert_eq!(response.trans_id, "abc");
        assert_eq!(response.routes.len(), 1);

        let route = response.primary_route().unwrap();
        assert!(route.is_success());
        assert_eq!(route.summary.waypoints.len(), 2);
        assert_eq!(route.summary.waypoints[1].name, "name1");
        assert_eq!(route.summary.fare.taxi, 4800);
        assert!(route.summary.bound.is_some());

        let section = &route.sections[0];
        assert_eq!(section.roads.as_ref().unwrap().len(), 2);
        assert_eq!(section.guides.as_ref().unwrap().len(), 3);
        assert_eq!(section.guides()[2].guide_type, 101);
        assert!((section.roads()[1].traffic_speed - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decode_summary_mode_leaves_optionals_absent() {
        let response = decode_directions(summary_fixture()).unwrap();
        let route = &response.routes[0];
        assert!(route.summary.bound.is_none());

        let section = &route.sections[0];
        assert!(section.bound.is_none());
        assert!(section.roads.is_none());
        assert!(section.guides.is_none());
    }

    #[test]
    fn test_roads_and_guides_decode_independently() {
        let mut tree = summary_fixture();
        tree["routes"][0]["sections"][0]["roads"] = json!([]);
        let response = decode_directions(tree).unwrap();
        let section = &response.routes[0].sections[0];
        assert_eq!(section.roads.as_ref().map(Vec::len), Some(0));
        assert!(section.guides.is_none());
    }

    #[test]
    fn test_section_count_is_not_enforced() {
        let mut tree = summary_fixture();
        tree["routes"][0]["sections"] = json!([
            { "distance": 1, "duration": 1 },
            { "distance": 2, "duration": 2 },
            { "distance": 3, "duration": 3 }
        ]);
        let response = decode_directions(tree).unwrap();
        assert_eq!(response.routes[0].sections.len(), 3);
    }

    #[test]
    fn test_missing_trans_id_fails() {
        let mut tree = summary_fixture();
        tree.as_object_mut().unwrap().remove("trans_id");
        let err = decode_directions(tree).unwrap_err();
        assert!(matches!(err, DirectionsError::Internal(InternalError::Schema(_))));
    }

    #[test]
    fn test_string_for_number_fails() {
        let mut tree = summary_fixture();
        tree["routes"][0]["summary"]["distance"] = json!("900");
        assert!(decode_directions(tree).is_err());
    }

    #[test]
    fn test_fractional_integer_fails() {
        let mut tree = summary_fixture();
        tree["routes"][0]["result_code"] = json!(0.5);
        assert!(decode_directions(tree).is_err());
    }

    #[test]
    fn test_wrongly_typed_optional_fails() {
        let mut tree = summary_fixture();
        tree["routes"][0]["sections"][0]["roads"] = json!("none");
        assert!(decode_directions(tree).is_err());

        let mut tree = summary_fixture();
        tree["routes"][0]["summary"]["bound"] = json!({ "min_x": 1.0 });
        assert!(decode_directions(tree).is_err());
    }

    fn assert_schema_error(tree: Value) {
        let err = decode_directions(tree).unwrap_err();
        assert!(
            matches!(err, DirectionsError::Internal(InternalError::Schema(_))),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_array_in_place_of_object_fails() {
        let mut tree = summary_fixture();
        tree["routes"][0]["summary"]["fare"] = json!([3800, 0]);
        assert_schema_error(tree);

        let mut tree = summary_fixture();
        tree["routes"][0]["summary"]["bound"] = json!([127.0, 37.0, 128.0, 38.0]);
        assert_schema_error(tree);

        let mut tree = summary_fixture();
        tree["routes"][0]["summary"]["origin"] = json!(["A", 127.11, 37.39]);
        assert_schema_error(tree);

        let mut tree = summary_fixture();
        tree["routes"][0]["sections"] = json!([[900, 180]]);
        assert_schema_error(tree);

        let mut tree = detailed_fixture();
        tree["routes"][0]["sections"][0]["guides"][1] =
            json!(["", 127.12, 37.39, 800, 200, 2, "우회전", 1]);
        assert_schema_error(tree);
    }

    #[test]
    fn test_multi_array_summary_fails() {
        let tree = json!({
            "trans_id": "multi",
            "routes": [{ "result_code": 0, "result_msg": "ok", "key": "home",
                         "summary": [1200, 300] }]
        });
        let err = decode_multi_directions(tree).unwrap_err();
        assert!(matches!(err, DirectionsError::Internal(InternalError::Schema(_))));
    }

    #[test]
    fn test_null_optional_is_absent() {
        let mut tree = summary_fixture();
        tree["routes"][0]["summary"]["bound"] = Value::Null;
        let response = decode_directions(tree).unwrap();
        assert!(response.routes[0].summary.bound.is_none());
    }

    #[test]
    fn test_non_object_envelope_fails() {
        let err = decode_directions(json!(["abc", []])).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_decode_multi_response() {
        let tree = json!({
            "trans_id": "multi",
            "routes": [
                { "result_code": 0, "result_msg": "ok", "key": "home",
                  "summary": { "distance": 1200, "duration": 300 } },
                { "result_code": 104, "result_msg": "too close", "key": "work",
                  "summary": { "distance": 0, "duration": 0 } }
            ]
        });
        let response = decode_multi_directions(tree).unwrap();
        assert_eq!(response.routes.len(), 2);
        assert_eq!(response.route_for("home").unwrap().summary.distance, 1200);
        assert!(!response.route_for("work").unwrap().is_success());
    }

    #[test]
    fn test_multi_missing_key_fails() {
        let tree = json!({
            "trans_id": "multi",
            "routes": [{ "result_code": 0, "result_msg": "ok",
                         "summary": { "distance": 1, "duration": 1 } }]
        });
        assert!(decode_multi_directions(tree).is_err());
    }

    #[test]
    fn test_parse_tree_rejects_malformed_json() {
        let err = parse_tree(b"{ not json").unwrap_err();
        assert!(matches!(
            err,
            DirectionsError::Internal(InternalError::MalformedJson(_))
        ));
    }

    #[test]
    fn test_decode_body() {
        let body = serde_json::to_vec(&summary_fixture()).unwrap();
        let response: DirectionResponse = decode_body(&body).unwrap();
        assert_eq!(response.trans_id, "sum");
    }
}
