//! Directions response models
//!
//! Typed representations of the provider's route responses. Fields marked
//! optional are only present when the request was made with `summary=false`.
//!
//! Decoding is strict: a missing required key or a value of the wrong type
//! fails the whole response. An optional key that is present must still
//! have the right type; only an absent key or an explicit `null` decodes
//! as `None`. Nested records must be JSON objects: serde would otherwise
//! accept a positional array in their place.

use domain::Bound;
use serde::{Deserialize, Serialize};

/// Result of a single-origin or multi-waypoint route search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionResponse {
    /// Provider-assigned request correlation id
    pub trans_id: String,
    /// One entry per alternative route; more than one only when
    /// alternatives were requested
    #[serde(deserialize_with = "object::list")]
    pub routes: Vec<Route>,
}

impl DirectionResponse {
    /// The first (preferred) route, if any
    #[must_use]
    pub fn primary_route(&self) -> Option<&Route> {
        self.routes.first()
    }

    /// Routes whose result code signals success
    pub fn successful_routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().filter(|route| route.is_success())
    }
}

/// One complete path from origin to destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// 0 on success, otherwise a provider failure category
    pub result_code: i32,
    /// Human-readable result message
    pub result_msg: String,
    /// Aggregate route information
    #[serde(deserialize_with = "object::required")]
    pub summary: Summary,
    /// One section per leg between consecutive stops
    /// (normally waypoint count + 1)
    #[serde(deserialize_with = "object::list")]
    pub sections: Vec<Section>,
}

impl Route {
    /// Whether the provider found this route
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result_code == 0
    }
}

/// Aggregate information for a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Origin as resolved by the provider
    #[serde(deserialize_with = "object::required")]
    pub origin: Point,
    /// Destination as resolved by the provider
    #[serde(deserialize_with = "object::required")]
    pub destination: Point,
    /// Waypoints in request order
    #[serde(deserialize_with = "object::list")]
    pub waypoints: Vec<Point>,
    /// Echo of the requested priority
    pub priority: String,
    /// Bounding box of the whole route (detailed mode only)
    #[serde(
        default,
        deserialize_with = "object::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub bound: Option<Bound>,
    /// Fare estimate
    #[serde(deserialize_with = "object::required")]
    pub fare: Fare,
    /// Total distance in meters
    pub distance: u32,
    /// Total duration in seconds
    pub duration: u32,
}

/// Taxi and toll fare estimate in KRW
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fare {
    /// Estimated taxi fare
    pub taxi: u32,
    /// Estimated toll fare
    pub toll: u32,
}

/// One leg of a route between two consecutive stops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Leg distance in meters
    pub distance: u32,
    /// Leg duration in seconds
    pub duration: u32,
    /// Bounding box of the leg (detailed mode only)
    #[serde(
        default,
        deserialize_with = "object::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub bound: Option<Bound>,
    /// Road segments (detailed mode only)
    #[serde(
        default,
        deserialize_with = "object::optional_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub roads: Option<Vec<Road>>,
    /// Turn-by-turn guidance (detailed mode only)
    #[serde(
        default,
        deserialize_with = "object::optional_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub guides: Option<Vec<Guide>>,
}

impl Section {
    /// Whether this section carries road or guide detail
    #[must_use]
    pub const fn is_detailed(&self) -> bool {
        self.roads.is_some() || self.guides.is_some()
    }

    /// Road segments, or an empty slice in summary mode
    #[must_use]
    pub fn roads(&self) -> &[Road] {
        self.roads.as_deref().unwrap_or_default()
    }

    /// Guidance points, or an empty slice in summary mode
    #[must_use]
    pub fn guides(&self) -> &[Guide] {
        self.guides.as_deref().unwrap_or_default()
    }
}

/// A named road segment with live traffic data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    /// Road name
    pub name: String,
    /// Segment length in meters
    pub distance: u32,
    /// Expected travel time in seconds
    pub duration: u32,
    /// Current traffic speed in km/h
    pub traffic_speed: f64,
    /// Current traffic state code
    pub traffic_state: i32,
    /// Flat geometry: x1, y1, x2, y2, ...
    pub vertexes: Vec<f64>,
}

impl Road {
    /// Geometry as `(x, y)` pairs
    ///
    /// A trailing unpaired value is ignored.
    pub fn coordinates(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.vertexes.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }
}

/// A turn-by-turn guidance point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    /// Name of the guidance point
    pub name: String,
    /// X coordinate (longitude)
    pub x: f64,
    /// Y coordinate (latitude)
    pub y: f64,
    /// Distance from the previous guidance point in meters
    pub distance: u32,
    /// Time from the previous guidance point in seconds
    pub duration: u32,
    /// Guidance type code
    #[serde(rename = "type")]
    pub guide_type: i32,
    /// Instruction text
    pub guidance: String,
    /// Index of the road in the same section this point belongs to
    pub road_index: i32,
}

impl Guide {
    /// The road this guidance point refers to within `section`
    #[must_use]
    pub fn road<'a>(&self, section: &'a Section) -> Option<&'a Road> {
        usize::try_from(self.road_index)
            .ok()
            .and_then(|index| section.roads().get(index))
    }
}

/// A named location echoed in a route summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Location name
    pub name: String,
    /// X coordinate (longitude)
    pub x: f64,
    /// Y coordinate (latitude)
    pub y: f64,
}

/// Result of a multi-origin route search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiDirectionResponse {
    /// Provider-assigned request correlation id
    pub trans_id: String,
    /// One entry per requested origin
    #[serde(deserialize_with = "object::list")]
    pub routes: Vec<OriginRoute>,
}

impl MultiDirectionResponse {
    /// Find the route computed for the origin with the given key
    #[must_use]
    pub fn route_for(&self, key: &str) -> Option<&OriginRoute> {
        self.routes.iter().find(|route| route.key == key)
    }

    /// The successful route with the shortest duration
    #[must_use]
    pub fn fastest(&self) -> Option<&OriginRoute> {
        self.routes
            .iter()
            .filter(|route| route.is_success())
            .min_by_key(|route| route.summary.duration)
    }
}

/// Route from one keyed origin to the shared destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginRoute {
    /// 0 on success, otherwise a provider failure category
    pub result_code: i32,
    /// Human-readable result message
    pub result_msg: String,
    /// Key of the origin this route starts from
    pub key: String,
    /// Totals for this origin
    #[serde(deserialize_with = "object::required")]
    pub summary: OriginSummary,
}

impl OriginRoute {
    /// Whether the provider found this route
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result_code == 0
    }
}

/// Totals for a multi-origin route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginSummary {
    /// Total distance in meters
    pub distance: u32,
    /// Total duration in seconds
    pub duration: u32,
}

/// Field deserializers that only accept JSON objects for nested records
mod object {
    use serde::Deserialize;
    use serde::de::{DeserializeOwned, Deserializer, Error, Unexpected};
    use serde_json::Value;

    pub fn required<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        from_object(Value::deserialize(deserializer)?)
    }

    pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            value => from_object(value).map(Some),
        }
    }

    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        from_array(Value::deserialize(deserializer)?)
    }

    pub fn optional_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            value => from_array(value).map(Some),
        }
    }

    fn from_object<T: DeserializeOwned, E: Error>(value: Value) -> Result<T, E> {
        if !value.is_object() {
            return Err(E::invalid_type(unexpected(&value), &"a JSON object"));
        }
        T::deserialize(value).map_err(E::custom)
    }

    fn from_array<T: DeserializeOwned, E: Error>(value: Value) -> Result<Vec<T>, E> {
        match value {
            Value::Array(items) => items.into_iter().map(from_object).collect(),
            other => Err(E::invalid_type(
                unexpected(&other),
                &"an array of JSON objects",
            )),
        }
    }

    fn unexpected(value: &Value) -> Unexpected<'_> {
        match value {
            Value::Null => Unexpected::Unit,
            Value::Bool(b) => Unexpected::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(Unexpected::Other("number"), Unexpected::Float),
            Value::String(s) => Unexpected::Str(s),
            Value::Array(_) => Unexpected::Seq,
            Value::Object(_) => Unexpected::Map,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn road(vertexes: Vec<f64>) -> Road {
        Road {
            name: "Sejong-daero".to_string(),
            distance: 120,
            duration: 30,
            traffic_speed: 24.5,
            traffic_state: 2,
            vertexes,
        }
    }

    fn origin_route(key: &str, code: i32, duration: u32) -> OriginRoute {
        OriginRoute {
            result_code: code,
            result_msg: String::new(),
            key: key.to_string(),
            summary: OriginSummary {
                distance: duration * 10,
                duration,
            },
        }
    }

    #[test]
    fn test_road_coordinates_pairs_vertexes() {
        let road = road(vec![127.0, 37.0, 127.1, 37.1, 127.2]);
        let coords: Vec<_> = road.coordinates().collect();
        assert_eq!(coords, vec![(127.0, 37.0), (127.1, 37.1)]);
    }

    #[test]
    fn test_guide_road_lookup() {
        let section = Section {
            distance: 240,
            duration: 60,
            bound: None,
            roads: Some(vec![road(vec![]), road(vec![1.0, 2.0])]),
            guides: None,
        };
        let guide = Guide {
            name: "Turn".to_string(),
            x: 1.0,
            y: 2.0,
            distance: 10,
            duration: 5,
            guide_type: 1,
            guidance: "Turn left".to_string(),
            road_index: 1,
        };
        assert_eq!(guide.road(&section).unwrap().vertexes, vec![1.0, 2.0]);

        let out_of_range = Guide {
            road_index: -1,
            ..guide
        };
        assert!(out_of_range.road(&section).is_none());
    }

    #[test]
    fn test_summary_section_accessors() {
        let section = Section {
            distance: 1,
            duration: 1,
            bound: None,
            roads: None,
            guides: None,
        };
        assert!(!section.is_detailed());
        assert!(section.roads().is_empty());
        assert!(section.guides().is_empty());
    }

    #[test]
    fn test_multi_lookup_and_fastest() {
        let response = MultiDirectionResponse {
            trans_id: "t".to_string(),
            routes: vec![
                origin_route("a", 0, 900),
                origin_route("b", 0, 300),
                origin_route("c", 104, 10),
            ],
        };
        assert_eq!(response.route_for("a").unwrap().summary.duration, 900);
        assert!(response.route_for("z").is_none());
        assert_eq!(response.fastest().unwrap().key, "b");
    }

    #[test]
    fn test_guide_serializes_type_key() {
        let guide = Guide {
            name: String::new(),
            x: 0.0,
            y: 0.0,
            distance: 0,
            duration: 0,
            guide_type: 100,
            guidance: "Start".to_string(),
            road_index: 0,
        };
        let json = serde_json::to_value(&guide).unwrap();
        assert_eq!(json["type"], 100);
        assert!(json.get("guide_type").is_none());
    }
}
