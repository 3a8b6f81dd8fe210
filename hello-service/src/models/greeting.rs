use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const GREETING_MESSAGE: &str = "Bye from testapp-v6!";
pub const SERVICE_NAME: &str = "testapp-v6";

/// Body of `GET /api/hello`.
///
/// ```json
/// {
///   "message": "Bye from testapp-v6!",
///   "timestamp": "2024-03-10T15:30:45.123456789Z",
///   "service": "testapp-v6"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
}

impl Greeting {
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            message: GREETING_MESSAGE.to_string(),
            timestamp,
            service: SERVICE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_exactly_three_keys() {
        let json = serde_json::to_value(Greeting::now()).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["message", "service", "timestamp"]);
    }

    #[test]
    fn literals_match_testapp_v6() {
        let greeting = Greeting::now();
        assert_eq!(greeting.message, "Bye from testapp-v6!");
        assert_eq!(greeting.service, "testapp-v6");
    }

    #[test]
    fn timestamp_is_rfc3339_utc() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 15, 30, 45).unwrap();
        let json = serde_json::to_value(Greeting::at(instant)).unwrap();

        assert_eq!(json["message"], GREETING_MESSAGE);
        assert_eq!(json["service"], SERVICE_NAME);
        assert_eq!(json["timestamp"], "2024-03-10T15:30:45Z");
    }

    #[test]
    fn now_uses_current_time() {
        let before = Utc::now();
        let greeting = Greeting::now();
        let after = Utc::now();

        assert!(greeting.timestamp >= before && greeting.timestamp <= after);
    }
}
