//! Meter reading submission.
//!
//! The `elsId` input field is only sent when the reading targets a meter
//! within an ELS account. Older backend revisions always expected the field;
//! current ones accept its absence for standalone provider accounts.

use serde_json::{json, Map, Value};

use super::{Operation, ResultKey};
use crate::config::DeviceInfo;

/// A single-rate meter reading to submit.
#[derive(Clone, Debug, PartialEq)]
pub struct MeterReading {
    /// LSPU account the meter belongs to.
    pub lspu_id: i64,
    /// Equipment (meter) UUID.
    pub equipment_id: String,
    /// The day-rate value.
    pub value: f64,
    /// ELS account id, when the LSPU account is part of one.
    pub els_id: Option<i64>,
}

impl MeterReading {
    /// Creates a reading without an ELS id.
    #[must_use]
    pub fn new(lspu_id: i64, equipment_id: impl Into<String>, value: f64) -> Self {
        Self {
            lspu_id,
            equipment_id: equipment_id.into(),
            value,
            els_id: None,
        }
    }

    /// Sets the ELS account id.
    #[must_use]
    pub const fn els_id(mut self, els_id: i64) -> Self {
        self.els_id = Some(els_id);
        self
    }
}

/// The `indicationSendV4` mutation.
#[derive(Clone, Copy, Debug)]
pub struct IndicationSend<'a> {
    reading: &'a MeterReading,
    device_info: &'a DeviceInfo,
}

impl<'a> IndicationSend<'a> {
    /// Creates the mutation for a reading, reported from the given device.
    #[must_use]
    pub const fn new(reading: &'a MeterReading, device_info: &'a DeviceInfo) -> Self {
        Self {
            reading,
            device_info,
        }
    }
}

impl Operation for IndicationSend<'_> {
    const OPERATION_NAME: &'static str = "indicationSendV4";
    const DOCUMENT: &'static str = include_str!("documents/indication_send.graphql");
    const RESULT_KEY: ResultKey = ResultKey::Single("data");

    fn variables(&self) -> Map<String, Value> {
        let counter = json!({
            "uuid": self.reading.equipment_id,
            "serviceId": 0.0,
            "valueDay": self.reading.value,
            "valueNight": null,
            "valueMiddle": null,
            "overlapDay": false,
            "overlapMiddle": false,
            "overlapNight": false,
        });

        let mut input = Map::new();
        if let Some(els_id) = self.reading.els_id {
            input.insert("elsId".to_string(), json!(els_id));
        }
        input.insert(
            "lspuGroups".to_string(),
            json!([{
                "lspuId": self.reading.lspu_id,
                "counters": [counter],
            }]),
        );

        let mut variables = Map::new();
        variables.insert("input".to_string(), Value::Object(input));
        variables.insert("deviceInfo".to_string(), json!(self.device_info));
        variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_without_els_id() {
        let device = DeviceInfo::default();
        let reading = MeterReading::new(77, "meter-uuid", 1234.5);
        let query = IndicationSend::new(&reading, &device).to_query();

        let input = &query.variables()["input"];
        assert!(input.get("elsId").is_none());
        assert_eq!(input["lspuGroups"][0]["lspuId"], 77);
        let counter = &input["lspuGroups"][0]["counters"][0];
        assert_eq!(counter["uuid"], "meter-uuid");
        assert_eq!(counter["valueDay"], 1234.5);
        assert_eq!(counter["valueNight"], Value::Null);
        assert_eq!(counter["overlapDay"], false);
        assert_eq!(query.variables()["deviceInfo"], json!(device));
    }

    #[test]
    fn test_variables_with_els_id() {
        let device = DeviceInfo::default();
        let reading = MeterReading::new(77, "meter-uuid", 10.0).els_id(5);
        let query = IndicationSend::new(&reading, &device).to_query();

        assert_eq!(query.variables()["input"]["elsId"], 5);
        assert_eq!(query.operation_name(), "indicationSendV4");
    }
}
