//! Marshal an operation chosen by name at runtime.

use bytes::Bytes;
use serde_json::Value;

use awsjson_core::{ClientError, ClientResult};
use awsjson_http::marshall_json;
use awsjson_lightsail_model::LightsailOperation;

use crate::operations::{
    CreateInstancesFromSnapshot, CreateRelationalDatabase, GetAlarms, GetInstance, GetInstances,
    GetLoadBalancerTlsCertificates, GetRelationalDatabase, GetRelationalDatabaseMetricData,
    PutAlarm,
};

/// Marshal a Lightsail request from an operation name and a JSON input document.
pub fn marshall_by_name(
    operation: &str,
    input: Option<&Value>,
) -> ClientResult<http::Request<Bytes>> {
    let op = LightsailOperation::from_name(operation).ok_or_else(|| {
        ClientError::invalid_argument(format!("unknown Lightsail operation: {operation}"))
    })?;
    tracing::debug!(
        operation = %op,
        mutating = op.is_mutating(),
        "marshalling Lightsail operation by name"
    );

    match op {
        LightsailOperation::GetInstance => marshall_json::<GetInstance>(input),
        LightsailOperation::GetInstances => marshall_json::<GetInstances>(input),
        LightsailOperation::CreateInstancesFromSnapshot => {
            marshall_json::<CreateInstancesFromSnapshot>(input)
        }
        LightsailOperation::CreateRelationalDatabase => {
            marshall_json::<CreateRelationalDatabase>(input)
        }
        LightsailOperation::GetRelationalDatabase => marshall_json::<GetRelationalDatabase>(input),
        LightsailOperation::GetRelationalDatabaseMetricData => {
            marshall_json::<GetRelationalDatabaseMetricData>(input)
        }
        LightsailOperation::PutAlarm => marshall_json::<PutAlarm>(input),
        LightsailOperation::GetAlarms => marshall_json::<GetAlarms>(input),
        LightsailOperation::GetLoadBalancerTlsCertificates => {
            marshall_json::<GetLoadBalancerTlsCertificates>(input)
        }
    }
}
