//! Service and operation bindings.

use awsjson_core::ServiceMetadata;
use awsjson_http::{JsonOperation, JsonService};
use awsjson_lightsail_model::LIGHTSAIL_SERVICE;
use awsjson_lightsail_model::error::LightsailError;
use awsjson_lightsail_model::input::{
    CreateInstancesFromSnapshotInput, CreateRelationalDatabaseInput, GetAlarmsInput,
    GetInstanceInput, GetInstancesInput, GetLoadBalancerTlsCertificatesInput,
    GetRelationalDatabaseInput, GetRelationalDatabaseMetricDataInput, PutAlarmInput,
};
use awsjson_lightsail_model::output::{
    CreateInstancesFromSnapshotOutput, CreateRelationalDatabaseOutput, GetAlarmsOutput,
    GetInstanceOutput, GetInstancesOutput, GetLoadBalancerTlsCertificatesOutput,
    GetRelationalDatabaseMetricDataOutput, GetRelationalDatabaseOutput, PutAlarmOutput,
};

/// The Lightsail service.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lightsail;

impl JsonService for Lightsail {
    const METADATA: ServiceMetadata = LIGHTSAIL_SERVICE;
    type Error = LightsailError;
}

macro_rules! operations {
    ($($name:ident: $input:ty => $output:ty;)+) => {
        $(
            #[doc = concat!("`", stringify!($name), "`.")]
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl JsonOperation for $name {
                type Service = Lightsail;
                type Input = $input;
                type Output = $output;
                const NAME: &'static str = stringify!($name);
            }
        )+
    };
}

operations! {
    GetInstance: GetInstanceInput => GetInstanceOutput;
    GetInstances: GetInstancesInput => GetInstancesOutput;
    CreateInstancesFromSnapshot:
        CreateInstancesFromSnapshotInput => CreateInstancesFromSnapshotOutput;
    CreateRelationalDatabase: CreateRelationalDatabaseInput => CreateRelationalDatabaseOutput;
    GetRelationalDatabase: GetRelationalDatabaseInput => GetRelationalDatabaseOutput;
    GetRelationalDatabaseMetricData:
        GetRelationalDatabaseMetricDataInput => GetRelationalDatabaseMetricDataOutput;
    PutAlarm: PutAlarmInput => PutAlarmOutput;
    GetAlarms: GetAlarmsInput => GetAlarmsOutput;
    GetLoadBalancerTlsCertificates:
        GetLoadBalancerTlsCertificatesInput => GetLoadBalancerTlsCertificatesOutput;
}
