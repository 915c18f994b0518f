//! Service and operation bindings.

use awsjson_core::ServiceMetadata;
use awsjson_http::{JsonOperation, JsonService};
use awsjson_lambda_model::LAMBDA_SERVICE;
use awsjson_lambda_model::error::LambdaError;
use awsjson_lambda_model::input::{
    GetFunctionConfigurationInput, InvokeInput, ListFunctionsInput, ListTagsInput,
};
use awsjson_lambda_model::output::{
    GetFunctionConfigurationOutput, InvokeOutput, ListFunctionsOutput, ListTagsOutput,
};

/// The Lambda service.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lambda;

impl JsonService for Lambda {
    const METADATA: ServiceMetadata = LAMBDA_SERVICE;
    type Error = LambdaError;
}

macro_rules! operation {
    ($(#[$meta:meta])* $name:ident, $input:ty, $output:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl JsonOperation for $name {
            type Service = Lambda;
            type Input = $input;
            type Output = $output;
            const NAME: &'static str = stringify!($name);
        }
    };
}

operation!(
    /// `Invoke`.
    Invoke,
    InvokeInput,
    InvokeOutput
);
operation!(
    /// `GetFunctionConfiguration`.
    GetFunctionConfiguration,
    GetFunctionConfigurationInput,
    GetFunctionConfigurationOutput
);
operation!(
    /// `ListFunctions`.
    ListFunctions,
    ListFunctionsInput,
    ListFunctionsOutput
);
operation!(
    /// `ListTags`.
    ListTags,
    ListTagsInput,
    ListTagsOutput
);
