//! Lambda operation enum.

use std::fmt;

use awsjson_core::ServiceMetadata;

/// Static metadata of the Lambda service.
pub const LAMBDA_SERVICE: ServiceMetadata = ServiceMetadata {
    service_name: "AWS Lambda",
    target_prefix: "Lambda_20150331",
    endpoint_prefix: "lambda",
    api_version: "2015-03-31",
};

/// All supported Lambda operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LambdaOperation {
    /// Invoke a function synchronously or asynchronously.
    Invoke,
    /// Describe the version-specific settings of a function.
    GetFunctionConfiguration,
    /// List functions with their version-specific settings.
    ListFunctions,
    /// List the tags of a function.
    ListTags,
}

impl LambdaOperation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Invoke,
        Self::GetFunctionConfiguration,
        Self::ListFunctions,
        Self::ListTags,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invoke => "Invoke",
            Self::GetFunctionConfiguration => "GetFunctionConfiguration",
            Self::ListFunctions => "ListFunctions",
            Self::ListTags => "ListTags",
        }
    }

    /// Parse an operation name string into a `LambdaOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Invoke" => Some(Self::Invoke),
            "GetFunctionConfiguration" => Some(Self::GetFunctionConfiguration),
            "ListFunctions" => Some(Self::ListFunctions),
            "ListTags" => Some(Self::ListTags),
            _ => None,
        }
    }
}

impl fmt::Display for LambdaOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
