use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Port for the string-keyed store every collection is persisted in.
///
/// Values are opaque serialized documents; callers read and write them
/// wholesale.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<(), CoreError>> + Send;
}
