//! Amazon DynamoDB user table adapter.
//!
//! Items are stored as `{"userId": S, "name": S}` with `userId` as the
//! partition key. Renames use a conditional update so a missing item is
//! reported as absent instead of being created with only a `name`.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use tracing::debug;

use crate::domain::ports::{UserTable, UserTableError};
use crate::domain::{UserId, UserName, UserRecord};

use super::TableName;

const USER_ID_ATTR: &str = "userId";
const NAME_ATTR: &str = "name";

type Item = HashMap<String, AttributeValue>;

/// [`UserTable`] implementation over a DynamoDB table.
#[derive(Debug, Clone)]
pub struct DynamoDbUserTable {
    client: Client,
    table: TableName,
}

impl DynamoDbUserTable {
    /// Wrap an existing client.
    pub fn new(client: Client, table: TableName) -> Self {
        Self { client, table }
    }

    /// Build a client from the ambient AWS configuration (environment,
    /// profile, or instance metadata).
    pub async fn from_env(table: TableName) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table)
    }

    fn key(user_id: &UserId) -> AttributeValue {
        AttributeValue::S(user_id.to_string())
    }
}

fn map_sdk_error<E, R>(err: &SdkError<E, R>) -> UserTableError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(err).to_string();
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            UserTableError::connection(message)
        }
        _ => UserTableError::query(message),
    }
}

fn string_attr<'a>(item: &'a Item, attr: &str) -> Result<&'a str, UserTableError> {
    item.get(attr)
        .and_then(|value| value.as_s().ok())
        .map(String::as_str)
        .ok_or_else(|| {
            UserTableError::query(format!("item attribute {attr} is missing or not a string"))
        })
}

fn item_to_record(item: &Item) -> Result<UserRecord, UserTableError> {
    let user_id = string_attr(item, USER_ID_ATTR)?;
    let name = string_attr(item, NAME_ATTR)?;
    UserRecord::try_from_strings(user_id, name)
        .map_err(|err| UserTableError::query(format!("stored item is invalid: {err}")))
}

fn record_to_item(record: &UserRecord) -> Item {
    HashMap::from([
        (
            USER_ID_ATTR.to_owned(),
            AttributeValue::S(record.user_id().to_string()),
        ),
        (NAME_ATTR.to_owned(), AttributeValue::S(record.name().to_string())),
    ])
}

#[async_trait]
impl UserTable for DynamoDbUserTable {
    async fn put(&self, record: &UserRecord) -> Result<(), UserTableError> {
        self.client
            .put_item()
            .table_name(self.table.as_ref())
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(|err| map_sdk_error(&err))?;
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<UserRecord>, UserTableError> {
        let mut records = Vec::new();
        let mut start_key: Option<Item> = None;
        loop {
            let output = self
                .client
                .scan()
                .table_name(self.table.as_ref())
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|err| map_sdk_error(&err))?;

            for item in output.items() {
                records.push(item_to_record(item)?);
            }

            match output.last_evaluated_key() {
                Some(key) if !key.is_empty() => {
                    debug!(table = %self.table, fetched = records.len(), "continuing scan");
                    start_key = Some(key.clone());
                }
                _ => break,
            }
        }
        Ok(records)
    }

    async fn get(&self, user_id: &UserId) -> Result<Option<UserRecord>, UserTableError> {
        let output = self
            .client
            .get_item()
            .table_name(self.table.as_ref())
            .key(USER_ID_ATTR, Self::key(user_id))
            .send()
            .await
            .map_err(|err| map_sdk_error(&err))?;

        output.item().map(item_to_record).transpose()
    }

    async fn update_name(
        &self,
        user_id: &UserId,
        name: &UserName,
    ) -> Result<Option<UserRecord>, UserTableError> {
        let result = self
            .client
            .update_item()
            .table_name(self.table.as_ref())
            .key(USER_ID_ATTR, Self::key(user_id))
            .update_expression("SET #name = :name")
            .condition_expression("attribute_exists(#userId)")
            .expression_attribute_names("#name", NAME_ATTR)
            .expression_attribute_names("#userId", USER_ID_ATTR)
            .expression_attribute_values(":name", AttributeValue::S(name.to_string()))
            .return_values(ReturnValue::AllNew)
            .send()
            .await;

        match result {
            Ok(output) => output.attributes().map(item_to_record).transpose(),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(UpdateItemError::is_conditional_check_failed_exception) =>
            {
                Ok(None)
            }
            Err(err) => Err(map_sdk_error(&err)),
        }
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), UserTableError> {
        self.client
            .delete_item()
            .table_name(self.table.as_ref())
            .key(USER_ID_ATTR, Self::key(user_id))
            .send()
            .await
            .map_err(|err| map_sdk_error(&err))?;
        Ok(())
    }
}
