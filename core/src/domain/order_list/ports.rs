use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, menu::entities::DateRange,
    order_list::entities::OrderListEntry,
};

pub trait OrderListService: Send + Sync {
    fn get_order_list(
        &self,
        range: DateRange,
    ) -> impl Future<Output = Result<Vec<OrderListEntry>, CoreError>> + Send;
}
