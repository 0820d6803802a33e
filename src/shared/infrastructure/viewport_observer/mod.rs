// ViewportObserver port: a source of visibility notifications.
//
// Responsibilities
// - Yield visibility events in delivery order.
// - Return None once the source is closed. Consumers stop on None.

use crate::modules::progress::core::visibility::VisibilityEvent;
use async_trait::async_trait;

#[async_trait]
pub trait ViewportObserver: Send {
    async fn next_visibility(&mut self) -> Option<VisibilityEvent>;
}

pub mod channel;
