// Channel backed implementation of the ViewportObserver port.
//
// Purpose
// - Let any producer (HTTP handler, tests) push visibility events to a single consumer.

use crate::modules::progress::core::visibility::VisibilityEvent;
use crate::shared::infrastructure::viewport_observer::ViewportObserver;
use async_trait::async_trait;
use tokio::sync::mpsc;

pub struct ChannelViewportObserver {
    receiver: mpsc::Receiver<VisibilityEvent>,
}

impl ChannelViewportObserver {
    pub fn new(receiver: mpsc::Receiver<VisibilityEvent>) -> Self {
        Self { receiver }
    }
}

#[async_trait]
impl ViewportObserver for ChannelViewportObserver {
    async fn next_visibility(&mut self) -> Option<VisibilityEvent> {
        self.receiver.recv().await
    }
}

pub fn visibility_channel(
    capacity: usize,
) -> (mpsc::Sender<VisibilityEvent>, ChannelViewportObserver) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (sender, ChannelViewportObserver::new(receiver))
}
