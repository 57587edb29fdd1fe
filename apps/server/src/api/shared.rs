//! Helpers shared by the API handlers.

use std::sync::Arc;

use atlasboard_core::notifications::Event;
use atlasboard_core::webhooks::WebhookDispatcherTrait;

use crate::main_lib::AppState;

/// Fire a webhook event on a detached task.
///
/// The dispatch runs independently of the request that triggered it; its
/// failures are logged inside the dispatcher and never reach the response
/// path.
pub(crate) fn dispatch_event(state: &Arc<AppState>, event: Event, country_key: String) {
    let dispatcher = state.webhook_dispatcher.clone();
    tokio::spawn(async move {
        dispatcher.dispatch(event, &country_key).await;
    });
}
