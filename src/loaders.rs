//! View callers: put a container into its loading state, call its endpoint and
//! store whatever comes back.
//!
//! Every call ends in either `Ready` or `Failed`, so a container never stays on
//! its loading indicator once its requests settle. Overlapping calls are not
//! coordinated: whichever finishes last owns the container.

use crate::actions::{apply, AppAction};
use crate::client::{ApiClient, RequestOptions};
use crate::state::SharedState;
use crate::types::{ContainerId, ItemsResponse};
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;

/// Load `/api/info` into the info container
pub async fn load_api_info(client: &ApiClient, state: &SharedState) {
    load_container(client, state, ContainerId::ApiInfo).await;
}

/// Load `/api/items` into the items container.
/// An absent `items` key renders the same as an empty list.
pub async fn load_items(client: &ApiClient, state: &SharedState) {
    load_container(client, state, ContainerId::Items).await;
}

/// Load `/health` into the health container
pub async fn check_health(client: &ApiClient, state: &SharedState) {
    load_container(client, state, ContainerId::Health).await;
}

/// Run the view caller that owns `container`
pub async fn load_container(client: &ApiClient, state: &SharedState, container: ContainerId) {
    apply(state, AppAction::BeginLoad(container));
    settle(client, state, container).await;
}

/// Spawns a background task for `container`'s view caller
pub fn load_container_background(
    client: ApiClient,
    state: SharedState,
    container: ContainerId,
) -> JoinHandle<()> {
    // Set before spawning so the next frame already shows the indicator
    apply(&state, AppAction::BeginLoad(container));

    tokio::spawn(async move {
        settle(&client, &state, container).await;
    })
}

/// Request `container`'s endpoint and move it to `Ready` or `Failed`
async fn settle(client: &ApiClient, state: &SharedState, container: ContainerId) {
    match container {
        ContainerId::ApiInfo => fetch(client, state, container, AppAction::InfoLoaded).await,
        ContainerId::Items => {
            fetch(client, state, container, |response: ItemsResponse| {
                AppAction::ItemsLoaded(response.into_items())
            })
            .await
        }
        ContainerId::Health => fetch(client, state, container, AppAction::HealthLoaded).await,
    }
}

async fn fetch<T, F>(client: &ApiClient, state: &SharedState, container: ContainerId, on_ready: F)
where
    T: DeserializeOwned,
    F: FnOnce(T) -> AppAction,
{
    let action = match client
        .request_as::<T>(container.endpoint(), RequestOptions::default())
        .await
    {
        Ok(payload) => {
            tracing::debug!(container = container.element_id(), "Container loaded");
            on_ready(payload)
        }
        Err(e) => {
            tracing::warn!(
                container = container.element_id(),
                kind = e.kind(),
                "Showing error state"
            );
            AppAction::LoadFailed(container)
        }
    };

    apply(state, action);
}
