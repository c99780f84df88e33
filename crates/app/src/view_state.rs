use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{
    DashboardPayload, DashboardView, Envelope, FetchState, Settlement, ViewStateController,
};

/// Drive the fetch lifecycle for a dashboard showing `id`.
///
/// Issues one request on mount and one more each time `id` changes. The
/// request runs on the calling component's scope, so it is dropped if the
/// component unmounts. Results for an identifier that has since been
/// replaced are discarded.
pub fn use_view_state<T: DashboardPayload>(id: String) -> Signal<ViewStateController<Envelope<T>>> {
    let api = use_context::<ApiClient>();
    let mut controller = use_signal(|| ViewStateController::<Envelope<T>>::new(T::ROLE));

    use_effect(use_reactive((&id,), move |(id,)| {
        let Some(ticket) = controller.write().begin(&id) else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let result = api.fetch_dashboard::<T>(ticket.id()).await;
            match controller.write().settle(&ticket, result) {
                Settlement::Applied => {}
                Settlement::Stale => tracing::debug!(
                    role = %T::ROLE,
                    id = ticket.id(),
                    "discarding response for superseded identifier"
                ),
                Settlement::AlreadySettled => tracing::debug!(
                    role = %T::ROLE,
                    id = ticket.id(),
                    "ignoring duplicate settlement"
                ),
            }
        });
    }));

    controller
}

/// Fetch state for `id`, already laid out for display. Reads as `Loading`
/// from the very first render until the response for `id` settles.
pub fn use_dashboard<T: DashboardPayload>(id: String) -> FetchState<DashboardView> {
    let controller = use_view_state::<T>(id.clone());
    let state = controller.read().state_for(&id, Envelope::render);
    state
}
