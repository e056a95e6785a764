// src/lookup/systems.rs

use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use super::events::LookupCompleted;
use super::plugin::{SelectorHub, SelectorId};
use crate::api::ApiClient;
use crate::ui::systems::SendEvent;

/// Polls every picker's debounce timer and spawns a background search for each
/// query that just came due. Results re-enter the ECS as `LookupCompleted`
/// events via the `SendEvent` bridge.
pub fn dispatch_due_lookups(
    time: Res<Time>,
    mut hub: ResMut<SelectorHub>,
    api: Res<ApiClient>,
    runtime: Res<TokioTasksRuntime>,
    mut commands: Commands,
) {
    for selector in SelectorId::ALL {
        let Some((seq, query)) = hub.state_mut(selector).poll_due_query(time.delta()) else {
            continue;
        };
        let kind = selector.entity_kind();
        debug!("Dispatching {:?} lookup #{} for '{}'", selector, seq, query);

        let api = api.clone();
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.search(kind, &query).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<LookupCompleted> {
                        event: LookupCompleted {
                            selector,
                            seq,
                            result,
                        },
                    });
            })
            .await;
        });
    }
}

/// Applies finished lookups last-query-wins. Failures are logged and leave the
/// visible result set untouched; they never surface as dialogs.
pub fn apply_lookup_results(
    mut completions: EventReader<LookupCompleted>,
    mut hub: ResMut<SelectorHub>,
) {
    for completion in completions.read() {
        let state = hub.state_mut(completion.selector);
        match &completion.result {
            Ok(page) => {
                if !state.apply_results(
                    completion.seq,
                    page.results.clone(),
                    page.next_page.is_some(),
                ) {
                    trace!(
                        "Discarding stale {:?} lookup response #{}",
                        completion.selector,
                        completion.seq
                    );
                }
            }
            Err(e) => {
                warn!(
                    "{:?} lookup #{} failed: {}",
                    completion.selector, completion.seq, e
                );
                state.fail_request(completion.seq);
            }
        }
    }
}
