//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue and host boot
//! wiring. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    catalog, effect_executor,
    host::DesktopHostContext,
    model::{DesktopSettings, DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the host.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

/// Initial state before boot hydration: catalog layout, default settings, registry built.
pub fn initial_desktop_state() -> DesktopState {
    let settings = DesktopSettings::default();
    DesktopState::new(
        catalog::build_registry(&settings),
        catalog::layout_config(),
        settings,
    )
}

fn apply_action(
    state: RwSignal<DesktopState>,
    interaction: RwSignal<InteractionState>,
    effects: RwSignal<Vec<RuntimeEffect>>,
    action: DesktopAction,
) {
    let mut desktop = state.get_untracked();
    let mut ui = interaction.get_untracked();

    match reduce_desktop(&mut desktop, &mut ui, action) {
        Ok(new_effects) => {
            if desktop != state.get_untracked() {
                state.set(desktop);
            }
            if ui != interaction.get_untracked() {
                interaction.set(ui);
            }
            if !new_effects.is_empty() {
                effects.update(|queue| queue.extend(new_effects));
            }
        }
        // Unknown ids are expected from stale persisted sessions and app commands.
        Err(err @ ReducerError::WindowNotFound(_)) => {
            logging::debug_warn!("desktop reducer ignored action: {err}")
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Host bundle; defaults to the browser host selected by `platform_host_web`.
    #[prop(optional)]
    host: Option<DesktopHostContext>,
    children: Children,
) -> impl IntoView {
    let host = store_value(host.unwrap_or_default());
    let state = create_rw_signal(initial_desktop_state());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        apply_action(state, interaction, effects, action);
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    host.get_value().install_boot_hydration(dispatch);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
