use bird_contact::{Toast, ToastId, Toasts};
use leptos::prelude::*;

/// Shows and dismisses toasts. Cheap to copy; fetch it with
/// `use_context::<ToastHandle>()` anywhere under [`Toaster`].
#[derive(Clone, Copy)]
pub struct ToastHandle {
    toasts: RwSignal<Toasts>,
}

impl ToastHandle {
    /// Queue `toast` and dismiss it once its duration has elapsed.
    /// `None` if the host has already been torn down.
    pub fn show(&self, toast: Toast) -> Option<ToastId> {
        let duration = std::time::Duration::from_millis(toast.duration_ms);
        let id = self.toasts.try_update(|t| t.push(toast))?;

        let handle = *self;
        set_timeout(move || handle.dismiss(id), duration);
        Some(id)
    }

    /// Remove the toast with `id`, if it is still shown.
    pub fn dismiss(&self, id: ToastId) {
        // Timer may fire after the close button already removed it
        self.toasts.update(|t| {
            t.dismiss(id);
        });
    }
}

/// Hosts the toast viewport and provides a [`ToastHandle`] to `children`.
#[component]
pub fn Toaster(#[prop(default = 1)] limit: usize, children: Children) -> impl IntoView {
    let toasts = RwSignal::new(Toasts::with_limit(limit));
    let handle = ToastHandle { toasts };
    provide_context(handle);

    view! {
        {children()}
        <ol class="toast-viewport" aria-live="polite">
            <For
                each=move || toasts.with(|t| t.iter().cloned().collect::<Vec<_>>())
                key=|toast| toast.id
                let:toast
            >
                <li class="toast" role="status">
                    <div class="toast-body">
                        <p class="toast-title">{toast.title.clone()}</p>
                        <p class="toast-description">{toast.description.clone()}</p>
                    </div>
                    <button
                        class="toast-close"
                        aria-label="Close"
                        on:click=move |_| handle.dismiss(toast.id)
                    >
                        "×"
                    </button>
                </li>
            </For>
        </ol>
    }
}
