use leptos::prelude::*;
use std::time::Duration;

const DISMISS_AFTER: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
}

/// Handle for pushing action feedback from any page. Toasts dismiss
/// themselves after a few seconds or on click.
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), ToastLevel::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), ToastLevel::Error);
    }

    fn push(&self, message: String, level: ToastLevel) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|list| list.push(Toast { id, message, level }));

        let toasts = self.toasts;
        set_timeout(move || dismiss(toasts, id), DISMISS_AFTER);
    }
}

fn dismiss(toasts: RwSignal<Vec<Toast>>, id: u64) {
    toasts.update(|list| list.retain(|toast| toast.id != id));
}

/// Provides toast context and renders the toast container. Mounted once
/// at the root of the app.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = RwSignal::new(Vec::<Toast>::new());
    provide_context(ToastContext {
        toasts,
        next_id: StoredValue::new(0),
    });

    view! {
        {children()}
        <div class="toast-container">
            <For each=move || toasts.get() key=|toast| toast.id let:toast>
                {
                    let levelClass = match toast.level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    };
                    let id = toast.id;
                    view! {
                        <div
                            class=levelClass
                            title="Dismiss"
                            on:click=move |_| dismiss(toasts, id)
                        >
                            {toast.message.clone()}
                        </div>
                    }
                }
            </For>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismissing_removes_only_the_matching_toast() {
        let toasts = RwSignal::new(vec![
            Toast {
                id: 0,
                message: "saved".into(),
                level: ToastLevel::Success,
            },
            Toast {
                id: 1,
                message: "failed".into(),
                level: ToastLevel::Error,
            },
        ]);

        dismiss(toasts, 0);
        toasts.with_untracked(|list| {
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].id, 1);
        });

        // Dismissing an id that is already gone is a no-op
        dismiss(toasts, 0);
        toasts.with_untracked(|list| assert_eq!(list.len(), 1));
    }
}
