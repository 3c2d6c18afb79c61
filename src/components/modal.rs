//! Modal Components
//!
//! A plain overlay dialog, and a confirm/cancel variant for destructive
//! actions.

use leptos::prelude::*;

/// Overlay dialog. Clicking the backdrop closes it.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Confirmation dialog
///
/// # Arguments
/// * `message` - Question shown to the user
/// * `confirm_label` - Text of the confirm button (e.g. "Delete")
/// * `on_confirm` - Runs when the user confirms
/// * `on_cancel` - Runs on cancel or backdrop click
#[component]
pub fn ConfirmModal(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_cancel>
            <p class="modal-message">{message}</p>
            <div class="modal-actions">
                <button class="btn secondary" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                <button class="btn danger" on:click=move |_| on_confirm.run(())>{confirm_label}</button>
            </div>
        </Modal>
    }
}
