//! Create Journal Component
//!
//! Title input and submit button. Submission signs through the host's wallet
//! connector; once the transaction finalizes the created id is handed to
//! `on_created`.

use leptos::*;

use crate::api;
use crate::components::InlineLoading;

pub const PLACEHOLDER: &str = "Enter journal title";
pub const SUBMIT_TEXT: &str = "Create Journal";

/// Spinner from submission onwards, including after success
fn shows_spinner(pending: bool, executed: bool) -> bool {
    pending || executed
}

fn is_disabled(pending: bool, executed: bool, title: &str) -> bool {
    shows_spinner(pending, executed) || title.trim().is_empty()
}

/// Journal creation form
#[component]
pub fn CreateJournal(
    /// Called once with the new journal's object id
    #[prop(into)]
    on_created: Callback<String>,
) -> impl IntoView {
    let (title, set_title) = create_signal(String::new());
    let (pending, set_pending) = create_signal(false);
    // Set once the wallet has executed the create; never cleared
    let (executed, set_executed) = create_signal(false);

    let disabled = move || is_disabled(pending.get(), executed.get(), &title.get());
    let spinning = move || shows_spinner(pending.get(), executed.get());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if disabled() {
            return;
        }

        let t = title.get();
        set_pending.set(true);

        spawn_local(async move {
            match api::create_journal(&t).await {
                Ok(journal) => {
                    set_executed.set(true);
                    on_created.call(journal.id);
                }
                Err(e) => {
                    // A second submit would create a second journal
                    if e.is_post_execution() {
                        set_executed.set(true);
                    }
                    logging::warn!("Failed to create journal: {}", e);
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="max-w-xl mx-auto bg-gray-800 rounded-lg p-6">
            <form on:submit=on_submit class="space-y-4">
                <input
                    type="text"
                    placeholder=PLACEHOLDER
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    prop:value=move || title.get()
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />

                <button
                    type="submit"
                    disabled=disabled
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center"
                >
                    {move || if spinning() {
                        view! { <InlineLoading /> }.into_view()
                    } else {
                        view! { <span>{SUBMIT_TEXT}</span> }.into_view()
                    }}
                </button>
            </form>
        </div>
    }
}
