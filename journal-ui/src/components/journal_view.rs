//! Journal View Component
//!
//! Reads one journal, lists its entries and, for the owner, offers an append
//! form. The journal is re-read after every successful append.

use leptos::*;

use crate::api::{self, Journal};
use crate::components::{InlineLoading, Loading};
use crate::format::format_timestamp;
use crate::state::global::GlobalState;

pub const DEFAULT_TITLE: &str = "Journal";
pub const ENTRY_PLACEHOLDER: &str = "Write your journal entry here...";
pub const ADD_TEXT: &str = "Add Entry";

#[derive(Clone, Debug, PartialEq)]
enum QueryState {
    Loading,
    Failed(String),
    NotFound,
    Loaded(Journal),
}

impl From<Result<Option<Journal>, String>> for QueryState {
    fn from(result: Result<Option<Journal>, String>) -> Self {
        match result {
            Ok(Some(journal)) => QueryState::Loaded(journal),
            Ok(None) => QueryState::NotFound,
            Err(e) => QueryState::Failed(e),
        }
    }
}

async fn read_journal(id: &str) -> QueryState {
    api::fetch_journal(id).await.into()
}

/// Journal page component
#[component]
pub fn JournalView(
    /// Journal object id
    #[prop(into)]
    id: String,
    /// Called when the user leaves the page
    #[prop(into)]
    on_back: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (query, set_query) = create_signal(QueryState::Loading);
    let (entry, set_entry) = create_signal(String::new());
    let (waiting, set_waiting) = create_signal(false);

    let journal_id = store_value(id);

    let load = move || {
        let id = journal_id.get_value();
        spawn_local(async move {
            set_query.set(read_journal(&id).await);
        });
    };
    load();

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = entry.get();
        if content.trim().is_empty() || waiting.get() {
            return;
        }

        set_waiting.set(true);
        let id = journal_id.get_value();

        spawn_local(async move {
            match api::add_entry(&id, &content).await {
                Ok(_digest) => {
                    set_query.set(read_journal(&id).await);
                    set_entry.set(String::new());
                }
                Err(e) => {
                    logging::warn!("Failed to add entry: {}", e);
                }
            }
            set_waiting.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            {move || match query.get() {
                QueryState::Loading => view! { <Loading /> }.into_view(),
                QueryState::Failed(message) => view! {
                    <div class="text-red-400">{format!("Error: {}", message)}</div>
                }.into_view(),
                QueryState::NotFound => view! {
                    <div class="text-gray-400">"Not found"</div>
                }.into_view(),
                QueryState::Loaded(journal) => {
                    let owned = state.owns(journal.owner.as_deref());
                    let title = journal.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string());

                    view! {
                        <div class="flex items-center justify-between">
                            <h1 class="text-3xl font-bold">{title}</h1>
                            <button
                                on:click=move |_| on_back.call(())
                                class="px-4 py-2 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors"
                            >
                                "Back to Journals"
                            </button>
                        </div>

                        <EntryList journal=journal />

                        {owned.then(|| view! {
                            <div class="bg-gray-800 rounded-lg p-6">
                                <h2 class="text-xl font-semibold mb-4">"Add New Entry"</h2>
                                <form on:submit=on_add class="space-y-4">
                                    <textarea
                                        placeholder=ENTRY_PLACEHOLDER
                                        on:input=move |ev| set_entry.set(event_target_value(&ev))
                                        prop:value=move || entry.get()
                                        disabled=move || waiting.get()
                                        rows=4
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                    <button
                                        type="submit"
                                        disabled=move || waiting.get() || entry.get().trim().is_empty()
                                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                                               transition-colors flex items-center justify-center"
                                    >
                                        {move || if waiting.get() {
                                            view! { <InlineLoading /> }.into_view()
                                        } else {
                                            view! { <span>{ADD_TEXT}</span> }.into_view()
                                        }}
                                    </button>
                                </form>
                            </div>
                        })}
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Entries in ledger order
#[component]
fn EntryList(journal: Journal) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <h2 class="text-xl font-semibold">"Past Entries"</h2>
            {if journal.entries.is_empty() {
                view! { <p class="text-gray-400">"No entries yet"</p> }.into_view()
            } else {
                journal.entries
                    .into_iter()
                    .map(|entry| view! {
                        <div class="bg-gray-800 rounded-lg p-4">
                            <div class="text-sm text-gray-400 mb-1">
                                {format_timestamp(&entry.create_at_ms)}
                            </div>
                            <div class="whitespace-pre-wrap">{entry.content}</div>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}
