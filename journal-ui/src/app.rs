//! App Root Component
//!
//! Routing between the creation form and a journal page.

use leptos::*;
use leptos_router::*;

use crate::components::{CreateJournal, JournalView, Nav};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    state.refresh();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/journal/:id" view=JournalPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Creation form; navigates to the new journal once it exists
#[component]
fn Home() -> impl IntoView {
    let navigate = use_navigate();
    let on_created = Callback::new(move |id: String| {
        navigate(&format!("/journal/{}", id), Default::default());
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-center">"New Journal"</h1>
            <CreateJournal on_created=on_created />
        </div>
    }
}

#[derive(Params, PartialEq, Clone)]
struct JournalParams {
    id: Option<String>,
}

/// Journal page keyed by the `:id` route segment
#[component]
fn JournalPage() -> impl IntoView {
    let params = use_params::<JournalParams>();
    let navigate = use_navigate();
    let on_back = Callback::new(move |_: ()| {
        navigate("/", Default::default());
    });

    // Re-mount the view when the id changes
    move || {
        let id = params
            .with(|p| p.as_ref().ok().and_then(|p| p.id.clone()))
            .unwrap_or_default();
        view! { <JournalView id=id on_back=on_back /> }
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Create a Journal"
            </A>
        </div>
    }
}
