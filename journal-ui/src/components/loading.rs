//! Loading Component
//!
//! Spinners for pending reads and submissions.

use leptos::*;

/// Full-width loading state for a pending read
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12 space-x-3 text-gray-400">
            <div class="loading-spinner w-8 h-8" />
            <span>"Loading..."</span>
        </div>
    }
}

/// Inline spinner, used in place of a submit button label
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}
