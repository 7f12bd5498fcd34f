//! Copy Target Component
//!
//! Renders the text to copy in a paragraph with a known id, plus a button
//! that copies that paragraph's contents through the browser selection.

use dioxus::prelude::*;

use crate::services::clipboard::{copy_target, CopyResult, CopyStatus};
use crate::stores::settings_store::get_settings;

/// Message to show under the paragraph, if any.
///
/// Returns `None` after a successful copy, and also when failures are hidden,
/// so an earlier failure never lingers on screen.
fn failure_message(result: &CopyResult<CopyStatus>, surface_failures: bool) -> Option<String> {
    let message = match result {
        Ok(CopyStatus::Copied) => return None,
        Ok(CopyStatus::Refused) => "Your browser blocked the copy".to_string(),
        Err(err) if err.is_element_missing() => "Nothing to copy on this page".to_string(),
        Err(err) => err.to_string(),
    };

    surface_failures.then_some(message)
}

#[component]
pub fn CopyTarget(text: String) -> Element {
    let mut copied = use_signal(|| false);
    let mut failure = use_signal(|| None::<String>);

    let target_id = get_settings().target_id;

    let handle_copy = move |e: MouseEvent| {
        e.stop_propagation();
        let settings = get_settings();

        let result = copy_target(&settings.target_id);
        if let Ok(CopyStatus::Copied) = result {
            copied.set(true);
            let feedback_ms = settings.feedback_ms;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(feedback_ms).await;
                copied.set(false);
            });
        }

        failure.set(failure_message(&result, settings.surface_failures));
    };

    rsx! {
        div {
            class: "p-4 border border-border rounded-xl",

            p {
                id: "{target_id}",
                class: "whitespace-pre-wrap break-words text-sm mb-3",
                "{text}"
            }

            if let Some(message) = failure.read().as_ref() {
                div {
                    class: "mb-3 p-2 bg-red-100 dark:bg-red-900/30 text-red-800 dark:text-red-200 rounded-lg text-center text-sm",
                    "{message}"
                }
            }

            button {
                r#type: "button",
                class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                onclick: handle_copy,
                if *copied.read() { "Copied!" } else { "Copy" }
            }
        }
    }
}
