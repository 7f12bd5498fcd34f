use dioxus::prelude::*;
use crate::components::CopyTarget;
use crate::services::ocr;
use crate::stores::settings_store::{self, CopySettings};
use crate::utils::copy_target_text;

const IMAGE_INPUT_ID: &str = "ocr-image-input";

#[component]
pub fn Home() -> Element {
    let mut source = use_signal(String::new);
    let mut recognizing = use_signal(|| false);
    let mut ocr_error = use_signal(|| None::<String>);

    // Recompute the copy target text whenever the source changes
    let text = use_memo(move || copy_target_text(&source.read()));

    let settings = settings_store::SETTINGS.read().clone();

    // Recognised text replaces the source, so it can still be edited before copying
    let handle_image_select = move |_evt: Event<FormData>| {
        if *recognizing.read() {
            return;
        }
        recognizing.set(true);
        ocr_error.set(None);

        spawn(async move {
            let settings = settings_store::get_settings();
            let result = match ocr::read_selected_file(IMAGE_INPUT_ID).await {
                Ok(image) => ocr::recognize_text(&settings, &image).await,
                Err(e) => Err(format!("Failed to read file: {}", e)),
            };

            match result {
                Ok(recognized) => {
                    log::info!("Recognized {} characters", recognized.chars().count());
                    source.set(recognized);
                }
                Err(e) => {
                    log::error!("Text recognition failed: {}", e);
                    ocr_error.set(Some(e));
                }
            }
            recognizing.set(false);
        });
    };

    rsx! {
        div {
            class: "max-w-2xl mx-auto p-6 space-y-4",

            h1 { class: "text-2xl font-bold", "Copy text from an image" }

            // Image upload
            div {
                class: "flex items-center gap-3",
                input {
                    id: IMAGE_INPUT_ID,
                    r#type: "file",
                    accept: "image/*",
                    disabled: *recognizing.read(),
                    onchange: handle_image_select,
                }
                if *recognizing.read() {
                    span { class: "text-sm text-muted-foreground", "Reading text..." }
                }
            }

            if let Some(err) = ocr_error.read().as_ref() {
                div {
                    class: "p-3 bg-red-100 dark:bg-red-900 text-red-800 dark:text-red-200 rounded-lg text-sm",
                    "{err}"
                }
            }

            // Paste fallback
            textarea {
                class: "w-full h-40 p-3 border border-border rounded-lg font-mono text-sm",
                placeholder: "Or paste an OCR JSON response or plain text",
                value: "{source}",
                oninput: move |e| source.set(e.value()),
            }

            CopyTarget { text: text() }

            // Settings
            div {
                class: "space-y-2 text-sm text-muted-foreground",

                label {
                    class: "flex items-center gap-2",
                    input {
                        r#type: "checkbox",
                        checked: settings.surface_failures,
                        onchange: move |e| {
                            settings_store::set_settings(CopySettings {
                                surface_failures: e.checked(),
                                ..settings_store::get_settings()
                            });
                        },
                    }
                    "Show copy errors"
                }

                input {
                    class: "w-full p-2 border border-border rounded-lg",
                    r#type: "url",
                    placeholder: "OCR endpoint (https://<resource>.cognitiveservices.azure.com/)",
                    value: "{settings.ocr_endpoint}",
                    onchange: move |e| {
                        settings_store::set_settings(CopySettings {
                            ocr_endpoint: e.value(),
                            ..settings_store::get_settings()
                        });
                    },
                }

                input {
                    class: "w-full p-2 border border-border rounded-lg",
                    r#type: "password",
                    placeholder: "OCR subscription key",
                    value: "{settings.ocr_key}",
                    onchange: move |e| {
                        settings_store::set_settings(CopySettings {
                            ocr_key: e.value(),
                            ..settings_store::get_settings()
                        });
                    },
                }
            }
        }
    }
}
