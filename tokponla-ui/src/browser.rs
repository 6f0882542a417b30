//! Browser Bindings
//!
//! Object-URL preview backend, `FileList` conversion and a submission sink
//! that writes to the developer console.

use tokponla::{Candidate, PreviewBackend, PreviewError, SinkError, Submission, SubmissionSink, UploadedFile};
use wasm_bindgen::JsValue;

/// Previews backed by `URL.createObjectURL`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserPreviews;

impl PreviewBackend for BrowserPreviews {
    type Source = web_sys::File;

    fn create(&mut self, file: &UploadedFile, source: &web_sys::File) -> Result<String, PreviewError> {
        web_sys::Url::create_object_url_with_blob(source).map_err(|e| PreviewError::Create {
            name: file.name.clone(),
            reason: js_error(&e),
        })
    }

    fn revoke(&mut self, url: &str) {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            warn(&format!("failed to revoke {}: {}", url, js_error(&e)));
        }
    }
}

/// Files from an input or a drop, in selection order
pub fn candidates(files: &web_sys::FileList) -> Vec<Candidate<web_sys::File>> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| {
            let meta = UploadedFile::new(file.name(), file.size() as u64, file.type_());
            Candidate::new(meta, file)
        })
        .collect()
}

/// Sink that logs the submission to the console
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
    fn submit(&mut self, submission: &Submission<'_>) -> Result<(), SinkError> {
        let payload = serde_json::to_string_pretty(submission)?;
        web_sys::console::log_2(&"Données du formulaire:".into(), &payload.into());
        Ok(())
    }
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokponla::PreviewManager;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn file(name: &str, mime: &str) -> web_sys::File {
        let parts = js_sys::Array::of1(&JsValue::from_str("contenu"));
        let options = web_sys::FilePropertyBag::new();
        options.set_type(mime);
        web_sys::File::new_with_str_sequence_and_options(&parts, name, &options).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_candidates_keep_selection_order() {
        let transfer = web_sys::DataTransfer::new().unwrap();
        transfer.items().add_with_file(&file("a.png", "image/png")).unwrap();
        transfer.items().add_with_file(&file("plan.pdf", "application/pdf")).unwrap();

        let batch = candidates(&transfer.files().unwrap());

        let names: Vec<_> = batch.iter().map(|c| c.file.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "plan.pdf"]);
        assert_eq!(batch[0].file.mime, "image/png");
        assert_eq!(batch[1].file.size, 7);
    }

    #[wasm_bindgen_test]
    fn test_object_url_acquire_and_release() {
        let source = file("cover.png", "image/png");
        let meta = UploadedFile::new(source.name(), source.size() as u64, source.type_());
        let mut previews = PreviewManager::new(BrowserPreviews);

        let handle = previews.acquire(&meta, &source).unwrap();
        assert!(handle.url().starts_with("blob:"));
        assert_eq!(previews.live(), 1);

        previews.release(handle);
        assert_eq!(previews.live(), 0);
        assert_eq!(previews.stats().released, 1);
    }
}
