use contracts::shared::upload::{check_size, FileKind, UploadedFile};
use web_sys::FileList;

/// Outcome of processing one picked batch: accepted attachments in the
/// order the browser listed them, plus one rejection message per file
/// that exceeded the cap.
pub struct ProcessedFiles {
    pub accepted: Vec<UploadedFile>,
    pub rejected: Vec<String>,
}

/// Turn a `FileList` from an input or drop event into attachment
/// metadata. Files are read sequentially so previews land in input
/// order; oversized files are skipped with a message and the rest of
/// the batch still goes through.
pub async fn process_file_list(list: FileList) -> ProcessedFiles {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for index in 0..list.length() {
        let Some(raw) = list.item(index) else {
            continue;
        };
        let name = raw.name();
        let size = raw.size() as u64;

        if let Err(err) = check_size(&name, size) {
            rejected.push(err.to_string());
            continue;
        }

        let mut file = UploadedFile::new(name, size, &raw.type_());
        if file.kind == FileKind::Image {
            let blob = gloo_file::File::from(raw);
            match gloo_file::futures::read_as_data_url(&blob).await {
                Ok(url) => file.preview = Some(url),
                Err(err) => {
                    log::warn!("Failed to read preview for {}: {:?}", file.name, err);
                }
            }
        }
        accepted.push(file);
    }

    ProcessedFiles { accepted, rejected }
}
