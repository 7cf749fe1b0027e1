//! Core PDF merging implementation.
//!
//! Each input's page tree is grafted, intact, under a fresh root `Pages`
//! node. Keeping every source subtree whole means attributes a source
//! inherits from its own root (resources, media box, rotation) still apply
//! to its pages and nothing leaks between inputs.

use lopdf::{Document, Object, ObjectId, dictionary};
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::error::{PropdfError, Result};
use crate::io::{LoadedPdf, PdfReader, format_file_size};

/// Statistics about a merge operation.
#[derive(Debug, Clone, Serialize)]
pub struct MergeStatistics {
    /// Number of PDFs merged.
    pub files_merged: usize,

    /// Total number of pages in merged document.
    pub total_pages: usize,

    /// Total time taken for merge, loading included.
    pub merge_time: Duration,

    /// Time taken to load all PDFs.
    pub load_time: Duration,

    /// Total size of input files.
    pub input_size: u64,
}

impl MergeStatistics {
    /// Format input size as human-readable string.
    pub fn format_input_size(&self) -> String {
        format_file_size(self.input_size)
    }
}

/// Result of a merge operation.
pub struct MergeResult {
    /// The merged PDF document.
    pub document: Document,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,

    /// Paths of files that were merged.
    pub merged_files: Vec<PathBuf>,
}

/// PDF merger that concatenates whole documents.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    reader: PdfReader,
}

impl Merger {
    /// Create a new merger with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `inputs` one after another and concatenate their pages.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `inputs` is empty
    /// - Any input cannot be loaded (the whole merge is abandoned)
    /// - An input's page tree is malformed
    pub async fn merge(&self, inputs: &[PathBuf]) -> Result<MergeResult> {
        if inputs.is_empty() {
            return Err(PropdfError::NoFilesToMerge);
        }

        let merge_start = Instant::now();

        let mut loaded_pdfs = Vec::with_capacity(inputs.len());
        for path in inputs {
            loaded_pdfs.push(self.reader.load(path).await?);
        }
        let load_time = merge_start.elapsed();

        let input_size = loaded_pdfs.iter().map(|p| p.file_size).sum();
        let merged_files = loaded_pdfs.iter().map(|p| p.path.clone()).collect();

        let document = self.merge_documents(loaded_pdfs)?;

        let statistics = MergeStatistics {
            files_merged: inputs.len(),
            total_pages: document.get_pages().len(),
            merge_time: merge_start.elapsed(),
            load_time,
            input_size,
        };

        Ok(MergeResult {
            document,
            statistics,
            merged_files,
        })
    }

    /// Concatenate already-loaded documents.
    fn merge_documents(&self, loaded_pdfs: Vec<LoadedPdf>) -> Result<Document> {
        let mut loaded = loaded_pdfs.into_iter();
        let first = loaded.next().ok_or(PropdfError::NoFilesToMerge)?;

        let mut merged = first.document;
        let mut subtrees = vec![(pages_root(&merged)?, first.page_count)];
        let mut max_id = merged.max_id;

        for pdf in loaded {
            let mut doc = pdf.document;

            // Renumber objects to avoid ID conflicts
            doc.renumber_objects_with(max_id + 1);
            max_id = doc.max_id;

            let subtree = pages_root(&doc)?;
            if let Ok(catalog_id) = doc.trailer.get(b"Root").and_then(Object::as_reference) {
                doc.objects.remove(&catalog_id);
            }

            merged.objects.extend(doc.objects);
            subtrees.push((subtree, pdf.page_count));
        }
        merged.max_id = max_id;

        let root_id = merged.new_object_id();
        let total: usize = subtrees.iter().map(|(_, count)| count).sum();
        let kids = subtrees
            .iter()
            .map(|&(id, _)| Object::Reference(id))
            .collect::<Vec<_>>();

        for &(subtree_id, _) in &subtrees {
            match merged.get_object_mut(subtree_id) {
                Ok(Object::Dictionary(dict)) => dict.set("Parent", root_id),
                _ => return Err(PropdfError::merge_failed("Pages object is not a dictionary")),
            }
        }

        merged.objects.insert(
            root_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => total as i64,
            }),
        );

        merged
            .catalog_mut()
            .map_err(|e| PropdfError::merge_failed(format!("Failed to get catalog: {e}")))?
            .set("Pages", root_id);

        // Always renumber for consistency
        merged.renumber_objects();

        Ok(merged)
    }
}

/// Object id of a document's root `Pages` node.
fn pages_root(doc: &Document) -> Result<ObjectId> {
    doc.catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|e| PropdfError::merge_failed(format!("Failed to get pages reference: {e}")))
}
