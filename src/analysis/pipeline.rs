//! Document-level analysis pipeline.
//!
//! Single-threaded from the caller's perspective: validate once, scan
//! declarations once, quantize pages in parallel, merge. Pages are
//! independent until the merge, which is a commutative sum of counts by
//! hex, so per-page ordering does not affect the result.

use rayon::prelude::*;

use crate::analysis::{aggregate, colorspace, quantizer};
use crate::error::AnalysisError;
use crate::models::{AnalysisOptions, ColorCluster, DocumentPalette, RasterPage};

/// Extract the document-level palette from rendered pages and declared
/// colorspace resources.
///
/// Pages are consumed; each raster is dropped as soon as its clustering
/// finishes. A page whose clustering fails contributes no clusters and
/// is logged, never aborting the document; only argument validation is
/// surfaced to the caller.
pub fn analyze_document(
    pages: Vec<RasterPage>,
    declared: &[Vec<String>],
    options: &AnalysisOptions,
) -> Result<DocumentPalette, AnalysisError> {
    options.validate()?;

    let spaces = colorspace::scan(declared);
    let page_total = pages.len();

    let per_page: Vec<Vec<ColorCluster>> = pages
        .into_par_iter()
        .enumerate()
        .map(|(page_index, page)| {
            match quantizer::quantize(&page.pixels, options.max_colors, options.white_threshold) {
                Ok(clusters) => clusters,
                Err(e) => {
                    tracing::warn!(
                        page = page_index,
                        error = %e,
                        "page clustering failed; page contributes no clusters"
                    );
                    Vec::new()
                }
            }
        })
        .collect();

    let colors = aggregate::aggregate(&per_page, &spaces);
    tracing::info!(
        pages = page_total,
        colors = colors.len(),
        spot_names = spaces.spot_names.len(),
        "document palette extracted"
    );

    Ok(DocumentPalette {
        declared_color_spaces: spaces.declared_spaces.iter().cloned().collect(),
        detected_spot_colors: spaces.spot_names.iter().cloned().collect(),
        total_colors: colors.len(),
        colors,
    })
}
