pub mod brand;
pub mod config;
pub mod palette;
pub mod verdict;

pub use brand::{BrandPaletteEntry, BrandSpec, FontUsage};
pub use config::AnalysisOptions;
pub use palette::{AggregatedColor, ColorCluster, ColorSpaceInfo, DocumentPalette, RasterPage};
pub use verdict::{
    ApprovedColor, ApprovedFont, ColorVerdict, ComplianceStatus, DocumentVerdict, FontVerdict,
    NonCompliantColor, NonCompliantFont, SimilarColor,
};
