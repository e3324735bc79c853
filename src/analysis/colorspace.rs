//! Declared-colorspace scanning.
//!
//! Works on pre-parsed colorspace arrays (one `Vec<String>` per
//! declaration, first element the family discriminator). Extraction is
//! best-effort: malformed entries are skipped, never fatal, so a broken
//! declaration cannot abort document analysis.

use std::collections::BTreeSet;

use crate::models::ColorSpaceInfo;

/// Scan declared colorspace arrays for families and spot-color names.
///
/// Recognized families: `DeviceRGB`, `DeviceCMYK`, `DeviceGray`,
/// `ICCBased` and `Separation`. For a `Separation` array the spot name
/// is the second element with any leading `/` name marker stripped.
/// Output sets are deduplicated and sorted for determinism.
pub fn scan(declared: &[Vec<String>]) -> ColorSpaceInfo {
    let mut declared_spaces = BTreeSet::new();
    let mut spot_names = BTreeSet::new();

    for entry in declared {
        let Some(family) = entry.first() else {
            continue;
        };
        match strip_name_marker(family) {
            "DeviceRGB" => {
                declared_spaces.insert("RGB".to_string());
            }
            "DeviceCMYK" => {
                declared_spaces.insert("CMYK".to_string());
            }
            "DeviceGray" => {
                declared_spaces.insert("Gray".to_string());
            }
            "ICCBased" => {
                declared_spaces.insert("ICCBased".to_string());
            }
            "Separation" => {
                declared_spaces.insert("Separation".to_string());
                if let Some(raw) = entry.get(1) {
                    let name = strip_name_marker(raw);
                    if !name.is_empty() {
                        spot_names.insert(name.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    ColorSpaceInfo { declared_spaces, spot_names }
}

#[inline]
fn strip_name_marker(raw: &str) -> &str {
    raw.strip_prefix('/').unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_family_mapping() {
        let info = scan(&[
            decl(&["/DeviceRGB"]),
            decl(&["DeviceCMYK"]),
            decl(&["/DeviceGray"]),
            decl(&["/ICCBased", "21 0 R"]),
        ]);
        let spaces: Vec<&str> = info.declared_spaces.iter().map(String::as_str).collect();
        assert_eq!(spaces, vec!["CMYK", "Gray", "ICCBased", "RGB"]);
        assert!(info.spot_names.is_empty());
    }

    #[test]
    fn test_separation_spot_name_stripped() {
        let info = scan(&[decl(&["/Separation", "/PANTONE 485 C", "/DeviceCMYK"])]);
        assert!(info.declared_spaces.contains("Separation"));
        let names: Vec<&str> = info.spot_names.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["PANTONE 485 C"]);
    }

    #[test]
    fn test_malformed_entries_skipped_silently() {
        let info = scan(&[
            decl(&[]),                    // empty array
            decl(&["/Separation"]),       // missing spot name
            decl(&["/Separation", "/"]),  // empty spot name
            decl(&["/Pattern"]),          // unrecognized family
            decl(&["/DeviceRGB"]),
        ]);
        let spaces: Vec<&str> = info.declared_spaces.iter().map(String::as_str).collect();
        assert_eq!(spaces, vec!["RGB", "Separation"]);
        assert!(info.spot_names.is_empty());
    }

    #[test]
    fn test_output_deduplicated_and_sorted() {
        let info = scan(&[
            decl(&["/Separation", "/Zinc"]),
            decl(&["/Separation", "/Amber"]),
            decl(&["/Separation", "/Zinc"]),
            decl(&["/DeviceRGB"]),
            decl(&["/DeviceRGB"]),
        ]);
        let names: Vec<&str> = info.spot_names.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["Amber", "Zinc"]);
        assert_eq!(info.declared_spaces.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let info = scan(&[]);
        assert_eq!(info, ColorSpaceInfo::default());
    }
}
