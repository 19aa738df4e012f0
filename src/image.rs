// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::path::Path;

use relative_path::RelativePath;

/// Illustration used whenever a page has no usable image.
pub const PLACEHOLDER_ILLUSTRATION: &str = "app/img/logo.png";

/// Turn an image path into an absolute asset URL.
///
/// Empty paths, placeholder images, and paths that do not exist under
/// `public_root` are replaced by [`PLACEHOLDER_ILLUSTRATION`]. A missing file
/// is not an error, so a typo in a path silently yields the placeholder.
pub fn resolve<F>(image: Option<&str>, public_root: Option<&Path>, asset: F) -> String
where
    F: FnOnce(&str) -> String,
{
    let image = image.unwrap_or("");

    let usable = !image.is_empty()
        && !image.contains("placeholder")
        && RelativePath::new(image)
            .to_path(public_root.unwrap_or(Path::new(".")))
            .exists();

    if usable {
        return asset(image);
    }

    if !image.is_empty() && !image.contains("placeholder") {
        log::warn!(
            "Image `{}` not found under {:?}, using placeholder",
            image,
            public_root.unwrap_or(Path::new("."))
        );
    }

    asset(PLACEHOLDER_ILLUSTRATION)
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use crate::image::{resolve, PLACEHOLDER_ILLUSTRATION};

    fn asset(path: &str) -> String {
        format!("http://foo.com/assets/{}", path)
    }

    #[test]
    fn missing_image() {
        assert_eq!(
            resolve(None, None, asset),
            "http://foo.com/assets/app/img/logo.png"
        );
        assert_eq!(resolve(Some(""), Some(Path::new("data")), asset), asset(PLACEHOLDER_ILLUSTRATION));
    }

    #[test]
    fn existing_image() {
        let public = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(public.path().join("img")).unwrap();
        std::fs::write(public.path().join("img/cover.png"), b"png").unwrap();

        assert_eq!(
            resolve(Some("img/cover.png"), Some(public.path()), asset),
            "http://foo.com/assets/img/cover.png"
        );
    }

    #[test]
    fn typo_falls_back() {
        let public = tempfile::tempdir().unwrap();

        assert_eq!(
            resolve(Some("img/cvoer.png"), Some(public.path()), asset),
            asset(PLACEHOLDER_ILLUSTRATION)
        );
    }

    #[test]
    fn placeholder_is_replaced() {
        let public = tempfile::tempdir().unwrap();
        std::fs::write(public.path().join("placeholder.png"), b"png").unwrap();

        assert_eq!(
            resolve(Some("placeholder.png"), Some(public.path()), asset),
            asset(PLACEHOLDER_ILLUSTRATION)
        );
    }
}
