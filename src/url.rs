// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

/// Knows the URL being rendered and where static assets live.
pub trait UrlResolver {
    /// URL of the page currently being rendered.
    fn current(&self) -> String;
    /// Absolute URL of a static asset.
    fn asset(&self, path: &str) -> String;
}

/// A [`UrlResolver`] with a fixed current URL and asset base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticUrls {
    pub current: String,
    pub asset_base: String,
}

impl StaticUrls {
    pub fn new(current: impl Into<String>, asset_base: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            asset_base: asset_base.into(),
        }
    }
}

impl UrlResolver for StaticUrls {
    fn current(&self) -> String {
        self.current.clone()
    }

    fn asset(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.asset_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl<U: UrlResolver + ?Sized> UrlResolver for &U {
    fn current(&self) -> String {
        (**self).current()
    }

    fn asset(&self, path: &str) -> String {
        (**self).asset(path)
    }
}

#[cfg(test)]
mod test {
    use crate::url::{StaticUrls, UrlResolver};

    #[test]
    fn joins_with_one_slash() {
        let urls = StaticUrls::new("foo.com", "http://foo.com/assets/");

        assert_eq!(urls.current(), "foo.com");
        assert_eq!(urls.asset("app/img/logo.png"), "http://foo.com/assets/app/img/logo.png");
        assert_eq!(urls.asset("/img/a.png"), "http://foo.com/assets/img/a.png");
    }
}
