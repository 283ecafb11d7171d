//! Location providers

use super::LocationQuery;
use url::Url;

/// Location fixed at construction, e.g. from a `--location` flag
#[derive(Debug, Clone)]
pub struct StaticLocation {
    url: Url,
}

impl StaticLocation {
    /// Parse a full URL or a bare query string such as `?ref=0x...`
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        let input = input.trim();
        let url = match Url::parse(input) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = Url::parse("http://localhost/")?;
                let relative = if input.starts_with('?') {
                    input.to_string()
                } else {
                    format!("?{input}")
                };
                base.join(&relative)?
            }
            Err(e) => return Err(e),
        };
        Ok(Self { url })
    }

    /// Underlying URL
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl LocationQuery for StaticLocation {
    fn get(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

/// No location at all (headless use)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationQuery for NoLocation {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}
