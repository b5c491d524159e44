// crates/locpage-core/src/page/links.rs
use crate::text::{dashed_slug, plus_join};

/// Builds absolute links for one tenant's apex domain.
#[derive(Debug, Clone)]
pub struct Links<'a> {
    pub scheme: &'a str,
    pub apex: &'a str,
}

impl Links<'_> {
    /// `https://tx.example.com`
    pub fn state(&self, code: &str) -> String {
        format!("{}://{}.{}", self.scheme, code.to_ascii_lowercase(), self.apex)
    }

    /// `https://plumbing-san-antonio-tx.example.com`, or the legacy
    /// `https://san-antonio-tx.example.com` without a service label.
    pub fn city(&self, service_label: Option<&str>, city: &str, state: &str) -> String {
        let city = dashed_slug(city);
        let state = state.to_ascii_lowercase();
        match service_label {
            Some(label) => format!("{}://{label}-{city}-{state}.{}", self.scheme, self.apex),
            None => format!("{}://{city}-{state}.{}", self.scheme, self.apex),
        }
    }

    /// `https://<host>/<slug>`
    pub fn service(&self, host: &str, slug: &str) -> String {
        format!("{}://{host}/{}", self.scheme, slug.trim_matches('/'))
    }

    pub fn canonical(&self, host: &str, path: &str) -> String {
        format!("{}://{host}{path}", self.scheme)
    }
}

pub fn map_embed(city: &str, state_name: &str) -> String {
    format!(
        "https://www.google.com/maps?q={},{},US&output=embed",
        city.replace(' ', "+"),
        state_name.replace(' ', "+")
    )
}

pub fn neighborhood_map(neighborhood: &str, city: &str, state_name: &str) -> String {
    format!(
        "https://www.google.com/maps/place/{}+{}+{}",
        plus_join(neighborhood),
        plus_join(city),
        plus_join(state_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINKS: Links<'static> = Links {
        scheme: "https",
        apex: "example.com",
    };

    #[test]
    fn host_links() {
        assert_eq!(LINKS.state("TX"), "https://tx.example.com");
        assert_eq!(
            LINKS.city(Some("plumbing"), "San Antonio", "TX"),
            "https://plumbing-san-antonio-tx.example.com"
        );
        assert_eq!(LINKS.city(None, "Austin", "tx"), "https://austin-tx.example.com");
        assert_eq!(
            LINKS.service("plumbing-austin-tx.example.com", "/drain-cleaning/"),
            "https://plumbing-austin-tx.example.com/drain-cleaning"
        );
    }

    #[test]
    fn map_links() {
        assert_eq!(
            map_embed("San Antonio", "Texas"),
            "https://www.google.com/maps?q=San+Antonio,Texas,US&output=embed"
        );
        assert_eq!(
            neighborhood_map("Alamo Heights", "San Antonio", "New Mexico"),
            "https://www.google.com/maps/place/Alamo+Heights+San+Antonio+New+Mexico"
        );
    }
}
