use serde::{Deserialize, Serialize};

/// Social-media links attached to member profiles. All fields optional;
/// doubles as its own patch since a merge is per-field anyway.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialMedia {
    /// Per-field merge: a link present in `patch` wins, an absent one stays.
    pub fn merge_from(&mut self, patch: SocialMedia) {
        if patch.facebook.is_some() {
            self.facebook = patch.facebook;
        }
        if patch.twitter.is_some() {
            self.twitter = patch.twitter;
        }
        if patch.instagram.is_some() {
            self.instagram = patch.instagram;
        }
        if patch.linkedin.is_some() {
            self.linkedin = patch.linkedin;
        }
        if patch.website.is_some() {
            self.website = patch.website;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_unmentioned_links() {
        let mut links = SocialMedia {
            facebook: Some("fb/mdinti".into()),
            instagram: Some("ig/mdinti".into()),
            ..Default::default()
        };
        links.merge_from(SocialMedia { instagram: Some("ig/new".into()), ..Default::default() });
        assert_eq!(links.facebook.as_deref(), Some("fb/mdinti"));
        assert_eq!(links.instagram.as_deref(), Some("ig/new"));
        assert!(links.website.is_none());
    }
}
