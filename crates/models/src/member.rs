use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::social::SocialMedia;

/// An organization member shown on the public members page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub email: String,
    pub image: String,
    #[serde(default)]
    pub social_media: SocialMedia,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreateInput {
    pub name: String,
    pub position: String,
    pub email: String,
    pub image: String,
    #[serde(default)]
    pub social_media: SocialMedia,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub social_media: Option<SocialMedia>,
}

impl MemberPatch {
    pub fn apply(self, member: &mut Member) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(position) = self.position {
            member.position = position;
        }
        if let Some(email) = self.email {
            member.email = email;
        }
        if let Some(image) = self.image {
            member.image = image;
        }
        if let Some(social) = self.social_media {
            member.social_media.merge_from(social);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_merges_social_media() {
        let now = Utc::now();
        let mut member = Member {
            id: Uuid::new_v4(),
            name: "Leila".into(),
            position: "Coordinator".into(),
            email: "leila@mdinti.org".into(),
            image: "leila.jpg".into(),
            social_media: SocialMedia { linkedin: Some("in/leila".into()), ..Default::default() },
            created_at: now,
            updated_at: now,
        };
        MemberPatch {
            position: Some("Director".into()),
            social_media: Some(SocialMedia { twitter: Some("@leila".into()), ..Default::default() }),
            ..Default::default()
        }
        .apply(&mut member);

        assert_eq!(member.position, "Director");
        assert_eq!(member.social_media.linkedin.as_deref(), Some("in/leila"));
        assert_eq!(member.social_media.twitter.as_deref(), Some("@leila"));
    }
}
