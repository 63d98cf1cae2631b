use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::social::SocialMedia;

/// A staff profile on the team roster. Same shape as `Member` but a separate
/// collection and route; the two directories are managed independently in
/// the back-office.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
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
pub struct TeamMemberCreateInput {
    pub name: String,
    pub position: String,
    pub email: String,
    pub image: String,
    #[serde(default)]
    pub social_media: SocialMedia,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberPatch {
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

impl TeamMemberPatch {
    pub fn apply(self, member: &mut TeamMember) {
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
