use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use models::team_member::{TeamMember, TeamMemberCreateInput, TeamMemberPatch};

use crate::errors::ServiceError;
use crate::storage::{Collection, DocumentStore};

/// CRUD over the team roster. Kept separate from `MemberService` because the
/// back-office manages the two directories independently.
pub struct TeamMemberService {
    team_members: Arc<Collection<TeamMember>>,
}

impl TeamMemberService {
    pub async fn new(store: &DocumentStore) -> Result<Arc<Self>, ServiceError> {
        let team_members = store.collection::<TeamMember>("team_members").await?;
        Ok(Arc::new(Self { team_members }))
    }

    /// Newest first, matching the admin listing.
    pub async fn list(&self) -> Vec<TeamMember> {
        let mut members = self.team_members.list().await;
        members.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        members
    }

    pub async fn get(&self, id: Uuid) -> Result<TeamMember, ServiceError> {
        self.team_members
            .get(&id)
            .await
            .ok_or_else(|| ServiceError::not_found("team member"))
    }

    pub async fn create(&self, input: TeamMemberCreateInput) -> Result<TeamMember, ServiceError> {
        let now = Utc::now();
        let member = TeamMember {
            id: Uuid::new_v4(),
            name: input.name,
            position: input.position,
            email: input.email,
            image: input.image,
            social_media: input.social_media,
            created_at: now,
            updated_at: now,
        };
        self.team_members.insert(member.id, member.clone()).await?;
        Ok(member)
    }

    pub async fn update(&self, id: Uuid, patch: TeamMemberPatch) -> Result<TeamMember, ServiceError> {
        self.team_members
            .modify(|map| {
                let member =
                    map.get_mut(&id).ok_or_else(|| ServiceError::not_found("team member"))?;
                patch.apply(member);
                member.updated_at = Utc::now();
                Ok(member.clone())
            })
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.team_members.remove(&id).await? {
            return Err(ServiceError::not_found("team member"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::social::SocialMedia;

    use crate::test_support::temp_store;

    #[tokio::test]
    async fn crud_round_trip() {
        let store = temp_store();
        let svc = TeamMemberService::new(&store).await.expect("init");

        let created = svc
            .create(TeamMemberCreateInput {
                name: "Youssef".into(),
                position: "Guide".into(),
                email: "youssef@mdinti.org".into(),
                image: "youssef.jpg".into(),
                social_media: SocialMedia::default(),
            })
            .await
            .expect("create");

        let updated = svc
            .update(
                created.id,
                TeamMemberPatch { image: Some("youssef-2.jpg".into()), ..Default::default() },
            )
            .await
            .expect("update");
        assert_eq!(updated.image, "youssef-2.jpg");
        assert_eq!(updated.name, "Youssef");

        svc.delete(created.id).await.expect("delete");
        assert!(matches!(svc.get(created.id).await, Err(ServiceError::NotFound(_))));
    }
}
