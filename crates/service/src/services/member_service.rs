use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use models::member::{Member, MemberCreateInput, MemberPatch};

use crate::errors::ServiceError;
use crate::storage::{Collection, DocumentStore};

/// CRUD over the members directory.
pub struct MemberService {
    members: Arc<Collection<Member>>,
}

impl MemberService {
    pub async fn new(store: &DocumentStore) -> Result<Arc<Self>, ServiceError> {
        let members = store.collection::<Member>("members").await?;
        Ok(Arc::new(Self { members }))
    }

    /// Newest first, matching the admin listing.
    pub async fn list(&self) -> Vec<Member> {
        let mut members = self.members.list().await;
        members.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        members
    }

    pub async fn get(&self, id: Uuid) -> Result<Member, ServiceError> {
        self.members.get(&id).await.ok_or_else(|| ServiceError::not_found("member"))
    }

    pub async fn create(&self, input: MemberCreateInput) -> Result<Member, ServiceError> {
        let now = Utc::now();
        let member = Member {
            id: Uuid::new_v4(),
            name: input.name,
            position: input.position,
            email: input.email,
            image: input.image,
            social_media: input.social_media,
            created_at: now,
            updated_at: now,
        };
        self.members.insert(member.id, member.clone()).await?;
        Ok(member)
    }

    pub async fn update(&self, id: Uuid, patch: MemberPatch) -> Result<Member, ServiceError> {
        self.members
            .modify(|map| {
                let member = map.get_mut(&id).ok_or_else(|| ServiceError::not_found("member"))?;
                patch.apply(member);
                member.updated_at = Utc::now();
                Ok(member.clone())
            })
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.members.remove(&id).await? {
            return Err(ServiceError::not_found("member"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::social::SocialMedia;

    use crate::test_support::temp_store;

    fn input(name: &str) -> MemberCreateInput {
        MemberCreateInput {
            name: name.into(),
            position: "Coordinator".into(),
            email: format!("{}@mdinti.org", name.to_lowercase()),
            image: "avatar.jpg".into(),
            social_media: SocialMedia { facebook: Some("fb/mdinti".into()), ..Default::default() },
        }
    }

    #[tokio::test]
    async fn crud_with_social_media_merge() {
        let store = temp_store();
        let svc = MemberService::new(&store).await.expect("init");

        let created = svc.create(input("Leila")).await.expect("create");
        assert_eq!(svc.get(created.id).await.expect("get").name, "Leila");

        let updated = svc
            .update(
                created.id,
                MemberPatch {
                    position: Some("Director".into()),
                    social_media: Some(SocialMedia {
                        twitter: Some("@leila".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            )
            .await
            .expect("update");
        assert_eq!(updated.position, "Director");
        assert_eq!(updated.social_media.facebook.as_deref(), Some("fb/mdinti"));
        assert_eq!(updated.social_media.twitter.as_deref(), Some("@leila"));

        svc.delete(created.id).await.expect("delete");
        assert!(matches!(svc.delete(created.id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = temp_store();
        let svc = MemberService::new(&store).await.expect("init");
        svc.create(input("First")).await.expect("create");
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        svc.create(input("Second")).await.expect("create");

        let listed = svc.list().await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Second");
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = temp_store();
        let svc = MemberService::new(&store).await.expect("init");
        assert!(matches!(svc.get(Uuid::new_v4()).await, Err(ServiceError::NotFound(_))));
    }
}
