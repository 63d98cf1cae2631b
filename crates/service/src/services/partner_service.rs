use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use models::partner::{Partner, PartnerCreateInput, PartnerPatch};

use crate::errors::ServiceError;
use crate::storage::{Collection, DocumentStore};

/// CRUD over partner organizations.
pub struct PartnerService {
    partners: Arc<Collection<Partner>>,
}

impl PartnerService {
    pub async fn new(store: &DocumentStore) -> Result<Arc<Self>, ServiceError> {
        let partners = store.collection::<Partner>("partners").await?;
        Ok(Arc::new(Self { partners }))
    }

    /// Newest first, matching the admin listing.
    pub async fn list(&self) -> Vec<Partner> {
        let mut partners = self.partners.list().await;
        partners.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        partners
    }

    pub async fn get(&self, id: Uuid) -> Result<Partner, ServiceError> {
        self.partners.get(&id).await.ok_or_else(|| ServiceError::not_found("partner"))
    }

    pub async fn create(&self, input: PartnerCreateInput) -> Result<Partner, ServiceError> {
        let now = Utc::now();
        let partner = Partner {
            id: Uuid::new_v4(),
            name: input.name,
            partner_type: input.partner_type,
            website: input.website,
            description: input.description,
            logo: input.logo,
            email: input.email,
            phone: input.phone,
            address: input.address,
            status: input.status,
            created_at: now,
            updated_at: now,
        };
        self.partners.insert(partner.id, partner.clone()).await?;
        Ok(partner)
    }

    pub async fn update(&self, id: Uuid, patch: PartnerPatch) -> Result<Partner, ServiceError> {
        self.partners
            .modify(|map| {
                let partner = map.get_mut(&id).ok_or_else(|| ServiceError::not_found("partner"))?;
                patch.apply(partner);
                partner.updated_at = Utc::now();
                Ok(partner.clone())
            })
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.partners.remove(&id).await? {
            return Err(ServiceError::not_found("partner"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::partner::PartnerStatus;

    use crate::test_support::temp_store;

    fn input() -> PartnerCreateInput {
        PartnerCreateInput {
            name: "Craft Council".into(),
            partner_type: "ngo".into(),
            website: "https://example.org".into(),
            description: "Supports local artisans".into(),
            logo: None,
            email: Some("hello@example.org".into()),
            phone: None,
            address: None,
            status: PartnerStatus::Active,
        }
    }

    #[tokio::test]
    async fn crud_and_status_flip() {
        let store = temp_store();
        let svc = PartnerService::new(&store).await.expect("init");

        let created = svc.create(input()).await.expect("create");
        assert_eq!(created.status, PartnerStatus::Active);

        let updated = svc
            .update(
                created.id,
                PartnerPatch { status: Some(PartnerStatus::Inactive), ..Default::default() },
            )
            .await
            .expect("update");
        assert_eq!(updated.status, PartnerStatus::Inactive);
        assert_eq!(updated.email.as_deref(), Some("hello@example.org"));

        svc.delete(created.id).await.expect("delete");
        assert!(matches!(svc.delete(created.id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = temp_store();
        let svc = PartnerService::new(&store).await.expect("init");
        let res = svc.update(Uuid::new_v4(), PartnerPatch::default()).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
    }
}
