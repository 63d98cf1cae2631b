use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    Active,
    Inactive,
}

/// A partner organization listed on the public partners page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub partner_type: String,
    pub website: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub status: PartnerStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerCreateInput {
    pub name: String,
    #[serde(rename = "type")]
    pub partner_type: String,
    pub website: String,
    pub description: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub status: PartnerStatus,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub partner_type: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: Option<PartnerStatus>,
}

impl PartnerPatch {
    pub fn apply(self, partner: &mut Partner) {
        if let Some(name) = self.name {
            partner.name = name;
        }
        if let Some(t) = self.partner_type {
            partner.partner_type = t;
        }
        if let Some(website) = self.website {
            partner.website = website;
        }
        if let Some(description) = self.description {
            partner.description = description;
        }
        if self.logo.is_some() {
            partner.logo = self.logo;
        }
        if self.email.is_some() {
            partner.email = self.email;
        }
        if self.phone.is_some() {
            partner.phone = self.phone;
        }
        if self.address.is_some() {
            partner.address = self.address;
        }
        if let Some(status) = self.status {
            partner.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_round_trips() {
        let now = Utc::now();
        let partner = Partner {
            id: Uuid::new_v4(),
            name: "Craft Council".into(),
            partner_type: "ngo".into(),
            website: "https://example.org".into(),
            description: "Supports local artisans".into(),
            logo: None,
            email: None,
            phone: None,
            address: None,
            status: PartnerStatus::Active,
            created_at: now,
            updated_at: now,
        };
        let v = serde_json::to_value(&partner).expect("serialize");
        assert_eq!(v["type"], "ngo");
        assert_eq!(v["status"], "active");
        let back: Partner = serde_json::from_value(v).expect("deserialize");
        assert_eq!(back, partner);
    }
}
