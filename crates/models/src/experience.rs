use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pricing block for an experience. Group bookings are billed per head at
/// `group_price`; private bookings at `private_price` when set. The group
/// size bounds are informational only and not enforced at booking time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_group_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_group_size: Option<u32>,
}

impl Pricing {
    pub fn merge_from(&mut self, patch: Pricing) {
        if patch.group_price.is_some() {
            self.group_price = patch.group_price;
        }
        if patch.private_price.is_some() {
            self.private_price = patch.private_price;
        }
        if patch.min_group_size.is_some() {
            self.min_group_size = patch.min_group_size;
        }
        if patch.max_group_size.is_some() {
            self.max_group_size = patch.max_group_size;
        }
    }
}

/// The artisan hosting an experience.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artisan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Artisan {
    pub fn merge_from(&mut self, patch: Artisan) {
        if patch.name.is_some() {
            self.name = patch.name;
        }
        if patch.bio.is_some() {
            self.bio = patch.bio;
        }
        if patch.image.is_some() {
            self.image = patch.image;
        }
    }
}

/// A bookable experience shown on the public site and managed in the
/// back-office.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Pricing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artisan: Option<Artisan>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an experience. id and timestamps are server-assigned.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceCreateInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub pricing: Option<Pricing>,
    #[serde(default)]
    pub artisan: Option<Artisan>,
}

/// Partial update. `pricing` and `artisan` are deep-merged against the
/// stored sub-objects; everything else replaces the stored value when
/// present.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub pricing: Option<Pricing>,
    #[serde(default)]
    pub artisan: Option<Artisan>,
}

impl ExperiencePatch {
    pub fn apply(self, experience: &mut Experience) {
        if let Some(title) = self.title {
            experience.title = title;
        }
        if let Some(description) = self.description {
            experience.description = description;
        }
        if let Some(images) = self.images {
            experience.images = images;
        }
        if self.duration.is_some() {
            experience.duration = self.duration;
        }
        if self.schedule.is_some() {
            experience.schedule = self.schedule;
        }
        if let Some(pricing) = self.pricing {
            experience.pricing.get_or_insert_with(Pricing::default).merge_from(pricing);
        }
        if let Some(artisan) = self.artisan {
            experience.artisan.get_or_insert_with(Artisan::default).merge_from(artisan);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Experience {
        let now = Utc::now();
        Experience {
            id: Uuid::new_v4(),
            title: "Pottery workshop".into(),
            description: "Hands-on clay work in the medina".into(),
            images: vec!["pottery.jpg".into()],
            duration: Some("2h".into()),
            schedule: None,
            pricing: Some(Pricing {
                group_price: Some(50.0),
                max_group_size: Some(10),
                ..Default::default()
            }),
            artisan: Some(Artisan { name: Some("Salah".into()), ..Default::default() }),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn patch_deep_merges_pricing() {
        let mut exp = sample();
        ExperiencePatch {
            pricing: Some(Pricing { group_price: Some(60.0), ..Default::default() }),
            ..Default::default()
        }
        .apply(&mut exp);

        let pricing = exp.pricing.expect("pricing kept");
        assert_eq!(pricing.group_price, Some(60.0));
        assert_eq!(pricing.max_group_size, Some(10));
    }

    #[test]
    fn patch_deep_merges_artisan_and_keeps_scalars() {
        let mut exp = sample();
        ExperiencePatch {
            title: Some("Pottery masterclass".into()),
            artisan: Some(Artisan { bio: Some("Third-generation potter".into()), ..Default::default() }),
            ..Default::default()
        }
        .apply(&mut exp);

        assert_eq!(exp.title, "Pottery masterclass");
        assert_eq!(exp.description, "Hands-on clay work in the medina");
        let artisan = exp.artisan.expect("artisan kept");
        assert_eq!(artisan.name.as_deref(), Some("Salah"));
        assert_eq!(artisan.bio.as_deref(), Some("Third-generation potter"));
    }

    #[test]
    fn patch_creates_missing_sub_object() {
        let mut exp = sample();
        exp.pricing = None;
        ExperiencePatch {
            pricing: Some(Pricing { private_price: Some(120.0), ..Default::default() }),
            ..Default::default()
        }
        .apply(&mut exp);
        assert_eq!(exp.pricing.unwrap().private_price, Some(120.0));
    }

    #[test]
    fn json_uses_camel_case() {
        let exp = sample();
        let v = serde_json::to_value(&exp).expect("serialize");
        assert!(v.get("createdAt").is_some());
        assert_eq!(v["pricing"]["groupPrice"], 50.0);
        assert!(v["pricing"].get("privatePrice").is_none());
    }
}
