use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use models::booking::{Booking, BookingCreateInput, BookingPatch, BookingStatus};
use models::experience::{Experience, ExperienceCreateInput, ExperiencePatch, Pricing};

use crate::errors::ServiceError;
use crate::mailer::Mailer;
use crate::storage::{Collection, DocumentStore};

/// Experiences plus their bookings. The booking workflow lives here because
/// it is the one cross-entity operation: it reads the experience to price
/// the reservation before persisting it.
pub struct ExperienceService {
    experiences: Arc<Collection<Experience>>,
    bookings: Arc<Collection<Booking>>,
    mailer: Arc<dyn Mailer>,
    admin_email: String,
}

/// Per-head price per the booking type. Private bookings fall back to the
/// group price when no private price is set; a missing pricing block prices
/// at zero.
fn quote_total(pricing: Option<&Pricing>, number_of_people: u32, is_private: bool) -> f64 {
    let per_head = match pricing {
        Some(p) if is_private => p.private_price.or(p.group_price).unwrap_or(0.0),
        Some(p) => p.group_price.unwrap_or(0.0),
        None => 0.0,
    };
    per_head * f64::from(number_of_people)
}

impl ExperienceService {
    pub async fn new(
        store: &DocumentStore,
        mailer: Arc<dyn Mailer>,
        admin_email: String,
    ) -> Result<Arc<Self>, ServiceError> {
        let experiences = store.collection::<Experience>("experiences").await?;
        let bookings = store.collection::<Booking>("bookings").await?;
        Ok(Arc::new(Self { experiences, bookings, mailer, admin_email }))
    }

    pub async fn list(&self) -> Vec<Experience> {
        let mut experiences = self.experiences.list().await;
        experiences.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        experiences
    }

    pub async fn get(&self, id: Uuid) -> Result<Experience, ServiceError> {
        self.experiences
            .get(&id)
            .await
            .ok_or_else(|| ServiceError::not_found("experience"))
    }

    pub async fn create(&self, input: ExperienceCreateInput) -> Result<Experience, ServiceError> {
        let now = Utc::now();
        let experience = Experience {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            images: input.images,
            duration: input.duration,
            schedule: input.schedule,
            pricing: input.pricing,
            artisan: input.artisan,
            created_at: now,
            updated_at: now,
        };
        self.experiences.insert(experience.id, experience.clone()).await?;
        Ok(experience)
    }

    /// Patch an experience. `pricing` and `artisan` merge field-by-field
    /// against the stored sub-objects.
    pub async fn update(&self, id: Uuid, patch: ExperiencePatch) -> Result<Experience, ServiceError> {
        self.experiences
            .modify(|map| {
                let experience =
                    map.get_mut(&id).ok_or_else(|| ServiceError::not_found("experience"))?;
                patch.apply(experience);
                experience.updated_at = Utc::now();
                Ok(experience.clone())
            })
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.experiences.remove(&id).await? {
            return Err(ServiceError::not_found("experience"));
        }
        Ok(())
    }

    // Booking workflow

    /// Turn a guest's reservation request into a priced, persisted booking
    /// and notify both the admin and the guest.
    ///
    /// The insert and the two sequential email sends are not atomic: a
    /// failing send fails the call while the booking stays persisted.
    pub async fn create_booking(&self, input: BookingCreateInput) -> Result<Booking, ServiceError> {
        let experience = self.get(input.experience_id).await?;

        let total_price =
            quote_total(experience.pricing.as_ref(), input.number_of_people, input.is_private);

        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            experience_id: input.experience_id,
            guest_info: input.guest_info,
            date: input.date,
            time: input.time,
            number_of_people: input.number_of_people,
            is_private: input.is_private,
            total_price,
            notes: input.notes,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.bookings.insert(booking.id, booking.clone()).await?;
        info!(booking_id = %booking.id, experience_id = %booking.experience_id, total_price, "booking persisted");

        self.mailer
            .send(
                &self.admin_email,
                "New Experience Booking",
                &admin_notification_html(&experience, &booking),
            )
            .await?;
        self.mailer
            .send(
                &booking.guest_info.email,
                "Booking Confirmation - mdinti",
                &guest_confirmation_html(&experience, &booking),
            )
            .await?;

        Ok(booking)
    }

    pub async fn bookings_by_email(&self, email: &str) -> Vec<Booking> {
        let mut bookings = self.bookings.find(|b| b.guest_info.email == email).await;
        bookings.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        bookings
    }

    pub async fn bookings_by_experience(&self, experience_id: Uuid) -> Vec<Booking> {
        let mut bookings = self.bookings.find(|b| b.experience_id == experience_id).await;
        bookings.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        bookings
    }

    pub async fn update_booking(&self, id: Uuid, patch: BookingPatch) -> Result<Booking, ServiceError> {
        self.bookings
            .modify(|map| {
                let booking = map.get_mut(&id).ok_or_else(|| ServiceError::not_found("booking"))?;
                patch.apply(booking);
                booking.updated_at = Utc::now();
                Ok(booking.clone())
            })
            .await
    }

    /// Status transition only: the record is kept, no re-notification is
    /// sent.
    pub async fn cancel_booking(&self, id: Uuid) -> Result<(), ServiceError> {
        self.bookings
            .modify(|map| {
                let booking = map.get_mut(&id).ok_or_else(|| ServiceError::not_found("booking"))?;
                booking.status = BookingStatus::Cancelled;
                booking.updated_at = Utc::now();
                Ok(())
            })
            .await
    }
}

fn booking_type_label(booking: &Booking) -> &'static str {
    if booking.is_private {
        "Private"
    } else {
        "Group"
    }
}

fn admin_notification_html(experience: &Experience, booking: &Booking) -> String {
    let notes = match &booking.notes {
        Some(notes) => format!("<p><strong>Notes:</strong> {notes}</p>"),
        None => String::new(),
    };
    format!(
        "<h2>New Booking Request</h2>\
         <p><strong>Experience:</strong> {title}</p>\
         <p><strong>Guest Name:</strong> {name}</p>\
         <p><strong>Email:</strong> {email}</p>\
         <p><strong>Phone:</strong> {phone}</p>\
         <p><strong>Date:</strong> {date}</p>\
         <p><strong>Number of People:</strong> {people}</p>\
         <p><strong>Type:</strong> {kind}</p>\
         <p><strong>Total Price:</strong> {total} TND</p>\
         {notes}",
        title = experience.title,
        name = booking.guest_info.name,
        email = booking.guest_info.email,
        phone = booking.guest_info.phone,
        date = booking.date.format("%Y-%m-%d"),
        people = booking.number_of_people,
        kind = booking_type_label(booking),
        total = booking.total_price,
        notes = notes,
    )
}

fn guest_confirmation_html(experience: &Experience, booking: &Booking) -> String {
    format!(
        "<h2>Thank you for your booking!</h2>\
         <p>We have received your booking request for {title}.</p>\
         <p>Booking Details:</p>\
         <ul>\
         <li>Date: {date}</li>\
         <li>Number of People: {people}</li>\
         <li>Type: {kind}</li>\
         <li>Total Price: {total} TND</li>\
         </ul>\
         <p>We will contact you shortly to confirm your booking.</p>\
         <p>Best regards,<br>The mdinti Team</p>",
        title = experience.title,
        date = booking.date.format("%Y-%m-%d"),
        people = booking.number_of_people,
        kind = booking_type_label(booking),
        total = booking.total_price,
    )
}
