use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reservation status. Any value can be admin-set directly; no transition
/// is gated by a business rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// Contact details supplied by the guest on the public booking form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A priced, persisted reservation against an experience.
///
/// `total_price` is computed server-side from the referenced experience's
/// pricing at creation time and is never re-derived afterwards; later price
/// edits on the experience do not propagate to existing bookings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub experience_id: Uuid,
    pub guest_info: GuestInfo,
    pub date: DateTime<Utc>,
    pub time: String,
    pub number_of_people: u32,
    pub is_private: bool,
    pub total_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Guest-facing booking request. The price is not part of the input; it is
/// recomputed server-side regardless of what the client believes it owes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreateInput {
    pub experience_id: Uuid,
    pub guest_info: GuestInfo,
    pub date: DateTime<Utc>,
    pub time: String,
    pub number_of_people: u32,
    pub is_private: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestInfoPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Admin-side partial update. `guest_info` merges field-by-field.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    #[serde(default)]
    pub guest_info: Option<GuestInfoPatch>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub number_of_people: Option<u32>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: Option<BookingStatus>,
}

impl BookingPatch {
    pub fn apply(self, booking: &mut Booking) {
        if let Some(guest) = self.guest_info {
            if let Some(name) = guest.name {
                booking.guest_info.name = name;
            }
            if let Some(email) = guest.email {
                booking.guest_info.email = email;
            }
            if let Some(phone) = guest.phone {
                booking.guest_info.phone = phone;
            }
        }
        if let Some(date) = self.date {
            booking.date = date;
        }
        if let Some(time) = self.time {
            booking.time = time;
        }
        if let Some(n) = self.number_of_people {
            booking.number_of_people = n;
        }
        if let Some(p) = self.is_private {
            booking.is_private = p;
        }
        if let Some(total) = self.total_price {
            booking.total_price = total;
        }
        if self.notes.is_some() {
            booking.notes = self.notes;
        }
        if let Some(status) = self.status {
            booking.status = status;
        }
    }
}
