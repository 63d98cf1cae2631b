pub mod experience_service;
pub mod member_service;
pub mod partner_service;
pub mod team_member_service;
