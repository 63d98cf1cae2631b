use std::sync::Arc;

use configs::AppConfig;
use service::mailer::{LogMailer, Mailer, SmtpMailer};
use service::services::experience_service::ExperienceService;
use service::services::member_service::MemberService;
use service::services::partner_service::PartnerService;
use service::services::team_member_service::TeamMemberService;
use service::storage::DocumentStore;
use tracing::{info, warn};

/// Shared handler state: one service per entity, plus the mailer for the
/// generic `/email` relay. Built once at startup from the config; nothing
/// here is a process-global.
#[derive(Clone)]
pub struct ServerState {
    pub experiences: Arc<ExperienceService>,
    pub members: Arc<MemberService>,
    pub partners: Arc<PartnerService>,
    pub team_members: Arc<TeamMemberService>,
    pub mailer: Arc<dyn Mailer>,
}

impl ServerState {
    /// Open the document store and wire every service against it.
    pub async fn initialize(cfg: &AppConfig) -> anyhow::Result<Self> {
        let store = DocumentStore::new(&cfg.storage.data_dir);

        let mailer: Arc<dyn Mailer> = if cfg.smtp.is_configured() {
            info!(host = %cfg.smtp.host, port = cfg.smtp.port, "using smtp mailer");
            Arc::new(SmtpMailer::from_config(&cfg.smtp)?)
        } else {
            warn!("smtp not configured; outbound email will only be logged");
            Arc::new(LogMailer)
        };

        let experiences =
            ExperienceService::new(&store, Arc::clone(&mailer), cfg.smtp.admin_email.clone())
                .await?;
        let members = MemberService::new(&store).await?;
        let partners = PartnerService::new(&store).await?;
        let team_members = TeamMemberService::new(&store).await?;

        Ok(Self { experiences, members, partners, team_members, mailer })
    }
}
