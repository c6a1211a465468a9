pub mod active_campaign_client;

pub use active_campaign_client::{ActiveCampaignClient, ActiveCampaignConfig};
