//! Domain data types for the lead-generation pipeline.

pub mod config;
pub mod contact;
pub mod district;

pub use config::{CampaignRouting, EnrichmentConfig, ResolverConfig};
pub use contact::{ContactChannels, ContactRecord, Persona, PersonStub};
pub use district::{domain_from_url, normalize_name, DistrictRecord};
