//! District lead-generation library.
//!
//! Builds a canonical directory of Texas school districts from multiple
//! unreliable, partially-overlapping sources, resolves each district's
//! website domain, enriches districts with named contacts, and routes the
//! resulting leads into outreach campaigns.
//!
//! # Pipeline
//!
//! ```text
//! sources → fusion → domain resolution → enrichment → sinks → push
//! ```
//!
//! Everything runs strictly sequentially. External calls are paced with a
//! fixed pause, failures are caught per item, and a single bad item never
//! aborts the batch.
//!
//! # Usage
//!
//! ```rust,ignore
//! use leadgen::pipeline::{discover_districts, finalize};
//! use leadgen::resolver::{DomainResolver, HttpProbe};
//! use leadgen::types::ResolverConfig;
//!
//! let resolver = DomainResolver::new(ResolverConfig::texas_defaults(), HttpProbe::default());
//! let mut districts = discover_districts(&sources, &resolver).await;
//! finalize(&mut districts, "TX");
//! ```
//!
//! # Modules
//!
//! - [`types`] - District, contact, and configuration data
//! - [`traits`] - External capability seams (sources, probe, search, push)
//! - [`fusion`] - Multi-source record fusion
//! - [`resolver`] - Best-effort domain resolution
//! - [`enrich`] - Contact enrichment and persona classification
//! - [`push`] - Campaign routing and push
//! - [`providers`] - Discovery source implementations
//! - [`sinks`] - CSV, JSON, and Postgres outputs
//! - [`live`] - Clay/Instantly-backed trait implementations
//! - [`testing`] - In-memory fakes and the demo directory

pub mod enrich;
pub mod error;
pub mod fusion;
pub mod live;
pub mod pipeline;
pub mod providers;
pub mod push;
pub mod resolver;
pub mod sinks;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{LeadgenError, SinkError, SourceError};
pub use traits::{
    CampaignSink, ContactEnricher, DistrictSource, DomainProbe, Lead, PeopleSearch, PushReceipt,
};
pub use types::{
    CampaignRouting, ContactChannels, ContactRecord, DistrictRecord, EnrichmentConfig, Persona,
    PersonStub, ResolverConfig,
};

pub use enrich::{Enricher, EnrichmentSummary};
pub use fusion::fuse_sources;
pub use pipeline::{discover_districts, finalize};
pub use push::{leads_from_csv, leads_from_districts, CampaignPusher, PushOutcome, PushSummary};
pub use resolver::{DomainResolver, HttpProbe};

pub use providers::{CsvProvider, TribuneProvider, WikipediaProvider};
pub use sinks::{write_district_rows, write_districts_json, write_lead_rows};

#[cfg(feature = "postgres")]
pub use sinks::PostgresSink;

pub use live::{ClayDirectory, InstantlyCampaigns};
