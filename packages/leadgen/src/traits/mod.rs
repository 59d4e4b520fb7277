//! Core trait abstractions.
//!
//! Each external capability is a narrow interface so the pipeline can be
//! tested against in-memory fakes (see [`crate::testing`]).

pub mod campaign;
pub mod people;
pub mod probe;
pub mod source;

pub use campaign::{CampaignSink, Lead, PushReceipt};
pub use people::{ContactEnricher, PeopleSearch};
pub use probe::DomainProbe;
pub use source::DistrictSource;
