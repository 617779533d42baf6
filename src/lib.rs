//! Client for a deep-research HTTP service.
//!
//! One request at a time: validate the query, POST it to the service, track
//! the lifecycle through [`RequestState`], and project the response into a
//! render-ready [`NormalizedView`] for whatever [`Renderer`] is plugged in.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod presenter;
pub mod render;

pub use api::{ResearchClient, ResearchResult, Source};
pub use config::{ApiConfig, Config};
pub use controller::{RequestController, RequestState, SubmitOutcome};
pub use error::{AlreadyPending, ResearchError};
pub use presenter::{normalize, NormalizedSource, NormalizedView};
pub use render::{JsonRenderer, Renderer, TextRenderer};
