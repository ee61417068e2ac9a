//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;

pub use handlers::SurveyAppState;
pub use router::survey_router;
