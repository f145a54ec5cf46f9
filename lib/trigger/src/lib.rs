//! Trigger resolution for local notifications.
//!
//! This crate turns the declarative schedule attached to a notification into
//! a concrete trigger description that a native scheduler can register:
//!
//! - **Schedule**: lenient parsing of the caller's options object
//! - **Units**: tick/unit conversion to seconds
//! - **Calendar**: matched-field tables and weekday remapping
//! - **Resolver**: the decision procedure producing a [`TriggerResult`]

pub mod calendar;
pub mod config;
pub mod error;
pub mod resolver;
pub mod result;
pub mod schedule;
pub mod unit;

pub use calendar::{CalendarField, CalendarUnit, DateComponents, remap_weekday};
pub use config::ResolverConfig;
pub use error::SpecError;
pub use resolver::{TriggerResolver, resolve};
pub use result::{Coordinate, TriggerResult};
pub use schedule::{Every, FieldPattern, ScheduleSpec, TriggerKind};
pub use unit::{TimeUnit, convert_ticks_to_seconds};
