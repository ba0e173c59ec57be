//! Preflop strategy drills for 6-max No-Limit Hold-Em.
//!
//! The crate deals random two-card starting hands, rotates the hero through
//! the six seats, and grades fold/call/raise decisions against an embedded
//! strategy chart. Three modules:
//!
//! - [`cards`] - deck generation, shuffling, and hand-class canonicalization
//! - [`strategy`] - positions, actions, and the validated lookup chart
//! - [`session`] - the drilling state machine and running statistics

pub mod cards;
pub mod session;
pub mod strategy;

/// Random instance generation for testing and sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize terminal logging for the drill binary.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
