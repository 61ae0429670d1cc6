//! Folio Core Library
//!
//! Platform-agnostic state and logic for the Folio site behaviors. Nothing in
//! this crate touches the DOM; the `folio-web` crate renders what it returns.

pub mod config;
pub mod contact;
pub mod controller;
pub mod filter;
pub mod nav;
pub mod panel;
pub mod particles;
pub mod prefs;
pub mod storage;
pub mod theme;

pub use config::{ConfigError, ContactConfig, ParticleConfig, SiteConfig, timer_delay};
pub use contact::{ContactForm, ContactSubmission, FieldErrors, SubmitOutcome};
pub use controller::PreferenceController;
pub use filter::{ActiveTag, Card, FilterButton, FilterOutcome, FilterUpdate, TagFilter};
pub use nav::{MobileNav, NavIcons};
pub use panel::{AccessibilityPanel, ClickTarget};
pub use particles::{
    CancellationToken, ParticleId, ParticlePool, ParticleSpec, RandomSource, SpawnSkip,
};
pub use prefs::{FontSize, PreferenceAction, PreferenceChange, PreferenceStore, Preferences};
pub use storage::{MemoryStorage, PreferenceStorage, StorageError, StorageResult};
pub use theme::{PageVisuals, ThemeVisuals, ToggleSwitch};
