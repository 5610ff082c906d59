//! _vk-caps_ queries a Vulkan driver for what a device can do and renders the answers as stable,
//! grouped `(name, value)` text pairs.
//!
//! The output is meant for any presentation layer: a list view, a terminal table, JSON export, or
//! golden-file tests of driver capability reporting.
//!
//! # Usage
//!
//! ```no_run
//! use vk_caps::prelude::*;
//!
//! let provider = VulkanProvider::new(ProviderConfig::new().app_name("my app"))?;
//! let snapshot = Snapshot::build(&Category::DEFAULT, &provider)?;
//!
//! for group in snapshot.groups() {
//!     println!("{}", group.label());
//!
//!     for row in group.rows() {
//!         println!("  {} = {}", row.label(), row.value());
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Concepts
//!
//! - A [`CapabilityProvider`] answers one query per record source. [`VulkanProvider`] asks the
//!   installed driver; [`RecordedProvider`] answers from memory.
//! - Each [`Category`] becomes one [`CapabilityGroup`] of the [`Snapshot`], even when the provider
//!   has nothing to report for it.
//! - Records declare their display labels alongside their fields (see [`record::Record`]), so the
//!   rows of a group always follow the declared field order.
//!
//! Formatting never depends on locale: booleans are `true`/`false`, integers are plain decimal,
//! floats use the shortest round-trip form and small vectors render as `{4096, 4096}`.

pub mod driver;
pub mod record;

mod provider;
mod snapshot;

pub use self::{
    driver::{DriverError, ProviderConfig, ProviderConfigBuilder, VulkanProvider},
    provider::{CapabilityProvider, RecordedProvider},
    snapshot::{
        build_snapshot, CapabilityGroup, Category, Row, Snapshot, SnapshotError, UnknownCategory,
    },
};

/// Things which are used in almost every single _vk-caps_ program.
pub mod prelude {
    pub use super::{
        CapabilityGroup, CapabilityProvider, Category, ProviderConfig, RecordedProvider, Row,
        Snapshot, SnapshotError, VulkanProvider,
    };
}
