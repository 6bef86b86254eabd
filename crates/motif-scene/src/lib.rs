//! # motif-scene
//!
//! The Motif scene model and timeline engine: visual objects, relative layout
//! constraints, and ordered/concurrent animation steps advanced on a logical
//! clock. Rendering is delegated to a back-end behind a narrow trait; this
//! crate never rasterizes anything.

pub mod asset;
pub mod backend;
pub mod builder;
pub mod layout;
pub mod object;
pub mod registry;
pub mod scene;
pub mod step;
pub mod timeline;
pub mod validate;

pub use asset::{Asset, AssetCatalog, AssetId};
pub use backend::{HeadlessBackend, RenderBackend};
pub use builder::SceneBuilder;
pub use layout::{Anchor, LayoutConstraint};
pub use object::{ObjectContent, ObjectId, ObjectKind, ShapeKind, Style, TextStyle, VisualObject};
pub use registry::{Registry, RegistrySnapshot};
pub use scene::{Scene, SceneReport};
pub use step::{AnimationStep, StepKind};
pub use timeline::{StateChange, StepState, Timeline, TimelineStatus, TimelineWarning};
