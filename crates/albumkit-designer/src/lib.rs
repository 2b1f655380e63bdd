//! # AlbumKit Designer
//!
//! Interactive spread-layout design engine: arrange photos and text onto
//! printable album pages ("spreads") and a cover by direct manipulation,
//! with undo/redo history, snap-to-guide alignment, clipboard support,
//! and a proofing mode for review comments.
//!
//! ## Core Components
//!
//! - **Model**: the `Design` document — spreads, cover, elements,
//!   comments, global styles, page spec. All geometry is in percent of
//!   the spread bounding box, never pixels.
//! - **History**: past/future full-document snapshot stacks with
//!   gesture-level undo granularity.
//! - **EditorSession**: one editing session holding tool mode, selection,
//!   clipboard, and the in-flight pointer interaction.
//! - **Interaction**: the pointer state machine turning raw pointer
//!   movement into move / resize / image-pan / box-select operations.
//! - **Autolayout**: grid template proposals for a photo count.
//! - **Catalog**: read-only photo catalog and print-spec preset inputs.
//!
//! ## Architecture
//!
//! ```text
//! pointer/keyboard events
//!   └── EditorSession (tool + selection + clipboard)
//!         ├── Interaction (move/resize/pan/box-select + snapping)
//!         ├── History (snapshot-then-mutate)
//!         └── Design (document value, emitted after every change)
//! ```
//!
//! The engine performs no I/O: it receives a `Design` value and a
//! read-only photo catalog, and emits an updated `Design` value after
//! every state-changing operation.
//!
//! ## Usage
//!
//! ```
//! use albumkit_core::geometry::{PagePoint, PageRect};
//! use albumkit_designer::{Design, EditorSession, PageSpec};
//!
//! let mut session = EditorSession::new(Design::new("Summer", PageSpec::default()));
//! let id = session
//!     .add_photo("photo-1", PageRect::new(20.0, 20.0, 30.0, 30.0))
//!     .unwrap();
//! session.pointer_down(PagePoint::new(35.0, 35.0), false);
//! session.pointer_move(PagePoint::new(45.0, 35.0));
//! session.pointer_up();
//! assert!(session.design().spreads[0].element(id).unwrap().x > 20.0);
//! ```

pub mod autolayout;
pub mod catalog;
pub mod editor;
pub mod history;
pub mod interaction;
pub mod model;
pub mod serialization;

pub use catalog::{default_presets, find_preset, PhotoAsset, PhotoCatalog, PrintSpecPreset};
pub use editor::{DropPayload, EditorSession, NudgeDirection, Shortcut, SnapGuides, Tool};
pub use history::History;
pub use interaction::Handle;
pub use model::{
    Background, Comment, Design, DesignStatus, Element, ElementKind, ElementStyle, Filters,
    GlobalStyles, ImageTransform, PageSpec, Spread, SurfaceId, TextAlign, TextStyle,
};
