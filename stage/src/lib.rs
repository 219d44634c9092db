//! Scene-view interaction and rendering engine for the 2D scene editor.
//!
//! This crate owns everything that has real behavior in the editor: the
//! camera that maps between world and viewport pixels, the scene model with
//! its single-selection rule, ellipse hit-testing, the pan/drag/zoom gesture
//! state machine, and the inspector controls that edit the selected object's
//! transform through typed property bindings. It has no windowing dependency.
//! The host application feeds it [`input::InputEvent`]s plus a polled
//! [`input::PointerState`] each frame and hands it a [`render::Surface`] to
//! draw on.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geom`] | `Vec2` and `Rect` value types |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`scene`] | Game objects, transforms, and the scene store |
//! | [`hit`] | Ellipse hit-testing against scene objects |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`engine`] | [`engine::SceneView`]: routes input to camera and scene |
//! | [`binding`] | Bindable property paths and typed read/write |
//! | [`drag`] | Draggable numeric labels |
//! | [`text_input`] | Single-line numeric text fields |
//! | [`inspector`] | Transform inspector built from drag labels and text fields |
//! | [`widget`] | `Widget` trait, buttons, and panels |
//! | [`render`] | Drawing surface abstraction and scene-view rendering |
//! | [`theme`] | Editor color palette |
//! | [`consts`] | Shared numeric constants (zoom limits, footprint size, etc.) |

pub mod binding;
pub mod camera;
pub mod consts;
pub mod drag;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod inspector;
pub mod render;
pub mod scene;
pub mod text_input;
pub mod theme;
pub mod widget;

#[cfg(test)]
#[path = "recording_test.rs"]
mod recording;
