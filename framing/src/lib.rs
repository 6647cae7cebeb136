//! Transform engine for framed photos on a wall.
//!
//! Every photo sits inside a border (frame) that crops it. The photo can be
//! moved, scaled and rotated inside the border, and the border can be
//! resized and rotated on the wall, but the photo must always cover the
//! border completely without being stretched. This crate owns that
//! geometry and the gesture state machine that drives it. It draws nothing
//! and stores nothing: the host supplies a [`render::RenderSink`] for display
//! and a [`persist::Persistence`] for storage.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Wall-level routing and the [`engine::EngineCore`] the host drives |
//! | [`controller`] | Per-image gesture state machine (hot/committed transforms) |
//! | [`fit`] | Coverage corrector: shift or grow an image until it covers its border |
//! | [`rescale`] | Corner-handle drags turned into aspect-locked scales |
//! | [`border`] | Border resize policy (and sticker resize) |
//! | [`geometry`] | Points, rectangles, rotation and point/line distance |
//! | [`session`] | Hot/committed value slots |
//! | [`doc`] | Framed image model and the persisted patch type |
//! | [`hit`] | Hit-testing handles and body of one image |
//! | [`input`] | Buttons and the gesture state enum |
//! | [`camera`] | Wall zoom and screen/wall conversion |
//! | [`render`] / [`dom`] | Render boundary and its CSS-style implementation |
//! | [`persist`] | Persistence boundary |
//! | [`config`] | Limits loaded from the environment |
//! | [`consts`] | Default limits and the rectangle edge table |

pub mod border;
pub mod camera;
pub mod config;
pub mod consts;
pub mod controller;
pub mod doc;
pub mod dom;
pub mod engine;
pub mod fit;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod persist;
pub mod render;
pub mod rescale;
pub mod session;
