//! A small DOM for terminal pages: an element tree laid out as a scrollable
//! document, with intersection observers, CSS-style transitions, and a
//! diffing terminal renderer.

pub mod animation;
pub mod buffer;
pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod observer;
pub mod render;
pub mod terminal;
pub mod text;
pub mod transitions;
pub mod types;

pub use animation::{Animated, AnimationState};
pub use buffer::Buffer;
pub use document::{ClientRect, Document, ScrollBehavior};
pub use element::{find_element, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::hit_test;
pub use layout::{layout, LayoutResult, Rect};
pub use observer::{IntersectionEntry, IntersectionObserver};
pub use render::{render_to_buffer, Frame};
pub use terminal::Terminal;
pub use transitions::{Easing, Keyframes, Transition};
pub use types::*;
