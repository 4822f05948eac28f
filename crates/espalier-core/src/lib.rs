//! Behaviour tree authoring model.
//!
//! A [`Tree`] holds [`NodeRecord`]s in an arena with ordered children and
//! parent links; [`TreeSpec`] is the flat post-order interchange form, and
//! [`decode()`]/[`encode()`] convert between the two. Editing operations on
//! top of this model live in `espalier-edit`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod decode;
pub mod kind;
pub mod record;
pub mod spec;
pub mod tree;

pub use decode::{decode, encode, DecodeError};
pub use kind::NodeKind;
pub use record::NodeRecord;
pub use spec::{NodeSpec, TreeSpec};
pub use tree::{NodeId, Postorder, Preorder, Tree};
