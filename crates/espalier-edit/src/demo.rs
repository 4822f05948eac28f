//! Built-in sample description.

use espalier_core::{NodeSpec, TreeSpec};

/// Flat description of a pick-and-place arm: while the tray is not full,
/// detect a part, check it is pickable, then advance, grip, retract and
/// release it.
///
/// Decodes to `Root r0 -> Loop l1 -> [Condition c1, Sequence s1 -> ...]`,
/// eleven nodes in total.
pub fn pick_and_place() -> TreeSpec {
    TreeSpec::new(vec![
        NodeSpec::leaf("Condition", "c1").with_behavior("isNotFull"),
        NodeSpec::leaf("Action", "a1").with_behavior("detect"),
        NodeSpec::leaf("Condition", "c2").with_behavior("pickable"),
        NodeSpec::leaf("Action", "a2").with_behavior("advance"),
        NodeSpec::leaf("Action", "a3").with_behavior("grip"),
        NodeSpec::leaf("Action", "a4").with_behavior("retract"),
        NodeSpec::leaf("Condition", "c3").with_behavior("picked"),
        NodeSpec::leaf("Action", "a5").with_behavior("release"),
        NodeSpec::branch("Sequence", "s1", 7),
        NodeSpec::branch("Loop", "l1", 2),
        NodeSpec::branch("Root", "r0", 1),
    ])
}
