//! Inline snapshots of the rendered demo reports.
//!
//! The fixtures carry no timestamps, so output is fully deterministic.

use insta::assert_snapshot;

use taskmodel::demo;

#[test]
fn golden_loops_report() {
    let text = demo::loops().render();
    assert_snapshot!(text.trim_end(), @r###"
    === Loops ===
    indexed traversal:
      index 0: Code Review
      index 1: Write Tests
      index 2: Deploy
      index 3: Bug Fix
      index 4: Documentation
    sequential traversal:
      Code Review - In Progress
      Write Tests - Pending
      Deploy - Completed
      Bug Fix - In Progress
      Documentation - Pending
    "###);
}

#[test]
fn golden_value_semantics_report() {
    let text = demo::value_semantics().render();
    assert_snapshot!(text.trim_end(), @r###"
    === Value semantics ===
    copy starts equal: 1
    original integer: 1
    mutated copy: 5
    priority: High (1)
    cloned priority: High (1)
    replacing one copy never touches the other
    "###);
}

#[test]
fn golden_reference_semantics_report() {
    let text = demo::reference_semantics().render();
    assert_snapshot!(text.trim_end(), @r###"
    === Reference semantics ===
    first handle:  #1 Implement authorization [Pending]
    second handle: #1 Implement authorization [Pending]
    handles share one record: true
    after detach+rename, handle still reads: #1 Implement authorization [Pending]
    "###);
}
