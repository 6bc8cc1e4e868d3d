use super::*;

#[test]
fn placeholders_are_filled() {
    let js = motion_script();
    assert!(!js.contains('@'));
    assert!(js.contains("const VISIBLE = \"is-visible\";"));
    assert!(js.contains("doc.classList.add(\"motion-ready\");"));
}

#[test]
fn script_reads_the_trigger_attributes_sections_write() {
    let js = motion_script();
    for attr in ["dataset.reveal", "dataset.revealMargin", "dataset.revealOnce", "dataset.revealOn"] {
        assert!(js.contains(attr), "{attr}");
    }
    assert!(js.contains("[data-motion]"));
}
