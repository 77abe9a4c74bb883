use super::*;

#[test]
fn renders_anchor_with_label_and_href() {
    let html = view! { <Link label="Home" href="/" /> }.to_html();
    assert!(html.starts_with("<a"));
    assert!(html.contains(r#"href="/""#));
    assert!(html.contains(">Home</a>"));
}

#[test]
fn renders_each_target() {
    for (target, expected) in [
        (LinkTarget::Blank, "_blank"),
        (LinkTarget::SelfFrame, "_self"),
        (LinkTarget::Parent, "_parent"),
        (LinkTarget::Top, "_top"),
    ] {
        let html = view! { <Link label="Go" href="/page" target=target /> }.to_html();
        assert!(html.contains(&format!(r#"target="{expected}""#)), "missing target {expected}: {html}");
    }
}

#[test]
fn target_and_rel_absent_by_default() {
    let html = view! { <Link label="Plain" href="/test" /> }.to_html();
    assert!(!html.contains("target="));
    assert!(!html.contains("rel="));
}

#[test]
fn renders_multiple_attributes_combined() {
    let html = view! {
        <Link
            label="Complete Link"
            href="https://example.com"
            target=LinkTarget::Blank
            rel="noopener noreferrer"
            class="external-link"
            test_id="complete-link"
        />
    }
    .to_html();
    assert!(html.contains(r#"href="https://example.com""#));
    assert!(html.contains(r#"rel="noopener noreferrer""#));
    assert!(html.contains(r#"class="external-link""#));
    assert!(html.contains(r#"data-testid="complete-link""#));
}
