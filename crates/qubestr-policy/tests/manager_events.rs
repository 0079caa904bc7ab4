mod common;

use common::*;
use qubestr_types::{RequestContext, Tag, ValidationOutcome};

#[test]
fn complete_success_report_is_accepted() {
    let outcome = chain().check_event(&as_node(), &success_report());
    assert_eq!(outcome, ValidationOutcome::accept());
    assert!(outcome.reason.is_empty());
}

#[test]
fn any_authenticated_key_may_report() {
    // No roster check for reports: neither key below is on the roster.
    assert!(!chain().check_event(&as_node(), &success_report()).reject);
    assert!(!chain().check_event(&as_outsider(), &success_report()).reject);
}

#[test]
fn unauthenticated_report_is_rejected_whatever_the_tags() {
    let chain = chain();
    let ctx = RequestContext::anonymous();
    for event in [
        success_report(),
        build_event(3333, &node_key(), vec![], ""),
        without_tag(&success_report(), "a"),
    ] {
        let outcome = chain.check_event(&ctx, &event);
        assert!(outcome.reject);
        assert_eq!(
            outcome.reason,
            "auth-required: publishing Kind 3333 requires authentication"
        );
    }
}

#[test]
fn first_missing_tag_is_named() {
    for tag in [
        "a",
        "version",
        "network",
        "action",
        "status",
        "node_id",
        "action_at",
    ] {
        let event = without_tag(&success_report(), tag);
        let outcome = chain().check_event(&as_node(), &event);
        assert_eq!(
            outcome.reason,
            format!("qube-manager: missing required '{tag}' tag")
        );
    }

    let event = build_event(3333, &node_key(), vec![], "report");
    let outcome = chain().check_event(&as_node(), &event);
    assert_eq!(outcome.reason, "qube-manager: missing required 'a' tag");
}

#[test]
fn malformed_signal_references_share_one_message() {
    let pk = operator_key();
    let invalid = [
        format!("3333:{pk}:hyperqube"),
        format!("33321:{pk}"),
        format!("33321:{pk}:hyperqube:1"),
        format!("33321:{}:hyperqube", &pk[..40]),
        format!("33321:{pk}:hyperqube-dev"),
        format!("33321:{}:hyperqube", "é".repeat(64)),
        "hyperqube".to_string(),
        String::new(),
    ];
    for value in invalid {
        let event = with_tag_value(&success_report(), "a", &value);
        let outcome = chain().check_event(&as_node(), &event);
        assert_eq!(
            outcome.reason,
            "qube-manager: invalid 'a' tag format (should be '33321:<64_hex_pubkey>:hyperqube')",
            "value {value:?}"
        );
    }
}

#[test]
fn reference_pubkey_length_counts_bytes() {
    let event = with_tag_value(
        &success_report(),
        "a",
        &format!("33321:{}:hyperqube", "é".repeat(32)),
    );
    let outcome = chain().check_event(&as_node(), &event);
    assert_eq!(outcome, ValidationOutcome::accept());
}

#[test]
fn reference_tag_without_value_is_malformed() {
    let mut event = without_tag(&success_report(), "a");
    event.tags.insert(0, Tag::new(["a"]));
    let outcome = chain().check_event(&as_node(), &event);
    assert!(outcome.reason.starts_with("qube-manager: invalid 'a' tag format"));
}

#[test]
fn unknown_action_is_rejected() {
    let event = with_tag_value(&success_report(), "action", "restart");
    let outcome = chain().check_event(&as_node(), &event);
    assert_eq!(
        outcome.reason,
        "qube-manager: 'action' tag must be either 'upgrade' or 'reboot'"
    );
}

#[test]
fn reboot_reports_need_no_extra_tags() {
    let event = with_tag_value(&success_report(), "action", "reboot");
    assert_eq!(
        chain().check_event(&as_node(), &event),
        ValidationOutcome::accept()
    );
}

#[test]
fn unknown_status_is_rejected() {
    for status in ["pending", "Success", ""] {
        let event = with_tag_value(&success_report(), "status", status);
        let outcome = chain().check_event(&as_node(), &event);
        assert_eq!(
            outcome.reason,
            "qube-manager: 'status' tag should be 'success' or 'failure'"
        );
    }
}

#[test]
fn failure_requires_error_tag() {
    let event = build_event(3333, &node_key(), manager_tags("failure"), "Upgrade failed");
    let outcome = chain().check_event(&as_node(), &event);
    assert_eq!(
        outcome.reason,
        "qube-manager: 'failure' status requires 'error' tag"
    );

    let mut event = event;
    event.tags.push(Tag::new(["error", "checksum mismatch"]));
    assert_eq!(
        chain().check_event(&as_node(), &event),
        ValidationOutcome::accept()
    );
}

#[test]
fn empty_content_is_rejected() {
    let mut event = success_report();
    event.content.clear();
    let outcome = chain().check_event(&as_node(), &event);
    assert_eq!(
        outcome.reason,
        "qube-manager: content must be a human-readable string"
    );
}

#[test]
fn earlier_rule_wins_over_later_ones() {
    // Bad status and empty content: the status rule fires first.
    let mut event = with_tag_value(&success_report(), "status", "unknown");
    event.content.clear();
    let outcome = chain().check_event(&as_node(), &event);
    assert!(outcome.reason.contains("'status' tag"));
}
