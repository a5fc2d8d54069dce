//! Designs that arrive as JSON, the way the command line loads them.

use tracenet_common::LogicVec;
use tracenet_conformance::{report, top_module};
use tracenet_ir::{Design, NetConst};

fn constant_design() -> Design {
    let (mut b, top) = top_module();
    let wide = b.signal(top, "wide", 40);
    let nexus = b.nexus_of(wide);
    b.constant(nexus, NetConst::bits(LogicVec::new(40)));
    b.finish()
}

#[test]
fn json_round_trip_reports_identically() {
    let design = constant_design();
    let json = serde_json::to_string(&design).unwrap();
    let loaded: Design = serde_json::from_str(&json).unwrap();
    assert_eq!(report(&loaded).text, report(&design).text);
}

#[test]
fn truncated_constant_payload_is_rejected_on_load() {
    let json = serde_json::to_string(&constant_design()).unwrap();
    assert!(json.contains(r#""data":[0,0]"#));
    let damaged = json.replace(r#""data":[0,0]"#, r#""data":[]"#);

    let err = serde_json::from_str::<Design>(&damaged).unwrap_err();
    assert!(err.to_string().contains("needs 2 data words, found 0"));
}
