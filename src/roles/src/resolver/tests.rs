//! Resolver tests: precedence, legacy up-conversion and first-valid matching

use super::*;
use crate::map::{parse_inbound_map, parse_legacy_map, parse_outbound_map, InboundMap, LegacyMap, OutboundMap};
use crate::vocab::{
    DEFAULT_INBOUND_ROLE_MAP, DEFAULT_LEGACY_ROLE_MAP, DEFAULT_OUTBOUND_ROLE_MAP,
    INSTITUTION_ADMINISTRATOR, LEGACY_INSTITUTION_ADMIN, MEMBERSHIP_INSTRUCTOR, MEMBERSHIP_LEARNER,
    MEMBERSHIP_TEACHING_ASSISTANT,
};
use std::collections::HashSet;

const TENANT_LEGACY: &str =
    "urn:lti:instrole:dude=http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor#Dude";

const TENANT_OUTBOUND: &str = concat!(
    "Dude:Dude,http://purl.imsglobal.org/vocab/lis/v2/institution/person#Abides;",
    "Staff:Staff,Dude,http://purl.imsglobal.org/vocab/lis/v2/institution/person#Staff;",
);

struct Fixture {
    tenant_legacy: LegacyMap,
    default_legacy: LegacyMap,
    tenant_outbound: OutboundMap,
    default_outbound: OutboundMap,
    default_inbound: InboundMap,
}

impl Fixture {
    fn new() -> Self {
        Self {
            tenant_legacy: parse_legacy_map(TENANT_LEGACY),
            default_legacy: parse_legacy_map(DEFAULT_LEGACY_ROLE_MAP),
            tenant_outbound: parse_outbound_map(TENANT_OUTBOUND),
            default_outbound: parse_outbound_map(DEFAULT_OUTBOUND_ROLE_MAP),
            default_inbound: parse_inbound_map(DEFAULT_INBOUND_ROLE_MAP),
        }
    }

    fn outbound(&self, local_role: &str, tool_spec: Option<&str>) -> Option<String> {
        let tool = parse_outbound_map(tool_spec);
        resolve_outbound(
            local_role,
            &tool,
            &self.tenant_outbound,
            &self.default_outbound,
            &self.tenant_legacy,
            &self.default_legacy,
        )
    }

    fn inbound(&self, incoming: &str, valid: &[&str], tenant_spec: Option<&str>) -> Option<String> {
        let tenant = parse_inbound_map(tenant_spec);
        let valid: HashSet<&str> = valid.iter().copied().collect();
        resolve_inbound(
            incoming,
            &valid,
            &tenant,
            &InboundMap::new(),
            &self.default_inbound,
            &self.tenant_legacy,
            &self.default_legacy,
        )
    }
}

fn tool_spec() -> String {
    format!(
        "ToolI:Instructor;ToolM:Instructor,Learner;ToolA:{};",
        LEGACY_INSTITUTION_ADMIN
    )
}

// ============================================================================
// Outbound Tests
// ============================================================================

#[test]
fn test_outbound_default_layer() {
    let fx = Fixture::new();
    let tool = tool_spec();
    let instructor = format!("Instructor,{}", MEMBERSHIP_INSTRUCTOR);

    assert_eq!(fx.outbound("maintain", Some(tool.as_str())), Some(instructor.clone()));
    assert_eq!(fx.outbound("Instructor", Some(tool.as_str())), Some(instructor));
    assert_eq!(
        fx.outbound("Guest", Some(tool.as_str())).as_deref(),
        Some("Guest,http://purl.imsglobal.org/vocab/lis/v2/institution/person#Guest")
    );
}

#[test]
fn test_outbound_unmapped_is_none() {
    let fx = Fixture::new();
    let tool = tool_spec();

    assert_eq!(fx.outbound("Baby Yoda", Some(tool.as_str())), None);
    // Without the blank this is not a local role nor a legacy token
    assert_eq!(fx.outbound("TeachingAssistant", Some(tool.as_str())), None);
}

#[test]
fn test_outbound_blank_in_role_name() {
    let fx = Fixture::new();
    assert_eq!(
        fx.outbound("Teaching Assistant", Some(tool_spec().as_str())),
        Some(format!("TeachingAssistant,{}", MEMBERSHIP_TEACHING_ASSISTANT))
    );
}

#[test]
fn test_outbound_admin_carries_both_roles() {
    let fx = Fixture::new();
    let roles = fx.outbound("admin", Some(tool_spec().as_str())).unwrap();
    assert!(roles.contains("Instructor"));
    assert!(roles.contains("Administrator"));
}

#[test]
fn test_outbound_tenant_layer() {
    let fx = Fixture::new();
    let tool = tool_spec();

    assert_eq!(
        fx.outbound("Dude", Some(tool.as_str())).as_deref(),
        Some("Dude,http://purl.imsglobal.org/vocab/lis/v2/institution/person#Abides")
    );
    // Tenant beats the default Staff entry and is not legacy-upgraded
    assert_eq!(
        fx.outbound("Staff", Some(tool.as_str())).as_deref(),
        Some("Staff,Dude,http://purl.imsglobal.org/vocab/lis/v2/institution/person#Staff")
    );
}

#[test]
fn test_outbound_tool_aliases_upgraded() {
    let fx = Fixture::new();
    let tool = tool_spec();

    assert_eq!(fx.outbound("ToolI", Some(tool.as_str())).as_deref(), Some(MEMBERSHIP_INSTRUCTOR));
    assert_eq!(fx.outbound("ToolA", Some(tool.as_str())).as_deref(), Some(INSTITUTION_ADMINISTRATOR));
    assert_eq!(
        fx.outbound("ToolM", Some(tool.as_str())),
        Some(format!("{},{}", MEMBERSHIP_INSTRUCTOR, MEMBERSHIP_LEARNER))
    );
}

#[test]
fn test_outbound_precedence_short_circuits() {
    let tool = parse_outbound_map("Student:ToolOnly");
    let tenant = parse_outbound_map("Student:TenantOnly,Extra;Teacher:TenantTeacher");
    let default = parse_outbound_map(DEFAULT_OUTBOUND_ROLE_MAP);
    let legacy = LegacyMap::new();

    let resolver = OutboundResolver::new(&tool, &tenant, &default, &legacy, &legacy);
    assert_eq!(
        resolver.precedence(),
        vec![Layer::Tool, Layer::TenantProperty, Layer::Default, Layer::Legacy]
    );
    assert_eq!(
        resolver.resolve_with_layer("Student"),
        Some((Layer::Tool, "ToolOnly".to_string()))
    );
    assert_eq!(
        resolver.resolve_with_layer("Teacher"),
        Some((Layer::TenantProperty, "TenantTeacher".to_string()))
    );
    assert_eq!(resolver.resolve_with_layer("maintain").map(|(l, _)| l), Some(Layer::Default));
}

#[test]
fn test_outbound_legacy_fallback_for_role_name() {
    let fx = Fixture::new();

    assert_eq!(
        fx.outbound("urn:lti:role:ims/lis/Learner", None).as_deref(),
        Some(MEMBERSHIP_LEARNER)
    );
    assert_eq!(
        fx.outbound("urn:lti:instrole:dude", None).as_deref(),
        Some("http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor#Dude")
    );
}

#[test]
fn test_legacy_chain_prefers_override() {
    let tenant = parse_legacy_map("Learner=urn:tenant:Learner");
    let default = parse_legacy_map(DEFAULT_LEGACY_ROLE_MAP);
    let chain = LegacyChain::new(&tenant, &default);

    assert_eq!(chain.upgrade("Learner"), Some("urn:tenant:Learner"));
    assert_eq!(chain.upgrade("Instructor"), Some(MEMBERSHIP_INSTRUCTOR));
    assert_eq!(chain.upgrade_or_keep("urn:canvas:instructor"), "urn:canvas:instructor");
}

// ============================================================================
// Inbound Tests
// ============================================================================

const PROJECT: &[&str] = &["access", "maintain"];
const COURSE: &[&str] = &["Student", "Instructor", "Teaching Assistant"];
const MIXED: &str = "urn:canvas:instructor,http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor,urn:lms:dude";

#[test]
fn test_inbound_project_roles() {
    let fx = Fixture::new();

    assert_eq!(fx.inbound(MEMBERSHIP_INSTRUCTOR, PROJECT, None).as_deref(), Some("maintain"));
    assert_eq!(fx.inbound(MEMBERSHIP_LEARNER, PROJECT, None).as_deref(), Some("access"));
    assert_eq!(fx.inbound(MIXED, PROJECT, None).as_deref(), Some("maintain"));
}

#[test]
fn test_inbound_course_roles() {
    let fx = Fixture::new();

    assert_eq!(fx.inbound(MEMBERSHIP_INSTRUCTOR, COURSE, None).as_deref(), Some("Instructor"));
    assert_eq!(fx.inbound(MEMBERSHIP_LEARNER, COURSE, None).as_deref(), Some("Student"));
    assert_eq!(
        fx.inbound(MEMBERSHIP_TEACHING_ASSISTANT, COURSE, None).as_deref(),
        Some("Teaching Assistant")
    );
    assert_eq!(fx.inbound(MIXED, COURSE, None).as_deref(), Some("Instructor"));
}

#[test]
fn test_inbound_legacy_tokens_upgraded() {
    let fx = Fixture::new();

    assert_eq!(fx.inbound("Instructor", PROJECT, None).as_deref(), Some("maintain"));
    assert_eq!(fx.inbound(" Learner ", COURSE, None).as_deref(), Some("Student"));
    assert_eq!(
        fx.inbound("urn:lti:role:ims/lis/TeachingAssistant", COURSE, None).as_deref(),
        Some("Teaching Assistant")
    );
}

#[test]
fn test_inbound_no_match() {
    let fx = Fixture::new();

    assert_eq!(fx.inbound("urn:canvas:instructor,urn:lms:dude", COURSE, None), None);
    assert_eq!(fx.inbound("", COURSE, None), None);
    assert_eq!(fx.inbound(" , ,", COURSE, None), None);
    // Valid URN but the context supports none of its candidates
    assert_eq!(
        fx.inbound("http://purl.imsglobal.org/vocab/lis/v2/institution/person#Alumni", COURSE, None),
        None
    );
}

#[test]
fn test_inbound_first_valid_candidate() {
    let fx = Fixture::new();
    let tenant = "urn:x:Chair:Ghost,Instructor,Student";

    assert_eq!(fx.inbound("urn:x:Chair", COURSE, Some(tenant)).as_deref(), Some("Instructor"));
}

#[test]
fn test_inbound_tokens_processed_in_order() {
    let fx = Fixture::new();
    let incoming = format!("{},{}", MEMBERSHIP_LEARNER, MEMBERSHIP_INSTRUCTOR);

    // Not the most prestigious role, the first one the context supports
    assert_eq!(fx.inbound(&incoming, COURSE, None).as_deref(), Some("Student"));
    assert_eq!(fx.inbound(&incoming, &["Instructor"], None).as_deref(), Some("Instructor"));
}

#[test]
fn test_inbound_tenant_layer_not_merged() {
    let fx = Fixture::new();
    let tenant = format!("{}:Observer", MEMBERSHIP_LEARNER);

    // Tenant layer wins for this URN even though default has Student
    assert_eq!(fx.inbound(MEMBERSHIP_LEARNER, COURSE, Some(tenant.as_str())), None);
    assert_eq!(
        fx.inbound(MEMBERSHIP_LEARNER, &["Observer", "Student"], Some(tenant.as_str())).as_deref(),
        Some("Observer")
    );
}

#[test]
fn test_inbound_precedence_order() {
    let empty = InboundMap::new();
    let legacy = LegacyMap::new();
    let resolver = InboundResolver::new(&empty, &empty, &empty, &legacy, &legacy);

    assert_eq!(
        resolver.precedence(),
        vec![Layer::Tenant, Layer::TenantProperty, Layer::Default]
    );
}

#[test]
fn test_inbound_lti_vocabulary() {
    let fx = Fixture::new();
    let lti_roles = [
        "Instructor", "Teaching Assistant", "ContentDeveloper", "Faculty", "Member", "Learner",
        "Mentor", "Staff", "Alumni", "ProspectiveStudent", "Guest", "Other", "Administrator",
        "Manager", "Observer", "Officer", "None",
    ];

    for role in ["ContentDeveloper", "Instructor", "Learner", "Mentor", "Manager", "Member", "Officer"] {
        let urn = format!("http://purl.imsglobal.org/vocab/lis/v2/membership#{}", role);
        assert_eq!(fx.inbound(&urn, &lti_roles, None).as_deref(), Some(role), "context role {}", role);
    }

    for role in ["Faculty", "Guest", "None", "Other", "Staff", "Alumni", "Observer", "ProspectiveStudent"] {
        let urn = format!("http://purl.imsglobal.org/vocab/lis/v2/institution/person#{}", role);
        assert_eq!(fx.inbound(&urn, &lti_roles, None).as_deref(), Some(role), "institution role {}", role);
    }
}
