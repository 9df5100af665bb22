//! LTI role vocabulary and built-in role maps
//!
//! URN prefixes follow the LIS v2 vocabularies referenced by LTI 1.3. The
//! default maps are property strings in the same format tenants use, so they
//! go through exactly the same loaders as tenant configuration.

/// Context (membership) role prefix
pub const MEMBERSHIP_PREFIX: &str = "http://purl.imsglobal.org/vocab/lis/v2/membership#";

/// Institution role prefix
pub const INSTITUTION_PREFIX: &str = "http://purl.imsglobal.org/vocab/lis/v2/institution/person#";

/// System role prefix
pub const SYSTEM_PREFIX: &str = "http://purl.imsglobal.org/vocab/lis/v2/system/person#";

pub const MEMBERSHIP_LEARNER: &str = "http://purl.imsglobal.org/vocab/lis/v2/membership#Learner";
pub const MEMBERSHIP_INSTRUCTOR: &str = "http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor";
pub const MEMBERSHIP_TEACHING_ASSISTANT: &str =
    "http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor#TeachingAssistant";
pub const INSTITUTION_ADMINISTRATOR: &str =
    "http://purl.imsglobal.org/vocab/lis/v2/institution/person#Administrator";
pub const SYSTEM_ADMINISTRATOR: &str = "http://purl.imsglobal.org/vocab/lis/v2/system/person#Administrator";

/// LTI 1.1 context administrator
pub const LEGACY_CONTEXT_ADMIN: &str = "urn:lti:role:ims/lis/Administrator";

/// LTI 1.1 system administrator
pub const LEGACY_SYSTEM_ADMIN: &str = "urn:lti:sysrole:ims/lis/Administrator";

/// LTI 1.1 institution administrator
pub const LEGACY_INSTITUTION_ADMIN: &str = "urn:lti:instrole:ims/lis/Administrator";

/// Local role => LTI role(s), first alias preferred
///
/// Keep the blank in `Teaching Assistant`.
pub const DEFAULT_OUTBOUND_ROLE_MAP: &str = concat!(
    "access:Learner,http://purl.imsglobal.org/vocab/lis/v2/membership#Learner;",
    "maintain:Instructor,http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor;",
    "Student:Learner,http://purl.imsglobal.org/vocab/lis/v2/membership#Learner;",
    "Learner:Learner,http://purl.imsglobal.org/vocab/lis/v2/membership#Learner;",
    "Instructor:Instructor,http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor;",
    "Teaching Assistant:TeachingAssistant,http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor#TeachingAssistant;",
    "admin:Instructor,Administrator,http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor,",
    "http://purl.imsglobal.org/vocab/lis/v2/institution/person#Administrator;",
    // Context roles
    "ContentDeveloper:ContentDeveloper,http://purl.imsglobal.org/vocab/lis/v2/membership#ContentDeveloper;",
    "Mentor:Mentor,http://purl.imsglobal.org/vocab/lis/v2/membership#Mentor;",
    "Manager:Manager,http://purl.imsglobal.org/vocab/lis/v2/membership#Manager;",
    "Member:Member,http://purl.imsglobal.org/vocab/lis/v2/membership#Member;",
    "Officer:Officer,http://purl.imsglobal.org/vocab/lis/v2/membership#Officer;",
    // Institution roles
    "Faculty:Faculty,http://purl.imsglobal.org/vocab/lis/v2/institution/person#Faculty;",
    "Guest:Guest,http://purl.imsglobal.org/vocab/lis/v2/institution/person#Guest;",
    "Staff:Staff,http://purl.imsglobal.org/vocab/lis/v2/institution/person#Staff;",
    "Alumni:Alumni,http://purl.imsglobal.org/vocab/lis/v2/institution/person#Alumni;",
    "Observer:Observer,http://purl.imsglobal.org/vocab/lis/v2/institution/person#Observer;",
    "ProspectiveStudent:ProspectiveStudent,http://purl.imsglobal.org/vocab/lis/v2/institution/person#ProspectiveStudent;",
);

/// LTI 1.1 role token => LIS v2 URN
///
/// `TeachingAssistant` without the blank is intentionally absent.
pub const DEFAULT_LEGACY_ROLE_MAP: &str = concat!(
    "Learner=http://purl.imsglobal.org/vocab/lis/v2/membership#Learner;",
    "Instructor=http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor;",
    "urn:lti:role:ims/lis/Learner=http://purl.imsglobal.org/vocab/lis/v2/membership#Learner;",
    "urn:lti:role:ims/lis/Instructor=http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor;",
    "urn:lti:role:ims/lis/TeachingAssistant=http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor#TeachingAssistant;",
    "urn:lti:role:ims/lis/ContentDeveloper=http://purl.imsglobal.org/vocab/lis/v2/membership#ContentDeveloper;",
    "urn:lti:role:ims/lis/Mentor=http://purl.imsglobal.org/vocab/lis/v2/membership#Mentor;",
    "urn:lti:role:ims/lis/Administrator=http://purl.imsglobal.org/vocab/lis/v2/membership#Administrator;",
    "urn:lti:instrole:ims/lis/Administrator=http://purl.imsglobal.org/vocab/lis/v2/institution/person#Administrator;",
    "urn:lti:sysrole:ims/lis/Administrator=http://purl.imsglobal.org/vocab/lis/v2/system/person#Administrator;",
);

/// LTI role URN => candidate local roles, in preference order
///
/// The LTI vocabulary name comes first, then course roles, then project roles.
pub const DEFAULT_INBOUND_ROLE_MAP: &str = concat!(
    // Context roles
    "http://purl.imsglobal.org/vocab/lis/v2/membership#Learner:Learner,Student,access;",
    "http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor:Instructor,maintain;",
    "http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor#TeachingAssistant:Teaching Assistant,Instructor,maintain;",
    "http://purl.imsglobal.org/vocab/lis/v2/membership#ContentDeveloper:ContentDeveloper,Instructor,maintain;",
    "http://purl.imsglobal.org/vocab/lis/v2/membership#Mentor:Mentor,access;",
    "http://purl.imsglobal.org/vocab/lis/v2/membership#Manager:Manager,Instructor,maintain;",
    "http://purl.imsglobal.org/vocab/lis/v2/membership#Member:Member,Learner,Student,access;",
    "http://purl.imsglobal.org/vocab/lis/v2/membership#Officer:Officer,Member,access;",
    "http://purl.imsglobal.org/vocab/lis/v2/membership#Administrator:Administrator,Instructor,maintain;",
    // Institution roles
    "http://purl.imsglobal.org/vocab/lis/v2/institution/person#Administrator:Administrator,Instructor,maintain;",
    "http://purl.imsglobal.org/vocab/lis/v2/institution/person#Faculty:Faculty,Instructor,maintain;",
    "http://purl.imsglobal.org/vocab/lis/v2/institution/person#Guest:Guest,access;",
    "http://purl.imsglobal.org/vocab/lis/v2/institution/person#None:None;",
    "http://purl.imsglobal.org/vocab/lis/v2/institution/person#Other:Other;",
    "http://purl.imsglobal.org/vocab/lis/v2/institution/person#Staff:Staff;",
    "http://purl.imsglobal.org/vocab/lis/v2/institution/person#Student:Student,Learner,access;",
    "http://purl.imsglobal.org/vocab/lis/v2/institution/person#Alumni:Alumni;",
    "http://purl.imsglobal.org/vocab/lis/v2/institution/person#Instructor:Instructor,maintain;",
    "http://purl.imsglobal.org/vocab/lis/v2/institution/person#Learner:Learner,Student,access;",
    "http://purl.imsglobal.org/vocab/lis/v2/institution/person#Member:Member;",
    "http://purl.imsglobal.org/vocab/lis/v2/institution/person#Observer:Observer;",
    "http://purl.imsglobal.org/vocab/lis/v2/institution/person#ProspectiveStudent:ProspectiveStudent;",
    // System roles
    "http://purl.imsglobal.org/vocab/lis/v2/system/person#Administrator:Administrator,Instructor,maintain;",
);

/// Roles of a project-style site
pub const PROJECT_ROLES: [&str; 2] = ["access", "maintain"];

/// Roles of a course-style site
pub const COURSE_ROLES: [&str; 3] = ["Student", "Instructor", "Teaching Assistant"];
