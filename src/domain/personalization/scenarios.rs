//! Role-specific challenge scenarios.
//!
//! Where a scenario exists for (module, role), the personalizer swaps the
//! generic challenge prompt for the role-specific one while keeping the
//! module's expected keyword.

/// A role-tailored replacement for a module's challenge step.
#[derive(Debug, Clone, Copy)]
pub struct RoleScenario {
    pub scenario: &'static str,
    pub focus: &'static str,
    pub hint: &'static str,
}

/// Looks up the role-specific scenario for a module, if one exists.
pub fn scenario_for(module_id: &str, role: &str) -> Option<RoleScenario> {
    match (module_id, role) {
        ("Module 1", "IT Technician") => Some(RoleScenario {
            scenario:
                "You receive an email claiming to be from Microsoft Security, requesting immediate \
                 verification of server credentials due to 'SQL injection attempts detected'. The \
                 email includes technical jargon and a link to verify. What technical indicators \
                 should you check first?",
            focus: "Email headers, domain verification, technical authenticity",
            hint: "Look for technical inconsistencies and verify through official Microsoft channels",
        }),
        ("Module 1", "Financial Accountant") => Some(RoleScenario {
            scenario:
                "An email appears to be from your CEO requesting an urgent wire transfer of $50,000 \
                 to a 'confidential acquisition target'. The email mentions a tight deadline. What \
                 financial controls should you follow?",
            focus: "Business email compromise, financial verification procedures",
            hint: "Always verify financial requests through established dual-authorization channels",
        }),
        ("Module 1", "Administration Officer") => Some(RoleScenario {
            scenario:
                "An email claims your employee benefits account will be suspended unless you click \
                 a link to 'verify your information within 24 hours'. The email looks official but \
                 urgent. What should you do?",
            focus: "Basic phishing recognition, reporting procedures",
            hint: "Legitimate systems rarely require urgent action via email links",
        }),
        _ => None,
    }
}
