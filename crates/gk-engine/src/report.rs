// report.rs — Status descriptions and review-comment composition.
//
// Pure formatting over already-validated data; composing a report never
// fails. Failing messages are quoted verbatim, in catalog order, and the
// comment never mentions guidelines that passed.

use gk_guidelines::GuidelineResult;

/// Status description while the run is in progress.
pub const PENDING_DESCRIPTION: &str = "automatic review in progress";

/// Status description for the intermediate and final failure states.
pub const FAILURE_DESCRIPTION: &str = "one or more guidelines are not met";

/// Final success status description; names the package and the exact
/// revision the verdict applies to.
pub fn success_description(package: &str, head_sha: &str) -> String {
    format!("{package} at {head_sha} approved")
}

/// The congratulatory comment for a passing run.
///
/// The exempted (generated-package) variant adjusts the next-version
/// guidance: generated releases track an upstream artifact, so patch or
/// minor bumps are expected.
pub fn pass_report(version: &str, exempted: bool) -> String {
    let next_version_guidance = if exempted {
        "Since this is a generated package, subsequent releases should bump the \
         patch or minor version to track the upstream artifact."
    } else {
        "Since this is a new package, your next release may use any version number."
    };

    format!(
        "Your new package registration met all of the guidelines for automatic \
         approval, and version {version} is scheduled to be merged.\n\n\
         {next_version_guidance}\n"
    )
}

/// The itemized comment for a failing run.
///
/// Lists each failing guideline's message verbatim as a bullet, in catalog
/// order, followed by fixed guidance text.
pub fn fail_report(failures: &[&GuidelineResult]) -> String {
    let mut body = String::from(
        "Your new package registration does not meet the following guidelines \
         for automatic approval:\n\n",
    );
    for failure in failures {
        body.push_str("- ");
        body.push_str(&failure.message);
        body.push('\n');
    }
    body.push_str(
        "\nPlease update the submission to address the items above; the \
         automatic review runs again on every update. If you believe a \
         guideline does not apply to this submission, no action is needed — \
         a human reviewer will take a look.\n",
    );
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(index: usize, name: &str, message: &str) -> GuidelineResult {
        GuidelineResult {
            index,
            name: name.to_string(),
            passed: false,
            message: message.to_string(),
        }
    }

    #[test]
    fn success_description_names_package_and_revision() {
        let desc = success_description("Foo", "abc1234");
        assert!(desc.contains("Foo"));
        assert!(desc.contains("abc1234"));
    }

    #[test]
    fn pass_report_mentions_version() {
        let report = pass_report("1.2.3", false);
        assert!(report.contains("1.2.3"));
        assert!(report.contains("any version number"));
    }

    #[test]
    fn exempted_pass_report_adjusts_version_guidance() {
        let report = pass_report("1.2.3", true);
        assert!(report.contains("generated package"));
        assert!(!report.contains("any version number"));
    }

    #[test]
    fn fail_report_lists_messages_verbatim_in_order() {
        let first = failure(1, "name-length", "name 'Fo' is too short (5 characters minimum)");
        let second = failure(6, "name-charset", "name contains non-ASCII characters");
        let report = fail_report(&[&first, &second]);

        let first_pos = report.find(&first.message).unwrap();
        let second_pos = report.find(&second.message).unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn fail_report_never_mentions_passing_guidelines() {
        let only = failure(1, "name-length", "too short");
        let report = fail_report(&[&only]);
        assert!(!report.contains("name-capitalization"));
        assert!(!report.contains("version-installable"));
    }
}
