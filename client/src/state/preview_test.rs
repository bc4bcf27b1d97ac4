use super::*;

fn transcript(language: &str, source: &str) -> Vec<String> {
    match render(language, source) {
        PreviewOutput::SimulatedTranscript(lines) => lines,
        PreviewOutput::SandboxedMarkup(_) => panic!("expected transcript for {language}"),
    }
}

// =============================================================
// Markup
// =============================================================

#[test]
fn html_returns_source_unchanged() {
    let source = "<h1>Hi</h1>\n<script>alert(document.cookie)</script>";
    assert_eq!(render("html", source), PreviewOutput::SandboxedMarkup(source.to_owned()));
}

#[test]
fn html_empty_source_is_still_markup() {
    assert_eq!(render("html", ""), PreviewOutput::SandboxedMarkup(String::new()));
}

#[test]
fn html_match_is_case_sensitive() {
    let lines = transcript("HTML", "<p>x</p>");
    assert_eq!(lines[0], "> Simulating execution for HTML...");
    assert_eq!(lines[1], "> Live execution for this language is not supported in this demo.");
}

#[test]
fn markup_has_no_transcript_text() {
    assert_eq!(render("html", "<p>x</p>").transcript_text(), None);
}

// =============================================================
// Simulated transcripts
// =============================================================

#[test]
fn python_transcript_ignores_source() {
    let a = transcript("python", "print('something else')");
    let b = transcript("python", "import os; os.system('rm -rf /')");
    assert_eq!(a, b);
    assert_eq!(a, vec!["> Simulating execution for python...", "> Hello, World!"]);
    assert!(a.last().unwrap().ends_with("Hello, World!"));
}

#[test]
fn java_transcript_prints_hello_world() {
    assert_eq!(
        transcript("java", "class A {}"),
        vec!["> Simulating execution for java...", "> Hello, World!"]
    );
}

#[test]
fn sql_transcript_reports_one_row() {
    assert_eq!(
        transcript("sql", "DELETE FROM Customers;"),
        vec!["> Simulating execution for sql...", "> (1 row(s) affected)"]
    );
}

#[test]
fn unknown_language_falls_through_to_unsupported() {
    assert_eq!(
        transcript("css", "body {}"),
        vec![
            "> Simulating execution for css...",
            "> Live execution for this language is not supported in this demo."
        ]
    );
}

#[test]
fn empty_language_is_unsupported() {
    let lines = transcript("", "");
    assert_eq!(lines[0], "> Simulating execution for ...");
    assert_eq!(lines[1], "> Live execution for this language is not supported in this demo.");
}

#[test]
fn transcript_text_joins_lines() {
    assert_eq!(
        render("sql", "").transcript_text().as_deref(),
        Some("> Simulating execution for sql...\n> (1 row(s) affected)")
    );
}

// =============================================================
// Sandbox policy
// =============================================================

#[test]
fn learner_sandbox_allows_scripts_only() {
    assert_eq!(LEARNER_MARKUP_SANDBOX.attribute(), "allow-scripts");
    assert_eq!(LEARNER_MARKUP_SANDBOX.capabilities(), &[SandboxCapability::AllowScripts]);
}

#[test]
fn learner_sandbox_never_grants_other_capabilities() {
    let attr = LEARNER_MARKUP_SANDBOX.attribute();
    for denied in [
        "allow-same-origin",
        "allow-top-navigation",
        "allow-forms",
        "allow-popups",
        "allow-modals",
        "allow-storage-access-by-user-activation",
        "allow-downloads",
    ] {
        assert!(!attr.contains(denied), "sandbox unexpectedly grants {denied}");
    }
}
