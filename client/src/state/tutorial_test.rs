use super::*;

fn detail(id: &str, code: &str) -> TutorialDetail {
    TutorialDetail {
        id: id.to_owned(),
        title: id.to_uppercase(),
        language: id.to_owned(),
        content: "# Lesson".to_owned(),
        code: code.to_owned(),
    }
}

fn loading(topic: &str, seq: u64) -> (TutorialLoad, FetchTicket) {
    let ticket = FetchTicket::new(topic, seq);
    (TutorialLoad::Loading { ticket: ticket.clone() }, ticket)
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_success_creates_editor_from_code() {
    let (mut load, ticket) = loading("html", 1);
    assert!(load.resolve(&ticket, Ok(detail("html", "<p>hi</p>"))));
    assert_eq!(load.phase(), LoadPhase::Ready);
    assert_eq!(load.editor().unwrap().text(), "<p>hi</p>");
    assert_eq!(load.detail().unwrap().id, "html");
}

#[test]
fn resolve_not_found_sets_error_without_editor() {
    let (mut load, ticket) = loading("html", 1);
    let applied = load.resolve(&ticket, Err(ContentError::NotFound { id: "html".to_owned() }));
    assert!(applied);
    assert_eq!(load.phase(), LoadPhase::Failed("Error: Could not find this tutorial.".to_owned()));
    assert!(load.editor().is_none());
    assert!(load.detail().is_none());
}

#[test]
fn resolve_ignores_stale_ticket() {
    let (mut load, _current) = loading("python", 2);
    let stale = FetchTicket::new("html", 1);
    assert!(!load.resolve(&stale, Ok(detail("html", "old"))));
    assert_eq!(load.phase(), LoadPhase::Loading);
}

#[test]
fn resolve_ignores_same_topic_with_older_seq() {
    let (mut load, _current) = loading("html", 3);
    let earlier = FetchTicket::new("html", 1);
    assert!(!load.resolve(&earlier, Ok(detail("html", "old"))));
    assert_eq!(load.phase(), LoadPhase::Loading);
}

#[test]
fn resolve_only_applies_once() {
    let (mut load, ticket) = loading("html", 1);
    assert!(load.resolve(&ticket, Ok(detail("html", "first"))));
    assert!(!load.resolve(&ticket, Ok(detail("html", "second"))));
    assert_eq!(load.editor().unwrap().text(), "first");
}

#[test]
fn resolve_when_idle_is_ignored() {
    let mut load = TutorialLoad::Idle;
    assert!(!load.resolve(&FetchTicket::new("html", 1), Ok(detail("html", ""))));
    assert_eq!(load, TutorialLoad::Idle);
}

// =============================================================
// EditorBuffer
// =============================================================

#[test]
fn editor_edits_do_not_touch_detail_code() {
    let (mut load, ticket) = loading("python", 1);
    load.resolve(&ticket, Ok(detail("python", "print('hi')")));
    load.editor_mut().unwrap().set("print('changed')");
    assert_eq!(load.editor().unwrap().text(), "print('changed')");
    assert_eq!(load.detail().unwrap().code, "print('hi')");
}

// =============================================================
// IndexLoad
// =============================================================

#[test]
fn index_entries_empty_until_ready() {
    assert!(IndexLoad::default().entries().is_empty());
    assert!(IndexLoad::from_result(Err(ContentError::Status(500))).entries().is_empty());
}

#[test]
fn index_entries_keep_fetch_order() {
    let index = vec![
        TutorialSummary { id: "sql".to_owned(), title: "SQL".to_owned() },
        TutorialSummary { id: "html".to_owned(), title: "HTML".to_owned() },
    ];
    let load = IndexLoad::from_result(Ok(index.clone()));
    assert_eq!(load.entries(), index.as_slice());
}
