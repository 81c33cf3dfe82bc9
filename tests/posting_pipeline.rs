//! End-to-end exercise of the utilities the way a posting client uses
//! them: resolve where to keep state, assemble a body, run the message
//! through the reference pipeline hooks.

use newspost_rs::hooks::{
    apply_content_type, strip_headers, ContentTypeDefault, OutgoingMessage, StripHeaders,
};
use newspost_rs::{join_lines, save_data_path, ServerAddr, DATA_HOME_ENV};

#[test]
fn test_prepare_posting() {
    let addr = ServerAddr::parse("news.example.org", Some(119)).unwrap();

    let mut msg = OutgoingMessage::new();
    msg.push_header("Newsgroups", "misc.test");
    msg.push_header("Subject", "test");
    msg.push_header("To", "leak@example.org");
    msg.push_header("Bcc", "leak2@example.org");
    msg.set_body(join_lines(["First line.", "", "-- ", "sig"]));

    strip_headers(&mut msg, &StripHeaders::default());
    apply_content_type(&mut msg, &ContentTypeDefault::default());

    assert_eq!(addr.port(), Some(119));
    assert!(!msg.contains_header("To"));
    assert!(!msg.contains_header("Bcc"));
    assert_eq!(msg.header("Content-Type"), Some("text/plain; charset=US-ASCII"));
    assert_eq!(msg.body(), b"First line.\n\n-- \nsig\n");
}

/// Startup path: the data directory is created once and then reused.
#[test]
fn test_data_directory_startup() {
    let tmp = tempfile::tempdir().unwrap();
    // This binary has exactly one test touching the environment.
    std::env::set_var(DATA_HOME_ENV, tmp.path());

    let dir = save_data_path("newspost").unwrap();
    assert!(dir.is_dir());
    assert_eq!(dir, save_data_path("newspost").unwrap());

    std::fs::write(dir.join("history"), b"<msgid@example.org>\n").unwrap();
    assert!(dir.join("history").is_file());
}
