//! Integration tests for sharing a logger across threads and for the
//! tracing output target.

use querytrace::prelude::*;
use std::thread;

/// Test that every thread's queries land in one buffer
#[test]
fn test_shared_logger_across_threads() {
    let logger = SharedLogger::new(
        DebugLogger::new()
            .with_probe(FixedProbe::interactive())
            .with_target(OutputTarget::writer(MemoryWriter::new())),
    );

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..10 {
                    logger.log(
                        "SELECT * FROM job WHERE worker = :w AND step = :s",
                        Some(&bindings! { ":w" => worker, ":s" => i }),
                    );
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(logger.len(), 80);
    assert_eq!(logger.grep("worker = 3 AND").len(), 10);
}

/// Test that settings changed through one handle apply to all
#[test]
fn test_shared_settings() {
    let logger = SharedLogger::from(DebugLogger::new().with_probe(FixedProbe::interactive()));
    let other = logger.clone();
    logger.set_muted(true);
    other.set_max_value_length(2);

    logger.log(":v", Some(&bindings! { ":v" => "abc" }));
    assert_eq!(other.logs(), ["'ab... '"]);

    other.clear();
    assert!(logger.is_empty());
}

/// Test forwarding traces to `tracing`
#[test]
fn test_tracing_target() {
    let captured = MemoryWriter::new();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut logger = DebugLogger::new()
            .with_probe(FixedProbe::non_interactive())
            .with_target(OutputTarget::Tracing);
        logger.log("DROP TABLE book", Some(&Bindings::new()));
        assert_eq!(logger.logs(), ["DROP TABLE book"]);
    });

    let output = captured.contents();
    assert!(output.contains("querytrace::sql"));
    assert!(output.contains("DROP TABLE book"));
    assert!(output.contains("highlight=true"));
}
