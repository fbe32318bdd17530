// Host-side tests for the typing state machine and its async driver.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod letter {
    include!("../src/core/letter.rs");
}

use letter::*;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
enum SinkEvent {
    Clear,
    Show,
    Line,
    Text(String),
}

#[derive(Default)]
struct RecordingSink {
    events: Vec<SinkEvent>,
    lines: Vec<String>,
}

impl LetterSink for RecordingSink {
    fn clear(&mut self) {
        self.events.push(SinkEvent::Clear);
        self.lines.clear();
    }

    fn show(&mut self) {
        self.events.push(SinkEvent::Show);
    }

    fn append_line(&mut self) -> bool {
        self.events.push(SinkEvent::Line);
        self.lines.push(String::new());
        true
    }

    fn set_line_text(&mut self, text: &str) {
        self.events.push(SinkEvent::Text(text.to_string()));
        if let Some(last) = self.lines.last_mut() {
            *last = text.to_string();
        }
    }
}

fn owned(paragraphs: &[&str]) -> Vec<String> {
    paragraphs.iter().map(|p| p.to_string()).collect()
}

/// Run the driver to completion, returning the sink and the requested delays.
fn run(paragraphs: &[&str]) -> (RecordingSink, Vec<u32>) {
    let mut sink = RecordingSink::default();
    let sleeps = RefCell::new(Vec::new());
    pollster::block_on(write_letter(&mut sink, owned(paragraphs), 32, |ms| {
        sleeps.borrow_mut().push(ms);
        std::future::ready(())
    }));
    (sink, sleeps.into_inner())
}

#[test]
fn two_paragraphs_produce_two_full_lines() {
    let (sink, sleeps) = run(&["Hi", "Bye"]);
    assert_eq!(sink.lines, vec!["Hi".to_string(), "Bye".to_string()]);
    // (2 + 1) + (3 + 1) writes, each followed by one delay
    assert_eq!(sleeps, vec![32; 7]);
    assert_eq!(
        sink.events,
        vec![
            SinkEvent::Clear,
            SinkEvent::Show,
            SinkEvent::Line,
            SinkEvent::Text("".into()),
            SinkEvent::Text("H".into()),
            SinkEvent::Text("Hi".into()),
            SinkEvent::Line,
            SinkEvent::Text("".into()),
            SinkEvent::Text("B".into()),
            SinkEvent::Text("By".into()),
            SinkEvent::Text("Bye".into()),
        ]
    );
}

#[test]
fn empty_list_only_clears_and_shows() {
    let (sink, sleeps) = run(&[]);
    assert!(sink.lines.is_empty());
    assert!(sleeps.is_empty());
    assert_eq!(sink.events, vec![SinkEvent::Clear, SinkEvent::Show]);
}

#[test]
fn driver_completes_only_after_every_delay() {
    // A delay future that stays pending once proves the driver awaits it.
    struct YieldOnce(bool);
    impl std::future::Future for YieldOnce {
        type Output = ();
        fn poll(
            mut self: std::pin::Pin<&mut Self>,
            cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<()> {
            if self.0 {
                std::task::Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                std::task::Poll::Pending
            }
        }
    }

    let mut sink = RecordingSink::default();
    let resolved = RefCell::new(0usize);
    pollster::block_on(async {
        write_letter(&mut sink, owned(&["Hi", "Bye"]), 32, |_| {
            *resolved.borrow_mut() += 1;
            YieldOnce(false)
        })
        .await;
    });
    assert_eq!(*resolved.borrow(), 7);
    assert_eq!(sink.events.last(), Some(&SinkEvent::Text("Bye".into())));
}

#[test]
fn typewriter_walks_states_in_order() {
    let mut tw = Typewriter::new(owned(&["ab"]));
    assert_eq!(tw.state(), TypingState::Idle);
    assert_eq!(tw.step(), TypeStep::NewLine { paragraph: 0 });
    assert_eq!(
        tw.state(),
        TypingState::Typing {
            paragraph: 0,
            chars: 0
        }
    );
    assert_eq!(
        tw.step(),
        TypeStep::Write {
            paragraph: 0,
            text: ""
        }
    );
    assert_eq!(
        tw.step(),
        TypeStep::Write {
            paragraph: 0,
            text: "a"
        }
    );
    assert_eq!(
        tw.step(),
        TypeStep::Write {
            paragraph: 0,
            text: "ab"
        }
    );
    assert_eq!(tw.step(), TypeStep::Finished);
    assert_eq!(tw.state(), TypingState::Done);
    // Done is terminal
    assert_eq!(tw.step(), TypeStep::Finished);
}

#[test]
fn typewriter_with_no_paragraphs_finishes_immediately() {
    let mut tw = Typewriter::new(Vec::new());
    assert_eq!(tw.step(), TypeStep::Finished);
    assert_eq!(tw.state(), TypingState::Done);
}

#[test]
fn multibyte_text_is_typed_per_character() {
    let (sink, sleeps) = run(&["Você —"]);
    assert_eq!(sink.lines, vec!["Você —".to_string()]);
    let texts: Vec<String> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            SinkEvent::Text(t) => Some(t.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        texts,
        vec!["", "V", "Vo", "Voc", "Você", "Você ", "Você —"]
    );
    assert_eq!(sleeps.len(), 7);
}

#[test]
fn char_prefix_handles_bounds() {
    assert_eq!(char_prefix("médica", 0), Some(""));
    assert_eq!(char_prefix("médica", 2), Some("mé"));
    assert_eq!(char_prefix("médica", 6), Some("médica"));
    assert_eq!(char_prefix("médica", 7), None);
    assert_eq!(char_prefix("", 0), Some(""));
    assert_eq!(char_prefix("", 1), None);
}

#[test]
fn empty_paragraph_still_gets_a_line() {
    let (sink, sleeps) = run(&["", "x"]);
    assert_eq!(sink.lines, vec!["".to_string(), "x".to_string()]);
    assert_eq!(sleeps.len(), 1 + 2);
}

/// Sink whose line creation fails for one paragraph. Writes always land on
/// the last line it holds, so stray text would clobber the previous paragraph.
struct FlakySink {
    fail_at: usize,
    appended: usize,
    lines: Vec<String>,
}

impl LetterSink for FlakySink {
    fn clear(&mut self) {
        self.lines.clear();
    }

    fn show(&mut self) {}

    fn append_line(&mut self) -> bool {
        let ok = self.appended != self.fail_at;
        self.appended += 1;
        if ok {
            self.lines.push(String::new());
        }
        ok
    }

    fn set_line_text(&mut self, text: &str) {
        if let Some(last) = self.lines.last_mut() {
            *last = text.to_string();
        }
    }
}

#[test]
fn failed_line_does_not_overwrite_previous_paragraph() {
    let mut sink = FlakySink {
        fail_at: 1,
        appended: 0,
        lines: Vec::new(),
    };
    let sleeps = RefCell::new(0usize);
    pollster::block_on(write_letter(
        &mut sink,
        owned(&["first", "lost", "third"]),
        32,
        |_| {
            *sleeps.borrow_mut() += 1;
            std::future::ready(())
        },
    ));
    assert_eq!(sink.lines, vec!["first".to_string(), "third".to_string()]);
    // Cadence is unchanged for the skipped paragraph
    assert_eq!(*sleeps.borrow(), 6 + 5 + 6);
}
