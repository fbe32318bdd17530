use std::future::Future;

/// Where typed text goes. The DOM implementation appends `<p>` lines to the
/// letter container.
pub trait LetterSink {
    /// Remove all previous content.
    fn clear(&mut self);
    /// Make the container visible.
    fn show(&mut self);
    /// Start a new, empty line; subsequent writes go to it. Returns `false`
    /// when no line could be created, in which case there is no current line.
    fn append_line(&mut self) -> bool;
    /// Replace the text of the current line.
    fn set_line_text(&mut self, text: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingState {
    Idle,
    /// `chars` is the length of the next prefix to write.
    Typing { paragraph: usize, chars: usize },
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeStep<'a> {
    NewLine { paragraph: usize },
    /// Show this prefix, then wait one character delay.
    Write { paragraph: usize, text: &'a str },
    Finished,
}

/// Character-by-character typing sequence over a fixed paragraph queue.
///
/// Each paragraph of `n` characters yields one `NewLine` followed by `n + 1`
/// writes (prefixes of length `0..=n`). Characters are `char`s, so multi-byte
/// text is never split.
#[derive(Clone, Debug)]
pub struct Typewriter {
    paragraphs: Vec<String>,
    state: TypingState,
}

impl Typewriter {
    pub fn new(paragraphs: Vec<String>) -> Self {
        Self {
            paragraphs,
            state: TypingState::Idle,
        }
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[inline]
    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn step(&mut self) -> TypeStep<'_> {
        match self.state {
            TypingState::Idle => self.begin_paragraph(0),
            TypingState::Typing { paragraph, chars } => {
                let Some(end) = prefix_end(&self.paragraphs[paragraph], chars) else {
                    return self.begin_paragraph(paragraph + 1);
                };
                self.state = TypingState::Typing {
                    paragraph,
                    chars: chars + 1,
                };
                TypeStep::Write {
                    paragraph,
                    text: &self.paragraphs[paragraph][..end],
                }
            }
            TypingState::Done => TypeStep::Finished,
        }
    }

    fn begin_paragraph(&mut self, paragraph: usize) -> TypeStep<'static> {
        if paragraph < self.paragraphs.len() {
            self.state = TypingState::Typing {
                paragraph,
                chars: 0,
            };
            TypeStep::NewLine { paragraph }
        } else {
            self.state = TypingState::Done;
            TypeStep::Finished
        }
    }
}

/// Byte offset just past the first `chars` characters of `text`, or `None`
/// past the end.
#[inline]
fn prefix_end(text: &str, chars: usize) -> Option<usize> {
    text.char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()))
        .nth(chars)
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
/// First `chars` characters of `text`, or `None` past the end.
pub fn char_prefix(text: &str, chars: usize) -> Option<&str> {
    prefix_end(text, chars).map(|end| &text[..end])
}

/// Type `paragraphs` into `sink`, awaiting `sleep(delay_ms)` after every
/// write. Resolves once the last paragraph is complete; there is no
/// cancellation.
pub async fn write_letter<S, D, F>(
    sink: &mut S,
    paragraphs: Vec<String>,
    delay_ms: u32,
    mut sleep: D,
)
where
    S: LetterSink,
    D: FnMut(u32) -> F,
    F: Future<Output = ()>,
{
    sink.clear();
    sink.show();
    let count = paragraphs.len();
    let mut typewriter = Typewriter::new(paragraphs);
    let mut has_line = false;
    loop {
        match typewriter.step() {
            TypeStep::NewLine { paragraph } => {
                log::debug!("[letter] paragraph {}/{}", paragraph + 1, count);
                has_line = sink.append_line();
                if !has_line {
                    log::warn!("[letter] no line for paragraph {}", paragraph + 1);
                }
            }
            TypeStep::Write { text, .. } => {
                // Keep the cadence even when the line is missing
                if has_line {
                    sink.set_line_text(text);
                }
                sleep(delay_ms).await;
            }
            TypeStep::Finished => break,
        }
    }
    log::info!("[letter] typed {} paragraphs", count);
}
