//! Marquee rotation for the "now playing" label.
//!
//! Offsets count `char`s, so a rotation never lands inside a UTF-8 sequence.

use crate::core::config::DEFAULT_MARQUEE_WIDTH;

/// Text plus the current left-rotation.
///
/// Invariant: `offset < char_len` whenever the text is non-empty, and `offset == 0`
/// right after the text changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    text: String,
    char_len: usize,
    offset: usize,
}

impl ScrollState {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let char_len = text.chars().count();
        Self {
            text,
            char_len,
            offset: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Replace the text. Offset goes back to 0 only if the text actually changed.
    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            *self = Self::new(text);
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Advance one char. Text that fits in `width` never moves.
    pub fn tick(&mut self, width: usize) {
        if self.char_len <= width {
            return;
        }
        self.offset = (self.offset + 1) % self.char_len;
    }

    /// `text[offset..] + text[..offset]`
    pub fn display(&self) -> String {
        let split = self
            .text
            .char_indices()
            .nth(self.offset)
            .map(|(i, _)| i)
            .unwrap_or(0);

        let mut out = String::with_capacity(self.text.len());
        out.push_str(&self.text[split..]);
        out.push_str(&self.text[..split]);
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarqueeState {
    #[default]
    Idle,
    Scrolling,
}

/// `ScrollState` plus the idle/scrolling switch driven by playback.
///
/// ```text
/// idle --(start)--> scrolling --(stop)--> idle     offset kept
/// scrolling --(tick)--> scrolling                  rotate by one
/// any --(load)--> idle                             offset = 0
/// ```
#[derive(Debug, Clone)]
pub struct Marquee {
    scroll: ScrollState,
    state: MarqueeState,
    width: usize,
}

impl Default for Marquee {
    fn default() -> Self {
        Self::new(DEFAULT_MARQUEE_WIDTH)
    }
}

impl Marquee {
    pub fn new(width: usize) -> Self {
        Self {
            scroll: ScrollState::default(),
            state: MarqueeState::Idle,
            width,
        }
    }

    pub fn state(&self) -> MarqueeState {
        self.state
    }

    pub fn is_scrolling(&self) -> bool {
        self.state == MarqueeState::Scrolling
    }

    pub fn offset(&self) -> usize {
        self.scroll.offset()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn text(&self) -> &str {
        self.scroll.text()
    }

    /// New track: stop and rewind before the next tick can see the new text.
    pub fn load(&mut self, text: &str) {
        self.state = MarqueeState::Idle;
        self.scroll.set_text(text);
        self.scroll.reset();
    }

    pub fn start(&mut self) {
        self.state = MarqueeState::Scrolling;
    }

    pub fn stop(&mut self) {
        self.state = MarqueeState::Idle;
    }

    /// Returns true if the visible text changed.
    pub fn tick(&mut self) -> bool {
        if self.state != MarqueeState::Scrolling {
            return false;
        }
        let before = self.scroll.offset();
        self.scroll.tick(self.width);
        before != self.scroll.offset()
    }

    pub fn display(&self) -> String {
        self.scroll.display()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const LONG: &str = "Title: Song : Artist: Band";

    fn rotate_left(s: &str, k: usize) -> String {
        let chars: Vec<char> = s.chars().collect();
        let k = k % chars.len();
        chars[k..].iter().chain(chars[..k].iter()).collect()
    }

    #[test]
    fn short_text_never_moves() {
        let mut s = ScrollState::new("exactly twenty chars");
        assert_eq!(s.text().chars().count(), 20);
        for _ in 0..50 {
            s.tick(20);
        }
        assert_eq!(s.offset(), 0);
        assert_eq!(s.display(), "exactly twenty chars");
    }

    #[test]
    fn long_text_rotates_one_char_per_tick() {
        let mut s = ScrollState::new(LONG);
        s.tick(20);
        assert_eq!(s.display(), "itle: Song : Artist: BandT");
        s.tick(20);
        assert_eq!(s.display(), "tle: Song : Artist: BandTi");
    }

    #[test]
    fn full_cycle_returns_to_original() {
        let mut s = ScrollState::new(LONG);
        for _ in 0..LONG.chars().count() {
            s.tick(20);
        }
        assert_eq!(s.offset(), 0);
        assert_eq!(s.display(), LONG);
    }

    #[test]
    fn multibyte_text_rotates_by_chars() {
        let text = "제목: 노래 제목이 아주 길다 : 가수: 밴드";
        let mut s = ScrollState::new(text);
        s.tick(20);
        assert_eq!(s.display(), rotate_left(text, 1));
    }

    #[test]
    fn same_text_keeps_offset_new_text_resets() {
        let mut s = ScrollState::new(LONG);
        s.tick(20);
        s.tick(20);
        s.set_text(LONG);
        assert_eq!(s.offset(), 2);

        s.set_text("Title: Other : Artist: Someone Else");
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn empty_text_is_harmless() {
        let mut s = ScrollState::default();
        s.tick(0);
        assert_eq!(s.offset(), 0);
        assert_eq!(s.display(), "");
    }

    #[test]
    fn idle_marquee_ignores_ticks() {
        let mut m = Marquee::new(20);
        m.load(LONG);
        assert!(!m.tick());
        assert_eq!(m.offset(), 0);
    }

    #[test]
    fn pause_resume_keeps_offset() {
        let mut m = Marquee::new(20);
        m.load(LONG);
        m.start();
        m.tick();
        m.tick();
        m.tick();
        m.stop();
        assert!(!m.tick());
        m.start();
        assert_eq!(m.offset(), 3);
        m.tick();
        assert_eq!(m.display(), rotate_left(LONG, 4));
    }

    #[test]
    fn loading_a_track_rewinds_even_with_same_text() {
        let mut m = Marquee::new(20);
        m.load(LONG);
        m.start();
        for _ in 0..7 {
            m.tick();
        }
        m.load(LONG);
        assert_eq!(m.state(), MarqueeState::Idle);
        assert_eq!(m.offset(), 0);
    }

    proptest! {
        #[test]
        fn k_ticks_rotate_by_k_mod_len(text in "[a-zA-Z0-9 :]{21,60}", k in 0usize..200) {
            let mut m = Marquee::new(20);
            m.load(&text);
            m.start();
            for _ in 0..k {
                m.tick();
            }
            prop_assert_eq!(m.display(), rotate_left(&text, k));
            prop_assert!(m.offset() < text.chars().count());
        }

        #[test]
        fn short_text_is_always_static(text in "[a-zA-Z0-9 :]{0,20}", k in 0usize..100) {
            let mut m = Marquee::new(20);
            m.load(&text);
            m.start();
            for _ in 0..k {
                prop_assert!(!m.tick());
            }
            prop_assert_eq!(m.display(), text);
        }

        #[test]
        fn load_always_rewinds(a in "[a-z ]{21,40}", b in "[A-Z ]{21,40}", k in 0usize..100) {
            let mut m = Marquee::new(20);
            m.load(&a);
            m.start();
            for _ in 0..k {
                m.tick();
            }
            m.load(&b);
            prop_assert_eq!(m.offset(), 0);
            m.start();
            m.tick();
            prop_assert_eq!(m.display(), rotate_left(&b, 1));
        }
    }
}
