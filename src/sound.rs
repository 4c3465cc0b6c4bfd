//! Fire-and-forget sound cues
use std::fmt;
use std::io::Write;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Cue {
    /// The snake ate some food
    Eat,
    /// The game just ended
    GameOver,
}

impl Cue {
    /// Number of terminal bells rung for the cue
    fn bells(self) -> usize {
        match self {
            Cue::Eat => 1,
            Cue::GameOver => 2,
        }
    }
}

/// Something that can play sound cues.  Playing a cue never fails from the
/// caller's point of view; problems are only logged.
pub(crate) trait Sound: fmt::Debug {
    fn play(&mut self, cue: Cue);
}

/// Plays cues by ringing the terminal bell.  Each bell starts from scratch, so
/// a cue triggered while a previous one is still sounding simply restarts it.
#[derive(Debug)]
pub(crate) struct Bell<W> {
    out: W,
}

impl<W> Bell<W> {
    pub(crate) fn new(out: W) -> Bell<W> {
        Bell { out }
    }
}

impl<W: Write + fmt::Debug> Sound for Bell<W> {
    fn play(&mut self, cue: Cue) {
        let bells = "\x07".repeat(cue.bells());
        let r = self
            .out
            .write_all(bells.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = r {
            log::warn!("Failed to ring terminal bell for {cue:?} cue: {e}");
        }
    }
}

/// Plays nothing
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Silent;

impl Sound for Silent {
    fn play(&mut self, cue: Cue) {
        log::debug!("Not playing {cue:?} cue: sound is off");
    }
}
