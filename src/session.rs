use crate::models::Question;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

pub const DEFAULT_COUNTDOWN_SECS: u32 = 30;

/// What the question card currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Display {
    NotStarted,
    Question(Question),
    /// Every question of the pass has been shown.
    Exhausted,
}

/// Outcome of [`QuestionSession::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Drawn(Question),
    Exhausted,
    Blocked,
}

/// One-shot pacing timer. Counts down from the ceiling to zero, one step per
/// tick, then deactivates on the following tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    ceiling: u32,
    remaining: u32,
    active: bool,
    generation: u64,
}

impl Countdown {
    pub fn new(ceiling: u32) -> Self {
        Self {
            ceiling,
            remaining: 0,
            active: false,
            generation: 0,
        }
    }

    /// Restarts the countdown and returns the generation its ticks must carry.
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.remaining = self.ceiling;
        self.active = true;
        self.generation
    }

    /// Applies a tick from countdown `generation`. Ticks from an earlier start
    /// are ignored. Returns whether the tick was applied.
    pub fn tick(&mut self, generation: u64) -> bool {
        if !self.active || generation != self.generation {
            return false;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
        } else {
            self.active = false;
        }
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ticks needed after `start` until the gate opens again.
    pub fn ticks_to_expire(&self) -> u32 {
        self.ceiling + 1
    }
}

/// State of one layer playthrough: the loaded pool, the questions already
/// shown in the current pass, and the countdown gating the next draw.
#[derive(Debug, Clone)]
pub struct QuestionSession {
    pool: Vec<Question>,
    shown: HashSet<Question>,
    current: Display,
    started: bool,
    loading: bool,
    countdown: Countdown,
}

impl QuestionSession {
    /// A session whose pool is still being loaded.
    pub fn new(countdown_secs: u32) -> Self {
        Self {
            pool: Vec::new(),
            shown: HashSet::new(),
            current: Display::NotStarted,
            started: false,
            loading: true,
            countdown: Countdown::new(countdown_secs),
        }
    }

    pub fn with_pool(pool: Vec<Question>, countdown_secs: u32) -> Self {
        let mut session = Self::new(countdown_secs);
        session.set_pool(pool);
        session
    }

    /// Installs the loaded pool. The pool is fixed for the rest of the session,
    /// so only the first call has an effect.
    pub fn set_pool(&mut self, pool: Vec<Question>) {
        if !self.loading {
            tracing::debug!("pool already loaded, ignoring");
            return;
        }
        self.pool = pool;
        self.loading = false;
    }

    pub fn pool(&self) -> &[Question] {
        &self.pool
    }

    pub fn shown(&self) -> &HashSet<Question> {
        &self.shown
    }

    pub fn current(&self) -> &Display {
        &self.current
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn can_advance(&self) -> bool {
        !self.pool.is_empty() && !self.loading && !self.countdown.is_active()
    }

    /// Pool entries not yet shown in this pass, in pool order. A line that
    /// appears more than once keeps every copy, so it is drawn more often.
    pub fn remaining(&self) -> Vec<&Question> {
        self.pool
            .iter()
            .filter(|q| !self.shown.contains(*q))
            .collect()
    }

    /// (shown in this pass, distinct questions in the pool)
    pub fn progress(&self) -> (usize, usize) {
        let distinct: HashSet<&Question> = self.pool.iter().collect();
        (self.shown.len(), distinct.len())
    }

    /// Draws the next question. Starts the countdown whenever it is allowed
    /// to proceed; once the pass is complete it reports exhaustion and clears
    /// the shown set so the following draw starts a new pass.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Advance {
        if !self.can_advance() {
            return Advance::Blocked;
        }

        self.started = true;
        self.countdown.start();

        let next = self.remaining().choose(rng).map(|q| (*q).clone());
        match next {
            Some(question) => {
                self.shown.insert(question.clone());
                self.current = Display::Question(question.clone());
                tracing::debug!(
                    shown = self.shown.len(),
                    pool = self.pool.len(),
                    "drew question"
                );
                Advance::Drawn(question)
            }
            None => {
                self.shown.clear();
                self.current = Display::Exhausted;
                tracing::info!("layer exhausted, starting a new pass");
                Advance::Exhausted
            }
        }
    }

    /// Forwards a countdown tick. Returns whether the tick was applied.
    pub fn tick(&mut self, generation: u64) -> bool {
        self.countdown.tick(generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(texts: &[&str]) -> Vec<Question> {
        texts.iter().map(|t| Question::new(*t)).collect()
    }

    fn expire(session: &mut QuestionSession) {
        let generation = session.countdown().generation();
        for _ in 0..session.countdown().ticks_to_expire() {
            assert!(session.tick(generation));
        }
        assert!(!session.countdown().is_active());
    }

    fn shown_subset_of_pool(session: &QuestionSession) -> bool {
        session.shown().iter().all(|q| session.pool().contains(q))
    }

    #[test]
    fn test_new_session_is_loading() {
        let session = QuestionSession::new(30);
        assert!(session.is_loading());
        assert!(!session.is_started());
        assert_eq!(session.current(), &Display::NotStarted);
        assert!(!session.can_advance());
    }

    #[test]
    fn test_advance_blocked_while_loading() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuestionSession::new(30);
        assert_eq!(session.advance(&mut rng), Advance::Blocked);
        assert!(!session.is_started());
        assert!(!session.countdown().is_active());
    }

    #[test]
    fn test_empty_pool_blocks_advance_permanently() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = QuestionSession::with_pool(Vec::new(), 30);
        assert!(!session.is_loading());
        for _ in 0..5 {
            assert_eq!(session.advance(&mut rng), Advance::Blocked);
        }
        assert!(!session.is_started());
        assert_eq!(session.current(), &Display::NotStarted);
    }

    #[test]
    fn test_pool_is_loaded_once() {
        let mut session = QuestionSession::new(30);
        session.set_pool(pool(&["Q1"]));
        session.set_pool(pool(&["Q2", "Q3"]));
        assert_eq!(session.pool(), pool(&["Q1"]).as_slice());
    }

    #[test]
    fn test_first_advance_starts_session_and_countdown() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = QuestionSession::with_pool(pool(&["Q1", "Q2", "Q3"]), 30);

        let question = match session.advance(&mut rng) {
            Advance::Drawn(q) => q,
            other => panic!("expected a question, got {:?}", other),
        };
        assert!(session.is_started());
        assert!(session.pool().contains(&question));
        assert_eq!(session.current(), &Display::Question(question));
        assert_eq!(session.shown().len(), 1);
        assert!(session.countdown().is_active());
        assert_eq!(session.countdown().remaining(), 30);
    }

    #[test]
    fn test_advance_blocked_during_countdown() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = QuestionSession::with_pool(pool(&["Q1", "Q2"]), 30);
        session.advance(&mut rng);
        let before = session.current().clone();

        assert_eq!(session.advance(&mut rng), Advance::Blocked);
        assert_eq!(session.current(), &before);
        assert_eq!(session.shown().len(), 1);
    }

    #[test]
    fn test_three_question_scenario() {
        let mut rng = StdRng::seed_from_u64(5);
        let full = pool(&["Q1", "Q2", "Q3"]);
        let mut session = QuestionSession::with_pool(full.clone(), 30);
        let mut drawn = Vec::new();

        for expected_shown in 1..=3 {
            let remaining_before: Vec<Question> =
                session.remaining().into_iter().cloned().collect();
            match session.advance(&mut rng) {
                Advance::Drawn(q) => {
                    assert!(remaining_before.contains(&q));
                    drawn.push(q);
                }
                other => panic!("expected a question, got {:?}", other),
            }
            assert_eq!(session.shown().len(), expected_shown);
            expire(&mut session);
        }

        let distinct: HashSet<&Question> = drawn.iter().collect();
        assert_eq!(distinct.len(), 3);

        assert_eq!(session.advance(&mut rng), Advance::Exhausted);
        assert_eq!(session.current(), &Display::Exhausted);
        assert!(session.shown().is_empty());
        expire(&mut session);

        match session.advance(&mut rng) {
            Advance::Drawn(q) => assert!(full.contains(&q)),
            other => panic!("expected a fresh pass, got {:?}", other),
        }
        assert_eq!(session.shown().len(), 1);
    }

    #[test]
    fn test_shown_stays_subset_of_pool() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut session =
                QuestionSession::with_pool(pool(&["A", "B", "C", "D", "E"]), 1);
            for _ in 0..23 {
                session.advance(&mut rng);
                assert!(shown_subset_of_pool(&session));
                expire(&mut session);
            }
        }
    }

    #[test]
    fn test_no_repeats_within_a_pass() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut session = QuestionSession::with_pool(pool(&["A", "B", "C", "D"]), 0);
        for _ in 0..3 {
            let mut pass = HashSet::new();
            for _ in 0..4 {
                let Advance::Drawn(q) = session.advance(&mut rng) else {
                    panic!("pass ended early");
                };
                assert!(pass.insert(q));
                expire(&mut session);
            }
            assert_eq!(session.advance(&mut rng), Advance::Exhausted);
            expire(&mut session);
        }
    }

    #[test]
    fn test_duplicate_lines_count_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = QuestionSession::with_pool(pool(&["A", "A", "B"]), 0);
        assert_eq!(session.progress(), (0, 2));

        for _ in 0..2 {
            assert!(matches!(session.advance(&mut rng), Advance::Drawn(_)));
            expire(&mut session);
        }
        assert_eq!(session.progress(), (2, 2));
        assert_eq!(session.advance(&mut rng), Advance::Exhausted);
    }

    #[test]
    fn test_repeated_lines_weight_the_draw() {
        let mut first_a = 0;
        let mut first_b = 0;
        for seed in 0..400 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut session = QuestionSession::with_pool(pool(&["A", "A", "A", "B"]), 0);
            match session.advance(&mut rng) {
                Advance::Drawn(q) if q.text == "A" => first_a += 1,
                Advance::Drawn(_) => first_b += 1,
                other => panic!("expected a question, got {:?}", other),
            }
        }
        assert_eq!(first_a + first_b, 400);
        // A is three times as likely as B.
        assert!(first_a > 2 * first_b, "A drawn {first_a} times, B {first_b}");
        assert!(first_b > 0);
    }

    #[test]
    fn test_remaining_keeps_repeated_lines() {
        let session = QuestionSession::with_pool(pool(&["A", "B", "A"]), 0);
        let remaining: Vec<&str> = session.remaining().iter().map(|q| q.text.as_str()).collect();
        assert_eq!(remaining, vec!["A", "B", "A"]);
    }

    #[test]
    fn test_single_question_pool_alternates() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut session = QuestionSession::with_pool(pool(&["Only"]), 0);
        assert_eq!(session.advance(&mut rng), Advance::Drawn(Question::new("Only")));
        expire(&mut session);
        assert_eq!(session.advance(&mut rng), Advance::Exhausted);
        expire(&mut session);
        assert_eq!(session.advance(&mut rng), Advance::Drawn(Question::new("Only")));
    }

    #[test]
    fn test_countdown_expires_after_ceiling_plus_one_ticks() {
        let mut countdown = Countdown::new(30);
        let generation = countdown.start();

        for expected in (0..30).rev() {
            assert!(countdown.tick(generation));
            assert!(countdown.is_active());
            assert_eq!(countdown.remaining(), expected);
        }
        assert!(countdown.tick(generation));
        assert!(!countdown.is_active());
        assert!(!countdown.tick(generation));
    }

    #[test]
    fn test_session_reenabled_after_31_ticks() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = QuestionSession::with_pool(pool(&["Q1", "Q2"]), 30);
        session.advance(&mut rng);
        let generation = session.countdown().generation();

        for _ in 0..30 {
            session.tick(generation);
            assert!(!session.can_advance());
        }
        session.tick(generation);
        assert!(session.can_advance());
    }

    #[test]
    fn test_stale_ticks_are_ignored() {
        let mut countdown = Countdown::new(5);
        let first = countdown.start();
        let second = countdown.start();
        assert_ne!(first, second);

        assert!(!countdown.tick(first));
        assert_eq!(countdown.remaining(), 5);
        assert!(countdown.tick(second));
        assert_eq!(countdown.remaining(), 4);
    }

    #[test]
    fn test_zero_ceiling_needs_one_tick() {
        let mut countdown = Countdown::new(0);
        let generation = countdown.start();
        assert!(countdown.is_active());
        assert!(countdown.tick(generation));
        assert!(!countdown.is_active());
    }
}
