use super::stats::Stats;
use crate::cards::class::Class;
use crate::cards::deck::Deck;
use crate::cards::hole::Hole;
use crate::strategy::action::Action;
use crate::strategy::chart::Chart;
use crate::strategy::chart::Entry;
use crate::strategy::position::Position;

/// Outcome of grading one submission against the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub answer: Action,
    pub correct: bool,
    pub entry: Entry,
}

/// The drilling state machine.
///
/// Owns the validated chart and the per-session state: the current hole and
/// its class, the hero's seat, the last answer, and running stats. The seat
/// starts on the button and advances one step per deal, so the first dealt
/// hand is played from the cutoff.
///
/// Transitions are [`Session::deal`], [`Session::submit`], and
/// [`Session::reset`]; everything else is read-only.
#[derive(Debug)]
pub struct Session {
    chart: Chart,
    position: Position,
    hole: Option<Hole>,
    class: Option<Class>,
    answer: Option<Action>,
    revealed: bool,
    started: bool,
    stats: Stats,
}

impl Session {
    pub fn new(chart: Chart) -> Self {
        Self {
            chart,
            position: Position::Button,
            hole: None,
            class: None,
            answer: None,
            revealed: false,
            started: false,
            stats: Stats::default(),
        }
    }

    /// Deal the next hand: fresh deck, full shuffle, top two cards become
    /// the hole; the seat rotates and the last answer is cleared.
    pub fn deal(&mut self) -> (Hole, Position) {
        let mut deck = Deck::new();
        deck.shuffle();
        self.receive(deck.hole())
    }

    fn receive(&mut self, hole: Hole) -> (Hole, Position) {
        let class = Class::from(hole);
        self.position = self.position.next();
        self.hole = Some(hole);
        self.class = Some(class);
        self.answer = None;
        self.revealed = false;
        self.started = true;
        log::debug!("dealt {} ({}) at {}", hole, class, self.position);
        (hole, self.position)
    }

    /// Grade a submission against the chart.
    ///
    /// Valid only while a hand is live and ungraded: with no current hole,
    /// or after the result is already revealed, the submission is stale and
    /// ignored with `None`.
    pub fn submit(&mut self, action: Action) -> Option<Verdict> {
        let class = match self.class {
            Some(class) if !self.revealed => class,
            _ => return None,
        };
        let entry = self.chart.entry(self.position, class).clone();
        let correct = action == entry.action;
        self.answer = Some(action);
        self.revealed = true;
        self.stats.record(correct);
        log::debug!(
            "graded {} with {} at {}: {}",
            class,
            action.label(),
            self.position,
            if correct { "correct" } else { "incorrect" },
        );
        Some(Verdict {
            answer: action,
            correct,
            entry,
        })
    }

    /// Zero the running stats. The current hand and seat are untouched.
    pub fn reset(&mut self) {
        self.stats.reset();
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
    pub fn accuracy(&self) -> u8 {
        self.stats.accuracy()
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn hole(&self) -> Option<Hole> {
        self.hole
    }
    pub fn class(&self) -> Option<Class> {
        self.class
    }
    pub fn answer(&self) -> Option<Action> {
        self.answer
    }
    pub fn started(&self) -> bool {
        self.started
    }
    pub fn revealed(&self) -> bool {
        self.revealed
    }
    pub fn chart(&self) -> &Chart {
        &self.chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Chart::load().unwrap())
    }

    #[test]
    fn rotation_visits_all_seats() {
        let mut session = session();
        let visited = (0..6).map(|_| session.deal().1).collect::<Vec<Position>>();
        assert_eq!(
            visited,
            vec![
                Position::Cutoff,
                Position::Hijack,
                Position::Middle,
                Position::BigBlind,
                Position::SmallBlind,
                Position::Button,
            ]
        );
    }

    #[test]
    fn deal_reports_the_stored_hand() {
        let mut session = session();
        let (hole, position) = session.deal();
        assert_eq!(session.hole(), Some(hole));
        assert_eq!(session.position(), position);
        assert_eq!(session.class(), Some(Class::from(hole)));
        assert!(session.started());
        assert!(!session.revealed());
    }

    #[test]
    fn submit_before_deal_is_ignored() {
        let mut session = session();
        assert_eq!(session.submit(Action::Raise), None);
        assert_eq!(session.stats(), Stats::default());
        assert!(!session.started());
    }

    #[test]
    fn premium_pair_on_the_button() {
        let mut session = session();
        for _ in 0..5 {
            session.receive(Hole::from("2c 7d"));
            session.submit(Action::Fold);
        }
        session.reset();
        session.receive(Hole::from("As Ad"));
        assert_eq!(session.position(), Position::Button);
        let verdict = session.submit(Action::Raise).unwrap();
        assert!(verdict.correct);
        assert_eq!(verdict.entry.action, Action::Raise);
        assert_eq!((session.stats().correct(), session.stats().total()), (1, 1));
        assert_eq!(session.accuracy(), 100);
    }

    #[test]
    fn incorrect_answer_counts_against_accuracy() {
        let mut session = session();
        session.receive(Hole::from("As Ah"));
        assert!(session.submit(Action::Raise).unwrap().correct);
        session.receive(Hole::from("Ks Kh"));
        let verdict = session.submit(Action::Fold).unwrap();
        assert!(!verdict.correct);
        assert_eq!((session.stats().correct(), session.stats().total()), (1, 2));
        assert_eq!(session.accuracy(), 50);
    }

    #[test]
    fn absent_class_grades_against_fallback() {
        let mut session = session();
        session.receive(Hole::from("2c 7d"));
        session.receive(Hole::from("2c 7d"));
        assert_eq!(session.position(), Position::Hijack);
        let verdict = session.submit(Action::Fold).unwrap();
        let fallback = session.chart().range(Position::Hijack).fallback().clone();
        assert_eq!(verdict.entry, fallback);
        assert!(verdict.correct);
    }

    #[test]
    fn double_submission_is_stale() {
        let mut session = session();
        session.receive(Hole::from("As Ad"));
        assert!(session.submit(Action::Raise).is_some());
        assert_eq!(session.submit(Action::Fold), None);
        assert_eq!(session.stats().total(), 1);
        assert_eq!(session.answer(), Some(Action::Raise));
    }

    #[test]
    fn reset_clears_stats_only() {
        let mut session = session();
        let (hole, position) = session.deal();
        session.submit(Action::Call);
        session.reset();
        assert_eq!(session.stats(), Stats::default());
        assert_eq!(session.accuracy(), 0);
        assert_eq!(session.hole(), Some(hole));
        assert_eq!(session.position(), position);
        assert!(session.revealed());
    }

    #[test]
    fn dealing_clears_the_verdict() {
        let mut session = session();
        session.deal();
        session.submit(Action::Call);
        session.deal();
        assert!(!session.revealed());
        assert_eq!(session.answer(), None);
    }
}
