//! Round flow integration tests.

use std::collections::VecDeque;

use asciijack::{
    Action, ActionError, BetError, BetSource, Card, Display, HandOutcome, InputSource,
    MAX_BET, RoundError, SHOE_SIZE, Session, SessionOptions, Suit,
};

const FILLER: usize = 40;

const fn card(rank: u8) -> Card {
    Card::new(Suit::Hearts, rank)
}

/// A session whose shoe deals `draws` first, then tens.
fn session_with_draws(chips: i64, draws: &[u8]) -> Session {
    let mut session = Session::new(SessionOptions::default().with_starting_chips(chips));
    session
        .shoe_mut()
        .stack(&[Card::new(Suit::Clubs, 10); FILLER]);
    let draws: Vec<Card> = draws.iter().map(|&r| card(r)).collect();
    session.shoe_mut().stack(&draws);
    session
}

#[derive(Default)]
struct ScriptedInput {
    answers: VecDeque<Action>,
    prompts: Vec<(String, Vec<Action>)>,
}

impl ScriptedInput {
    fn new(answers: &[Action]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            prompts: Vec::new(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn request_decision(&mut self, prompt: &str, legal: &[Action]) -> Action {
        self.prompts.push((prompt.to_string(), legal.to_vec()));
        self.answers.pop_front().expect("no scripted decision left")
    }
}

#[derive(Default)]
struct RecordingDisplay {
    lines: Vec<String>,
    renders: Vec<(String, Vec<Card>, bool)>,
    balances: Vec<i64>,
}

impl RecordingDisplay {
    fn has_line(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl Display for RecordingDisplay {
    fn append(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn render_hand(&mut self, title: &str, cards: &[Card], hide_first: bool) {
        self.renders
            .push((title.to_string(), cards.to_vec(), hide_first));
    }

    fn show_chip_balance(&mut self, chips: i64) {
        self.balances.push(chips);
    }
}

struct QueuedBets(VecDeque<String>);

impl QueuedBets {
    fn new(bets: &[&str]) -> Self {
        Self(bets.iter().map(|b| (*b).to_string()).collect())
    }
}

impl BetSource for QueuedBets {
    fn bet_amount(&mut self) -> Option<String> {
        self.0.pop_front()
    }
}

#[test]
fn stand_on_eighteen_loses_to_twenty() {
    // player 10 8, dealer hole 6 up 4, dealer draws 10
    let mut session = session_with_draws(10_000, &[10, 8, 6, 4, 10]);
    let mut input = ScriptedInput::new(&[Action::Stand]);
    let mut display = RecordingDisplay::default();

    let result = session.play_round(100, &mut input, &mut display).unwrap();

    assert_eq!(result.dealer_value, 20);
    assert_eq!(result.hands.len(), 1);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.hands[0].payout, -100);
    assert_eq!(result.net, -100);
    assert_eq!(session.chips(), 9_900);
    assert_eq!(display.balances.last(), Some(&9_900));
}

#[test]
fn dealer_hole_card_is_hidden_until_dealer_turn() {
    let mut session = session_with_draws(10_000, &[10, 8, 6, 4, 10]);
    let mut input = ScriptedInput::new(&[Action::Stand]);
    let mut display = RecordingDisplay::default();

    session.play_round(100, &mut input, &mut display).unwrap();

    let dealer: Vec<_> = display
        .renders
        .iter()
        .filter(|(title, _, _)| title == "Dealer")
        .collect();
    assert!(dealer[0].2);
    assert_eq!(dealer[0].1, vec![card(6), card(4)]);
    assert!(dealer.iter().skip(1).all(|(_, _, hidden)| !hidden));
}

#[test]
fn natural_pays_three_to_two_before_dealer() {
    // dealer 10 6 must still draw and busts on the filler ten
    let mut session = session_with_draws(1_000, &[1, 13, 10, 6]);
    let mut input = ScriptedInput::default();
    let mut display = RecordingDisplay::default();

    let result = session.play_round(50, &mut input, &mut display).unwrap();

    assert!(input.prompts.is_empty());
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 75);
    assert!(result.dealer_bust);
    assert_eq!(session.chips(), 1_075);
    assert!(display.has_line("Player: BLACKJACK!"));
}

#[test]
fn natural_payout_rounds_down() {
    let mut session = session_with_draws(1_000, &[1, 12, 10, 9]);
    let result = session
        .play_round(15, &mut ScriptedInput::default(), &mut RecordingDisplay::default())
        .unwrap();
    assert_eq!(result.hands[0].payout, 22);
}

#[test]
fn bet_above_balance_is_refused_without_side_effects() {
    let mut session = Session::new(SessionOptions::default().with_starting_chips(100));
    let mut input = ScriptedInput::default();
    let mut display = RecordingDisplay::default();

    let err = session.play_round(150, &mut input, &mut display).unwrap_err();

    assert_eq!(
        err,
        RoundError::Bet(BetError::InsufficientFunds {
            bet: 150,
            balance: 100
        })
    );
    assert_eq!(session.chips(), 100);
    assert_eq!(session.shoe().remaining(), 0);
    assert_eq!(session.rounds_played(), 0);
    assert!(display.lines.is_empty());
}

#[test]
fn zero_bet_is_refused() {
    let mut session = Session::new(SessionOptions::default());
    let err = session
        .play_round(0, &mut ScriptedInput::default(), &mut RecordingDisplay::default())
        .unwrap_err();
    assert_eq!(err, RoundError::Bet(BetError::NotPositive));
}

#[test]
fn hitting_to_twenty_one_stands_automatically() {
    // player 5 6 hits a ten; dealer 10 7 stands
    let mut session = session_with_draws(1_000, &[5, 6, 10, 7, 10]);
    let mut input = ScriptedInput::new(&[Action::Hit]);
    let mut display = RecordingDisplay::default();

    let result = session.play_round(10, &mut input, &mut display).unwrap();

    assert_eq!(input.prompts.len(), 1);
    assert_eq!(result.hands[0].player_value, 21);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].payout, 10);
}

#[test]
fn double_is_only_offered_on_two_cards() {
    // player 2 3 hits a 4, then stands on 9; dealer 10 8
    let mut session = session_with_draws(1_000, &[2, 3, 10, 8, 4]);
    let mut input = ScriptedInput::new(&[Action::Hit, Action::Stand]);

    session
        .play_round(10, &mut input, &mut RecordingDisplay::default())
        .unwrap();

    assert!(input.prompts[0].1.contains(&Action::Double));
    assert_eq!(input.prompts[1].1, vec![Action::Hit, Action::Stand]);
    assert_eq!(input.prompts[0].0, "Player: Hit or stand (h/s/d)? ");
    assert_eq!(input.prompts[1].0, "Player: Hit or stand? ");
}

#[test]
fn double_down_doubles_bet_and_draws_one_card() {
    // player 5 4 doubles into a ten; dealer 10 8
    let mut session = session_with_draws(1_000, &[5, 4, 10, 8, 10]);
    let mut input = ScriptedInput::new(&[Action::Double]);
    let mut display = RecordingDisplay::default();

    let result = session.play_round(100, &mut input, &mut display).unwrap();

    assert_eq!(input.prompts.len(), 1);
    assert_eq!(result.hands[0].bet, 200);
    assert_eq!(result.hands[0].player_value, 19);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].payout, 200);
    assert_eq!(session.chips(), 1_200);
    assert!(display.has_line("Player: doubled →"));
}

#[test]
fn double_down_bust_loses_double() {
    // player 10 2 doubles into a king; dealer 10 7 still plays
    let mut session = session_with_draws(1_000, &[10, 2, 10, 7, 13]);
    let mut input = ScriptedInput::new(&[Action::Double]);
    let mut display = RecordingDisplay::default();

    let result = session.play_round(100, &mut input, &mut display).unwrap();

    assert_eq!(result.hands[0].outcome, HandOutcome::Bust);
    assert_eq!(result.hands[0].payout, -200);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(session.chips(), 800);
    assert!(display.has_line("Player: BUST"));
}

#[test]
fn tie_is_a_push() {
    let mut session = session_with_draws(1_000, &[10, 8, 9, 9]);
    let mut input = ScriptedInput::new(&[Action::Stand]);

    let result = session
        .play_round(100, &mut input, &mut RecordingDisplay::default())
        .unwrap();

    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.net, 0);
    assert_eq!(session.chips(), 1_000);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    // dealer ace 6 is soft 17 and must not draw
    let mut session = session_with_draws(1_000, &[10, 9, 1, 6]);
    let mut input = ScriptedInput::new(&[Action::Stand]);

    let result = session
        .play_round(100, &mut input, &mut RecordingDisplay::default())
        .unwrap();

    assert_eq!(result.dealer_value, 17);
    assert_eq!(session.shoe().remaining(), FILLER);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
}

#[test]
fn dealer_draws_on_sixteen() {
    // dealer 10 6 draws a 5
    let mut session = session_with_draws(1_000, &[10, 9, 10, 6, 5]);
    let mut input = ScriptedInput::new(&[Action::Stand]);

    let result = session
        .play_round(100, &mut input, &mut RecordingDisplay::default())
        .unwrap();

    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
}

#[test]
fn split_plays_two_hands_without_double_or_resplit() {
    // player 8 8, dealer 10 7, split cards 3 and 10, hand 1 hits a 9
    let mut session = session_with_draws(1_000, &[8, 8, 10, 7, 3, 10, 9]);
    let mut input =
        ScriptedInput::new(&[Action::Split, Action::Hit, Action::Stand, Action::Stand]);
    let mut display = RecordingDisplay::default();

    let result = session.play_round(100, &mut input, &mut display).unwrap();

    assert!(input.prompts[0].1.contains(&Action::Split));
    for (prompt, legal) in &input.prompts[1..] {
        assert_eq!(legal, &vec![Action::Hit, Action::Stand], "{prompt}");
    }
    assert!(input.prompts[1].0.starts_with("Hand 1:"));
    assert!(input.prompts[3].0.starts_with("Hand 2:"));

    assert_eq!(result.hands.len(), 2);
    assert_eq!(result.hands[0].title, "Hand 1");
    assert_eq!(result.hands[0].player_value, 20);
    assert_eq!(result.hands[1].player_value, 18);
    assert!(result.hands.iter().all(|h| h.bet == 100));
    assert_eq!(result.net, 200);
    assert_eq!(session.chips(), 1_200);
}

#[test]
fn split_twenty_one_on_two_cards_pays_as_blackjack() {
    // aces split: hand 1 gets a king, hand 2 gets a 5 and stands; dealer 10 9
    let mut session = session_with_draws(1_000, &[1, 1, 10, 9, 13, 5]);
    let mut input = ScriptedInput::new(&[Action::Split, Action::Stand]);
    let mut display = RecordingDisplay::default();

    let result = session.play_round(100, &mut input, &mut display).unwrap();

    assert_eq!(input.prompts.len(), 2);
    assert!(input.prompts[1].0.starts_with("Hand 2:"));
    assert!(display.has_line("Hand 1: BLACKJACK!"));
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 150);
    assert_eq!(result.hands[1].outcome, HandOutcome::Lose);
    assert_eq!(result.hands[1].payout, -100);
    assert_eq!(result.net, 50);
    assert_eq!(session.chips(), 1_050);
}

#[test]
fn illegal_action_aborts_round_without_touching_chips() {
    // double is no longer legal on three cards
    let mut session = session_with_draws(1_000, &[2, 3, 10, 8, 4]);
    let mut input = ScriptedInput::new(&[Action::Hit, Action::Double]);

    let err = session
        .play_round(100, &mut input, &mut RecordingDisplay::default())
        .unwrap_err();

    assert_eq!(
        err,
        RoundError::Action(ActionError::IllegalAction {
            action: Action::Double
        })
    );
    assert_eq!(session.chips(), 1_000);
    assert_eq!(session.rounds_played(), 0);
}

#[test]
fn first_draw_shuffles_and_reports_it() {
    let mut session = Session::new(SessionOptions::default().with_seed(7));
    let mut input = ScriptedInput::new(&[Action::Stand; 4]);
    let mut display = RecordingDisplay::default();

    session.play_round(10, &mut input, &mut display).unwrap();

    assert_eq!(display.lines[0], "Shuffling new shoe…");
    assert!(session.shoe().remaining() < SHOE_SIZE);
    assert!(session.shoe().remaining() >= SHOE_SIZE - 20);
}

#[test]
fn reshuffle_mid_round_is_reported_and_round_settles() {
    // 23 cards: the deal leaves 19, so the dealer's draw on 16 reshuffles
    let mut session = Session::new(SessionOptions::default().with_starting_chips(1_000));
    session
        .shoe_mut()
        .stack(&[Card::new(Suit::Clubs, 2); 19]);
    session.shoe_mut().stack(&[card(1), card(13), card(10), card(6)]);
    let mut display = RecordingDisplay::default();

    let result = session
        .play_round(50, &mut ScriptedInput::default(), &mut display)
        .unwrap();

    let natural = display
        .lines
        .iter()
        .position(|l| l == "Player: BLACKJACK!")
        .unwrap();
    let shuffle = display
        .lines
        .iter()
        .position(|l| l == "Shuffling new shoe…")
        .unwrap();
    assert!(natural < shuffle);
    assert_eq!(
        display
            .lines
            .iter()
            .filter(|l| *l == "Shuffling new shoe…")
            .count(),
        1
    );

    assert!(result.dealer_value >= 17);
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.net, 75);
    assert_eq!(session.chips(), 1_075);
    assert_eq!(display.balances.last(), Some(&1_075));
    let dealer_cards = display.renders.last().unwrap().1.len();
    assert_eq!(session.shoe().remaining(), SHOE_SIZE - (dealer_cards - 2));
}

#[test]
fn largest_bet_pays_a_natural_without_overflow() {
    let mut session = session_with_draws(i64::MAX, &[1, 13, 10, 8]);
    let mut display = RecordingDisplay::default();

    let result = session
        .play_round(MAX_BET, &mut ScriptedInput::default(), &mut display)
        .unwrap();

    assert_eq!(result.hands[0].payout, MAX_BET + MAX_BET / 2);
    assert_eq!(session.chips(), i64::MAX);
}

#[test]
fn largest_bet_can_double_without_overflow() {
    // player 5 4 doubles into a ten; dealer 10 8
    let mut session = session_with_draws(i64::MAX, &[5, 4, 10, 8, 10]);
    let mut input = ScriptedInput::new(&[Action::Double]);

    let result = session
        .play_round(MAX_BET, &mut input, &mut RecordingDisplay::default())
        .unwrap();

    assert_eq!(result.hands[0].bet, MAX_BET * 2);
    assert_eq!(result.hands[0].payout, MAX_BET * 2);
    assert_eq!(session.chips(), i64::MAX);
}

#[test]
fn bet_above_table_limit_is_refused() {
    let mut session = session_with_draws(i64::MAX, &[1, 13, 10, 8]);
    let remaining = session.shoe().remaining();

    let err = session
        .play_round(
            MAX_BET + 1,
            &mut ScriptedInput::default(),
            &mut RecordingDisplay::default(),
        )
        .unwrap_err();

    assert_eq!(
        err,
        RoundError::Bet(BetError::AboveTableLimit {
            bet: MAX_BET + 1,
            limit: MAX_BET
        })
    );
    assert_eq!(session.chips(), i64::MAX);
    assert_eq!(session.shoe().remaining(), remaining);
}

#[test]
fn run_reprompts_after_invalid_bet_and_stops_when_broke() {
    // player 10 8 stands, dealer 10 10
    let mut session = session_with_draws(100, &[10, 8, 10, 10]);
    let mut bets = QueuedBets::new(&["ten", "150", "100", "50"]);
    let mut input = ScriptedInput::new(&[Action::Stand]);
    let mut display = RecordingDisplay::default();

    let results = session.run(&mut bets, &mut input, &mut display).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(session.chips(), 0);
    assert!(session.is_over());
    assert_eq!(bets.0.len(), 1);
    assert_eq!(
        display
            .lines
            .iter()
            .filter(|l| l.starts_with("Invalid bet"))
            .count(),
        2
    );
    assert!(display.has_line("Game over"));
}

#[test]
fn run_ends_when_bet_source_closes() {
    let mut session = Session::new(SessionOptions::default());
    let mut bets = QueuedBets::new(&[]);

    let results = session
        .run(
            &mut bets,
            &mut ScriptedInput::default(),
            &mut RecordingDisplay::default(),
        )
        .unwrap();

    assert!(results.is_empty());
    assert_eq!(session.chips(), 10_000);
}

#[test]
fn broke_session_refuses_rounds() {
    let mut session = Session::new(SessionOptions::default().with_starting_chips(0));
    let err = session
        .play_round(1, &mut ScriptedInput::default(), &mut RecordingDisplay::default())
        .unwrap_err();
    assert_eq!(err, RoundError::Bet(BetError::SessionOver));
}
