//! Game integration tests.

use adjustable_blackjack::{
    Action, ActionError, BetError, Card, DECK_SIZE, DealerHand, Game, GameState, HandOutcome,
    Player, RoundError, RuleKey, SettingValue, Settings, SettingsError, ShowdownError, Suit,
    dealer_must_hit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Stacks cards in deal order: player, dealer up, player, dealer hole, then draws.
fn game_with_draws(settings: Settings, draws: &[Card]) -> Game {
    let mut game = Game::new(settings, 42);
    game.stack_cards(draws);
    game
}

#[test]
fn natural_blackjack_wins_without_player_decisions() {
    let mut game = game_with_draws(
        Settings::default(),
        &[
            card(Suit::Spades, 1),   // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Hearts, 13),  // player
            card(Suit::Diamonds, 7), // dealer hole
        ],
    );

    let result = game
        .play_round(10_000, &mut |_: &Game, _: &[Action]| -> Action {
            unreachable!("a natural ends the player turn")
        })
        .unwrap();

    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.profit, 20_000);
    assert_eq!(result.net, 10_000);
    // The dealer stood on 16 because the player held a natural.
    assert_eq!(game.dealer_hand().len(), 2);
    assert!(game.dealer_hand().is_hole_revealed());
    assert_eq!(game.balance(), 110_000);
}

#[test]
fn natural_pushes_against_dealer_natural() {
    let mut game = game_with_draws(
        Settings::default(),
        &[
            card(Suit::Spades, 1),
            card(Suit::Clubs, 12),
            card(Suit::Hearts, 13),
            card(Suit::Diamonds, 1),
        ],
    );

    game.bet(1_000).unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);
    assert!(game.legal_actions().is_empty());

    game.dealer_play().unwrap();
    let result = game.showdown().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(game.balance(), 100_000);
}

#[test]
fn basic_round_flow() {
    let mut game = game_with_draws(
        Settings::default(),
        &[
            card(Suit::Hearts, 8),   // player
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Diamonds, 7), // player
            card(Suit::Spades, 10),  // dealer hole
            card(Suit::Hearts, 4),   // player hit
            card(Suit::Clubs, 5),    // dealer draw
        ],
    );

    game.bet(1_000).unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.balance(), 99_000);
    assert!(!game.dealer_hand().is_hole_revealed());
    assert_eq!(game.dealer_hand().value().totals(), vec![6]);

    let hit_card = game.hit().unwrap();
    assert_eq!(hit_card.rank, 4);
    assert_eq!(game.current_turn().turn, 2);
    assert_eq!(game.legal_actions(), vec![Action::Hit, Action::Stand]);

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(game.state(), GameState::RoundOver);

    let result = game.showdown().unwrap();
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.net, -1_000);
    assert_eq!(game.balance(), 99_000);
    assert_eq!(game.state(), GameState::Betting);
}

#[test]
fn first_turn_offers_conditional_actions() {
    let settings = Settings::default().with_surrendering(true);
    let mut game = game_with_draws(
        settings,
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 9),
        ],
    );

    game.bet(1_000).unwrap();
    assert_eq!(
        game.legal_actions(),
        vec![
            Action::Hit,
            Action::Stand,
            Action::Split,
            Action::Double,
            Action::Forfeit
        ]
    );
}

#[test]
fn disabled_rules_are_not_offered() {
    let settings = Settings::default()
        .with_splitting(false)
        .with_doubling(false);
    let mut game = game_with_draws(
        settings,
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 9),
        ],
    );

    game.bet(1_000).unwrap();
    assert_eq!(game.legal_actions(), vec![Action::Hit, Action::Stand]);
    assert_eq!(game.split().unwrap_err(), ActionError::CannotSplit);
    assert_eq!(game.double_down().unwrap_err(), ActionError::CannotDouble);
    assert_eq!(game.surrender().unwrap_err(), ActionError::CannotSurrender);
    assert_eq!(game.hands()[0].len(), 2);
    assert_eq!(game.balance(), 99_000);
}

#[test]
fn split_needs_equal_ranks() {
    let mut game = game_with_draws(
        Settings::default(),
        &[
            card(Suit::Hearts, 13),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 12),
            card(Suit::Spades, 9),
        ],
    );

    game.bet(1_000).unwrap();
    assert!(!game.legal_actions().contains(&Action::Split));
    assert_eq!(game.act(Action::Split).unwrap_err(), ActionError::CannotSplit);
    assert_eq!(game.hands().len(), 1);
}

#[test]
fn double_down_takes_one_card_and_doubles_stake() {
    let mut game = game_with_draws(
        Settings::default(),
        &[
            card(Suit::Hearts, 5),   // player
            card(Suit::Clubs, 2),    // dealer up
            card(Suit::Diamonds, 4), // player
            card(Suit::Spades, 3),   // dealer hole
            card(Suit::Hearts, 10),  // double draw
            card(Suit::Clubs, 10),   // dealer draw
            card(Suit::Diamonds, 8), // dealer draw
        ],
    );

    game.bet(1_000).unwrap();
    let drawn = game.double_down().unwrap();
    assert_eq!(drawn.rank, 10);
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.balance(), 98_000);
    assert!(game.outcome().doubled);

    let hand = &game.hands()[0];
    assert!(hand.is_doubled());
    assert_eq!(hand.bet(), 2_000);
    assert_eq!(hand.len(), 3);

    let dealer_cards = game.dealer_play().unwrap();
    assert_eq!(dealer_cards.len(), 2);

    let result = game.showdown().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.profit, 4_000);
    assert_eq!(game.balance(), 102_000);
}

#[test]
fn double_down_refused_without_funds() {
    let mut game = Game::with_balance(Settings::default(), 1, 1_500);
    game.stack_cards(&[
        card(Suit::Hearts, 5),
        card(Suit::Clubs, 2),
        card(Suit::Diamonds, 4),
        card(Suit::Spades, 3),
    ]);

    game.bet(1_000).unwrap();
    assert!(!game.legal_actions().contains(&Action::Double));
    assert_eq!(
        game.double_down().unwrap_err(),
        ActionError::InsufficientFunds
    );
    assert_eq!(game.balance(), 500);
    assert_eq!(game.hands()[0].bet(), 1_000);
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn split_divides_stake_and_deals_each_hand_one_card() {
    let mut game = game_with_draws(
        Settings::default(),
        &[
            card(Suit::Hearts, 8),   // player
            card(Suit::Clubs, 5),    // dealer up
            card(Suit::Diamonds, 8), // player
            card(Suit::Spades, 9),   // dealer hole
            card(Suit::Hearts, 2),   // first hand
            card(Suit::Clubs, 3),    // second hand
            card(Suit::Diamonds, 10), // dealer draw
        ],
    );

    game.bet(1_001).unwrap();
    game.split().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    let hands = game.hands();
    assert_eq!(hands.len(), 2);
    assert!(hands.iter().all(|h| h.is_split() && h.len() == 2));
    // Odd cent goes to the second hand.
    assert_eq!(hands[0].bet(), 500);
    assert_eq!(hands[1].bet(), 501);
    assert_eq!(hands[0].value().totals(), vec![10]);
    assert_eq!(hands[1].value().totals(), vec![11]);
    assert_eq!(game.balance(), 98_999);

    game.dealer_play().unwrap();
    let result = game.showdown().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.profit, 2_002);
    assert_eq!(result.net, 1_001);
    assert_eq!(game.balance(), 101_001);
}

#[test]
fn split_hand_drawing_a_pair_is_offered_another_split() {
    let mut game = game_with_draws(
        Settings::default(),
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 9),
            card(Suit::Clubs, 8),    // first hand pairs again
            card(Suit::Hearts, 2),   // first hand after re-split
            card(Suit::Diamonds, 3), // second hand
            card(Suit::Spades, 4),   // third hand
        ],
    );

    game.bet(1_000).unwrap();
    game.split().unwrap();
    assert_eq!(game.state(), GameState::SplitOffer);
    assert_eq!(game.legal_actions(), vec![Action::Split, Action::Stand]);
    assert_eq!(
        game.hit().unwrap_err(),
        ActionError::IllegalAction(Action::Hit)
    );

    game.split().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    let bets: Vec<u64> = game.hands().iter().map(|h| h.bet()).collect();
    assert_eq!(bets, vec![250, 500, 250]);
    let totals: Vec<u8> = game.hands().iter().map(|h| h.value().max()).collect();
    assert_eq!(totals, vec![10, 11, 12]);
}

#[test]
fn declining_a_split_offer_completes_the_hand() {
    let mut game = game_with_draws(
        Settings::default(),
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 9),
            card(Suit::Clubs, 8),
            card(Suit::Diamonds, 3),
        ],
    );

    game.bet(1_000).unwrap();
    game.split().unwrap();
    assert_eq!(game.state(), GameState::SplitOffer);

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.hands().len(), 2);
    assert_eq!(game.hands()[0].value().max(), 16);
    assert_eq!(game.hands()[1].value().max(), 11);
}

#[test]
fn no_split_offer_when_resplitting_disabled() {
    let mut game = game_with_draws(
        Settings::default().with_resplitting(false),
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 9),
            card(Suit::Clubs, 8),
            card(Suit::Diamonds, 3),
        ],
    );

    game.bet(1_000).unwrap();
    game.split().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.hands().len(), 2);
}

#[test]
fn surrender_refunds_half_bet_and_skips_dealer() {
    let settings = Settings::default().with_surrendering(true);
    let mut game = game_with_draws(
        settings,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 7),    // dealer up
            card(Suit::Diamonds, 6), // player
            card(Suit::Spades, 8),   // dealer hole
        ],
    );

    game.bet(1_001).unwrap();
    let refund = game.surrender().unwrap();
    assert_eq!(refund, 500);
    assert_eq!(game.balance(), 99_499);
    assert_eq!(game.state(), GameState::DealerTurn);
    assert!(game.outcome().forfeited);

    let drawn = game.dealer_play().unwrap();
    assert!(drawn.is_empty());
    assert!(game.dealer_hand().is_hole_revealed());

    let result = game.showdown().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Surrendered);
    assert_eq!(result.profit, 0);
    assert_eq!(result.net, -501);
    assert_eq!(game.balance(), 99_499);
}

#[test]
fn surrender_only_on_first_turn() {
    let settings = Settings::default().with_surrendering(true);
    let mut game = game_with_draws(
        settings,
        &[
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 3),
            card(Suit::Spades, 8),
            card(Suit::Hearts, 4),
        ],
    );

    game.bet(1_000).unwrap();
    game.hit().unwrap();
    assert_eq!(game.surrender().unwrap_err(), ActionError::CannotSurrender);
    assert_eq!(game.double_down().unwrap_err(), ActionError::CannotDouble);
}

#[test]
fn bust_ends_the_round_without_dealer_draws() {
    let mut game = game_with_draws(
        Settings::default(),
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 6),
            card(Suit::Spades, 9),
            card(Suit::Clubs, 10),
        ],
    );

    game.bet(1_000).unwrap();
    game.hit().unwrap();
    assert!(game.outcome().busted);
    assert_eq!(game.state(), GameState::DealerTurn);

    assert!(game.dealer_play().unwrap().is_empty());
    let result = game.showdown().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.profit, 0);
    assert_eq!(game.balance(), 99_000);
}

#[test]
fn doubled_hand_that_busts_skips_dealer() {
    let mut game = game_with_draws(
        Settings::default(),
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 7),    // dealer up
            card(Suit::Diamonds, 2), // player
            card(Suit::Spades, 9),   // dealer hole
            card(Suit::Clubs, 13),   // double draw
        ],
    );

    game.bet(1_000).unwrap();
    game.double_down().unwrap();
    assert!(game.outcome().busted);
    assert!(game.outcome().doubled);
    assert_eq!(game.state(), GameState::DealerTurn);

    assert!(game.dealer_play().unwrap().is_empty());
    assert_eq!(game.dealer_hand().len(), 2);

    let result = game.showdown().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.net, -2_000);
    assert_eq!(game.balance(), 98_000);
}

fn soft_17_game(soft_17_hit: bool) -> Game {
    game_with_draws(
        Settings::default().with_soft_17_hit(soft_17_hit),
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 1),    // dealer up
            card(Suit::Diamonds, 8), // player
            card(Suit::Spades, 6),   // dealer hole
            card(Suit::Hearts, 10),  // dealer draw on soft 17
        ],
    )
}

#[test]
fn dealer_hits_soft_17_when_rule_enabled() {
    let mut game = soft_17_game(true);
    game.bet(1_000).unwrap();
    game.stand().unwrap();

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(game.dealer_hand().value().totals(), vec![17]);

    let result = game.showdown().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
}

#[test]
fn dealer_stands_on_soft_17_when_rule_disabled() {
    let mut game = soft_17_game(false);
    game.bet(1_000).unwrap();
    game.stand().unwrap();

    assert!(game.dealer_play().unwrap().is_empty());
    assert_eq!(game.dealer_hand().value().max(), 17);
}

#[test]
fn dealer_stands_on_hard_17_and_any_18_when_hitting_soft_17() {
    let hand = |cards: &[Card]| DealerHand::from_cards(cards).value();

    let hard_17 = hand(&[card(Suit::Spades, 10), card(Suit::Hearts, 7)]);
    let hard_17_with_ace = hand(&[
        card(Suit::Spades, 10),
        card(Suit::Hearts, 6),
        card(Suit::Clubs, 1),
    ]);
    let soft_18 = hand(&[card(Suit::Spades, 7), card(Suit::Hearts, 1)]);
    let hard_16 = hand(&[card(Suit::Spades, 10), card(Suit::Hearts, 6)]);

    for value in [hard_17, hard_17_with_ace, soft_18] {
        assert!(!dealer_must_hit(value, true), "{value:?}");
        assert!(!dealer_must_hit(value, false), "{value:?}");
    }
    assert!(dealer_must_hit(hard_16, true));
    assert!(dealer_must_hit(hard_16, false));

    let mut game = game_with_draws(
        Settings::default().with_soft_17_hit(true),
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 8), // player
            card(Suit::Spades, 7),   // dealer hole
        ],
    );
    game.bet(1_000).unwrap();
    game.stand().unwrap();

    assert!(game.dealer_play().unwrap().is_empty());
    let result = game.showdown().unwrap();
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
}

#[test]
fn bet_errors() {
    let mut game = Game::with_balance(Settings::default(), 1, 1_000);

    assert_eq!(game.bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(game.bet(1_001).unwrap_err(), BetError::InsufficientFunds);

    game.stack_cards(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 6),
        card(Suit::Spades, 9),
    ]);
    game.bet(1_000).unwrap();
    assert_eq!(game.bet(1).unwrap_err(), BetError::InvalidState);

    game.stand().unwrap();
    game.dealer_play().unwrap();
    game.showdown().unwrap();
    assert_eq!(game.balance(), 0);
    assert_eq!(game.bet(1).unwrap_err(), BetError::Bankrupt);

    game.restart();
    assert_eq!(game.balance(), 1_000);
    assert_eq!(game.shoe().remaining(), game.shoe().capacity());
}

#[test]
fn restart_mid_round_returns_stakes() {
    let mut game = game_with_draws(
        Settings::default(),
        &[
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 2),
            card(Suit::Diamonds, 4),
            card(Suit::Spades, 3),
            card(Suit::Hearts, 10),
        ],
    );

    game.bet(1_000).unwrap();
    game.double_down().unwrap();
    assert_eq!(game.balance(), 98_000);

    game.restart();
    assert_eq!(game.state(), GameState::Betting);
    assert_eq!(game.balance(), 100_000);
    assert!(game.hands().is_empty());
    assert_eq!(game.round_bet(), 0);
}

#[test]
fn wrong_state_is_rejected() {
    let mut game = Game::new(Settings::default(), 1);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);
}

#[test]
fn settings_change_between_rounds_only() {
    let mut game = Game::new(Settings::default(), 3);
    assert_eq!(game.shoe().remaining(), 6 * DECK_SIZE);

    game.change_setting(RuleKey::DeckCount, SettingValue::Int(2))
        .unwrap();
    assert_eq!(game.shoe().remaining(), 2 * DECK_SIZE);

    assert_eq!(
        game.change_setting(RuleKey::DeckCount, SettingValue::Int(20)),
        Err(SettingsError::OutOfRange {
            min: 1,
            max: 12,
            value: 20
        })
    );

    game.bet(100).unwrap();
    assert_eq!(
        game.change_setting(RuleKey::Surrendering, SettingValue::Boolean(true)),
        Err(SettingsError::RoundInProgress)
    );
}

#[test]
fn dealt_cards_leave_the_shoe() {
    let mut game = Game::new(Settings::default().with_deck_count(1), 9);
    game.bet(100).unwrap();
    while game.state() == GameState::PlayerTurn {
        game.stand().unwrap();
    }
    game.dealer_play().unwrap();
    game.showdown().unwrap();

    let dealt = game.hands()[0].len() + game.dealer_hand().len();
    assert_eq!(game.shoe().remaining(), DECK_SIZE - dealt);
}

#[test]
fn true_random_rounds_settle() {
    let mut game = Game::new(Settings::default().with_true_random(true), 5);
    for _ in 0..20 {
        game.play_round(100, &mut |_: &Game, _: &[Action]| Action::Stand)
            .unwrap();
    }
    assert_eq!(game.shoe().remaining(), game.shoe().capacity());
}

struct Scripted {
    actions: Vec<Action>,
    observed: usize,
}

impl Player for Scripted {
    fn decide(&mut self, _game: &Game, legal: &[Action]) -> Action {
        let action = self.actions.remove(0);
        assert!(legal.contains(&action));
        action
    }

    fn observe(&mut self, _game: &Game) {
        self.observed += 1;
    }
}

#[test]
fn play_round_drives_a_scripted_player() {
    let mut game = game_with_draws(
        Settings::default(),
        &[
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 3),
            card(Suit::Spades, 8),
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 6),
        ],
    );
    let mut player = Scripted {
        actions: vec![Action::Hit, Action::Hit, Action::Stand],
        observed: 0,
    };

    let result = game.play_round(1_000, &mut player).unwrap();
    assert_eq!(game.hands()[0].value().max(), 20);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert!(player.actions.is_empty());
    // bet, three actions, dealer turn
    assert_eq!(player.observed, 5);
}

#[test]
fn play_round_rejects_illegal_choice() {
    let mut game = game_with_draws(
        Settings::default(),
        &[
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 3),
            card(Suit::Spades, 8),
        ],
    );

    let err = game
        .play_round(1_000, &mut |_: &Game, _: &[Action]| Action::Forfeit)
        .unwrap_err();
    assert_eq!(err, RoundError::Action(ActionError::CannotSurrender));
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.hands()[0].len(), 2);
}
