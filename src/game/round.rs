use alloc::vec::Vec;

use crate::error::RoundError;
use crate::result::RoundResult;

use super::{Action, Game, GameState};

/// The decision-maker behind a driven round.
///
/// The engine only ever asks for a choice among the actions it currently
/// considers legal, and calls [`Player::observe`] after every state change
/// so a front end can redraw the table.
pub trait Player {
    /// Chooses one of `legal`.
    fn decide(&mut self, game: &Game, legal: &[Action]) -> Action;

    /// Called after every state transition.
    fn observe(&mut self, _game: &Game) {}
}

impl<F> Player for F
where
    F: FnMut(&Game, &[Action]) -> Action,
{
    fn decide(&mut self, game: &Game, legal: &[Action]) -> Action {
        self(game, legal)
    }
}

impl Game {
    /// Plays a full round: bet, deal, player turn, dealer turn and showdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is refused or the player picks an action
    /// that is not legal. A refused action leaves the round where it was,
    /// so the caller may resume it with the individual action methods.
    pub fn play_round<P: Player + ?Sized>(
        &mut self,
        bet: u64,
        player: &mut P,
    ) -> Result<RoundResult, RoundError> {
        self.bet(bet)?;
        player.observe(self);

        while matches!(self.state, GameState::PlayerTurn | GameState::SplitOffer) {
            let legal: Vec<Action> = self.legal_actions();
            let action = player.decide(self, &legal);
            self.act(action)?;
            player.observe(self);
        }

        self.dealer_play()?;
        player.observe(self);

        self.showdown().map_err(Into::into)
    }
}
