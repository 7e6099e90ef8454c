//! House rules and their validation.

use core::fmt;

use crate::error::SettingsError;

/// Identifies a house rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKey {
    /// Surrender on the first turn for half the stake back.
    Surrendering,
    /// Double down on the first turn.
    Doubling,
    /// Split a same-rank pair on the first turn.
    Splitting,
    /// Split again when a split hand draws another pair.
    Resplitting,
    /// Dealer hits a soft 17.
    Soft17Hit,
    /// Draw independent uniform cards instead of dealing from the shoe.
    TrueRandom,
    /// Number of decks in the shoe.
    DeckCount,
}

impl RuleKey {
    /// All rules in menu order.
    pub const ALL: [Self; 7] = [
        Self::Surrendering,
        Self::Doubling,
        Self::Splitting,
        Self::Resplitting,
        Self::Soft17Hit,
        Self::TrueRandom,
        Self::DeckCount,
    ];

    /// Returns the stable identifier of the rule.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Surrendering => "surrendering",
            Self::Doubling => "doubling",
            Self::Splitting => "splitting",
            Self::Resplitting => "resplitting",
            Self::Soft17Hit => "soft_17_hit",
            Self::TrueRandom => "true_random",
            Self::DeckCount => "deck_count",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Surrendering => 0,
            Self::Doubling => 1,
            Self::Splitting => 2,
            Self::Resplitting => 3,
            Self::Soft17Hit => 4,
            Self::TrueRandom => 5,
            Self::DeckCount => 6,
        }
    }
}

/// The value held by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingValue {
    /// An on/off toggle.
    Boolean(bool),
    /// A whole number.
    Int(u32),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

/// What values a rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Accepts `true` or `false`.
    Boolean,
    /// Accepts integers in `min..=max`.
    BoundedInt {
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },
}

impl SettingKind {
    /// Checks that `value` is acceptable for this kind.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::TypeMismatch`] when the value has the wrong
    /// shape and [`SettingsError::OutOfRange`] when an integer is outside
    /// the declared bounds.
    pub const fn validate(self, key: RuleKey, value: SettingValue) -> Result<(), SettingsError> {
        match (self, value) {
            (Self::Boolean, SettingValue::Boolean(_)) => Ok(()),
            (Self::BoundedInt { min, max }, SettingValue::Int(value)) => {
                if value < min || value > max {
                    Err(SettingsError::OutOfRange { min, max, value })
                } else {
                    Ok(())
                }
            }
            _ => Err(SettingsError::TypeMismatch(key)),
        }
    }
}

/// A registered house rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Which rule this is.
    pub key: RuleKey,
    /// Value restored by a reset.
    pub default: SettingValue,
    /// Value currently in force.
    pub value: SettingValue,
    /// Accepted values.
    pub kind: SettingKind,
    /// Name shown in the settings menu.
    pub display_name: &'static str,
    /// Help text shown in the settings menu.
    pub description: &'static str,
}

impl Rule {
    const fn toggle(
        key: RuleKey,
        default: bool,
        display_name: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            default: SettingValue::Boolean(default),
            value: SettingValue::Boolean(default),
            kind: SettingKind::Boolean,
            display_name,
            description,
        }
    }
}

/// An entry of the settings menu.
///
/// `ResetAll` and `Return` only drive navigation and never affect play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    /// Change a rule.
    Rule(RuleKey),
    /// Restore every rule to its default.
    ResetAll,
    /// Leave the settings menu.
    Return,
}

/// Smallest supported shoe.
pub const MIN_DECKS: u32 = 1;

/// Largest supported shoe.
pub const MAX_DECKS: u32 = 12;

/// The house rules of a session.
///
/// Rules are kept in menu order. Use the builder methods to configure
/// rules in code:
///
/// ```
/// use adjustable_blackjack::Settings;
///
/// let settings = Settings::default()
///     .with_deck_count(2)
///     .with_surrendering(true)
///     .with_soft_17_hit(false);
///
/// assert_eq!(settings.deck_count(), 2);
/// assert!(settings.surrendering());
/// assert!(!settings.soft_17_hit());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    rules: [Rule; 7],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rules: [
                Rule::toggle(
                    RuleKey::Surrendering,
                    false,
                    "Surrendering Enabled",
                    "Surrender on the first turn: the hand is lost but half the bet comes back.",
                ),
                Rule::toggle(
                    RuleKey::Doubling,
                    true,
                    "Doubling Enabled",
                    "Double the bet on the first turn, take one final card and end the turn.",
                ),
                Rule::toggle(
                    RuleKey::Splitting,
                    true,
                    "Splitting Enabled",
                    "Split two same-rank cards on the first turn; each card is played as its own hand.",
                ),
                Rule::toggle(
                    RuleKey::Resplitting,
                    true,
                    "Re-splitting Enabled",
                    "Offer another split when a split hand draws a second card of the same rank.",
                ),
                Rule::toggle(
                    RuleKey::Soft17Hit,
                    true,
                    "Dealer Hits on Soft 17",
                    "The dealer must hit a soft 17. Otherwise the dealer stands on any 17.",
                ),
                Rule::toggle(
                    RuleKey::TrueRandom,
                    false,
                    "True random cards.",
                    "Draw independent random cards instead of dealing from a finite shoe. Deck Count is ignored.",
                ),
                Rule {
                    key: RuleKey::DeckCount,
                    default: SettingValue::Int(6),
                    value: SettingValue::Int(6),
                    kind: SettingKind::BoundedInt {
                        min: MIN_DECKS,
                        max: MAX_DECKS,
                    },
                    display_name: "Deck Count",
                    description: "The number of decks in the shoe, between 1 and 12 (inclusive).",
                },
            ],
        }
    }
}

impl Settings {
    /// Returns the rules in menu order.
    #[must_use]
    pub const fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the rule registered under `key`.
    #[must_use]
    pub const fn rule(&self, key: RuleKey) -> &Rule {
        &self.rules[key.index()]
    }

    /// Returns the settings menu: every rule followed by the navigation entries.
    pub fn menu(&self) -> impl Iterator<Item = MenuEntry> + '_ {
        self.rules
            .iter()
            .map(|rule| MenuEntry::Rule(rule.key))
            .chain([MenuEntry::ResetAll, MenuEntry::Return])
    }

    /// Returns the current value of `key`.
    #[must_use]
    pub const fn get(&self, key: RuleKey) -> SettingValue {
        self.rules[key.index()].value
    }

    /// Changes a rule after validating the new value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not fit the rule's kind or range.
    /// The rule is left unchanged in that case.
    pub fn change(&mut self, key: RuleKey, value: SettingValue) -> Result<(), SettingsError> {
        let rule = &mut self.rules[key.index()];
        rule.kind.validate(key, value)?;
        rule.value = value;
        Ok(())
    }

    /// Restores one rule to its default.
    pub const fn reset(&mut self, key: RuleKey) {
        let rule = &mut self.rules[key.index()];
        rule.value = rule.default;
    }

    /// Restores every rule to its default.
    pub fn reset_all(&mut self) {
        for rule in &mut self.rules {
            rule.value = rule.default;
        }
    }

    const fn flag(&self, key: RuleKey) -> bool {
        match self.get(key) {
            SettingValue::Boolean(value) => value,
            SettingValue::Int(value) => value != 0,
        }
    }

    /// Whether surrendering is enabled.
    #[must_use]
    pub const fn surrendering(&self) -> bool {
        self.flag(RuleKey::Surrendering)
    }

    /// Whether doubling down is enabled.
    #[must_use]
    pub const fn doubling(&self) -> bool {
        self.flag(RuleKey::Doubling)
    }

    /// Whether splitting is enabled.
    #[must_use]
    pub const fn splitting(&self) -> bool {
        self.flag(RuleKey::Splitting)
    }

    /// Whether a split hand that draws another pair may split again.
    #[must_use]
    pub const fn resplitting(&self) -> bool {
        self.flag(RuleKey::Resplitting)
    }

    /// Whether the dealer hits a soft 17.
    #[must_use]
    pub const fn soft_17_hit(&self) -> bool {
        self.flag(RuleKey::Soft17Hit)
    }

    /// Whether cards are drawn independently instead of from the shoe.
    #[must_use]
    pub const fn true_random(&self) -> bool {
        self.flag(RuleKey::TrueRandom)
    }

    /// Number of decks in the shoe.
    #[must_use]
    pub const fn deck_count(&self) -> u8 {
        match self.get(RuleKey::DeckCount) {
            SettingValue::Int(value) => value as u8,
            SettingValue::Boolean(_) => MIN_DECKS as u8,
        }
    }

    const fn with_flag(mut self, key: RuleKey, value: bool) -> Self {
        self.rules[key.index()].value = SettingValue::Boolean(value);
        self
    }

    /// Sets whether surrendering is enabled.
    #[must_use]
    pub const fn with_surrendering(self, enabled: bool) -> Self {
        self.with_flag(RuleKey::Surrendering, enabled)
    }

    /// Sets whether doubling down is enabled.
    #[must_use]
    pub const fn with_doubling(self, enabled: bool) -> Self {
        self.with_flag(RuleKey::Doubling, enabled)
    }

    /// Sets whether splitting is enabled.
    #[must_use]
    pub const fn with_splitting(self, enabled: bool) -> Self {
        self.with_flag(RuleKey::Splitting, enabled)
    }

    /// Sets whether re-splitting is enabled.
    #[must_use]
    pub const fn with_resplitting(self, enabled: bool) -> Self {
        self.with_flag(RuleKey::Resplitting, enabled)
    }

    /// Sets whether the dealer hits a soft 17.
    #[must_use]
    pub const fn with_soft_17_hit(self, enabled: bool) -> Self {
        self.with_flag(RuleKey::Soft17Hit, enabled)
    }

    /// Sets whether cards are drawn independently instead of from the shoe.
    #[must_use]
    pub const fn with_true_random(self, enabled: bool) -> Self {
        self.with_flag(RuleKey::TrueRandom, enabled)
    }

    /// Sets the number of decks, clamped to the supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use adjustable_blackjack::Settings;
    ///
    /// assert_eq!(Settings::default().with_deck_count(40).deck_count(), 12);
    /// ```
    #[must_use]
    pub const fn with_deck_count(mut self, decks: u8) -> Self {
        let mut decks = decks as u32;
        if decks < MIN_DECKS {
            decks = MIN_DECKS;
        } else if decks > MAX_DECKS {
            decks = MAX_DECKS;
        }
        self.rules[RuleKey::DeckCount.index()].value = SettingValue::Int(decks);
        self
    }
}
