//! Effect definitions.
//!
//! An effect is the resolution rule of a card, expressed as data: what the
//! play costs, what it yields, whether it redraws the hand, and the log line
//! it writes.

use serde::{Deserialize, Serialize};

use crate::core::ResourceAmount;

/// Resolution rule of a card.
///
/// ## Exchange
///
/// Pay every listed cost, then receive every listed gain. Playable only if
/// the whole payment can be covered.
///
/// ## RedrawHand
///
/// Same exchange, then the rest of the hand goes to the discard pile and a
/// new hand is drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Trade resources.
    Exchange {
        pay: Vec<ResourceAmount>,
        gain: Vec<ResourceAmount>,
        message: String,
    },

    /// Trade resources, then discard the hand and draw a new one.
    RedrawHand {
        pay: Vec<ResourceAmount>,
        gain: Vec<ResourceAmount>,
        message: String,
    },
}

impl Effect {
    /// Create an exchange with no costs and no gains.
    #[must_use]
    pub fn exchange(message: impl Into<String>) -> Self {
        Effect::Exchange {
            pay: Vec::new(),
            gain: Vec::new(),
            message: message.into(),
        }
    }

    /// Create a hand redraw with no costs and no gains.
    #[must_use]
    pub fn redraw_hand(message: impl Into<String>) -> Self {
        Effect::RedrawHand {
            pay: Vec::new(),
            gain: Vec::new(),
            message: message.into(),
        }
    }

    /// Add a cost (builder pattern).
    #[must_use]
    pub fn paying(mut self, resource: impl Into<String>, amount: u32) -> Self {
        match &mut self {
            Effect::Exchange { pay, .. } | Effect::RedrawHand { pay, .. } => {
                pay.push(ResourceAmount::new(resource, amount));
            }
        }
        self
    }

    /// Add a gain (builder pattern).
    #[must_use]
    pub fn gaining(mut self, resource: impl Into<String>, amount: u32) -> Self {
        match &mut self {
            Effect::Exchange { gain, .. } | Effect::RedrawHand { gain, .. } => {
                gain.push(ResourceAmount::new(resource, amount));
            }
        }
        self
    }

    /// Resources consumed by the play.
    #[must_use]
    pub fn costs(&self) -> &[ResourceAmount] {
        match self {
            Effect::Exchange { pay, .. } | Effect::RedrawHand { pay, .. } => pay,
        }
    }

    /// Resources produced by the play.
    #[must_use]
    pub fn gains(&self) -> &[ResourceAmount] {
        match self {
            Effect::Exchange { gain, .. } | Effect::RedrawHand { gain, .. } => gain,
        }
    }

    /// Log message written when the play succeeds.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Effect::Exchange { message, .. } | Effect::RedrawHand { message, .. } => message,
        }
    }

    /// Check if the play replaces the hand.
    #[must_use]
    pub fn redraws_hand(&self) -> bool {
        matches!(self, Effect::RedrawHand { .. })
    }
}

fn write_amounts(f: &mut std::fmt::Formatter<'_>, amounts: &[ResourceAmount]) -> std::fmt::Result {
    for (i, amount) in amounts.iter().enumerate() {
        if i > 0 {
            f.write_str(" + ")?;
        }
        write!(f, "{}", amount)?;
    }
    Ok(())
}

/// Short rule text, e.g. `"10 money -> 3 water"` or `"redraw hand + 1 energy"`.
impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Exchange { pay, gain, .. } => {
                if pay.is_empty() {
                    f.write_str("gain ")?;
                } else {
                    write_amounts(f, pay)?;
                    f.write_str(" -> ")?;
                }
                write_amounts(f, gain)
            }
            Effect::RedrawHand { pay, gain, .. } => {
                if !pay.is_empty() {
                    write_amounts(f, pay)?;
                    f.write_str(" -> ")?;
                }
                f.write_str("redraw hand")?;
                if !gain.is_empty() {
                    f.write_str(" + ")?;
                    write_amounts(f, gain)?;
                }
                Ok(())
            }
        }
    }
}
