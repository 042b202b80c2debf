//! Drives a decoded route through the hop simulators.
//!
//! Exact input walks hops in encoded order; exact output walks them backwards,
//! since a hop's required input is only known once the next hop's is.
//! Diagnostics are always stored at the hop's encoded index.

use dex_route::{decode_route, ProtocolSelector};
use dex_types::{DexError, Hop, PoolKind, QuoterConfig, RouteQuote};
use soroban_sdk::{log, Bytes, Env, Vec};

use crate::gas::{concentrated_hop_gas, CONSTANT_PRODUCT_HOP_GAS};
use crate::{concentrated, constant_product};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    ExactInput,
    ExactOutput,
}

/// Walk state. A failing hop ends the walk with its error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum WalkState {
    /// Hop `hop` is about to be simulated with `amount`
    Pending { hop: u32, amount: u128 },
    /// Hop `hop` produced `amount` (output forward, required input backward)
    Settled { hop: u32, amount: u128 },
    Complete { amount: u128 },
}

/// Per-hop figures reported back to the caller
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HopSettlement {
    pub amount: u128,
    pub sqrt_price_x96_after: u128,
    pub initialized_ticks_crossed: u32,
    pub gas_estimate: u64,
}

impl Direction {
    fn first_hop(self, hops: u32) -> u32 {
        match self {
            Direction::ExactInput => 0,
            Direction::ExactOutput => hops - 1,
        }
    }

    fn next_hop(self, hop: u32, hops: u32) -> Option<u32> {
        match self {
            Direction::ExactInput if hop + 1 < hops => Some(hop + 1),
            Direction::ExactOutput if hop > 0 => Some(hop - 1),
            _ => None,
        }
    }
}

/// Simulate one hop in the given direction
pub fn settle_hop(
    env: &Env,
    config: &QuoterConfig,
    hop: &Hop,
    direction: Direction,
    amount: u128,
) -> Result<HopSettlement, DexError> {
    match hop.pool {
        PoolKind::ConstantProduct => {
            let amount = match direction {
                Direction::ExactInput => constant_product::quote_exact_input(
                    env,
                    config,
                    &hop.token_in,
                    &hop.token_out,
                    amount,
                )?,
                Direction::ExactOutput => constant_product::quote_exact_output(
                    env,
                    config,
                    &hop.token_in,
                    &hop.token_out,
                    amount,
                )?,
            };
            Ok(HopSettlement {
                amount,
                sqrt_price_x96_after: 0,
                initialized_ticks_crossed: 0,
                gas_estimate: CONSTANT_PRODUCT_HOP_GAS,
            })
        }
        PoolKind::ConcentratedLiquidity(fee) => {
            let (simulation, amount) = match direction {
                Direction::ExactInput => {
                    let simulation = concentrated::quote_exact_input(
                        env,
                        config,
                        &hop.token_in,
                        &hop.token_out,
                        fee,
                        amount,
                        None,
                    )?;
                    let amount_out = simulation.amount_out;
                    (simulation, amount_out)
                }
                Direction::ExactOutput => {
                    let simulation = concentrated::quote_exact_output(
                        env,
                        config,
                        &hop.token_in,
                        &hop.token_out,
                        fee,
                        amount,
                        None,
                    )?;
                    let amount_in = simulation.amount_in;
                    (simulation, amount_in)
                }
            };
            Ok(HopSettlement {
                amount,
                sqrt_price_x96_after: simulation.sqrt_price_x96,
                initialized_ticks_crossed: simulation.initialized_ticks_crossed,
                gas_estimate: concentrated_hop_gas(&simulation),
            })
        }
    }
}

/// Quote `amount` through `route`, returning the final amount and per-hop diagnostics
pub fn quote_route(
    env: &Env,
    config: &QuoterConfig,
    route: &Bytes,
    selector: &ProtocolSelector,
    direction: Direction,
    amount: i128,
) -> Result<RouteQuote, DexError> {
    if amount <= 0 {
        return Err(DexError::InvalidAmount);
    }

    let hops = decode_route(env, route, selector)?;
    let hop_count = hops.len();

    // Zero-filled so constant-product hops keep 0 in the concentrated-only fields
    let mut sqrt_price_x96_after_list: Vec<u128> = Vec::new(env);
    let mut initialized_ticks_crossed_list: Vec<u32> = Vec::new(env);
    for _ in 0..hop_count {
        sqrt_price_x96_after_list.push_back(0);
        initialized_ticks_crossed_list.push_back(0);
    }
    let mut gas_estimate: u64 = 0;

    let mut state = WalkState::Pending {
        hop: direction.first_hop(hop_count),
        amount: amount as u128,
    };

    let final_amount = loop {
        state = match state {
            WalkState::Pending { hop, amount } => {
                let settlement = settle_hop(env, config, &hops.get_unchecked(hop), direction, amount)?;
                log!(env, "hop settled", hop, amount, settlement.amount);

                sqrt_price_x96_after_list.set(hop, settlement.sqrt_price_x96_after);
                initialized_ticks_crossed_list.set(hop, settlement.initialized_ticks_crossed);
                gas_estimate = gas_estimate.saturating_add(settlement.gas_estimate);

                WalkState::Settled {
                    hop,
                    amount: settlement.amount,
                }
            }
            WalkState::Settled { hop, amount } => match direction.next_hop(hop, hop_count) {
                Some(next) => WalkState::Pending { hop: next, amount },
                None => WalkState::Complete { amount },
            },
            WalkState::Complete { amount } => break amount,
        };
    };

    let amount = i128::try_from(final_amount).map_err(|_| DexError::ArithmeticOverflow)?;
    log!(env, "route quoted", hop_count, amount, gas_estimate);

    Ok(RouteQuote {
        amount,
        sqrt_price_x96_after_list,
        initialized_ticks_crossed_list,
        gas_estimate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_input_walks_forward() {
        let d = Direction::ExactInput;
        assert_eq!(d.first_hop(3), 0);
        assert_eq!(d.next_hop(0, 3), Some(1));
        assert_eq!(d.next_hop(1, 3), Some(2));
        assert_eq!(d.next_hop(2, 3), None);
    }

    #[test]
    fn test_exact_output_walks_backward() {
        let d = Direction::ExactOutput;
        assert_eq!(d.first_hop(3), 2);
        assert_eq!(d.next_hop(2, 3), Some(1));
        assert_eq!(d.next_hop(1, 3), Some(0));
        assert_eq!(d.next_hop(0, 3), None);
    }

    #[test]
    fn test_single_hop_route_completes_immediately() {
        assert_eq!(Direction::ExactInput.next_hop(0, 1), None);
        assert_eq!(Direction::ExactOutput.first_hop(1), 0);
        assert_eq!(Direction::ExactOutput.next_hop(0, 1), None);
    }
}
