use soroban_sdk::{contracttype, Address};

use crate::Fee;

/// Pool design a hop is routed through
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PoolKind {
    /// `x * y = k` pair with the fixed 0.3% fee
    ConstantProduct,
    /// Concentrated-liquidity pool at the given fee tier
    ConcentratedLiquidity(Fee),
}

/// Explicit per-hop protocol flag, one byte each in a flag string
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Protocol {
    ConstantProduct = 0,
    ConcentratedLiquidity = 1,
}

impl Protocol {
    pub fn flag_byte(self) -> u8 {
        self as u8
    }

    pub fn from_flag_byte(byte: u8) -> Option<Protocol> {
        match byte {
            0x00 => Some(Protocol::ConstantProduct),
            0x01 => Some(Protocol::ConcentratedLiquidity),
            _ => None,
        }
    }
}

impl PoolKind {
    pub fn protocol(&self) -> Protocol {
        match self {
            PoolKind::ConstantProduct => Protocol::ConstantProduct,
            PoolKind::ConcentratedLiquidity(_) => Protocol::ConcentratedLiquidity,
        }
    }
}

/// One decoded step of a route
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hop {
    pub token_in: Address,
    pub token_out: Address,
    pub pool: PoolKind,
}
