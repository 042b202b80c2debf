use dex_types::{DexError, Hop, PoolKind, Protocol, V2_FEE_SENTINEL};
use soroban_sdk::{Bytes, Env, Vec};

use crate::path::{fee_at, num_pools, token_at};

/// How a route marks which pool design each hop uses
#[derive(Clone, Debug)]
pub enum ProtocolSelector {
    /// The fee field itself: bit 23 set means constant-product
    EmbeddedSentinel,
    /// One flag byte per hop, `0x01` concentrated-liquidity, `0x00` constant-product
    ExplicitFlags(Bytes),
}

/// Classify a fee field under the embedded-sentinel scheme
pub fn pool_kind_for_fee(fee: u32) -> PoolKind {
    if fee & V2_FEE_SENTINEL != 0 {
        PoolKind::ConstantProduct
    } else {
        PoolKind::ConcentratedLiquidity(fee)
    }
}

impl ProtocolSelector {
    fn pool_kind(&self, hop: u32, fee: u32) -> Result<PoolKind, DexError> {
        match self {
            ProtocolSelector::EmbeddedSentinel => Ok(pool_kind_for_fee(fee)),
            ProtocolSelector::ExplicitFlags(flags) => {
                match Protocol::from_flag_byte(flags.get_unchecked(hop)) {
                    Some(Protocol::ConcentratedLiquidity) => Ok(PoolKind::ConcentratedLiquidity(fee)),
                    Some(Protocol::ConstantProduct) => Ok(PoolKind::ConstantProduct),
                    None => Err(DexError::InvalidProtocolFlag),
                }
            }
        }
    }
}

/// Decode a route into its ordered hops
pub fn decode_route(
    env: &Env,
    route: &Bytes,
    selector: &ProtocolSelector,
) -> Result<Vec<Hop>, DexError> {
    let pools = num_pools(route)?;
    if let ProtocolSelector::ExplicitFlags(flags) = selector {
        if flags.len() != pools {
            return Err(DexError::SelectorCountMismatch);
        }
    }

    let mut hops = Vec::new(env);
    let mut token_in = token_at(route, 0)?;
    for hop in 0..pools {
        let token_out = token_at(route, hop + 1)?;
        let pool = selector.pool_kind(hop, fee_at(route, hop)?)?;
        hops.push_back(Hop {
            token_in,
            token_out: token_out.clone(),
            pool,
        });
        token_in = token_out;
    }
    Ok(hops)
}

/// One flag byte per protocol, in order
pub fn encode_protocol_flags(env: &Env, protocols: &Vec<Protocol>) -> Bytes {
    let mut flags = Bytes::new(env);
    for protocol in protocols.iter() {
        flags.push_back(protocol.flag_byte());
    }
    flags
}

pub fn decode_protocol_flags(env: &Env, flags: &Bytes) -> Result<Vec<Protocol>, DexError> {
    let mut protocols = Vec::new(env);
    for byte in flags.iter() {
        protocols.push_back(Protocol::from_flag_byte(byte).ok_or(DexError::InvalidProtocolFlag)?);
    }
    Ok(protocols)
}
