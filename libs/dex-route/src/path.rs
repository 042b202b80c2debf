use dex_types::DexError;
use soroban_sdk::{Address, Bytes, Env, Vec};
use stellar_strkey::Strkey;

/// Width of an encoded token (Stellar strkey, `G...` or `C...`)
pub const TOKEN_WIDTH: u32 = 56;
/// Width of the fee / selector field
pub const FEE_WIDTH: u32 = 3;
/// Offset between consecutive tokens
pub const HOP_WIDTH: u32 = FEE_WIDTH + TOKEN_WIDTH;
/// Length of a single-pool route
pub const SINGLE_POOL_LENGTH: u32 = TOKEN_WIDTH + HOP_WIDTH;

/// Largest value the fee field can carry
pub const MAX_FEE_FIELD: u32 = (1 << 24) - 1;

/// Number of pools in the route
pub fn num_pools(route: &Bytes) -> Result<u32, DexError> {
    let len = route.len();
    if len < SINGLE_POOL_LENGTH || (len - TOKEN_WIDTH) % HOP_WIDTH != 0 {
        return Err(DexError::MalformedRoute);
    }
    Ok((len - TOKEN_WIDTH) / HOP_WIDTH)
}

pub fn has_multiple_pools(route: &Bytes) -> Result<bool, DexError> {
    Ok(num_pools(route)? > 1)
}

/// Token at position `index` (0 = route input)
pub fn token_at(route: &Bytes, index: u32) -> Result<Address, DexError> {
    let start = index * HOP_WIDTH;
    if start + TOKEN_WIDTH > route.len() {
        return Err(DexError::MalformedRoute);
    }
    let strkey = route.slice(start..start + TOKEN_WIDTH);

    // The host traps on a strkey it cannot decode, so check it here first
    let mut buf = [0u8; TOKEN_WIDTH as usize];
    strkey.copy_into_slice(&mut buf);
    let text = core::str::from_utf8(&buf).map_err(|_| DexError::MalformedRoute)?;
    match Strkey::from_string(text) {
        Ok(Strkey::PublicKeyEd25519(_)) | Ok(Strkey::Contract(_)) => {
            Ok(Address::from_string_bytes(&strkey))
        }
        _ => Err(DexError::MalformedRoute),
    }
}

/// Fee field of hop `hop` (0-based), big-endian
pub fn fee_at(route: &Bytes, hop: u32) -> Result<u32, DexError> {
    let start = TOKEN_WIDTH + hop * HOP_WIDTH;
    if start + FEE_WIDTH > route.len() {
        return Err(DexError::MalformedRoute);
    }
    Ok(((route.get_unchecked(start) as u32) << 16)
        | ((route.get_unchecked(start + 1) as u32) << 8)
        | route.get_unchecked(start + 2) as u32)
}

/// First pool of the route as (token_in, fee field, token_out)
pub fn decode_first_pool(route: &Bytes) -> Result<(Address, u32, Address), DexError> {
    num_pools(route)?;
    Ok((token_at(route, 0)?, fee_at(route, 0)?, token_at(route, 1)?))
}

/// Route with its first token and fee removed
pub fn skip_token(route: &Bytes) -> Result<Bytes, DexError> {
    num_pools(route)?;
    Ok(route.slice(HOP_WIDTH..))
}

/// Append a token's strkey
fn push_token(route: &mut Bytes, token: &Address) -> Result<(), DexError> {
    let strkey = token.to_string();
    if strkey.len() != TOKEN_WIDTH {
        return Err(DexError::MalformedRoute);
    }
    let mut buf = [0u8; TOKEN_WIDTH as usize];
    strkey.copy_into_slice(&mut buf);
    route.extend_from_slice(&buf);
    Ok(())
}

/// Build a route from its tokens and the fee field between each pair
pub fn encode_route(env: &Env, tokens: &Vec<Address>, fees: &Vec<u32>) -> Result<Bytes, DexError> {
    if fees.is_empty() || tokens.len() != fees.len() + 1 {
        return Err(DexError::MalformedRoute);
    }

    let mut route = Bytes::new(env);
    push_token(&mut route, &tokens.get_unchecked(0))?;
    for (i, fee) in fees.iter().enumerate() {
        if fee > MAX_FEE_FIELD {
            return Err(DexError::MalformedRoute);
        }
        route.extend_from_slice(&[(fee >> 16) as u8, (fee >> 8) as u8, fee as u8]);
        push_token(&mut route, &tokens.get_unchecked(i as u32 + 1))?;
    }
    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dex_types::V2_FEE_SENTINEL;
    use soroban_sdk::{testutils::Address as _, vec};

    fn tokens(env: &Env, n: u32) -> Vec<Address> {
        let mut out = Vec::new(env);
        for _ in 0..n {
            out.push_back(Address::generate(env));
        }
        out
    }

    #[test]
    fn test_route_length_matches_hop_count() {
        let env = Env::default();
        for hops in 1..=4u32 {
            let tokens = tokens(&env, hops + 1);
            let mut fees = Vec::new(&env);
            for _ in 0..hops {
                fees.push_back(3000);
            }
            let route = encode_route(&env, &tokens, &fees).unwrap();
            assert_eq!(route.len(), TOKEN_WIDTH + hops * HOP_WIDTH);
            assert_eq!(num_pools(&route), Ok(hops));
            assert_eq!(has_multiple_pools(&route), Ok(hops > 1));
        }
    }

    #[test]
    fn test_num_pools_rejects_bad_lengths() {
        let env = Env::default();
        for len in [0u32, 1, 56, 58, 114, 116, 173, 200] {
            let route = Bytes::from_slice(&env, &[b'C'; 256][..len as usize]);
            assert_eq!(num_pools(&route), Err(DexError::MalformedRoute), "len {}", len);
        }
        // a lone token is not a route
        let lone = Bytes::from_slice(&env, &[b'C'; 56]);
        assert_eq!(num_pools(&lone), Err(DexError::MalformedRoute));
    }

    #[test]
    fn test_decode_first_pool_and_skip_token() {
        let env = Env::default();
        let tokens = tokens(&env, 3);
        let route = encode_route(&env, &tokens, &vec![&env, 500, V2_FEE_SENTINEL]).unwrap();

        let (a, fee, b) = decode_first_pool(&route).unwrap();
        assert_eq!(a, tokens.get_unchecked(0));
        assert_eq!(fee, 500);
        assert_eq!(b, tokens.get_unchecked(1));

        let rest = skip_token(&route).unwrap();
        assert_eq!(num_pools(&rest), Ok(1));
        let (a, fee, b) = decode_first_pool(&rest).unwrap();
        assert_eq!(a, tokens.get_unchecked(1));
        assert_eq!(fee, V2_FEE_SENTINEL);
        assert_eq!(b, tokens.get_unchecked(2));
    }

    #[test]
    fn test_fee_is_big_endian() {
        let env = Env::default();
        let tokens = tokens(&env, 2);
        let route = encode_route(&env, &tokens, &vec![&env, 0x0b_b8]).unwrap();
        assert_eq!(route.get_unchecked(TOKEN_WIDTH), 0x00);
        assert_eq!(route.get_unchecked(TOKEN_WIDTH + 1), 0x0b);
        assert_eq!(route.get_unchecked(TOKEN_WIDTH + 2), 0xb8);

        let route = encode_route(&env, &tokens, &vec![&env, V2_FEE_SENTINEL]).unwrap();
        assert_eq!(route.get_unchecked(TOKEN_WIDTH), 0x80);
        assert_eq!(fee_at(&route, 0), Ok(8_388_608));
    }

    #[test]
    fn test_encode_route_rejects_mismatched_inputs() {
        let env = Env::default();
        let tokens = tokens(&env, 3);
        assert_eq!(
            encode_route(&env, &tokens, &vec![&env, 3000]),
            Err(DexError::MalformedRoute)
        );
        assert_eq!(
            encode_route(&env, &tokens, &Vec::new(&env)),
            Err(DexError::MalformedRoute)
        );
        assert_eq!(
            encode_route(&env, &tokens, &vec![&env, 3000, 1 << 24]),
            Err(DexError::MalformedRoute)
        );
    }

    #[test]
    fn test_token_at_rejects_unknown_prefix() {
        let env = Env::default();
        let mut raw = [b'X'; 115];
        raw[56] = 0;
        raw[57] = 0x0b;
        raw[58] = 0xb8;
        let route = Bytes::from_slice(&env, &raw);
        assert_eq!(num_pools(&route), Ok(1));
        assert_eq!(token_at(&route, 0), Err(DexError::MalformedRoute));
    }

    #[test]
    fn test_token_at_rejects_bad_strkey_body() {
        let env = Env::default();
        let mut raw = [b'C'; 115];
        raw[56] = 0;
        raw[57] = 0x0b;
        raw[58] = 0xb8;
        let route = Bytes::from_slice(&env, &raw);
        assert_eq!(num_pools(&route), Ok(1));
        assert_eq!(token_at(&route, 0), Err(DexError::MalformedRoute));
        assert_eq!(decode_first_pool(&route), Err(DexError::MalformedRoute));
    }

    #[test]
    fn test_token_at_rejects_bad_checksum() {
        let env = Env::default();
        let tokens = tokens(&env, 2);
        let mut fees = Vec::new(&env);
        fees.push_back(3000);
        let route = encode_route(&env, &tokens, &fees).unwrap();
        assert_eq!(token_at(&route, 1), Ok(tokens.get_unchecked(1)));

        // Flip the last checksum character of the second token
        let last = TOKEN_WIDTH + HOP_WIDTH - 1;
        let mut raw = [0u8; (TOKEN_WIDTH + HOP_WIDTH) as usize];
        route.copy_into_slice(&mut raw);
        raw[last as usize] = if raw[last as usize] == b'A' { b'B' } else { b'A' };
        let tampered = Bytes::from_slice(&env, &raw);

        assert_eq!(token_at(&tampered, 0), Ok(tokens.get_unchecked(0)));
        assert_eq!(token_at(&tampered, 1), Err(DexError::MalformedRoute));
    }
}
