//! Minimal factories, pairs and pools the quoter can be pointed at in tests.

pub mod concentrated_factory {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

    #[contracttype]
    #[derive(Clone)]
    pub enum DataKey {
        Pool(Address, Address, u32),
    }

    #[contract]
    pub struct MockConcentratedFactory;

    #[contractimpl]
    impl MockConcentratedFactory {
        /// Tokens must be passed sorted, the way the quoter looks them up
        pub fn register_pool(env: Env, token0: Address, token1: Address, fee: u32, pool: Address) {
            env.storage()
                .instance()
                .set(&DataKey::Pool(token0, token1, fee), &pool);
        }

        pub fn get_pool(env: Env, token_a: Address, token_b: Address, fee: u32) -> Option<Address> {
            env.storage()
                .instance()
                .get(&DataKey::Pool(token_a, token_b, fee))
        }
    }
}

pub mod constant_product_factory {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

    #[contracttype]
    #[derive(Clone)]
    pub enum DataKey {
        Pair(Address, Address),
    }

    #[contract]
    pub struct MockConstantProductFactory;

    #[contractimpl]
    impl MockConstantProductFactory {
        pub fn register_pair(env: Env, token0: Address, token1: Address, pair: Address) {
            env.storage()
                .instance()
                .set(&DataKey::Pair(token0, token1), &pair);
        }

        pub fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address> {
            env.storage().instance().get(&DataKey::Pair(token_a, token_b))
        }
    }
}

pub mod pair {
    use soroban_sdk::{contract, contractimpl, contracttype, Env};

    #[contracttype]
    #[derive(Clone)]
    pub enum DataKey {
        Reserves,
    }

    #[contract]
    pub struct MockPair;

    #[contractimpl]
    impl MockPair {
        pub fn set_reserves(env: Env, reserve0: i128, reserve1: i128) {
            env.storage()
                .instance()
                .set(&DataKey::Reserves, &(reserve0, reserve1));
        }

        pub fn get_reserves(env: Env) -> (i128, i128) {
            env.storage()
                .instance()
                .get(&DataKey::Reserves)
                .unwrap_or((0, 0))
        }
    }
}

pub mod pool {
    use dex_math::tick_bitmap::flip_mask;
    use dex_types::{PoolState, TickInfo};
    use soroban_sdk::{contract, contractimpl, contracttype, Env};

    #[contracttype]
    #[derive(Clone)]
    pub enum DataKey {
        State,
        Fee,
        TickSpacing,
        Word(i32),
        Tick(i32),
    }

    /// Concentrated-liquidity pool whose ticks are written directly
    #[contract]
    pub struct MockConcentratedPool;

    #[contractimpl]
    impl MockConcentratedPool {
        pub fn setup(env: Env, sqrt_price_x96: u128, tick: i32, liquidity: u128, fee: u32, tick_spacing: i32) {
            let storage = env.storage().instance();
            storage.set(&DataKey::State, &PoolState::new(sqrt_price_x96, tick, liquidity));
            storage.set(&DataKey::Fee, &fee);
            storage.set(&DataKey::TickSpacing, &tick_spacing);
        }

        /// Initialize `tick` with the given net liquidity
        pub fn set_tick(env: Env, tick: i32, liquidity_net: i128) {
            let storage = env.storage().instance();
            let tick_spacing: i32 = storage.get(&DataKey::TickSpacing).unwrap();
            let existing: Option<TickInfo> = storage.get(&DataKey::Tick(tick));

            if existing.is_none() {
                let (word_pos, mask) = flip_mask(tick, tick_spacing).unwrap();
                let word: u128 = storage.get(&DataKey::Word(word_pos)).unwrap_or(0);
                storage.set(&DataKey::Word(word_pos), &(word ^ mask));
            }

            let info = TickInfo {
                liquidity_gross: liquidity_net.unsigned_abs(),
                liquidity_net,
                initialized: true,
            };
            storage.set(&DataKey::Tick(tick), &info);
        }

        pub fn get_state(env: Env) -> PoolState {
            env.storage().instance().get(&DataKey::State).unwrap()
        }

        pub fn fee(env: Env) -> u32 {
            env.storage().instance().get(&DataKey::Fee).unwrap()
        }

        pub fn tick_spacing(env: Env) -> i32 {
            env.storage().instance().get(&DataKey::TickSpacing).unwrap()
        }

        pub fn tick_bitmap(env: Env, word_pos: i32) -> u128 {
            env.storage()
                .instance()
                .get(&DataKey::Word(word_pos))
                .unwrap_or(0)
        }

        pub fn get_tick(env: Env, tick: i32) -> TickInfo {
            env.storage()
                .instance()
                .get(&DataKey::Tick(tick))
                .unwrap_or_default()
        }
    }
}

pub use concentrated_factory::{MockConcentratedFactory, MockConcentratedFactoryClient};
pub use constant_product_factory::{MockConstantProductFactory, MockConstantProductFactoryClient};
pub use pair::{MockPair, MockPairClient};
pub use pool::{MockConcentratedPool, MockConcentratedPoolClient};
