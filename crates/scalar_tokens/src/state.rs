//! Process-wide token state
//!
//! Holds the token set used by the crate-level facade functions. It is set
//! once at startup and never changes afterwards; components that need other
//! tables should build a [`Resolver`] over their own [`TokenSet`] instead.

use std::sync::OnceLock;

use tracing::debug;

use crate::resolver::{FallbackPolicy, Resolver};
use crate::set::TokenSet;

/// Global token state instance
static TOKEN_STATE: OnceLock<TokenState> = OnceLock::new();

/// Global token state - read by the facade functions at the crate root
#[derive(Debug)]
pub struct TokenState {
    tokens: TokenSet,
    fallback: FallbackPolicy,
}

impl TokenState {
    /// Initialize the global token state (call once at app startup).
    ///
    /// Safe to call multiple times; the first call wins. Returns `false` if
    /// the state was already initialized.
    pub fn init(tokens: TokenSet, fallback: FallbackPolicy) -> bool {
        debug!("TokenState::init - fallback policy {fallback}");
        TOKEN_STATE.set(TokenState { tokens, fallback }).is_ok()
    }

    /// Initialize with the built-in tables and the lenient fallback
    pub fn init_default() -> bool {
        Self::init(TokenSet::default(), FallbackPolicy::default())
    }

    /// Get the global token state, initializing it with the built-in tables
    /// if nothing was set yet
    pub fn get() -> &'static TokenState {
        TOKEN_STATE.get_or_init(|| {
            debug!("TokenState::get - not initialized, using built-in tokens");
            TokenState {
                tokens: TokenSet::default(),
                fallback: FallbackPolicy::default(),
            }
        })
    }

    /// Try to get the global token state (returns None if not initialized)
    pub fn try_get() -> Option<&'static TokenState> {
        TOKEN_STATE.get()
    }

    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.tokens).with_fallback(self.fallback)
    }
}
