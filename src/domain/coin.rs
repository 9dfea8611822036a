//! Normalized record for a newly created pool.

use serde::Serialize;

use super::number::NumberLiteral;

/// Field names in the order sinks render them.
pub const FIELD_NAMES: [&str; 13] = [
    "chain",
    "address",
    "owner",
    "token0",
    "token1",
    "totalSupply",
    "createdAt",
    "liquidity",
    "email",
    "website",
    "twitter",
    "telegram",
    "description",
];

/// A newly created pool, as reported by the feed.
///
/// Only `chain` and `address` are guaranteed; every other field is `None`
/// when the feed did not provide it. Numbers keep the feed's literal text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinInfo {
    pub chain: String,
    pub address: String,
    pub owner: Option<String>,
    pub token0: Option<String>,
    pub token1: Option<String>,
    pub total_supply: Option<NumberLiteral>,
    pub created_at: Option<String>,
    pub liquidity: Option<NumberLiteral>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    pub description: Option<String>,
}

impl CoinInfo {
    /// Create a record with only the required fields set.
    pub fn new(chain: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            address: address.into(),
            owner: None,
            token0: None,
            token1: None,
            total_supply: None,
            created_at: None,
            liquidity: None,
            email: None,
            website: None,
            twitter: None,
            telegram: None,
            description: None,
        }
    }

    /// All fields paired with their names, in [`FIELD_NAMES`] order.
    ///
    /// Absent fields are yielded as `None`.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, Option<String>); 13] {
        let text = |value: &Option<String>| value.clone();
        let number = |value: &Option<NumberLiteral>| value.as_ref().map(NumberLiteral::to_string);
        [
            (FIELD_NAMES[0], Some(self.chain.clone())),
            (FIELD_NAMES[1], Some(self.address.clone())),
            (FIELD_NAMES[2], text(&self.owner)),
            (FIELD_NAMES[3], text(&self.token0)),
            (FIELD_NAMES[4], text(&self.token1)),
            (FIELD_NAMES[5], number(&self.total_supply)),
            (FIELD_NAMES[6], text(&self.created_at)),
            (FIELD_NAMES[7], number(&self.liquidity)),
            (FIELD_NAMES[8], text(&self.email)),
            (FIELD_NAMES[9], text(&self.website)),
            (FIELD_NAMES[10], text(&self.twitter)),
            (FIELD_NAMES[11], text(&self.telegram)),
            (FIELD_NAMES[12], text(&self.description)),
        ]
    }

    /// Only the fields that carry a value, in [`FIELD_NAMES`] order.
    pub fn present_fields(&self) -> impl Iterator<Item = (&'static str, String)> {
        self.fields()
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| (name, value)))
    }

    /// Short human label for the pair, e.g. `BTC/USDT`.
    #[must_use]
    pub fn pair_label(&self) -> String {
        format!(
            "{}/{}",
            self.token0.as_deref().unwrap_or("?"),
            self.token1.as_deref().unwrap_or("?")
        )
    }
}
