//! Carbon price and exchange rate inputs.
//!
//! Live quotes come from an external oracle the engine never calls itself.
//! Whatever the oracle fails to supply is replaced by the reference values
//! before the engine runs, so the engine only ever sees plain numbers.

use bevy::log::warn;
use serde::{Deserialize, Serialize};

/// Reference EU allowance price used when no live quote is available (€/tCO2eq).
pub const REFERENCE_CARBON_PRICE: f64 = 85.50;

/// Reference EUR to BRL rate used when no live quote is available.
pub const REFERENCE_FX_RATE: f64 = 5.50;

pub const REFERENCE_CARBON_CURRENCY: &str = "€";
pub const REFERENCE_LOCAL_CURRENCY: &str = "R$";
pub const REFERENCE_SOURCE: &str = "Reference";

/// Price of one tonne of CO2eq in the reference currency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarbonQuote {
    pub price_per_tonne: f64,
    pub currency: String,
    pub source: String,
    /// True when the price came from a live market source.
    pub live: bool,
}

impl CarbonQuote {
    pub fn reference() -> Self {
        Self {
            price_per_tonne: REFERENCE_CARBON_PRICE,
            currency: REFERENCE_CARBON_CURRENCY.to_string(),
            source: REFERENCE_SOURCE.to_string(),
            live: false,
        }
    }
}

/// Units of local currency per unit of the reference currency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FxQuote {
    pub rate: f64,
    pub currency: String,
    pub source: String,
    pub live: bool,
}

impl FxQuote {
    pub fn reference() -> Self {
        Self {
            rate: REFERENCE_FX_RATE,
            currency: REFERENCE_LOCAL_CURRENCY.to_string(),
            source: REFERENCE_SOURCE.to_string(),
            live: false,
        }
    }
}

/// Best-effort source of live quotes. `None` means unavailable.
pub trait PricingOracle {
    fn carbon_quote(&self) -> Option<CarbonQuote>;
    fn fx_quote(&self) -> Option<FxQuote>;
}

/// Oracle that never has a live quote; every lookup resolves to the reference.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferencePricing;

impl PricingOracle for ReferencePricing {
    fn carbon_quote(&self) -> Option<CarbonQuote> {
        None
    }

    fn fx_quote(&self) -> Option<FxQuote> {
        None
    }
}

/// Resolved pricing handed to the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub carbon: CarbonQuote,
    pub fx: FxQuote,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            carbon: CarbonQuote::reference(),
            fx: FxQuote::reference(),
        }
    }
}

impl Pricing {
    /// Ask `oracle` for both quotes, substituting references for any it lacks.
    ///
    /// Non-finite or non-positive quotes count as missing.
    pub fn resolve(oracle: &dyn PricingOracle) -> Self {
        let carbon = match oracle.carbon_quote() {
            Some(q) if q.price_per_tonne.is_finite() && q.price_per_tonne > 0.0 => q,
            _ => {
                warn!(
                    "Carbon price unavailable, using reference {} {:.2}/tCO2eq",
                    REFERENCE_CARBON_CURRENCY, REFERENCE_CARBON_PRICE
                );
                CarbonQuote::reference()
            }
        };
        let fx = match oracle.fx_quote() {
            Some(q) if q.rate.is_finite() && q.rate > 0.0 => q,
            _ => {
                warn!(
                    "Exchange rate unavailable, using reference {} {:.2}",
                    REFERENCE_LOCAL_CURRENCY, REFERENCE_FX_RATE
                );
                FxQuote::reference()
            }
        };
        Self { carbon, fx }
    }

    /// Carbon price converted to the local currency.
    pub fn local_price_per_tonne(&self) -> f64 {
        self.carbon.price_per_tonne * self.fx.rate
    }

    pub fn value_of(&self, avoided_tco2eq: f64) -> CreditValue {
        CreditValue {
            reference_currency: credit_value(avoided_tco2eq, self.carbon.price_per_tonne, 1.0),
            local_currency: credit_value(avoided_tco2eq, self.carbon.price_per_tonne, self.fx.rate),
        }
    }
}

/// Value of avoided emissions, `avoided * price * fx`. No clamping.
pub fn credit_value(avoided_tco2eq: f64, price_per_tonne: f64, fx_rate: f64) -> f64 {
    avoided_tco2eq * price_per_tonne * fx_rate
}

/// Credit value in the reference and the local currency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditValue {
    pub reference_currency: f64,
    pub local_currency: f64,
}
