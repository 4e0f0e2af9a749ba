//! Quote - Currency Buy/Sell Prices
//!
//! Field names on the wire follow dolarapi.com (`nombre`, `compra`, `venta`).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Buy/sell price pair for a currency against the Argentine peso
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Display name (e.g. "Dólar Blue")
    #[serde(rename = "nombre")]
    pub name: String,
    /// Buy price in ARS
    #[serde(rename = "compra")]
    pub buy: Decimal,
    /// Sell price in ARS
    #[serde(rename = "venta")]
    pub sell: Decimal,
}

impl Quote {
    pub fn new(name: impl Into<String>, buy: Decimal, sell: Decimal) -> Self {
        Self {
            name: name.into(),
            buy,
            sell,
        }
    }
}

/// Quotes shown until a live fetch replaces them
pub fn mock_quotes() -> Vec<Quote> {
    vec![
        Quote::new("Dólar Oficial", dec!(1270.00), dec!(1310.00)),
        Quote::new("Dólar Blue", dec!(1320.00), dec!(1340.00)),
        Quote::new("Euro", dec!(1493.73), dec!(1507.44)),
        Quote::new("Real", dec!(234.55), dec!(234.68)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_quotes() {
        let quotes = mock_quotes();
        assert_eq!(quotes.len(), 4);
        assert_eq!(quotes[0].name, "Dólar Oficial");
        assert_eq!(quotes[3].sell, dec!(234.68));
    }

    #[test]
    fn test_deserialize_dolarapi_payload() {
        let json = r#"{
            "moneda": "USD",
            "casa": "blue",
            "nombre": "Blue",
            "compra": 1320,
            "venta": 1340.5,
            "fechaActualizacion": "2025-08-18T14:00:00.000Z"
        }"#;
        let quote: Quote = serde_json::from_str(json).expect("valid payload");
        assert_eq!(quote.name, "Blue");
        assert_eq!(quote.buy, dec!(1320));
        assert_eq!(quote.sell, dec!(1340.5));
    }

    #[test]
    fn test_deserialize_missing_field_fails() {
        let json = r#"{ "nombre": "Euro", "compra": 1493 }"#;
        assert!(serde_json::from_str::<Quote>(json).is_err());
    }
}
