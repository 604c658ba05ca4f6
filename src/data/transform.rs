use serde_json::Value;

use crate::{data::RawKline, domain::Candle, error::MarketError};

// Positional layout of a kline record. Binance appends volume and other
// fields after close; we ignore everything past index 4.
const FIELD_OPEN_TIME: usize = 0;
const FIELD_CLOSE: usize = 4;
const MIN_RECORD_FIELDS: usize = FIELD_CLOSE + 1;

/// Map raw kline records into normalized candles, same length and order.
///
/// An empty window is a contract violation: there is no current rate to
/// derive from it, so callers treat it like a failed fetch rather than a
/// valid empty chart.
pub fn candles_from_klines(records: &[RawKline]) -> Result<Vec<Candle>, MarketError> {
    if records.is_empty() {
        return Err(MarketError::MalformedData(
            "empty kline response".to_string(),
        ));
    }
    records.iter().map(candle_from_record).collect()
}

/// The current market rate: close of the most recent candle. Order
/// sensitive, the transformer preserves exchange (chronological) order.
pub fn latest_close(candles: &[Candle]) -> f64 {
    candles.last().map(|c| c.close).unwrap_or_default()
}

fn candle_from_record(record: &RawKline) -> Result<Candle, MarketError> {
    if record.len() < MIN_RECORD_FIELDS {
        return Err(MarketError::MalformedData(format!(
            "kline record has {} fields, expected at least {}",
            record.len(),
            MIN_RECORD_FIELDS
        )));
    }

    let open_time_ms = record[FIELD_OPEN_TIME].as_i64().ok_or_else(|| {
        MarketError::MalformedData(format!(
            "open_time is not an integer: {}",
            record[FIELD_OPEN_TIME]
        ))
    })?;

    // A field that fails to parse is a defect in the upstream contract;
    // the whole cycle fails rather than coercing to zero or NaN.
    let open = price_field(&record[1], "open")?;
    let high = price_field(&record[2], "high")?;
    let low = price_field(&record[3], "low")?;
    let close = price_field(&record[4], "close")?;

    Ok(Candle::new(open_time_ms, open, high, low, close))
}

fn price_field(value: &Value, name: &str) -> Result<f64, MarketError> {
    let text = value
        .as_str()
        .ok_or_else(|| MarketError::MalformedData(format!("{} is not a string: {}", name, value)))?;
    text.parse::<f64>()
        .map_err(|_| MarketError::MalformedData(format!("{} is not numeric: {:?}", name, text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(open_time: i64, o: &str, h: &str, l: &str, c: &str) -> RawKline {
        vec![json!(open_time), json!(o), json!(h), json!(l), json!(c)]
    }

    #[test]
    fn maps_one_record_field_for_field() {
        let raw = vec![record(
            1_700_000_000_000,
            "2000.00",
            "2010.00",
            "1995.00",
            "2005.00",
        )];
        let candles = candles_from_klines(&raw).unwrap();
        assert_eq!(
            candles,
            vec![Candle::new(1_700_000_000_000, 2000.0, 2010.0, 1995.0, 2005.0)]
        );
    }

    #[test]
    fn preserves_length_and_order() {
        let raw: Vec<RawKline> = (0..5)
            .map(|i| record(1_000 * i, "1", "2", "0.5", "1.5"))
            .collect();
        let candles = candles_from_klines(&raw).unwrap();
        assert_eq!(candles.len(), raw.len());
        let times: Vec<i64> = candles.iter().map(|c| c.open_time_ms).collect();
        assert_eq!(times, vec![0, 1_000, 2_000, 3_000, 4_000]);
    }

    #[test]
    fn ignores_trailing_exchange_fields() {
        let mut raw = record(1, "1", "2", "0.5", "1.5");
        raw.push(json!("123.45")); // volume
        raw.push(json!(999)); // close time
        let candles = candles_from_klines(std::slice::from_ref(&raw)).unwrap();
        assert_eq!(candles[0].close, 1.5);
    }

    #[test]
    fn empty_window_is_malformed() {
        let err = candles_from_klines(&[]).unwrap_err();
        assert!(matches!(err, MarketError::MalformedData(_)));
    }

    #[test]
    fn non_numeric_price_fails_the_cycle() {
        let raw = vec![record(1, "1", "not-a-number", "0.5", "1.5")];
        let err = candles_from_klines(&raw).unwrap_err();
        assert!(matches!(err, MarketError::MalformedData(_)));
    }

    #[test]
    fn numeric_json_price_is_rejected_not_coerced() {
        // Prices arrive as strings; a bare number violates the contract.
        let raw = vec![vec![json!(1), json!(1.0), json!("2"), json!("0.5"), json!("1.5")]];
        assert!(candles_from_klines(&raw).is_err());
    }

    #[test]
    fn short_record_is_malformed() {
        let raw = vec![vec![json!(1), json!("1"), json!("2")]];
        assert!(candles_from_klines(&raw).is_err());
    }

    #[test]
    fn latest_close_is_last_not_extreme() {
        let candles = vec![
            Candle::new(0, 1.0, 9.0, 0.5, 8.0),
            Candle::new(1, 8.0, 8.5, 1.5, 2.0),
        ];
        assert_eq!(latest_close(&candles), 2.0);
    }
}
