use serde_json::Value;

use super::{array, decode_slice, index_path, number, parse_date, string, Decode, Fields, WireContract};
use crate::errors::{DecodeError, DecodeErrorKind};
use crate::models::amount::PortfolioAmount;
use crate::models::position::{AssetPosition, PortfolioPosition};
use crate::models::transaction::Transaction;

impl Decode for Transaction {
    fn decode(value: &Value, path: &str, contract: WireContract) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(Transaction {
            assetable: fields.record("assetable", contract)?,
            date: fields.date("date")?,
            price: fields.number("price")?,
            quantity: fields.number("quantity")?,
            amount: fields.number("amount")?,
        })
    }
}

impl Decode for AssetPosition {
    fn decode(value: &Value, path: &str, contract: WireContract) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(AssetPosition {
            assetable: fields.record("assetable", contract)?,
            quantity: fields.number("quantity")?,
            amount: fields.number("amount")?,
            price: fields.number("price")?,
        })
    }
}

impl Decode for PortfolioPosition {
    fn decode(value: &Value, path: &str, contract: WireContract) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, path)?;
        Ok(PortfolioPosition {
            assets: fields.with("assets", |assets, assets_path| {
                decode_slice(array(assets, assets_path)?, assets_path, contract)
            })?,
            amount: fields.number("amount")?,
        })
    }
}

/// Wire form is the tuple `[date, invested, grossTotal]`.
impl Decode for PortfolioAmount {
    fn decode(value: &Value, path: &str, _contract: WireContract) -> Result<Self, DecodeError> {
        let items = array(value, path)?;
        let [date, invested, gross_total] = items else {
            return Err(DecodeError::new(
                path,
                DecodeErrorKind::WrongLength {
                    expected: 3,
                    found: items.len(),
                },
            ));
        };

        let date_path = index_path(path, 0);
        Ok(PortfolioAmount {
            date: parse_date(string(date, &date_path)?, &date_path)?,
            invested: number(invested, &index_path(path, 1))?,
            gross_total: number(gross_total, &index_path(path, 2))?,
        })
    }
}
