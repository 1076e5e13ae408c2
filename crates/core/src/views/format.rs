use crate::models::assetable::Assetable;
use crate::models::Instant;

/// Label used in the transactions table.
pub fn assetable_label(assetable: &Assetable) -> String {
    match assetable {
        Assetable::Etf(ticker) => format!("ETF {ticker}"),
        Assetable::Treasury(code) => format!("LFT {code}"),
    }
}

/// Label used in the position table. All treasuries held are SELIC bonds.
pub fn position_label(assetable: &Assetable) -> String {
    match assetable {
        Assetable::Treasury(_) => "Tesouro SELIC".to_string(),
        Assetable::Etf(ticker) => format!("ETF {ticker}"),
    }
}

pub fn format_quantity(quantity: f64) -> String {
    format!("{quantity:.8}")
}

pub fn format_price(price: f64) -> String {
    format!("{price:.8}")
}

pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

pub fn format_date(date: &Instant) -> String {
    date.format("%Y-%m-%d").to_string()
}
