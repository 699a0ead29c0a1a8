//! Reporting service: fetch rows + rates, delegate the arithmetic

use super::aggregate::{self, DayOverview};
use crate::db::Database;
use crate::error::WalletError;
use crate::ledger::{LedgerEntry, LedgerRepository};
use crate::rates::RateProvider;
use crate::wallet::WalletRepository;
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Monthly position normalized into the settlement currency
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialOverview {
    pub settlement_currency: String,
    pub total_balance: Decimal,
    pub monthly_incoming: Decimal,
    pub monthly_outgoing: Decimal,
}

pub struct ReportingService;

impl ReportingService {
    /// Sum all of the user's wallet balances and the current calendar
    /// month's successful transfers (incoming vs. outgoing), each
    /// normalized into `settlement`.
    pub async fn financial_overview(
        db: &Database,
        rates: &RateProvider,
        settlement: &str,
        user_id: i64,
    ) -> Result<FinancialOverview, WalletError> {
        let wallets = WalletRepository::list_for_owner(db.pool(), user_id).await?;
        let numbers: Vec<String> = wallets.iter().map(|w| w.wallet_number.clone()).collect();
        let owned: HashSet<String> = numbers.iter().cloned().collect();

        let mut balances: HashMap<String, Decimal> = HashMap::new();
        for wallet in &wallets {
            *balances.entry(wallet.currency.clone()).or_default() += wallet.balance;
        }

        let (month_start, month_end) = current_month_window(Utc::now());
        let entries =
            LedgerRepository::list_touching_wallets(db.pool(), &numbers, month_start, month_end)
                .await?;

        let mut incoming: HashMap<String, Decimal> = HashMap::new();
        let mut outgoing: HashMap<String, Decimal> = HashMap::new();
        for entry in &entries {
            if owned.contains(&entry.recipient_wallet) {
                *incoming.entry(entry.recipient_currency.clone()).or_default() +=
                    entry.amount_received;
            }
            if owned.contains(&entry.sender_wallet) {
                *outgoing.entry(entry.sender_currency.clone()).or_default() += entry.amount_sent;
            }
        }

        let rate_map = settlement_rates(
            rates,
            settlement,
            [&balances, &incoming, &outgoing]
                .iter()
                .flat_map(|m| m.keys().cloned())
                .collect(),
        )
        .await?;

        Ok(FinancialOverview {
            settlement_currency: settlement.to_string(),
            total_balance: aggregate::sum_in_settlement(&balances, &rate_map, settlement)?,
            monthly_incoming: aggregate::sum_in_settlement(&incoming, &rate_map, settlement)?,
            monthly_outgoing: aggregate::sum_in_settlement(&outgoing, &rate_map, settlement)?,
        })
    }

    /// One bucket per UTC calendar day for the trailing 7 days (today
    /// inclusive), each converted into `settlement`. Days without
    /// activity appear with zero totals.
    pub async fn last_7_days_overview(
        db: &Database,
        rates: &RateProvider,
        settlement: &str,
        user_id: i64,
    ) -> Result<Vec<DayOverview>, WalletError> {
        let wallets = WalletRepository::list_for_owner(db.pool(), user_id).await?;
        let numbers: Vec<String> = wallets.iter().map(|w| w.wallet_number.clone()).collect();
        let owned: HashSet<String> = numbers.iter().cloned().collect();

        let today = Utc::now().date_naive();
        let window_start = start_of_day(today - Days::new(6));
        let window_end = start_of_day(today + Days::new(1));

        let entries =
            LedgerRepository::list_touching_wallets(db.pool(), &numbers, window_start, window_end)
                .await?;

        let buckets = aggregate::bucket_last_7_days(&entries, &owned, today);
        let rate_map =
            settlement_rates(rates, settlement, currencies_in(&entries)).await?;

        aggregate::settle_day_buckets(buckets, &rate_map, settlement)
    }
}

/// Resolve each currency's settlement rate once per report
async fn settlement_rates(
    rates: &RateProvider,
    settlement: &str,
    currencies: HashSet<String>,
) -> Result<HashMap<String, Decimal>, WalletError> {
    let mut map = HashMap::new();
    for currency in currencies {
        let rate = rates.rate(&currency, settlement).await?;
        map.insert(currency, rate);
    }
    Ok(map)
}

fn currencies_in(entries: &[LedgerEntry]) -> HashSet<String> {
    entries
        .iter()
        .flat_map(|e| [e.sender_currency.clone(), e.recipient_currency.clone()])
        .collect()
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Half-open UTC window covering the current calendar month
fn current_month_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let today = now.date_naive();
    let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    let next_first = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    }
    .unwrap_or(first);
    (start_of_day(first), start_of_day(next_first))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_window_mid_year() {
        let now = Utc.with_ymd_and_hms(2025, 3, 15, 10, 30, 0).unwrap();
        let (start, end) = current_month_window(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_month_window_december_rolls_over() {
        let now = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap();
        let (start, end) = current_month_window(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_start_of_day_is_utc_midnight() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(
            start_of_day(date),
            Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap()
        );
    }
}
