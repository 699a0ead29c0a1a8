//! Pure aggregation arithmetic
//!
//! Policy: accumulate per currency, convert each per-currency subtotal
//! once, sum, round half-even to the ledger scale at the end. One policy
//! for every report, applied nowhere else.

use crate::error::WalletError;
use crate::ledger::{LedgerEntry, TransferStatus};
use crate::money;
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Per-currency activity for one calendar day (UTC)
#[derive(Debug, Clone, PartialEq)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub incoming: HashMap<String, Decimal>,
    pub expense: HashMap<String, Decimal>,
}

/// Settled totals for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOverview {
    pub date: NaiveDate,
    pub incoming: Decimal,
    pub expense: Decimal,
}

/// Bucket successful entries into the trailing 7 UTC calendar days
/// (today inclusive), oldest day first.
///
/// An entry where the user is the recipient counts as incoming
/// (`amount_received` in the recipient currency), where the user is the
/// sender as expense (`amount_sent` in the sender currency). Entries
/// where the user is both are excluded from both sides. Days without
/// activity still get a bucket.
pub fn bucket_last_7_days(
    entries: &[LedgerEntry],
    owned_wallets: &HashSet<String>,
    today: NaiveDate,
) -> Vec<DayActivity> {
    let mut buckets: Vec<DayActivity> = (0..7)
        .rev()
        .map(|back| DayActivity {
            date: today - Days::new(back),
            incoming: HashMap::new(),
            expense: HashMap::new(),
        })
        .collect();

    for entry in entries {
        if entry.status != TransferStatus::Success {
            continue;
        }
        let date = entry.created_at.date_naive();
        let Some(bucket) = buckets.iter_mut().find(|b| b.date == date) else {
            continue;
        };

        let sender_owned = owned_wallets.contains(&entry.sender_wallet);
        let recipient_owned = owned_wallets.contains(&entry.recipient_wallet);
        if sender_owned && recipient_owned {
            // Self-transfer: neither income nor expense
            continue;
        }
        if recipient_owned {
            *bucket
                .incoming
                .entry(entry.recipient_currency.clone())
                .or_default() += entry.amount_received;
        } else if sender_owned {
            *bucket
                .expense
                .entry(entry.sender_currency.clone())
                .or_default() += entry.amount_sent;
        }
    }

    buckets
}

/// Convert each day's per-currency totals into the settlement currency.
///
/// `rates` maps a currency code to its settlement rate; a currency with
/// no mapping surfaces as `RateUnavailable`.
pub fn settle_day_buckets(
    buckets: Vec<DayActivity>,
    rates: &HashMap<String, Decimal>,
    settlement: &str,
) -> Result<Vec<DayOverview>, WalletError> {
    buckets
        .into_iter()
        .map(|bucket| {
            Ok(DayOverview {
                date: bucket.date,
                incoming: sum_in_settlement(&bucket.incoming, rates, settlement)?,
                expense: sum_in_settlement(&bucket.expense, rates, settlement)?,
            })
        })
        .collect()
}

/// Convert per-currency totals into the settlement currency and sum.
/// Rounds once, at the end, half-even to the ledger scale.
pub fn sum_in_settlement(
    totals: &HashMap<String, Decimal>,
    rates: &HashMap<String, Decimal>,
    settlement: &str,
) -> Result<Decimal, WalletError> {
    let mut sum = Decimal::ZERO;
    for (currency, total) in totals {
        let rate = rates.get(currency).ok_or_else(|| WalletError::RateUnavailable {
            from: currency.clone(),
            to: settlement.to_string(),
        })?;
        sum += total * rate;
    }
    Ok(money::round_to_ledger(sum))
}
